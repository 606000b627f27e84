/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, TokenStreamExt, format_ident, quote};

use super::markup_doc_comment;
use crate::GENERATION_DISCLOSURE;
use crate::extract::schema::EnumSchema;
use crate::naming::pascalize;

/// A Graph API enumeration, ready for converting to a stream of tokens via
/// [`quote!`].
pub struct GraphEnum {
    name: Ident,
    description: Option<TokenStream>,
    variants: Vec<(Ident, String)>,
}

impl GraphEnum {
    pub fn new(schema: &EnumSchema) -> Self {
        let name = format_ident!("{}", pascalize(&schema.name));
        let description = schema.description.clone().map(|doc| {
            let doc = markup_doc_comment(doc);
            quote!(#[doc = #doc])
        });
        // Members aren't reliably camelCase ("iOS", "macOS"), so every variant
        // names its wire value.
        let variants = schema
            .members
            .iter()
            .map(|member| (format_ident!("{}", pascalize(member)), member.clone()))
            .collect();

        Self {
            name,
            description,
            variants,
        }
    }
}

impl ToTokens for GraphEnum {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            name,
            description,
            variants,
        } = self;

        let module_doc = format!("Types related to {name}. {GENERATION_DISCLOSURE}");
        let module_doc = quote!(#![doc = #module_doc]);
        let variants = variants.iter().map(|(ident, member)| {
            quote! {
                #[strum(serialize = #member)]
                #ident
            }
        });

        tokens.append_all(quote! {
            #module_doc

            use strum::{Display, EnumString};

            #description
            #[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, Hash)]
            pub enum #name {
                #( #variants, )*
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_become_variants() {
        let schema = EnumSchema {
            name: "deviceComplianceActionType".to_string(),
            description: Some("Scheduled Action Type Enum".to_string()),
            members: vec![
                "noAction".to_string(),
                "removeResourceAccessProfiles".to_string(),
                "unknownFutureValue".to_string(),
            ],
        };
        let generated = GraphEnum::new(&schema).to_token_stream().to_string();

        let expected = quote! {
            #[doc = "Scheduled Action Type Enum"]
            #[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, Hash)]
            pub enum DeviceComplianceActionType {
                #[strum(serialize = "noAction")]
                NoAction,
                #[strum(serialize = "removeResourceAccessProfiles")]
                RemoveResourceAccessProfiles,
                #[strum(serialize = "unknownFutureValue")]
                UnknownFutureValue,
            }
        };
        assert!(generated.contains(&expected.to_string()), "{generated}");
    }

    #[test]
    fn members_keep_their_wire_spelling() {
        let schema = EnumSchema {
            name: "devicePlatformType".to_string(),
            description: None,
            members: vec![
                "androidForWork".to_string(),
                "iOS".to_string(),
                "macOS".to_string(),
            ],
        };
        let generated = GraphEnum::new(&schema).to_token_stream().to_string();

        let expected = quote! {
            pub enum DevicePlatformType {
                #[strum(serialize = "androidForWork")]
                AndroidForWork,
                #[strum(serialize = "iOS")]
                IOS,
                #[strum(serialize = "macOS")]
                MacOS,
            }
        };
        assert!(generated.contains(&expected.to_string()), "{generated}");
        assert!(!generated.contains("serialize_all"), "{generated}");
    }
}
