/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, TokenStreamExt, format_ident, quote};

use super::Registry;
use crate::naming::{pascalize, snakeify};

/// The closed set of types a polymorphic base resolves to through its
/// discriminator, generated alongside the base type.
pub struct AnyType {
    base: Ident,
    any_name: Ident,
    accessor: Ident,
    accessor_mut: Ident,
    variants: Vec<Variant>,
    modules: Vec<String>,
}

/// One member of an [`AnyType`], with the accessor calls leading from it up to
/// the base.
struct Variant {
    name: Ident,
    path: Vec<Ident>,
}

impl AnyType {
    pub fn new(base: &str, registry: &Registry) -> Self {
        let descendants = registry.descendants(base);
        let variants = std::iter::once(Variant {
            name: format_ident!("{}", pascalize(base)),
            path: vec![],
        })
        .chain(descendants.iter().map(|&name| {
            let mut path = vec![];
            for ancestor in registry.ancestors(name) {
                path.push(format_ident!("{}", snakeify(ancestor)));
                if ancestor == base {
                    break;
                }
            }
            Variant {
                name: format_ident!("{}", pascalize(name)),
                path,
            }
        }))
        .collect();

        Self {
            base: format_ident!("{}", pascalize(base)),
            any_name: format_ident!("Any{}", pascalize(base)),
            accessor: format_ident!("{}", snakeify(base)),
            accessor_mut: format_ident!("{}_mut", snakeify(base)),
            variants,
            modules: descendants.iter().map(|name| snakeify(name)).collect(),
        }
    }

    /// The generated modules holding the subtypes.
    pub fn modules(&self) -> impl Iterator<Item = String> + '_ {
        self.modules.iter().cloned()
    }
}

impl Variant {
    fn access(&self, suffix: &str) -> TokenStream {
        if self.path.is_empty() {
            return quote!(value);
        }
        let calls = self.path.iter().map(|step| format_ident!("{step}{suffix}"));
        quote!(value #(.#calls())*)
    }
}

impl ToTokens for AnyType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            base,
            any_name,
            accessor,
            accessor_mut,
            variants,
            ..
        } = self;

        let doc = format!(
            "A `{base}` or any of its subtypes, resolved through the `@odata.type` discriminator."
        );
        let accessor_doc = format!("Accessor to the properties every `{base}` shares.");

        let names = variants.iter().map(|v| &v.name).collect::<Vec<_>>();
        let subtypes = &names[1..];
        let access = variants.iter().map(|v| v.access(""));
        let access_mut = variants.iter().map(|v| v.access("_mut"));

        tokens.append_all(quote! {
            #[doc = #doc]
            #[derive(Clone, Debug, PartialEq)]
            pub enum #any_name {
                #( #names(#names), )*
            }

            impl #any_name {
                #[doc = #accessor_doc]
                pub fn #accessor(&self) -> &#base {
                    match self {
                        #( Self::#names(value) => #access, )*
                    }
                }

                pub fn #accessor_mut(&mut self) -> &mut #base {
                    match self {
                        #( Self::#names(value) => #access_mut, )*
                    }
                }

                pub fn odata_type(&self) -> Option<&str> {
                    self.#accessor().odata_type()
                }
            }

            impl Parsable for #any_name {
                fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
                    let discriminator = discriminator_value(node)?;
                    match discriminator.as_deref() {
                        #( Some(#subtypes::ODATA_TYPE) => Ok(Self::#subtypes(parse_object(node)?)), )*
                        other => {
                            log_base_fallback(other, #base::ODATA_TYPE);
                            Ok(Self::#base(parse_object(node)?))
                        }
                    }
                }
            }

            impl Serializable for #any_name {
                fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
                    match self {
                        #( Self::#names(value) => value.serialize(writer), )*
                    }
                }
            }

            #(
                impl From<#names> for #any_name {
                    fn from(value: #names) -> Self {
                        Self::#names(value)
                    }
                }
            )*
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::schema::{Extracted, ObjectSchema};

    fn object(name: &str, base: Option<&str>, subtypes: &[&str]) -> Extracted {
        Extracted::Object(ObjectSchema {
            name: name.to_string(),
            description: None,
            base: base.map(str::to_string),
            properties: vec![],
            subtypes: subtypes.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn fixture() -> Vec<Extracted> {
        vec![
            object(
                "deviceAndAppManagementAssignmentTarget",
                None,
                &["groupAssignmentTarget", "exclusionGroupAssignmentTarget"],
            ),
            object(
                "groupAssignmentTarget",
                Some("deviceAndAppManagementAssignmentTarget"),
                &["exclusionGroupAssignmentTarget"],
            ),
            object(
                "exclusionGroupAssignmentTarget",
                Some("groupAssignmentTarget"),
                &[],
            ),
            object(
                "allDevicesAssignmentTarget",
                Some("deviceAndAppManagementAssignmentTarget"),
                &[],
            ),
        ]
    }

    #[test]
    fn variants_are_depth_first() {
        let extracted = fixture();
        let registry = Registry::new(&extracted);
        let any = AnyType::new("deviceAndAppManagementAssignmentTarget", &registry);

        let names: Vec<_> = any.variants.iter().map(|v| v.name.to_string()).collect();
        assert_eq!(
            names,
            [
                "DeviceAndAppManagementAssignmentTarget",
                "GroupAssignmentTarget",
                "ExclusionGroupAssignmentTarget",
                "AllDevicesAssignmentTarget",
            ]
        );
        assert_eq!(
            any.modules().collect::<Vec<_>>(),
            [
                "group_assignment_target",
                "exclusion_group_assignment_target",
                "all_devices_assignment_target",
            ]
        );
    }

    #[test]
    fn grandchildren_access_through_their_parents() {
        let extracted = fixture();
        let registry = Registry::new(&extracted);
        let generated = AnyType::new("deviceAndAppManagementAssignmentTarget", &registry)
            .to_token_stream()
            .to_string();

        let expected = quote! {
            Self::ExclusionGroupAssignmentTarget(value) => value
                .group_assignment_target()
                .device_and_app_management_assignment_target(),
        };
        assert!(generated.contains(&expected.to_string()), "{generated}");

        let expected = quote! {
            Self::AllDevicesAssignmentTarget(value) => value.device_and_app_management_assignment_target_mut(),
        };
        assert!(generated.contains(&expected.to_string()), "{generated}");

        let expected = quote! {
            other => {
                log_base_fallback(other, DeviceAndAppManagementAssignmentTarget::ODATA_TYPE);
                Ok(Self::DeviceAndAppManagementAssignmentTarget(parse_object(node)?))
            }
        };
        assert!(generated.contains(&expected.to_string()), "{generated}");
    }
}
