/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, TokenStreamExt, format_ident, quote};
use std::collections::BTreeSet;

use super::hierarchy::AnyType;
use super::{Registry, RustType, imports, markup_doc_comment};
use crate::extract::schema::{ObjectSchema, Property};
use crate::naming::{pascalize, snakeify};
use crate::{GENERATION_DISCLOSURE, GRAPH_PREFIX};

/// A Graph API type, ready for converting to a stream of tokens via [`quote!`].
pub struct GraphType<'a> {
    schema: &'a ObjectSchema,
    registry: &'a Registry<'a>,
}

impl<'a> GraphType<'a> {
    pub fn new(schema: &'a ObjectSchema, registry: &'a Registry<'a>) -> Self {
        Self { schema, registry }
    }
}

impl ToTokens for GraphType<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { schema, registry } = *self;

        let name = format_ident!("{}", pascalize(&schema.name));
        let odata_type = format!("#{GRAPH_PREFIX}{}", schema.name);
        let description = schema.description.clone().map(|doc| {
            let doc = markup_doc_comment(doc);
            quote!(#[doc = #doc])
        });
        let properties = schema
            .properties
            .iter()
            .map(|p| PropertyDef::new(p, registry))
            .collect::<Vec<_>>();
        let tagged = registry.is_tagged(&schema.name);
        let hierarchy = registry
            .is_polymorphic(&schema.name)
            .then(|| AnyType::new(&schema.name, registry));

        let mut modules = BTreeSet::new();
        let mut external = BTreeSet::new();
        for p in &schema.properties {
            match &p.rust_type {
                RustType::Custom(custom) => {
                    modules.insert(custom.as_snake_case());
                }
                other => external.extend(other.import()),
            }
        }
        if let Some(base) = &schema.base {
            modules.insert(snakeify(base));
        }
        if let Some(hierarchy) = &hierarchy {
            modules.extend(hierarchy.modules());
        }
        let imports = imports(modules, external);

        let module_doc = format!("Types related to {name}. {GENERATION_DISCLOSURE}");
        let module_doc = quote!(#![doc = #module_doc]);

        let fields = properties.iter().map(PropertyDef::field);
        let accessors = properties.iter().map(PropertyDef::accessors);
        let writes = properties.iter().map(PropertyDef::write);
        let reads = properties.iter().map(PropertyDef::read);
        let field_names = properties.iter().map(|p| &p.field);

        let derives = if tagged {
            quote!(#[derive(Clone, Debug, PartialEq)])
        } else {
            quote!(#[derive(Clone, Debug, Default, PartialEq)])
        };

        let (base_field, base_defs) = match &schema.base {
            Some(base) => {
                let base_type = format_ident!("{}", pascalize(base));
                let base_name = format_ident!("{}", snakeify(base));
                let base_mut = format_ident!("{}_mut", snakeify(base));
                let doc = format!("Accessor to inherited properties from `{base_type}`.");
                let doc_mut =
                    format!("Mutable accessor to inherited properties from `{base_type}`.");
                (
                    quote!(#base_name: #base_type,),
                    quote! {
                        #[doc = #doc]
                        pub fn #base_name(&self) -> &#base_type {
                            &self.#base_name
                        }
                        #[doc = #doc_mut]
                        pub fn #base_mut(&mut self) -> &mut #base_type {
                            &mut self.#base_name
                        }
                        pub fn odata_type(&self) -> Option<&str> {
                            self.#base_name.odata_type()
                        }
                        pub fn set_odata_type(&mut self, value: Option<String>) {
                            self.#base_name.set_odata_type(value);
                        }
                    },
                )
            }
            None => (
                quote!(odata_type: Option<String>,),
                quote! {
                    pub fn odata_type(&self) -> Option<&str> {
                        self.odata_type.as_deref()
                    }
                    pub fn set_odata_type(&mut self, value: Option<String>) {
                        self.odata_type = value;
                    }
                },
            ),
        };

        let (default_impl, constructor) = match (&schema.base, tagged) {
            (Some(base), true) => {
                let base_type = format_ident!("{}", pascalize(base));
                let base_name = format_ident!("{}", snakeify(base));
                (
                    Some(quote! {
                        impl Default for #name {
                            fn default() -> Self {
                                Self::new()
                            }
                        }
                    }),
                    quote! {
                        pub fn new() -> Self {
                            let mut this = Self {
                                #base_name: #base_type::new(),
                                #( #field_names: None, )*
                            };
                            this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
                            this
                        }
                    },
                )
            }
            _ => (
                None,
                quote! {
                    pub fn new() -> Self {
                        Self::default()
                    }
                },
            ),
        };

        let (additional_data_field, additional_data_impl, write_base, field_base) =
            match &schema.base {
                Some(base) => {
                    let base_type = format_ident!("{}", pascalize(base));
                    let base_name = format_ident!("{}", snakeify(base));
                    let base_mut = format_ident!("{}_mut", snakeify(base));
                    let fields_mut = (!properties.is_empty()).then(|| quote!(mut));
                    (
                        None,
                        quote! {
                            fn additional_data(&self) -> &Map<String, Value> {
                                self.#base_name.additional_data()
                            }
                            fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
                                self.#base_name.additional_data_mut()
                            }
                        },
                        quote!(self.#base_name.write_properties(writer)?;),
                        quote! {
                            let #fields_mut fields =
                                inherit(#base_type::field_deserializers(), Self::#base_mut);
                        },
                    )
                }
                None => (
                    Some(quote!(additional_data: Map<String, Value>,)),
                    quote! {
                        fn additional_data(&self) -> &Map<String, Value> {
                            &self.additional_data
                        }
                        fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
                            &mut self.additional_data
                        }
                    },
                    quote! {
                        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
                    },
                    quote! {
                        let mut fields = FieldDeserializers::default();
                        fields.insert(
                            ODATA_TYPE_KEY,
                            field(|this: &mut Self, node| {
                                this.odata_type = node.get_string_value()?;
                                Ok(())
                            }),
                        );
                    },
                ),
            };

        tokens.append_all(quote! {
            #module_doc

            #imports

            #description
            #derives
            pub struct #name {
                #base_field
                #(#fields)*
                #additional_data_field
            }

            #default_impl

            impl #name {
                #[doc = "The `@odata.type` discriminator value identifying this type."]
                pub const ODATA_TYPE: &'static str = #odata_type;

                #constructor

                #base_defs

                #(#accessors)*

                #[doc = "Write the properties of this type, including inherited ones, without additional data."]
                pub(crate) fn write_properties(
                    &self,
                    writer: &mut dyn SerializationWriter,
                ) -> Result<(), Error> {
                    #write_base
                    #(#writes)*
                    Ok(())
                }
            }

            impl Serializable for #name {
                fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
                    self.write_properties(writer)?;
                    writer.write_additional_data(self.additional_data())
                }
            }

            impl Parsable for #name {
                fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
                    parse_object(node)
                }
            }

            impl AdditionalDataHolder for #name {
                #additional_data_impl
            }

            impl Model for #name {
                fn field_deserializers() -> FieldDeserializers<Self> {
                    #field_base
                    #(#reads)*
                    fields
                }
            }

            #hierarchy
        });
    }
}

/// How a property is stored, read and written.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Category {
    /// Copied out of the struct by its accessor.
    Copy,
    /// Stored as a `String`, accessed as a `&str`.
    Str,
    Object,
    Enum,
}

/// A single property of a generated type.
struct PropertyDef {
    wire_name: String,
    field: Ident,
    setter: Ident,
    doc_comment: Option<TokenStream>,
    element: TokenStream,
    category: Category,
    is_collection: bool,
    /// The suffix of the scalar reader and writer methods, if any.
    method: Option<&'static str>,
}

impl PropertyDef {
    fn new(prop: &Property, registry: &Registry) -> Self {
        let snake = snakeify(&prop.name);
        let category = match &prop.rust_type {
            RustType::String => Category::Str,
            RustType::Custom(custom) if registry.is_enum(custom.original_name()) => Category::Enum,
            RustType::Custom(_) => Category::Object,
            _ => Category::Copy,
        };
        let method = (category == Category::Copy || category == Category::Str)
            .then(|| prop.rust_type.scalar_method());
        let doc_comment = prop.description.clone().map(|doc| {
            let doc = markup_doc_comment(doc);
            quote!(#[doc = #doc])
        });

        Self {
            wire_name: prop.name.clone(),
            field: format_ident!("{snake}"),
            setter: format_ident!("set_{snake}"),
            doc_comment,
            element: prop.rust_type.base_token(registry),
            category,
            is_collection: prop.is_collection,
            method,
        }
    }

    fn storage(&self) -> TokenStream {
        let element = &self.element;
        if self.is_collection {
            quote!(Option<Vec<#element>>)
        } else {
            quote!(Option<#element>)
        }
    }

    fn field(&self) -> TokenStream {
        let Self { field, .. } = self;
        let storage = self.storage();
        quote!(#field: #storage,)
    }

    fn accessors(&self) -> TokenStream {
        let Self {
            field,
            setter,
            doc_comment,
            element,
            ..
        } = self;
        let storage = self.storage();

        let (ret_type, body) = match (self.is_collection, self.category) {
            (true, _) => (quote!(Option<&[#element]>), quote!(self.#field.as_deref())),
            (false, Category::Str) => (quote!(Option<&str>), quote!(self.#field.as_deref())),
            (false, Category::Object) => (quote!(Option<&#element>), quote!(self.#field.as_ref())),
            (false, Category::Copy | Category::Enum) => {
                (quote!(Option<#element>), quote!(self.#field))
            }
        };

        quote! {
            #doc_comment
            pub fn #field(&self) -> #ret_type {
                #body
            }
            pub fn #setter(&mut self, value: #storage) {
                self.#field = value;
            }
        }
    }

    fn write(&self) -> TokenStream {
        let Self {
            wire_name, field, ..
        } = self;

        let (method, value) = match (self.is_collection, self.category) {
            (true, Category::Object) => (
                format_ident!("write_collection_of_object_values"),
                quote!(self.#field.as_deref()),
            ),
            (true, Category::Enum) => (
                format_ident!("write_collection_of_enum_values"),
                quote!(self.#field.as_deref()),
            ),
            (true, _) => (
                format_ident!("write_collection_of_primitive_values"),
                quote!(self.#field.as_deref()),
            ),
            (false, Category::Object) => (
                format_ident!("write_object_value"),
                quote!(self.#field.as_ref()),
            ),
            (false, Category::Enum) => (
                format_ident!("write_enum_value"),
                quote!(self.#field.as_ref()),
            ),
            (false, Category::Str) => (
                format_ident!("write_string_value"),
                quote!(self.#field.as_deref()),
            ),
            (false, Category::Copy) => (self.scalar_ident("write"), quote!(self.#field)),
        };

        quote!(writer.#method(Some(#wire_name), #value)?;)
    }

    fn read(&self) -> TokenStream {
        let Self {
            wire_name, field, ..
        } = self;

        let method = match (self.is_collection, self.category) {
            (true, Category::Object) => format_ident!("get_collection_of_object_values"),
            (true, Category::Enum) => format_ident!("get_collection_of_enum_values"),
            (true, _) => format_ident!("get_collection_of_primitive_values"),
            (false, Category::Object) => format_ident!("get_object_value"),
            (false, Category::Enum) => format_ident!("get_enum_value"),
            (false, Category::Str | Category::Copy) => self.scalar_ident("get"),
        };

        quote! {
            fields.insert(
                #wire_name,
                field(|this: &mut Self, node| {
                    this.#field = node.#method()?;
                    Ok(())
                }),
            );
        }
    }

    fn scalar_ident(&self, verb: &str) -> Ident {
        let method = self
            .method
            .expect("only scalar properties have scalar methods");
        format_ident!("{verb}_{method}_value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::schema::{EnumSchema, Extracted};
    use crate::oxidize::CustomRustType;

    fn property(name: &str, is_collection: bool, rust_type: RustType) -> Property {
        Property {
            name: name.to_string(),
            is_collection,
            rust_type,
            description: None,
        }
    }

    fn custom(name: &str) -> RustType {
        RustType::Custom(CustomRustType::from(name))
    }

    fn object(
        name: &str,
        base: Option<&str>,
        properties: Vec<Property>,
        subtypes: &[&str],
    ) -> Extracted {
        Extracted::Object(ObjectSchema {
            name: name.to_string(),
            description: None,
            base: base.map(str::to_string),
            properties,
            subtypes: subtypes.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn fixture() -> Vec<Extracted> {
        vec![
            object(
                "entity",
                None,
                vec![property("id", false, RustType::String)],
                &["domainDnsRecord", "domainDnsMxRecord"],
            ),
            object(
                "domainDnsRecord",
                Some("entity"),
                vec![property("ttl", false, RustType::I32)],
                &["domainDnsMxRecord"],
            ),
            object(
                "domainDnsMxRecord",
                Some("domainDnsRecord"),
                vec![property("preference", false, RustType::I32)],
                &[],
            ),
            object(
                "deviceComplianceActionItem",
                Some("entity"),
                vec![
                    property("actionType", false, custom("deviceComplianceActionType")),
                    property("notificationMessageCCList", true, RustType::String),
                    property("records", true, custom("domainDnsRecord")),
                    property("lastSeen", false, RustType::DateTime),
                ],
                &[],
            ),
            Extracted::Enum(EnumSchema {
                name: "deviceComplianceActionType".to_string(),
                description: None,
                members: vec!["noAction".to_string()],
            }),
        ]
    }

    fn generate(extracted: &[Extracted], name: &str) -> String {
        let registry = Registry::new(extracted);
        let Some(Extracted::Object(schema)) = extracted.iter().find(|e| e.name() == name) else {
            panic!("no object named {name}");
        };
        GraphType::new(schema, &registry).to_token_stream().to_string()
    }

    fn assert_contains(generated: &str, expected: TokenStream) {
        let expected = expected.to_string();
        assert!(
            generated.contains(&expected),
            "expected\n{expected}\nin\n{generated}"
        );
    }

    #[test]
    fn root_types_own_the_discriminator() {
        let extracted = fixture();
        let generated = generate(&extracted, "entity");

        assert_contains(
            &generated,
            quote! {
                #[derive(Clone, Debug, Default, PartialEq)]
                pub struct Entity {
                    odata_type: Option<String>,
                    id: Option<String>,
                    additional_data: Map<String, Value>,
                }
            },
        );
        assert_contains(
            &generated,
            quote! {
                pub fn new() -> Self {
                    Self::default()
                }
            },
        );
        assert_contains(
            &generated,
            quote!(writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;),
        );
        assert_contains(&generated, quote!(pub enum AnyEntity));
    }

    #[test]
    fn subtypes_stamp_their_discriminator() {
        let extracted = fixture();
        let generated = generate(&extracted, "domainDnsMxRecord");

        assert_contains(
            &generated,
            quote! {
                use crate::types::domain_dns_record::*;
            },
        );
        assert_contains(
            &generated,
            quote! {
                pub const ODATA_TYPE: &'static str = "#microsoft.graph.domainDnsMxRecord";
            },
        );
        assert_contains(
            &generated,
            quote! {
                pub fn new() -> Self {
                    let mut this = Self {
                        domain_dns_record: DomainDnsRecord::new(),
                        preference: None,
                    };
                    this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
                    this
                }
            },
        );
        assert_contains(
            &generated,
            quote! {
                let mut fields =
                    inherit(DomainDnsRecord::field_deserializers(), Self::domain_dns_record_mut);
            },
        );
        assert!(!generated.contains("enum AnyDomainDnsMxRecord"));
    }

    #[test]
    fn property_shapes() {
        let extracted = fixture();
        let generated = generate(&extracted, "deviceComplianceActionItem");

        assert_contains(
            &generated,
            quote! {
                use crate::types::device_compliance_action_type::*;
                use crate::types::domain_dns_record::*;
                use crate::types::entity::*;
                use serde_json::{Map, Value};
                use time::OffsetDateTime;
            },
        );
        assert_contains(
            &generated,
            quote! {
                pub fn action_type(&self) -> Option<DeviceComplianceActionType> {
                    self.action_type
                }
            },
        );
        assert_contains(
            &generated,
            quote! {
                pub fn notification_message_cc_list(&self) -> Option<&[String]> {
                    self.notification_message_cc_list.as_deref()
                }
            },
        );
        // Properties of a polymorphic type hold any of its subtypes.
        assert_contains(
            &generated,
            quote! {
                pub fn set_records(&mut self, value: Option<Vec<AnyDomainDnsRecord>>) {
                    self.records = value;
                }
            },
        );
        assert_contains(
            &generated,
            quote!(writer.write_enum_value(Some("actionType"), self.action_type.as_ref())?;),
        );
        assert_contains(
            &generated,
            quote!(writer.write_date_time_value(Some("lastSeen"), self.last_seen)?;),
        );
        assert_contains(
            &generated,
            quote! {
                fields.insert(
                    "records",
                    field(|this: &mut Self, node| {
                        this.records = node.get_collection_of_object_values()?;
                        Ok(())
                    }),
                );
            },
        );
    }
}
