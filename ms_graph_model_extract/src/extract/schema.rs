/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::openapi::schema::OaSchema;
use crate::oxidize::{CustomRustType, RustType};
use crate::{SUPPORTED_TYPES, simple_name};

/// Our representation of a Graph API property.
#[derive(Debug, Clone)]
pub struct Property {
    /// The property name as it appears on the wire.
    pub name: String,
    pub is_collection: bool,
    pub rust_type: RustType,
    pub description: Option<String>,
}

/// A Graph API object type, with the properties it declares itself.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub name: String,
    pub description: Option<String>,
    /// The supported type this one inherits from, if any.
    pub base: Option<String>,
    pub properties: Vec<Property>,
    /// Supported types the discriminator mapping routes to.
    pub subtypes: Vec<String>,
}

/// A Graph API string enumeration.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Extracted {
    Object(ObjectSchema),
    Enum(EnumSchema),
}

impl Extracted {
    pub fn name(&self) -> &str {
        match self {
            Self::Object(object) => &object.name,
            Self::Enum(graph_enum) => &graph_enum.name,
        }
    }
}

/// For the given named schema object, extract its Graph API description and
/// either its members (for enums) or its base type and properties.
pub fn extract_from_schema(name: &str, schema: &OaSchema) -> Extracted {
    let description = top_level_description(schema);

    if let OaSchema::Obj {
        enum_values: Some(members),
        ..
    } = schema
    {
        return Extracted::Enum(EnumSchema {
            name: name.to_string(),
            description,
            members: members.clone(),
        });
    }

    let mut base = None;
    let mut properties = Vec::new();
    let mut subtypes = Vec::new();
    collect_schema_parts(schema, &mut base, &mut properties, &mut subtypes);

    Extracted::Object(ObjectSchema {
        name: name.to_string(),
        description,
        base,
        properties,
        subtypes,
    })
}

fn top_level_description(schema: &OaSchema) -> Option<String> {
    match schema {
        OaSchema::Obj {
            description: Some(description),
            ..
        } => Some(description.clone()),
        OaSchema::Obj {
            all_of: Some(all_of),
            ..
        } => all_of.iter().find_map(|element| match element {
            OaSchema::Obj {
                description: Some(description),
                ..
            } => Some(description.clone()),
            _ => None,
        }),
        _ => None,
    }
}

fn collect_schema_parts(
    schema: &OaSchema,
    base: &mut Option<String>,
    out: &mut Vec<Property>,
    subtypes: &mut Vec<String>,
) {
    let OaSchema::Obj {
        all_of,
        properties,
        discriminator,
        ..
    } = schema
    else {
        panic!("expected a schema object, found a reference: {schema:?}");
    };

    if let Some(discriminator) = discriminator {
        for (_, reference) in &discriminator.mapping {
            let simple = ref_simple_name(reference);
            if SUPPORTED_TYPES.contains(&simple) && !subtypes.iter().any(|s| s == simple) {
                subtypes.push(simple.to_string());
            }
        }
    }

    for element in all_of.iter().flatten() {
        match element {
            OaSchema::Ref { reference } => {
                let simple = ref_simple_name(reference);
                if SUPPORTED_TYPES.contains(&simple) {
                    assert!(
                        base.is_none(),
                        "multiple inheritance isn't supported: {schema:?}"
                    );
                    *base = Some(simple.to_string());
                } else {
                    println!("ignoring unsupported base type {simple}");
                }
            }
            OaSchema::Obj { .. } => collect_schema_parts(element, base, out, subtypes),
        }
    }

    for (name, prop_schema) in properties.iter().flatten() {
        if let OaSchema::Obj {
            navigation_property: true,
            ..
        } = prop_schema
        {
            // navigation properties aren't real properties, they basically just inform about a subpath
            continue;
        }
        // The discriminator is handled by every root type.
        if name == "@odata.type" {
            continue;
        }
        if let Some((is_collection, description, rust_type)) =
            map_openapi_schema_to_rust(prop_schema)
        {
            out.push(Property {
                name: name.clone(),
                is_collection,
                rust_type,
                description,
            });
        } else {
            println!("Skipping unsupported type: {name}");
        }
    }
}

/// Given a reference in the shape `#/components/schemas/microsoft.graph.user`,
/// get the name of the type being referred to.
fn ref_simple_name(reference: &str) -> &str {
    let name = std::path::Path::new(reference)
        .file_name()
        .expect("invalid ref name")
        .to_str()
        .expect("expected valid UTF-8 ref name");
    simple_name(name)
}

fn map_openapi_schema_to_rust(schema: &OaSchema) -> Option<(bool, Option<String>, RustType)> {
    match schema {
        OaSchema::Ref { reference } => {
            let simple = ref_simple_name(reference);
            if SUPPORTED_TYPES.contains(&simple) {
                Some((false, None, RustType::Custom(CustomRustType::from(simple))))
            } else {
                println!("skipping unsupported schema: {simple}");
                None
            }
        }
        OaSchema::Obj {
            typ,
            format,
            items,
            description,
            one_of,
            any_of,
            ..
        } => {
            let description = description.clone();
            match typ.as_deref() {
                Some("array") => {
                    let item = items.as_deref()?;
                    if let OaSchema::Obj {
                        typ: Some(s), ..
                    } = item
                        && s == "array"
                    {
                        todo!("nested arrays: {schema:?}");
                    }
                    let (_, _, typ) = map_openapi_schema_to_rust(item)?;
                    Some((true, description, typ))
                }
                Some("string") => Some((
                    false,
                    description,
                    map_string_format_to_rust(format.as_deref()),
                )),
                Some("boolean") => Some((false, description, RustType::Bool)),
                Some("integer") => Some((
                    false,
                    description,
                    map_integer_format_to_rust(format.as_deref()),
                )),
                Some("number") => Some((
                    false,
                    description,
                    map_number_format_to_rust(format.as_deref()),
                )),
                Some("object") | None => {
                    // Numeric properties are declared as a choice between a
                    // number and the strings "INF", "-INF" and "NaN".
                    let choices = one_of.as_ref().or(any_of.as_ref());
                    if choices.is_some_and(|choices| is_numeric_choice(choices)) {
                        return Some((false, description, RustType::F64));
                    }
                    match_supported_custom_from_schema(schema).map(|simple| {
                        (
                            false,
                            description,
                            RustType::Custom(CustomRustType::from(simple.as_str())),
                        )
                    })
                }
                Some(_) => None,
            }
        }
    }
}

fn is_numeric_choice(choices: &[OaSchema]) -> bool {
    choices
        .iter()
        .any(|s| matches!(s, OaSchema::Obj { typ: Some(t), .. } if t == "number"))
}

// Try to discover a supported custom type by scanning refs inside composition.
fn match_supported_custom_from_schema(schema: &OaSchema) -> Option<String> {
    match schema {
        OaSchema::Ref { reference } => {
            let simple = ref_simple_name(reference);
            SUPPORTED_TYPES
                .contains(&simple)
                .then(|| simple.to_string())
        }
        OaSchema::Obj {
            all_of,
            one_of,
            any_of,
            ..
        } => [all_of, one_of, any_of]
            .into_iter()
            .flatten()
            .flatten()
            .find_map(match_supported_custom_from_schema),
    }
}

fn map_string_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        None => RustType::String,
        Some("date-time") => RustType::DateTime,
        Some("date") => RustType::Date,
        Some("uuid") => RustType::Uuid,
        Some(t) => {
            println!("treating {t} as a string");
            RustType::String
        }
    }
}

fn map_integer_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        Some("uint8") | Some("int8") | Some("int16") | Some("int32") => RustType::I32,
        Some("int64") => RustType::I64,
        // Default to i32 if unspecified
        None => RustType::I32,
        Some(fmt) => panic!("Unknown number format: {fmt}"),
    }
}

fn map_number_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        Some("uint8") | Some("int8") | Some("int16") | Some("int32") => RustType::I32,
        Some("int64") => RustType::I64,
        Some("float") | Some("double") => RustType::F64,
        Some("decimal") => RustType::F64, // technically lossy, but rarely used
        None => panic!("Number with unspecified format"),
        Some(fmt) => panic!("Unknown number format: {fmt}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::{Metadata, load_metadata};

    const SCHEMAS: &str = r##"
openapi: 3.0.4
components:
  schemas:
    microsoft.graph.domainDnsRecord:
      allOf:
        - $ref: '#/components/schemas/microsoft.graph.entity'
        - title: domainDnsRecord
          type: object
          properties:
            isOptional:
              type: boolean
              description: If false, the customer must configure this record.
            ttl:
              maximum: 2147483647
              minimum: -2147483648
              type: number
              format: int32
            domain:
              anyOf:
                - $ref: '#/components/schemas/microsoft.graph.domain'
                - type: object
                  nullable: true
              x-ms-navigationProperty: true
            '@odata.type':
              type: string
          discriminator:
            propertyName: '@odata.type'
            mapping:
              '#microsoft.graph.domainDnsCnameRecord': '#/components/schemas/microsoft.graph.domainDnsCnameRecord'
              '#microsoft.graph.notSupportedRecord': '#/components/schemas/microsoft.graph.notSupportedRecord'
              '#microsoft.graph.domainDnsMxRecord': '#/components/schemas/microsoft.graph.domainDnsMxRecord'
    microsoft.graph.mailFolderCollectionResponse:
      allOf:
        - $ref: '#/components/schemas/BaseCollectionPaginationCountResponse'
        - title: Collection of mailFolder
          type: object
          properties:
            value:
              type: array
              items:
                $ref: '#/components/schemas/microsoft.graph.mailFolder'
    BaseCollectionPaginationCountResponse:
      title: Base collection pagination and count responses
      type: object
      properties:
        '@odata.count':
          type: integer
          format: int64
          nullable: true
        '@odata.nextLink':
          type: string
          nullable: true
    microsoft.graph.deviceComplianceActionItem:
      allOf:
        - $ref: '#/components/schemas/microsoft.graph.entity'
        - title: deviceComplianceActionItem
          type: object
          properties:
            actionType:
              $ref: '#/components/schemas/microsoft.graph.deviceComplianceActionType'
            gracePeriodHours:
              type: number
              format: int32
            notificationMessageCCList:
              type: array
              items:
                type: string
                nullable: true
    microsoft.graph.operatingSystemVersionRange:
      title: operatingSystemVersionRange
      type: object
      properties:
        description:
          type: string
          nullable: true
        score:
          oneOf:
            - type: number
              format: double
              nullable: true
            - type: string
              nullable: true
            - $ref: '#/components/schemas/ReferenceNumeric'
    microsoft.graph.bodyType:
      title: bodyType
      enum:
        - text
        - html
      type: string
"##;

    fn extract(name: &str) -> Extracted {
        let Metadata { schemas } = load_metadata(SCHEMAS).unwrap();
        let schema = schemas
            .get(&format!("microsoft.graph.{name}"))
            .or_else(|| schemas.get(name))
            .unwrap();
        extract_from_schema(name, schema)
    }

    fn object(name: &str) -> ObjectSchema {
        match extract(name) {
            Extracted::Object(object) => object,
            Extracted::Enum(graph_enum) => panic!("expected an object: {graph_enum:?}"),
        }
    }

    fn property_names(object: &ObjectSchema) -> Vec<&str> {
        object.properties.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn base_properties_and_subtypes() {
        let record = object("domainDnsRecord");
        assert_eq!(record.name, "domainDnsRecord");
        assert_eq!(record.base.as_deref(), Some("entity"));
        // Navigation properties and the discriminator itself are skipped.
        assert_eq!(property_names(&record), ["isOptional", "ttl"]);
        assert!(matches!(record.properties[0].rust_type, RustType::Bool));
        assert!(matches!(record.properties[1].rust_type, RustType::I32));
        assert_eq!(
            record.properties[0].description.as_deref(),
            Some("If false, the customer must configure this record.")
        );
        // Unsupported subtypes are left out of the mapping.
        assert_eq!(record.subtypes, ["domainDnsCnameRecord", "domainDnsMxRecord"]);
    }

    #[test]
    fn pagination_annotations_are_kept() {
        let base = object("BaseCollectionPaginationCountResponse");
        assert!(base.base.is_none());
        assert_eq!(property_names(&base), ["@odata.count", "@odata.nextLink"]);
        assert!(matches!(base.properties[0].rust_type, RustType::I64));
        assert!(base.subtypes.is_empty());

        let folders = object("mailFolderCollectionResponse");
        assert_eq!(
            folders.base.as_deref(),
            Some("BaseCollectionPaginationCountResponse")
        );
        assert_eq!(folders.description.as_deref(), None);
        let value = &folders.properties[0];
        assert!(value.is_collection);
        let RustType::Custom(custom) = &value.rust_type else {
            panic!("expected a custom type: {value:?}");
        };
        assert_eq!(custom.original_name(), "mailFolder");
    }

    #[test]
    fn enum_references_and_collections() {
        let item = object("deviceComplianceActionItem");
        assert_eq!(
            property_names(&item),
            ["actionType", "gracePeriodHours", "notificationMessageCCList"]
        );
        let RustType::Custom(custom) = &item.properties[0].rust_type else {
            panic!("expected a custom type: {:?}", item.properties[0]);
        };
        assert_eq!(custom.original_name(), "deviceComplianceActionType");
        assert!(item.properties[2].is_collection);
        assert!(matches!(item.properties[2].rust_type, RustType::String));
    }

    #[test]
    fn numeric_choices_are_floats() {
        let range = object("operatingSystemVersionRange");
        assert_eq!(property_names(&range), ["description", "score"]);
        assert!(matches!(range.properties[1].rust_type, RustType::F64));
    }

    #[test]
    fn enums() {
        let Extracted::Enum(body_type) = extract("bodyType") else {
            panic!("expected an enum");
        };
        assert_eq!(body_type.name, "bodyType");
        assert_eq!(body_type.members, ["text", "html"]);
    }
}
