/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use yaml_rust2::Yaml;
use yaml_rust2::yaml::Hash;

use super::{array_entry, bool_entry, entry, hash_entry, str_entry};

/// A recursive OpenAPI schema object, or reference to another schema object.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OaSchema {
    // e.g., `$ref: "#/components/schemas/microsoft.graph.user"`
    Ref {
        reference: String,
    },
    Obj {
        typ: Option<String>,
        format: Option<String>,
        /// Properties in declaration order.
        properties: Option<Vec<(String, OaSchema)>>,
        items: Option<Box<OaSchema>>,
        all_of: Option<Vec<OaSchema>>,
        one_of: Option<Vec<OaSchema>>,
        any_of: Option<Vec<OaSchema>>,
        description: Option<String>,
        navigation_property: bool,
        /// Members of a string enumeration.
        enum_values: Option<Vec<String>>,
        discriminator: Option<OaDiscriminator>,
    },
}

/// How a base schema maps discriminator values onto its subtypes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OaDiscriminator {
    pub property_name: String,
    /// Pairs of discriminator value and schema reference, in declaration order.
    pub mapping: Vec<(String, String)>,
}

/// Recursively parses the given yaml node as a schema object or reference.
pub(super) fn parse_schema(node: &Yaml) -> OaSchema {
    let map = node
        .as_hash()
        .expect("all schemas should be compound YAML objects");

    parse_schema_from_map(map)
}

/// Recursively parses the schema represented by the given [`Hash`].
fn parse_schema_from_map(map: &Hash) -> OaSchema {
    if let Some(r) = str_entry(map, "$ref") {
        return OaSchema::Ref {
            reference: r.to_string(),
        };
    }

    let typ = str_entry(map, "type").map(str::to_string);
    let format = str_entry(map, "format").map(str::to_string);
    let description = str_entry(map, "description").map(str::to_string);

    let properties = hash_entry(map, "properties").map(|props| {
        props
            .into_iter()
            .filter_map(|(k, v)| k.as_str().map(|name| (name.to_string(), parse_schema(v))))
            .collect()
    });

    let items = entry(map, "items").map(|n| Box::new(parse_schema(n)));
    let all_of = array_entry(map, "allOf").map(|seq| seq.iter().map(parse_schema).collect());
    let one_of = array_entry(map, "oneOf").map(|seq| seq.iter().map(parse_schema).collect());
    let any_of = array_entry(map, "anyOf").map(|seq| seq.iter().map(parse_schema).collect());

    let navigation_property = bool_entry(map, "x-ms-navigationProperty").unwrap_or(false);

    let enum_values = array_entry(map, "enum").map(|seq| {
        seq.iter()
            .filter_map(|member| member.as_str().map(str::to_string))
            .collect()
    });

    let discriminator = hash_entry(map, "discriminator").map(parse_discriminator);

    OaSchema::Obj {
        typ,
        format,
        properties,
        items,
        all_of,
        one_of,
        any_of,
        description,
        navigation_property,
        enum_values,
        discriminator,
    }
}

fn parse_discriminator(map: &Hash) -> OaDiscriminator {
    let property_name = str_entry(map, "propertyName")
        .expect("discriminators should name their property")
        .to_string();
    let mapping = hash_entry(map, "mapping")
        .map(|mapping| {
            mapping
                .into_iter()
                .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default();

    OaDiscriminator {
        property_name,
        mapping,
    }
}

#[cfg(test)]
mod tests {
    use yaml_rust2::YamlLoader;

    use super::*;

    fn parse(yaml: &str) -> OaSchema {
        let docs = YamlLoader::load_from_str(yaml).unwrap();
        parse_schema(&docs[0])
    }

    #[test]
    fn properties_keep_declaration_order() {
        let schema = parse(
            r#"
type: object
properties:
  zeta:
    type: string
  alpha:
    type: boolean
  '@odata.type':
    type: string
"#,
        );
        let OaSchema::Obj {
            properties: Some(properties),
            ..
        } = schema
        else {
            panic!("expected an object with properties: {schema:?}");
        };
        let names: Vec<_> = properties.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "@odata.type"]);
    }

    #[test]
    fn enums_and_discriminators() {
        let schema = parse(
            r#"
title: bodyType
enum:
  - text
  - html
type: string
"#,
        );
        assert!(matches!(
            schema,
            OaSchema::Obj { enum_values: Some(ref values), .. } if values == &["text", "html"]
        ));

        let schema = parse(
            r##"
title: domainDnsRecord
type: object
discriminator:
  propertyName: '@odata.type'
  mapping:
    '#microsoft.graph.domainDnsCnameRecord': '#/components/schemas/microsoft.graph.domainDnsCnameRecord'
    '#microsoft.graph.domainDnsMxRecord': '#/components/schemas/microsoft.graph.domainDnsMxRecord'
"##,
        );
        let OaSchema::Obj {
            discriminator: Some(discriminator),
            ..
        } = schema
        else {
            panic!("expected a discriminator: {schema:?}");
        };
        assert_eq!(discriminator.property_name, "@odata.type");
        assert_eq!(
            discriminator.mapping,
            [
                (
                    "#microsoft.graph.domainDnsCnameRecord".to_string(),
                    "#/components/schemas/microsoft.graph.domainDnsCnameRecord".to_string()
                ),
                (
                    "#microsoft.graph.domainDnsMxRecord".to_string(),
                    "#/components/schemas/microsoft.graph.domainDnsMxRecord".to_string()
                ),
            ]
        );
    }

    #[test]
    fn references() {
        let schema = parse("$ref: '#/components/schemas/microsoft.graph.entity'");
        assert_eq!(
            schema,
            OaSchema::Ref {
                reference: "#/components/schemas/microsoft.graph.entity".to_string()
            }
        );
    }
}
