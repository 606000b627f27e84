/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Raw OpenAPI documents. Only `components.schemas` is read; paths and
//! responses carry nothing the models need.

use std::collections::HashMap;
use yaml_rust2::{Yaml, YamlLoader, yaml::Hash as YamlHash};

pub mod schema;

use schema::{OaSchema, parse_schema};

/// Every component schema of a metadata document, keyed by its qualified
/// name (`microsoft.graph.user`).
pub struct Metadata {
    pub schemas: HashMap<String, OaSchema>,
}

/// Read the component schemas out of Graph OpenAPI metadata text.
pub fn load_metadata(text: &str) -> Result<Metadata, Box<dyn std::error::Error>> {
    let document = YamlLoader::load_from_str(text)?
        .into_iter()
        .next()
        .ok_or("metadata file contains no YAML document")?;
    println!("parsed metadata document");

    let components = document
        .as_hash()
        .and_then(|root| hash_entry(root, "components"))
        .ok_or("metadata has no `components` section")?;
    let schemas = hash_entry(components, "schemas")
        .ok_or("metadata has no `components.schemas` section")?;

    let schemas: HashMap<_, _> = schemas
        .iter()
        .filter_map(|(name, schema)| Some((name.as_str()?.to_string(), parse_schema(schema))))
        .collect();
    println!("found {} component schemas", schemas.len());

    Ok(Metadata { schemas })
}

fn entry<'a>(h: &'a YamlHash, key: &str) -> Option<&'a Yaml> {
    h.get(&Yaml::from_str(key))
}

fn str_entry<'a>(h: &'a YamlHash, key: &str) -> Option<&'a str> {
    entry(h, key)?.as_str()
}

fn bool_entry(h: &YamlHash, key: &str) -> Option<bool> {
    entry(h, key)?.as_bool()
}

fn hash_entry<'a>(h: &'a YamlHash, key: &str) -> Option<&'a YamlHash> {
    entry(h, key)?.as_hash()
}

fn array_entry<'a>(h: &'a YamlHash, key: &str) -> Option<&'a Vec<Yaml>> {
    entry(h, key)?.as_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_component_schemas() {
        let yaml = r#"
openapi: 3.0.4
components:
  schemas:
    microsoft.graph.itemBody:
      title: itemBody
      type: object
      properties:
        content:
          type: string
          nullable: true
    microsoft.graph.bodyType:
      title: bodyType
      enum:
        - text
        - html
      type: string
"#;
        let Metadata { schemas } = load_metadata(yaml).unwrap();
        assert_eq!(schemas.len(), 2);
        assert!(schemas.contains_key("microsoft.graph.itemBody"));
        assert!(schemas.contains_key("microsoft.graph.bodyType"));
    }

    #[test]
    fn missing_schemas_is_an_error() {
        let yaml = "openapi: 3.0.4\ncomponents:\n  responses: {}\n";
        let err = load_metadata(yaml).err().expect("schemas are required");
        assert_eq!(err.to_string(), "metadata has no `components.schemas` section");
    }

    #[test]
    fn malformed_sections_are_errors() {
        let err = load_metadata("").err().expect("empty text has no document");
        assert_eq!(err.to_string(), "metadata file contains no YAML document");

        let err = load_metadata("- openapi\n- 3.0.4\n").err().expect("root must be a map");
        assert_eq!(err.to_string(), "metadata has no `components` section");

        let yaml = "components:\n  schemas:\n    - microsoft.graph.user\n";
        assert!(load_metadata(yaml).is_err());
    }
}
