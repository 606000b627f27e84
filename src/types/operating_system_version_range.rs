/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to OperatingSystemVersionRange. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use serde_json::{Map, Value};
#[doc = "Operating System version range."]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperatingSystemVersionRange {
    odata_type: Option<String>,
    description: Option<String>,
    highest_version: Option<String>,
    lowest_version: Option<String>,
    additional_data: Map<String, Value>,
}
impl OperatingSystemVersionRange {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.operatingSystemVersionRange";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    #[doc = "The description of this range (e.g.\n\n Valid 1702 builds)"]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }
    #[doc = "The highest inclusive version that this range contains."]
    pub fn highest_version(&self) -> Option<&str> {
        self.highest_version.as_deref()
    }
    pub fn set_highest_version(&mut self, value: Option<String>) {
        self.highest_version = value;
    }
    #[doc = "The lowest inclusive version that this range contains."]
    pub fn lowest_version(&self) -> Option<&str> {
        self.lowest_version.as_deref()
    }
    pub fn set_lowest_version(&mut self, value: Option<String>) {
        self.lowest_version = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        writer.write_string_value(Some("description"), self.description.as_deref())?;
        writer.write_string_value(Some("highestVersion"), self.highest_version.as_deref())?;
        writer.write_string_value(Some("lowestVersion"), self.lowest_version.as_deref())?;
        Ok(())
    }
}
impl Serializable for OperatingSystemVersionRange {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for OperatingSystemVersionRange {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for OperatingSystemVersionRange {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for OperatingSystemVersionRange {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::default();
        fields.insert(
            ODATA_TYPE_KEY,
            field(|this: &mut Self, node| {
                this.odata_type = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "description",
            field(|this: &mut Self, node| {
                this.description = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "highestVersion",
            field(|this: &mut Self, node| {
                this.highest_version = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "lowestVersion",
            field(|this: &mut Self, node| {
                this.lowest_version = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
