/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to BaseCollectionPaginationCountResponse. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseCollectionPaginationCountResponse {
    odata_type: Option<String>,
    odata_count: Option<i64>,
    odata_next_link: Option<String>,
    additional_data: Map<String, Value>,
}
impl BaseCollectionPaginationCountResponse {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.BaseCollectionPaginationCountResponse";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    pub fn odata_count(&self) -> Option<i64> {
        self.odata_count
    }
    pub fn set_odata_count(&mut self, value: Option<i64>) {
        self.odata_count = value;
    }
    pub fn odata_next_link(&self) -> Option<&str> {
        self.odata_next_link.as_deref()
    }
    pub fn set_odata_next_link(&mut self, value: Option<String>) {
        self.odata_next_link = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        writer.write_i64_value(Some("@odata.count"), self.odata_count)?;
        writer.write_string_value(Some("@odata.nextLink"), self.odata_next_link.as_deref())?;
        Ok(())
    }
}
impl Serializable for BaseCollectionPaginationCountResponse {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for BaseCollectionPaginationCountResponse {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for BaseCollectionPaginationCountResponse {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for BaseCollectionPaginationCountResponse {
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
            "@odata.count",
            field(|this: &mut Self, node| {
                this.odata_count = node.get_i64_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "@odata.nextLink",
            field(|this: &mut Self, node| {
                this.odata_next_link = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
