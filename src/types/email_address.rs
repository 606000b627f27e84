/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to EmailAddress. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmailAddress {
    odata_type: Option<String>,
    address: Option<String>,
    name: Option<String>,
    additional_data: Map<String, Value>,
}
impl EmailAddress {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.emailAddress";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    #[doc = "The email address of the person or entity."]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
    pub fn set_address(&mut self, value: Option<String>) {
        self.address = value;
    }
    #[doc = "The display name of the person or entity."]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        writer.write_string_value(Some("address"), self.address.as_deref())?;
        writer.write_string_value(Some("name"), self.name.as_deref())?;
        Ok(())
    }
}
impl Serializable for EmailAddress {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for EmailAddress {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for EmailAddress {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for EmailAddress {
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
            "address",
            field(|this: &mut Self, node| {
                this.address = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "name",
            field(|this: &mut Self, node| {
                this.name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
