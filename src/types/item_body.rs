/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ItemBody. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::body_type::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemBody {
    odata_type: Option<String>,
    content: Option<String>,
    content_type: Option<BodyType>,
    additional_data: Map<String, Value>,
}
impl ItemBody {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.itemBody";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    #[doc = "The content of the item."]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
    pub fn set_content(&mut self, value: Option<String>) {
        self.content = value;
    }
    #[doc = "The type of the content.\n\n Possible values are text and html."]
    pub fn content_type(&self) -> Option<BodyType> {
        self.content_type
    }
    pub fn set_content_type(&mut self, value: Option<BodyType>) {
        self.content_type = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        writer.write_string_value(Some("content"), self.content.as_deref())?;
        writer.write_enum_value(Some("contentType"), self.content_type.as_ref())?;
        Ok(())
    }
}
impl Serializable for ItemBody {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for ItemBody {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for ItemBody {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for ItemBody {
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
            "content",
            field(|this: &mut Self, node| {
                this.content = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "contentType",
            field(|this: &mut Self, node| {
                this.content_type = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields
    }
}
