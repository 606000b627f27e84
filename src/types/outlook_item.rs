/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to OutlookItem. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::entity::*;
use crate::types::message::*;
use serde_json::{Map, Value};
use time::OffsetDateTime;
#[derive(Clone, Debug, PartialEq)]
pub struct OutlookItem {
    entity: Entity,
    categories: Option<Vec<String>>,
    change_key: Option<String>,
    created_date_time: Option<OffsetDateTime>,
    last_modified_date_time: Option<OffsetDateTime>,
}
impl Default for OutlookItem {
    fn default() -> Self {
        Self::new()
    }
}
impl OutlookItem {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.outlookItem";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            categories: None,
            change_key: None,
            created_date_time: None,
            last_modified_date_time: None,
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `Entity`."]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }
    #[doc = "Mutable accessor to inherited properties from `Entity`."]
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.entity.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.entity.set_odata_type(value);
    }
    #[doc = "The categories associated with the item"]
    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }
    pub fn set_categories(&mut self, value: Option<Vec<String>>) {
        self.categories = value;
    }
    #[doc = "Identifies the version of the item.\n\n Every time the item is changed, changeKey changes as well."]
    pub fn change_key(&self) -> Option<&str> {
        self.change_key.as_deref()
    }
    pub fn set_change_key(&mut self, value: Option<String>) {
        self.change_key = value;
    }
    #[doc = "The Timestamp type represents date and time information using ISO 8601 format and is always in UTC time."]
    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }
    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }
    #[doc = "The Timestamp type represents date and time information using ISO 8601 format and is always in UTC time."]
    pub fn last_modified_date_time(&self) -> Option<OffsetDateTime> {
        self.last_modified_date_time
    }
    pub fn set_last_modified_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_modified_date_time = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_collection_of_primitive_values(
            Some("categories"),
            self.categories.as_deref(),
        )?;
        writer.write_string_value(Some("changeKey"), self.change_key.as_deref())?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time)?;
        writer.write_date_time_value(Some("lastModifiedDateTime"), self.last_modified_date_time)?;
        Ok(())
    }
}
impl Serializable for OutlookItem {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for OutlookItem {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for OutlookItem {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for OutlookItem {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "categories",
            field(|this: &mut Self, node| {
                this.categories = node.get_collection_of_primitive_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "changeKey",
            field(|this: &mut Self, node| {
                this.change_key = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "createdDateTime",
            field(|this: &mut Self, node| {
                this.created_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "lastModifiedDateTime",
            field(|this: &mut Self, node| {
                this.last_modified_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `OutlookItem` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyOutlookItem {
    OutlookItem(OutlookItem),
    Message(Message),
}
impl AnyOutlookItem {
    #[doc = "Accessor to the properties every `OutlookItem` shares."]
    pub fn outlook_item(&self) -> &OutlookItem {
        match self {
            Self::OutlookItem(value) => value,
            Self::Message(value) => value.outlook_item(),
        }
    }
    pub fn outlook_item_mut(&mut self) -> &mut OutlookItem {
        match self {
            Self::OutlookItem(value) => value,
            Self::Message(value) => value.outlook_item_mut(),
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.outlook_item().odata_type()
    }
}
impl Parsable for AnyOutlookItem {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
            Some(Message::ODATA_TYPE) => Ok(Self::Message(parse_object(node)?)),
            other => {
                log_base_fallback(other, OutlookItem::ODATA_TYPE);
                Ok(Self::OutlookItem(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyOutlookItem {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::OutlookItem(value) => value.serialize(writer),
            Self::Message(value) => value.serialize(writer),
        }
    }
}
impl From<OutlookItem> for AnyOutlookItem {
    fn from(value: OutlookItem) -> Self {
        Self::OutlookItem(value)
    }
}
impl From<Message> for AnyOutlookItem {
    fn from(value: Message) -> Self {
        Self::Message(value)
    }
}
