/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DirectoryObject. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::entity::*;
use crate::types::user::*;
use serde_json::{Map, Value};
use time::OffsetDateTime;
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryObject {
    entity: Entity,
    deleted_date_time: Option<OffsetDateTime>,
}
impl Default for DirectoryObject {
    fn default() -> Self {
        Self::new()
    }
}
impl DirectoryObject {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.directoryObject";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            deleted_date_time: None,
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
    #[doc = "Date and time when this object was deleted.\n\n Always null when the object hasn't been deleted."]
    pub fn deleted_date_time(&self) -> Option<OffsetDateTime> {
        self.deleted_date_time
    }
    pub fn set_deleted_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.deleted_date_time = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_date_time_value(Some("deletedDateTime"), self.deleted_date_time)?;
        Ok(())
    }
}
impl Serializable for DirectoryObject {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DirectoryObject {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DirectoryObject {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for DirectoryObject {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "deletedDateTime",
            field(|this: &mut Self, node| {
                this.deleted_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `DirectoryObject` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyDirectoryObject {
    DirectoryObject(DirectoryObject),
    User(User),
}
impl AnyDirectoryObject {
    #[doc = "Accessor to the properties every `DirectoryObject` shares."]
    pub fn directory_object(&self) -> &DirectoryObject {
        match self {
            Self::DirectoryObject(value) => value,
            Self::User(value) => value.directory_object(),
        }
    }
    pub fn directory_object_mut(&mut self) -> &mut DirectoryObject {
        match self {
            Self::DirectoryObject(value) => value,
            Self::User(value) => value.directory_object_mut(),
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.directory_object().odata_type()
    }
}
impl Parsable for AnyDirectoryObject {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
            Some(User::ODATA_TYPE) => Ok(Self::User(parse_object(node)?)),
            other => {
                log_base_fallback(other, DirectoryObject::ODATA_TYPE);
                Ok(Self::DirectoryObject(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyDirectoryObject {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::DirectoryObject(value) => value.serialize(writer),
            Self::User(value) => value.serialize(writer),
        }
    }
}
impl From<DirectoryObject> for AnyDirectoryObject {
    fn from(value: DirectoryObject) -> Self {
        Self::DirectoryObject(value)
    }
}
impl From<User> for AnyDirectoryObject {
    fn from(value: User) -> Self {
        Self::User(value)
    }
}
