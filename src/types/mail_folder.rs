/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MailFolder. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::entity::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct MailFolder {
    entity: Entity,
    child_folder_count: Option<i32>,
    display_name: Option<String>,
    is_hidden: Option<bool>,
    parent_folder_id: Option<String>,
    total_item_count: Option<i32>,
    unread_item_count: Option<i32>,
}
impl Default for MailFolder {
    fn default() -> Self {
        Self::new()
    }
}
impl MailFolder {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.mailFolder";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            child_folder_count: None,
            display_name: None,
            is_hidden: None,
            parent_folder_id: None,
            total_item_count: None,
            unread_item_count: None,
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
    #[doc = "The number of immediate child mailFolders in the current mailFolder."]
    pub fn child_folder_count(&self) -> Option<i32> {
        self.child_folder_count
    }
    pub fn set_child_folder_count(&mut self, value: Option<i32>) {
        self.child_folder_count = value;
    }
    #[doc = "The mailFolder's display name."]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }
    #[doc = "Indicates whether the mailFolder is hidden.\n\n This property can be set only when creating the folder. Find more information in Hidden mail folders."]
    pub fn is_hidden(&self) -> Option<bool> {
        self.is_hidden
    }
    pub fn set_is_hidden(&mut self, value: Option<bool>) {
        self.is_hidden = value;
    }
    #[doc = "The unique identifier for the mailFolder's parent mailFolder."]
    pub fn parent_folder_id(&self) -> Option<&str> {
        self.parent_folder_id.as_deref()
    }
    pub fn set_parent_folder_id(&mut self, value: Option<String>) {
        self.parent_folder_id = value;
    }
    #[doc = "The number of items in the mailFolder."]
    pub fn total_item_count(&self) -> Option<i32> {
        self.total_item_count
    }
    pub fn set_total_item_count(&mut self, value: Option<i32>) {
        self.total_item_count = value;
    }
    #[doc = "The number of items in the mailFolder marked as unread."]
    pub fn unread_item_count(&self) -> Option<i32> {
        self.unread_item_count
    }
    pub fn set_unread_item_count(&mut self, value: Option<i32>) {
        self.unread_item_count = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_i32_value(Some("childFolderCount"), self.child_folder_count)?;
        writer.write_string_value(Some("displayName"), self.display_name.as_deref())?;
        writer.write_bool_value(Some("isHidden"), self.is_hidden)?;
        writer.write_string_value(Some("parentFolderId"), self.parent_folder_id.as_deref())?;
        writer.write_i32_value(Some("totalItemCount"), self.total_item_count)?;
        writer.write_i32_value(Some("unreadItemCount"), self.unread_item_count)?;
        Ok(())
    }
}
impl Serializable for MailFolder {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for MailFolder {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for MailFolder {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for MailFolder {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "childFolderCount",
            field(|this: &mut Self, node| {
                this.child_folder_count = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "displayName",
            field(|this: &mut Self, node| {
                this.display_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "isHidden",
            field(|this: &mut Self, node| {
                this.is_hidden = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "parentFolderId",
            field(|this: &mut Self, node| {
                this.parent_folder_id = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "totalItemCount",
            field(|this: &mut Self, node| {
                this.total_item_count = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "unreadItemCount",
            field(|this: &mut Self, node| {
                this.unread_item_count = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields
    }
}
