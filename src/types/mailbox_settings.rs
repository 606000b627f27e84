/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MailboxSettings. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MailboxSettings {
    odata_type: Option<String>,
    archive_folder: Option<String>,
    date_format: Option<String>,
    time_format: Option<String>,
    time_zone: Option<String>,
    additional_data: Map<String, Value>,
}
impl MailboxSettings {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.mailboxSettings";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    #[doc = "Folder ID of an archive folder for the user."]
    pub fn archive_folder(&self) -> Option<&str> {
        self.archive_folder.as_deref()
    }
    pub fn set_archive_folder(&mut self, value: Option<String>) {
        self.archive_folder = value;
    }
    #[doc = "The date format for the user's mailbox."]
    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }
    pub fn set_date_format(&mut self, value: Option<String>) {
        self.date_format = value;
    }
    #[doc = "The time format for the user's mailbox."]
    pub fn time_format(&self) -> Option<&str> {
        self.time_format.as_deref()
    }
    pub fn set_time_format(&mut self, value: Option<String>) {
        self.time_format = value;
    }
    #[doc = "The default time zone for the user's mailbox."]
    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
    pub fn set_time_zone(&mut self, value: Option<String>) {
        self.time_zone = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        writer.write_string_value(Some("archiveFolder"), self.archive_folder.as_deref())?;
        writer.write_string_value(Some("dateFormat"), self.date_format.as_deref())?;
        writer.write_string_value(Some("timeFormat"), self.time_format.as_deref())?;
        writer.write_string_value(Some("timeZone"), self.time_zone.as_deref())?;
        Ok(())
    }
}
impl Serializable for MailboxSettings {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for MailboxSettings {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for MailboxSettings {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for MailboxSettings {
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
            "archiveFolder",
            field(|this: &mut Self, node| {
                this.archive_folder = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "dateFormat",
            field(|this: &mut Self, node| {
                this.date_format = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "timeFormat",
            field(|this: &mut Self, node| {
                this.time_format = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "timeZone",
            field(|this: &mut Self, node| {
                this.time_zone = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
