/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Message. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::importance::*;
use crate::types::item_body::*;
use crate::types::outlook_item::*;
use crate::types::recipient::*;
use serde_json::{Map, Value};
use time::OffsetDateTime;
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    outlook_item: OutlookItem,
    body: Option<ItemBody>,
    body_preview: Option<String>,
    cc_recipients: Option<Vec<Recipient>>,
    conversation_id: Option<String>,
    conversation_index: Option<String>,
    from: Option<Recipient>,
    has_attachments: Option<bool>,
    importance: Option<Importance>,
    internet_message_id: Option<String>,
    is_delivery_receipt_requested: Option<bool>,
    is_draft: Option<bool>,
    is_read: Option<bool>,
    is_read_receipt_requested: Option<bool>,
    parent_folder_id: Option<String>,
    received_date_time: Option<OffsetDateTime>,
    sender: Option<Recipient>,
    sent_date_time: Option<OffsetDateTime>,
    subject: Option<String>,
    to_recipients: Option<Vec<Recipient>>,
    unique_body: Option<ItemBody>,
    web_link: Option<String>,
}
impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}
impl Message {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.message";
    pub fn new() -> Self {
        let mut this = Self {
            outlook_item: OutlookItem::new(),
            body: None,
            body_preview: None,
            cc_recipients: None,
            conversation_id: None,
            conversation_index: None,
            from: None,
            has_attachments: None,
            importance: None,
            internet_message_id: None,
            is_delivery_receipt_requested: None,
            is_draft: None,
            is_read: None,
            is_read_receipt_requested: None,
            parent_folder_id: None,
            received_date_time: None,
            sender: None,
            sent_date_time: None,
            subject: None,
            to_recipients: None,
            unique_body: None,
            web_link: None,
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `OutlookItem`."]
    pub fn outlook_item(&self) -> &OutlookItem {
        &self.outlook_item
    }
    #[doc = "Mutable accessor to inherited properties from `OutlookItem`."]
    pub fn outlook_item_mut(&mut self) -> &mut OutlookItem {
        &mut self.outlook_item
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.outlook_item.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.outlook_item.set_odata_type(value);
    }
    #[doc = "The body of the message.\n\n It can be in HTML or text format. Find out about safe HTML in a message body."]
    pub fn body(&self) -> Option<&ItemBody> {
        self.body.as_ref()
    }
    pub fn set_body(&mut self, value: Option<ItemBody>) {
        self.body = value;
    }
    #[doc = "The first 255 characters of the message body.\n\n It is in text format."]
    pub fn body_preview(&self) -> Option<&str> {
        self.body_preview.as_deref()
    }
    pub fn set_body_preview(&mut self, value: Option<String>) {
        self.body_preview = value;
    }
    #[doc = "The Cc: recipients for the message."]
    pub fn cc_recipients(&self) -> Option<&[Recipient]> {
        self.cc_recipients.as_deref()
    }
    pub fn set_cc_recipients(&mut self, value: Option<Vec<Recipient>>) {
        self.cc_recipients = value;
    }
    #[doc = "The ID of the conversation the email belongs to."]
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }
    pub fn set_conversation_id(&mut self, value: Option<String>) {
        self.conversation_id = value;
    }
    #[doc = "Indicates the position of the message within the conversation."]
    pub fn conversation_index(&self) -> Option<&str> {
        self.conversation_index.as_deref()
    }
    pub fn set_conversation_index(&mut self, value: Option<String>) {
        self.conversation_index = value;
    }
    #[doc = "The owner of the mailbox from which the message is sent.\n\n In most cases, this value is the same as the sender property, except for sharing or delegation scenarios."]
    pub fn from(&self) -> Option<&Recipient> {
        self.from.as_ref()
    }
    pub fn set_from(&mut self, value: Option<Recipient>) {
        self.from = value;
    }
    #[doc = "Indicates whether the message has attachments.\n\n This property doesn't include inline attachments, so if a message contains only inline attachments, this property is false."]
    pub fn has_attachments(&self) -> Option<bool> {
        self.has_attachments
    }
    pub fn set_has_attachments(&mut self, value: Option<bool>) {
        self.has_attachments = value;
    }
    #[doc = "The importance of the message.\n\n The possible values are: low, normal, and high."]
    pub fn importance(&self) -> Option<Importance> {
        self.importance
    }
    pub fn set_importance(&mut self, value: Option<Importance>) {
        self.importance = value;
    }
    #[doc = "The message ID in the format specified by RFC2822."]
    pub fn internet_message_id(&self) -> Option<&str> {
        self.internet_message_id.as_deref()
    }
    pub fn set_internet_message_id(&mut self, value: Option<String>) {
        self.internet_message_id = value;
    }
    #[doc = "Indicates whether a read receipt is requested for the message."]
    pub fn is_delivery_receipt_requested(&self) -> Option<bool> {
        self.is_delivery_receipt_requested
    }
    pub fn set_is_delivery_receipt_requested(&mut self, value: Option<bool>) {
        self.is_delivery_receipt_requested = value;
    }
    #[doc = "Indicates whether the message is a draft.\n\n A message is a draft if it hasn't been sent yet."]
    pub fn is_draft(&self) -> Option<bool> {
        self.is_draft
    }
    pub fn set_is_draft(&mut self, value: Option<bool>) {
        self.is_draft = value;
    }
    #[doc = "Indicates whether the message has been read."]
    pub fn is_read(&self) -> Option<bool> {
        self.is_read
    }
    pub fn set_is_read(&mut self, value: Option<bool>) {
        self.is_read = value;
    }
    #[doc = "Indicates whether a read receipt is requested for the message."]
    pub fn is_read_receipt_requested(&self) -> Option<bool> {
        self.is_read_receipt_requested
    }
    pub fn set_is_read_receipt_requested(&mut self, value: Option<bool>) {
        self.is_read_receipt_requested = value;
    }
    #[doc = "The unique identifier for the message's parent mailFolder."]
    pub fn parent_folder_id(&self) -> Option<&str> {
        self.parent_folder_id.as_deref()
    }
    pub fn set_parent_folder_id(&mut self, value: Option<String>) {
        self.parent_folder_id = value;
    }
    #[doc = "The date and time the message was received.\n\n The date and time information uses ISO 8601 format and is always in UTC time."]
    pub fn received_date_time(&self) -> Option<OffsetDateTime> {
        self.received_date_time
    }
    pub fn set_received_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.received_date_time = value;
    }
    #[doc = "The account that is actually used to generate the message.\n\n In most cases, this value is the same as the from property."]
    pub fn sender(&self) -> Option<&Recipient> {
        self.sender.as_ref()
    }
    pub fn set_sender(&mut self, value: Option<Recipient>) {
        self.sender = value;
    }
    #[doc = "The date and time the message was sent.\n\n The date and time information uses ISO 8601 format and is always in UTC time."]
    pub fn sent_date_time(&self) -> Option<OffsetDateTime> {
        self.sent_date_time
    }
    pub fn set_sent_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.sent_date_time = value;
    }
    #[doc = "The subject of the message."]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
    pub fn set_subject(&mut self, value: Option<String>) {
        self.subject = value;
    }
    #[doc = "The To: recipients for the message."]
    pub fn to_recipients(&self) -> Option<&[Recipient]> {
        self.to_recipients.as_deref()
    }
    pub fn set_to_recipients(&mut self, value: Option<Vec<Recipient>>) {
        self.to_recipients = value;
    }
    #[doc = "The part of the body of the message that is unique to the current message.\n\n uniqueBody is not returned by default but can be retrieved for a given message by use of the ?`$select`=uniqueBody query."]
    pub fn unique_body(&self) -> Option<&ItemBody> {
        self.unique_body.as_ref()
    }
    pub fn set_unique_body(&mut self, value: Option<ItemBody>) {
        self.unique_body = value;
    }
    #[doc = "The URL to open the message in Outlook on the web."]
    pub fn web_link(&self) -> Option<&str> {
        self.web_link.as_deref()
    }
    pub fn set_web_link(&mut self, value: Option<String>) {
        self.web_link = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.outlook_item.write_properties(writer)?;
        writer.write_object_value(Some("body"), self.body.as_ref())?;
        writer.write_string_value(Some("bodyPreview"), self.body_preview.as_deref())?;
        writer.write_collection_of_object_values(
            Some("ccRecipients"),
            self.cc_recipients.as_deref(),
        )?;
        writer.write_string_value(Some("conversationId"), self.conversation_id.as_deref())?;
        writer.write_string_value(Some("conversationIndex"), self.conversation_index.as_deref())?;
        writer.write_object_value(Some("from"), self.from.as_ref())?;
        writer.write_bool_value(Some("hasAttachments"), self.has_attachments)?;
        writer.write_enum_value(Some("importance"), self.importance.as_ref())?;
        writer.write_string_value(Some("internetMessageId"), self.internet_message_id.as_deref())?;
        writer.write_bool_value(
            Some("isDeliveryReceiptRequested"),
            self.is_delivery_receipt_requested,
        )?;
        writer.write_bool_value(Some("isDraft"), self.is_draft)?;
        writer.write_bool_value(Some("isRead"), self.is_read)?;
        writer.write_bool_value(Some("isReadReceiptRequested"), self.is_read_receipt_requested)?;
        writer.write_string_value(Some("parentFolderId"), self.parent_folder_id.as_deref())?;
        writer.write_date_time_value(Some("receivedDateTime"), self.received_date_time)?;
        writer.write_object_value(Some("sender"), self.sender.as_ref())?;
        writer.write_date_time_value(Some("sentDateTime"), self.sent_date_time)?;
        writer.write_string_value(Some("subject"), self.subject.as_deref())?;
        writer.write_collection_of_object_values(
            Some("toRecipients"),
            self.to_recipients.as_deref(),
        )?;
        writer.write_object_value(Some("uniqueBody"), self.unique_body.as_ref())?;
        writer.write_string_value(Some("webLink"), self.web_link.as_deref())?;
        Ok(())
    }
}
impl Serializable for Message {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for Message {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for Message {
    fn additional_data(&self) -> &Map<String, Value> {
        self.outlook_item.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.outlook_item.additional_data_mut()
    }
}
impl Model for Message {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(OutlookItem::field_deserializers(), Self::outlook_item_mut);
        fields.insert(
            "body",
            field(|this: &mut Self, node| {
                this.body = node.get_object_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "bodyPreview",
            field(|this: &mut Self, node| {
                this.body_preview = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "ccRecipients",
            field(|this: &mut Self, node| {
                this.cc_recipients = node.get_collection_of_object_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "conversationId",
            field(|this: &mut Self, node| {
                this.conversation_id = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "conversationIndex",
            field(|this: &mut Self, node| {
                this.conversation_index = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "from",
            field(|this: &mut Self, node| {
                this.from = node.get_object_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "hasAttachments",
            field(|this: &mut Self, node| {
                this.has_attachments = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "importance",
            field(|this: &mut Self, node| {
                this.importance = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "internetMessageId",
            field(|this: &mut Self, node| {
                this.internet_message_id = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "isDeliveryReceiptRequested",
            field(|this: &mut Self, node| {
                this.is_delivery_receipt_requested = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "isDraft",
            field(|this: &mut Self, node| {
                this.is_draft = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "isRead",
            field(|this: &mut Self, node| {
                this.is_read = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "isReadReceiptRequested",
            field(|this: &mut Self, node| {
                this.is_read_receipt_requested = node.get_bool_value()?;
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
            "receivedDateTime",
            field(|this: &mut Self, node| {
                this.received_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "sender",
            field(|this: &mut Self, node| {
                this.sender = node.get_object_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "sentDateTime",
            field(|this: &mut Self, node| {
                this.sent_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "subject",
            field(|this: &mut Self, node| {
                this.subject = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "toRecipients",
            field(|this: &mut Self, node| {
                this.to_recipients = node.get_collection_of_object_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "uniqueBody",
            field(|this: &mut Self, node| {
                this.unique_body = node.get_object_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "webLink",
            field(|this: &mut Self, node| {
                this.web_link = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
