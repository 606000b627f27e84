/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DeviceComplianceActionItem. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::device_compliance_action_type::*;
use crate::types::entity::*;
use serde_json::{Map, Value};
#[doc = "Scheduled Action Configuration"]
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceComplianceActionItem {
    entity: Entity,
    action_type: Option<DeviceComplianceActionType>,
    grace_period_hours: Option<i32>,
    notification_message_cc_list: Option<Vec<String>>,
    notification_template_id: Option<String>,
}
impl Default for DeviceComplianceActionItem {
    fn default() -> Self {
        Self::new()
    }
}
impl DeviceComplianceActionItem {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceComplianceActionItem";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            action_type: None,
            grace_period_hours: None,
            notification_message_cc_list: None,
            notification_template_id: None,
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
    #[doc = "What action to take."]
    pub fn action_type(&self) -> Option<DeviceComplianceActionType> {
        self.action_type
    }
    pub fn set_action_type(&mut self, value: Option<DeviceComplianceActionType>) {
        self.action_type = value;
    }
    #[doc = "Number of hours to wait till the action will be enforced.\n\n Valid values 0 to 8760"]
    pub fn grace_period_hours(&self) -> Option<i32> {
        self.grace_period_hours
    }
    pub fn set_grace_period_hours(&mut self, value: Option<i32>) {
        self.grace_period_hours = value;
    }
    #[doc = "A list of group IDs to specify who to CC this notification message to."]
    pub fn notification_message_cc_list(&self) -> Option<&[String]> {
        self.notification_message_cc_list.as_deref()
    }
    pub fn set_notification_message_cc_list(&mut self, value: Option<Vec<String>>) {
        self.notification_message_cc_list = value;
    }
    #[doc = "What notification Message template to use"]
    pub fn notification_template_id(&self) -> Option<&str> {
        self.notification_template_id.as_deref()
    }
    pub fn set_notification_template_id(&mut self, value: Option<String>) {
        self.notification_template_id = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_enum_value(Some("actionType"), self.action_type.as_ref())?;
        writer.write_i32_value(Some("gracePeriodHours"), self.grace_period_hours)?;
        writer.write_collection_of_primitive_values(
            Some("notificationMessageCCList"),
            self.notification_message_cc_list.as_deref(),
        )?;
        writer.write_string_value(
            Some("notificationTemplateId"),
            self.notification_template_id.as_deref(),
        )?;
        Ok(())
    }
}
impl Serializable for DeviceComplianceActionItem {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DeviceComplianceActionItem {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DeviceComplianceActionItem {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for DeviceComplianceActionItem {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "actionType",
            field(|this: &mut Self, node| {
                this.action_type = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "gracePeriodHours",
            field(|this: &mut Self, node| {
                this.grace_period_hours = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "notificationMessageCCList",
            field(|this: &mut Self, node| {
                this.notification_message_cc_list = node.get_collection_of_primitive_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "notificationTemplateId",
            field(|this: &mut Self, node| {
                this.notification_template_id = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
