/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DeviceComplianceScheduledActionForRule. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::entity::*;
use serde_json::{Map, Value};
#[doc = "Scheduled Action for Rule"]
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceComplianceScheduledActionForRule {
    entity: Entity,
    rule_name: Option<String>,
}
impl Default for DeviceComplianceScheduledActionForRule {
    fn default() -> Self {
        Self::new()
    }
}
impl DeviceComplianceScheduledActionForRule {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceComplianceScheduledActionForRule";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            rule_name: None,
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
    #[doc = "Name of the rule which this scheduled action applies to.\n\n Currently scheduled actions are created per policy instead of per rule, thus RuleName is always set to default value PasswordRequired."]
    pub fn rule_name(&self) -> Option<&str> {
        self.rule_name.as_deref()
    }
    pub fn set_rule_name(&mut self, value: Option<String>) {
        self.rule_name = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_string_value(Some("ruleName"), self.rule_name.as_deref())?;
        Ok(())
    }
}
impl Serializable for DeviceComplianceScheduledActionForRule {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DeviceComplianceScheduledActionForRule {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DeviceComplianceScheduledActionForRule {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for DeviceComplianceScheduledActionForRule {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "ruleName",
            field(|this: &mut Self, node| {
                this.rule_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
