/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DeviceCompliancePolicyAssignment. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::device_and_app_management_assignment_target::*;
use crate::types::entity::*;
use serde_json::{Map, Value};
#[doc = "Device compliance policy assignment."]
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceCompliancePolicyAssignment {
    entity: Entity,
    target: Option<AnyDeviceAndAppManagementAssignmentTarget>,
}
impl Default for DeviceCompliancePolicyAssignment {
    fn default() -> Self {
        Self::new()
    }
}
impl DeviceCompliancePolicyAssignment {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceCompliancePolicyAssignment";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            target: None,
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
    #[doc = "Target for the compliance policy assignment."]
    pub fn target(&self) -> Option<&AnyDeviceAndAppManagementAssignmentTarget> {
        self.target.as_ref()
    }
    pub fn set_target(&mut self, value: Option<AnyDeviceAndAppManagementAssignmentTarget>) {
        self.target = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_object_value(Some("target"), self.target.as_ref())?;
        Ok(())
    }
}
impl Serializable for DeviceCompliancePolicyAssignment {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DeviceCompliancePolicyAssignment {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DeviceCompliancePolicyAssignment {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for DeviceCompliancePolicyAssignment {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "target",
            field(|this: &mut Self, node| {
                this.target = node.get_object_value()?;
                Ok(())
            }),
        );
        fields
    }
}
