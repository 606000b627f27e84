/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to GroupAssignmentTarget. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::device_and_app_management_assignment_target::*;
use crate::types::exclusion_group_assignment_target::*;
use serde_json::{Map, Value};
#[doc = "Represents an assignment to a group."]
#[derive(Clone, Debug, PartialEq)]
pub struct GroupAssignmentTarget {
    device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget,
    group_id: Option<String>,
}
impl Default for GroupAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}
impl GroupAssignmentTarget {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.groupAssignmentTarget";
    pub fn new() -> Self {
        let mut this = Self {
            device_and_app_management_assignment_target: DeviceAndAppManagementAssignmentTarget::new(),
            group_id: None,
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `DeviceAndAppManagementAssignmentTarget`."]
    pub fn device_and_app_management_assignment_target(
        &self,
    ) -> &DeviceAndAppManagementAssignmentTarget {
        &self.device_and_app_management_assignment_target
    }
    #[doc = "Mutable accessor to inherited properties from `DeviceAndAppManagementAssignmentTarget`."]
    pub fn device_and_app_management_assignment_target_mut(
        &mut self,
    ) -> &mut DeviceAndAppManagementAssignmentTarget {
        &mut self.device_and_app_management_assignment_target
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.device_and_app_management_assignment_target.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.device_and_app_management_assignment_target.set_odata_type(value);
    }
    #[doc = "The group Id that is the target of the assignment."]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }
    pub fn set_group_id(&mut self, value: Option<String>) {
        self.group_id = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.device_and_app_management_assignment_target.write_properties(writer)?;
        writer.write_string_value(Some("groupId"), self.group_id.as_deref())?;
        Ok(())
    }
}
impl Serializable for GroupAssignmentTarget {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for GroupAssignmentTarget {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for GroupAssignmentTarget {
    fn additional_data(&self) -> &Map<String, Value> {
        self.device_and_app_management_assignment_target.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.device_and_app_management_assignment_target.additional_data_mut()
    }
}
impl Model for GroupAssignmentTarget {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(
            DeviceAndAppManagementAssignmentTarget::field_deserializers(),
            Self::device_and_app_management_assignment_target_mut,
        );
        fields.insert(
            "groupId",
            field(|this: &mut Self, node| {
                this.group_id = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `GroupAssignmentTarget` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyGroupAssignmentTarget {
    GroupAssignmentTarget(GroupAssignmentTarget),
    ExclusionGroupAssignmentTarget(ExclusionGroupAssignmentTarget),
}
impl AnyGroupAssignmentTarget {
    #[doc = "Accessor to the properties every `GroupAssignmentTarget` shares."]
    pub fn group_assignment_target(&self) -> &GroupAssignmentTarget {
        match self {
            Self::GroupAssignmentTarget(value) => value,
            Self::ExclusionGroupAssignmentTarget(value) => value.group_assignment_target(),
        }
    }
    pub fn group_assignment_target_mut(&mut self) -> &mut GroupAssignmentTarget {
        match self {
            Self::GroupAssignmentTarget(value) => value,
            Self::ExclusionGroupAssignmentTarget(value) => value.group_assignment_target_mut(),
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.group_assignment_target().odata_type()
    }
}
impl Parsable for AnyGroupAssignmentTarget {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
            Some(ExclusionGroupAssignmentTarget::ODATA_TYPE) => {
                Ok(Self::ExclusionGroupAssignmentTarget(parse_object(node)?))
            }
            other => {
                log_base_fallback(other, GroupAssignmentTarget::ODATA_TYPE);
                Ok(Self::GroupAssignmentTarget(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyGroupAssignmentTarget {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::GroupAssignmentTarget(value) => value.serialize(writer),
            Self::ExclusionGroupAssignmentTarget(value) => value.serialize(writer),
        }
    }
}
impl From<GroupAssignmentTarget> for AnyGroupAssignmentTarget {
    fn from(value: GroupAssignmentTarget) -> Self {
        Self::GroupAssignmentTarget(value)
    }
}
impl From<ExclusionGroupAssignmentTarget> for AnyGroupAssignmentTarget {
    fn from(value: ExclusionGroupAssignmentTarget) -> Self {
        Self::ExclusionGroupAssignmentTarget(value)
    }
}
