/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DeviceAndAppManagementAssignmentTarget. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::all_devices_assignment_target::*;
use crate::types::all_licensed_users_assignment_target::*;
use crate::types::configuration_manager_collection_assignment_target::*;
use crate::types::exclusion_group_assignment_target::*;
use crate::types::group_assignment_target::*;
use serde_json::{Map, Value};
#[doc = "Base type for assignment targets."]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceAndAppManagementAssignmentTarget {
    odata_type: Option<String>,
    additional_data: Map<String, Value>,
}
impl DeviceAndAppManagementAssignmentTarget {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceAndAppManagementAssignmentTarget";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        Ok(())
    }
}
impl Serializable for DeviceAndAppManagementAssignmentTarget {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DeviceAndAppManagementAssignmentTarget {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DeviceAndAppManagementAssignmentTarget {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for DeviceAndAppManagementAssignmentTarget {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::default();
        fields.insert(
            ODATA_TYPE_KEY,
            field(|this: &mut Self, node| {
                this.odata_type = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `DeviceAndAppManagementAssignmentTarget` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyDeviceAndAppManagementAssignmentTarget {
    DeviceAndAppManagementAssignmentTarget(DeviceAndAppManagementAssignmentTarget),
    AllDevicesAssignmentTarget(AllDevicesAssignmentTarget),
    AllLicensedUsersAssignmentTarget(AllLicensedUsersAssignmentTarget),
    GroupAssignmentTarget(GroupAssignmentTarget),
    ExclusionGroupAssignmentTarget(ExclusionGroupAssignmentTarget),
    ConfigurationManagerCollectionAssignmentTarget(ConfigurationManagerCollectionAssignmentTarget),
}
impl AnyDeviceAndAppManagementAssignmentTarget {
    #[doc = "Accessor to the properties every `DeviceAndAppManagementAssignmentTarget` shares."]
    pub fn device_and_app_management_assignment_target(&self) -> &DeviceAndAppManagementAssignmentTarget {
        match self {
            Self::DeviceAndAppManagementAssignmentTarget(value) => value,
            Self::AllDevicesAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target()
            }
            Self::AllLicensedUsersAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target()
            }
            Self::GroupAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target()
            }
            Self::ExclusionGroupAssignmentTarget(value) => {
                value.group_assignment_target().device_and_app_management_assignment_target()
            }
            Self::ConfigurationManagerCollectionAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target()
            }
        }
    }
    pub fn device_and_app_management_assignment_target_mut(&mut self) -> &mut DeviceAndAppManagementAssignmentTarget {
        match self {
            Self::DeviceAndAppManagementAssignmentTarget(value) => value,
            Self::AllDevicesAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target_mut()
            }
            Self::AllLicensedUsersAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target_mut()
            }
            Self::GroupAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target_mut()
            }
            Self::ExclusionGroupAssignmentTarget(value) => {
                value.group_assignment_target_mut().device_and_app_management_assignment_target_mut()
            }
            Self::ConfigurationManagerCollectionAssignmentTarget(value) => {
                value.device_and_app_management_assignment_target_mut()
            }
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.device_and_app_management_assignment_target().odata_type()
    }
}
impl Parsable for AnyDeviceAndAppManagementAssignmentTarget {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
            Some(AllDevicesAssignmentTarget::ODATA_TYPE) => {
                Ok(Self::AllDevicesAssignmentTarget(parse_object(node)?))
            }
            Some(AllLicensedUsersAssignmentTarget::ODATA_TYPE) => {
                Ok(Self::AllLicensedUsersAssignmentTarget(parse_object(node)?))
            }
            Some(GroupAssignmentTarget::ODATA_TYPE) => {
                Ok(Self::GroupAssignmentTarget(parse_object(node)?))
            }
            Some(ExclusionGroupAssignmentTarget::ODATA_TYPE) => {
                Ok(Self::ExclusionGroupAssignmentTarget(parse_object(node)?))
            }
            Some(ConfigurationManagerCollectionAssignmentTarget::ODATA_TYPE) => {
                Ok(Self::ConfigurationManagerCollectionAssignmentTarget(parse_object(node)?))
            }
            other => {
                log_base_fallback(other, DeviceAndAppManagementAssignmentTarget::ODATA_TYPE);
                Ok(Self::DeviceAndAppManagementAssignmentTarget(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyDeviceAndAppManagementAssignmentTarget {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::DeviceAndAppManagementAssignmentTarget(value) => value.serialize(writer),
            Self::AllDevicesAssignmentTarget(value) => value.serialize(writer),
            Self::AllLicensedUsersAssignmentTarget(value) => value.serialize(writer),
            Self::GroupAssignmentTarget(value) => value.serialize(writer),
            Self::ExclusionGroupAssignmentTarget(value) => value.serialize(writer),
            Self::ConfigurationManagerCollectionAssignmentTarget(value) => value.serialize(writer),
        }
    }
}
impl From<DeviceAndAppManagementAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: DeviceAndAppManagementAssignmentTarget) -> Self {
        Self::DeviceAndAppManagementAssignmentTarget(value)
    }
}
impl From<AllDevicesAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: AllDevicesAssignmentTarget) -> Self {
        Self::AllDevicesAssignmentTarget(value)
    }
}
impl From<AllLicensedUsersAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: AllLicensedUsersAssignmentTarget) -> Self {
        Self::AllLicensedUsersAssignmentTarget(value)
    }
}
impl From<GroupAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: GroupAssignmentTarget) -> Self {
        Self::GroupAssignmentTarget(value)
    }
}
impl From<ExclusionGroupAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: ExclusionGroupAssignmentTarget) -> Self {
        Self::ExclusionGroupAssignmentTarget(value)
    }
}
impl From<ConfigurationManagerCollectionAssignmentTarget> for AnyDeviceAndAppManagementAssignmentTarget {
    fn from(value: ConfigurationManagerCollectionAssignmentTarget) -> Self {
        Self::ConfigurationManagerCollectionAssignmentTarget(value)
    }
}
