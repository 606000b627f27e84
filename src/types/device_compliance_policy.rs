/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DeviceCompliancePolicy. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::android_compliance_policy::*;
use crate::types::entity::*;
use crate::types::ios_compliance_policy::*;
use crate::types::mac_os_compliance_policy::*;
use crate::types::windows10_compliance_policy::*;
use serde_json::{Map, Value};
use time::OffsetDateTime;
#[doc = "This is the base class for Compliance policy.\n\n Compliance policies are platform specific and individual per-platform compliance policies inherit from here."]
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceCompliancePolicy {
    entity: Entity,
    created_date_time: Option<OffsetDateTime>,
    description: Option<String>,
    display_name: Option<String>,
    last_modified_date_time: Option<OffsetDateTime>,
    version: Option<i32>,
}
impl Default for DeviceCompliancePolicy {
    fn default() -> Self {
        Self::new()
    }
}
impl DeviceCompliancePolicy {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceCompliancePolicy";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            created_date_time: None,
            description: None,
            display_name: None,
            last_modified_date_time: None,
            version: None,
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
    #[doc = "DateTime the object was created."]
    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }
    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }
    #[doc = "Admin provided description of the Device Configuration."]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }
    #[doc = "Admin provided name of the device configuration."]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }
    #[doc = "DateTime the object was last modified."]
    pub fn last_modified_date_time(&self) -> Option<OffsetDateTime> {
        self.last_modified_date_time
    }
    pub fn set_last_modified_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_modified_date_time = value;
    }
    #[doc = "Version of the device configuration."]
    pub fn version(&self) -> Option<i32> {
        self.version
    }
    pub fn set_version(&mut self, value: Option<i32>) {
        self.version = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_date_time_value(Some("createdDateTime"), self.created_date_time)?;
        writer.write_string_value(Some("description"), self.description.as_deref())?;
        writer.write_string_value(Some("displayName"), self.display_name.as_deref())?;
        writer.write_date_time_value(Some("lastModifiedDateTime"), self.last_modified_date_time)?;
        writer.write_i32_value(Some("version"), self.version)?;
        Ok(())
    }
}
impl Serializable for DeviceCompliancePolicy {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DeviceCompliancePolicy {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DeviceCompliancePolicy {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for DeviceCompliancePolicy {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "createdDateTime",
            field(|this: &mut Self, node| {
                this.created_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "description",
            field(|this: &mut Self, node| {
                this.description = node.get_string_value()?;
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
            "lastModifiedDateTime",
            field(|this: &mut Self, node| {
                this.last_modified_date_time = node.get_date_time_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "version",
            field(|this: &mut Self, node| {
                this.version = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `DeviceCompliancePolicy` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyDeviceCompliancePolicy {
    DeviceCompliancePolicy(DeviceCompliancePolicy),
    AndroidCompliancePolicy(AndroidCompliancePolicy),
    IosCompliancePolicy(IosCompliancePolicy),
    MacOSCompliancePolicy(MacOSCompliancePolicy),
    Windows10CompliancePolicy(Windows10CompliancePolicy),
}
impl AnyDeviceCompliancePolicy {
    #[doc = "Accessor to the properties every `DeviceCompliancePolicy` shares."]
    pub fn device_compliance_policy(&self) -> &DeviceCompliancePolicy {
        match self {
            Self::DeviceCompliancePolicy(value) => value,
            Self::AndroidCompliancePolicy(value) => value.device_compliance_policy(),
            Self::IosCompliancePolicy(value) => value.device_compliance_policy(),
            Self::MacOSCompliancePolicy(value) => value.device_compliance_policy(),
            Self::Windows10CompliancePolicy(value) => value.device_compliance_policy(),
        }
    }
    pub fn device_compliance_policy_mut(&mut self) -> &mut DeviceCompliancePolicy {
        match self {
            Self::DeviceCompliancePolicy(value) => value,
            Self::AndroidCompliancePolicy(value) => value.device_compliance_policy_mut(),
            Self::IosCompliancePolicy(value) => value.device_compliance_policy_mut(),
            Self::MacOSCompliancePolicy(value) => value.device_compliance_policy_mut(),
            Self::Windows10CompliancePolicy(value) => value.device_compliance_policy_mut(),
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.device_compliance_policy().odata_type()
    }
}
impl Parsable for AnyDeviceCompliancePolicy {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
            Some(AndroidCompliancePolicy::ODATA_TYPE) => {
                Ok(Self::AndroidCompliancePolicy(parse_object(node)?))
            }
            Some(IosCompliancePolicy::ODATA_TYPE) => {
                Ok(Self::IosCompliancePolicy(parse_object(node)?))
            }
            Some(MacOSCompliancePolicy::ODATA_TYPE) => {
                Ok(Self::MacOSCompliancePolicy(parse_object(node)?))
            }
            Some(Windows10CompliancePolicy::ODATA_TYPE) => {
                Ok(Self::Windows10CompliancePolicy(parse_object(node)?))
            }
            other => {
                log_base_fallback(other, DeviceCompliancePolicy::ODATA_TYPE);
                Ok(Self::DeviceCompliancePolicy(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyDeviceCompliancePolicy {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::DeviceCompliancePolicy(value) => value.serialize(writer),
            Self::AndroidCompliancePolicy(value) => value.serialize(writer),
            Self::IosCompliancePolicy(value) => value.serialize(writer),
            Self::MacOSCompliancePolicy(value) => value.serialize(writer),
            Self::Windows10CompliancePolicy(value) => value.serialize(writer),
        }
    }
}
impl From<DeviceCompliancePolicy> for AnyDeviceCompliancePolicy {
    fn from(value: DeviceCompliancePolicy) -> Self {
        Self::DeviceCompliancePolicy(value)
    }
}
impl From<AndroidCompliancePolicy> for AnyDeviceCompliancePolicy {
    fn from(value: AndroidCompliancePolicy) -> Self {
        Self::AndroidCompliancePolicy(value)
    }
}
impl From<IosCompliancePolicy> for AnyDeviceCompliancePolicy {
    fn from(value: IosCompliancePolicy) -> Self {
        Self::IosCompliancePolicy(value)
    }
}
impl From<MacOSCompliancePolicy> for AnyDeviceCompliancePolicy {
    fn from(value: MacOSCompliancePolicy) -> Self {
        Self::MacOSCompliancePolicy(value)
    }
}
impl From<Windows10CompliancePolicy> for AnyDeviceCompliancePolicy {
    fn from(value: Windows10CompliancePolicy) -> Self {
        Self::Windows10CompliancePolicy(value)
    }
}
