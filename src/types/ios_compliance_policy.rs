/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to IosCompliancePolicy. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::device_compliance_policy::*;
use crate::types::device_threat_protection_level::*;
use crate::types::required_password_type::*;
use serde_json::{Map, Value};
#[doc = "This class contains compliance settings for IOS."]
#[derive(Clone, Debug, PartialEq)]
pub struct IosCompliancePolicy {
    device_compliance_policy: DeviceCompliancePolicy,
    device_threat_protection_enabled: Option<bool>,
    device_threat_protection_required_security_level: Option<DeviceThreatProtectionLevel>,
    managed_email_profile_required: Option<bool>,
    os_maximum_version: Option<String>,
    os_minimum_version: Option<String>,
    passcode_block_simple: Option<bool>,
    passcode_expiration_days: Option<i32>,
    passcode_minimum_character_set_count: Option<i32>,
    passcode_minimum_length: Option<i32>,
    passcode_minutes_of_inactivity_before_lock: Option<i32>,
    passcode_previous_passcode_block_count: Option<i32>,
    passcode_required: Option<bool>,
    passcode_required_type: Option<RequiredPasswordType>,
    security_block_jailbroken_devices: Option<bool>,
}
impl Default for IosCompliancePolicy {
    fn default() -> Self {
        Self::new()
    }
}
impl IosCompliancePolicy {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.iosCompliancePolicy";
    pub fn new() -> Self {
        let mut this = Self {
            device_compliance_policy: DeviceCompliancePolicy::new(),
            device_threat_protection_enabled: None,
            device_threat_protection_required_security_level: None,
            managed_email_profile_required: None,
            os_maximum_version: None,
            os_minimum_version: None,
            passcode_block_simple: None,
            passcode_expiration_days: None,
            passcode_minimum_character_set_count: None,
            passcode_minimum_length: None,
            passcode_minutes_of_inactivity_before_lock: None,
            passcode_previous_passcode_block_count: None,
            passcode_required: None,
            passcode_required_type: None,
            security_block_jailbroken_devices: None,
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `DeviceCompliancePolicy`."]
    pub fn device_compliance_policy(&self) -> &DeviceCompliancePolicy {
        &self.device_compliance_policy
    }
    #[doc = "Mutable accessor to inherited properties from `DeviceCompliancePolicy`."]
    pub fn device_compliance_policy_mut(&mut self) -> &mut DeviceCompliancePolicy {
        &mut self.device_compliance_policy
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.device_compliance_policy.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.device_compliance_policy.set_odata_type(value);
    }
    #[doc = "Require that devices have enabled device threat protection ."]
    pub fn device_threat_protection_enabled(&self) -> Option<bool> {
        self.device_threat_protection_enabled
    }
    pub fn set_device_threat_protection_enabled(&mut self, value: Option<bool>) {
        self.device_threat_protection_enabled = value;
    }
    #[doc = "Require Mobile Threat Protection minimum risk level to report noncompliance."]
    pub fn device_threat_protection_required_security_level(
        &self,
    ) -> Option<DeviceThreatProtectionLevel> {
        self.device_threat_protection_required_security_level
    }
    pub fn set_device_threat_protection_required_security_level(
        &mut self,
        value: Option<DeviceThreatProtectionLevel>,
    ) {
        self.device_threat_protection_required_security_level = value;
    }
    #[doc = "Indicates whether or not to require a managed email profile."]
    pub fn managed_email_profile_required(&self) -> Option<bool> {
        self.managed_email_profile_required
    }
    pub fn set_managed_email_profile_required(&mut self, value: Option<bool>) {
        self.managed_email_profile_required = value;
    }
    #[doc = "Maximum IOS version."]
    pub fn os_maximum_version(&self) -> Option<&str> {
        self.os_maximum_version.as_deref()
    }
    pub fn set_os_maximum_version(&mut self, value: Option<String>) {
        self.os_maximum_version = value;
    }
    #[doc = "Minimum IOS version."]
    pub fn os_minimum_version(&self) -> Option<&str> {
        self.os_minimum_version.as_deref()
    }
    pub fn set_os_minimum_version(&mut self, value: Option<String>) {
        self.os_minimum_version = value;
    }
    #[doc = "Indicates whether or not to block simple passcodes."]
    pub fn passcode_block_simple(&self) -> Option<bool> {
        self.passcode_block_simple
    }
    pub fn set_passcode_block_simple(&mut self, value: Option<bool>) {
        self.passcode_block_simple = value;
    }
    #[doc = "Number of days before the passcode expires.\n\n Valid values 1 to 65535"]
    pub fn passcode_expiration_days(&self) -> Option<i32> {
        self.passcode_expiration_days
    }
    pub fn set_passcode_expiration_days(&mut self, value: Option<i32>) {
        self.passcode_expiration_days = value;
    }
    #[doc = "The number of character sets required in the password."]
    pub fn passcode_minimum_character_set_count(&self) -> Option<i32> {
        self.passcode_minimum_character_set_count
    }
    pub fn set_passcode_minimum_character_set_count(&mut self, value: Option<i32>) {
        self.passcode_minimum_character_set_count = value;
    }
    #[doc = "Minimum length of passcode.\n\n Valid values 4 to 14"]
    pub fn passcode_minimum_length(&self) -> Option<i32> {
        self.passcode_minimum_length
    }
    pub fn set_passcode_minimum_length(&mut self, value: Option<i32>) {
        self.passcode_minimum_length = value;
    }
    #[doc = "Minutes of inactivity before a passcode is required."]
    pub fn passcode_minutes_of_inactivity_before_lock(&self) -> Option<i32> {
        self.passcode_minutes_of_inactivity_before_lock
    }
    pub fn set_passcode_minutes_of_inactivity_before_lock(&mut self, value: Option<i32>) {
        self.passcode_minutes_of_inactivity_before_lock = value;
    }
    #[doc = "Number of previous passcodes to block.\n\n Valid values 1 to 24"]
    pub fn passcode_previous_passcode_block_count(&self) -> Option<i32> {
        self.passcode_previous_passcode_block_count
    }
    pub fn set_passcode_previous_passcode_block_count(&mut self, value: Option<i32>) {
        self.passcode_previous_passcode_block_count = value;
    }
    #[doc = "Indicates whether or not to require a passcode."]
    pub fn passcode_required(&self) -> Option<bool> {
        self.passcode_required
    }
    pub fn set_passcode_required(&mut self, value: Option<bool>) {
        self.passcode_required = value;
    }
    #[doc = "The required passcode type."]
    pub fn passcode_required_type(&self) -> Option<RequiredPasswordType> {
        self.passcode_required_type
    }
    pub fn set_passcode_required_type(&mut self, value: Option<RequiredPasswordType>) {
        self.passcode_required_type = value;
    }
    #[doc = "Devices must not be jailbroken or rooted."]
    pub fn security_block_jailbroken_devices(&self) -> Option<bool> {
        self.security_block_jailbroken_devices
    }
    pub fn set_security_block_jailbroken_devices(&mut self, value: Option<bool>) {
        self.security_block_jailbroken_devices = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.device_compliance_policy.write_properties(writer)?;
        writer.write_bool_value(
            Some("deviceThreatProtectionEnabled"),
            self.device_threat_protection_enabled,
        )?;
        writer.write_enum_value(
            Some("deviceThreatProtectionRequiredSecurityLevel"),
            self.device_threat_protection_required_security_level.as_ref(),
        )?;
        writer.write_bool_value(
            Some("managedEmailProfileRequired"),
            self.managed_email_profile_required,
        )?;
        writer.write_string_value(Some("osMaximumVersion"), self.os_maximum_version.as_deref())?;
        writer.write_string_value(Some("osMinimumVersion"), self.os_minimum_version.as_deref())?;
        writer.write_bool_value(Some("passcodeBlockSimple"), self.passcode_block_simple)?;
        writer.write_i32_value(Some("passcodeExpirationDays"), self.passcode_expiration_days)?;
        writer.write_i32_value(
            Some("passcodeMinimumCharacterSetCount"),
            self.passcode_minimum_character_set_count,
        )?;
        writer.write_i32_value(Some("passcodeMinimumLength"), self.passcode_minimum_length)?;
        writer.write_i32_value(
            Some("passcodeMinutesOfInactivityBeforeLock"),
            self.passcode_minutes_of_inactivity_before_lock,
        )?;
        writer.write_i32_value(
            Some("passcodePreviousPasscodeBlockCount"),
            self.passcode_previous_passcode_block_count,
        )?;
        writer.write_bool_value(Some("passcodeRequired"), self.passcode_required)?;
        writer.write_enum_value(
            Some("passcodeRequiredType"),
            self.passcode_required_type.as_ref(),
        )?;
        writer.write_bool_value(
            Some("securityBlockJailbrokenDevices"),
            self.security_block_jailbroken_devices,
        )?;
        Ok(())
    }
}
impl Serializable for IosCompliancePolicy {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for IosCompliancePolicy {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for IosCompliancePolicy {
    fn additional_data(&self) -> &Map<String, Value> {
        self.device_compliance_policy.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.device_compliance_policy.additional_data_mut()
    }
}
impl Model for IosCompliancePolicy {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(
            DeviceCompliancePolicy::field_deserializers(),
            Self::device_compliance_policy_mut,
        );
        fields.insert(
            "deviceThreatProtectionEnabled",
            field(|this: &mut Self, node| {
                this.device_threat_protection_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "deviceThreatProtectionRequiredSecurityLevel",
            field(|this: &mut Self, node| {
                this.device_threat_protection_required_security_level = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "managedEmailProfileRequired",
            field(|this: &mut Self, node| {
                this.managed_email_profile_required = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "osMaximumVersion",
            field(|this: &mut Self, node| {
                this.os_maximum_version = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "osMinimumVersion",
            field(|this: &mut Self, node| {
                this.os_minimum_version = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodeBlockSimple",
            field(|this: &mut Self, node| {
                this.passcode_block_simple = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodeExpirationDays",
            field(|this: &mut Self, node| {
                this.passcode_expiration_days = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodeMinimumCharacterSetCount",
            field(|this: &mut Self, node| {
                this.passcode_minimum_character_set_count = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodeMinimumLength",
            field(|this: &mut Self, node| {
                this.passcode_minimum_length = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodeMinutesOfInactivityBeforeLock",
            field(|this: &mut Self, node| {
                this.passcode_minutes_of_inactivity_before_lock = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodePreviousPasscodeBlockCount",
            field(|this: &mut Self, node| {
                this.passcode_previous_passcode_block_count = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodeRequired",
            field(|this: &mut Self, node| {
                this.passcode_required = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passcodeRequiredType",
            field(|this: &mut Self, node| {
                this.passcode_required_type = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityBlockJailbrokenDevices",
            field(|this: &mut Self, node| {
                this.security_block_jailbroken_devices = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields
    }
}
