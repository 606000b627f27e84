/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Windows10CompliancePolicy. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::device_compliance_policy::*;
use crate::types::operating_system_version_range::*;
use crate::types::required_password_type::*;
use serde_json::{Map, Value};
#[doc = "This class contains compliance settings for Windows 10."]
#[derive(Clone, Debug, PartialEq)]
pub struct Windows10CompliancePolicy {
    device_compliance_policy: DeviceCompliancePolicy,
    bit_locker_enabled: Option<bool>,
    code_integrity_enabled: Option<bool>,
    early_launch_anti_malware_driver_enabled: Option<bool>,
    mobile_os_maximum_version: Option<String>,
    mobile_os_minimum_version: Option<String>,
    os_maximum_version: Option<String>,
    os_minimum_version: Option<String>,
    password_block_simple: Option<bool>,
    password_expiration_days: Option<i32>,
    password_minimum_character_set_count: Option<i32>,
    password_minimum_length: Option<i32>,
    password_minutes_of_inactivity_before_lock: Option<i32>,
    password_previous_password_block_count: Option<i32>,
    password_required: Option<bool>,
    password_required_to_unlock_from_idle: Option<bool>,
    password_required_type: Option<RequiredPasswordType>,
    require_healthy_device_report: Option<bool>,
    secure_boot_enabled: Option<bool>,
    storage_require_encryption: Option<bool>,
    valid_operating_system_build_ranges: Option<Vec<OperatingSystemVersionRange>>,
}
impl Default for Windows10CompliancePolicy {
    fn default() -> Self {
        Self::new()
    }
}
impl Windows10CompliancePolicy {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.windows10CompliancePolicy";
    pub fn new() -> Self {
        let mut this = Self {
            device_compliance_policy: DeviceCompliancePolicy::new(),
            bit_locker_enabled: None,
            code_integrity_enabled: None,
            early_launch_anti_malware_driver_enabled: None,
            mobile_os_maximum_version: None,
            mobile_os_minimum_version: None,
            os_maximum_version: None,
            os_minimum_version: None,
            password_block_simple: None,
            password_expiration_days: None,
            password_minimum_character_set_count: None,
            password_minimum_length: None,
            password_minutes_of_inactivity_before_lock: None,
            password_previous_password_block_count: None,
            password_required: None,
            password_required_to_unlock_from_idle: None,
            password_required_type: None,
            require_healthy_device_report: None,
            secure_boot_enabled: None,
            storage_require_encryption: None,
            valid_operating_system_build_ranges: None,
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
    #[doc = "Require devices to be reported healthy by Windows Device Health Attestation - bit locker is enabled"]
    pub fn bit_locker_enabled(&self) -> Option<bool> {
        self.bit_locker_enabled
    }
    pub fn set_bit_locker_enabled(&mut self, value: Option<bool>) {
        self.bit_locker_enabled = value;
    }
    #[doc = "Require devices to be reported as healthy by Windows Device Health Attestation."]
    pub fn code_integrity_enabled(&self) -> Option<bool> {
        self.code_integrity_enabled
    }
    pub fn set_code_integrity_enabled(&mut self, value: Option<bool>) {
        self.code_integrity_enabled = value;
    }
    #[doc = "Require devices to be reported as healthy by Windows Device Health Attestation - early launch antimalware driver is enabled."]
    pub fn early_launch_anti_malware_driver_enabled(&self) -> Option<bool> {
        self.early_launch_anti_malware_driver_enabled
    }
    pub fn set_early_launch_anti_malware_driver_enabled(&mut self, value: Option<bool>) {
        self.early_launch_anti_malware_driver_enabled = value;
    }
    #[doc = "Maximum Windows Phone version."]
    pub fn mobile_os_maximum_version(&self) -> Option<&str> {
        self.mobile_os_maximum_version.as_deref()
    }
    pub fn set_mobile_os_maximum_version(&mut self, value: Option<String>) {
        self.mobile_os_maximum_version = value;
    }
    #[doc = "Minimum Windows Phone version."]
    pub fn mobile_os_minimum_version(&self) -> Option<&str> {
        self.mobile_os_minimum_version.as_deref()
    }
    pub fn set_mobile_os_minimum_version(&mut self, value: Option<String>) {
        self.mobile_os_minimum_version = value;
    }
    #[doc = "Maximum Windows 10 version."]
    pub fn os_maximum_version(&self) -> Option<&str> {
        self.os_maximum_version.as_deref()
    }
    pub fn set_os_maximum_version(&mut self, value: Option<String>) {
        self.os_maximum_version = value;
    }
    #[doc = "Minimum Windows 10 version."]
    pub fn os_minimum_version(&self) -> Option<&str> {
        self.os_minimum_version.as_deref()
    }
    pub fn set_os_minimum_version(&mut self, value: Option<String>) {
        self.os_minimum_version = value;
    }
    #[doc = "Indicates whether or not to block simple password."]
    pub fn password_block_simple(&self) -> Option<bool> {
        self.password_block_simple
    }
    pub fn set_password_block_simple(&mut self, value: Option<bool>) {
        self.password_block_simple = value;
    }
    #[doc = "The password expiration in days."]
    pub fn password_expiration_days(&self) -> Option<i32> {
        self.password_expiration_days
    }
    pub fn set_password_expiration_days(&mut self, value: Option<i32>) {
        self.password_expiration_days = value;
    }
    #[doc = "The number of character sets required in the password."]
    pub fn password_minimum_character_set_count(&self) -> Option<i32> {
        self.password_minimum_character_set_count
    }
    pub fn set_password_minimum_character_set_count(&mut self, value: Option<i32>) {
        self.password_minimum_character_set_count = value;
    }
    #[doc = "The minimum password length."]
    pub fn password_minimum_length(&self) -> Option<i32> {
        self.password_minimum_length
    }
    pub fn set_password_minimum_length(&mut self, value: Option<i32>) {
        self.password_minimum_length = value;
    }
    #[doc = "Minutes of inactivity before a password is required."]
    pub fn password_minutes_of_inactivity_before_lock(&self) -> Option<i32> {
        self.password_minutes_of_inactivity_before_lock
    }
    pub fn set_password_minutes_of_inactivity_before_lock(&mut self, value: Option<i32>) {
        self.password_minutes_of_inactivity_before_lock = value;
    }
    #[doc = "The number of previous passwords to prevent re-use of."]
    pub fn password_previous_password_block_count(&self) -> Option<i32> {
        self.password_previous_password_block_count
    }
    pub fn set_password_previous_password_block_count(&mut self, value: Option<i32>) {
        self.password_previous_password_block_count = value;
    }
    #[doc = "Require a password to unlock Windows device."]
    pub fn password_required(&self) -> Option<bool> {
        self.password_required
    }
    pub fn set_password_required(&mut self, value: Option<bool>) {
        self.password_required = value;
    }
    #[doc = "Require a password to unlock an idle device."]
    pub fn password_required_to_unlock_from_idle(&self) -> Option<bool> {
        self.password_required_to_unlock_from_idle
    }
    pub fn set_password_required_to_unlock_from_idle(&mut self, value: Option<bool>) {
        self.password_required_to_unlock_from_idle = value;
    }
    #[doc = "The required password type."]
    pub fn password_required_type(&self) -> Option<RequiredPasswordType> {
        self.password_required_type
    }
    pub fn set_password_required_type(&mut self, value: Option<RequiredPasswordType>) {
        self.password_required_type = value;
    }
    #[doc = "Require devices to be reported as healthy by Windows Device Health Attestation."]
    pub fn require_healthy_device_report(&self) -> Option<bool> {
        self.require_healthy_device_report
    }
    pub fn set_require_healthy_device_report(&mut self, value: Option<bool>) {
        self.require_healthy_device_report = value;
    }
    #[doc = "Require devices to be reported as healthy by Windows Device Health Attestation - secure boot is enabled."]
    pub fn secure_boot_enabled(&self) -> Option<bool> {
        self.secure_boot_enabled
    }
    pub fn set_secure_boot_enabled(&mut self, value: Option<bool>) {
        self.secure_boot_enabled = value;
    }
    #[doc = "Require encryption on windows devices."]
    pub fn storage_require_encryption(&self) -> Option<bool> {
        self.storage_require_encryption
    }
    pub fn set_storage_require_encryption(&mut self, value: Option<bool>) {
        self.storage_require_encryption = value;
    }
    #[doc = "The valid operating system build ranges on Windows devices.\n\n This collection can contain a maximum of 10000 elements."]
    pub fn valid_operating_system_build_ranges(&self) -> Option<&[OperatingSystemVersionRange]> {
        self.valid_operating_system_build_ranges.as_deref()
    }
    pub fn set_valid_operating_system_build_ranges(
        &mut self,
        value: Option<Vec<OperatingSystemVersionRange>>,
    ) {
        self.valid_operating_system_build_ranges = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.device_compliance_policy.write_properties(writer)?;
        writer.write_bool_value(Some("bitLockerEnabled"), self.bit_locker_enabled)?;
        writer.write_bool_value(Some("codeIntegrityEnabled"), self.code_integrity_enabled)?;
        writer.write_bool_value(
            Some("earlyLaunchAntiMalwareDriverEnabled"),
            self.early_launch_anti_malware_driver_enabled,
        )?;
        writer.write_string_value(
            Some("mobileOsMaximumVersion"),
            self.mobile_os_maximum_version.as_deref(),
        )?;
        writer.write_string_value(
            Some("mobileOsMinimumVersion"),
            self.mobile_os_minimum_version.as_deref(),
        )?;
        writer.write_string_value(Some("osMaximumVersion"), self.os_maximum_version.as_deref())?;
        writer.write_string_value(Some("osMinimumVersion"), self.os_minimum_version.as_deref())?;
        writer.write_bool_value(Some("passwordBlockSimple"), self.password_block_simple)?;
        writer.write_i32_value(Some("passwordExpirationDays"), self.password_expiration_days)?;
        writer.write_i32_value(
            Some("passwordMinimumCharacterSetCount"),
            self.password_minimum_character_set_count,
        )?;
        writer.write_i32_value(Some("passwordMinimumLength"), self.password_minimum_length)?;
        writer.write_i32_value(
            Some("passwordMinutesOfInactivityBeforeLock"),
            self.password_minutes_of_inactivity_before_lock,
        )?;
        writer.write_i32_value(
            Some("passwordPreviousPasswordBlockCount"),
            self.password_previous_password_block_count,
        )?;
        writer.write_bool_value(Some("passwordRequired"), self.password_required)?;
        writer.write_bool_value(
            Some("passwordRequiredToUnlockFromIdle"),
            self.password_required_to_unlock_from_idle,
        )?;
        writer.write_enum_value(
            Some("passwordRequiredType"),
            self.password_required_type.as_ref(),
        )?;
        writer.write_bool_value(
            Some("requireHealthyDeviceReport"),
            self.require_healthy_device_report,
        )?;
        writer.write_bool_value(Some("secureBootEnabled"), self.secure_boot_enabled)?;
        writer.write_bool_value(Some("storageRequireEncryption"), self.storage_require_encryption)?;
        writer.write_collection_of_object_values(
            Some("validOperatingSystemBuildRanges"),
            self.valid_operating_system_build_ranges.as_deref(),
        )?;
        Ok(())
    }
}
impl Serializable for Windows10CompliancePolicy {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for Windows10CompliancePolicy {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for Windows10CompliancePolicy {
    fn additional_data(&self) -> &Map<String, Value> {
        self.device_compliance_policy.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.device_compliance_policy.additional_data_mut()
    }
}
impl Model for Windows10CompliancePolicy {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(
            DeviceCompliancePolicy::field_deserializers(),
            Self::device_compliance_policy_mut,
        );
        fields.insert(
            "bitLockerEnabled",
            field(|this: &mut Self, node| {
                this.bit_locker_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "codeIntegrityEnabled",
            field(|this: &mut Self, node| {
                this.code_integrity_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "earlyLaunchAntiMalwareDriverEnabled",
            field(|this: &mut Self, node| {
                this.early_launch_anti_malware_driver_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "mobileOsMaximumVersion",
            field(|this: &mut Self, node| {
                this.mobile_os_maximum_version = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "mobileOsMinimumVersion",
            field(|this: &mut Self, node| {
                this.mobile_os_minimum_version = node.get_string_value()?;
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
            "passwordBlockSimple",
            field(|this: &mut Self, node| {
                this.password_block_simple = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordExpirationDays",
            field(|this: &mut Self, node| {
                this.password_expiration_days = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordMinimumCharacterSetCount",
            field(|this: &mut Self, node| {
                this.password_minimum_character_set_count = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordMinimumLength",
            field(|this: &mut Self, node| {
                this.password_minimum_length = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordMinutesOfInactivityBeforeLock",
            field(|this: &mut Self, node| {
                this.password_minutes_of_inactivity_before_lock = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordPreviousPasswordBlockCount",
            field(|this: &mut Self, node| {
                this.password_previous_password_block_count = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordRequired",
            field(|this: &mut Self, node| {
                this.password_required = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordRequiredToUnlockFromIdle",
            field(|this: &mut Self, node| {
                this.password_required_to_unlock_from_idle = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "passwordRequiredType",
            field(|this: &mut Self, node| {
                this.password_required_type = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "requireHealthyDeviceReport",
            field(|this: &mut Self, node| {
                this.require_healthy_device_report = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "secureBootEnabled",
            field(|this: &mut Self, node| {
                this.secure_boot_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "storageRequireEncryption",
            field(|this: &mut Self, node| {
                this.storage_require_encryption = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "validOperatingSystemBuildRanges",
            field(|this: &mut Self, node| {
                this.valid_operating_system_build_ranges = node.get_collection_of_object_values()?;
                Ok(())
            }),
        );
        fields
    }
}
