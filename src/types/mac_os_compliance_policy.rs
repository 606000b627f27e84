/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MacOSCompliancePolicy. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::device_compliance_policy::*;
use crate::types::device_threat_protection_level::*;
use crate::types::required_password_type::*;
use serde_json::{Map, Value};
#[doc = "This class contains compliance settings for Mac OS."]
#[derive(Clone, Debug, PartialEq)]
pub struct MacOSCompliancePolicy {
    device_compliance_policy: DeviceCompliancePolicy,
    device_threat_protection_enabled: Option<bool>,
    device_threat_protection_required_security_level: Option<DeviceThreatProtectionLevel>,
    firewall_block_all_incoming: Option<bool>,
    firewall_enabled: Option<bool>,
    firewall_enable_stealth_mode: Option<bool>,
    os_maximum_version: Option<String>,
    os_minimum_version: Option<String>,
    password_block_simple: Option<bool>,
    password_expiration_days: Option<i32>,
    password_minimum_character_set_count: Option<i32>,
    password_minimum_length: Option<i32>,
    password_minutes_of_inactivity_before_lock: Option<i32>,
    password_previous_password_block_count: Option<i32>,
    password_required: Option<bool>,
    password_required_type: Option<RequiredPasswordType>,
    storage_require_encryption: Option<bool>,
    system_integrity_protection_enabled: Option<bool>,
}
impl Default for MacOSCompliancePolicy {
    fn default() -> Self {
        Self::new()
    }
}
impl MacOSCompliancePolicy {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.macOSCompliancePolicy";
    pub fn new() -> Self {
        let mut this = Self {
            device_compliance_policy: DeviceCompliancePolicy::new(),
            device_threat_protection_enabled: None,
            device_threat_protection_required_security_level: None,
            firewall_block_all_incoming: None,
            firewall_enabled: None,
            firewall_enable_stealth_mode: None,
            os_maximum_version: None,
            os_minimum_version: None,
            password_block_simple: None,
            password_expiration_days: None,
            password_minimum_character_set_count: None,
            password_minimum_length: None,
            password_minutes_of_inactivity_before_lock: None,
            password_previous_password_block_count: None,
            password_required: None,
            password_required_type: None,
            storage_require_encryption: None,
            system_integrity_protection_enabled: None,
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
    #[doc = "Require that devices have enabled device threat protection."]
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
    #[doc = "Corresponds to the 'Block all incoming connections' option."]
    pub fn firewall_block_all_incoming(&self) -> Option<bool> {
        self.firewall_block_all_incoming
    }
    pub fn set_firewall_block_all_incoming(&mut self, value: Option<bool>) {
        self.firewall_block_all_incoming = value;
    }
    #[doc = "Whether the firewall should be enabled or not."]
    pub fn firewall_enabled(&self) -> Option<bool> {
        self.firewall_enabled
    }
    pub fn set_firewall_enabled(&mut self, value: Option<bool>) {
        self.firewall_enabled = value;
    }
    #[doc = "Corresponds to 'Enable stealth mode.'"]
    pub fn firewall_enable_stealth_mode(&self) -> Option<bool> {
        self.firewall_enable_stealth_mode
    }
    pub fn set_firewall_enable_stealth_mode(&mut self, value: Option<bool>) {
        self.firewall_enable_stealth_mode = value;
    }
    #[doc = "Maximum MacOS version."]
    pub fn os_maximum_version(&self) -> Option<&str> {
        self.os_maximum_version.as_deref()
    }
    pub fn set_os_maximum_version(&mut self, value: Option<String>) {
        self.os_maximum_version = value;
    }
    #[doc = "Minimum MacOS version."]
    pub fn os_minimum_version(&self) -> Option<&str> {
        self.os_minimum_version.as_deref()
    }
    pub fn set_os_minimum_version(&mut self, value: Option<String>) {
        self.os_minimum_version = value;
    }
    #[doc = "Indicates whether or not to block simple passwords."]
    pub fn password_block_simple(&self) -> Option<bool> {
        self.password_block_simple
    }
    pub fn set_password_block_simple(&mut self, value: Option<bool>) {
        self.password_block_simple = value;
    }
    #[doc = "Number of days before the password expires.\n\n Valid values 1 to 65535"]
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
    #[doc = "Minimum length of password.\n\n Valid values 4 to 14"]
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
    #[doc = "Number of previous passwords to block.\n\n Valid values 1 to 24"]
    pub fn password_previous_password_block_count(&self) -> Option<i32> {
        self.password_previous_password_block_count
    }
    pub fn set_password_previous_password_block_count(&mut self, value: Option<i32>) {
        self.password_previous_password_block_count = value;
    }
    #[doc = "Whether or not to require a password."]
    pub fn password_required(&self) -> Option<bool> {
        self.password_required
    }
    pub fn set_password_required(&mut self, value: Option<bool>) {
        self.password_required = value;
    }
    #[doc = "The required password type."]
    pub fn password_required_type(&self) -> Option<RequiredPasswordType> {
        self.password_required_type
    }
    pub fn set_password_required_type(&mut self, value: Option<RequiredPasswordType>) {
        self.password_required_type = value;
    }
    #[doc = "Require encryption on Mac OS devices."]
    pub fn storage_require_encryption(&self) -> Option<bool> {
        self.storage_require_encryption
    }
    pub fn set_storage_require_encryption(&mut self, value: Option<bool>) {
        self.storage_require_encryption = value;
    }
    #[doc = "Require that devices have enabled system integrity protection."]
    pub fn system_integrity_protection_enabled(&self) -> Option<bool> {
        self.system_integrity_protection_enabled
    }
    pub fn set_system_integrity_protection_enabled(&mut self, value: Option<bool>) {
        self.system_integrity_protection_enabled = value;
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
            Some("firewallBlockAllIncoming"),
            self.firewall_block_all_incoming,
        )?;
        writer.write_bool_value(Some("firewallEnabled"), self.firewall_enabled)?;
        writer.write_bool_value(
            Some("firewallEnableStealthMode"),
            self.firewall_enable_stealth_mode,
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
        writer.write_enum_value(
            Some("passwordRequiredType"),
            self.password_required_type.as_ref(),
        )?;
        writer.write_bool_value(Some("storageRequireEncryption"), self.storage_require_encryption)?;
        writer.write_bool_value(
            Some("systemIntegrityProtectionEnabled"),
            self.system_integrity_protection_enabled,
        )?;
        Ok(())
    }
}
impl Serializable for MacOSCompliancePolicy {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for MacOSCompliancePolicy {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for MacOSCompliancePolicy {
    fn additional_data(&self) -> &Map<String, Value> {
        self.device_compliance_policy.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.device_compliance_policy.additional_data_mut()
    }
}
impl Model for MacOSCompliancePolicy {
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
            "firewallBlockAllIncoming",
            field(|this: &mut Self, node| {
                this.firewall_block_all_incoming = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "firewallEnabled",
            field(|this: &mut Self, node| {
                this.firewall_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "firewallEnableStealthMode",
            field(|this: &mut Self, node| {
                this.firewall_enable_stealth_mode = node.get_bool_value()?;
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
            "passwordRequiredType",
            field(|this: &mut Self, node| {
                this.password_required_type = node.get_enum_value()?;
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
            "systemIntegrityProtectionEnabled",
            field(|this: &mut Self, node| {
                this.system_integrity_protection_enabled = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields
    }
}
