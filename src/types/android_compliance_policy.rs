/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to AndroidCompliancePolicy. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::android_required_password_type::*;
use crate::types::device_compliance_policy::*;
use crate::types::device_threat_protection_level::*;
use serde_json::{Map, Value};
#[doc = "This class contains compliance settings for Android."]
#[derive(Clone, Debug, PartialEq)]
pub struct AndroidCompliancePolicy {
    device_compliance_policy: DeviceCompliancePolicy,
    device_threat_protection_enabled: Option<bool>,
    device_threat_protection_required_security_level: Option<DeviceThreatProtectionLevel>,
    min_android_security_patch_level: Option<String>,
    os_maximum_version: Option<String>,
    os_minimum_version: Option<String>,
    password_expiration_days: Option<i32>,
    password_minimum_length: Option<i32>,
    password_minutes_of_inactivity_before_lock: Option<i32>,
    password_previous_password_block_count: Option<i32>,
    password_required: Option<bool>,
    password_required_type: Option<AndroidRequiredPasswordType>,
    security_block_jailbroken_devices: Option<bool>,
    security_disable_usb_debugging: Option<bool>,
    security_prevent_install_apps_from_unknown_sources: Option<bool>,
    security_require_company_portal_app_integrity: Option<bool>,
    security_require_google_play_services: Option<bool>,
    security_require_safety_net_attestation_basic_integrity: Option<bool>,
    security_require_safety_net_attestation_certified_device: Option<bool>,
    security_require_up_to_date_security_providers: Option<bool>,
    security_require_verify_apps: Option<bool>,
    storage_require_encryption: Option<bool>,
}
impl Default for AndroidCompliancePolicy {
    fn default() -> Self {
        Self::new()
    }
}
impl AndroidCompliancePolicy {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.androidCompliancePolicy";
    pub fn new() -> Self {
        let mut this = Self {
            device_compliance_policy: DeviceCompliancePolicy::new(),
            device_threat_protection_enabled: None,
            device_threat_protection_required_security_level: None,
            min_android_security_patch_level: None,
            os_maximum_version: None,
            os_minimum_version: None,
            password_expiration_days: None,
            password_minimum_length: None,
            password_minutes_of_inactivity_before_lock: None,
            password_previous_password_block_count: None,
            password_required: None,
            password_required_type: None,
            security_block_jailbroken_devices: None,
            security_disable_usb_debugging: None,
            security_prevent_install_apps_from_unknown_sources: None,
            security_require_company_portal_app_integrity: None,
            security_require_google_play_services: None,
            security_require_safety_net_attestation_basic_integrity: None,
            security_require_safety_net_attestation_certified_device: None,
            security_require_up_to_date_security_providers: None,
            security_require_verify_apps: None,
            storage_require_encryption: None,
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
    #[doc = "Minimum Android security patch level."]
    pub fn min_android_security_patch_level(&self) -> Option<&str> {
        self.min_android_security_patch_level.as_deref()
    }
    pub fn set_min_android_security_patch_level(&mut self, value: Option<String>) {
        self.min_android_security_patch_level = value;
    }
    #[doc = "Maximum Android version."]
    pub fn os_maximum_version(&self) -> Option<&str> {
        self.os_maximum_version.as_deref()
    }
    pub fn set_os_maximum_version(&mut self, value: Option<String>) {
        self.os_maximum_version = value;
    }
    #[doc = "Minimum Android version."]
    pub fn os_minimum_version(&self) -> Option<&str> {
        self.os_minimum_version.as_deref()
    }
    pub fn set_os_minimum_version(&mut self, value: Option<String>) {
        self.os_minimum_version = value;
    }
    #[doc = "Number of days before the password expires.\n\n Valid values 1 to 365"]
    pub fn password_expiration_days(&self) -> Option<i32> {
        self.password_expiration_days
    }
    pub fn set_password_expiration_days(&mut self, value: Option<i32>) {
        self.password_expiration_days = value;
    }
    #[doc = "Minimum password length.\n\n Valid values 4 to 16"]
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
    #[doc = "Require a password to unlock device."]
    pub fn password_required(&self) -> Option<bool> {
        self.password_required
    }
    pub fn set_password_required(&mut self, value: Option<bool>) {
        self.password_required = value;
    }
    #[doc = "Type of characters in password."]
    pub fn password_required_type(&self) -> Option<AndroidRequiredPasswordType> {
        self.password_required_type
    }
    pub fn set_password_required_type(&mut self, value: Option<AndroidRequiredPasswordType>) {
        self.password_required_type = value;
    }
    #[doc = "Devices must not be jailbroken or rooted."]
    pub fn security_block_jailbroken_devices(&self) -> Option<bool> {
        self.security_block_jailbroken_devices
    }
    pub fn set_security_block_jailbroken_devices(&mut self, value: Option<bool>) {
        self.security_block_jailbroken_devices = value;
    }
    #[doc = "Disable USB debugging on Android devices."]
    pub fn security_disable_usb_debugging(&self) -> Option<bool> {
        self.security_disable_usb_debugging
    }
    pub fn set_security_disable_usb_debugging(&mut self, value: Option<bool>) {
        self.security_disable_usb_debugging = value;
    }
    #[doc = "Require that devices disallow installation of apps from unknown sources."]
    pub fn security_prevent_install_apps_from_unknown_sources(&self) -> Option<bool> {
        self.security_prevent_install_apps_from_unknown_sources
    }
    pub fn set_security_prevent_install_apps_from_unknown_sources(&mut self, value: Option<bool>) {
        self.security_prevent_install_apps_from_unknown_sources = value;
    }
    #[doc = "Require the device to pass the Company Portal client app runtime integrity check."]
    pub fn security_require_company_portal_app_integrity(&self) -> Option<bool> {
        self.security_require_company_portal_app_integrity
    }
    pub fn set_security_require_company_portal_app_integrity(&mut self, value: Option<bool>) {
        self.security_require_company_portal_app_integrity = value;
    }
    #[doc = "Require Google Play Services to be installed and enabled on the device."]
    pub fn security_require_google_play_services(&self) -> Option<bool> {
        self.security_require_google_play_services
    }
    pub fn set_security_require_google_play_services(&mut self, value: Option<bool>) {
        self.security_require_google_play_services = value;
    }
    #[doc = "Require the device to pass the SafetyNet basic integrity check."]
    pub fn security_require_safety_net_attestation_basic_integrity(&self) -> Option<bool> {
        self.security_require_safety_net_attestation_basic_integrity
    }
    pub fn set_security_require_safety_net_attestation_basic_integrity(
        &mut self,
        value: Option<bool>,
    ) {
        self.security_require_safety_net_attestation_basic_integrity = value;
    }
    #[doc = "Require the device to pass the SafetyNet certified device check."]
    pub fn security_require_safety_net_attestation_certified_device(&self) -> Option<bool> {
        self.security_require_safety_net_attestation_certified_device
    }
    pub fn set_security_require_safety_net_attestation_certified_device(
        &mut self,
        value: Option<bool>,
    ) {
        self.security_require_safety_net_attestation_certified_device = value;
    }
    #[doc = "Require the device to have up to date security providers."]
    pub fn security_require_up_to_date_security_providers(&self) -> Option<bool> {
        self.security_require_up_to_date_security_providers
    }
    pub fn set_security_require_up_to_date_security_providers(&mut self, value: Option<bool>) {
        self.security_require_up_to_date_security_providers = value;
    }
    #[doc = "Require the Android Verify apps feature is turned on."]
    pub fn security_require_verify_apps(&self) -> Option<bool> {
        self.security_require_verify_apps
    }
    pub fn set_security_require_verify_apps(&mut self, value: Option<bool>) {
        self.security_require_verify_apps = value;
    }
    #[doc = "Require encryption on Android devices."]
    pub fn storage_require_encryption(&self) -> Option<bool> {
        self.storage_require_encryption
    }
    pub fn set_storage_require_encryption(&mut self, value: Option<bool>) {
        self.storage_require_encryption = value;
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
        writer.write_string_value(
            Some("minAndroidSecurityPatchLevel"),
            self.min_android_security_patch_level.as_deref(),
        )?;
        writer.write_string_value(Some("osMaximumVersion"), self.os_maximum_version.as_deref())?;
        writer.write_string_value(Some("osMinimumVersion"), self.os_minimum_version.as_deref())?;
        writer.write_i32_value(Some("passwordExpirationDays"), self.password_expiration_days)?;
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
        writer.write_bool_value(
            Some("securityBlockJailbrokenDevices"),
            self.security_block_jailbroken_devices,
        )?;
        writer.write_bool_value(
            Some("securityDisableUsbDebugging"),
            self.security_disable_usb_debugging,
        )?;
        writer.write_bool_value(
            Some("securityPreventInstallAppsFromUnknownSources"),
            self.security_prevent_install_apps_from_unknown_sources,
        )?;
        writer.write_bool_value(
            Some("securityRequireCompanyPortalAppIntegrity"),
            self.security_require_company_portal_app_integrity,
        )?;
        writer.write_bool_value(
            Some("securityRequireGooglePlayServices"),
            self.security_require_google_play_services,
        )?;
        writer.write_bool_value(
            Some("securityRequireSafetyNetAttestationBasicIntegrity"),
            self.security_require_safety_net_attestation_basic_integrity,
        )?;
        writer.write_bool_value(
            Some("securityRequireSafetyNetAttestationCertifiedDevice"),
            self.security_require_safety_net_attestation_certified_device,
        )?;
        writer.write_bool_value(
            Some("securityRequireUpToDateSecurityProviders"),
            self.security_require_up_to_date_security_providers,
        )?;
        writer.write_bool_value(
            Some("securityRequireVerifyApps"),
            self.security_require_verify_apps,
        )?;
        writer.write_bool_value(Some("storageRequireEncryption"), self.storage_require_encryption)?;
        Ok(())
    }
}
impl Serializable for AndroidCompliancePolicy {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for AndroidCompliancePolicy {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for AndroidCompliancePolicy {
    fn additional_data(&self) -> &Map<String, Value> {
        self.device_compliance_policy.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.device_compliance_policy.additional_data_mut()
    }
}
impl Model for AndroidCompliancePolicy {
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
            "minAndroidSecurityPatchLevel",
            field(|this: &mut Self, node| {
                this.min_android_security_patch_level = node.get_string_value()?;
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
            "passwordExpirationDays",
            field(|this: &mut Self, node| {
                this.password_expiration_days = node.get_i32_value()?;
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
            "securityBlockJailbrokenDevices",
            field(|this: &mut Self, node| {
                this.security_block_jailbroken_devices = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityDisableUsbDebugging",
            field(|this: &mut Self, node| {
                this.security_disable_usb_debugging = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityPreventInstallAppsFromUnknownSources",
            field(|this: &mut Self, node| {
                this.security_prevent_install_apps_from_unknown_sources = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityRequireCompanyPortalAppIntegrity",
            field(|this: &mut Self, node| {
                this.security_require_company_portal_app_integrity = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityRequireGooglePlayServices",
            field(|this: &mut Self, node| {
                this.security_require_google_play_services = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityRequireSafetyNetAttestationBasicIntegrity",
            field(|this: &mut Self, node| {
                this.security_require_safety_net_attestation_basic_integrity =
                    node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityRequireSafetyNetAttestationCertifiedDevice",
            field(|this: &mut Self, node| {
                this.security_require_safety_net_attestation_certified_device =
                    node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityRequireUpToDateSecurityProviders",
            field(|this: &mut Self, node| {
                this.security_require_up_to_date_security_providers = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "securityRequireVerifyApps",
            field(|this: &mut Self, node| {
                this.security_require_verify_apps = node.get_bool_value()?;
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
        fields
    }
}
