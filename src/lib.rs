/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Models for the [Microsoft Graph API](https://learn.microsoft.com/graph/api/overview).
//!
//! Every Graph type in [`types`] is a plain struct with optional, typed
//! properties. Values the model doesn't know about are kept in an
//! additional-data map so they survive a round trip. Types belonging to an
//! OData inheritance hierarchy are resolved through the `@odata.type`
//! discriminator into an `Any*` enum.
//!
//! Reading and writing happens through the [`serialization::ParseNode`] and
//! [`serialization::SerializationWriter`] boundary; [`serialization::json`]
//! provides the JSON implementation of both.

use thiserror::Error;

pub mod serialization;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use serialization::json::{Json, from_slice, from_str, from_value, to_string, to_value};

#[derive(Debug, Error)]
pub enum Error {
    #[error("property has an unexpected type: expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: String,
    },

    #[error("property value could not be interpreted: {0}")]
    InvalidValue(String),

    #[error("serialization writer misused: {0}")]
    WriterState(&'static str),

    #[error("an error occurred while (de)serializing JSON")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unexpected(expected: &'static str, found: &serde_json::Value) -> Self {
        Error::UnexpectedType {
            expected,
            found: format!("{found:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};
    use time::macros::datetime;
    use uuid::uuid;

    use super::serialization::AdditionalDataHolder;
    use super::test_utils::{
        assert_deserialized_content, assert_round_trip, assert_serialized_content,
    };
    use super::types::{
        all_devices_assignment_target::AllDevicesAssignmentTarget,
        all_licensed_users_assignment_target::AllLicensedUsersAssignmentTarget,
        android_compliance_policy::AndroidCompliancePolicy,
        android_required_password_type::AndroidRequiredPasswordType,
        assigned_license::AssignedLicense,
        body_type::BodyType,
        configuration_manager_collection_assignment_target::ConfigurationManagerCollectionAssignmentTarget,
        device_and_app_management_assignment_target::AnyDeviceAndAppManagementAssignmentTarget,
        device_compliance_action_item::DeviceComplianceActionItem,
        device_compliance_action_type::DeviceComplianceActionType,
        device_compliance_policy::AnyDeviceCompliancePolicy,
        device_compliance_policy_assignment::DeviceCompliancePolicyAssignment,
        device_compliance_policy_collection_response::DeviceCompliancePolicyCollectionResponse,
        device_threat_protection_level::DeviceThreatProtectionLevel,
        domain_dns_cname_record::DomainDnsCnameRecord,
        domain_dns_mx_record::DomainDnsMxRecord,
        domain_dns_record::{AnyDomainDnsRecord, DomainDnsRecord},
        domain_dns_record_collection_response::DomainDnsRecordCollectionResponse,
        domain_dns_srv_record::DomainDnsSrvRecord,
        domain_dns_txt_record::DomainDnsTxtRecord,
        domain_dns_unavailable_record::DomainDnsUnavailableRecord,
        email_address::EmailAddress,
        entity::AnyEntity,
        exclusion_group_assignment_target::ExclusionGroupAssignmentTarget,
        group_assignment_target::GroupAssignmentTarget,
        importance::Importance,
        item_body::ItemBody,
        mailbox_settings::MailboxSettings,
        mail_folder::MailFolder,
        mail_folder_collection_response::MailFolderCollectionResponse,
        message::Message,
        recipient::Recipient,
        required_password_type::RequiredPasswordType,
        user::User,
        virtual_event_registration_custom_question::VirtualEventRegistrationCustomQuestion,
        virtual_event_registration_predefined_question::VirtualEventRegistrationPredefinedQuestion,
        virtual_event_registration_predefined_question_label::VirtualEventRegistrationPredefinedQuestionLabel,
        virtual_event_registration_question_answer_input_type::VirtualEventRegistrationQuestionAnswerInputType,
        virtual_event_registration_question_base::AnyVirtualEventRegistrationQuestionBase,
    };
    use super::{Error, Json, from_str, to_string};

    #[test]
    fn deserialize_user() {
        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
    "businessPhones": [],
    "displayName": "Adele Vance",
    "givenName": "Adele",
    "jobTitle": null,
    "mail": "AdeleV@M365x63639251.OnMicrosoft.com",
    "mobilePhone": null,
    "officeLocation": null,
    "preferredLanguage": null,
    "surname": "Vance",
    "userPrincipalName": "AdeleV@M365x63639251.OnMicrosoft.com",
    "id": "3a2bc284-f11c-4676-a9e1-6310eea60f26"
}"#;

        let mut expected = User::new();
        expected.set_business_phones(Some(vec![]));
        expected.set_display_name(Some("Adele Vance".to_string()));
        expected.set_given_name(Some("Adele".to_string()));
        expected.set_mail(Some("AdeleV@M365x63639251.OnMicrosoft.com".to_string()));
        expected.set_surname(Some("Vance".to_string()));
        expected.set_user_principal_name(Some("AdeleV@M365x63639251.OnMicrosoft.com".to_string()));
        expected
            .directory_object_mut()
            .entity_mut()
            .set_id(Some("3a2bc284-f11c-4676-a9e1-6310eea60f26".to_string()));
        expected.set_additional_data(Map::from_iter([(
            "@odata.context".to_string(),
            "https://graph.microsoft.com/v1.0/$metadata#users/$entity".into(),
        )]));

        assert_deserialized_content(json, expected);
    }

    #[test]
    fn null_and_absent_properties_are_unset() {
        let user: User = from_str(r#"{ "jobTitle": null, "accountEnabled": null }"#).unwrap();
        assert_eq!(user.job_title(), None);
        assert_eq!(user.account_enabled(), None);
        assert_eq!(user.surname(), None);
        assert!(user.additional_data().is_empty());
    }

    #[test]
    fn deserialize_user_with_licenses() {
        let json = r#"{
    "id": "87d349ed-44d7-43e1-9a83-5f2406dee5bd",
    "accountEnabled": true,
    "createdDateTime": "2021-02-08T17:31:59Z",
    "otherMails": ["megan@contoso.com", "meganb@fabrikam.com"],
    "assignedLicenses": [
        {
            "disabledPlans": ["a23b959c-7ce8-4e57-9140-b90eb88a9e97"],
            "skuId": "c7df2760-2c81-4ef7-b578-5b5392b571df"
        }
    ],
    "mailboxSettings": {
        "timeZone": "Pacific Standard Time",
        "dateFormat": "M/d/yyyy"
    }
}"#;

        let user: User = from_str(json).unwrap();
        assert_eq!(user.account_enabled(), Some(true));
        assert_eq!(user.created_date_time(), Some(datetime!(2021-02-08 17:31:59 UTC)));
        assert_eq!(
            user.other_mails(),
            Some(&["megan@contoso.com".to_string(), "meganb@fabrikam.com".to_string()][..])
        );

        let mut license = AssignedLicense::new();
        license.set_disabled_plans(Some(vec![uuid!("a23b959c-7ce8-4e57-9140-b90eb88a9e97")]));
        license.set_sku_id(Some(uuid!("c7df2760-2c81-4ef7-b578-5b5392b571df")));
        assert_eq!(user.assigned_licenses(), Some(&[license][..]));

        let settings = user.mailbox_settings().expect("mailbox settings should be present");
        assert_eq!(settings.time_zone(), Some("Pacific Standard Time"));
        assert_eq!(settings.date_format(), Some("M/d/yyyy"));
        assert_eq!(settings.time_format(), None);
    }

    #[test]
    fn mx_record_round_trips_through_discriminator() {
        let json = r##"{"@odata.type":"#microsoft.graph.domainDnsMxRecord","preference":10}"##;

        let record: AnyDomainDnsRecord = from_str(json).unwrap();
        let AnyDomainDnsRecord::DomainDnsMxRecord(mx) = &record else {
            panic!("expected an MX record, got {record:?}");
        };
        assert_eq!(mx.preference(), Some(10));
        assert_eq!(mx.mail_exchange(), None);
        assert_eq!(record.odata_type(), Some(DomainDnsMxRecord::ODATA_TYPE));

        assert_eq!(to_string(&record).unwrap(), json);
    }

    #[test]
    fn dns_records_route_to_their_subtype() {
        let json = r##"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#domainDnsRecords",
    "@odata.nextLink": "https://graph.microsoft.com/v1.0/domains/contoso.com/serviceConfigurationRecords?$skiptoken=X",
    "value": [
        {
            "@odata.type": "#microsoft.graph.domainDnsCnameRecord",
            "id": "1",
            "isOptional": false,
            "label": "autodiscover.contoso.com",
            "recordType": "CName",
            "supportedService": "Email",
            "ttl": 3600,
            "canonicalName": "autodiscover.outlook.com"
        },
        {
            "@odata.type": "#microsoft.graph.domainDnsSrvRecord",
            "id": "2",
            "nameTarget": "sipdir.online.lync.com",
            "port": 443,
            "priority": 100,
            "protocol": "_tcp",
            "service": "_sip",
            "weight": 1
        },
        {
            "@odata.type": "#microsoft.graph.domainDnsTxtRecord",
            "id": "3",
            "text": "v=spf1 include:spf.protection.outlook.com -all"
        },
        {
            "@odata.type": "#microsoft.graph.domainDnsUnavailableRecord",
            "id": "4",
            "description": "Domain is not verified"
        },
        {
            "id": "5",
            "label": "contoso.com"
        }
    ]
}"##;

        let response: DomainDnsRecordCollectionResponse = from_str(json).unwrap();
        assert_eq!(
            response.base_collection_pagination_count_response().odata_next_link(),
            Some(
                "https://graph.microsoft.com/v1.0/domains/contoso.com/serviceConfigurationRecords?$skiptoken=X"
            )
        );
        assert!(response.additional_data().contains_key("@odata.context"));

        let records = response.value().expect("value should be present");
        assert_eq!(records.len(), 5);

        let ids: Vec<_> = records
            .iter()
            .map(|record| record.domain_dns_record().entity().id())
            .collect();
        assert_eq!(ids, [Some("1"), Some("2"), Some("3"), Some("4"), Some("5")]);

        match &records[0] {
            AnyDomainDnsRecord::DomainDnsCnameRecord(cname) => {
                assert_eq!(cname.canonical_name(), Some("autodiscover.outlook.com"));
                assert_eq!(cname.domain_dns_record().ttl(), Some(3600));
                assert_eq!(cname.domain_dns_record().is_optional(), Some(false));
            }
            other => panic!("expected a CNAME record, got {other:?}"),
        }
        match &records[1] {
            AnyDomainDnsRecord::DomainDnsSrvRecord(srv) => {
                assert_eq!(srv.port(), Some(443));
                assert_eq!(srv.service(), Some("_sip"));
                assert_eq!(srv.weight(), Some(1));
            }
            other => panic!("expected an SRV record, got {other:?}"),
        }
        match &records[2] {
            AnyDomainDnsRecord::DomainDnsTxtRecord(txt) => {
                assert_eq!(
                    txt.text(),
                    Some("v=spf1 include:spf.protection.outlook.com -all")
                );
            }
            other => panic!("expected a TXT record, got {other:?}"),
        }
        match &records[3] {
            AnyDomainDnsRecord::DomainDnsUnavailableRecord(unavailable) => {
                assert_eq!(unavailable.description(), Some("Domain is not verified"));
            }
            other => panic!("expected an unavailable record, got {other:?}"),
        }
        match &records[4] {
            AnyDomainDnsRecord::DomainDnsRecord(base) => {
                assert_eq!(base.label(), Some("contoso.com"));
                assert_eq!(base.odata_type(), Some(DomainDnsRecord::ODATA_TYPE));
            }
            other => panic!("expected a plain record, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_discriminator_falls_back_to_base() {
        let json = r##"{
    "@odata.type": "#microsoft.graph.domainDnsCaaRecord",
    "label": "contoso.com",
    "flags": 0
}"##;

        let record: AnyDomainDnsRecord = from_str(json).unwrap();
        let AnyDomainDnsRecord::DomainDnsRecord(base) = &record else {
            panic!("expected the base record, got {record:?}");
        };
        assert_eq!(base.odata_type(), Some("#microsoft.graph.domainDnsCaaRecord"));
        assert_eq!(base.label(), Some("contoso.com"));
        assert_eq!(base.additional_data().get("flags"), Some(&json!(0)));

        // The unknown discriminator and members survive re-serialization.
        assert_serialized_content(&record, json);

        let record: AnyDomainDnsRecord = from_str(r#"{ "@odata.type": null }"#).unwrap();
        assert!(matches!(record, AnyDomainDnsRecord::DomainDnsRecord(_)));
    }

    #[test]
    fn assignment_targets_route_through_two_levels() {
        let json = r##"[
    { "@odata.type": "#microsoft.graph.allDevicesAssignmentTarget" },
    { "@odata.type": "#microsoft.graph.allLicensedUsersAssignmentTarget" },
    { "@odata.type": "#microsoft.graph.groupAssignmentTarget", "groupId": "group-a" },
    { "@odata.type": "#microsoft.graph.exclusionGroupAssignmentTarget", "groupId": "group-b" },
    { "@odata.type": "#microsoft.graph.configurationManagerCollectionAssignmentTarget", "collectionId": "SMS00001" }
]"##;

        let value: Value = serde_json::from_str(json).unwrap();
        let targets: Vec<AnyDeviceAndAppManagementAssignmentTarget> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|value| crate::from_value(value).unwrap())
            .collect();

        assert!(matches!(
            targets[0],
            AnyDeviceAndAppManagementAssignmentTarget::AllDevicesAssignmentTarget(_)
        ));
        assert!(matches!(
            targets[1],
            AnyDeviceAndAppManagementAssignmentTarget::AllLicensedUsersAssignmentTarget(_)
        ));
        match &targets[2] {
            AnyDeviceAndAppManagementAssignmentTarget::GroupAssignmentTarget(group) => {
                assert_eq!(group.group_id(), Some("group-a"));
            }
            other => panic!("expected a group target, got {other:?}"),
        }
        match &targets[3] {
            AnyDeviceAndAppManagementAssignmentTarget::ExclusionGroupAssignmentTarget(group) => {
                assert_eq!(group.group_assignment_target().group_id(), Some("group-b"));
            }
            other => panic!("expected an exclusion group target, got {other:?}"),
        }
        match &targets[4] {
            AnyDeviceAndAppManagementAssignmentTarget::ConfigurationManagerCollectionAssignmentTarget(
                collection,
            ) => {
                assert_eq!(collection.collection_id(), Some("SMS00001"));
            }
            other => panic!("expected a collection target, got {other:?}"),
        }

        for (target, original) in targets.iter().zip(value.as_array().unwrap()) {
            assert_eq!(&crate::to_value(target).unwrap(), original);
        }
    }

    #[test]
    fn compliance_policies_route_by_platform() {
        let json = r##"{
    "@odata.count": 3,
    "value": [
        {
            "@odata.type": "#microsoft.graph.androidCompliancePolicy",
            "id": "android",
            "displayName": "Android baseline",
            "version": 7,
            "createdDateTime": "2024-03-01T08:00:00.5Z",
            "passwordRequired": true,
            "passwordMinimumLength": 6,
            "passwordRequiredType": "alphanumericWithSymbols",
            "deviceThreatProtectionRequiredSecurityLevel": "medium"
        },
        {
            "@odata.type": "#microsoft.graph.iosCompliancePolicy",
            "id": "ios",
            "passcodeRequiredType": "numeric",
            "securityBlockJailbrokenDevices": true
        },
        {
            "@odata.type": "#microsoft.graph.windows10CompliancePolicy",
            "id": "windows",
            "bitLockerEnabled": true,
            "validOperatingSystemBuildRanges": [
                { "description": "22H2", "lowestVersion": "10.0.19045.0", "highestVersion": "10.0.19045.9999" },
                { "description": "23H2", "lowestVersion": "10.0.22631.0", "highestVersion": "10.0.22631.9999" }
            ]
        }
    ]
}"##;

        let response: DeviceCompliancePolicyCollectionResponse = from_str(json).unwrap();
        assert_eq!(
            response.base_collection_pagination_count_response().odata_count(),
            Some(3)
        );
        let policies = response.value().expect("value should be present");

        let AnyDeviceCompliancePolicy::AndroidCompliancePolicy(android) = &policies[0] else {
            panic!("expected an Android policy, got {:?}", policies[0]);
        };
        let base = android.device_compliance_policy();
        assert_eq!(base.display_name(), Some("Android baseline"));
        assert_eq!(base.version(), Some(7));
        assert_eq!(
            base.created_date_time(),
            Some(datetime!(2024-03-01 08:00:00.5 UTC))
        );
        assert_eq!(android.password_minimum_length(), Some(6));
        assert_eq!(
            android.password_required_type().map(|t| t.to_string()),
            Some("alphanumericWithSymbols".to_string())
        );
        assert_eq!(
            android.device_threat_protection_required_security_level(),
            Some(DeviceThreatProtectionLevel::Medium)
        );

        let AnyDeviceCompliancePolicy::IosCompliancePolicy(ios) = &policies[1] else {
            panic!("expected an iOS policy, got {:?}", policies[1]);
        };
        assert_eq!(ios.passcode_required_type(), Some(RequiredPasswordType::Numeric));
        assert_eq!(ios.security_block_jailbroken_devices(), Some(true));

        let AnyDeviceCompliancePolicy::Windows10CompliancePolicy(windows) = &policies[2] else {
            panic!("expected a Windows 10 policy, got {:?}", policies[2]);
        };
        assert_eq!(windows.bit_locker_enabled(), Some(true));
        let ranges = windows.valid_operating_system_build_ranges().unwrap();
        assert_eq!(
            ranges.iter().map(|r| r.description()).collect::<Vec<_>>(),
            [Some("22H2"), Some("23H2")]
        );
        assert_eq!(ranges[1].lowest_version(), Some("10.0.22631.0"));

        assert_round_trip(&response);
    }

    #[test]
    fn deserialize_assignment_and_actions() {
        let json = r##"{
    "id": "assignment",
    "target": {
        "@odata.type": "#microsoft.graph.exclusionGroupAssignmentTarget",
        "groupId": "contractors"
    }
}"##;

        let assignment: DeviceCompliancePolicyAssignment = from_str(json).unwrap();
        assert_eq!(assignment.entity().id(), Some("assignment"));
        match assignment.target() {
            Some(AnyDeviceAndAppManagementAssignmentTarget::ExclusionGroupAssignmentTarget(
                target,
            )) => assert_eq!(target.group_assignment_target().group_id(), Some("contractors")),
            other => panic!("expected an exclusion group target, got {other:?}"),
        }
        assert_serialized_content(
            &assignment,
            r##"{
    "@odata.type": "#microsoft.graph.deviceCompliancePolicyAssignment",
    "id": "assignment",
    "target": {
        "@odata.type": "#microsoft.graph.exclusionGroupAssignmentTarget",
        "groupId": "contractors"
    }
}"##,
        );

        let json = r##"[
    { "actionType": "block", "gracePeriodHours": 0, "notificationMessageCCList": [] },
    {
        "actionType": "pushNotification",
        "gracePeriodHours": 24,
        "notificationMessageCCList": ["group-1", "group-2"]
    }
]"##;
        let value: Value = serde_json::from_str(json).unwrap();
        let actions: Vec<DeviceComplianceActionItem> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|value| crate::from_value(value).unwrap())
            .collect();
        assert_eq!(
            actions.iter().map(|a| a.action_type()).collect::<Vec<_>>(),
            [
                Some(DeviceComplianceActionType::Block),
                Some(DeviceComplianceActionType::PushNotification)
            ]
        );
        assert_eq!(actions[0].notification_message_cc_list(), Some(&[][..]));
        assert_eq!(
            actions[1].notification_message_cc_list(),
            Some(&["group-1".to_string(), "group-2".to_string()][..])
        );
        assert_eq!(actions[1].grace_period_hours(), Some(24));
    }

    #[test]
    fn unknown_enum_member_is_an_error() {
        let json = r##"{
    "@odata.type": "#microsoft.graph.iosCompliancePolicy",
    "passcodeRequiredType": "emoji"
}"##;

        let err = from_str::<AnyDeviceCompliancePolicy>(json).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn registration_questions_route_to_their_subtype() {
        let json = r##"[
    {
        "@odata.type": "#microsoft.graph.virtualEventRegistrationCustomQuestion",
        "id": "q1",
        "displayName": "Which sessions will you attend?",
        "isRequired": true,
        "answerInputType": "multiChoice",
        "answerChoices": ["Keynote", "Workshop", "Panel"]
    },
    {
        "@odata.type": "#microsoft.graph.virtualEventRegistrationPredefinedQuestion",
        "id": "q2",
        "displayName": "Postal code",
        "isRequired": false,
        "label": "postalCode"
    }
]"##;

        let value: Value = serde_json::from_str(json).unwrap();
        let questions = value.as_array().unwrap();

        let custom: AnyVirtualEventRegistrationQuestionBase =
            crate::from_value(&questions[0]).unwrap();
        let AnyVirtualEventRegistrationQuestionBase::VirtualEventRegistrationCustomQuestion(
            custom_question,
        ) = &custom
        else {
            panic!("expected a custom question, got {custom:?}");
        };
        assert_eq!(
            custom_question.answer_input_type(),
            Some(VirtualEventRegistrationQuestionAnswerInputType::MultiChoice)
        );
        assert_eq!(
            custom_question.answer_choices().map(<[String]>::len),
            Some(3)
        );
        assert_eq!(
            custom.virtual_event_registration_question_base().is_required(),
            Some(true)
        );

        // The same payload also resolves through the entity hierarchy.
        let predefined: AnyEntity = crate::from_value(&questions[1]).unwrap();
        let AnyEntity::VirtualEventRegistrationPredefinedQuestion(predefined_question) =
            &predefined
        else {
            panic!("expected a predefined question, got {predefined:?}");
        };
        assert_eq!(
            predefined_question.label(),
            Some(VirtualEventRegistrationPredefinedQuestionLabel::PostalCode)
        );
        assert_eq!(predefined.entity().id(), Some("q2"));
    }

    #[test]
    fn new_subtypes_carry_their_discriminator() {
        let mut txt = DomainDnsTxtRecord::new();
        txt.set_text(Some("MS=ms12345678".to_string()));
        assert_eq!(txt.odata_type(), Some(DomainDnsTxtRecord::ODATA_TYPE));

        assert_serialized_content(
            &txt,
            r##"{"@odata.type":"#microsoft.graph.domainDnsTxtRecord","text":"MS=ms12345678"}"##,
        );

        let record = AnyDomainDnsRecord::from(txt);
        let reparsed: AnyDomainDnsRecord = from_str(&to_string(&record).unwrap()).unwrap();
        assert_eq!(reparsed, record);
    }

    #[test]
    fn user_round_trip_keeps_licenses_and_settings() {
        let mut license = AssignedLicense::new();
        license.set_disabled_plans(Some(vec![
            uuid!("a23b959c-7ce8-4e57-9140-b90eb88a9e97"),
            uuid!("4828c8ec-dc2e-4779-b502-87ac9ce28ab7"),
        ]));
        license.set_sku_id(Some(uuid!("c7df2760-2c81-4ef7-b578-5b5392b571df")));

        let mut settings = MailboxSettings::new();
        settings.set_archive_folder(Some("AQMkADAwATM0MDAAMS0".to_string()));
        settings.set_date_format(Some("M/d/yyyy".to_string()));
        settings.set_time_format(Some("h:mm tt".to_string()));
        settings.set_time_zone(Some("Pacific Standard Time".to_string()));

        let mut user = User::new();
        user.directory_object_mut()
            .entity_mut()
            .set_id(Some("87d349ed-44d7-43e1-9a83-5f2406dee5bd".to_string()));
        user.directory_object_mut()
            .set_deleted_date_time(Some(datetime!(2024-01-15 08:00:00 UTC)));
        user.set_account_enabled(Some(true));
        user.set_assigned_licenses(Some(vec![license]));
        user.set_birthday(Some(datetime!(1990-04-01 00:00:00 UTC)));
        user.set_business_phones(Some(vec!["+1 425 555 0109".to_string()]));
        user.set_created_date_time(Some(datetime!(2021-02-08 17:31:59 UTC)));
        user.set_department(Some("Retail".to_string()));
        user.set_display_name(Some("Megan Bowen".to_string()));
        user.set_employee_hire_date(Some(datetime!(2019-06-03 00:00:00 UTC)));
        user.set_given_name(Some("Megan".to_string()));
        user.set_job_title(Some("Auditor".to_string()));
        user.set_mail(Some("MeganB@contoso.com".to_string()));
        user.set_mailbox_settings(Some(settings));
        user.set_other_mails(Some(vec!["meganb@fabrikam.com".to_string()]));
        user.set_surname(Some("Bowen".to_string()));
        user.set_user_principal_name(Some("MeganB@contoso.com".to_string()));

        let value = assert_round_trip(&user);
        assert_eq!(
            value["assignedLicenses"][0]["skuId"],
            json!("c7df2760-2c81-4ef7-b578-5b5392b571df")
        );
        assert_eq!(
            value["assignedLicenses"][0]["disabledPlans"],
            json!([
                "a23b959c-7ce8-4e57-9140-b90eb88a9e97",
                "4828c8ec-dc2e-4779-b502-87ac9ce28ab7"
            ])
        );
        assert_eq!(value["mailboxSettings"]["timeFormat"], json!("h:mm tt"));
        assert_eq!(value["deletedDateTime"], json!("2024-01-15T08:00:00Z"));
        assert_eq!(value["birthday"], json!("1990-04-01T00:00:00Z"));
    }

    #[test]
    fn every_dns_record_round_trips() {
        let mut cname = DomainDnsCnameRecord::new();
        cname.set_canonical_name(Some("autodiscover.outlook.com".to_string()));
        cname.domain_dns_record_mut().set_label(Some("autodiscover.contoso.com".to_string()));
        cname.domain_dns_record_mut().set_ttl(Some(3600));

        let mut srv = DomainDnsSrvRecord::new();
        srv.set_name_target(Some("sipdir.online.lync.com".to_string()));
        srv.set_port(Some(443));
        srv.set_priority(Some(100));
        srv.set_protocol(Some("_tls".to_string()));
        srv.set_service(Some("_sip".to_string()));
        srv.set_weight(Some(1));
        srv.domain_dns_record_mut().set_is_optional(Some(false));
        srv.domain_dns_record_mut().set_record_type(Some("Srv".to_string()));

        let mut txt = DomainDnsTxtRecord::new();
        txt.set_text(Some("v=spf1 include:spf.protection.outlook.com -all".to_string()));
        txt.domain_dns_record_mut().set_supported_service(Some("Email".to_string()));

        let mut unavailable = DomainDnsUnavailableRecord::new();
        unavailable.set_description(Some("Domain is not verified".to_string()));
        unavailable.domain_dns_record_mut().entity_mut().set_id(Some("4".to_string()));

        let records = [
            AnyDomainDnsRecord::from(cname),
            AnyDomainDnsRecord::from(srv),
            AnyDomainDnsRecord::from(txt),
            AnyDomainDnsRecord::from(unavailable),
        ];
        let types: Vec<Value> = records
            .iter()
            .map(|record| assert_round_trip(record)["@odata.type"].clone())
            .collect();
        assert_eq!(
            types,
            [
                json!(DomainDnsCnameRecord::ODATA_TYPE),
                json!(DomainDnsSrvRecord::ODATA_TYPE),
                json!(DomainDnsTxtRecord::ODATA_TYPE),
                json!(DomainDnsUnavailableRecord::ODATA_TYPE),
            ]
        );
    }

    #[test]
    fn every_assignment_target_round_trips() {
        let mut group = GroupAssignmentTarget::new();
        group.set_group_id(Some("group-a".to_string()));

        let mut exclusion = ExclusionGroupAssignmentTarget::new();
        exclusion
            .group_assignment_target_mut()
            .set_group_id(Some("group-b".to_string()));

        let mut collection = ConfigurationManagerCollectionAssignmentTarget::new();
        collection.set_collection_id(Some("SMS00001".to_string()));

        let targets = [
            AnyDeviceAndAppManagementAssignmentTarget::from(AllDevicesAssignmentTarget::new()),
            AnyDeviceAndAppManagementAssignmentTarget::from(
                AllLicensedUsersAssignmentTarget::new(),
            ),
            AnyDeviceAndAppManagementAssignmentTarget::from(group),
            AnyDeviceAndAppManagementAssignmentTarget::from(exclusion),
            AnyDeviceAndAppManagementAssignmentTarget::from(collection),
        ];
        for target in &targets {
            assert_round_trip(target);
        }

        let value = assert_round_trip(&targets[3]);
        assert_eq!(value["@odata.type"], json!(ExclusionGroupAssignmentTarget::ODATA_TYPE));
        assert_eq!(value["groupId"], json!("group-b"));
    }

    #[test]
    fn every_registration_question_round_trips() {
        let mut custom = VirtualEventRegistrationCustomQuestion::new();
        custom.set_answer_choices(Some(vec!["Yes".to_string(), "No".to_string()]));
        custom.set_answer_input_type(Some(
            VirtualEventRegistrationQuestionAnswerInputType::SingleChoice,
        ));
        let base = custom.virtual_event_registration_question_base_mut();
        base.set_display_name(Some("Will you attend in person?".to_string()));
        base.set_is_required(Some(true));
        base.entity_mut().set_id(Some("q1".to_string()));

        let mut predefined = VirtualEventRegistrationPredefinedQuestion::new();
        predefined.set_label(Some(VirtualEventRegistrationPredefinedQuestionLabel::PostalCode));
        predefined
            .virtual_event_registration_question_base_mut()
            .set_is_required(Some(false));

        let custom = assert_round_trip(&AnyVirtualEventRegistrationQuestionBase::from(custom));
        assert_eq!(custom["answerInputType"], json!("singleChoice"));
        assert_eq!(custom["answerChoices"], json!(["Yes", "No"]));

        let predefined =
            assert_round_trip(&AnyVirtualEventRegistrationQuestionBase::from(predefined));
        assert_eq!(predefined["label"], json!("postalCode"));
    }

    #[test]
    fn enum_members_keep_their_wire_spelling() {
        let mut policy = AndroidCompliancePolicy::new();
        policy.set_password_required_type(Some(AndroidRequiredPasswordType::AlphanumericWithSymbols));

        let value = assert_round_trip(&AnyDeviceCompliancePolicy::from(policy));
        assert_eq!(value["passwordRequiredType"], json!("alphanumericWithSymbols"));
        assert_eq!(
            "lowSecurityBiometric".parse::<AndroidRequiredPasswordType>().unwrap(),
            AndroidRequiredPasswordType::LowSecurityBiometric
        );
        assert_eq!(DeviceThreatProtectionLevel::NotSet.to_string(), "notSet");
    }

    fn populated_message() -> Message {
        let mut sender = EmailAddress::new();
        sender.set_address(Some("adelev@contoso.com".to_string()));
        sender.set_name(Some("Adele Vance".to_string()));
        let mut from = Recipient::new();
        from.set_email_address(Some(sender));

        let mut to = EmailAddress::new();
        to.set_address(Some("alexw@contoso.com".to_string()));
        let mut to_recipient = Recipient::new();
        to_recipient.set_email_address(Some(to));

        let mut body = ItemBody::new();
        body.set_content_type(Some(BodyType::Html));
        body.set_content(Some("<p>Quarterly numbers attached.</p>".to_string()));

        let mut message = Message::new();
        message.outlook_item_mut().entity_mut().set_id(Some("AAMkAGI2".to_string()));
        message
            .outlook_item_mut()
            .set_categories(Some(vec!["Finance".to_string(), "Q3".to_string()]));
        message.set_subject(Some("Q3 report".to_string()));
        message.set_body(Some(body));
        message.set_from(Some(from.clone()));
        message.set_sender(Some(from));
        message.set_to_recipients(Some(vec![to_recipient]));
        message.set_importance(Some(Importance::High));
        message.set_is_read(Some(false));
        message.set_has_attachments(Some(true));
        message.set_received_date_time(Some(datetime!(2024-09-30 16:45:12 UTC)));
        message.set_additional_data(Map::from_iter([
            ("@odata.etag".to_string(), json!("W/\"CQAAABYAAAA\"")),
            ("flag".to_string(), json!({ "flagStatus": "notFlagged" })),
        ]));
        message
    }

    #[test]
    fn message_round_trip_keeps_additional_data() {
        let message = populated_message();
        let value = assert_round_trip(&message);

        assert_eq!(value["@odata.etag"], json!("W/\"CQAAABYAAAA\""));
        assert_eq!(value["from"]["emailAddress"]["name"], json!("Adele Vance"));
        assert_eq!(value["body"]["contentType"], json!("html"));
    }

    #[test]
    fn serialization_follows_declaration_order() {
        assert_serialized_content(
            &populated_message(),
            r##"{
    "@odata.type": "#microsoft.graph.message",
    "id": "AAMkAGI2",
    "categories": ["Finance", "Q3"],
    "body": { "content": "<p>Quarterly numbers attached.</p>", "contentType": "html" },
    "from": { "emailAddress": { "address": "adelev@contoso.com", "name": "Adele Vance" } },
    "hasAttachments": true,
    "importance": "high",
    "isRead": false,
    "receivedDateTime": "2024-09-30T16:45:12Z",
    "sender": { "emailAddress": { "address": "adelev@contoso.com", "name": "Adele Vance" } },
    "subject": "Q3 report",
    "toRecipients": [{ "emailAddress": { "address": "alexw@contoso.com" } }],
    "@odata.etag": "W/\"CQAAABYAAAA\"",
    "flag": { "flagStatus": "notFlagged" }
}"##,
        );
    }

    #[test]
    fn deserialize_mail_folder_page() {
        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/me/mailFolders",
    "value": [
        {
            "id": "AQMkADYAAAIBXQAAAA==",
            "displayName": "Archive",
            "parentFolderId": "AQMkADYAAAIBCAAAAA==",
            "childFolderCount": 0,
            "unreadItemCount": 0,
            "totalItemCount": 0,
            "sizeInBytes": 0,
            "isHidden": false
        },
        {
            "id": "AQMkADYAAAIBCQAAAA==",
            "displayName": "Sent Items",
            "parentFolderId": "AQMkADYAAAIBCAAAAA==",
            "childFolderCount": 0,
            "unreadItemCount": 0,
            "totalItemCount": 0,
            "sizeInBytes": 0,
            "isHidden": false
        }
    ],
    "@odata.nextLink": "https://graph.microsoft.com/v1.0/me/mailFolders?%24skip=10"
}"#;

        let folder = |id: &str, name: &str| {
            let mut folder = MailFolder::new();
            folder.entity_mut().set_id(Some(id.to_string()));
            folder.set_display_name(Some(name.to_string()));
            folder.set_parent_folder_id(Some("AQMkADYAAAIBCAAAAA==".to_string()));
            folder.set_child_folder_count(Some(0));
            folder.set_unread_item_count(Some(0));
            folder.set_total_item_count(Some(0));
            folder.set_is_hidden(Some(false));
            folder.set_additional_data(Map::from_iter([("sizeInBytes".to_string(), 0.into())]));
            folder
        };

        // The serde adapter reaches the same parser.
        let Json(parsed) = serde_json::from_str::<Json<MailFolderCollectionResponse>>(json).unwrap();
        assert_eq!(
            parsed.value().expect("value should be present"),
            [
                folder("AQMkADYAAAIBXQAAAA==", "Archive"),
                folder("AQMkADYAAAIBCQAAAA==", "Sent Items")
            ]
        );
        assert_eq!(
            parsed.base_collection_pagination_count_response().odata_next_link(),
            Some("https://graph.microsoft.com/v1.0/me/mailFolders?%24skip=10")
        );
    }

    #[test]
    fn wrong_shape_reports_the_expected_type() {
        let err = from_str::<MailFolder>(r#"{ "displayName": 42 }"#).unwrap_err();
        assert!(matches!(err, Error::UnexpectedType { expected: "string", .. }));

        let err = from_str::<User>(r#"{ "businessPhones": "555-0100" }"#).unwrap_err();
        assert!(matches!(err, Error::UnexpectedType { .. }));
    }
}
