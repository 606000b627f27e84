/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

pub mod all_devices_assignment_target;
pub mod all_licensed_users_assignment_target;
pub mod android_compliance_policy;
pub mod android_required_password_type;
pub mod assigned_license;
pub mod base_collection_pagination_count_response;
pub mod body_type;
pub mod configuration_manager_collection_assignment_target;
pub mod device_and_app_management_assignment_target;
pub mod device_compliance_action_item;
pub mod device_compliance_action_type;
pub mod device_compliance_policy;
pub mod device_compliance_policy_assignment;
pub mod device_compliance_policy_collection_response;
pub mod device_compliance_scheduled_action_for_rule;
pub mod device_threat_protection_level;
pub mod directory_object;
pub mod domain_dns_cname_record;
pub mod domain_dns_mx_record;
pub mod domain_dns_record;
pub mod domain_dns_record_collection_response;
pub mod domain_dns_srv_record;
pub mod domain_dns_txt_record;
pub mod domain_dns_unavailable_record;
pub mod email_address;
pub mod entity;
pub mod exclusion_group_assignment_target;
pub mod group_assignment_target;
pub mod importance;
pub mod ios_compliance_policy;
pub mod item_body;
pub mod mac_os_compliance_policy;
pub mod mail_folder;
pub mod mail_folder_collection_response;
pub mod mailbox_settings;
pub mod message;
pub mod operating_system_version_range;
pub mod outlook_item;
pub mod recipient;
pub mod required_password_type;
pub mod user;
pub mod virtual_event_registration_custom_question;
pub mod virtual_event_registration_predefined_question;
pub mod virtual_event_registration_predefined_question_label;
pub mod virtual_event_registration_question_answer_input_type;
pub mod virtual_event_registration_question_base;
pub mod windows10_compliance_policy;
