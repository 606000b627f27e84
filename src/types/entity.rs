/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Entity. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::android_compliance_policy::*;
use crate::types::device_compliance_action_item::*;
use crate::types::device_compliance_policy::*;
use crate::types::device_compliance_policy_assignment::*;
use crate::types::device_compliance_scheduled_action_for_rule::*;
use crate::types::directory_object::*;
use crate::types::domain_dns_cname_record::*;
use crate::types::domain_dns_mx_record::*;
use crate::types::domain_dns_record::*;
use crate::types::domain_dns_srv_record::*;
use crate::types::domain_dns_txt_record::*;
use crate::types::domain_dns_unavailable_record::*;
use crate::types::ios_compliance_policy::*;
use crate::types::mac_os_compliance_policy::*;
use crate::types::mail_folder::*;
use crate::types::message::*;
use crate::types::outlook_item::*;
use crate::types::user::*;
use crate::types::virtual_event_registration_custom_question::*;
use crate::types::virtual_event_registration_predefined_question::*;
use crate::types::virtual_event_registration_question_base::*;
use crate::types::windows10_compliance_policy::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    odata_type: Option<String>,
    id: Option<String>,
    additional_data: Map<String, Value>,
}
impl Entity {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.entity";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    #[doc = "The unique identifier for an entity.\n\n Read-only."]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        writer.write_string_value(Some("id"), self.id.as_deref())?;
        Ok(())
    }
}
impl Serializable for Entity {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for Entity {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for Entity {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for Entity {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::default();
        fields.insert(
            ODATA_TYPE_KEY,
            field(|this: &mut Self, node| {
                this.odata_type = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "id",
            field(|this: &mut Self, node| {
                this.id = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `Entity` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyEntity {
    Entity(Entity),
    DirectoryObject(DirectoryObject),
    User(User),
    MailFolder(MailFolder),
    OutlookItem(OutlookItem),
    Message(Message),
    DomainDnsRecord(DomainDnsRecord),
    DomainDnsCnameRecord(DomainDnsCnameRecord),
    DomainDnsMxRecord(DomainDnsMxRecord),
    DomainDnsSrvRecord(DomainDnsSrvRecord),
    DomainDnsTxtRecord(DomainDnsTxtRecord),
    DomainDnsUnavailableRecord(DomainDnsUnavailableRecord),
    DeviceCompliancePolicy(DeviceCompliancePolicy),
    AndroidCompliancePolicy(AndroidCompliancePolicy),
    IosCompliancePolicy(IosCompliancePolicy),
    MacOSCompliancePolicy(MacOSCompliancePolicy),
    Windows10CompliancePolicy(Windows10CompliancePolicy),
    DeviceCompliancePolicyAssignment(DeviceCompliancePolicyAssignment),
    DeviceComplianceScheduledActionForRule(DeviceComplianceScheduledActionForRule),
    DeviceComplianceActionItem(DeviceComplianceActionItem),
    VirtualEventRegistrationQuestionBase(VirtualEventRegistrationQuestionBase),
    VirtualEventRegistrationCustomQuestion(VirtualEventRegistrationCustomQuestion),
    VirtualEventRegistrationPredefinedQuestion(VirtualEventRegistrationPredefinedQuestion),
}
impl AnyEntity {
    #[doc = "Accessor to the properties every `Entity` shares."]
    pub fn entity(&self) -> &Entity {
        match self {
            Self::Entity(value) => value,
            Self::DirectoryObject(value) => value.entity(),
            Self::User(value) => value.directory_object().entity(),
            Self::MailFolder(value) => value.entity(),
            Self::OutlookItem(value) => value.entity(),
            Self::Message(value) => value.outlook_item().entity(),
            Self::DomainDnsRecord(value) => value.entity(),
            Self::DomainDnsCnameRecord(value) => value.domain_dns_record().entity(),
            Self::DomainDnsMxRecord(value) => value.domain_dns_record().entity(),
            Self::DomainDnsSrvRecord(value) => value.domain_dns_record().entity(),
            Self::DomainDnsTxtRecord(value) => value.domain_dns_record().entity(),
            Self::DomainDnsUnavailableRecord(value) => value.domain_dns_record().entity(),
            Self::DeviceCompliancePolicy(value) => value.entity(),
            Self::AndroidCompliancePolicy(value) => value.device_compliance_policy().entity(),
            Self::IosCompliancePolicy(value) => value.device_compliance_policy().entity(),
            Self::MacOSCompliancePolicy(value) => value.device_compliance_policy().entity(),
            Self::Windows10CompliancePolicy(value) => value.device_compliance_policy().entity(),
            Self::DeviceCompliancePolicyAssignment(value) => value.entity(),
            Self::DeviceComplianceScheduledActionForRule(value) => value.entity(),
            Self::DeviceComplianceActionItem(value) => value.entity(),
            Self::VirtualEventRegistrationQuestionBase(value) => value.entity(),
            Self::VirtualEventRegistrationCustomQuestion(value) => {
                value.virtual_event_registration_question_base().entity()
            }
            Self::VirtualEventRegistrationPredefinedQuestion(value) => {
                value.virtual_event_registration_question_base().entity()
            }
        }
    }
    pub fn entity_mut(&mut self) -> &mut Entity {
        match self {
            Self::Entity(value) => value,
            Self::DirectoryObject(value) => value.entity_mut(),
            Self::User(value) => value.directory_object_mut().entity_mut(),
            Self::MailFolder(value) => value.entity_mut(),
            Self::OutlookItem(value) => value.entity_mut(),
            Self::Message(value) => value.outlook_item_mut().entity_mut(),
            Self::DomainDnsRecord(value) => value.entity_mut(),
            Self::DomainDnsCnameRecord(value) => value.domain_dns_record_mut().entity_mut(),
            Self::DomainDnsMxRecord(value) => value.domain_dns_record_mut().entity_mut(),
            Self::DomainDnsSrvRecord(value) => value.domain_dns_record_mut().entity_mut(),
            Self::DomainDnsTxtRecord(value) => value.domain_dns_record_mut().entity_mut(),
            Self::DomainDnsUnavailableRecord(value) => value.domain_dns_record_mut().entity_mut(),
            Self::DeviceCompliancePolicy(value) => value.entity_mut(),
            Self::AndroidCompliancePolicy(value) => {
                value.device_compliance_policy_mut().entity_mut()
            }
            Self::IosCompliancePolicy(value) => value.device_compliance_policy_mut().entity_mut(),
            Self::MacOSCompliancePolicy(value) => value.device_compliance_policy_mut().entity_mut(),
            Self::Windows10CompliancePolicy(value) => {
                value.device_compliance_policy_mut().entity_mut()
            }
            Self::DeviceCompliancePolicyAssignment(value) => value.entity_mut(),
            Self::DeviceComplianceScheduledActionForRule(value) => value.entity_mut(),
            Self::DeviceComplianceActionItem(value) => value.entity_mut(),
            Self::VirtualEventRegistrationQuestionBase(value) => value.entity_mut(),
            Self::VirtualEventRegistrationCustomQuestion(value) => {
                value.virtual_event_registration_question_base_mut().entity_mut()
            }
            Self::VirtualEventRegistrationPredefinedQuestion(value) => {
                value.virtual_event_registration_question_base_mut().entity_mut()
            }
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.entity().odata_type()
    }
}
impl Parsable for AnyEntity {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
            Some(DirectoryObject::ODATA_TYPE) => Ok(Self::DirectoryObject(parse_object(node)?)),
            Some(User::ODATA_TYPE) => Ok(Self::User(parse_object(node)?)),
            Some(MailFolder::ODATA_TYPE) => Ok(Self::MailFolder(parse_object(node)?)),
            Some(OutlookItem::ODATA_TYPE) => Ok(Self::OutlookItem(parse_object(node)?)),
            Some(Message::ODATA_TYPE) => Ok(Self::Message(parse_object(node)?)),
            Some(DomainDnsRecord::ODATA_TYPE) => Ok(Self::DomainDnsRecord(parse_object(node)?)),
            Some(DomainDnsCnameRecord::ODATA_TYPE) => {
                Ok(Self::DomainDnsCnameRecord(parse_object(node)?))
            }
            Some(DomainDnsMxRecord::ODATA_TYPE) => Ok(Self::DomainDnsMxRecord(parse_object(node)?)),
            Some(DomainDnsSrvRecord::ODATA_TYPE) => {
                Ok(Self::DomainDnsSrvRecord(parse_object(node)?))
            }
            Some(DomainDnsTxtRecord::ODATA_TYPE) => {
                Ok(Self::DomainDnsTxtRecord(parse_object(node)?))
            }
            Some(DomainDnsUnavailableRecord::ODATA_TYPE) => {
                Ok(Self::DomainDnsUnavailableRecord(parse_object(node)?))
            }
            Some(DeviceCompliancePolicy::ODATA_TYPE) => {
                Ok(Self::DeviceCompliancePolicy(parse_object(node)?))
            }
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
            Some(DeviceCompliancePolicyAssignment::ODATA_TYPE) => {
                Ok(Self::DeviceCompliancePolicyAssignment(parse_object(node)?))
            }
            Some(DeviceComplianceScheduledActionForRule::ODATA_TYPE) => {
                Ok(Self::DeviceComplianceScheduledActionForRule(parse_object(node)?))
            }
            Some(DeviceComplianceActionItem::ODATA_TYPE) => {
                Ok(Self::DeviceComplianceActionItem(parse_object(node)?))
            }
            Some(VirtualEventRegistrationQuestionBase::ODATA_TYPE) => {
                Ok(Self::VirtualEventRegistrationQuestionBase(parse_object(node)?))
            }
            Some(VirtualEventRegistrationCustomQuestion::ODATA_TYPE) => {
                Ok(Self::VirtualEventRegistrationCustomQuestion(parse_object(node)?))
            }
            Some(VirtualEventRegistrationPredefinedQuestion::ODATA_TYPE) => {
                Ok(Self::VirtualEventRegistrationPredefinedQuestion(parse_object(node)?))
            }
            other => {
                log_base_fallback(other, Entity::ODATA_TYPE);
                Ok(Self::Entity(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyEntity {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::Entity(value) => value.serialize(writer),
            Self::DirectoryObject(value) => value.serialize(writer),
            Self::User(value) => value.serialize(writer),
            Self::MailFolder(value) => value.serialize(writer),
            Self::OutlookItem(value) => value.serialize(writer),
            Self::Message(value) => value.serialize(writer),
            Self::DomainDnsRecord(value) => value.serialize(writer),
            Self::DomainDnsCnameRecord(value) => value.serialize(writer),
            Self::DomainDnsMxRecord(value) => value.serialize(writer),
            Self::DomainDnsSrvRecord(value) => value.serialize(writer),
            Self::DomainDnsTxtRecord(value) => value.serialize(writer),
            Self::DomainDnsUnavailableRecord(value) => value.serialize(writer),
            Self::DeviceCompliancePolicy(value) => value.serialize(writer),
            Self::AndroidCompliancePolicy(value) => value.serialize(writer),
            Self::IosCompliancePolicy(value) => value.serialize(writer),
            Self::MacOSCompliancePolicy(value) => value.serialize(writer),
            Self::Windows10CompliancePolicy(value) => value.serialize(writer),
            Self::DeviceCompliancePolicyAssignment(value) => value.serialize(writer),
            Self::DeviceComplianceScheduledActionForRule(value) => value.serialize(writer),
            Self::DeviceComplianceActionItem(value) => value.serialize(writer),
            Self::VirtualEventRegistrationQuestionBase(value) => value.serialize(writer),
            Self::VirtualEventRegistrationCustomQuestion(value) => value.serialize(writer),
            Self::VirtualEventRegistrationPredefinedQuestion(value) => value.serialize(writer),
        }
    }
}
impl From<Entity> for AnyEntity {
    fn from(value: Entity) -> Self {
        Self::Entity(value)
    }
}
impl From<DirectoryObject> for AnyEntity {
    fn from(value: DirectoryObject) -> Self {
        Self::DirectoryObject(value)
    }
}
impl From<User> for AnyEntity {
    fn from(value: User) -> Self {
        Self::User(value)
    }
}
impl From<MailFolder> for AnyEntity {
    fn from(value: MailFolder) -> Self {
        Self::MailFolder(value)
    }
}
impl From<OutlookItem> for AnyEntity {
    fn from(value: OutlookItem) -> Self {
        Self::OutlookItem(value)
    }
}
impl From<Message> for AnyEntity {
    fn from(value: Message) -> Self {
        Self::Message(value)
    }
}
impl From<DomainDnsRecord> for AnyEntity {
    fn from(value: DomainDnsRecord) -> Self {
        Self::DomainDnsRecord(value)
    }
}
impl From<DomainDnsCnameRecord> for AnyEntity {
    fn from(value: DomainDnsCnameRecord) -> Self {
        Self::DomainDnsCnameRecord(value)
    }
}
impl From<DomainDnsMxRecord> for AnyEntity {
    fn from(value: DomainDnsMxRecord) -> Self {
        Self::DomainDnsMxRecord(value)
    }
}
impl From<DomainDnsSrvRecord> for AnyEntity {
    fn from(value: DomainDnsSrvRecord) -> Self {
        Self::DomainDnsSrvRecord(value)
    }
}
impl From<DomainDnsTxtRecord> for AnyEntity {
    fn from(value: DomainDnsTxtRecord) -> Self {
        Self::DomainDnsTxtRecord(value)
    }
}
impl From<DomainDnsUnavailableRecord> for AnyEntity {
    fn from(value: DomainDnsUnavailableRecord) -> Self {
        Self::DomainDnsUnavailableRecord(value)
    }
}
impl From<DeviceCompliancePolicy> for AnyEntity {
    fn from(value: DeviceCompliancePolicy) -> Self {
        Self::DeviceCompliancePolicy(value)
    }
}
impl From<AndroidCompliancePolicy> for AnyEntity {
    fn from(value: AndroidCompliancePolicy) -> Self {
        Self::AndroidCompliancePolicy(value)
    }
}
impl From<IosCompliancePolicy> for AnyEntity {
    fn from(value: IosCompliancePolicy) -> Self {
        Self::IosCompliancePolicy(value)
    }
}
impl From<MacOSCompliancePolicy> for AnyEntity {
    fn from(value: MacOSCompliancePolicy) -> Self {
        Self::MacOSCompliancePolicy(value)
    }
}
impl From<Windows10CompliancePolicy> for AnyEntity {
    fn from(value: Windows10CompliancePolicy) -> Self {
        Self::Windows10CompliancePolicy(value)
    }
}
impl From<DeviceCompliancePolicyAssignment> for AnyEntity {
    fn from(value: DeviceCompliancePolicyAssignment) -> Self {
        Self::DeviceCompliancePolicyAssignment(value)
    }
}
impl From<DeviceComplianceScheduledActionForRule> for AnyEntity {
    fn from(value: DeviceComplianceScheduledActionForRule) -> Self {
        Self::DeviceComplianceScheduledActionForRule(value)
    }
}
impl From<DeviceComplianceActionItem> for AnyEntity {
    fn from(value: DeviceComplianceActionItem) -> Self {
        Self::DeviceComplianceActionItem(value)
    }
}
impl From<VirtualEventRegistrationQuestionBase> for AnyEntity {
    fn from(value: VirtualEventRegistrationQuestionBase) -> Self {
        Self::VirtualEventRegistrationQuestionBase(value)
    }
}
impl From<VirtualEventRegistrationCustomQuestion> for AnyEntity {
    fn from(value: VirtualEventRegistrationCustomQuestion) -> Self {
        Self::VirtualEventRegistrationCustomQuestion(value)
    }
}
impl From<VirtualEventRegistrationPredefinedQuestion> for AnyEntity {
    fn from(value: VirtualEventRegistrationPredefinedQuestion) -> Self {
        Self::VirtualEventRegistrationPredefinedQuestion(value)
    }
}
