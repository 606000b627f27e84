/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DomainDnsRecord. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::domain_dns_cname_record::*;
use crate::types::domain_dns_mx_record::*;
use crate::types::domain_dns_srv_record::*;
use crate::types::domain_dns_txt_record::*;
use crate::types::domain_dns_unavailable_record::*;
use crate::types::entity::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct DomainDnsRecord {
    entity: Entity,
    is_optional: Option<bool>,
    label: Option<String>,
    record_type: Option<String>,
    supported_service: Option<String>,
    ttl: Option<i32>,
}
impl Default for DomainDnsRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl DomainDnsRecord {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.domainDnsRecord";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            is_optional: None,
            label: None,
            record_type: None,
            supported_service: None,
            ttl: None,
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
    #[doc = "If false, the customer must configure this record at the DNS host for Microsoft Online Services to operate correctly with the domain."]
    pub fn is_optional(&self) -> Option<bool> {
        self.is_optional
    }
    pub fn set_is_optional(&mut self, value: Option<bool>) {
        self.is_optional = value;
    }
    #[doc = "Value used when configuring the name of the DNS record at the DNS host."]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
    pub fn set_label(&mut self, value: Option<String>) {
        self.label = value;
    }
    #[doc = "Indicates what type of DNS record this entity represents.\n\n The value can be CName, Mx, Srv, or Txt."]
    pub fn record_type(&self) -> Option<&str> {
        self.record_type.as_deref()
    }
    pub fn set_record_type(&mut self, value: Option<String>) {
        self.record_type = value;
    }
    #[doc = "Microsoft Online Service or feature that has a dependency on this DNS record.\n\n Can be one of the following values: null, Email, Sharepoint, EmailInternalRelayOnly, OfficeCommunicationsOnline, SharePointDefaultDomain, FullRedelegation, SharePointPublic, OrgIdAuthentication, Yammer, Intune."]
    pub fn supported_service(&self) -> Option<&str> {
        self.supported_service.as_deref()
    }
    pub fn set_supported_service(&mut self, value: Option<String>) {
        self.supported_service = value;
    }
    #[doc = "Value to use when configuring the time-to-live (ttl) property of the DNS record at the DNS host.\n\n Not nullable."]
    pub fn ttl(&self) -> Option<i32> {
        self.ttl
    }
    pub fn set_ttl(&mut self, value: Option<i32>) {
        self.ttl = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_bool_value(Some("isOptional"), self.is_optional)?;
        writer.write_string_value(Some("label"), self.label.as_deref())?;
        writer.write_string_value(Some("recordType"), self.record_type.as_deref())?;
        writer.write_string_value(Some("supportedService"), self.supported_service.as_deref())?;
        writer.write_i32_value(Some("ttl"), self.ttl)?;
        Ok(())
    }
}
impl Serializable for DomainDnsRecord {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DomainDnsRecord {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DomainDnsRecord {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for DomainDnsRecord {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "isOptional",
            field(|this: &mut Self, node| {
                this.is_optional = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "label",
            field(|this: &mut Self, node| {
                this.label = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "recordType",
            field(|this: &mut Self, node| {
                this.record_type = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "supportedService",
            field(|this: &mut Self, node| {
                this.supported_service = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "ttl",
            field(|this: &mut Self, node| {
                this.ttl = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `DomainDnsRecord` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyDomainDnsRecord {
    DomainDnsRecord(DomainDnsRecord),
    DomainDnsCnameRecord(DomainDnsCnameRecord),
    DomainDnsMxRecord(DomainDnsMxRecord),
    DomainDnsSrvRecord(DomainDnsSrvRecord),
    DomainDnsTxtRecord(DomainDnsTxtRecord),
    DomainDnsUnavailableRecord(DomainDnsUnavailableRecord),
}
impl AnyDomainDnsRecord {
    #[doc = "Accessor to the properties every `DomainDnsRecord` shares."]
    pub fn domain_dns_record(&self) -> &DomainDnsRecord {
        match self {
            Self::DomainDnsRecord(value) => value,
            Self::DomainDnsCnameRecord(value) => value.domain_dns_record(),
            Self::DomainDnsMxRecord(value) => value.domain_dns_record(),
            Self::DomainDnsSrvRecord(value) => value.domain_dns_record(),
            Self::DomainDnsTxtRecord(value) => value.domain_dns_record(),
            Self::DomainDnsUnavailableRecord(value) => value.domain_dns_record(),
        }
    }
    pub fn domain_dns_record_mut(&mut self) -> &mut DomainDnsRecord {
        match self {
            Self::DomainDnsRecord(value) => value,
            Self::DomainDnsCnameRecord(value) => value.domain_dns_record_mut(),
            Self::DomainDnsMxRecord(value) => value.domain_dns_record_mut(),
            Self::DomainDnsSrvRecord(value) => value.domain_dns_record_mut(),
            Self::DomainDnsTxtRecord(value) => value.domain_dns_record_mut(),
            Self::DomainDnsUnavailableRecord(value) => value.domain_dns_record_mut(),
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.domain_dns_record().odata_type()
    }
}
impl Parsable for AnyDomainDnsRecord {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
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
            other => {
                log_base_fallback(other, DomainDnsRecord::ODATA_TYPE);
                Ok(Self::DomainDnsRecord(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyDomainDnsRecord {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::DomainDnsRecord(value) => value.serialize(writer),
            Self::DomainDnsCnameRecord(value) => value.serialize(writer),
            Self::DomainDnsMxRecord(value) => value.serialize(writer),
            Self::DomainDnsSrvRecord(value) => value.serialize(writer),
            Self::DomainDnsTxtRecord(value) => value.serialize(writer),
            Self::DomainDnsUnavailableRecord(value) => value.serialize(writer),
        }
    }
}
impl From<DomainDnsRecord> for AnyDomainDnsRecord {
    fn from(value: DomainDnsRecord) -> Self {
        Self::DomainDnsRecord(value)
    }
}
impl From<DomainDnsCnameRecord> for AnyDomainDnsRecord {
    fn from(value: DomainDnsCnameRecord) -> Self {
        Self::DomainDnsCnameRecord(value)
    }
}
impl From<DomainDnsMxRecord> for AnyDomainDnsRecord {
    fn from(value: DomainDnsMxRecord) -> Self {
        Self::DomainDnsMxRecord(value)
    }
}
impl From<DomainDnsSrvRecord> for AnyDomainDnsRecord {
    fn from(value: DomainDnsSrvRecord) -> Self {
        Self::DomainDnsSrvRecord(value)
    }
}
impl From<DomainDnsTxtRecord> for AnyDomainDnsRecord {
    fn from(value: DomainDnsTxtRecord) -> Self {
        Self::DomainDnsTxtRecord(value)
    }
}
impl From<DomainDnsUnavailableRecord> for AnyDomainDnsRecord {
    fn from(value: DomainDnsUnavailableRecord) -> Self {
        Self::DomainDnsUnavailableRecord(value)
    }
}
