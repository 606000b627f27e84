/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DomainDnsMxRecord. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::domain_dns_record::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct DomainDnsMxRecord {
    domain_dns_record: DomainDnsRecord,
    mail_exchange: Option<String>,
    preference: Option<i32>,
}
impl Default for DomainDnsMxRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl DomainDnsMxRecord {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.domainDnsMxRecord";
    pub fn new() -> Self {
        let mut this = Self {
            domain_dns_record: DomainDnsRecord::new(),
            mail_exchange: None,
            preference: None,
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `DomainDnsRecord`."]
    pub fn domain_dns_record(&self) -> &DomainDnsRecord {
        &self.domain_dns_record
    }
    #[doc = "Mutable accessor to inherited properties from `DomainDnsRecord`."]
    pub fn domain_dns_record_mut(&mut self) -> &mut DomainDnsRecord {
        &mut self.domain_dns_record
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.domain_dns_record.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.domain_dns_record.set_odata_type(value);
    }
    #[doc = "Value used when configuring the answer/destination/value of the MX record at the DNS host."]
    pub fn mail_exchange(&self) -> Option<&str> {
        self.mail_exchange.as_deref()
    }
    pub fn set_mail_exchange(&mut self, value: Option<String>) {
        self.mail_exchange = value;
    }
    #[doc = "Value used when configuring the Preference/Priority property of the MX record at the DNS host."]
    pub fn preference(&self) -> Option<i32> {
        self.preference
    }
    pub fn set_preference(&mut self, value: Option<i32>) {
        self.preference = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.domain_dns_record.write_properties(writer)?;
        writer.write_string_value(Some("mailExchange"), self.mail_exchange.as_deref())?;
        writer.write_i32_value(Some("preference"), self.preference)?;
        Ok(())
    }
}
impl Serializable for DomainDnsMxRecord {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DomainDnsMxRecord {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DomainDnsMxRecord {
    fn additional_data(&self) -> &Map<String, Value> {
        self.domain_dns_record.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.domain_dns_record.additional_data_mut()
    }
}
impl Model for DomainDnsMxRecord {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields =
            inherit(DomainDnsRecord::field_deserializers(), Self::domain_dns_record_mut);
        fields.insert(
            "mailExchange",
            field(|this: &mut Self, node| {
                this.mail_exchange = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "preference",
            field(|this: &mut Self, node| {
                this.preference = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields
    }
}
