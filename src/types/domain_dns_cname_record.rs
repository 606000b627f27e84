/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DomainDnsCnameRecord. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::domain_dns_record::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct DomainDnsCnameRecord {
    domain_dns_record: DomainDnsRecord,
    canonical_name: Option<String>,
}
impl Default for DomainDnsCnameRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl DomainDnsCnameRecord {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.domainDnsCnameRecord";
    pub fn new() -> Self {
        let mut this = Self {
            domain_dns_record: DomainDnsRecord::new(),
            canonical_name: None,
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
    #[doc = "The canonical name of the CNAME record.\n\n Used to configure the CNAME record at the DNS host."]
    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_name.as_deref()
    }
    pub fn set_canonical_name(&mut self, value: Option<String>) {
        self.canonical_name = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.domain_dns_record.write_properties(writer)?;
        writer.write_string_value(Some("canonicalName"), self.canonical_name.as_deref())?;
        Ok(())
    }
}
impl Serializable for DomainDnsCnameRecord {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DomainDnsCnameRecord {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DomainDnsCnameRecord {
    fn additional_data(&self) -> &Map<String, Value> {
        self.domain_dns_record.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.domain_dns_record.additional_data_mut()
    }
}
impl Model for DomainDnsCnameRecord {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields =
            inherit(DomainDnsRecord::field_deserializers(), Self::domain_dns_record_mut);
        fields.insert(
            "canonicalName",
            field(|this: &mut Self, node| {
                this.canonical_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
