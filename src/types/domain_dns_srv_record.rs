/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DomainDnsSrvRecord. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::domain_dns_record::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct DomainDnsSrvRecord {
    domain_dns_record: DomainDnsRecord,
    name_target: Option<String>,
    port: Option<i32>,
    priority: Option<i32>,
    protocol: Option<String>,
    service: Option<String>,
    weight: Option<i32>,
}
impl Default for DomainDnsSrvRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl DomainDnsSrvRecord {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.domainDnsSrvRecord";
    pub fn new() -> Self {
        let mut this = Self {
            domain_dns_record: DomainDnsRecord::new(),
            name_target: None,
            port: None,
            priority: None,
            protocol: None,
            service: None,
            weight: None,
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
    #[doc = "Value to use when configuring the Target property of the SRV record at the DNS host."]
    pub fn name_target(&self) -> Option<&str> {
        self.name_target.as_deref()
    }
    pub fn set_name_target(&mut self, value: Option<String>) {
        self.name_target = value;
    }
    #[doc = "Value to use when configuring the port property of the SRV record at the DNS host."]
    pub fn port(&self) -> Option<i32> {
        self.port
    }
    pub fn set_port(&mut self, value: Option<i32>) {
        self.port = value;
    }
    #[doc = "Value to use when configuring the priority property of the SRV record at the DNS host."]
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }
    pub fn set_priority(&mut self, value: Option<i32>) {
        self.priority = value;
    }
    #[doc = "Value to use when configuring the protocol property of the SRV record at the DNS host."]
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }
    pub fn set_protocol(&mut self, value: Option<String>) {
        self.protocol = value;
    }
    #[doc = "Value to use when configuring the service property of the SRV record at the DNS host."]
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }
    pub fn set_service(&mut self, value: Option<String>) {
        self.service = value;
    }
    #[doc = "Value to use when configuring the weight property of the SRV record at the DNS host."]
    pub fn weight(&self) -> Option<i32> {
        self.weight
    }
    pub fn set_weight(&mut self, value: Option<i32>) {
        self.weight = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.domain_dns_record.write_properties(writer)?;
        writer.write_string_value(Some("nameTarget"), self.name_target.as_deref())?;
        writer.write_i32_value(Some("port"), self.port)?;
        writer.write_i32_value(Some("priority"), self.priority)?;
        writer.write_string_value(Some("protocol"), self.protocol.as_deref())?;
        writer.write_string_value(Some("service"), self.service.as_deref())?;
        writer.write_i32_value(Some("weight"), self.weight)?;
        Ok(())
    }
}
impl Serializable for DomainDnsSrvRecord {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DomainDnsSrvRecord {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DomainDnsSrvRecord {
    fn additional_data(&self) -> &Map<String, Value> {
        self.domain_dns_record.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.domain_dns_record.additional_data_mut()
    }
}
impl Model for DomainDnsSrvRecord {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields =
            inherit(DomainDnsRecord::field_deserializers(), Self::domain_dns_record_mut);
        fields.insert(
            "nameTarget",
            field(|this: &mut Self, node| {
                this.name_target = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "port",
            field(|this: &mut Self, node| {
                this.port = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "priority",
            field(|this: &mut Self, node| {
                this.priority = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "protocol",
            field(|this: &mut Self, node| {
                this.protocol = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "service",
            field(|this: &mut Self, node| {
                this.service = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "weight",
            field(|this: &mut Self, node| {
                this.weight = node.get_i32_value()?;
                Ok(())
            }),
        );
        fields
    }
}
