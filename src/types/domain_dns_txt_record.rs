/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DomainDnsTxtRecord. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::domain_dns_record::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct DomainDnsTxtRecord {
    domain_dns_record: DomainDnsRecord,
    text: Option<String>,
}
impl Default for DomainDnsTxtRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl DomainDnsTxtRecord {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.domainDnsTxtRecord";
    pub fn new() -> Self {
        let mut this = Self {
            domain_dns_record: DomainDnsRecord::new(),
            text: None,
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
    #[doc = "Value used when configuring the text property at the DNS host."]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
    pub fn set_text(&mut self, value: Option<String>) {
        self.text = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.domain_dns_record.write_properties(writer)?;
        writer.write_string_value(Some("text"), self.text.as_deref())?;
        Ok(())
    }
}
impl Serializable for DomainDnsTxtRecord {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DomainDnsTxtRecord {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DomainDnsTxtRecord {
    fn additional_data(&self) -> &Map<String, Value> {
        self.domain_dns_record.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.domain_dns_record.additional_data_mut()
    }
}
impl Model for DomainDnsTxtRecord {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields =
            inherit(DomainDnsRecord::field_deserializers(), Self::domain_dns_record_mut);
        fields.insert(
            "text",
            field(|this: &mut Self, node| {
                this.text = node.get_string_value()?;
                Ok(())
            }),
        );
        fields
    }
}
