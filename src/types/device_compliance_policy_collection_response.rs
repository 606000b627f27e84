/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DeviceCompliancePolicyCollectionResponse. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::base_collection_pagination_count_response::*;
use crate::types::device_compliance_policy::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceCompliancePolicyCollectionResponse {
    base_collection_pagination_count_response: BaseCollectionPaginationCountResponse,
    value: Option<Vec<AnyDeviceCompliancePolicy>>,
}
impl DeviceCompliancePolicyCollectionResponse {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.deviceCompliancePolicyCollectionResponse";
    pub fn new() -> Self {
        Self::default()
    }
    #[doc = "Accessor to inherited properties from `BaseCollectionPaginationCountResponse`."]
    pub fn base_collection_pagination_count_response(
        &self,
    ) -> &BaseCollectionPaginationCountResponse {
        &self.base_collection_pagination_count_response
    }
    #[doc = "Mutable accessor to inherited properties from `BaseCollectionPaginationCountResponse`."]
    pub fn base_collection_pagination_count_response_mut(
        &mut self,
    ) -> &mut BaseCollectionPaginationCountResponse {
        &mut self.base_collection_pagination_count_response
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.base_collection_pagination_count_response.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.base_collection_pagination_count_response.set_odata_type(value);
    }
    pub fn value(&self) -> Option<&[AnyDeviceCompliancePolicy]> {
        self.value.as_deref()
    }
    pub fn set_value(&mut self, value: Option<Vec<AnyDeviceCompliancePolicy>>) {
        self.value = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.base_collection_pagination_count_response.write_properties(writer)?;
        writer.write_collection_of_object_values(Some("value"), self.value.as_deref())?;
        Ok(())
    }
}
impl Serializable for DeviceCompliancePolicyCollectionResponse {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for DeviceCompliancePolicyCollectionResponse {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for DeviceCompliancePolicyCollectionResponse {
    fn additional_data(&self) -> &Map<String, Value> {
        self.base_collection_pagination_count_response.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.base_collection_pagination_count_response.additional_data_mut()
    }
}
impl Model for DeviceCompliancePolicyCollectionResponse {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(
            BaseCollectionPaginationCountResponse::field_deserializers(),
            Self::base_collection_pagination_count_response_mut,
        );
        fields.insert(
            "value",
            field(|this: &mut Self, node| {
                this.value = node.get_collection_of_object_values()?;
                Ok(())
            }),
        );
        fields
    }
}
