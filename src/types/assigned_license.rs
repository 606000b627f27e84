/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to AssignedLicense. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use serde_json::{Map, Value};
use uuid::Uuid;
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignedLicense {
    odata_type: Option<String>,
    disabled_plans: Option<Vec<Uuid>>,
    sku_id: Option<Uuid>,
    additional_data: Map<String, Value>,
}
impl AssignedLicense {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.assignedLicense";
    pub fn new() -> Self {
        Self::default()
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
    #[doc = "A collection of the unique identifiers for plans that have been disabled.\n\n IDs are available in servicePlans.servicePlanId in the tenant's subscribedSkus or serviceStatus in the tenant's companySubscription."]
    pub fn disabled_plans(&self) -> Option<&[Uuid]> {
        self.disabled_plans.as_deref()
    }
    pub fn set_disabled_plans(&mut self, value: Option<Vec<Uuid>>) {
        self.disabled_plans = value;
    }
    #[doc = "The unique identifier for the SKU.\n\n Corresponds to the skuId from subscribedSkus or companySubscription."]
    pub fn sku_id(&self) -> Option<Uuid> {
        self.sku_id
    }
    pub fn set_sku_id(&mut self, value: Option<Uuid>) {
        self.sku_id = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type.as_deref())?;
        writer.write_collection_of_primitive_values(
            Some("disabledPlans"),
            self.disabled_plans.as_deref(),
        )?;
        writer.write_uuid_value(Some("skuId"), self.sku_id)?;
        Ok(())
    }
}
impl Serializable for AssignedLicense {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for AssignedLicense {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for AssignedLicense {
    fn additional_data(&self) -> &Map<String, Value> {
        &self.additional_data
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_data
    }
}
impl Model for AssignedLicense {
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
            "disabledPlans",
            field(|this: &mut Self, node| {
                this.disabled_plans = node.get_collection_of_primitive_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "skuId",
            field(|this: &mut Self, node| {
                this.sku_id = node.get_uuid_value()?;
                Ok(())
            }),
        );
        fields
    }
}
