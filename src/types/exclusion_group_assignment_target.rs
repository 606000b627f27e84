/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ExclusionGroupAssignmentTarget. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::group_assignment_target::*;
use serde_json::{Map, Value};
#[doc = "Represents a group that should be excluded from an assignment."]
#[derive(Clone, Debug, PartialEq)]
pub struct ExclusionGroupAssignmentTarget {
    group_assignment_target: GroupAssignmentTarget,
}
impl Default for ExclusionGroupAssignmentTarget {
    fn default() -> Self {
        Self::new()
    }
}
impl ExclusionGroupAssignmentTarget {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.exclusionGroupAssignmentTarget";
    pub fn new() -> Self {
        let mut this = Self {
            group_assignment_target: GroupAssignmentTarget::new(),
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `GroupAssignmentTarget`."]
    pub fn group_assignment_target(&self) -> &GroupAssignmentTarget {
        &self.group_assignment_target
    }
    #[doc = "Mutable accessor to inherited properties from `GroupAssignmentTarget`."]
    pub fn group_assignment_target_mut(&mut self) -> &mut GroupAssignmentTarget {
        &mut self.group_assignment_target
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.group_assignment_target.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.group_assignment_target.set_odata_type(value);
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.group_assignment_target.write_properties(writer)?;
        Ok(())
    }
}
impl Serializable for ExclusionGroupAssignmentTarget {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for ExclusionGroupAssignmentTarget {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for ExclusionGroupAssignmentTarget {
    fn additional_data(&self) -> &Map<String, Value> {
        self.group_assignment_target.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.group_assignment_target.additional_data_mut()
    }
}
impl Model for ExclusionGroupAssignmentTarget {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let fields = inherit(
            GroupAssignmentTarget::field_deserializers(),
            Self::group_assignment_target_mut,
        );
        fields
    }
}
