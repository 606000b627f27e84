/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to VirtualEventRegistrationPredefinedQuestion. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::virtual_event_registration_predefined_question_label::*;
use crate::types::virtual_event_registration_question_base::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualEventRegistrationPredefinedQuestion {
    virtual_event_registration_question_base: VirtualEventRegistrationQuestionBase,
    label: Option<VirtualEventRegistrationPredefinedQuestionLabel>,
}
impl Default for VirtualEventRegistrationPredefinedQuestion {
    fn default() -> Self {
        Self::new()
    }
}
impl VirtualEventRegistrationPredefinedQuestion {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.virtualEventRegistrationPredefinedQuestion";
    pub fn new() -> Self {
        let mut this = Self {
            virtual_event_registration_question_base: VirtualEventRegistrationQuestionBase::new(),
            label: None,
        };
        this.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        this
    }
    #[doc = "Accessor to inherited properties from `VirtualEventRegistrationQuestionBase`."]
    pub fn virtual_event_registration_question_base(
        &self,
    ) -> &VirtualEventRegistrationQuestionBase {
        &self.virtual_event_registration_question_base
    }
    #[doc = "Mutable accessor to inherited properties from `VirtualEventRegistrationQuestionBase`."]
    pub fn virtual_event_registration_question_base_mut(
        &mut self,
    ) -> &mut VirtualEventRegistrationQuestionBase {
        &mut self.virtual_event_registration_question_base
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.virtual_event_registration_question_base.odata_type()
    }
    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.virtual_event_registration_question_base.set_odata_type(value);
    }
    #[doc = "Label of the predefined registration question.\n\n It accepts a single line of text: street, city, state, postalCode, countryOrRegion, industry, jobTitle, organization, and unknownFutureValue."]
    pub fn label(&self) -> Option<VirtualEventRegistrationPredefinedQuestionLabel> {
        self.label
    }
    pub fn set_label(&mut self, value: Option<VirtualEventRegistrationPredefinedQuestionLabel>) {
        self.label = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.virtual_event_registration_question_base.write_properties(writer)?;
        writer.write_enum_value(Some("label"), self.label.as_ref())?;
        Ok(())
    }
}
impl Serializable for VirtualEventRegistrationPredefinedQuestion {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for VirtualEventRegistrationPredefinedQuestion {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for VirtualEventRegistrationPredefinedQuestion {
    fn additional_data(&self) -> &Map<String, Value> {
        self.virtual_event_registration_question_base.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.virtual_event_registration_question_base.additional_data_mut()
    }
}
impl Model for VirtualEventRegistrationPredefinedQuestion {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(
            VirtualEventRegistrationQuestionBase::field_deserializers(),
            Self::virtual_event_registration_question_base_mut,
        );
        fields.insert(
            "label",
            field(|this: &mut Self, node| {
                this.label = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields
    }
}
