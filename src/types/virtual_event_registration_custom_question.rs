/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to VirtualEventRegistrationCustomQuestion. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::virtual_event_registration_question_answer_input_type::*;
use crate::types::virtual_event_registration_question_base::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualEventRegistrationCustomQuestion {
    virtual_event_registration_question_base: VirtualEventRegistrationQuestionBase,
    answer_choices: Option<Vec<String>>,
    answer_input_type: Option<VirtualEventRegistrationQuestionAnswerInputType>,
}
impl Default for VirtualEventRegistrationCustomQuestion {
    fn default() -> Self {
        Self::new()
    }
}
impl VirtualEventRegistrationCustomQuestion {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.virtualEventRegistrationCustomQuestion";
    pub fn new() -> Self {
        let mut this = Self {
            virtual_event_registration_question_base: VirtualEventRegistrationQuestionBase::new(),
            answer_choices: None,
            answer_input_type: None,
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
    #[doc = "Answer choices when answerInputType is singleChoice or multiChoice."]
    pub fn answer_choices(&self) -> Option<&[String]> {
        self.answer_choices.as_deref()
    }
    pub fn set_answer_choices(&mut self, value: Option<Vec<String>>) {
        self.answer_choices = value;
    }
    #[doc = "Input type of the registration question answer.\n\n Possible values are text, multilineText, singleChoice, multiChoice, boolean, and unknownFutureValue."]
    pub fn answer_input_type(&self) -> Option<VirtualEventRegistrationQuestionAnswerInputType> {
        self.answer_input_type
    }
    pub fn set_answer_input_type(
        &mut self,
        value: Option<VirtualEventRegistrationQuestionAnswerInputType>,
    ) {
        self.answer_input_type = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.virtual_event_registration_question_base.write_properties(writer)?;
        writer.write_collection_of_primitive_values(
            Some("answerChoices"),
            self.answer_choices.as_deref(),
        )?;
        writer.write_enum_value(Some("answerInputType"), self.answer_input_type.as_ref())?;
        Ok(())
    }
}
impl Serializable for VirtualEventRegistrationCustomQuestion {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for VirtualEventRegistrationCustomQuestion {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for VirtualEventRegistrationCustomQuestion {
    fn additional_data(&self) -> &Map<String, Value> {
        self.virtual_event_registration_question_base.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.virtual_event_registration_question_base.additional_data_mut()
    }
}
impl Model for VirtualEventRegistrationCustomQuestion {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(
            VirtualEventRegistrationQuestionBase::field_deserializers(),
            Self::virtual_event_registration_question_base_mut,
        );
        fields.insert(
            "answerChoices",
            field(|this: &mut Self, node| {
                this.answer_choices = node.get_collection_of_primitive_values()?;
                Ok(())
            }),
        );
        fields.insert(
            "answerInputType",
            field(|this: &mut Self, node| {
                this.answer_input_type = node.get_enum_value()?;
                Ok(())
            }),
        );
        fields
    }
}
