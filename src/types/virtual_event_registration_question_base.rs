/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to VirtualEventRegistrationQuestionBase. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use crate::Error;
use crate::serialization::*;
use crate::types::entity::*;
use crate::types::virtual_event_registration_custom_question::*;
use crate::types::virtual_event_registration_predefined_question::*;
use serde_json::{Map, Value};
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualEventRegistrationQuestionBase {
    entity: Entity,
    display_name: Option<String>,
    is_required: Option<bool>,
}
impl Default for VirtualEventRegistrationQuestionBase {
    fn default() -> Self {
        Self::new()
    }
}
impl VirtualEventRegistrationQuestionBase {
    #[doc = "The `@odata.type` discriminator value identifying this type."]
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.virtualEventRegistrationQuestionBase";
    pub fn new() -> Self {
        let mut this = Self {
            entity: Entity::new(),
            display_name: None,
            is_required: None,
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
    #[doc = "Display name of the registration question."]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }
    #[doc = "Indicates whether an answer to the question is required.\n\n The default value is false."]
    pub fn is_required(&self) -> Option<bool> {
        self.is_required
    }
    pub fn set_is_required(&mut self, value: Option<bool>) {
        self.is_required = value;
    }
    #[doc = "Write the properties of this type, including inherited ones, without additional data."]
    pub(crate) fn write_properties(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), Error> {
        self.entity.write_properties(writer)?;
        writer.write_string_value(Some("displayName"), self.display_name.as_deref())?;
        writer.write_bool_value(Some("isRequired"), self.is_required)?;
        Ok(())
    }
}
impl Serializable for VirtualEventRegistrationQuestionBase {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        self.write_properties(writer)?;
        writer.write_additional_data(self.additional_data())
    }
}
impl Parsable for VirtualEventRegistrationQuestionBase {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        parse_object(node)
    }
}
impl AdditionalDataHolder for VirtualEventRegistrationQuestionBase {
    fn additional_data(&self) -> &Map<String, Value> {
        self.entity.additional_data()
    }
    fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
        self.entity.additional_data_mut()
    }
}
impl Model for VirtualEventRegistrationQuestionBase {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = inherit(Entity::field_deserializers(), Self::entity_mut);
        fields.insert(
            "displayName",
            field(|this: &mut Self, node| {
                this.display_name = node.get_string_value()?;
                Ok(())
            }),
        );
        fields.insert(
            "isRequired",
            field(|this: &mut Self, node| {
                this.is_required = node.get_bool_value()?;
                Ok(())
            }),
        );
        fields
    }
}
#[doc = "A `VirtualEventRegistrationQuestionBase` or any of its subtypes, resolved through the `@odata.type` discriminator."]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyVirtualEventRegistrationQuestionBase {
    VirtualEventRegistrationQuestionBase(VirtualEventRegistrationQuestionBase),
    VirtualEventRegistrationCustomQuestion(VirtualEventRegistrationCustomQuestion),
    VirtualEventRegistrationPredefinedQuestion(VirtualEventRegistrationPredefinedQuestion),
}
impl AnyVirtualEventRegistrationQuestionBase {
    #[doc = "Accessor to the properties every `VirtualEventRegistrationQuestionBase` shares."]
    pub fn virtual_event_registration_question_base(&self) -> &VirtualEventRegistrationQuestionBase {
        match self {
            Self::VirtualEventRegistrationQuestionBase(value) => value,
            Self::VirtualEventRegistrationCustomQuestion(value) => {
                value.virtual_event_registration_question_base()
            }
            Self::VirtualEventRegistrationPredefinedQuestion(value) => {
                value.virtual_event_registration_question_base()
            }
        }
    }
    pub fn virtual_event_registration_question_base_mut(&mut self) -> &mut VirtualEventRegistrationQuestionBase {
        match self {
            Self::VirtualEventRegistrationQuestionBase(value) => value,
            Self::VirtualEventRegistrationCustomQuestion(value) => {
                value.virtual_event_registration_question_base_mut()
            }
            Self::VirtualEventRegistrationPredefinedQuestion(value) => {
                value.virtual_event_registration_question_base_mut()
            }
        }
    }
    pub fn odata_type(&self) -> Option<&str> {
        self.virtual_event_registration_question_base().odata_type()
    }
}
impl Parsable for AnyVirtualEventRegistrationQuestionBase {
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
        let discriminator = discriminator_value(node)?;
        match discriminator.as_deref() {
            Some(VirtualEventRegistrationCustomQuestion::ODATA_TYPE) => {
                Ok(Self::VirtualEventRegistrationCustomQuestion(parse_object(node)?))
            }
            Some(VirtualEventRegistrationPredefinedQuestion::ODATA_TYPE) => {
                Ok(Self::VirtualEventRegistrationPredefinedQuestion(parse_object(node)?))
            }
            other => {
                log_base_fallback(other, VirtualEventRegistrationQuestionBase::ODATA_TYPE);
                Ok(Self::VirtualEventRegistrationQuestionBase(parse_object(node)?))
            }
        }
    }
}
impl Serializable for AnyVirtualEventRegistrationQuestionBase {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
        match self {
            Self::VirtualEventRegistrationQuestionBase(value) => value.serialize(writer),
            Self::VirtualEventRegistrationCustomQuestion(value) => value.serialize(writer),
            Self::VirtualEventRegistrationPredefinedQuestion(value) => value.serialize(writer),
        }
    }
}
impl From<VirtualEventRegistrationQuestionBase> for AnyVirtualEventRegistrationQuestionBase {
    fn from(value: VirtualEventRegistrationQuestionBase) -> Self {
        Self::VirtualEventRegistrationQuestionBase(value)
    }
}
impl From<VirtualEventRegistrationCustomQuestion> for AnyVirtualEventRegistrationQuestionBase {
    fn from(value: VirtualEventRegistrationCustomQuestion) -> Self {
        Self::VirtualEventRegistrationCustomQuestion(value)
    }
}
impl From<VirtualEventRegistrationPredefinedQuestion> for AnyVirtualEventRegistrationQuestionBase {
    fn from(value: VirtualEventRegistrationPredefinedQuestion) -> Self {
        Self::VirtualEventRegistrationPredefinedQuestion(value)
    }
}
