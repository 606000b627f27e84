/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to VirtualEventRegistrationQuestionAnswerInputType. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use strum::{Display, EnumString};
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, Hash)]
pub enum VirtualEventRegistrationQuestionAnswerInputType {
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "multilineText")]
    MultilineText,
    #[strum(serialize = "singleChoice")]
    SingleChoice,
    #[strum(serialize = "multiChoice")]
    MultiChoice,
    #[strum(serialize = "boolean")]
    Boolean,
    #[strum(serialize = "unknownFutureValue")]
    UnknownFutureValue,
}
