/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to AndroidRequiredPasswordType. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use strum::{Display, EnumString};
#[doc = "Android required password type."]
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, Hash)]
pub enum AndroidRequiredPasswordType {
    #[strum(serialize = "deviceDefault")]
    DeviceDefault,
    #[strum(serialize = "alphabetic")]
    Alphabetic,
    #[strum(serialize = "alphanumeric")]
    Alphanumeric,
    #[strum(serialize = "alphanumericWithSymbols")]
    AlphanumericWithSymbols,
    #[strum(serialize = "lowSecurityBiometric")]
    LowSecurityBiometric,
    #[strum(serialize = "numeric")]
    Numeric,
    #[strum(serialize = "numericComplex")]
    NumericComplex,
    #[strum(serialize = "any")]
    Any,
}
