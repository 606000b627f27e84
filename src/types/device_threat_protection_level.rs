/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DeviceThreatProtectionLevel. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_model_extract openapi.yaml ./`."]
use strum::{Display, EnumString};
#[doc = "Device threat protection levels for the Device Threat Protection API."]
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq, Hash)]
pub enum DeviceThreatProtectionLevel {
    #[strum(serialize = "unavailable")]
    Unavailable,
    #[strum(serialize = "secured")]
    Secured,
    #[strum(serialize = "low")]
    Low,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "notSet")]
    NotSet,
}
