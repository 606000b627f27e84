/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::Value;

use crate::serialization::{Parsable, Serializable};
use crate::{from_str, from_value, to_string, to_value};

/// Assert the expected result of JSON serialization, including key order.
pub fn assert_serialized_content<T: Serializable + ?Sized>(data: &T, expected_json: &str) {
    // Normalize whitespace in the expectation; `preserve_order` keeps its keys
    // where they were written.
    let expected: Value = serde_json::from_str(expected_json).unwrap();
    let expected = serde_json::to_string(&expected).unwrap();

    let actual = to_string(data).unwrap();
    assert_eq!(actual, expected);
}

/// Assert the expected result of JSON deserialization.
pub fn assert_deserialized_content<T>(content: &str, expected: T)
where
    T: Parsable + PartialEq + std::fmt::Debug,
{
    let deserialized_data: T = from_str(content).unwrap();
    assert_eq!(deserialized_data, expected);
}

/// Assert that serializing `data` and parsing the result yields `data` again.
/// Returns the intermediate JSON for further inspection.
pub fn assert_round_trip<T>(data: &T) -> Value
where
    T: Parsable + PartialEq + std::fmt::Debug,
{
    let value = to_value(data).unwrap();
    let reparsed: T = from_value(&value).unwrap();
    assert_eq!(&reparsed, data);
    value
}
