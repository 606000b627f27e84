/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! JSON implementation of the parse-node/serialization-writer boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, format_description::well_known::Rfc3339,
    macros::format_description,
};
use uuid::Uuid;

use super::{ParseNode, Parsable, Serializable, SerializationWriter};
use crate::Error;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A [`ParseNode`] over a borrowed [`serde_json::Value`].
#[derive(Clone, Copy, Debug)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        JsonParseNode { value }
    }

    fn boxed(value: &'a Value) -> Box<dyn ParseNode + 'a> {
        Box::new(JsonParseNode::new(value))
    }

    fn get_str(&self) -> Result<Option<&'a str>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(Error::unexpected("string", other)),
        }
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn get_child_node(&self, key: &str) -> Option<Box<dyn ParseNode + '_>> {
        self.value.as_object()?.get(key).map(JsonParseNode::boxed)
    }

    fn get_object_entries(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, Error> {
        let map = self
            .value
            .as_object()
            .ok_or_else(|| Error::unexpected("object", self.value))?;
        Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), JsonParseNode::boxed(value)))
            .collect())
    }

    fn get_collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(JsonParseNode::boxed).collect())),
            other => Err(Error::unexpected("array", other)),
        }
    }

    fn get_string_value(&self) -> Result<Option<String>, Error> {
        Ok(self.get_str()?.map(str::to_string))
    }

    fn get_bool_value(&self) -> Result<Option<bool>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            other => Err(Error::unexpected("boolean", other)),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>, Error> {
        self.get_i64_value()?
            .map(|v| {
                v.try_into()
                    .map_err(|e| Error::InvalidValue(format!("{v} does not fit an i32: {e}")))
            })
            .transpose()
    }

    fn get_i64_value(&self) -> Result<Option<i64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| Error::unexpected("integer", self.value)),
            other => Err(Error::unexpected("integer", other)),
        }
    }

    fn get_f64_value(&self) -> Result<Option<f64>, Error> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| Error::unexpected("number", self.value)),
            other => Err(Error::unexpected("number", other)),
        }
    }

    fn get_date_time_value(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.get_str()?
            .map(|s| {
                OffsetDateTime::parse(s, &Rfc3339)
                    .map_err(|e| Error::InvalidValue(format!("bad timestamp {s:?}: {e}")))
            })
            .transpose()
    }

    fn get_date_value(&self) -> Result<Option<Date>, Error> {
        self.get_str()?
            .map(|s| {
                Date::parse(s, DATE_FORMAT)
                    .map_err(|e| Error::InvalidValue(format!("bad date {s:?}: {e}")))
            })
            .transpose()
    }

    fn get_uuid_value(&self) -> Result<Option<Uuid>, Error> {
        self.get_str()?
            .map(|s| {
                Uuid::parse_str(s).map_err(|e| Error::InvalidValue(format!("bad GUID {s:?}: {e}")))
            })
            .transpose()
    }

    fn get_untyped_value(&self) -> Value {
        self.value.clone()
    }
}

#[derive(Debug)]
enum Container {
    Object {
        key: Option<String>,
        members: Map<String, Value>,
    },
    Array {
        key: Option<String>,
        items: Vec<Value>,
    },
}

/// A [`SerializationWriter`] building a [`serde_json::Value`].
///
/// Object members keep the order they were written in.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    stack: Vec<Container>,
    root: Option<Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish writing and return the written value.
    pub fn into_value(self) -> Result<Value, Error> {
        if !self.stack.is_empty() {
            return Err(Error::WriterState("an object or array was left open"));
        }
        self.root
            .ok_or(Error::WriterState("nothing has been written"))
    }

    fn push(&mut self, key: Option<&str>, value: Value) -> Result<(), Error> {
        match self.stack.last_mut() {
            Some(Container::Object { members, .. }) => {
                let key = key.ok_or(Error::WriterState("object members need a key"))?;
                members.insert(key.to_string(), value);
            }
            Some(Container::Array { items, .. }) => items.push(value),
            None => {
                if self.root.is_some() {
                    return Err(Error::WriterState("a root value has already been written"));
                }
                self.root = Some(value);
            }
        }
        Ok(())
    }

    fn push_some<T>(
        &mut self,
        key: Option<&str>,
        value: Option<T>,
        convert: impl FnOnce(T) -> Result<Value, Error>,
    ) -> Result<(), Error> {
        match value {
            Some(value) => {
                let value = convert(value)?;
                self.push(key, value)
            }
            None => Ok(()),
        }
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> Result<(), Error> {
        self.push_some(key, value, |v| Ok(Value::String(v.to_string())))
    }

    fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> Result<(), Error> {
        self.push_some(key, value, |v| Ok(Value::Bool(v)))
    }

    fn write_i32_value(&mut self, key: Option<&str>, value: Option<i32>) -> Result<(), Error> {
        self.push_some(key, value, |v| Ok(Value::from(v)))
    }

    fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> Result<(), Error> {
        self.push_some(key, value, |v| Ok(Value::from(v)))
    }

    fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> Result<(), Error> {
        self.push_some(key, value, |v| {
            Number::from_f64(v)
                .map(Value::Number)
                .ok_or_else(|| Error::InvalidValue(format!("{v} is not representable in JSON")))
        })
    }

    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: Option<OffsetDateTime>,
    ) -> Result<(), Error> {
        self.push_some(key, value, |v| {
            v.format(&Rfc3339)
                .map(Value::String)
                .map_err(|e| Error::InvalidValue(format!("unformattable timestamp: {e}")))
        })
    }

    fn write_date_value(&mut self, key: Option<&str>, value: Option<Date>) -> Result<(), Error> {
        self.push_some(key, value, |v| {
            v.format(DATE_FORMAT)
                .map(Value::String)
                .map_err(|e| Error::InvalidValue(format!("unformattable date: {e}")))
        })
    }

    fn write_uuid_value(&mut self, key: Option<&str>, value: Option<Uuid>) -> Result<(), Error> {
        self.push_some(key, value, |v| Ok(Value::String(v.to_string())))
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), Error> {
        self.push(key, Value::Null)
    }

    fn write_start_object(&mut self, key: Option<&str>) -> Result<(), Error> {
        self.stack.push(Container::Object {
            key: key.map(str::to_string),
            members: Map::new(),
        });
        Ok(())
    }

    fn write_end_object(&mut self) -> Result<(), Error> {
        match self.stack.pop() {
            Some(Container::Object { key, members }) => {
                self.push(key.as_deref(), Value::Object(members))
            }
            Some(other) => {
                self.stack.push(other);
                Err(Error::WriterState("closing an object while an array is open"))
            }
            None => Err(Error::WriterState("no object is open")),
        }
    }

    fn write_start_array(&mut self, key: Option<&str>) -> Result<(), Error> {
        self.stack.push(Container::Array {
            key: key.map(str::to_string),
            items: Vec::new(),
        });
        Ok(())
    }

    fn write_end_array(&mut self) -> Result<(), Error> {
        match self.stack.pop() {
            Some(Container::Array { key, items }) => self.push(key.as_deref(), Value::Array(items)),
            Some(other) => {
                self.stack.push(other);
                Err(Error::WriterState("closing an array while an object is open"))
            }
            None => Err(Error::WriterState("no array is open")),
        }
    }

    fn write_additional_data(&mut self, data: &Map<String, Value>) -> Result<(), Error> {
        for (key, value) in data {
            self.push(Some(key), value.clone())?;
        }
        Ok(())
    }
}

/// Parse a model from an already-decoded JSON value.
pub fn from_value<T: Parsable>(value: &Value) -> Result<T, Error> {
    T::create_from_discriminator_value(&JsonParseNode::new(value))
}

/// Parse a model from JSON text.
pub fn from_str<T: Parsable>(json: &str) -> Result<T, Error> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Parse a model from a JSON response body.
pub fn from_slice<T: Parsable>(json: &[u8]) -> Result<T, Error> {
    let value: Value = serde_json::from_slice(json)?;
    from_value(&value)
}

/// Write a model as a JSON object.
pub fn to_value<T: Serializable + ?Sized>(model: &T) -> Result<Value, Error> {
    let mut writer = JsonSerializationWriter::new();
    {
        let writer: &mut dyn SerializationWriter = &mut writer;
        writer.write_object_value(None, Some(model))?;
    }
    writer.into_value()
}

/// Write a model as JSON text.
pub fn to_string<T: Serializable + ?Sized>(model: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(&to_value(model)?)?)
}

/// Adapter letting any Graph model be used where `serde` is expected, e.g.
/// `serde_json::from_slice::<Json<User>>(body)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serializable> Serialize for Json<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_value(&self.0)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de, T: Parsable> Deserialize<'de> for Json<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).map(Json).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::{date, datetime};
    use uuid::uuid;

    use super::*;

    #[test]
    fn typed_getters() {
        let value = json!({
            "name": "Adele",
            "enabled": true,
            "count": 42,
            "size": 9_000_000_000i64,
            "ratio": 0.25,
            "created": "2014-01-01T00:00:00Z",
            "birthday": "1990-04-17",
            "tenant": "3a2bc284-f11c-4676-a9e1-6310eea60f26",
            "missing": null,
        });
        let node = JsonParseNode::new(&value);
        let child = |key| node.get_child_node(key).expect("member should exist");

        assert_eq!(child("name").get_string_value().unwrap().as_deref(), Some("Adele"));
        assert_eq!(child("enabled").get_bool_value().unwrap(), Some(true));
        assert_eq!(child("count").get_i32_value().unwrap(), Some(42));
        assert_eq!(child("size").get_i64_value().unwrap(), Some(9_000_000_000));
        assert_eq!(child("ratio").get_f64_value().unwrap(), Some(0.25));
        assert_eq!(
            child("created").get_date_time_value().unwrap(),
            Some(datetime!(2014-01-01 0:00 UTC))
        );
        assert_eq!(child("birthday").get_date_value().unwrap(), Some(date!(1990 - 04 - 17)));
        assert_eq!(
            child("tenant").get_uuid_value().unwrap(),
            Some(uuid!("3a2bc284-f11c-4676-a9e1-6310eea60f26"))
        );
        assert_eq!(child("missing").get_string_value().unwrap(), None);
        assert_eq!(child("missing").get_date_time_value().unwrap(), None);
        assert!(node.get_child_node("absent").is_none());
    }

    #[test]
    fn out_of_range_i32_is_invalid() {
        let value = json!(9_000_000_000i64);
        let err = JsonParseNode::new(&value).get_i32_value().unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn malformed_scalars_are_invalid() {
        for (value, read) in [
            (json!("yesterday"), "date_time"),
            (json!("17/04/1990"), "date"),
            (json!("not-a-guid"), "uuid"),
        ] {
            let node = JsonParseNode::new(&value);
            let err = match read {
                "date_time" => node.get_date_time_value().map(|_| ()),
                "date" => node.get_date_value().map(|_| ()),
                _ => node.get_uuid_value().map(|_| ()),
            }
            .unwrap_err();
            assert!(matches!(err, Error::InvalidValue(_)), "{read}: {err:?}");
        }
    }

    #[test]
    fn writer_emits_members_in_write_order() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_start_object(None).unwrap();
        writer.write_string_value(Some("zeta"), Some("last letter")).unwrap();
        writer.write_bool_value(Some("alpha"), Some(false)).unwrap();
        writer.write_i32_value(Some("unset"), None).unwrap();
        writer
            .write_date_time_value(Some("when"), Some(datetime!(2024-05-01 10:00 UTC)))
            .unwrap();
        writer
            .write_date_value(Some("day"), Some(date!(2024 - 05 - 01)))
            .unwrap();
        writer
            .write_uuid_value(Some("sku"), Some(uuid!("C7DF2760-2C81-4EF7-B578-5B5392B571DF")))
            .unwrap();
        writer.write_end_object().unwrap();

        let value = writer.into_value().unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"zeta":"last letter","alpha":false,"when":"2024-05-01T10:00:00Z","day":"2024-05-01","sku":"c7df2760-2c81-4ef7-b578-5b5392b571df"}"#
        );
    }

    #[test]
    fn writer_rejects_misuse() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_start_object(None).unwrap();
        assert!(matches!(
            writer.write_string_value(None, Some("keyless")),
            Err(Error::WriterState(_))
        ));
        assert!(writer.write_end_array().is_err());
        assert!(JsonSerializationWriter::new().into_value().is_err());
        assert!(writer.into_value().is_err());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut writer = JsonSerializationWriter::new();
        writer.write_start_array(None).unwrap();
        assert!(writer.write_f64_value(None, Some(f64::NAN)).is_err());
    }

    #[test]
    fn text_level_errors_are_json_errors() {
        let err = from_str::<crate::types::entity::Entity>("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
