/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The boundary between Graph models and a wire format.
//!
//! Models never touch JSON directly. They read one value at a time from a
//! [`ParseNode`] and write one value at a time to a [`SerializationWriter`].
//! Parsing an object walks its members and dispatches each known key through
//! the model's [`FieldDeserializers`] table; anything the table doesn't know
//! about lands in the model's additional data.

use fxhash::FxHashMap;
use serde_json::{Map, Value};
use std::{fmt::Display, str::FromStr};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::Error;

pub mod json;

/// The wire key holding the OData type discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Reads a single value of a wire payload.
///
/// Every typed getter returns `Ok(None)` for an explicit `null`, and an error
/// when the value exists but has a different shape.
pub trait ParseNode {
    /// Whether this node is an explicit `null`.
    fn is_null(&self) -> bool;

    /// The member `key` of this node, if this node is an object that has it.
    fn get_child_node(&self, key: &str) -> Option<Box<dyn ParseNode + '_>>;

    /// All members of this node, in wire order.
    fn get_object_entries(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, Error>;

    /// The elements of this node if it is an array, `None` if it is `null`.
    fn get_collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, Error>;

    fn get_string_value(&self) -> Result<Option<String>, Error>;
    fn get_bool_value(&self) -> Result<Option<bool>, Error>;
    fn get_i32_value(&self) -> Result<Option<i32>, Error>;
    fn get_i64_value(&self) -> Result<Option<i64>, Error>;
    fn get_f64_value(&self) -> Result<Option<f64>, Error>;
    fn get_date_time_value(&self) -> Result<Option<OffsetDateTime>, Error>;
    fn get_date_value(&self) -> Result<Option<Date>, Error>;
    fn get_uuid_value(&self) -> Result<Option<Uuid>, Error>;

    /// A copy of this node as an untyped value, used for additional data.
    fn get_untyped_value(&self) -> Value;
}

impl<'n> dyn ParseNode + 'n {
    /// Parse this node as a model, resolving the discriminator if `T` is
    /// polymorphic.
    pub fn get_object_value<T: Parsable>(&self) -> Result<Option<T>, Error> {
        if self.is_null() {
            return Ok(None);
        }
        T::create_from_discriminator_value(self).map(Some)
    }

    pub fn get_collection_of_object_values<T: Parsable>(&self) -> Result<Option<Vec<T>>, Error> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        nodes
            .iter()
            .map(|node| {
                if node.is_null() {
                    return Err(null_element());
                }
                T::create_from_discriminator_value(node.as_ref())
            })
            .collect::<Result<_, _>>()
            .map(Some)
    }

    pub fn get_collection_of_primitive_values<T: Primitive>(
        &self,
    ) -> Result<Option<Vec<T>>, Error> {
        let Some(nodes) = self.get_collection_nodes()? else {
            return Ok(None);
        };
        nodes
            .iter()
            .map(|node| T::read(node.as_ref())?.ok_or_else(null_element))
            .collect::<Result<_, _>>()
            .map(Some)
    }

    pub fn get_enum_value<E: FromStr>(&self) -> Result<Option<E>, Error> {
        self.get_string_value()?
            .map(|raw| parse_enum(&raw))
            .transpose()
    }

    pub fn get_collection_of_enum_values<E: FromStr>(&self) -> Result<Option<Vec<E>>, Error> {
        let Some(raw) = self.get_collection_of_primitive_values::<String>()? else {
            return Ok(None);
        };
        raw.iter()
            .map(|raw| parse_enum(raw))
            .collect::<Result<_, _>>()
            .map(Some)
    }
}

fn parse_enum<E: FromStr>(raw: &str) -> Result<E, Error> {
    raw.parse()
        .map_err(|_| Error::InvalidValue(format!("unknown enum member {raw:?}")))
}

// Collections are exchanged as-is, so a `null` element can be neither kept
// nor dropped.
fn null_element() -> Error {
    Error::InvalidValue("collection contains a null element".to_string())
}

/// Writes a wire payload one value at a time.
///
/// A `key` of `None` means the value is an element of the array currently
/// being written. A `value` of `None` writes nothing at all, so unset
/// properties never appear on the wire.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> Result<(), Error>;
    fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> Result<(), Error>;
    fn write_i32_value(&mut self, key: Option<&str>, value: Option<i32>) -> Result<(), Error>;
    fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> Result<(), Error>;
    fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> Result<(), Error>;
    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: Option<OffsetDateTime>,
    ) -> Result<(), Error>;
    fn write_date_value(&mut self, key: Option<&str>, value: Option<Date>) -> Result<(), Error>;
    fn write_uuid_value(&mut self, key: Option<&str>, value: Option<Uuid>) -> Result<(), Error>;

    /// Write an explicit `null`.
    fn write_null_value(&mut self, key: Option<&str>) -> Result<(), Error>;

    fn write_start_object(&mut self, key: Option<&str>) -> Result<(), Error>;
    fn write_end_object(&mut self) -> Result<(), Error>;
    fn write_start_array(&mut self, key: Option<&str>) -> Result<(), Error>;
    fn write_end_array(&mut self) -> Result<(), Error>;

    /// Write every member of `data` verbatim into the current object.
    fn write_additional_data(&mut self, data: &Map<String, Value>) -> Result<(), Error>;
}

impl<'w> dyn SerializationWriter + 'w {
    pub fn write_object_value<T: Serializable + ?Sized>(
        &mut self,
        key: Option<&str>,
        value: Option<&T>,
    ) -> Result<(), Error> {
        let Some(value) = value else {
            return Ok(());
        };
        self.write_start_object(key)?;
        value.serialize(self)?;
        self.write_end_object()
    }

    pub fn write_collection_of_object_values<T: Serializable>(
        &mut self,
        key: Option<&str>,
        values: Option<&[T]>,
    ) -> Result<(), Error> {
        let Some(values) = values else {
            return Ok(());
        };
        self.write_start_array(key)?;
        for value in values {
            self.write_object_value(None, Some(value))?;
        }
        self.write_end_array()
    }

    pub fn write_collection_of_primitive_values<T: Primitive>(
        &mut self,
        key: Option<&str>,
        values: Option<&[T]>,
    ) -> Result<(), Error> {
        let Some(values) = values else {
            return Ok(());
        };
        self.write_start_array(key)?;
        for value in values {
            value.write(self, None)?;
        }
        self.write_end_array()
    }

    pub fn write_enum_value<E: Display>(
        &mut self,
        key: Option<&str>,
        value: Option<&E>,
    ) -> Result<(), Error> {
        match value {
            Some(value) => self.write_string_value(key, Some(&value.to_string())),
            None => Ok(()),
        }
    }

    pub fn write_collection_of_enum_values<E: Display>(
        &mut self,
        key: Option<&str>,
        values: Option<&[E]>,
    ) -> Result<(), Error> {
        let Some(values) = values else {
            return Ok(());
        };
        self.write_start_array(key)?;
        for value in values {
            self.write_string_value(None, Some(&value.to_string()))?;
        }
        self.write_end_array()
    }
}

/// A scalar value that can be read from a [`ParseNode`] and written to a
/// [`SerializationWriter`], alone or as an element of a collection.
pub trait Primitive: Sized {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error>;
    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error>;
}

impl Primitive for String {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_string_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_string_value(key, Some(self.as_str()))
    }
}

impl Primitive for bool {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_bool_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_bool_value(key, Some(*self))
    }
}

impl Primitive for i32 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_i32_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_i32_value(key, Some(*self))
    }
}

impl Primitive for i64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_i64_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_i64_value(key, Some(*self))
    }
}

impl Primitive for f64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_f64_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_f64_value(key, Some(*self))
    }
}

impl Primitive for OffsetDateTime {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_date_time_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_date_time_value(key, Some(*self))
    }
}

impl Primitive for Date {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_date_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_date_value(key, Some(*self))
    }
}

impl Primitive for Uuid {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, Error> {
        node.get_uuid_value()
    }

    fn write(&self, writer: &mut dyn SerializationWriter, key: Option<&str>) -> Result<(), Error> {
        writer.write_uuid_value(key, Some(*self))
    }
}

/// A value that writes itself as the members of an object.
///
/// Implementations write only the members; the surrounding object is opened
/// and closed by the caller.
pub trait Serializable {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error>;
}

/// A value that can be created from a [`ParseNode`].
pub trait Parsable: Serializable + Sized {
    /// Create an instance from `node`. For the `Any*` hierarchy enums this is
    /// where the `@odata.type` discriminator picks the concrete type.
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error>;
}

/// Storage for properties the model has no field for.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &Map<String, Value>;
    fn additional_data_mut(&mut self) -> &mut Map<String, Value>;

    fn set_additional_data(&mut self, data: Map<String, Value>) {
        *self.additional_data_mut() = data;
    }
}

/// Reads one property from a [`ParseNode`] into a model.
pub type FieldDeserializer<T> = Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), Error>>;

/// A model's dispatch table from wire key to [`FieldDeserializer`].
pub type FieldDeserializers<T> = FxHashMap<&'static str, FieldDeserializer<T>>;

/// A concrete Graph type with a field-level dispatch table.
pub trait Model: Parsable + AdditionalDataHolder + Default {
    fn field_deserializers() -> FieldDeserializers<Self>;
}

/// Box a closure as a [`FieldDeserializer`].
pub fn field<T, F>(read: F) -> FieldDeserializer<T>
where
    F: Fn(&mut T, &dyn ParseNode) -> Result<(), Error> + 'static,
{
    Box::new(read)
}

/// Lift a base type's dispatch table into a type that embeds the base, using
/// `project` to reach the embedded value.
pub fn inherit<B: 'static, T: 'static>(
    base: FieldDeserializers<B>,
    project: fn(&mut T) -> &mut B,
) -> FieldDeserializers<T> {
    base.into_iter()
        .map(|(key, read)| {
            let lifted = field(move |this: &mut T, node: &dyn ParseNode| read(project(this), node));
            (key, lifted)
        })
        .collect()
}

/// Parse `node` as an object of type `T`, ignoring any discriminator.
pub fn parse_object<T: Model>(node: &dyn ParseNode) -> Result<T, Error> {
    let fields = T::field_deserializers();
    let mut object = T::default();
    for (key, child) in node.get_object_entries()? {
        match fields.get(key.as_str()) {
            Some(read) => read(&mut object, child.as_ref())?,
            None => {
                log::trace!("keeping unknown property {key:?} as additional data");
                object
                    .additional_data_mut()
                    .insert(key, child.get_untyped_value());
            }
        }
    }
    Ok(object)
}

/// The value of the `@odata.type` member of `node`, if any.
pub fn discriminator_value(node: &dyn ParseNode) -> Result<Option<String>, Error> {
    match node.get_child_node(ODATA_TYPE_KEY) {
        Some(child) => child.get_string_value(),
        None => Ok(None),
    }
}

/// Record that a hierarchy is falling back to its base type.
pub fn log_base_fallback(discriminator: Option<&str>, base: &str) {
    if let Some(discriminator) = discriminator.filter(|d| *d != base) {
        log::debug!("unrecognized discriminator {discriminator:?}, parsing as {base}");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::json::{JsonParseNode, JsonSerializationWriter};
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Point {
        x: Option<i32>,
        label: Option<String>,
        additional_data: Map<String, Value>,
    }

    impl Serializable for Point {
        fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), Error> {
            writer.write_i32_value(Some("x"), self.x)?;
            writer.write_string_value(Some("label"), self.label.as_deref())?;
            writer.write_additional_data(&self.additional_data)
        }
    }

    impl Parsable for Point {
        fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, Error> {
            parse_object(node)
        }
    }

    impl AdditionalDataHolder for Point {
        fn additional_data(&self) -> &Map<String, Value> {
            &self.additional_data
        }

        fn additional_data_mut(&mut self) -> &mut Map<String, Value> {
            &mut self.additional_data
        }
    }

    impl Model for Point {
        fn field_deserializers() -> FieldDeserializers<Self> {
            let mut fields = FieldDeserializers::default();
            fields.insert(
                "x",
                field(|this: &mut Self, node| {
                    this.x = node.get_i32_value()?;
                    Ok(())
                }),
            );
            fields.insert(
                "label",
                field(|this: &mut Self, node| {
                    this.label = node.get_string_value()?;
                    Ok(())
                }),
            );
            fields
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Labelled {
        point: Point,
        weight: Option<f64>,
    }

    impl Labelled {
        fn point_mut(&mut self) -> &mut Point {
            &mut self.point
        }
    }

    #[test]
    fn unknown_members_become_additional_data() {
        let value = json!({ "x": 3, "colour": "red", "tags": [1, 2] });
        let point: Point = parse_object(&JsonParseNode::new(&value)).unwrap();
        assert_eq!(point.x, Some(3));
        assert_eq!(point.label, None);
        assert_eq!(point.additional_data.get("colour"), Some(&json!("red")));
        assert_eq!(point.additional_data.get("tags"), Some(&json!([1, 2])));
    }

    #[test]
    fn null_reads_back_as_unset() {
        let value = json!({ "x": null, "label": null });
        let point: Point = parse_object(&JsonParseNode::new(&value)).unwrap();
        assert_eq!(point, Point::default());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let value = json!({ "x": "three" });
        let err = parse_object::<Point>(&JsonParseNode::new(&value)).unwrap_err();
        assert!(matches!(err, Error::UnexpectedType { expected: "integer", .. }));
    }

    #[test]
    fn parsing_a_non_object_is_an_error() {
        let value = json!([1, 2, 3]);
        assert!(parse_object::<Point>(&JsonParseNode::new(&value)).is_err());
    }

    #[test]
    fn inherited_fields_reach_the_embedded_base() {
        let mut fields = inherit(Point::field_deserializers(), Labelled::point_mut);
        fields.insert(
            "weight",
            field(|this: &mut Labelled, node| {
                this.weight = node.get_f64_value()?;
                Ok(())
            }),
        );

        let value = json!({ "x": 7, "label": "seven", "weight": 0.5 });
        let node = JsonParseNode::new(&value);
        let mut labelled = Labelled::default();
        for (key, child) in node.get_object_entries().unwrap() {
            let read = fields.get(key.as_str()).expect("all keys are known");
            read(&mut labelled, child.as_ref()).unwrap();
        }

        assert_eq!(labelled.point.x, Some(7));
        assert_eq!(labelled.point.label.as_deref(), Some("seven"));
        assert_eq!(labelled.weight, Some(0.5));
    }

    #[test]
    fn discriminator_is_read_from_the_object() {
        let value = json!({ "@odata.type": "#microsoft.graph.user" });
        let node = JsonParseNode::new(&value);
        assert_eq!(
            discriminator_value(&node).unwrap().as_deref(),
            Some("#microsoft.graph.user")
        );

        let value = json!({ "id": "abc" });
        assert_eq!(discriminator_value(&JsonParseNode::new(&value)).unwrap(), None);
    }

    #[test]
    fn collections_keep_order_and_reject_null_elements() {
        let value = json!(["b", "a", "c"]);
        let node = JsonParseNode::new(&value);
        let node: &dyn ParseNode = &node;
        assert_eq!(
            node.get_collection_of_primitive_values::<String>().unwrap(),
            Some(vec!["b".to_string(), "a".to_string(), "c".to_string()])
        );

        let value = json!(["b", null]);
        let node = JsonParseNode::new(&value);
        let node: &dyn ParseNode = &node;
        assert!(node.get_collection_of_primitive_values::<String>().is_err());
    }

    #[test]
    fn nested_objects_are_written_in_order() {
        let points = vec![
            Point {
                x: Some(1),
                ..Default::default()
            },
            Point {
                label: Some("second".to_string()),
                ..Default::default()
            },
        ];

        let mut writer = JsonSerializationWriter::new();
        {
            let writer: &mut dyn SerializationWriter = &mut writer;
            writer.write_start_object(None).unwrap();
            writer
                .write_collection_of_object_values(Some("points"), Some(points.as_slice()))
                .unwrap();
            writer
                .write_collection_of_primitive_values::<String>(Some("empty"), Some(&[]))
                .unwrap();
            writer.write_null_value(Some("nothing")).unwrap();
            writer.write_end_object().unwrap();
        }

        assert_eq!(
            writer.into_value().unwrap(),
            json!({
                "points": [{ "x": 1 }, { "label": "second" }],
                "empty": [],
                "nothing": null,
            })
        );
    }
}
