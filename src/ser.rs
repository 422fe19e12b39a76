//! HTML serialization.
//!
//! This module provides the [`Serializer`] implementation that converts a
//! Rust record into nested HTML elements, and the [`ValueSerializer`] that
//! lowers any serializable value into a [`Value`] tree.
//!
//! ## Overview
//!
//! The root must be a record: a struct, or a map with scalar keys. Each
//! field of the root is lowered to a [`Value`] as it arrives, and once the
//! record is complete the whole tree is rendered using the field tags
//! registered in the [`Schema`]. Newtype structs and `Some(_)` around the
//! root are transparent.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_html::{EncodeOptions, RecordSchema, Schema, Serializer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Greeting { text: String }
//!
//! let schema = Schema::new().with_record(RecordSchema::new("Greeting").field("text", "e=p"));
//! let mut serializer = Serializer::new(&schema, EncodeOptions::new());
//!
//! Greeting { text: "Hello".into() }.serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "<div><p>Hello</p></div>");
//! ```

use crate::render::Renderer;
use crate::{EncodeOptions, Error, Number, Record, Result, Schema, Value};
use serde::ser::Impossible;
use serde::{ser, Serialize};

/// The HTML serializer.
///
/// Accepts a single root record and appends its markup to an internal
/// buffer, retrieved with [`Serializer::into_inner`].
pub struct Serializer<'s> {
    output: String,
    renderer: Renderer<'s>,
}

impl<'s> Serializer<'s> {
    pub fn new(schema: &'s Schema, options: EncodeOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            renderer: Renderer::new(schema, &options),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

macro_rules! reject_root {
    ($($method:ident($($arg:ident : $ty:ty),*) => $found:literal;)*) => {
        $(
            fn $method(self, $($arg: $ty),*) -> Result<Self::Ok> {
                Err(Error::expected_record($found))
            }
        )*
    };
}

impl<'a, 's> ser::Serializer for &'a mut Serializer<'s> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = MapSerializer<'a, 's>;
    type SerializeStruct = StructSerializer<'a, 's>;
    type SerializeStructVariant = Impossible<(), Error>;

    reject_root! {
        serialize_bool(_v: bool) => "bool";
        serialize_i8(_v: i8) => "integer";
        serialize_i16(_v: i16) => "integer";
        serialize_i32(_v: i32) => "integer";
        serialize_i64(_v: i64) => "integer";
        serialize_u8(_v: u8) => "integer";
        serialize_u16(_v: u16) => "integer";
        serialize_u32(_v: u32) => "integer";
        serialize_u64(_v: u64) => "integer";
        serialize_f32(_v: f32) => "float";
        serialize_f64(_v: f64) => "float";
        serialize_char(_v: char) => "char";
        serialize_str(_v: &str) => "string";
        serialize_bytes(_v: &[u8]) => "bytes";
        serialize_none() => "none";
        serialize_unit() => "unit";
        serialize_unit_struct(_name: &'static str) => "unit struct";
        serialize_unit_variant(_name: &'static str, _index: u32, _variant: &'static str) => "enum variant";
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::expected_record("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::expected_record("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::expected_record("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::expected_record("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::expected_record("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self,
            record: Record::anonymous(),
            current_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer {
            ser: self,
            record: Record::named(name),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::expected_record("enum variant"))
    }
}

pub struct MapSerializer<'a, 's> {
    ser: &'a mut Serializer<'s>,
    record: Record,
    current_key: Option<String>,
}

impl<'a, 's> ser::SerializeMap for MapSerializer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_text(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.record.fields.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser
            .renderer
            .write_record(&mut self.ser.output, &self.record, false)
    }
}

pub struct StructSerializer<'a, 's> {
    ser: &'a mut Serializer<'s>,
    record: Record,
}

impl<'a, 's> ser::SerializeStruct for StructSerializer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.fields.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser
            .renderer
            .write_record(&mut self.ser.output, &self.record, false)
    }
}

/// Lowers any `Serialize` value into a [`Value`] tree.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeRecord {
    record: Record,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = Impossible<Value, Error>;
    type SerializeMap = SerializeRecord;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::Unsigned(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        // Widening directly would print 3.45f32 as 3.450000047683716.
        let widened = v.to_string().parse::<f64>().unwrap_or(v as f64);
        Ok(Value::Number(Number::Float(widened)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Unsigned(b as u64)))
            .collect();
        Ok(Value::Sequence(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(Record::anonymous()))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(Record::named(name)))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeRecord {
    fn new(record: Record) -> Self {
        SerializeRecord {
            record,
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.vec))
    }
}

impl ser::SerializeMap for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_text(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.record.fields.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.fields.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Record(self.record))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Map keys become field names, so only scalar keys are accepted.
fn key_text<T: Serialize + ?Sized>(key: &T) -> Result<String> {
    to_value(key)?
        .scalar_text()
        .ok_or_else(|| Error::custom("map keys must be scalars"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Wrapper(Inner);

    #[derive(Serialize)]
    struct Inner {
        id: u8,
    }

    #[derive(Serialize)]
    enum Shape {
        Circle,
        Square(u32),
    }

    #[test]
    fn test_lower_primitives() {
        assert_eq!(to_value(&true).unwrap(), Value::Bool(true));
        assert_eq!(to_value(&-3i8).unwrap(), Value::Number(Number::Integer(-3)));
        assert_eq!(to_value(&7u16).unwrap(), Value::Number(Number::Unsigned(7)));
        assert_eq!(to_value(&'x').unwrap(), Value::String("x".to_string()));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(2i32)).unwrap(), Value::from(2));
    }

    #[test]
    fn test_lower_f32_keeps_short_form() {
        let value = to_value(&3.45f32).unwrap();
        assert_eq!(value.scalar_text().as_deref(), Some("3.45"));
    }

    #[test]
    fn test_lower_newtype_struct_is_transparent() {
        let value = to_value(&Wrapper(Inner { id: 1 })).unwrap();
        assert_eq!(value.as_record().and_then(|r| r.name.as_deref()), Some("Inner"));
    }

    #[test]
    fn test_lower_enum_variants() {
        assert_eq!(to_value(&Shape::Circle).unwrap(), Value::from("Circle"));
        assert!(matches!(
            to_value(&Shape::Square(2)),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_lower_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(2, "b");
        map.insert(1, "a");
        let value = to_value(&map).unwrap();
        let record = value.as_record().unwrap();
        assert!(record.name.is_none());
        let keys: Vec<_> = record.fields.keys().cloned().collect();
        assert_eq!(keys, vec!["1", "2"]);

        let mut bad = BTreeMap::new();
        bad.insert(vec![1], 1);
        assert!(to_value(&bad).is_err());
    }

    #[test]
    fn test_lower_tuple() {
        let value = to_value(&(1, "a")).unwrap();
        assert_eq!(value, Value::Sequence(vec![Value::from(1), Value::from("a")]));
    }

    #[test]
    fn test_root_must_be_record() {
        let schema = Schema::new();
        let mut serializer = Serializer::new(&schema, EncodeOptions::new());
        let err = vec![1, 2].serialize(&mut serializer).unwrap_err();
        assert_eq!(err, Error::ExpectedRecord("sequence".to_string()));

        let mut serializer = Serializer::new(&schema, EncodeOptions::new());
        assert!(matches!("x".serialize(&mut serializer), Err(Error::ExpectedRecord(_))));
    }
}
