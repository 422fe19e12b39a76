//! Dynamic value representation used during encoding.
//!
//! Every `T: Serialize` handed to the encoder is first lowered into a
//! [`Value`] tree. The renderer only ever sees three shapes:
//!
//! - **Scalar**: [`Value::Null`], [`Value::Bool`], [`Value::Number`], [`Value::String`]
//! - **Aggregate**: [`Value::Record`], a struct or map with ordered fields
//! - **Sequence**: [`Value::Sequence`], from `Vec`, slices, tuples and byte strings
//!
//! ## Examples
//!
//! ```rust
//! use serde_html::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 0, y: 0 }).unwrap();
//! let record = value.as_record().unwrap();
//! assert_eq!(record.name.as_deref(), Some("Point"));
//! assert!(value.is_empty());
//! ```

use crate::FieldMap;
use std::fmt;

/// A dynamically-shaped value produced from any `Serialize` type.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Record(Record),
}

/// A numeric scalar.
///
/// Renders through `Display`: integers in decimal, floats in their shortest
/// round-trippable form.
///
/// # Examples
///
/// ```rust
/// use serde_html::Number;
///
/// assert_eq!(Number::Integer(-23).to_string(), "-23");
/// assert_eq!(Number::Float(3.45).to_string(), "3.45");
/// assert!(Number::Unsigned(0).is_zero());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Returns `true` for the zero value of any numeric kind.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Unsigned(u) => *u == 0,
            Number::Float(f) => *f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A struct or map: an optional type name plus its fields in order.
///
/// `name` is the name Serde reports for a struct (the Rust type name unless
/// renamed) and is the key used for [`Schema`](crate::Schema) lookups. Maps
/// have no name, so their fields always use the default descriptor.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    pub name: Option<String>,
    pub fields: FieldMap,
}

impl Record {
    /// Creates an empty record for the named struct.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Record {
            name: Some(name.to_string()),
            fields: FieldMap::new(),
        }
    }

    /// Creates an empty anonymous record, as produced by maps.
    #[must_use]
    pub fn anonymous() -> Self {
        Record::default()
    }

    /// Returns `true` when every field holds an empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Value::is_empty)
    }
}

impl Value {
    /// Returns `true` if the value is a scalar (null, bool, number or string).
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` for the zero value of the underlying type.
    ///
    /// Null, `false`, numeric zero, the empty string and the empty sequence
    /// are empty. A record is empty when all of its fields are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_html::Value;
    ///
    /// assert!(Value::from("").is_empty());
    /// assert!(Value::from(0).is_empty());
    /// assert!(Value::from(false).is_empty());
    /// assert!(Value::Sequence(vec![]).is_empty());
    /// assert!(!Value::from("x").is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.is_zero(),
            Value::String(s) => s.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            Value::Record(record) => record.is_empty(),
        }
    }

    /// Returns the text a scalar renders as, or `None` for sequences and records.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_html::Value;
    ///
    /// assert_eq!(Value::from(true).scalar_text().as_deref(), Some("true"));
    /// assert_eq!(Value::Null.scalar_text().as_deref(), Some(""));
    /// assert_eq!(Value::Sequence(vec![]).scalar_text(), None);
    /// ```
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Sequence(_) | Value::Record(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Unsigned(value as u64))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::Unsigned(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}
