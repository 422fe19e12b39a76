//! # serde_html
//!
//! A Serde-compatible encoder that renders tagged Rust structs as nested HTML
//! elements, without a templating engine.
//!
//! ## Key Features
//!
//! - **Declarative**: Each field's label, element and CSS class come from a short tag
//! - **Tables**: Sequences of structs marked `row` render as `<table>` with a header row
//! - **Omit Empty**: Fields marked `omitempty` vanish when they hold a zero value
//! - **Serde Compatible**: Works with any `#[derive(Serialize)]` struct
//! - **Deterministic**: Fields always render in declaration order
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_html::{html_record, to_string, Schema};
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     address: Address,
//! }
//!
//! #[derive(Serialize)]
//! struct Address {
//!     street: String,
//!     country: String,
//! }
//!
//! html_record!(Person {
//!     name: "l=Name,e=span,c=name",
//!     address: "l=Address,c=address",
//! });
//!
//! html_record!(Address {
//!     street: "l=Street,e=span",
//!     country: "l=Country,e=span",
//! });
//!
//! let schema = Schema::new().register::<Person>().register::<Address>();
//!
//! let person = Person {
//!     name: "John".into(),
//!     address: Address { street: "Main St".into(), country: "UK".into() },
//! };
//!
//! let html = to_string(&person, &schema).unwrap();
//! assert_eq!(
//!     html,
//!     "<div><span>Name</span><span class='name'>John</span></div>\
//!      <div><span>Address</span><div class='address'>\
//!      <div><span>Street</span><span>Main St</span></div>\
//!      <div><span>Country</span><span>UK</span></div>\
//!      </div></div>"
//! );
//! ```
//!
//! ## Tag Syntax
//!
//! ```text
//! option-list := option (',' option)*
//! option      := flag | key '=' value
//! flag        := "row" | "omitempty"
//! key         := "label" | "l" | "element" | "e" | "class" | "c"
//! ```
//!
//! | Option | Effect | Default |
//! |--------|--------|---------|
//! | `l=` / `label=` | `<span>` label before the element | none |
//! | `e=` / `element=` | Element wrapping the value | `div` |
//! | `c=` / `class=` | `class='…'` on the element | none |
//! | `row` | Render a sequence as table rows, element becomes `tr` | off |
//! | `omitempty` | Skip the field when it holds a zero value | off |
//!
//! ## Markup Shapes
//!
//! | Value | Output |
//! |-------|--------|
//! | Scalar | `<div><span>L</span><e class='c'>text</e></div>` |
//! | Struct | Same wrapper around the struct's own fields |
//! | Sequence | Each item as `<e class='c'>…</e>`, no label, no outer wrapper |
//! | `row` sequence | `<table><thead><tr><td>L</td>…</tr></thead><tr><td>…</td>…</tr>…</table>` |
//!
//! Text is written verbatim; escaping is left to the caller.

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
mod render;
pub mod schema;
pub mod ser;
pub mod tag;
pub mod value;

pub use error::{Error, Result};
pub use map::FieldMap;
pub use options::{EncodeOptions, TagPolicy};
pub use schema::{HtmlRecord, RecordSchema, Schema};
pub use ser::{Serializer, ValueSerializer};
pub use tag::{parse_descriptor, FieldDescriptor};
pub use value::{Number, Record, Value};

use serde::Serialize;
use std::io;

/// Encode a record as an HTML string.
///
/// The value must serialize as a struct or a map. Field tags are looked up
/// in `schema` by struct name and field name; malformed tag fragments are
/// skipped with a logged warning.
///
/// # Examples
///
/// ```rust
/// use serde_html::{to_string, RecordSchema, Schema};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let schema = Schema::new().with_record(
///     RecordSchema::new("Point").field("x", "l=X,e=span").field("y", "l=Y,e=span"),
/// );
/// let html = to_string(&Point { x: 1, y: 2 }, &schema).unwrap();
/// assert_eq!(html, "<div><span>X</span><span>1</span></div><div><span>Y</span><span>2</span></div>");
/// ```
///
/// # Errors
///
/// Returns an error if the root is not a record or a value cannot be rendered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T, schema: &Schema) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, schema, EncodeOptions::default())
}

/// Encode a record as an HTML string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_html::{to_string_with_options, EncodeOptions, Error, RecordSchema, Schema};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32 }
///
/// let schema = Schema::new().with_record(RecordSchema::new("Point").field("x", "l=X,,e=span"));
/// let result = to_string_with_options(&Point { x: 1 }, &schema, EncodeOptions::strict());
/// assert!(matches!(result, Err(Error::TagSyntax { .. })));
/// ```
///
/// # Errors
///
/// Returns [`Error::TagSyntax`] for malformed tags under
/// [`TagPolicy::Strict`], and the errors of [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, schema: &Schema, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(schema, options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use serde_html::{to_value, Value};
///
/// let value = to_value(&vec!["a", "b"]).unwrap();
/// assert_eq!(value, Value::Sequence(vec![Value::from("a"), Value::from("b")]));
/// ```
///
/// # Errors
///
/// Returns an error for data-carrying enum variants and non-scalar map keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Encode a record as HTML into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_html::{to_writer, Schema};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1 }, &Schema::new()).unwrap();
/// assert_eq!(buffer, b"<div><div>1</div></div>");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T, schema: &Schema) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, schema, EncodeOptions::default())
}

/// Encode a record as HTML into a writer with custom options.
///
/// Nothing is written when encoding fails.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    schema: &Schema,
    options: EncodeOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let html = to_string_with_options(value, schema, options)?;
    writer
        .write_all(html.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_untagged_point() {
        let html = to_string(&Point { x: 1, y: 2 }, &Schema::new()).unwrap();
        assert_eq!(html, "<div><div>1</div></div><div><div>2</div></div>");
    }

    #[test]
    fn test_to_writer_matches_to_string() {
        let schema = Schema::new().with_record(RecordSchema::new("Point").field("x", "l=X"));
        let point = Point { x: 3, y: 4 };

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &point, &schema).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&point, &schema).unwrap());
    }

    #[test]
    fn test_to_writer_io_error() {
        let err = to_writer(FailingWriter, &Point { x: 1, y: 2 }, &Schema::new()).unwrap_err();
        assert!(matches!(err, Error::Io(msg) if msg.contains("disk full")));
    }

    #[test]
    fn test_to_value_record() {
        let value = to_value(&Point { x: 1, y: 0 }).unwrap();
        let record = value.as_record().unwrap();
        assert_eq!(record.name.as_deref(), Some("Point"));
        assert_eq!(record.fields.get("x"), Some(&Value::from(1)));
        assert!(!value.is_empty());
    }
}
