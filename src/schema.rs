//! Per-record field tags.
//!
//! Rust has no runtime struct tags, so the tags that drive rendering are
//! declared once, up front, in a [`Schema`]. A schema maps the name Serde
//! reports for a struct to that struct's field tags. Structs or fields
//! without an entry render with the default descriptor (`div`, no label, no
//! class).
//!
//! Tags can be registered with builder calls or, more conveniently, by
//! implementing [`HtmlRecord`] through the [`html_record!`](crate::html_record)
//! macro and calling [`Schema::register`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_html::{RecordSchema, Schema};
//!
//! let schema = Schema::new().with_record(
//!     RecordSchema::new("Person")
//!         .field("name", "l=Name,e=span,omitempty")
//!         .field("age", "l=Age,e=span"),
//! );
//!
//! assert_eq!(schema.tag("Person", "age"), Some("l=Age,e=span"));
//! assert_eq!(schema.tag("Person", "email"), None);
//! ```
//!
//! Field names are the serialized names, so a `#[serde(rename = "...")]` on
//! a field or struct must be matched by the schema entry.
//!
//! A struct containing a `#[serde(flatten)]` field is serialized by Serde as
//! a map, which carries no struct name. Such a record renders with default
//! descriptors for every field, and tags registered for it are not used.

use crate::{parse_descriptor, Result, TagPolicy};
use indexmap::IndexMap;

/// Compile-time field tags for one struct.
///
/// Usually implemented with the [`html_record!`](crate::html_record) macro.
///
/// # Examples
///
/// ```rust
/// use serde_html::{HtmlRecord, Schema};
///
/// struct Address;
///
/// impl HtmlRecord for Address {
///     const NAME: &'static str = "Address";
///     const TAGS: &'static [(&'static str, &'static str)] = &[
///         ("street", "l=Street,e=span,c=street"),
///     ];
/// }
///
/// let schema = Schema::new().register::<Address>();
/// assert_eq!(schema.tag("Address", "street"), Some("l=Street,e=span,c=street"));
/// ```
pub trait HtmlRecord {
    /// The struct name as Serde reports it.
    const NAME: &'static str;
    /// `(field name, tag)` pairs.
    const TAGS: &'static [(&'static str, &'static str)];
}

/// The field tags of one struct.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordSchema {
    name: String,
    tags: IndexMap<String, String>,
}

impl RecordSchema {
    #[must_use]
    pub fn new(name: &str) -> Self {
        RecordSchema {
            name: name.to_string(),
            tags: IndexMap::new(),
        }
    }

    /// Sets the tag for one field, replacing any earlier tag for it.
    #[must_use]
    pub fn field(mut self, field: &str, tag: &str) -> Self {
        self.tags.insert(field.to_string(), tag.to_string());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tag(&self, field: &str) -> Option<&str> {
        self.tags.get(field).map(String::as_str)
    }

    /// Returns the `(field, tag)` pairs in registration order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tags.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }
}

/// Registry of field tags keyed by struct name.
///
/// Immutable once built; share it by reference between encode calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    records: IndexMap<String, RecordSchema>,
}

impl Schema {
    /// Creates an empty schema. Every field renders with the default descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any earlier record with the same name.
    #[must_use]
    pub fn with_record(mut self, record: RecordSchema) -> Self {
        self.records.insert(record.name.clone(), record);
        self
    }

    /// Adds the tags declared by an [`HtmlRecord`] implementation.
    #[must_use]
    pub fn register<T: HtmlRecord>(self) -> Self {
        let record = T::TAGS
            .iter()
            .fold(RecordSchema::new(T::NAME), |record, (field, tag)| {
                record.field(field, tag)
            });
        self.with_record(record)
    }

    #[must_use]
    pub fn record(&self, name: &str) -> Option<&RecordSchema> {
        self.records.get(name)
    }

    /// Looks up the raw tag of a field.
    #[must_use]
    pub fn tag(&self, record: &str, field: &str) -> Option<&str> {
        self.records.get(record).and_then(|r| r.tag(field))
    }

    /// Parses every registered tag, returning the first syntax error.
    ///
    /// Tags are otherwise only parsed when a field is encoded; calling this
    /// from a test surfaces malformed tags without needing sample data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_html::{RecordSchema, Schema, TagPolicy};
    ///
    /// let schema = Schema::new().with_record(RecordSchema::new("Person").field("name", "l=Name,,e=span"));
    /// assert!(schema.check(TagPolicy::Lenient).is_ok());
    /// assert!(schema.check(TagPolicy::Strict).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::TagSyntax`](crate::Error::TagSyntax) for the first
    /// malformed tag under [`TagPolicy::Strict`].
    pub fn check(&self, policy: TagPolicy) -> Result<()> {
        for record in self.records.values() {
            for (_, tag) in record.tags() {
                parse_descriptor(tag, policy)?;
            }
        }
        Ok(())
    }
}
