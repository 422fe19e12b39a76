//! Error types for HTML encoding.
//!
//! The only failure intrinsic to the encoder is malformed field metadata,
//! reported as [`Error::TagSyntax`] when the strict tag policy is active.
//! The remaining variants cover the Serde data model edges the encoder does
//! not render (non-record roots, data-carrying enum variants) and I/O when
//! writing to a stream.
//!
//! ## Examples
//!
//! ```rust
//! use serde_html::{parse_descriptor, Error, TagPolicy};
//!
//! let result = parse_descriptor("l=Name,,e=span", TagPolicy::Strict);
//! assert!(matches!(result, Err(Error::TagSyntax { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding to HTML.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed field metadata
    #[error("Tag syntax error in {tag:?} at fragment {fragment:?}: {msg}")]
    TagSyntax {
        tag: String,
        fragment: String,
        msg: String,
    },

    /// The root value was not a struct or map
    #[error("Expected a record at the root, found {0}")]
    ExpectedRecord(String),

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a tag syntax error for one fragment of a field's metadata.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_html::Error;
    ///
    /// let err = Error::tag_syntax("e=", "e=", "missing value");
    /// assert!(err.to_string().contains("missing value"));
    /// ```
    pub fn tag_syntax(tag: &str, fragment: &str, msg: &str) -> Self {
        Error::TagSyntax {
            tag: tag.to_string(),
            fragment: fragment.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an error for a root value that does not serialize as a record.
    pub fn expected_record(found: &str) -> Self {
        Error::ExpectedRecord(found.to_string())
    }

    /// Creates an unsupported type error for types that cannot be rendered.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
