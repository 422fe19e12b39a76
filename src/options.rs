//! Configuration options for HTML encoding.
//!
//! Per-field rendering is configured through tags registered in a
//! [`Schema`](crate::Schema). The options here only govern how those tags are
//! interpreted:
//!
//! - [`EncodeOptions`]: Main configuration struct
//! - [`TagPolicy`]: What to do with malformed tag fragments
//!
//! ## Examples
//!
//! ```rust
//! use serde_html::{to_string_with_options, EncodeOptions, RecordSchema, Schema};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32 }
//!
//! let schema = Schema::new().with_record(RecordSchema::new("Data").field("x", "l=X,e=span"));
//!
//! // Reject malformed tags instead of skipping the bad fragment
//! let html = to_string_with_options(&Data { x: 1 }, &schema, EncodeOptions::strict()).unwrap();
//! assert_eq!(html, "<div><span>X</span><span>1</span></div>");
//! ```

/// How the tag parser treats a malformed option fragment.
///
/// A fragment is malformed when it is empty (`l=a,,c=b`), has no key
/// (`=span`), or gives a recognised key an empty value (`e=`).
///
/// # Examples
///
/// ```rust
/// use serde_html::TagPolicy;
///
/// assert_eq!(TagPolicy::default(), TagPolicy::Lenient);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Skip the malformed fragment and keep parsing. A warning is logged.
    #[default]
    Lenient,
    /// Fail with [`Error::TagSyntax`](crate::Error::TagSyntax).
    Strict,
}

/// Configuration options for HTML encoding.
///
/// # Examples
///
/// ```rust
/// use serde_html::{EncodeOptions, TagPolicy};
///
/// let options = EncodeOptions::new();
/// assert_eq!(options.tag_policy, TagPolicy::Lenient);
///
/// let options = EncodeOptions::new().with_tag_policy(TagPolicy::Strict);
/// assert_eq!(options.tag_policy, TagPolicy::Strict);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub tag_policy: TagPolicy,
}

impl EncodeOptions {
    /// Creates default options (lenient tag parsing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that fail on any malformed tag fragment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_html::{EncodeOptions, TagPolicy};
    ///
    /// assert_eq!(EncodeOptions::strict().tag_policy, TagPolicy::Strict);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        EncodeOptions {
            tag_policy: TagPolicy::Strict,
        }
    }

    /// Sets the tag parsing policy.
    #[must_use]
    pub fn with_tag_policy(mut self, tag_policy: TagPolicy) -> Self {
        self.tag_policy = tag_policy;
        self
    }
}
