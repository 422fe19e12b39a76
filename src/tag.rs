//! Field tag parsing.
//!
//! A tag is the comma-separated option list attached to one record field:
//!
//! ```text
//! option-list := option (',' option)*
//! option      := flag | key '=' value
//! flag        := "row" | "omitempty"
//! key         := "label" | "l" | "element" | "e" | "class" | "c"
//! ```
//!
//! Unknown keys and flags are ignored so tags stay forward compatible.
//! `row` always forces the element to `tr`, wherever it appears in the list.

use crate::{Error, Result, TagPolicy};

/// Element used when a tag does not name one.
pub const DEFAULT_ELEMENT: &str = "div";

/// Element forced by the `row` flag.
pub const ROW_ELEMENT: &str = "tr";

/// Parsed rendering instructions for one record field.
///
/// # Examples
///
/// ```rust
/// use serde_html::FieldDescriptor;
///
/// let descriptor = FieldDescriptor::default();
/// assert_eq!(descriptor.element, "div");
/// assert!(descriptor.label.is_empty());
/// assert!(!descriptor.is_row);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub label: String,
    pub element: String,
    pub class: String,
    pub is_row: bool,
    pub omit_empty: bool,
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        FieldDescriptor {
            label: String::new(),
            element: DEFAULT_ELEMENT.to_string(),
            class: String::new(),
            is_row: false,
            omit_empty: false,
        }
    }
}

impl FieldDescriptor {
    /// Returns the ` class='…'` attribute, or an empty string when no class is set.
    #[must_use]
    pub fn class_attr(&self) -> String {
        if self.class.is_empty() {
            String::new()
        } else {
            format!(" class='{}'", self.class)
        }
    }
}

/// Parses one field's tag into a [`FieldDescriptor`].
///
/// An empty tag yields [`FieldDescriptor::default`].
///
/// # Examples
///
/// ```rust
/// use serde_html::{parse_descriptor, TagPolicy};
///
/// let d = parse_descriptor("l=Name,e=span,c=name", TagPolicy::Lenient).unwrap();
/// assert_eq!(d.label, "Name");
/// assert_eq!(d.element, "span");
/// assert_eq!(d.class, "name");
///
/// let d = parse_descriptor("e=ul,row", TagPolicy::Lenient).unwrap();
/// assert_eq!(d.element, "tr");
/// assert!(d.is_row);
/// ```
///
/// # Errors
///
/// Under [`TagPolicy::Strict`], returns [`Error::TagSyntax`] for an empty
/// fragment, a fragment with no key, or a recognised key with no value.
pub fn parse_descriptor(tag: &str, policy: TagPolicy) -> Result<FieldDescriptor> {
    let mut descriptor = FieldDescriptor::default();

    if tag.trim().is_empty() {
        return Ok(descriptor);
    }

    for raw in tag.split(',') {
        let fragment = raw.trim();

        if fragment.is_empty() {
            reject(tag, fragment, "empty option", policy)?;
            continue;
        }

        let Some((key, value)) = fragment.split_once('=') else {
            match fragment {
                "row" => descriptor.is_row = true,
                "omitempty" => descriptor.omit_empty = true,
                _ => {}
            }
            continue;
        };

        let key = key.trim();
        let value = value.trim();

        if key.is_empty() {
            reject(tag, fragment, "missing key before '='", policy)?;
            continue;
        }

        let slot = match key {
            "label" | "l" => &mut descriptor.label,
            "element" | "e" => &mut descriptor.element,
            "class" | "c" => &mut descriptor.class,
            _ => continue,
        };

        if value.is_empty() {
            reject(tag, fragment, "missing value after '='", policy)?;
            continue;
        }

        *slot = value.to_string();
    }

    if descriptor.is_row {
        descriptor.element = ROW_ELEMENT.to_string();
    }

    Ok(descriptor)
}

fn reject(tag: &str, fragment: &str, msg: &str, policy: TagPolicy) -> Result<()> {
    match policy {
        TagPolicy::Strict => Err(Error::tag_syntax(tag, fragment, msg)),
        TagPolicy::Lenient => {
            log::warn!("skipping malformed fragment {fragment:?} in tag {tag:?}: {msg}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(tag: &str) -> FieldDescriptor {
        parse_descriptor(tag, TagPolicy::Lenient).unwrap()
    }

    #[test]
    fn test_short_keys() {
        let d = lenient("l=Name,e=span,c=name");
        assert_eq!(d.label, "Name");
        assert_eq!(d.element, "span");
        assert_eq!(d.class, "name");
        assert!(!d.is_row);
        assert!(!d.omit_empty);
    }

    #[test]
    fn test_long_keys() {
        let d = lenient("label=Street,element=p,class=street");
        assert_eq!(d.label, "Street");
        assert_eq!(d.element, "p");
        assert_eq!(d.class, "street");
    }

    #[test]
    fn test_empty_tag_is_default() {
        assert_eq!(lenient(""), FieldDescriptor::default());
        assert_eq!(lenient("   "), FieldDescriptor::default());
    }

    #[test]
    fn test_row_forces_tr_in_any_order() {
        let d = lenient("row,e=ul");
        assert!(d.is_row);
        assert_eq!(d.element, "tr");

        let d = lenient("l=Data,row");
        assert_eq!(d.label, "Data");
        assert_eq!(d.element, "tr");
    }

    #[test]
    fn test_omitempty_flag() {
        let d = lenient("e=span,l=Name,omitempty");
        assert!(d.omit_empty);
        assert_eq!(d.element, "span");
    }

    #[test]
    fn test_unknown_options_ignored() {
        let d = lenient("l=Name,id=main,sortable,e=span");
        assert_eq!(d.label, "Name");
        assert_eq!(d.element, "span");
    }

    #[test]
    fn test_value_keeps_spaces_and_equals() {
        let d = lenient("l=Name List, e=ul");
        assert_eq!(d.label, "Name List");
        assert_eq!(d.element, "ul");

        let d = lenient("l=a=b");
        assert_eq!(d.label, "a=b");
    }

    #[test]
    fn test_lenient_skips_malformed() {
        let d = lenient("l=Name,,e=,=x,c=name,");
        assert_eq!(d.label, "Name");
        assert_eq!(d.element, "div");
        assert_eq!(d.class, "name");
    }

    #[test]
    fn test_strict_rejects_malformed() {
        for tag in ["l=Name,,e=span", "=span", "e=", "l=Name,"] {
            let err = parse_descriptor(tag, TagPolicy::Strict).unwrap_err();
            assert!(matches!(err, Error::TagSyntax { .. }), "{tag}");
        }
    }

    #[test]
    fn test_strict_accepts_well_formed() {
        let d = parse_descriptor("l=Name,e=span,c=name,omitempty", TagPolicy::Strict).unwrap();
        assert_eq!(d.label, "Name");
        assert!(d.omit_empty);
    }

    #[test]
    fn test_class_attr() {
        assert_eq!(lenient("c=name").class_attr(), " class='name'");
        assert_eq!(lenient("l=Name").class_attr(), "");
    }
}
