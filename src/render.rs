//! Markup generation from a lowered [`Value`] tree.
//!
//! Fields are written in declared order. Each field is rendered according to
//! its shape:
//!
//! - scalars and records are wrapped as
//!   `<div><span>{label}</span><{element}{class}>…</{element}></div>`, or just
//!   `<{element}{class}>…</{element}>` when *stripped* (inside a sequence or a
//!   table row)
//! - sequences render every item stripped with the sequence field's own
//!   descriptor and add no wrapper of their own, unless the field is a `row`,
//!   in which case the items become `<tr>` rows of a `<table>`, headed by the
//!   labels of the first item's fields when that item is a record

use crate::{
    parse_descriptor, EncodeOptions, FieldDescriptor, Record, Result, Schema, TagPolicy, Value,
};

pub(crate) struct Renderer<'s> {
    schema: &'s Schema,
    policy: TagPolicy,
}

impl<'s> Renderer<'s> {
    pub(crate) fn new(schema: &'s Schema, options: &EncodeOptions) -> Self {
        Renderer {
            schema,
            policy: options.tag_policy,
        }
    }

    /// Writes every field of `record`.
    ///
    /// In row mode each field is stripped and wrapped in `<td>`. An omitted
    /// field writes nothing, not even its cell.
    pub(crate) fn write_record(&self, output: &mut String, record: &Record, row: bool) -> Result<()> {
        for (field, value) in record.fields.iter() {
            let descriptor = self.descriptor(record, field)?;

            if descriptor.omit_empty && value.is_empty() {
                log::trace!("omitting empty field {field:?}");
                continue;
            }

            if row {
                output.push_str("<td>");
            }
            self.write_field(output, &descriptor, value, row)?;
            if row {
                output.push_str("</td>");
            }
        }
        Ok(())
    }

    fn descriptor(&self, record: &Record, field: &str) -> Result<FieldDescriptor> {
        let tag = record
            .name
            .as_deref()
            .and_then(|name| self.schema.tag(name, field))
            .unwrap_or_default();
        parse_descriptor(tag, self.policy)
    }

    fn write_field(
        &self,
        output: &mut String,
        descriptor: &FieldDescriptor,
        value: &Value,
        stripped: bool,
    ) -> Result<()> {
        match value {
            Value::Sequence(items) => self.write_sequence(output, descriptor, items),
            Value::Record(record) => {
                write_open(output, descriptor, stripped);
                self.write_record(output, record, descriptor.is_row)?;
                write_close(output, descriptor, stripped);
                Ok(())
            }
            scalar => {
                write_open(output, descriptor, stripped);
                output.push_str(&scalar.scalar_text().unwrap_or_default());
                write_close(output, descriptor, stripped);
                Ok(())
            }
        }
    }

    fn write_sequence(
        &self,
        output: &mut String,
        descriptor: &FieldDescriptor,
        items: &[Value],
    ) -> Result<()> {
        if descriptor.is_row {
            output.push_str("<table>");
            if let Some(Value::Record(first)) = items.first() {
                self.write_header(output, first)?;
            }
        }

        for item in items {
            self.write_field(output, descriptor, item, true)?;
        }

        if descriptor.is_row {
            output.push_str("</table>");
        }
        Ok(())
    }

    /// Writes the `<thead>` for a row sequence from the fields `record`
    /// actually serialized, so it is only as wide as the first item. Fields
    /// that item drops through `#[serde(skip_serializing_if)]` get no header
    /// cell even when later items serialize them.
    fn write_header(&self, output: &mut String, record: &Record) -> Result<()> {
        output.push_str("<thead><tr>");
        for field in record.fields.keys() {
            let descriptor = self.descriptor(record, field)?;
            output.push_str("<td>");
            output.push_str(&descriptor.label);
            output.push_str("</td>");
        }
        output.push_str("</tr></thead>");
        Ok(())
    }
}

fn write_open(output: &mut String, descriptor: &FieldDescriptor, stripped: bool) {
    if !stripped {
        output.push_str("<div>");
        if !descriptor.label.is_empty() {
            output.push_str("<span>");
            output.push_str(&descriptor.label);
            output.push_str("</span>");
        }
    }
    output.push('<');
    output.push_str(&descriptor.element);
    output.push_str(&descriptor.class_attr());
    output.push('>');
}

fn write_close(output: &mut String, descriptor: &FieldDescriptor, stripped: bool) {
    output.push_str("</");
    output.push_str(&descriptor.element);
    output.push('>');
    if !stripped {
        output.push_str("</div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordSchema;

    fn record(name: &str, fields: Vec<(&str, Value)>) -> Record {
        let mut record = Record::named(name);
        for (field, value) in fields {
            record.fields.insert(field.to_string(), value);
        }
        record
    }

    fn render(schema: &Schema, record: &Record) -> String {
        let renderer = Renderer::new(schema, &EncodeOptions::default());
        let mut output = String::new();
        renderer.write_record(&mut output, record, false).unwrap();
        output
    }

    #[test]
    fn test_untagged_scalar_uses_div() {
        let schema = Schema::new();
        let r = record("Note", vec![("text", Value::from("hi"))]);
        assert_eq!(render(&schema, &r), "<div><div>hi</div></div>");
    }

    #[test]
    fn test_null_renders_empty_text() {
        let schema = Schema::new().with_record(RecordSchema::new("Note").field("text", "l=Text"));
        let r = record("Note", vec![("text", Value::Null)]);
        assert_eq!(render(&schema, &r), "<div><span>Text</span><div></div></div>");
    }

    #[test]
    fn test_empty_row_sequence_is_bare_table() {
        let schema = Schema::new().with_record(RecordSchema::new("Report").field("rows", "row"));
        let r = record("Report", vec![("rows", Value::Sequence(vec![]))]);
        assert_eq!(render(&schema, &r), "<table></table>");
    }

    #[test]
    fn test_scalar_row_sequence_has_no_header() {
        let schema =
            Schema::new().with_record(RecordSchema::new("Report").field("rows", "row,c=line"));
        let r = record(
            "Report",
            vec![("rows", Value::Sequence(vec![Value::from(1), Value::from(2)]))],
        );
        assert_eq!(
            render(&schema, &r),
            "<table><tr class='line'>1</tr><tr class='line'>2</tr></table>"
        );
    }

    #[test]
    fn test_omitted_field_in_row_writes_no_cell() {
        let schema = Schema::new()
            .with_record(RecordSchema::new("Report").field("rows", "row"))
            .with_record(
                RecordSchema::new("Line")
                    .field("name", "l=Name,e=span,omitempty")
                    .field("qty", "l=Qty,e=span"),
            );
        let line = record("Line", vec![("name", Value::from("")), ("qty", Value::from(2))]);
        let r = record("Report", vec![("rows", Value::Sequence(vec![Value::Record(line)]))]);
        assert_eq!(
            render(&schema, &r),
            "<table><thead><tr><td>Name</td><td>Qty</td></tr></thead><tr><td><span>2</span></td></tr></table>"
        );
    }

    #[test]
    fn test_anonymous_record_uses_defaults() {
        let schema = Schema::new().with_record(RecordSchema::new("Note").field("text", "l=Text"));
        let mut r = Record::anonymous();
        r.fields.insert("text".to_string(), Value::from("hi"));
        assert_eq!(render(&schema, &r), "<div><div>hi</div></div>");
    }
}
