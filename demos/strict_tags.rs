//! Lenient versus strict handling of malformed tags.
//!
//! Run with: cargo run --example strict_tags

use serde::Serialize;
use serde_html::{to_string, to_string_with_options, EncodeOptions, RecordSchema, Schema};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Note {
    title: String,
    body: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new().with_record(
        RecordSchema::new("Note")
            .field("title", "l=Title,,e=h2")
            .field("body", "e=p"),
    );

    let note = Note {
        title: "Hello".into(),
        body: "World".into(),
    };

    // The empty fragment is skipped
    let html = to_string(&note, &schema)?;
    println!("Lenient:\n{}\n", html);

    // The same tag is rejected
    match to_string_with_options(&note, &schema, EncodeOptions::strict()) {
        Ok(html) => println!("Strict:\n{}", html),
        Err(e) => println!("Strict error: {}", e),
    }

    Ok(())
}
