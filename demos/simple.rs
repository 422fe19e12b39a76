//! Render a nested struct as labelled HTML.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_html::{html_record, to_string, Schema};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    address: Address,
}

#[derive(Debug, Serialize)]
struct Address {
    street: String,
    country: String,
}

html_record!(User {
    id: "l=ID,e=span",
    name: "l=Name,e=span,c=name",
    email: "l=Email,e=span,c=email,omitempty",
    address: "l=Address,c=address",
});

html_record!(Address {
    street: "l=Street,e=span",
    country: "l=Country,e=span",
});

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new().register::<User>().register::<Address>();

    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: String::new(),
        address: Address {
            street: "1600 Pennsylvania Avenue NW".to_string(),
            country: "US".to_string(),
        },
    };

    let html = to_string(&user, &schema)?;
    println!("HTML output:\n{}\n", html);

    assert!(!html.contains("Email"));
    println!("✓ Empty email omitted");

    Ok(())
}
