//! Row-tagged sequences render as HTML tables.
//!
//! Run with: cargo run --example tables

use serde::Serialize;
use serde_html::{html_record, to_writer, Schema};
use std::error::Error;
use std::io;

#[derive(Debug, Serialize)]
struct Inventory {
    title: String,
    products: Vec<Product>,
}

#[derive(Debug, Serialize)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    in_stock: bool,
}

html_record!(Inventory {
    title: "l=Inventory,e=h1",
    products: "row,c=product",
});

html_record!(Product {
    sku: "l=SKU,e=code",
    name: "l=Name,e=span",
    price: "l=Price,e=span,c=price",
    in_stock: "l=In stock,e=span",
});

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new().register::<Inventory>().register::<Product>();

    let inventory = Inventory {
        title: "Spring".into(),
        products: vec![
            Product {
                sku: "WIDGET-001".into(),
                name: "Super Widget".into(),
                price: 29.99,
                in_stock: true,
            },
            Product {
                sku: "GADGET-002".into(),
                name: "Mega Gadget".into(),
                price: 49.99,
                in_stock: false,
            },
        ],
    };

    to_writer(io::stdout().lock(), &inventory, &schema)?;
    println!();

    Ok(())
}
