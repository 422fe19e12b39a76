use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_html::{html_record, to_string, to_value, Schema};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct Catalog {
    title: String,
    products: Vec<Product>,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

html_record!(User {
    id: "l=ID,e=span",
    name: "l=Name,e=span,c=name",
    email: "l=Email,e=a",
    active: "l=Active,e=span,omitempty",
});

html_record!(Product {
    sku: "l=SKU,e=span",
    name: "l=Name,e=span",
    price: "l=Price,e=span,c=price",
    quantity: "l=Qty,e=span",
});

html_record!(Catalog {
    title: "l=Title,e=h1",
    products: "l=Products,row,c=product",
});

html_record!(NestedData {
    id: "l=ID,e=span",
    metadata: "l=Metadata,c=meta",
    tags: "e=li,omitempty",
});

html_record!(Metadata {
    created: "l=Created,e=time",
    updated: "l=Updated,e=time",
    version: "l=Version,e=span",
});

fn schema() -> Schema {
    Schema::new()
        .register::<User>()
        .register::<Product>()
        .register::<Catalog>()
        .register::<NestedData>()
        .register::<Metadata>()
}

fn catalog(size: u32) -> Catalog {
    Catalog {
        title: "Spring".to_string(),
        products: (0..size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect(),
    }
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let schema = schema();
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("encode_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user), &schema))
    });
}

fn benchmark_encode_table(c: &mut Criterion) {
    let schema = schema();
    let mut group = c.benchmark_group("encode_table");

    for size in [10, 50, 100, 500].iter() {
        let catalog = catalog(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&catalog), &schema))
        });
    }
    group.finish();
}

fn benchmark_encode_nested(c: &mut Criterion) {
    let schema = schema();
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-01-02".to_string(),
            version: 1,
        },
        tags: vec!["tag1".to_string(), "tag2".to_string(), "tag3".to_string()],
    };

    c.bench_function("encode_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data), &schema))
    });
}

fn benchmark_lower_to_value(c: &mut Criterion) {
    let catalog = catalog(100);

    c.bench_function("lower_catalog_to_value", |b| {
        b.iter(|| to_value(black_box(&catalog)))
    });
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_encode_table,
    benchmark_encode_nested,
    benchmark_lower_to_value,
);
criterion_main!(benches);
