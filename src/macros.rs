/// Implements [`HtmlRecord`](crate::HtmlRecord) for a struct.
///
/// Fields are listed as `field: "tag"`; fields left out use the default
/// descriptor. Use the `as "Name"` form when the struct is renamed for Serde.
///
/// ```rust
/// use serde::Serialize;
/// use serde_html::{html_record, to_string, Schema};
///
/// #[derive(Serialize)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// html_record!(Person {
///     name: "l=Name,e=span",
///     age: "l=Age,e=span",
/// });
///
/// let schema = Schema::new().register::<Person>();
/// let html = to_string(&Person { name: "Ann".into(), age: 7 }, &schema).unwrap();
/// assert_eq!(
///     html,
///     "<div><span>Name</span><span>Ann</span></div><div><span>Age</span><span>7</span></div>"
/// );
/// ```
#[macro_export]
macro_rules! html_record {
    ($ty:ident as $name:literal { $($field:ident : $tag:literal),* $(,)? }) => {
        impl $crate::HtmlRecord for $ty {
            const NAME: &'static str = $name;
            const TAGS: &'static [(&'static str, &'static str)] =
                &[$((stringify!($field), $tag)),*];
        }
    };

    ($ty:ident { $($field:ident : $tag:literal),* $(,)? }) => {
        impl $crate::HtmlRecord for $ty {
            const NAME: &'static str = stringify!($ty);
            const TAGS: &'static [(&'static str, &'static str)] =
                &[$((stringify!($field), $tag)),*];
        }
    };
}
