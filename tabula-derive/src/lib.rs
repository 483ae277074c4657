//! Derive macro for tabula
//!
//! Provides `#[derive(Schema)]`, which describes a struct's fields so the
//! resolver can find its table name, columns and primary key.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod schema;
mod types;

/// Derive `Schema` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use tabula_core::Schema;
///
/// #[derive(Schema)]
/// struct Timestamps {
///     #[tag(db = "created_at")]
///     created_at: DateTime<Utc>,
///     #[tag(db = "deleted_at")]
///     deleted_at: Option<DateTime<Utc>>,
/// }
///
/// #[derive(Schema)]
/// struct User {
///     #[tag(dbtable = "users", db = "id,pkey")]
///     id: i64,
///     #[tag(db = "email")]
///     email: String,
///     #[schema(embed)]
///     timestamps: Box<Timestamps>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[tag(key = "value", ...)]` - Attach tags to a field. Any key is
///   accepted; which ones name tables and columns is decided at resolution.
/// - `#[schema(embed)]` - The field is a struct implementing `Schema` (possibly
///   behind `Option`, `Box`, `Rc`, `Arc` or a reference) whose columns are
///   spliced in at this position. A generic parameter used as an embedded
///   type gets a `Schema` bound on the generated impl.
///
/// Nesting is opt-in. A field whose type implements `Schema` but carries no
/// `#[schema(embed)]` is described as a plain field. Its struct's columns are
/// not spliced in; only its own column tag, if any, adds a column.
#[proc_macro_derive(Schema, attributes(tag, schema))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    schema::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
