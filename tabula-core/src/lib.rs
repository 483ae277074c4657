//! Tabula Core - CRUD SQL statements from a column list or a tagged struct
//!
//! A [`QueryBuilder`] renders select, insert, update and delete statements
//! for one table. It is built either from an explicit table name and column
//! list, or by resolving a struct description whose fields carry table and
//! column tags. Nothing here talks to a database.
//!
//! ```
//! use tabula_core::{Options, QueryBuilder, Schema};
//!
//! #[derive(Schema)]
//! struct Timestamps {
//!     #[tag(db = "created_at")]
//!     created_at: String,
//!     #[tag(db = "deleted_at")]
//!     deleted_at: Option<String>,
//! }
//!
//! #[derive(Schema)]
//! struct User {
//!     #[tag(dbtable = "users", db = "id,pkey")]
//!     id: i64,
//!     #[tag(db = "email")]
//!     email: String,
//!     #[schema(embed)]
//!     timestamps: Timestamps,
//! }
//!
//! let qb = QueryBuilder::from_schema::<User>(&Options::default()).unwrap();
//! assert_eq!(
//!     qb.update(),
//!     "UPDATE users SET email = $1, deleted_at = $2 WHERE id = $3"
//! );
//! ```

pub mod bind;
pub mod builder;
pub mod error;
pub mod options;
pub mod resolver;
pub mod schema;
pub mod table;

// Re-export main types
pub use bind::BindStyle;
pub use builder::{IntoColumns, QueryBuilder};
pub use error::{Error, Result};
pub use options::Options;
pub use resolver::{resolve, resolve_schema};
pub use schema::{FieldDef, Schema, StructDef, Tags, TypeDef};
pub use table::Table;

#[cfg(feature = "derive")]
pub use tabula_derive::Schema;

/// Create a new query builder for the given table and columns
pub fn table<C: IntoColumns>(name: &str, columns: C) -> QueryBuilder {
    QueryBuilder::new(name, columns)
}
