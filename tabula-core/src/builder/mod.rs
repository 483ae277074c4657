//! Statement templates for a single table
//!
//! [`QueryBuilder`] holds a table name, its ordered columns, the primary key
//! and the bind style. Every statement method renders a fresh SQL string from
//! those fields; nothing is cached and nothing can fail once the builder
//! exists.

pub mod common;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use common::IntoColumns;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schema::{Schema, TypeDef};
use crate::{resolve, BindStyle, Options, Result, Table};
use common::{join, ID_COLUMN};

/// Generates the CRUD statements of one table
///
/// The table must have the columns `id` (or the configured primary key),
/// `created_at` and `deleted_at` for every statement to make sense.
///
/// # Examples
/// ```
/// use tabula_core::QueryBuilder;
///
/// let qb = QueryBuilder::new("users", ["id", "name", "email"]);
/// assert_eq!(qb.hard_delete(), "DELETE FROM users WHERE id = $1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryBuilder {
    pub table: String,
    pub columns: Vec<String>,
    /// Read statements return soft deleted rows too
    pub include_soft_deleted: bool,
    pub primary_key: String,
    pub bind_style: BindStyle,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self {
            table: String::new(),
            columns: Vec::new(),
            include_soft_deleted: false,
            primary_key: ID_COLUMN.to_string(),
            bind_style: BindStyle::Dollar,
        }
    }
}

impl QueryBuilder {
    /// Create a builder for the given table and columns
    pub fn new<C: IntoColumns>(table: impl Into<String>, columns: C) -> Self {
        Self {
            table: table.into(),
            columns: columns.into_columns(),
            ..Self::default()
        }
    }

    /// Create a builder from a resolved table
    pub fn from_table(table: Table, bind_style: BindStyle) -> Self {
        let mut qb = Self::new(table.name, table.columns);
        if let Some(key) = table.primary_key.filter(|key| !key.is_empty()) {
            qb.primary_key = key;
        }
        qb.bind_style = bind_style;
        qb
    }

    /// Create a builder from a struct description
    ///
    /// Fails when `ty` is not a struct or declares more than one primary key.
    pub fn from_type(ty: &TypeDef, options: &Options) -> Result<Self> {
        let table = resolve(ty, options)?;
        let qb = Self::from_table(table, options.bind_style);
        debug!(
            table = %qb.table,
            primary_key = %qb.primary_key,
            bind_style = %qb.bind_style,
            "query builder ready"
        );
        Ok(qb)
    }

    /// Create a builder from a [`Schema`] type
    ///
    /// # Examples
    /// ```
    /// use tabula_core::{Options, QueryBuilder, Schema};
    ///
    /// #[derive(Schema)]
    /// struct Post {
    ///     #[tag(db = "id,pkey")]
    ///     id: i64,
    ///     #[tag(db = "title")]
    ///     title: String,
    /// }
    ///
    /// let qb = QueryBuilder::from_schema::<Post>(&Options::default()).unwrap();
    /// assert_eq!(qb.insert(), "INSERT INTO post (id, title) VALUES ($1, $2)");
    /// ```
    pub fn from_schema<T: Schema>(options: &Options) -> Result<Self> {
        Self::from_type(&TypeDef::of::<T>(), options)
    }

    /// Like [`QueryBuilder::from_schema`] but panics on error.
    ///
    /// Meant for statically known structs whose tags are known to be valid.
    pub fn must_from_schema<T: Schema>(options: &Options) -> Self {
        match Self::from_schema::<T>(options) {
            Ok(qb) => qb,
            Err(err) => panic!("{}", err),
        }
    }

    /// Return soft deleted rows from read statements
    pub fn with_soft_deleted(mut self, include: bool) -> Self {
        self.include_soft_deleted = include;
        self
    }

    /// Use another primary key column
    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = column.into();
        self
    }

    /// Use another bind style
    pub fn with_bind_style(mut self, style: BindStyle) -> Self {
        self.bind_style = style;
        self
    }

    /// The select by key, insert, update and soft delete statements
    pub fn queries(&self) -> (String, String, String, String) {
        (self.select(), self.insert(), self.update(), self.delete())
    }

    /// The primary key column, falling back to `id`
    pub(crate) fn id_column(&self) -> &str {
        if self.primary_key.is_empty() {
            ID_COLUMN
        } else {
            &self.primary_key
        }
    }

    pub(crate) fn bind(&self, position: usize) -> String {
        self.bind_style.placeholder(position)
    }

    pub(crate) fn column_list(&self) -> String {
        join(&self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn users() -> QueryBuilder {
        QueryBuilder::new("users", ["id", "name", "email", "created_at", "deleted_at"])
    }

    #[test]
    fn test_new_defaults() {
        let qb = QueryBuilder::new("users", ["id", "name", "email"]);
        assert_eq!(qb.table, "users");
        assert_eq!(qb.columns, vec!["id", "name", "email"]);
        assert!(!qb.include_soft_deleted);
        assert_eq!(qb.primary_key, "id");
        assert_eq!(qb.bind_style, BindStyle::Dollar);
    }

    #[test]
    fn test_queries() {
        let (select, insert, update, delete) = users().queries();
        assert_eq!(
            select,
            "SELECT id, name, email, created_at, deleted_at FROM users WHERE id = $1 AND deleted_at IS NULL"
        );
        assert_eq!(
            insert,
            "INSERT INTO users (id, name, email, created_at, deleted_at) VALUES ($1, $2, $3, $4, $5)"
        );
        assert_eq!(update, "UPDATE users SET name = $1, email = $2, deleted_at = $3 WHERE id = $4");
        assert_eq!(delete, "UPDATE users SET deleted_at = $1 WHERE id = $2");
    }

    #[test]
    fn test_queries_with_soft_deleted() {
        let (select, insert, update, delete) = users().with_soft_deleted(true).queries();
        assert_eq!(
            select,
            "SELECT id, name, email, created_at, deleted_at FROM users WHERE id = $1"
        );
        assert_eq!(
            insert,
            "INSERT INTO users (id, name, email, created_at, deleted_at) VALUES ($1, $2, $3, $4, $5)"
        );
        assert_eq!(update, "UPDATE users SET name = $1, email = $2, deleted_at = $3 WHERE id = $4");
        assert_eq!(delete, "UPDATE users SET deleted_at = $1 WHERE id = $2");
    }

    #[test]
    fn test_empty_primary_key_falls_back_to_id() {
        let qb = users().with_primary_key("");
        assert_eq!(qb.hard_delete(), "DELETE FROM users WHERE id = $1");
    }

    #[test]
    fn test_from_table_uses_resolved_primary_key() {
        let table = Table::new("accounts", ["uuid", "name"]).with_primary_key("uuid");
        let qb = QueryBuilder::from_table(table, BindStyle::Question);
        assert_eq!(qb.primary_key, "uuid");
        assert_eq!(qb.select(), "SELECT uuid, name FROM accounts WHERE uuid = ? AND deleted_at IS NULL");
    }

    #[test]
    fn test_from_table_without_primary_key() {
        let qb = QueryBuilder::from_table(Table::new("accounts", ["name"]), BindStyle::Dollar);
        assert_eq!(qb.primary_key, "id");
    }

    #[test]
    fn test_from_type_not_a_struct() {
        let err = QueryBuilder::from_type(&TypeDef::scalar("&str"), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::NotAStructure { .. }));
    }

    #[test]
    fn test_deserialize_config() {
        let qb: QueryBuilder = serde_json::from_str(
            r#"{"table": "users", "columns": ["id", "name"], "bind_style": "question"}"#,
        )
        .unwrap();
        assert_eq!(qb.primary_key, "id");
        assert!(!qb.include_soft_deleted);
        assert_eq!(qb.select_all(), "SELECT id, name FROM users WHERE deleted_at IS NULL");
        assert_eq!(qb.hard_delete(), "DELETE FROM users WHERE id = ?");
    }

    #[test]
    fn test_builder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryBuilder>();
        assert_send_sync::<Table>();
        assert_send_sync::<Options>();
    }
}
