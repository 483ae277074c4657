//! Resolution options

use serde::{Deserialize, Serialize};

use crate::BindStyle;

/// Default tag key holding the table name
pub const DEFAULT_TABLE_TAG: &str = "dbtable";

/// Default tag key holding a column name
pub const DEFAULT_COLUMN_TAG: &str = "db";

/// How a struct description is turned into a query builder
///
/// Setters ignore empty values so that options can be forwarded blindly
/// from a caller's own configuration.
///
/// # Examples
/// ```
/// use tabula_core::{BindStyle, Options};
///
/// let options = Options::new()
///     .table_name("accounts")
///     .column_tag("col")
///     .bind_style(BindStyle::Question);
/// assert_eq!(options.table_name.as_deref(), Some("accounts"));
/// assert_eq!(options.table_tag, "dbtable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Table name to use regardless of any tag
    pub table_name: Option<String>,
    /// Tag key holding the table name
    pub table_tag: String,
    /// Tag key holding a column name
    pub column_tag: String,
    /// Placeholder style of the generated statements
    pub bind_style: BindStyle,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            table_name: None,
            table_tag: DEFAULT_TABLE_TAG.to_string(),
            column_tag: DEFAULT_COLUMN_TAG.to_string(),
            bind_style: BindStyle::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table name to use
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.table_name = Some(name);
        }
        self
    }

    /// Set the tag key used to get the table name
    pub fn table_tag(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.is_empty() {
            self.table_tag = key;
        }
        self
    }

    /// Set the tag key used to get a column name
    pub fn column_tag(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.is_empty() {
            self.column_tag = key;
        }
        self
    }

    /// Set the bind parameter style
    pub fn bind_style(mut self, style: BindStyle) -> Self {
        self.bind_style = style;
        self
    }

    /// The table name override, if a non-empty one was given
    pub(crate) fn table_override(&self) -> Option<&str> {
        self.table_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.table_name, None);
        assert_eq!(options.table_tag, "dbtable");
        assert_eq!(options.column_tag, "db");
        assert_eq!(options.bind_style, BindStyle::Dollar);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let options = Options::new().table_name("").table_tag("").column_tag("");
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_setters() {
        let options = Options::new()
            .table_name("mytable")
            .table_tag("table")
            .column_tag("col")
            .bind_style(BindStyle::Question);
        assert_eq!(options.table_override(), Some("mytable"));
        assert_eq!(options.table_tag, "table");
        assert_eq!(options.column_tag, "col");
        assert_eq!(options.bind_style, BindStyle::Question);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let options: Options =
            serde_json::from_str(r#"{"column_tag": "col", "bind_style": "question"}"#).unwrap();
        assert_eq!(options.table_tag, "dbtable");
        assert_eq!(options.column_tag, "col");
        assert_eq!(options.bind_style, BindStyle::Question);
    }

    #[test]
    fn test_empty_override_from_config_is_ignored() {
        let options: Options = serde_json::from_str(r#"{"table_name": ""}"#).unwrap();
        assert_eq!(options.table_override(), None);
    }
}
