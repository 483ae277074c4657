//! Resolved table descriptors

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A table name, its ordered columns and an optional primary key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
}

impl Table {
    /// Create a descriptor from a known table name and columns
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            primary_key: None,
        }
    }

    /// Set the primary key column
    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    /// Append a column from a column tag value.
    ///
    /// The value is a column name optionally followed by comma separated
    /// qualifiers. A `pkey` or `primaryKey` qualifier (any case) also
    /// registers the column as the primary key.
    pub(crate) fn add_column(&mut self, tag: &str) -> Result<()> {
        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Ok(());
        }
        if parts.any(is_primary_key) {
            self.set_primary_key(name)?;
        }
        self.columns.push(name.to_string());
        Ok(())
    }

    /// Splice the columns of a nested table after the current ones and merge
    /// its primary key.
    pub(crate) fn merge(&mut self, nested: Table) -> Result<()> {
        if let Some(key) = nested.primary_key.as_deref() {
            self.set_primary_key(key)?;
        }
        self.columns.extend(nested.columns);
        Ok(())
    }

    fn set_primary_key(&mut self, column: &str) -> Result<()> {
        match self.primary_key.as_deref() {
            Some(existing) if !existing.is_empty() && existing != column => {
                Err(Error::ambiguous_primary_key(existing, column))
            }
            _ => {
                self.primary_key = Some(column.to_string());
                Ok(())
            }
        }
    }
}

fn is_primary_key(qualifier: &str) -> bool {
    let qualifier = qualifier.trim();
    qualifier.eq_ignore_ascii_case("primaryKey") || qualifier.eq_ignore_ascii_case("pkey")
}
