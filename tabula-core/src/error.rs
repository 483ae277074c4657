//! Error types for tabula

use thiserror::Error;

/// The main error type for tabula operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The described type is neither a struct nor a pointer to one
    #[error("{type_name} is neither struct nor does it point to one")]
    NotAStructure { type_name: String },

    /// Two different primary keys were declared for the same table
    #[error("table cannot have more than one primary key: found '{existing}' and '{incoming}'")]
    AmbiguousPrimaryKey { existing: String, incoming: String },

    /// A bind style name that does not map to any known style
    #[error("Unknown bind style '{value}', expected \"dollar\" or \"question\"")]
    UnknownBindStyle { value: String },
}

/// Convenience Result type for tabula operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new not-a-structure error
    pub fn not_a_structure(type_name: impl Into<String>) -> Self {
        Self::NotAStructure {
            type_name: type_name.into(),
        }
    }

    /// Create a new ambiguous primary key error
    pub fn ambiguous_primary_key(existing: impl Into<String>, incoming: impl Into<String>) -> Self {
        Self::AmbiguousPrimaryKey {
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    /// Create a new unknown bind style error
    pub fn unknown_bind_style(value: impl Into<String>) -> Self {
        Self::UnknownBindStyle {
            value: value.into(),
        }
    }
}
