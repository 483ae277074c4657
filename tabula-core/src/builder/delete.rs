//! Soft and hard DELETE statements

use super::common::DELETED_AT_COLUMN;
use super::QueryBuilder;

impl QueryBuilder {
    /// The query to mark a row as deleted.
    ///
    /// Binds the deletion timestamp first and the primary key second.
    pub fn delete(&self) -> String {
        format!(
            "UPDATE {} SET {} = {} WHERE {} = {}",
            self.table,
            DELETED_AT_COLUMN,
            self.bind(1),
            self.id_column(),
            self.bind(2)
        )
    }

    /// The query to remove a row by primary key
    pub fn hard_delete(&self) -> String {
        format!(
            "DELETE FROM {} WHERE {} = {}",
            self.table,
            self.id_column(),
            self.bind(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{BindStyle, QueryBuilder};

    fn users() -> QueryBuilder {
        QueryBuilder::new("users", ["id", "name", "email", "created_at", "deleted_at"])
    }

    #[test]
    fn test_soft_delete() {
        assert_eq!(users().delete(), "UPDATE users SET deleted_at = $1 WHERE id = $2");
    }

    #[test]
    fn test_soft_delete_question_binds() {
        let qb = users().with_bind_style(BindStyle::Question);
        assert_eq!(qb.delete(), "UPDATE users SET deleted_at = ? WHERE id = ?");
    }

    #[test]
    fn test_hard_delete() {
        assert_eq!(users().hard_delete(), "DELETE FROM users WHERE id = $1");
    }

    #[test]
    fn test_hard_delete_custom_primary_key() {
        let qb = users().with_primary_key("email").with_bind_style(BindStyle::Question);
        assert_eq!(qb.hard_delete(), "DELETE FROM users WHERE email = ?");
    }

    #[test]
    fn test_soft_delete_ignores_include_soft_deleted() {
        assert_eq!(users().with_soft_deleted(true).delete(), users().delete());
    }
}
