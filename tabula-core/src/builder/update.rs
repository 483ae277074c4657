//! UPDATE statements

use super::common::{join, named, CREATED_AT_COLUMN};
use super::QueryBuilder;

impl QueryBuilder {
    /// The query to update a row by primary key.
    ///
    /// Neither the primary key nor `created_at` is updated. The SET binds come
    /// first and the key is bound last.
    pub fn update(&self) -> String {
        let assignments: Vec<String> = self
            .updatable_columns()
            .enumerate()
            .map(|(i, column)| format!("{} = {}", column, self.bind(i + 1)))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = {}",
            self.table,
            join(&assignments),
            self.id_column(),
            self.bind(assignments.len() + 1)
        )
    }

    /// The query to update a row by primary key using named values
    pub fn named_update(&self) -> String {
        let assignments: Vec<String> = self
            .updatable_columns()
            .map(|column| format!("{} = {}", column, named(column)))
            .collect();
        let id = self.id_column();
        format!(
            "UPDATE {} SET {} WHERE {} = {}",
            self.table,
            join(&assignments),
            id,
            named(id)
        )
    }

    fn updatable_columns(&self) -> impl Iterator<Item = &str> + '_ {
        let id = self.id_column();
        self.columns
            .iter()
            .map(String::as_str)
            .filter(move |column| *column != id && *column != CREATED_AT_COLUMN)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BindStyle, QueryBuilder};

    fn users() -> QueryBuilder {
        QueryBuilder::new("users", ["id", "name", "email", "created_at", "deleted_at"])
    }

    #[test]
    fn test_update() {
        assert_eq!(
            users().update(),
            "UPDATE users SET name = $1, email = $2, deleted_at = $3 WHERE id = $4"
        );
    }

    #[test]
    fn test_update_question_binds() {
        let qb = users().with_bind_style(BindStyle::Question);
        assert_eq!(
            qb.update(),
            "UPDATE users SET name = ?, email = ?, deleted_at = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_update_custom_primary_key() {
        let qb = QueryBuilder::new("accounts", ["uuid", "id", "name"]).with_primary_key("uuid");
        assert_eq!(qb.update(), "UPDATE accounts SET id = $1, name = $2 WHERE uuid = $3");
    }

    #[test]
    fn test_named_update() {
        assert_eq!(
            users().named_update(),
            "UPDATE users SET name = :name, email = :email, deleted_at = :deleted_at WHERE id = :id"
        );
    }

    #[test]
    fn test_update_only_key_columns() {
        let qb = QueryBuilder::new("tags", ["id", "created_at"]);
        assert_eq!(qb.update(), "UPDATE tags SET  WHERE id = $1");
    }
}
