//! SELECT statements

use super::common::{IntoColumns, DELETED_AT_COLUMN};
use super::QueryBuilder;

impl QueryBuilder {
    /// The query to get a row by primary key
    pub fn select(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {} WHERE {} = {}",
            self.column_list(),
            self.table,
            self.id_column(),
            self.bind(1)
        );
        self.push_soft_delete_filter(&mut sql, " AND ");
        sql
    }

    /// The query to get rows by one or more columns, combined with AND
    ///
    /// An empty column set gives the same statement as
    /// [`QueryBuilder::select_all`].
    ///
    /// # Examples
    /// ```
    /// use tabula_core::QueryBuilder;
    ///
    /// let qb = QueryBuilder::new("users", ["id", "name", "email"]);
    /// assert_eq!(
    ///     qb.select_by(("email", "name")),
    ///     "SELECT id, name, email FROM users WHERE email = $1 AND name = $2 AND deleted_at IS NULL"
    /// );
    /// ```
    pub fn select_by<C: IntoColumns>(&self, columns: C) -> String {
        let columns = columns.into_columns();
        if columns.is_empty() {
            return self.select_all();
        }

        let conditions: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = {}", column, self.bind(i + 1)))
            .collect();

        let mut sql = format!(
            "SELECT {} FROM {} WHERE {}",
            self.column_list(),
            self.table,
            conditions.join(" AND ")
        );
        self.push_soft_delete_filter(&mut sql, " AND ");
        sql
    }

    /// The query to get all rows of the table
    pub fn select_all(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.column_list(), self.table);
        self.push_soft_delete_filter(&mut sql, " WHERE ");
        sql
    }

    fn push_soft_delete_filter(&self, sql: &mut String, connector: &str) {
        if !self.include_soft_deleted {
            sql.push_str(connector);
            sql.push_str(DELETED_AT_COLUMN);
            sql.push_str(" IS NULL");
        }
    }
}
