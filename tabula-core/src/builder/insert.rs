//! INSERT statements

use super::common::{join, named};
use super::QueryBuilder;

impl QueryBuilder {
    /// The query to insert a row, binding every column in order
    pub fn insert(&self) -> String {
        let values: Vec<String> = (1..=self.columns.len()).map(|i| self.bind(i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.column_list(),
            join(&values)
        )
    }

    /// The query to insert a row and return its primary key.
    ///
    /// The primary key column is left to the database, so it is excluded and
    /// binds are numbered over the remaining columns.
    pub fn insert_returning(&self) -> String {
        let columns = self.insertable_columns();
        let values: Vec<String> = (1..=columns.len()).map(|i| self.bind(i)).collect();
        self.returning(&columns, &values)
    }

    /// The query to insert a row using named values
    pub fn named_insert(&self) -> String {
        let values: Vec<String> = self.columns.iter().map(|c| named(c)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.column_list(),
            join(&values)
        )
    }

    /// The query to insert a row using named values, returning its primary key
    pub fn named_insert_returning(&self) -> String {
        let columns = self.insertable_columns();
        let values: Vec<String> = columns.iter().map(|c| named(c)).collect();
        self.returning(&columns, &values)
    }

    fn insertable_columns(&self) -> Vec<&str> {
        let id = self.id_column();
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| *column != id)
            .collect()
    }

    fn returning(&self, columns: &[&str], values: &[String]) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            self.table,
            join(columns),
            join(values),
            self.id_column()
        )
    }
}
