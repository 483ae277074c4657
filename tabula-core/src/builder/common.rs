//! Conventions and helpers shared by the statement templates

/// Default primary key column
pub const ID_COLUMN: &str = "id";

/// Column never touched by updates
pub const CREATED_AT_COLUMN: &str = "created_at";

/// Column holding the soft delete timestamp
pub const DELETED_AT_COLUMN: &str = "deleted_at";

/// Join identifiers or placeholders with `", "`
pub(crate) fn join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A named placeholder for the column
pub(crate) fn named(column: &str) -> String {
    format!(":{}", column)
}

/// Anything that names an ordered list of columns
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl<S: Into<String>> IntoColumns for Vec<S> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: Into<String>, const N: usize> IntoColumns for [S; N] {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: AsRef<str>> IntoColumns for &[S] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

/// A pair of columns, as in `select_by(("email", "name"))`
impl IntoColumns for (&str, &str) {
    fn into_columns(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}
