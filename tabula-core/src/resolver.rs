//! Table resolution from struct descriptions

use heck::ToSnakeCase;
use tracing::{debug, trace};

use crate::schema::{FieldDef, Schema, StructDef, TypeDef};
use crate::{Error, Options, Result, Table};

/// Resolve the table described by `ty`.
///
/// `ty` must be a struct or a pointer to one. Top-level fields are walked in
/// declaration order: the first table tag found names the table, nested
/// structs splice their columns in at the position of the field, and column
/// tags append columns. When no table name is found the snake cased type name
/// is used.
///
/// # Examples
/// ```
/// use tabula_core::{resolve, FieldDef, Options, StructDef, TypeDef};
///
/// fn user_account() -> StructDef {
///     StructDef::new("UserAccount")
///         .field(FieldDef::new("id", TypeDef::scalar("i64")).tag("db", "id,pkey"))
///         .field(FieldDef::new("email", TypeDef::scalar("String")).tag("db", "email"))
/// }
///
/// let table = resolve(&TypeDef::Struct(user_account), &Options::default()).unwrap();
/// assert_eq!(table.name, "user_account");
/// assert_eq!(table.columns, vec!["id", "email"]);
/// assert_eq!(table.primary_key.as_deref(), Some("id"));
/// ```
pub fn resolve(ty: &TypeDef, options: &Options) -> Result<Table> {
    let def = ty
        .as_struct()
        .ok_or_else(|| Error::not_a_structure(ty.type_name()))?;

    let mut table = Table {
        name: options.table_override().unwrap_or_default().to_string(),
        ..Table::default()
    };
    let mut path = vec![def.path()];

    for field in def.fields() {
        if table.name.is_empty() {
            if let Some(name) = tag_value(field, &options.table_tag) {
                debug!(table = name, field = field.name, "table name from tag");
                table.name = name.to_string();
            }
        }
        add_field(&mut table, field, options, &mut path)?;
    }

    if table.name.is_empty() {
        table.name = def.name().to_snake_case();
        debug!(table = %table.name, type_name = def.name(), "table name from type name");
    }

    debug!(
        table = %table.name,
        columns = ?table.columns,
        primary_key = ?table.primary_key,
        "resolved table"
    );
    Ok(table)
}

/// Resolve the table described by a [`Schema`] type
pub fn resolve_schema<T: Schema>(options: &Options) -> Result<Table> {
    resolve(&TypeDef::of::<T>(), options)
}

fn add_field(
    table: &mut Table,
    field: &FieldDef,
    options: &Options,
    path: &mut Vec<&'static str>,
) -> Result<()> {
    let def = field.ty.as_struct();
    if let Some(def) = &def {
        let nested = nested_columns(def, options, path)?;
        debug!(
            field = field.name,
            nested = def.name(),
            columns = ?nested.columns,
            "splicing nested columns"
        );
        table.merge(nested)?;
    }

    match tag_value(field, &options.column_tag) {
        Some(column) => {
            let had_key = table.primary_key.is_some();
            table.add_column(column)?;
            if !had_key && table.primary_key.is_some() {
                debug!(field = field.name, primary_key = ?table.primary_key, "primary key registered");
            } else {
                trace!(field = field.name, column, "column added");
            }
        }
        None if def.is_none() => trace!(field = field.name, "skipping untagged field"),
        None => {}
    }
    Ok(())
}

/// Collect the columns and primary key contributed by a nested struct
fn nested_columns(
    def: &StructDef,
    options: &Options,
    path: &mut Vec<&'static str>,
) -> Result<Table> {
    if path.contains(&def.path()) {
        trace!(nested = def.path(), "cycle in struct description, not descending");
        return Ok(Table::default());
    }

    path.push(def.path());
    let mut table = Table::default();
    let result = def
        .fields()
        .iter()
        .try_for_each(|field| add_field(&mut table, field, options, path));
    path.pop();

    result.map(|()| table)
}

/// The trimmed value of a tag, treating missing, blank and `-` alike
fn tag_value(field: &FieldDef, key: &str) -> Option<&'static str> {
    field
        .tags
        .get(key)
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != "-")
}
