//! Static descriptions of struct layouts
//!
//! A [`StructDef`] lists the fields of a struct in declaration order, each with
//! a [`TypeDef`] describing its shape and the [`Tags`] attached to it. The
//! resolver walks these descriptions to find the table name, the columns and
//! the primary key. Descriptions are usually generated with
//! `#[derive(Schema)]` but can be written by hand.

use std::any::type_name;

/// Types that can describe their own field layout
///
/// # Examples
/// ```
/// use tabula_core::{FieldDef, Schema, StructDef, TypeDef};
///
/// struct User {
///     id: i64,
///     email: String,
/// }
///
/// impl Schema for User {
///     fn schema() -> StructDef {
///         StructDef::of::<Self>("User")
///             .field(FieldDef::new("id", TypeDef::scalar("i64")).tag("db", "id,pkey"))
///             .field(FieldDef::new("email", TypeDef::scalar("String")).tag("db", "email"))
///     }
/// }
///
/// assert_eq!(User::schema().fields().len(), 2);
/// ```
pub trait Schema {
    /// Describe the fields of this type
    fn schema() -> StructDef;
}

/// The shape of a field's declared type
#[derive(Debug, Clone)]
pub enum TypeDef {
    /// Anything that is not a struct, a pointer or a sequence
    Scalar(&'static str),
    /// A struct that describes itself. Kept as a function so that
    /// self-referential types can be described without infinite expansion.
    Struct(fn() -> StructDef),
    /// `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>` or `&T`
    Pointer(Box<TypeDef>),
    /// `Vec<T>` or `[T]`
    Sequence(Box<TypeDef>),
}

impl TypeDef {
    /// Describe a struct type
    pub fn of<T: Schema>() -> Self {
        TypeDef::Struct(T::schema)
    }

    /// Describe a non-struct type by name
    pub fn scalar(name: &'static str) -> Self {
        TypeDef::Scalar(name)
    }

    /// Wrap a type in a pointer layer
    pub fn pointer(inner: TypeDef) -> Self {
        TypeDef::Pointer(Box::new(inner))
    }

    /// Wrap a type in a sequence layer
    pub fn sequence(inner: TypeDef) -> Self {
        TypeDef::Sequence(Box::new(inner))
    }

    /// The struct this type is or points to, looking through any number of
    /// pointer layers. Sequences never resolve to a struct.
    pub fn as_struct(&self) -> Option<StructDef> {
        match self {
            TypeDef::Struct(schema) => Some(schema()),
            TypeDef::Pointer(inner) => inner.as_struct(),
            TypeDef::Scalar(_) | TypeDef::Sequence(_) => None,
        }
    }

    /// A human readable name, used in error messages
    pub fn type_name(&self) -> String {
        match self {
            TypeDef::Scalar(name) => name.to_string(),
            TypeDef::Struct(schema) => schema().name().to_string(),
            TypeDef::Pointer(inner) => format!("*{}", inner.type_name()),
            TypeDef::Sequence(inner) => format!("[]{}", inner.type_name()),
        }
    }
}

/// Key/value annotations attached to a field, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<(&'static str, &'static str)>);

impl Tags {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. A repeated key is kept but never returned by [`Tags::get`].
    pub fn insert(&mut self, key: &'static str, value: &'static str) {
        self.0.push((key, value));
    }

    /// The value of the first tag with the given key
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// All tags in declaration order, repeated keys included
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().copied()
    }

    /// Whether no tags were attached
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(&'static str, &'static str)> for Tags {
    fn from_iter<I: IntoIterator<Item = (&'static str, &'static str)>>(iter: I) -> Self {
        Tags(iter.into_iter().collect())
    }
}

/// One declared field of a struct
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: TypeDef,
    pub tags: Tags,
}

impl FieldDef {
    /// Create an untagged field
    pub fn new(name: &'static str, ty: TypeDef) -> Self {
        Self {
            name,
            ty,
            tags: Tags::new(),
        }
    }

    /// Attach a tag to the field
    pub fn tag(mut self, key: &'static str, value: &'static str) -> Self {
        self.tags.insert(key, value);
        self
    }
}

/// The field layout of a struct
#[derive(Debug, Clone)]
pub struct StructDef {
    name: &'static str,
    path: &'static str,
    fields: Vec<FieldDef>,
}

impl StructDef {
    /// Create a description whose identity is its name.
    ///
    /// Prefer [`StructDef::of`] when a Rust type exists, two hand-written
    /// descriptions sharing a name are otherwise treated as the same struct.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            path: name,
            fields: Vec::new(),
        }
    }

    /// Create a description for `T`, identified by its full type path
    pub fn of<T: ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            path: type_name::<T>(),
            fields: Vec::new(),
        }
    }

    /// Append a field
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// The short type name, used to derive a table name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The identity of the struct
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// The fields in declaration order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Audit;

    impl Schema for Audit {
        fn schema() -> StructDef {
            StructDef::of::<Self>("Audit")
                .field(FieldDef::new("created_at", TypeDef::scalar("DateTime")).tag("db", "created_at"))
        }
    }

    #[test]
    fn test_tags_first_key_wins() {
        let tags: Tags = [("db", "id"), ("db", "other"), ("dbtable", "users")]
            .into_iter()
            .collect();
        assert_eq!(tags.get("db"), Some("id"));
        assert_eq!(tags.get("dbtable"), Some("users"));
        assert_eq!(tags.get("col"), None);
    }

    #[test]
    fn test_tags_iterate_in_declaration_order() {
        assert!(Tags::new().is_empty());
        let field = FieldDef::new("id", TypeDef::scalar("i64"))
            .tag("dbtable", "users")
            .tag("db", "id");
        assert!(!field.tags.is_empty());
        assert_eq!(
            field.tags.iter().collect::<Vec<_>>(),
            vec![("dbtable", "users"), ("db", "id")]
        );
    }

    #[test]
    fn test_as_struct_through_pointers() {
        let ty = TypeDef::pointer(TypeDef::pointer(TypeDef::of::<Audit>()));
        let def = ty.as_struct().unwrap();
        assert_eq!(def.name(), "Audit");
        assert_eq!(def.fields().len(), 1);
    }

    #[test]
    fn test_scalars_and_sequences_are_not_structs() {
        assert!(TypeDef::scalar("String").as_struct().is_none());
        assert!(TypeDef::sequence(TypeDef::of::<Audit>()).as_struct().is_none());
        assert!(TypeDef::pointer(TypeDef::scalar("String")).as_struct().is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(TypeDef::scalar("&str").type_name(), "&str");
        assert_eq!(TypeDef::pointer(TypeDef::scalar("String")).type_name(), "*String");
        assert_eq!(TypeDef::sequence(TypeDef::scalar("u8")).type_name(), "[]u8");
        assert_eq!(TypeDef::of::<Audit>().type_name(), "Audit");
    }

    #[test]
    fn test_struct_identity() {
        assert!(Audit::schema().path().ends_with("Audit"));
        assert_eq!(StructDef::new("Audit").path(), "Audit");
    }
}
