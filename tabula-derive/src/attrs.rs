//! Field attribute parsing

use syn::{Field, LitStr, Result};

/// Attributes of one field
#[derive(Default)]
pub struct FieldAttrs {
    /// `#[tag(key = "value")]` pairs in declaration order
    pub tags: Vec<(String, String)>,
    /// `#[schema(embed)]`
    pub embed: bool,
}

pub fn parse_field_attrs(field: &Field) -> Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();

    for attr in &field.attrs {
        if attr.path().is_ident("tag") {
            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(|ident| ident.to_string())
                    .ok_or_else(|| meta.error("tag keys must be plain identifiers"))?;
                let value: LitStr = meta.value()?.parse()?;
                attrs.tags.push((key, value.value()));
                Ok(())
            })?;
        } else if attr.path().is_ident("schema") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("embed") {
                    attrs.embed = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown schema attribute, expected `embed`"))
                }
            })?;
        }
    }

    Ok(attrs)
}
