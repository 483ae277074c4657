//! Type helper utilities for syn type analysis.

/// Extract the inner type of a pointer-like wrapper.
///
/// Recognizes `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>` (with or without a
/// path prefix) and references `&T` / `&mut T`.
pub fn pointer_inner(ty: &syn::Type) -> Option<&syn::Type> {
    match ty {
        syn::Type::Reference(reference) => Some(&reference.elem),
        syn::Type::Paren(paren) => pointer_inner(&paren.elem),
        syn::Type::Path(_) => ["Option", "Box", "Rc", "Arc"]
            .iter()
            .find_map(|wrapper| generic_inner(ty, wrapper)),
        _ => None,
    }
}

/// Extract the inner type T from Vec<T> or [T]
pub fn sequence_inner(ty: &syn::Type) -> Option<&syn::Type> {
    match ty {
        syn::Type::Slice(slice) => Some(&slice.elem),
        syn::Type::Array(array) => Some(&array.elem),
        _ => generic_inner(ty, "Vec"),
    }
}

/// Extract `T` from `Name<T>`
fn generic_inner<'a>(ty: &'a syn::Type, name: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != name {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    let syn::GenericArgument::Type(inner) = args.args.first()? else {
        return None;
    };
    Some(inner)
}

/// Render a type the way it is usually written, `Option<String>` rather
/// than the token stream's `Option < String >`.
pub fn type_text(ty: &syn::Type) -> String {
    let raw = quote::quote!(#ty).to_string();
    let chars: Vec<char> = raw.chars().collect();
    let word = |c: Option<&char>| c.is_some_and(|c| c.is_alphanumeric() || *c == '_');

    let mut text = String::with_capacity(raw.len());
    for (i, c) in chars.iter().enumerate() {
        if *c == ' ' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            if !(word(before) && word(chars.get(i + 1))) {
                continue;
            }
        }
        text.push(*c);
    }
    text
}
