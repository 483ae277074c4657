//! Schema derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Result};

use crate::attrs::parse_field_attrs;
use crate::types::{pointer_inner, sequence_inner, type_text};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.unraw().to_string();

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Schema can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Schema can only be derived for structs",
            ));
        }
    };

    let mut generics = input.generics.clone();
    let mut field_defs = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let field_name = ident.unraw().to_string();
        let attrs = parse_field_attrs(field)?;

        let ty = if attrs.embed {
            if let Some(param) = generic_param(&input.generics, &field.ty) {
                generics
                    .make_where_clause()
                    .predicates
                    .push(syn::parse_quote!(#param: ::tabula_core::Schema));
            }
            embedded_type(&field.ty)
        } else {
            plain_type(&field.ty)
        };
        let tags = attrs.tags.iter().map(|(key, value)| quote!(.tag(#key, #value)));

        field_defs.push(quote! {
            .field(::tabula_core::FieldDef::new(#field_name, #ty) #(#tags)*)
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tabula_core::Schema for #name #ty_generics #where_clause {
            fn schema() -> ::tabula_core::StructDef {
                ::tabula_core::StructDef::of::<Self>(#type_name)
                    #(#field_defs)*
            }
        }
    })
}

/// A nested struct, with one pointer layer per wrapper around it
fn embedded_type(ty: &syn::Type) -> TokenStream {
    match pointer_inner(ty) {
        Some(inner) => {
            let inner = embedded_type(inner);
            quote!(::tabula_core::TypeDef::pointer(#inner))
        }
        None => quote!(::tabula_core::TypeDef::of::<#ty>()),
    }
}

/// The type parameter an embedded field resolves to once wrappers are peeled
fn generic_param<'a>(generics: &'a syn::Generics, mut ty: &syn::Type) -> Option<&'a syn::Ident> {
    while let Some(inner) = pointer_inner(ty) {
        ty = inner;
    }
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let ident = type_path.path.get_ident()?;
    generics
        .type_params()
        .map(|param| &param.ident)
        .find(|param| *param == ident)
}

fn plain_type(ty: &syn::Type) -> TokenStream {
    match sequence_inner(ty) {
        Some(inner) => {
            let text = type_text(inner);
            quote!(::tabula_core::TypeDef::sequence(::tabula_core::TypeDef::scalar(#text)))
        }
        None => {
            let text = type_text(ty);
            quote!(::tabula_core::TypeDef::scalar(#text))
        }
    }
}
