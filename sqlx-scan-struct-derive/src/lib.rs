//! Derive macro for `sqlx_scan_struct::ScanStruct`.
//!
//! Generates the field-name table and the disjoint field borrows the binder
//! needs, so no runtime reflection is involved.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Type,
};

/// Field settings read from `#[scan(...)]`.
#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
    nullable: bool,
}

impl FieldAttrs {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut attrs = FieldAttrs::default();
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("scan")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    attrs.rename = Some(name.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    Ok(())
                } else if meta.path.is_ident("nullable") {
                    attrs.nullable = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported scan attribute, expected `rename = \"...\"`, `skip` or `nullable`",
                    ))
                }
            })?;
        }
        Ok(attrs)
    }
}

/// Whether `ty` is spelled `Option<..>` (or `std::option::Option<..>`).
fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        Type::Group(group) => is_option(&group.elem),
        Type::Paren(paren) => is_option(&paren.elem),
        _ => false,
    }
}

#[proc_macro_derive(ScanStruct, attributes(scan))]
pub fn derive_scan_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new_spanned(
                    ident,
                    "ScanStruct can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                ident,
                "ScanStruct can only be derived for structs",
            ))
        }
    };

    let cursor = Ident::new("__C", Span::call_site());

    let mut names = Vec::new();
    let mut idents = Vec::new();
    let mut types = Vec::new();
    let mut nullable = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::parse(field)?;
        if attrs.skip {
            continue;
        }
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        names.push(
            attrs
                .rename
                .unwrap_or_else(|| field_ident.unraw().to_string()),
        );
        nullable.push(attrs.nullable || is_option(&field.ty));
        idents.push(field_ident);
        types.push(&field.ty);
    }

    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for ty in &types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::sqlx_scan_struct::Target<#cursor>));
        }
    }
    let (_, ty_generics, where_clause) = generics.split_for_impl();

    let mut impl_generics = input.generics.clone();
    impl_generics.params.push(parse_quote!(#cursor: ?Sized));
    let (impl_generics, _, _) = impl_generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::sqlx_scan_struct::ScanStruct<#cursor> for #ident #ty_generics
        #where_clause
        {
            const FIELDS: &'static [&'static str] = &[#(#names),*];
            const NULLABLE: &'static [bool] = &[#(#nullable),*];

            #[allow(non_snake_case)]
            fn targets(&mut self) -> ::std::vec::Vec<&mut dyn ::sqlx_scan_struct::Target<#cursor>> {
                let Self { #(#idents,)* .. } = self;
                ::std::vec![#(#idents as &mut dyn ::sqlx_scan_struct::Target<#cursor>),*]
            }
        }
    })
}
