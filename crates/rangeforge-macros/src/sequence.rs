// #[derive(Sequence)] implementation

use proc_macro2::{Span, TokenStream, TokenTree};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericParam, Generics, Index, Lifetime,
    LifetimeParam, Member, Meta, Token, Type,
};

use crate::has_attribute;

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (member, field) = sequence_field(&input)?;
    let field_ty = &field.ty;
    let capabilities = Capabilities::of(field, &input.generics)?;

    // Generics with an extra lifetime for the borrowed impl.
    let lifetime = Lifetime::new("'__rangeforge", Span::call_site());
    let mut borrowed = input.generics.clone();
    borrowed
        .params
        .insert(0, GenericParam::Lifetime(LifetimeParam::new(lifetime.clone())));
    let (borrowed_impl_generics, _, _) = borrowed.split_for_impl();

    let where_predicates = where_clause.map(|w| &w.predicates);

    let shared_impl = quote! {
        impl #borrowed_impl_generics ::rangeforge::cursor::Sequence for &#lifetime #name #ty_generics
        where
            &#lifetime #field_ty: ::rangeforge::cursor::Sequence,
            #where_predicates
        {
            type Cursor = <&#lifetime #field_ty as ::rangeforge::cursor::Sequence>::Cursor;
            type Sentinel = <&#lifetime #field_ty as ::rangeforge::cursor::Sequence>::Sentinel;

            #[inline]
            fn into_bounds(self) -> (Self::Cursor, Self::Sentinel) {
                ::rangeforge::cursor::Sequence::into_bounds(&self.#member)
            }
        }
    };

    // `&mut Self` becomes a sequence through the blanket impl over containers.
    let container_impl = quote! {
        impl #impl_generics ::rangeforge::cursor::Container for #name #ty_generics
        where
            #field_ty: ::rangeforge::cursor::Container,
            #where_predicates
        {
            type Element = <#field_ty as ::rangeforge::cursor::Container>::Element;
            type Cursor<#lifetime> = <#field_ty as ::rangeforge::cursor::Container>::Cursor<#lifetime>
            where
                Self: #lifetime;
            type End<#lifetime> = <#field_ty as ::rangeforge::cursor::Container>::End<#lifetime>
            where
                Self: #lifetime;

            #[inline]
            fn bounds_mut(&mut self) -> (Self::Cursor<'_>, Self::End<'_>) {
                ::rangeforge::cursor::Container::bounds_mut(&mut self.#member)
            }
        }
    };

    let forward_impl = if capabilities.forward {
        quote! {
            impl #impl_generics ::rangeforge::cursor::ForwardContainer for #name #ty_generics
            where
                #field_ty: ::rangeforge::cursor::ForwardContainer,
                #where_predicates
            {
                type ForwardCursor<#lifetime> =
                    <#field_ty as ::rangeforge::cursor::ForwardContainer>::ForwardCursor<#lifetime>
                where
                    Self: #lifetime;

                #[inline]
                fn forward_bounds(&mut self) -> (Self::ForwardCursor<'_>, Self::ForwardCursor<'_>) {
                    ::rangeforge::cursor::ForwardContainer::forward_bounds(&mut self.#member)
                }
            }
        }
    } else {
        TokenStream::new()
    };

    let permutable_impl = if capabilities.permutable {
        quote! {
            impl #impl_generics ::rangeforge::cursor::PermutableContainer for #name #ty_generics
            where
                #field_ty: ::rangeforge::cursor::PermutableContainer,
                #where_predicates
            {
                type PermutableCursor<#lifetime> =
                    <#field_ty as ::rangeforge::cursor::PermutableContainer>::PermutableCursor<#lifetime>
                where
                    Self: #lifetime;

                #[inline]
                fn permutable_bounds(
                    &mut self,
                ) -> (Self::PermutableCursor<'_>, Self::PermutableCursor<'_>) {
                    ::rangeforge::cursor::PermutableContainer::permutable_bounds(&mut self.#member)
                }
            }
        }
    } else {
        TokenStream::new()
    };

    let writable_impl = if capabilities.writable {
        quote! {
            impl #impl_generics ::rangeforge::cursor::WritableContainer for #name #ty_generics
            where
                #field_ty: ::rangeforge::cursor::WritableContainer,
                #where_predicates
            {
                type WritableCursor<#lifetime> =
                    <#field_ty as ::rangeforge::cursor::WritableContainer>::WritableCursor<#lifetime>
                where
                    Self: #lifetime;
                type WritableEnd<#lifetime> =
                    <#field_ty as ::rangeforge::cursor::WritableContainer>::WritableEnd<#lifetime>
                where
                    Self: #lifetime;

                #[inline]
                fn writable_bounds(&mut self) -> (Self::WritableCursor<'_>, Self::WritableEnd<'_>) {
                    ::rangeforge::cursor::WritableContainer::writable_bounds(&mut self.#member)
                }
            }
        }
    } else {
        TokenStream::new()
    };

    let truncate_impl = if is_vec(field_ty) {
        quote! {
            impl #impl_generics ::rangeforge::cursor::Truncate for #name #ty_generics #where_clause {
                #[inline]
                fn truncate(&mut self, len: usize) {
                    ::rangeforge::cursor::Truncate::truncate(&mut self.#member, len)
                }
            }
        }
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        #shared_impl
        #container_impl
        #forward_impl
        #permutable_impl
        #writable_impl
        #truncate_impl
    })
}

/// Capability impls to emit beyond `Container`.
///
/// A bound on a concrete field type that does not hold is rejected by the
/// compiler, so capabilities are only emitted when they are known to hold
/// (vectors and arrays), when the bound still depends on a type parameter,
/// or when listed in `#[sequence(forward, permutable, writable)]`.
#[derive(Debug, Default, PartialEq)]
struct Capabilities {
    forward: bool,
    permutable: bool,
    writable: bool,
}

impl Capabilities {
    const ALL: Self = Self {
        forward: true,
        permutable: true,
        writable: true,
    };

    fn of(field: &Field, generics: &Generics) -> Result<Self, Error> {
        let contiguous = is_vec(&field.ty) || matches!(field.ty, Type::Array(_));
        if contiguous || mentions_type_param(&field.ty, generics) {
            return Ok(Self::ALL);
        }

        let mut capabilities = Self::default();
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("sequence")) {
            let Meta::List(list) = &attr.meta else {
                continue;
            };
            let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
            for meta in parser.parse2(list.tokens.clone())? {
                match meta {
                    Meta::Path(path) if path.is_ident("forward") => capabilities.forward = true,
                    Meta::Path(path) if path.is_ident("permutable") => {
                        capabilities.forward = true;
                        capabilities.permutable = true;
                    }
                    Meta::Path(path) if path.is_ident("writable") => capabilities.writable = true,
                    other => {
                        return Err(Error::new_spanned(
                            other,
                            "expected `forward`, `permutable` or `writable`",
                        ))
                    }
                }
            }
        }
        Ok(capabilities)
    }
}

fn mentions_type_param(ty: &Type, generics: &Generics) -> bool {
    let params: Vec<_> = generics.type_params().map(|param| &param.ident).collect();
    !params.is_empty() && tokens_mention(quote!(#ty), &params)
}

fn tokens_mention(tokens: TokenStream, idents: &[&syn::Ident]) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => idents.iter().any(|param| **param == ident),
        TokenTree::Group(group) => tokens_mention(group.stream(), idents),
        _ => false,
    })
}

fn sequence_field(input: &DeriveInput) -> Result<(Member, &Field), Error> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(Error::new_spanned(
                input,
                "#[derive(Sequence)] only works on structs",
            ))
        }
    };

    let marked: Vec<(usize, &Field)> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| has_attribute(&f.attrs, "sequence"))
        .collect();

    let (index, field) = match (marked.as_slice(), fields.len()) {
        ([(index, field)], _) => (*index, *field),
        ([], 1) => match fields.iter().next() {
            Some(field) => (0, field),
            None => return Err(Error::new_spanned(input, "expected a field")),
        },
        ([], _) => {
            return Err(Error::new_spanned(
                input,
                "#[derive(Sequence)] requires a single field or one field marked #[sequence]",
            ))
        }
        (_, _) => {
            return Err(Error::new_spanned(
                input,
                "only one field may be marked #[sequence]",
            ))
        }
    };

    let member = match (&field.ident, fields) {
        (Some(ident), Fields::Named(_)) => Member::Named(ident.clone()),
        _ => Member::Unnamed(Index::from(index)),
    };
    Ok((member, field))
}

fn is_vec(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Vec"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn capabilities_of(input: DeriveInput) -> Capabilities {
        let (_, field) = sequence_field(&input).unwrap();
        Capabilities::of(field, &input.generics).unwrap()
    }

    #[test]
    fn test_vec_and_array_fields_get_every_capability() {
        assert_eq!(capabilities_of(parse_quote!(struct A(Vec<u8>);)), Capabilities::ALL);
        assert_eq!(capabilities_of(parse_quote!(struct A([u8; 4]);)), Capabilities::ALL);
    }

    #[test]
    fn test_generic_field_gets_every_capability() {
        let input: DeriveInput = parse_quote!(struct A<C> { #[sequence] items: Wrapper<C>, n: usize });
        assert_eq!(capabilities_of(input), Capabilities::ALL);
    }

    #[test]
    fn test_concrete_field_lists_its_capabilities() {
        assert_eq!(capabilities_of(parse_quote!(struct A(Frozen);)), Capabilities::default());

        let input: DeriveInput = parse_quote!(struct A(#[sequence(permutable)] Custom););
        let capabilities = capabilities_of(input);
        assert!(capabilities.forward && capabilities.permutable && !capabilities.writable);
    }

    #[test]
    fn test_unknown_capability_is_rejected() {
        let input: DeriveInput = parse_quote!(struct A(#[sequence(sorted)] Custom););
        let (_, field) = sequence_field(&input).unwrap();
        let err = Capabilities::of(field, &input.generics).unwrap_err();
        assert!(err.to_string().contains("expected `forward`"));
    }

    #[test]
    fn test_no_exclusive_sequence_impl_is_emitted() {
        let tokens = expand_derive(parse_quote!(struct Scores(Vec<u32>);)).unwrap().to_string();
        assert!(tokens.contains("Container for Scores"));
        assert!(tokens.contains("PermutableContainer for Scores"));
        assert!(!tokens.contains("mut Scores"));
    }
}
