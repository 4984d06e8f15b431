//! Implementation of the `#[derive(Element)]` macro.
//!
//! This module generates an `eqset::Element` implementation that compares
//! values field by field with `Element::equal`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, parse_quote, Data, DataEnum, DeriveInput, Fields, GenericParam, Generics,
    Ident, Index, Variant,
};

/// Main implementation of the Element derive macro.
pub fn derive_element_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_element(&input))
}

/// Expands a parsed item into its `Element` implementation.
fn expand_element(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(data_struct) => generate_struct_body(&data_struct.fields),
        Data::Enum(data_enum) => generate_enum_body(data_enum),
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Element cannot be derived for unions.")
                .to_compile_error();
        }
    };

    let generics = add_element_bounds(&input.generics);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::eqset::Element for #name #type_generics #where_clause {
            fn equal(&self, other: &Self) -> bool {
                #body
            }
        }
    }
}

/// Adds an `Element` bound to every type parameter.
fn add_element_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    for parameter in &mut generics.params {
        if let GenericParam::Type(type_parameter) = parameter {
            type_parameter.bounds.push(parse_quote!(::eqset::Element));
        }
    }
    generics
}

/// Joins field comparisons with `&&`. No fields means always equal.
fn conjunction(comparisons: &[TokenStream2]) -> TokenStream2 {
    quote! { #(#comparisons &&)* true }
}

fn generate_struct_body(fields: &Fields) -> TokenStream2 {
    let comparisons: Vec<TokenStream2> = match fields {
        Fields::Named(named_fields) => named_fields
            .named
            .iter()
            .map(|field| {
                let field_name = field.ident.as_ref().expect("Named field must have ident");
                quote! { ::eqset::Element::equal(&self.#field_name, &other.#field_name) }
            })
            .collect(),
        Fields::Unnamed(unnamed_fields) => (0..unnamed_fields.unnamed.len())
            .map(|position| {
                let index = Index::from(position);
                quote! { ::eqset::Element::equal(&self.#index, &other.#index) }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    conjunction(&comparisons)
}

fn generate_enum_body(data_enum: &DataEnum) -> TokenStream2 {
    if data_enum.variants.is_empty() {
        return quote! { match *self {} };
    }

    let arms: Vec<TokenStream2> = data_enum.variants.iter().map(generate_variant_arm).collect();

    quote! {
        match (self, other) {
            #(#arms)*
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }
}

/// Generates the match arm pairing a variant with itself.
fn generate_variant_arm(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let (left, right) = binding_names(variant.fields.len());
    let comparisons: Vec<TokenStream2> = left
        .iter()
        .zip(&right)
        .map(|(left, right)| quote! { ::eqset::Element::equal(#left, #right) })
        .collect();
    let body = conjunction(&comparisons);

    match &variant.fields {
        Fields::Unit => quote! {
            (Self::#variant_name, Self::#variant_name) => true,
        },
        Fields::Unnamed(_) => quote! {
            (Self::#variant_name(#(#left),*), Self::#variant_name(#(#right),*)) => #body,
        },
        Fields::Named(named_fields) => {
            let field_names: Vec<&Ident> = named_fields
                .named
                .iter()
                .map(|field| field.ident.as_ref().expect("Named field must have ident"))
                .collect();
            quote! {
                (
                    Self::#variant_name { #(#field_names: #left),* },
                    Self::#variant_name { #(#field_names: #right),* },
                ) => #body,
            }
        }
    }
}

fn binding_names(count: usize) -> (Vec<Ident>, Vec<Ident>) {
    (0..count)
        .map(|position| {
            (
                format_ident!("left_{}", position),
                format_ident!("right_{}", position),
            )
        })
        .unzip()
}
