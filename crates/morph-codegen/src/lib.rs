// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DataEnum, DeriveInput, Fields, LitStr};

/// Options read from `#[morph(...)]` attributes.
#[derive(Default)]
struct MorphAttrs {
    /// `#[morph(name = "...")]`: explicit type identity.
    name: Option<LitStr>,
    /// `#[morph(default)]`: field falls back to `Default::default()`.
    default: bool,
}

fn parse_attrs(attrs: &[Attribute]) -> syn::Result<MorphAttrs> {
    let mut out = MorphAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("morph")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                out.name = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("default") {
                out.default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported morph attribute, expected `name` or `default`"))
            }
        })?;
    }
    Ok(out)
}

/// `#[derive(Mappable)]` macro: generates the descriptor and the dynamic
/// conversions for a struct or enum.
///
/// Supports:
/// - Structs with named fields (struct types). Every field type must be
///   `Mappable`; `#[morph(default)]` gives a field a default value.
/// - Unit structs (singletons).
/// - Enums (abstract types) whose variants are either unit variants
///   (singletons) or one-field tuple variants wrapping a `Mappable` type.
///   A variant wrapping another enum contributes that enum's variants.
///
/// The type identity defaults to `module_path!()::Ident` and can be set
/// with `#[morph(name = "...")]` on the type or on a unit variant.
///
/// Example:
/// ```ignore
/// use morph::Mappable;
///
/// #[derive(Mappable)]
/// struct Circle { radius: f64 }
///
/// #[derive(Mappable)]
/// struct Square { side: f64 }
///
/// #[derive(Mappable)]
/// enum Shape {
///     Circle(Circle),
///     Square(Square),
///     Empty,
/// }
/// ```
#[proc_macro_derive(Mappable, attributes(morph))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Mappable cannot be derived for generic types",
        ));
    }

    let attrs = parse_attrs(&input.attrs)?;
    let ident = &input.ident;
    let type_name = match &attrs.name {
        Some(name) => quote! { #name },
        None => quote! { ::std::concat!(::std::module_path!(), "::", ::std::stringify!(#ident)) },
    };

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => expand_struct(ident, &type_name, &fields.named),
            Fields::Unit => Ok(expand_unit(ident, &type_name)),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                "Only named-field and unit structs are supported",
            )),
        },
        Data::Enum(data) => expand_enum(input, &type_name, data),
        Data::Union(_) => Err(syn::Error::new_spanned(input, "Unions are not supported")),
    }
}

fn expand_struct(
    ident: &syn::Ident,
    type_name: &TokenStream2,
    fields: &syn::punctuated::Punctuated<syn::Field, syn::token::Comma>,
) -> syn::Result<TokenStream2> {
    let mut descriptors = Vec::new();
    let mut writes = Vec::new();
    let mut reads = Vec::new();

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let field_name = field_ident.to_string();
        let ty = &field.ty;
        let field_attrs = parse_attrs(&field.attrs)?;
        if field_attrs.name.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "`name` applies to types and unit variants, not fields",
            ));
        }

        if field_attrs.default {
            descriptors.push(quote! {
                ::morph::dynamic::FieldDescriptor::new(
                    #field_name,
                    <#ty as ::morph::Mappable>::descriptor(),
                )
                .with_default(::morph::Mappable::to_dynamic(
                    &<#ty as ::std::default::Default>::default(),
                ))
            });
            reads.push(quote! {
                #field_ident: ::morph::mappable::take_field_or(
                    &mut value,
                    #field_name,
                    <#ty as ::std::default::Default>::default,
                )?
            });
        } else {
            descriptors.push(quote! {
                ::morph::dynamic::FieldDescriptor::new(
                    #field_name,
                    <#ty as ::morph::Mappable>::descriptor(),
                )
            });
            reads.push(quote! {
                #field_ident: ::morph::mappable::take_field(&mut value, #field_name)?
            });
        }
        writes.push(quote! {
            .with_field(#field_name, ::morph::Mappable::to_dynamic(&self.#field_ident))
        });
    }

    Ok(quote! {
        impl ::morph::Mappable for #ident {
            fn descriptor() -> ::std::sync::Arc<::morph::dynamic::TypeDescriptor> {
                ::std::sync::Arc::new(::morph::dynamic::TypeDescriptor::struct_type(
                    #type_name,
                    ::std::vec![#(#descriptors),*],
                ))
            }

            fn to_dynamic(&self) -> ::morph::dynamic::DynamicValue {
                ::morph::dynamic::DynamicValue::Struct(
                    ::morph::dynamic::StructValue::new(#type_name)
                        #(#writes)*
                )
            }

            #[allow(unused_mut)]
            fn from_dynamic(
                value: ::morph::dynamic::DynamicValue,
            ) -> ::morph::Result<Self> {
                let mut value = ::morph::mappable::expect_struct(value, #type_name)?;
                ::std::result::Result::Ok(Self {
                    #(#reads),*
                })
            }
        }
    })
}

fn expand_unit(ident: &syn::Ident, type_name: &TokenStream2) -> TokenStream2 {
    quote! {
        impl ::morph::Mappable for #ident {
            fn descriptor() -> ::std::sync::Arc<::morph::dynamic::TypeDescriptor> {
                ::std::sync::Arc::new(::morph::dynamic::TypeDescriptor::singleton(#type_name))
            }

            fn to_dynamic(&self) -> ::morph::dynamic::DynamicValue {
                ::morph::dynamic::DynamicValue::Singleton(::std::string::String::from(#type_name))
            }

            fn from_dynamic(
                value: ::morph::dynamic::DynamicValue,
            ) -> ::morph::Result<Self> {
                ::morph::mappable::expect_singleton(value, #type_name)?;
                ::std::result::Result::Ok(Self)
            }
        }
    }
}

fn expand_enum(
    input: &DeriveInput,
    type_name: &TokenStream2,
    data: &DataEnum,
) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "Mappable enums need at least one variant",
        ));
    }

    let mut descriptors = Vec::new();
    let mut writes = Vec::new();
    let mut reads = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let variant_attrs = parse_attrs(&variant.attrs)?;
        if variant_attrs.default {
            return Err(syn::Error::new_spanned(
                variant,
                "`default` applies to struct fields only",
            ));
        }

        match &variant.fields {
            Fields::Unit => {
                let variant_name = match &variant_attrs.name {
                    Some(name) => quote! { #name },
                    None => quote! {
                        ::std::concat!(
                            ::std::module_path!(),
                            "::",
                            ::std::stringify!(#ident),
                            "::",
                            ::std::stringify!(#variant_ident)
                        )
                    },
                };
                descriptors.push(quote! {
                    ::std::sync::Arc::new(
                        ::morph::dynamic::TypeDescriptor::singleton(#variant_name),
                    )
                });
                writes.push(quote! {
                    Self::#variant_ident => ::morph::dynamic::DynamicValue::Singleton(
                        ::std::string::String::from(#variant_name),
                    )
                });
                reads.push(quote! {
                    if type_name == #variant_name {
                        return ::std::result::Result::Ok(Self::#variant_ident);
                    }
                });
            }
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                if variant_attrs.name.is_some() {
                    return Err(syn::Error::new_spanned(
                        variant,
                        "wrapped variants take the name of the wrapped type",
                    ));
                }
                let ty = &fields.unnamed[0].ty;
                descriptors.push(quote! { <#ty as ::morph::Mappable>::descriptor() });
                writes.push(quote! {
                    Self::#variant_ident(inner) => ::morph::Mappable::to_dynamic(inner)
                });
                reads.push(quote! {
                    if <#ty as ::morph::Mappable>::descriptor()
                        .concrete_for(&type_name)
                        .is_some()
                    {
                        return <#ty as ::morph::Mappable>::from_dynamic(value)
                            .map(Self::#variant_ident);
                    }
                });
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "enum variants must be unit variants or wrap exactly one Mappable type",
                ))
            }
        }
    }

    Ok(quote! {
        impl ::morph::Mappable for #ident {
            fn descriptor() -> ::std::sync::Arc<::morph::dynamic::TypeDescriptor> {
                ::std::sync::Arc::new(::morph::dynamic::TypeDescriptor::abstract_type(
                    #type_name,
                    ::std::vec![#(#descriptors),*],
                ))
            }

            fn to_dynamic(&self) -> ::morph::dynamic::DynamicValue {
                match self {
                    #(#writes),*
                }
            }

            fn from_dynamic(
                value: ::morph::dynamic::DynamicValue,
            ) -> ::morph::Result<Self> {
                let ::std::option::Option::Some(type_name) =
                    value.type_name().map(::std::string::ToString::to_string)
                else {
                    return ::std::result::Result::Err(
                        ::morph::mappable::unknown_variant(#type_name, &value),
                    );
                };
                #(#reads)*
                ::std::result::Result::Err(::morph::mappable::unknown_variant(#type_name, &value))
            }
        }
    })
}
