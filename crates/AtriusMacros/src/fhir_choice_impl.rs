use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Meta, Token, Type};

use crate::type_helpers::get_box_inner_type;

struct ChoiceVariant<'a> {
    ident: &'a Ident,
    /// Member type with any `Box` removed.
    value: &'a Type,
    boxed: bool,
    reference: bool,
}

impl ChoiceVariant<'_> {
    /// Expression borrowing the member as `&T` inside a `Self::Variant(value)` arm.
    fn member(&self) -> TokenStream {
        if self.boxed {
            quote! { &**value }
        } else {
            quote! { value }
        }
    }
}

/// Reads `#[fhir_choice(reference)]`, which marks the member holding a `Reference`.
fn is_reference_variant(variant: &syn::Variant) -> syn::Result<bool> {
    let mut reference = false;
    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("fhir_choice")) {
        let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in metas {
            match &meta {
                Meta::Path(path) if path.is_ident("reference") => reference = true,
                _ => return Err(syn::Error::new(meta.span(), "unsupported fhir_choice key")),
            }
        }
    }
    Ok(reference)
}

fn analyse_variants(input: &DeriveInput) -> syn::Result<Vec<ChoiceVariant<'_>>> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(input.span(), "FhirChoice only supports enums"));
    };
    let mut out = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let Fields::Unnamed(fields) = &variant.fields else {
            return Err(syn::Error::new(variant.span(), "FhirChoice variants must wrap exactly one type"));
        };
        let Some(field) = fields.unnamed.first().filter(|_| fields.unnamed.len() == 1) else {
            return Err(syn::Error::new(variant.span(), "FhirChoice variants must wrap exactly one type"));
        };
        let (value, boxed) = match get_box_inner_type(&field.ty) {
            Some(inner) => (inner, true),
            None => (&field.ty, false),
        };
        out.push(ChoiceVariant {
            ident: &variant.ident,
            value,
            boxed,
            reference: is_reference_variant(variant)?,
        });
    }
    if out.len() < 2 {
        return Err(syn::Error::new(input.span(), "FhirChoice needs at least two members"));
    }
    Ok(out)
}

pub(crate) fn generate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let variants = analyse_variants(input)?;

    let type_names = variants.iter().map(|v| {
        let ident = v.ident;
        let value = v.value;
        quote! { Self::#ident(_) => <#value as atrius_model_support::TypeInfo>::type_name() }
    });

    let accessors = variants.iter().map(|v| {
        let ident = v.ident;
        let value = v.value;
        let snake = ident.to_string().to_snake_case();
        let as_fn = format_ident!("as_{}", snake);
        let is_fn = format_ident!("is_{}", snake);
        let as_doc = format!("Returns the member if this holds a `{}`.", ident);
        let member = v.member();
        quote! {
            #[doc = #as_doc]
            pub fn #as_fn(&self) -> Option<&#value> {
                match self {
                    Self::#ident(value) => Some(#member),
                    _ => None,
                }
            }

            pub fn #is_fn(&self) -> bool {
                matches!(self, Self::#ident(_))
            }
        }
    });

    let from_impls = variants.iter().map(|v| {
        let ident = v.ident;
        let value = v.value;
        let wrap = if v.boxed {
            quote! { Self::#ident(Box::new(value)) }
        } else {
            quote! { Self::#ident(value) }
        };
        quote! {
            impl From<#value> for #name {
                fn from(value: #value) -> Self {
                    #wrap
                }
            }
        }
    });

    let as_reference = match variants.iter().find(|v| v.reference) {
        Some(v) => {
            let ident = v.ident;
            let member = v.member();
            quote! {
                fn as_reference(&self) -> Option<&dyn atrius_model_support::ReferenceLike> {
                    match self {
                        Self::#ident(value) => Some(#member as &dyn atrius_model_support::ReferenceLike),
                        _ => None,
                    }
                }
            }
        }
        None => quote! {},
    };

    let as_nodes = variants.iter().map(|v| {
        let ident = v.ident;
        let member = v.member();
        quote! { Self::#ident(value) => crate::visitor::Visitable::as_node(#member) }
    });
    let children = variants.iter().map(|v| {
        let ident = v.ident;
        let member = v.member();
        quote! { Self::#ident(value) => crate::visitor::Visitable::accept_children(#member, visitor) }
    });

    Ok(quote! {
        impl #name {
            /// FHIR type name of the populated member.
            pub fn type_name(&self) -> &'static str {
                match self {
                    #(#type_names,)*
                }
            }

            #(#accessors)*
        }

        #(#from_impls)*

        impl atrius_model_support::ChoiceType for #name {
            fn type_name(&self) -> &'static str {
                #name::type_name(self)
            }

            #as_reference
        }

        impl crate::visitor::Visitable for #name {
            fn as_node(&self) -> crate::visitor::ModelNode<'_> {
                match self {
                    #(#as_nodes,)*
                }
            }

            fn accept_children<V: crate::visitor::Visitor + ?Sized>(&self, visitor: &mut V) {
                match self {
                    #(#children,)*
                }
            }
        }
    })
}
