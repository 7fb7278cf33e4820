use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use atrius_model_support::ModelKind;

use crate::field_helpers::{get_effective_field_name, parse_field_attrs, parse_model_attrs, FieldAttrs};
use crate::type_helpers::{field_shape, FieldShape};

/// One analysed struct field.
struct ModelField<'a> {
    ident: &'a Ident,
    /// FHIR element name.
    name: LitStr,
    attrs: FieldAttrs,
    shape: FieldShape<'a>,
}

impl ModelField<'_> {
    fn is_list(&self) -> bool {
        matches!(self.shape, FieldShape::List { .. })
    }

    fn value_type(&self) -> &Type {
        match &self.shape {
            FieldShape::Single { value, .. } | FieldShape::List { value } => value,
        }
    }

    fn is_boxed(&self) -> bool {
        matches!(self.shape, FieldShape::Single { boxed: true, .. })
    }
}

fn kind_tokens(kind: ModelKind) -> TokenStream {
    match kind {
        ModelKind::Resource => quote! { atrius_model_support::ModelKind::Resource },
        ModelKind::Backbone => quote! { atrius_model_support::ModelKind::Backbone },
        ModelKind::Datatype => quote! { atrius_model_support::ModelKind::Datatype },
        ModelKind::Primitive => quote! { atrius_model_support::ModelKind::Primitive },
    }
}

fn analyse_fields(input: &DeriveInput) -> syn::Result<Vec<ModelField<'_>>> {
    let Data::Struct(ds) = &input.data else {
        return Err(syn::Error::new(input.span(), "FhirModel only supports structs"));
    };
    let Fields::Named(fields) = &ds.fields else {
        return Err(syn::Error::new(input.span(), "FhirModel requires named fields"));
    };

    let mut out = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };
        let attrs = parse_field_attrs(field)?;
        let shape = field_shape(&field.ty).ok_or_else(|| {
            syn::Error::new(field.ty.span(), "model fields must be Option<T>, Option<Box<T>> or Vec<T>")
        })?;
        if attrs.attribute && !matches!(shape, FieldShape::Single { boxed: false, .. }) {
            return Err(syn::Error::new(field.span(), "attribute fields must be Option<String>"));
        }
        if attrs.is_choice() && !matches!(shape, FieldShape::Single { boxed: false, .. }) {
            return Err(syn::Error::new(field.span(), "choice fields must be Option<ChoiceValue>"));
        }
        let name = LitStr::new(&get_effective_field_name(ident, &attrs), ident.span());
        out.push(ModelField {
            ident,
            name,
            attrs,
            shape,
        });
    }
    Ok(out)
}

pub(crate) fn generate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let model = parse_model_attrs(input)?;
    let fields = analyse_fields(input)?;

    let name = &input.ident;
    let builder = format_ident!("{}Builder", name);
    let type_name = LitStr::new(&model.name, name.span());
    let kind = kind_tokens(model.kind);

    let builder_fields = fields.iter().map(builder_field);
    let builder_defaults = fields.iter().map(|f| {
        let ident = f.ident;
        quote! { #ident: Default::default() }
    });
    let setters = fields.iter().map(setter);
    let getters = fields.iter().map(getter);
    let to_builder_fields = fields.iter().map(|f| {
        let ident = f.ident;
        if f.is_list() {
            quote! { #ident: self.#ident.iter().cloned().map(Some).collect() }
        } else {
            quote! { #ident: self.#ident.clone() }
        }
    });
    let staged_checks = fields.iter().map(staged_check);
    let freeze = fields.iter().map(|f| {
        let ident = f.ident;
        if f.is_list() {
            quote! { #ident: self.#ident.into_iter().flatten().collect() }
        } else {
            quote! { #ident: self.#ident }
        }
    });
    let reference_checks = fields.iter().filter(|f| f.attrs.is_reference()).map(reference_check);
    let ele_1 = if model.kind.requires_value_or_children() {
        quote! { atrius_model_support::validate::require_value_or_children(&built, OWNER)?; }
    } else {
        quote! {}
    };
    let children = fields.iter().filter(|f| !f.attrs.attribute).map(|f| {
        let ident = f.ident;
        if f.is_list() {
            quote! { !self.#ident.is_empty() }
        } else {
            quote! { self.#ident.is_some() }
        }
    });
    let element_infos = fields.iter().map(|f| element_info(f, &type_name));
    let visits = fields.iter().map(visit_field);

    let type_doc = format!("Builder for [`{}`].", name);

    Ok(quote! {
        #[doc = #type_doc]
        #[derive(Debug, Clone)]
        pub struct #builder {
            validating: bool,
            #(#builder_fields,)*
        }

        impl Default for #builder {
            fn default() -> Self {
                Self {
                    validating: true,
                    #(#builder_defaults,)*
                }
            }
        }

        impl #builder {
            /// Enables or disables structural validation in [`build`](Self::build).
            pub fn validating(mut self, validating: bool) -> Self {
                self.validating = validating;
                self
            }

            #(#setters)*

            /// Builds the value, validating it first unless validation was turned off.
            pub fn build(self) -> Result<#name, atrius_model_support::ModelError> {
                const OWNER: &str = #type_name;
                let validating = self.validating;
                if validating {
                    #(#staged_checks)*
                } else {
                    tracing::trace!(type_name = OWNER, "building without validation");
                }
                let built = #name {
                    #(#freeze,)*
                };
                if validating {
                    #(#reference_checks)*
                    #ele_1
                }
                Ok(built)
            }
        }

        impl #name {
            pub fn builder() -> #builder {
                #builder::default()
            }

            /// Returns a builder initialised with a copy of every field of `self`.
            pub fn to_builder(&self) -> #builder {
                #builder {
                    validating: true,
                    #(#to_builder_fields,)*
                }
            }

            #(#getters)*
        }

        impl atrius_model_support::ElementContent for #name {
            fn has_children(&self) -> bool {
                false #(|| #children)*
            }
        }

        impl atrius_model_support::TypeInfo for #name {
            fn type_name() -> &'static str {
                #type_name
            }
        }

        impl atrius_model_support::ModelInfo for #name {
            fn kind() -> atrius_model_support::ModelKind {
                #kind
            }

            fn elements() -> &'static [atrius_model_support::ElementInfo] {
                static ELEMENTS: std::sync::OnceLock<Vec<atrius_model_support::ElementInfo>> =
                    std::sync::OnceLock::new();
                ELEMENTS.get_or_init(|| vec![#(#element_infos),*])
            }
        }

        impl crate::visitor::Visitable for #name {
            fn as_node(&self) -> crate::visitor::ModelNode<'_> {
                crate::visitor::ModelNode::#name(self)
            }

            fn accept_children<V: crate::visitor::Visitor + ?Sized>(&self, visitor: &mut V) {
                #(#visits)*
            }
        }
    })
}

fn builder_field(f: &ModelField<'_>) -> TokenStream {
    let ident = f.ident;
    let value = f.value_type();
    match &f.shape {
        FieldShape::List { .. } => quote! { #ident: Vec<Option<#value>> },
        FieldShape::Single { boxed: true, .. } => quote! { #ident: Option<Box<#value>> },
        FieldShape::Single { .. } => quote! { #ident: Option<#value> },
    }
}

fn setter(f: &ModelField<'_>) -> TokenStream {
    let ident = f.ident;
    let value = f.value_type();
    let name = f.name.value();

    if f.is_list() {
        let add = format_ident!("add_{}", ident.to_string().trim_end_matches('_'));
        let replace_doc = format!("Replaces every `{}` entry.", name);
        let add_doc = format!("Appends one `{}` entry; `None` is rejected by `build()`.", name);
        return quote! {
            #[doc = #replace_doc]
            pub fn #ident<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<Option<#value>>,
            {
                self.#ident = values.into_iter().map(Into::into).collect();
                self
            }

            #[doc = #add_doc]
            pub fn #add(mut self, value: impl Into<Option<#value>>) -> Self {
                self.#ident.push(value.into());
                self
            }
        };
    }

    if f.attrs.is_choice() {
        let doc = format!("Sets the `{}[x]` choice; allowed: {}.", name, f.attrs.choice.join(", "));
        return quote! {
            #[doc = #doc]
            pub fn #ident(mut self, value: impl Into<#value>) -> Self {
                self.#ident = Some(value.into());
                self
            }
        };
    }

    if f.attrs.attribute {
        return quote! {
            pub fn #ident(mut self, value: impl Into<#value>) -> Self {
                self.#ident = Some(value.into());
                self
            }
        };
    }

    let assign = if f.is_boxed() {
        quote! { value.into().map(Box::new) }
    } else {
        quote! { value.into() }
    };
    quote! {
        pub fn #ident(mut self, value: impl Into<Option<#value>>) -> Self {
            self.#ident = #assign;
            self
        }
    }
}

fn getter(f: &ModelField<'_>) -> TokenStream {
    let ident = f.ident;
    let value = f.value_type();
    if f.is_list() {
        return quote! {
            pub fn #ident(&self) -> &[#value] {
                &self.#ident
            }
        };
    }
    if f.attrs.attribute {
        return quote! {
            pub fn #ident(&self) -> Option<&str> {
                self.#ident.as_deref()
            }
        };
    }
    let access = if f.is_boxed() {
        quote! { self.#ident.as_deref() }
    } else {
        quote! { self.#ident.as_ref() }
    };
    quote! {
        pub fn #ident(&self) -> Option<&#value> {
            #access
        }
    }
}

/// Checks run on the builder before freezing: list entries, presence and choice types.
fn staged_check(f: &ModelField<'_>) -> TokenStream {
    let ident = f.ident;
    let name = &f.name;
    if f.is_list() {
        let non_empty = if f.attrs.required {
            quote! { atrius_model_support::validate::require_non_empty(&self.#ident, OWNER, #name)?; }
        } else {
            quote! {}
        };
        return quote! {
            atrius_model_support::validate::check_list(&self.#ident, OWNER, #name)?;
            #non_empty
        };
    }
    if f.attrs.is_choice() {
        let allowed = &f.attrs.choice;
        let check = if f.attrs.required {
            quote! { require_choice_element }
        } else {
            quote! { choice_element }
        };
        return quote! {
            atrius_model_support::validate::#check(self.#ident.as_ref(), OWNER, #name, &[#(#allowed),*])?;
        };
    }
    if f.attrs.required {
        return quote! {
            atrius_model_support::validate::require_non_null(self.#ident.as_ref(), OWNER, #name)?;
        };
    }
    quote! {}
}

fn reference_check(f: &ModelField<'_>) -> TokenStream {
    let ident = f.ident;
    let name = &f.name;
    let allowed = &f.attrs.reference;
    if f.is_list() {
        return quote! {
            for reference in &built.#ident {
                atrius_model_support::validate::check_reference_type(Some(reference), OWNER, #name, &[#(#allowed),*])?;
            }
        };
    }
    let target = if f.attrs.is_choice() {
        quote! { built.#ident.as_ref().and_then(|choice| atrius_model_support::ChoiceType::as_reference(choice)) }
    } else if f.is_boxed() {
        quote! { built.#ident.as_deref() }
    } else {
        quote! { built.#ident.as_ref() }
    };
    quote! {
        atrius_model_support::validate::check_reference_type(#target, OWNER, #name, &[#(#allowed),*])?;
    }
}

fn element_info(f: &ModelField<'_>, declaring_type: &LitStr) -> TokenStream {
    let name = &f.name;
    let value = f.value_type();
    let type_name = if f.attrs.attribute {
        quote! { "string" }
    } else if f.attrs.is_choice() {
        quote! { "Element" }
    } else {
        quote! { <#value as atrius_model_support::TypeInfo>::type_name() }
    };
    let required = f.attrs.required;
    let repeating = f.is_list();
    let choice = f.attrs.is_choice();
    let choice_types = &f.attrs.choice;
    let reference = f.attrs.is_reference();
    let reference_types = &f.attrs.reference;
    let binding = match &f.attrs.binding {
        Some(binding) => quote! { Some(#binding) },
        None => quote! { None },
    };
    let summary = f.attrs.summary;
    quote! {
        atrius_model_support::ElementInfo {
            name: #name,
            type_name: #type_name,
            declaring_type: #declaring_type,
            required: #required,
            repeating: #repeating,
            choice: #choice,
            choice_types: &[#(#choice_types),*],
            reference: #reference,
            reference_types: &[#(#reference_types),*],
            binding: #binding,
            summary: #summary,
        }
    }
}

fn visit_field(f: &ModelField<'_>) -> TokenStream {
    let ident = f.ident;
    let name = &f.name;
    if f.attrs.attribute {
        return quote! {
            if let Some(value) = self.#ident.as_deref() {
                visitor.visit_value(#name, crate::visitor::ValueRef::String(value));
            }
        };
    }
    if f.is_list() {
        return quote! { crate::visitor::accept_list(&self.#ident, #name, visitor); };
    }
    let access = if f.is_boxed() {
        quote! { self.#ident.as_deref() }
    } else {
        quote! { self.#ident.as_ref() }
    };
    quote! { crate::visitor::accept_field(#access, #name, visitor); }
}
