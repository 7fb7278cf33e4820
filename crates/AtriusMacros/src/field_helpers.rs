use heck::ToLowerCamelCase;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Lit, LitStr, Meta, Token};

use atrius_model_support::ModelKind;

/// Declarative contract of one model field, read from `#[fhir(...)]`.
///
/// # Supported Keys
///
/// - `rename = "class"` - FHIR element name when it differs from the camelCase field name
/// - `required` - minimum cardinality one
/// - `summary` - element is part of the summary view
/// - `attribute` - plain string carried as an attribute (`Element.id`, `Extension.url`)
/// - `choice = "dateTime, Period"` - allowed types of a choice element
/// - `reference = "Patient, Group"` - allowed reference targets
/// - `binding = "AdverseEventStatus"` - name of the bound value set
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    pub required: bool,
    pub summary: bool,
    pub attribute: bool,
    pub choice: Vec<String>,
    pub reference: Vec<String>,
    pub binding: Option<String>,
}

impl FieldAttrs {
    pub fn is_choice(&self) -> bool {
        !self.choice.is_empty()
    }

    pub fn is_reference(&self) -> bool {
        !self.reference.is_empty()
    }
}

/// Type-level settings read from `#[fhir_model(name = "...", kind = "...")]`.
pub(crate) struct ModelAttrs {
    pub name: String,
    pub kind: ModelKind,
}

fn string_value(value: &Expr) -> syn::Result<LitStr> {
    match value {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(s) => Ok(s.clone()),
            _ => Err(syn::Error::new(value.span(), "expected string literal")),
        },
        _ => Err(syn::Error::new(value.span(), "expected string literal")),
    }
}

/// Splits `"A, B , C"` into trimmed, non-empty names.
fn name_list(lit: &LitStr) -> Vec<String> {
    lit.value()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_metas(attr: &Attribute) -> syn::Result<Punctuated<Meta, Token![,]>> {
    attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
}

pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("fhir")) {
        for meta in parse_metas(attr)? {
            let span = meta.span();
            let key = meta.path().get_ident().map(|i| i.to_string()).unwrap_or_default();
            match (&meta, key.as_str()) {
                (Meta::Path(_), "required") => out.required = true,
                (Meta::Path(_), "summary") => out.summary = true,
                (Meta::Path(_), "attribute") => out.attribute = true,
                (Meta::NameValue(nv), "rename") => out.rename = Some(string_value(&nv.value)?.value()),
                (Meta::NameValue(nv), "choice") => out.choice = name_list(&string_value(&nv.value)?),
                (Meta::NameValue(nv), "reference") => {
                    out.reference = name_list(&string_value(&nv.value)?)
                }
                (Meta::NameValue(nv), "binding") => {
                    out.binding = Some(string_value(&nv.value)?.value())
                }
                _ => {
                    return Err(syn::Error::new(
                        span,
                        format!("unsupported fhir attribute key: {key}"),
                    ));
                }
            }
        }
    }
    Ok(out)
}

pub(crate) fn parse_model_attrs(input: &syn::DeriveInput) -> syn::Result<ModelAttrs> {
    let mut name = None;
    let mut kind = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("fhir_model")) {
        for meta in parse_metas(attr)? {
            let Meta::NameValue(nv) = &meta else {
                return Err(syn::Error::new(meta.span(), "expected key = \"value\""));
            };
            let lit = string_value(&nv.value)?;
            if nv.path.is_ident("name") {
                name = Some(lit.value());
            } else if nv.path.is_ident("kind") {
                let parsed = ModelKind::from_name(&lit.value()).ok_or_else(|| {
                    syn::Error::new(
                        lit.span(),
                        "kind must be one of: resource, backbone, datatype",
                    )
                })?;
                kind = Some(parsed);
            } else {
                return Err(syn::Error::new(nv.path.span(), "unsupported fhir_model key"));
            }
        }
    }

    let kind = kind.ok_or_else(|| {
        syn::Error::new(input.ident.span(), "missing #[fhir_model(kind = \"...\")]")
    })?;
    if kind == ModelKind::Primitive {
        return Err(syn::Error::new(
            input.ident.span(),
            "primitive types are implemented by Element<K>, not derived",
        ));
    }
    Ok(ModelAttrs {
        name: name.unwrap_or_else(|| input.ident.to_string()),
        kind,
    })
}

/// Determines the FHIR element name of a field.
///
/// Uses `#[fhir(rename = "...")]` when present, otherwise converts the Rust
/// field name from `snake_case` to `camelCase`.
///
/// ```rust,ignore
/// // Field: implicit_rules: Option<Uri>
/// // Result: "implicitRules"
///
/// // Field: #[fhir(rename = "class")] class_: Vec<CodeableConcept>
/// // Result: "class"
/// ```
pub(crate) fn get_effective_field_name(ident: &syn::Ident, attrs: &FieldAttrs) -> String {
    match &attrs.rename {
        Some(rename) => rename.clone(),
        None => ident.unraw().to_string().to_lower_camel_case(),
    }
}
