//! # Atrius Macros - Procedural Macros for the FHIR Model
//!
//! This crate provides the derive macros that turn plain struct and enum
//! declarations into complete FHIR model types. Every resource, backbone element
//! and complex datatype in `atrius-fhir-model` follows the same template: an
//! immutable value, a builder, structural validation at `build()`, typed
//! getters, element metadata and visitor traversal. The template lives here,
//! once, instead of being repeated per type.
//!
//! ## Overview
//!
//! - **`#[derive(FhirModel)]`** - builder, validation, getters, `ElementContent`,
//!   `TypeInfo`, `ModelInfo` and `Visitable` for a struct
//! - **`#[derive(FhirChoice)]`** - member accessors, `From` conversions,
//!   `ChoiceType` and `Visitable` for a closed union of model types
//!
//! ## Usage
//!
//! ```ignore
//! use atrius_macros::FhirModel;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
//! #[fhir_model(name = "Encounter.Location", kind = "backbone")]
//! pub struct EncounterLocation {
//!     #[fhir(attribute)]
//!     id: Option<std::string::String>,
//!     extension: Vec<Extension>,
//!     modifier_extension: Vec<Extension>,
//!     #[fhir(required, reference = "Location")]
//!     location: Option<Reference>,
//!     #[fhir(binding = "EncounterLocationStatus")]
//!     status: Option<Code>,
//!     form: Option<CodeableConcept>,
//!     period: Option<Period>,
//! }
//!
//! let location = EncounterLocation::builder()
//!     .location(reference)
//!     .build()?;
//! ```
//!
//! Generated code refers to `atrius_model_support`, `tracing` and the
//! `crate::visitor` module, so the derives are meant for use inside the model
//! crate.

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

pub(crate) mod field_helpers;
pub(crate) mod fhir_choice_impl;
pub(crate) mod fhir_model_impl;
pub(crate) mod type_helpers;

/// Derives the model template for a FHIR resource, backbone element or complex datatype.
///
/// # Supported Attributes
///
/// - `#[fhir_model(name = "AdverseEvent.SuspectEntity", kind = "backbone")]` on the
///   struct. `kind` is one of `resource`, `backbone` or `datatype`; `name` defaults
///   to the struct name.
/// - `#[fhir(...)]` on fields, with the keys `rename`, `required`, `summary`,
///   `attribute`, `choice`, `reference` and `binding`.
///
/// Fields must be `Option<T>`, `Option<Box<T>>` or `Vec<T>`. Fields are
/// validated, visited and listed in declaration order, so inherited elements are
/// declared first.
///
/// # Generated Items
///
/// - `{Name}Builder` with one setter per field, `add_*` for repeating fields,
///   `validating(bool)` and `build()`
/// - `builder()`, `to_builder()` and getters on the struct
/// - `ElementContent`, `TypeInfo` and `ModelInfo` implementations
/// - a `crate::visitor::Visitable` implementation
///
/// # Validation Order
///
/// `build()` checks, field by field, list entries, required elements and choice
/// types on the staged values; then reference targets on the frozen value; then,
/// except for resources, that the element has at least one child.
#[proc_macro_derive(FhirModel, attributes(fhir_model, fhir))]
pub fn fhir_model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match fhir_model_impl::generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives helpers for a closed union whose variants each wrap one model type.
///
/// Used for choice values (`value[x]`) and for the `Resource` enum. Mark the
/// variant holding a `Reference` with `#[fhir_choice(reference)]` so reference
/// target checks can see through the union.
///
/// # Examples
///
/// ```rust,ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, FhirChoice)]
/// pub enum ChoiceValue {
///     Boolean(Boolean),
///     Quantity(Quantity),
///     #[fhir_choice(reference)]
///     Reference(Reference),
///     Timing(Box<Timing>),
/// }
///
/// let value = ChoiceValue::from(quantity);
/// assert_eq!(value.type_name(), "Quantity");
/// assert!(value.as_quantity().is_some());
/// ```
#[proc_macro_derive(FhirChoice, attributes(fhir_choice))]
pub fn fhir_choice_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match fhir_choice_impl::generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
