//! The value of a choice element (`value[x]`, `occurrence[x]`, ...).
//!
//! A choice element holds exactly one value whose type comes from a fixed
//! per-element list. [`ChoiceValue`] is the union of every type used by a
//! choice element in this crate; the per-element list is declared on the
//! field with `#[fhir(choice = "...")]` and enforced by `build()`.
//!
//! ```rust
//! use atrius_fhir_model::choice::ChoiceValue;
//! use atrius_fhir_model::datatypes::Quantity;
//! use atrius_fhir_model::primitives::Decimal;
//! use atrius_model_support::choice_element_name;
//! use rust_decimal::Decimal as RustDecimal;
//!
//! let quantity = Quantity::builder()
//!     .value(Decimal::of(RustDecimal::new(75, 1)).unwrap())
//!     .build()
//!     .unwrap();
//! let value = ChoiceValue::from(quantity.clone());
//!
//! assert_eq!(value.type_name(), "Quantity");
//! assert_eq!(value.as_quantity(), Some(&quantity));
//! assert!(!value.is_reference());
//! assert_eq!(choice_element_name("value", value.type_name()), "valueQuantity");
//! ```

use atrius_macros::FhirChoice;

use crate::datatypes::{
    Address, Annotation, Attachment, CodeableConcept, CodeableReference, Coding, ContactPoint,
    Count, Duration, HumanName, Identifier, Meta, Period, Quantity, Range, Ratio, Reference,
    RelatedArtifact, Timing,
};
use crate::primitives;

/// One populated member of a choice element.
///
/// `Annotation` and `Timing` are boxed since both contain choice elements
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirChoice)]
pub enum ChoiceValue {
    Base64Binary(primitives::Base64Binary),
    Boolean(primitives::Boolean),
    Canonical(primitives::Canonical),
    Code(primitives::Code),
    Date(primitives::Date),
    DateTime(primitives::DateTime),
    Decimal(primitives::Decimal),
    Id(primitives::Id),
    Instant(primitives::Instant),
    Integer(primitives::Integer),
    Integer64(primitives::Integer64),
    Markdown(primitives::Markdown),
    PositiveInt(primitives::PositiveInt),
    String(primitives::String),
    Time(primitives::Time),
    UnsignedInt(primitives::UnsignedInt),
    Uri(primitives::Uri),
    Url(primitives::Url),
    Address(Address),
    Annotation(Box<Annotation>),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    CodeableReference(CodeableReference),
    Coding(Coding),
    ContactPoint(ContactPoint),
    Count(Count),
    Duration(Duration),
    HumanName(HumanName),
    Identifier(Identifier),
    Meta(Meta),
    Period(Period),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    #[fhir_choice(reference)]
    Reference(Reference),
    RelatedArtifact(RelatedArtifact),
    Timing(Box<Timing>),
}
