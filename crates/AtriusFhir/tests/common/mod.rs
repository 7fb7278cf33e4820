#![allow(dead_code)]

use atrius_fhir_model::datatypes::{CodeableConcept, Quantity, Reference};
use atrius_fhir_model::primitives::{Code, Decimal, String, Uri};
use atrius_fhir_model::resources::AdverseEvent;
use rust_decimal_macros::dec;

/// Installs a test subscriber once; `RUST_LOG=debug` shows skipped reference checks.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn code(value: &str) -> Code {
    Code::of(value).unwrap()
}

pub fn string(value: &str) -> String {
    String::of(value).unwrap()
}

/// Reference with only a literal `reference`.
pub fn reference(literal: &str) -> Reference {
    Reference::builder().reference(string(literal)).build().unwrap()
}

/// Reference with only `type`.
pub fn typed_reference(resource_type: &str) -> Reference {
    Reference::builder()
        .type_(Uri::of(resource_type).unwrap())
        .build()
        .unwrap()
}

pub fn concept(text: &str) -> CodeableConcept {
    CodeableConcept::builder().text(string(text)).build().unwrap()
}

pub fn quantity(value: rust_decimal::Decimal, unit: &str) -> Quantity {
    quantity_of(Decimal::of(value).unwrap(), unit)
}

pub fn quantity_of(value: Decimal, unit: &str) -> Quantity {
    Quantity::builder().value(value).unit(string(unit)).build().unwrap()
}

pub fn kilograms() -> Quantity {
    quantity(dec!(72.50), "kg")
}

/// Smallest valid AdverseEvent.
pub fn adverse_event() -> AdverseEvent {
    AdverseEvent::builder()
        .status(code("completed"))
        .actuality(code("actual"))
        .subject(reference("Patient/example"))
        .build()
        .unwrap()
}
