use atrius_macros::FhirModel;

use crate::datatypes::{Coding, Extension};
use crate::primitives::String;

/// A concept that may be defined by a formal reference to a terminology or
/// ontology, or may be provided by text.
///
/// See: [CodeableConcept](http://hl7.org/fhir/StructureDefinition/CodeableConcept)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "CodeableConcept", kind = "datatype")]
pub struct CodeableConcept {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    coding: Vec<Coding>,
    /// Plain text representation of the concept
    #[fhir(summary)]
    text: Option<String>,
}
