use atrius_macros::FhirModel;

use crate::datatypes::{CodeableConcept, Extension, Reference};

/// A reference to a resource (by instance), or instead, a reference to a
/// concept defined in a terminology or ontology (by class).
///
/// The allowed targets of `reference` are a profile concern of the element
/// using this type and are not checked here.
///
/// See: [CodeableReference](http://hl7.org/fhir/StructureDefinition/CodeableReference)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "CodeableReference", kind = "datatype")]
pub struct CodeableReference {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Reference to a concept (by class)
    #[fhir(summary)]
    concept: Option<CodeableConcept>,
    /// Reference to a resource (by instance)
    #[fhir(summary)]
    reference: Option<Reference>,
}
