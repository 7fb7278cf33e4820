use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;
use crate::datatypes::Extension;
use crate::primitives::{DateTime, Markdown};

/// A text note which also contains information about who made the statement
/// and when.
///
/// See: [Annotation](http://hl7.org/fhir/StructureDefinition/Annotation)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Annotation", kind = "datatype")]
pub struct Annotation {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Individual responsible for the annotation
    #[fhir(
        summary,
        choice = "Reference, string",
        reference = "Practitioner, PractitionerRole, Patient, RelatedPerson, Organization"
    )]
    author: Option<ChoiceValue>,
    /// When the annotation was made
    #[fhir(summary)]
    time: Option<DateTime>,
    /// The annotation - text content (as markdown)
    #[fhir(required, summary)]
    text: Option<Markdown>,
}
