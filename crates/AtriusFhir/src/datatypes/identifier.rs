use atrius_macros::FhirModel;

use crate::datatypes::{CodeableConcept, Extension, Period, Reference};
use crate::primitives::{Code, String, Uri};

/// An identifier intended for computation.
///
/// See: [Identifier](http://hl7.org/fhir/StructureDefinition/Identifier)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Identifier", kind = "datatype")]
pub struct Identifier {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// usual | official | temp | secondary | old (If known)
    #[fhir(rename = "use", summary, binding = "IdentifierUse")]
    use_: Option<Code>,
    #[fhir(rename = "type", summary, binding = "IdentifierType")]
    type_: Option<CodeableConcept>,
    /// The namespace for the identifier value
    #[fhir(summary)]
    system: Option<Uri>,
    #[fhir(summary)]
    value: Option<String>,
    #[fhir(summary)]
    period: Option<Period>,
    /// Organization that issued id (may be just text)
    #[fhir(summary, reference = "Organization")]
    assigner: Option<Reference>,
}
