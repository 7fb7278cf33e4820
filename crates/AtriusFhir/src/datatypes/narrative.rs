use atrius_macros::FhirModel;

use crate::datatypes::Extension;
use crate::primitives::{Code, Xhtml};

/// Human-readable summary of the resource (essential clinical and business
/// information).
///
/// See: [Narrative](http://hl7.org/fhir/StructureDefinition/Narrative)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Narrative", kind = "datatype")]
pub struct Narrative {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// generated | extensions | additional | empty
    #[fhir(required, binding = "NarrativeStatus")]
    status: Option<Code>,
    /// Limited xhtml content
    #[fhir(required)]
    div: Option<Xhtml>,
}
