use atrius_macros::FhirModel;

use crate::datatypes::Extension;
use crate::primitives::{Boolean, Code, String, Uri};

/// A reference to a code defined by a terminology system.
///
/// See: [Coding](http://hl7.org/fhir/StructureDefinition/Coding)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Coding", kind = "datatype")]
pub struct Coding {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Identity of the terminology system
    #[fhir(summary)]
    system: Option<Uri>,
    #[fhir(summary)]
    version: Option<String>,
    /// Symbol in syntax defined by the system
    #[fhir(summary)]
    code: Option<Code>,
    #[fhir(summary)]
    display: Option<String>,
    /// If this coding was chosen directly by the user
    #[fhir(summary)]
    user_selected: Option<Boolean>,
}
