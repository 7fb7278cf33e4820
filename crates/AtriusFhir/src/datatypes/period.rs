use atrius_macros::FhirModel;

use crate::datatypes::Extension;
use crate::primitives::DateTime;

/// A time period defined by a start and end date and optionally time.
///
/// See: [Period](http://hl7.org/fhir/StructureDefinition/Period)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Period", kind = "datatype")]
pub struct Period {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Starting time with inclusive boundary
    #[fhir(summary)]
    start: Option<DateTime>,
    /// End time with inclusive boundary, if not ongoing
    #[fhir(summary)]
    end: Option<DateTime>,
}
