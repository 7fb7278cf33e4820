use atrius_macros::FhirModel;

use crate::datatypes::{Extension, Period};
use crate::primitives::{Code, PositiveInt, String};

/// Details for all kinds of technology mediated contact points for a person or
/// organization, including telephone, email, etc.
///
/// See: [ContactPoint](http://hl7.org/fhir/StructureDefinition/ContactPoint)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "ContactPoint", kind = "datatype")]
pub struct ContactPoint {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// phone | fax | email | pager | url | sms | other
    #[fhir(summary, binding = "ContactPointSystem")]
    system: Option<Code>,
    /// The actual contact point details
    #[fhir(summary)]
    value: Option<String>,
    /// home | work | temp | old | mobile - purpose of this contact point
    #[fhir(rename = "use", summary, binding = "ContactPointUse")]
    use_: Option<Code>,
    /// Specify preferred order of use (1 = highest)
    #[fhir(summary)]
    rank: Option<PositiveInt>,
    #[fhir(summary)]
    period: Option<Period>,
}
