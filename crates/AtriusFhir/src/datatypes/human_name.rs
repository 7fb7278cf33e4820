use atrius_macros::FhirModel;

use crate::datatypes::{Extension, Period};
use crate::primitives::{Code, String};

/// Name of a human or other living entity, with name parts and usage
/// information.
///
/// See: [HumanName](http://hl7.org/fhir/StructureDefinition/HumanName)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "HumanName", kind = "datatype")]
pub struct HumanName {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// usual | official | temp | nickname | anonymous | old | maiden
    #[fhir(rename = "use", summary, binding = "NameUse")]
    use_: Option<Code>,
    /// Text representation of the full name
    #[fhir(summary)]
    text: Option<String>,
    /// Family name (often called 'Surname')
    #[fhir(summary)]
    family: Option<String>,
    /// Given names (not always 'first'). Includes middle names
    #[fhir(summary)]
    given: Vec<String>,
    #[fhir(summary)]
    prefix: Vec<String>,
    #[fhir(summary)]
    suffix: Vec<String>,
    /// Time period when name was/is in use
    #[fhir(summary)]
    period: Option<Period>,
}
