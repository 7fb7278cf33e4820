use atrius_macros::FhirModel;

use crate::datatypes::{Extension, Period};
use crate::primitives::{Code, String};

/// An address expressed using postal conventions (as opposed to GPS or other
/// location definition formats).
///
/// See: [Address](http://hl7.org/fhir/StructureDefinition/Address)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Address", kind = "datatype")]
pub struct Address {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// home | work | temp | old | billing - purpose of this address
    #[fhir(rename = "use", summary, binding = "AddressUse")]
    use_: Option<Code>,
    /// postal | physical | both
    #[fhir(rename = "type", summary, binding = "AddressType")]
    type_: Option<Code>,
    /// Text representation of the address
    #[fhir(summary)]
    text: Option<String>,
    /// Street name, number, direction & P.O. Box etc.
    #[fhir(summary)]
    line: Vec<String>,
    #[fhir(summary)]
    city: Option<String>,
    #[fhir(summary)]
    district: Option<String>,
    /// Sub-unit of country (abbreviations ok)
    #[fhir(summary)]
    state: Option<String>,
    #[fhir(summary)]
    postal_code: Option<String>,
    /// Country (e.g. may be ISO 3166 2 or 3 letter code)
    #[fhir(summary)]
    country: Option<String>,
    #[fhir(summary)]
    period: Option<Period>,
}
