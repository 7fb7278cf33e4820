use atrius_macros::FhirModel;

use crate::datatypes::{Extension, Quantity};

/// A relationship of two quantity values, expressed as a numerator and a
/// denominator.
///
/// See: [Ratio](http://hl7.org/fhir/StructureDefinition/Ratio)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Ratio", kind = "datatype")]
pub struct Ratio {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    numerator: Option<Quantity>,
    #[fhir(summary)]
    denominator: Option<Quantity>,
}
