use atrius_macros::FhirModel;

use crate::datatypes::{Extension, Quantity};

/// A set of ordered quantities defined by a low and high limit.
///
/// See: [Range](http://hl7.org/fhir/StructureDefinition/Range)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Range", kind = "datatype")]
pub struct Range {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Low limit
    #[fhir(summary)]
    low: Option<Quantity>,
    /// High limit
    #[fhir(summary)]
    high: Option<Quantity>,
}
