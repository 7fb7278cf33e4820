use atrius_macros::FhirModel;

use crate::datatypes::Extension;
use crate::primitives::{Code, Decimal, String, Uri};

/// A measured amount (or an amount that can potentially be measured).
///
/// See: [Quantity](http://hl7.org/fhir/StructureDefinition/Quantity)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Quantity", kind = "datatype")]
pub struct Quantity {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Numerical value (with implicit precision)
    #[fhir(summary)]
    value: Option<Decimal>,
    /// < | <= | >= | > | ad - how to understand the value
    #[fhir(summary, binding = "QuantityComparator")]
    comparator: Option<Code>,
    /// Unit representation
    #[fhir(summary)]
    unit: Option<String>,
    /// System that defines coded unit form
    #[fhir(summary)]
    system: Option<Uri>,
    /// Coded form of the unit
    #[fhir(summary)]
    code: Option<Code>,
}

/// A length of time.
///
/// See: [Duration](http://hl7.org/fhir/StructureDefinition/Duration)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Duration", kind = "datatype")]
pub struct Duration {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    value: Option<Decimal>,
    #[fhir(summary, binding = "QuantityComparator")]
    comparator: Option<Code>,
    #[fhir(summary)]
    unit: Option<String>,
    #[fhir(summary)]
    system: Option<Uri>,
    #[fhir(summary)]
    code: Option<Code>,
}

/// A measured amount of discrete items.
///
/// See: [Count](http://hl7.org/fhir/StructureDefinition/Count)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Count", kind = "datatype")]
pub struct Count {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    value: Option<Decimal>,
    #[fhir(summary, binding = "QuantityComparator")]
    comparator: Option<Code>,
    #[fhir(summary)]
    unit: Option<String>,
    #[fhir(summary)]
    system: Option<Uri>,
    #[fhir(summary)]
    code: Option<Code>,
}
