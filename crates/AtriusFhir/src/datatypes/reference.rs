use atrius_macros::FhirModel;
use atrius_model_support::ReferenceLike;

use crate::datatypes::{Extension, Identifier};
use crate::primitives::{String, Uri};

/// A reference from one resource to another.
///
/// The target is given by a literal `reference` (relative, absolute,
/// contained `#id` or a URN), by a logical `identifier`, or both. Fields that
/// hold a reference declare which resource types they accept; `build()` checks
/// the type it can resolve from `reference` or `type` against that list.
///
/// `identifier` is boxed because `Identifier.assigner` is itself a reference.
///
/// See: [Reference](http://hl7.org/fhir/StructureDefinition/Reference)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Reference", kind = "datatype")]
pub struct Reference {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Literal reference, Relative, internal or absolute URL
    #[fhir(summary)]
    reference: Option<String>,
    /// Type the reference refers to (e.g. "Patient")
    #[fhir(rename = "type", summary, binding = "FHIRTypes")]
    type_: Option<Uri>,
    /// Logical reference, when literal reference is not known
    #[fhir(summary)]
    identifier: Option<Box<Identifier>>,
    /// Text alternative for the resource
    #[fhir(summary)]
    display: Option<String>,
}

impl ReferenceLike for Reference {
    fn reference_literal(&self) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.value()).map(|v| v.as_str())
    }

    fn reference_type(&self) -> Option<&str> {
        self.type_.as_ref().and_then(|t| t.value()).map(|v| v.as_str())
    }
}
