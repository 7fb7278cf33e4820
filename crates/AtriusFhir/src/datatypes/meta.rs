use atrius_macros::FhirModel;

use crate::datatypes::{Coding, Extension};
use crate::primitives::{Canonical, Id, Instant, Uri};

/// Metadata about a resource.
///
/// See: [Meta](http://hl7.org/fhir/StructureDefinition/Meta)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Meta", kind = "datatype")]
pub struct Meta {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Version specific identifier
    #[fhir(summary)]
    version_id: Option<Id>,
    /// When the resource version last changed
    #[fhir(summary)]
    last_updated: Option<Instant>,
    /// Identifies where the resource comes from
    #[fhir(summary)]
    source: Option<Uri>,
    /// Profiles this resource claims to conform to
    #[fhir(summary)]
    profile: Vec<Canonical>,
    #[fhir(summary, binding = "SecurityLabels")]
    security: Vec<Coding>,
    /// Tags applied to this resource
    #[fhir(summary, binding = "Tags")]
    tag: Vec<Coding>,
}
