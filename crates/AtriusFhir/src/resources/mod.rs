//! FHIR R5 resources.
//!
//! Each resource module declares the resource struct followed by its backbone
//! elements, named `{Resource}{Backbone}` (e.g. `AdverseEventSuspectEntity`
//! for `AdverseEvent.suspectEntity`). Inherited `Resource` and `DomainResource`
//! fields come first in every resource, so they are validated and visited
//! first.

use atrius_macros::FhirChoice;
use atrius_model_support::TypeInfo;

use crate::primitives::Id;

pub mod adverse_event;
pub use adverse_event::*;

pub mod device;
pub use device::*;

pub mod encounter;
pub use encounter::*;

pub mod patient;
pub use patient::*;

pub mod practitioner;
pub use practitioner::*;

/// Any resource, as held by `DomainResource.contained`.
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_model::primitives::{Boolean, Id};
/// use atrius_fhir_model::resources::{Patient, Resource};
///
/// let patient = Patient::builder()
///     .id(Id::of("p1").unwrap())
///     .active(Boolean::of(true).unwrap())
///     .build()
///     .unwrap();
/// let resource = Resource::from(patient);
///
/// assert_eq!(resource.resource_type(), "Patient");
/// assert_eq!(resource.id().and_then(|id| id.value()).map(String::as_str), Some("p1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirChoice)]
pub enum Resource {
    AdverseEvent(AdverseEvent),
    Device(Device),
    Encounter(Encounter),
    Patient(Patient),
    Practitioner(Practitioner),
}

impl Resource {
    /// Resource type of the held resource, e.g. `"Encounter"`.
    pub fn resource_type(&self) -> &'static str {
        self.type_name()
    }

    /// Logical id of the held resource.
    pub fn id(&self) -> Option<&Id> {
        match self {
            Resource::AdverseEvent(r) => r.id(),
            Resource::Device(r) => r.id(),
            Resource::Encounter(r) => r.id(),
            Resource::Patient(r) => r.id(),
            Resource::Practitioner(r) => r.id(),
        }
    }
}

impl TypeInfo for Resource {
    fn type_name() -> &'static str {
        "Resource"
    }
}
