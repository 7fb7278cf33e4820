//! FHIR R5 complex datatypes.
//!
//! Each datatype is a plain struct deriving [`FhirModel`](atrius_macros::FhirModel),
//! so it comes with a builder, structural validation, getters, metadata and
//! visitor support. Inherited `Element` fields (`id`, `extension`) are declared
//! first in every type.

pub mod address;
pub use address::*;

pub mod annotation;
pub use annotation::*;

pub mod attachment;
pub use attachment::*;

pub mod codeable_concept;
pub use codeable_concept::*;

pub mod codeable_reference;
pub use codeable_reference::*;

pub mod coding;
pub use coding::*;

pub mod contact_point;
pub use contact_point::*;

pub mod extension;
pub use extension::*;

pub mod human_name;
pub use human_name::*;

pub mod identifier;
pub use identifier::*;

pub mod meta;
pub use meta::*;

pub mod narrative;
pub use narrative::*;

pub mod period;
pub use period::*;

pub mod quantity;
pub use quantity::*;

pub mod range;
pub use range::*;

pub mod ratio;
pub use ratio::*;

pub mod reference;
pub use reference::*;

pub mod related_artifact;
pub use related_artifact::*;

pub mod timing;
pub use timing::*;

pub mod virtual_service_detail;
pub use virtual_service_detail::*;
