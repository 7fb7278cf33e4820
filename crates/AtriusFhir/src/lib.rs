//! # Atrius FHIR Model
//!
//! The HL7 FHIR R5 data model: immutable resources, backbone elements,
//! complex datatypes and primitives, each built through a builder that checks
//! structural rules at `build()`.
//!
//! - [`primitives`] - `Element<K>` aliases such as [`primitives::Code`] and [`primitives::DateTime`]
//! - [`datatypes`] - complex datatypes such as [`datatypes::Reference`]
//! - [`choice`] - [`choice::ChoiceValue`], the value of a `[x]` element
//! - [`resources`] - resources, their backbone elements and the [`resources::Resource`] enum
//! - [`visitor`] - depth-first traversal of any model value
//!
//! Validation failures are reported as [`atrius_model_support::ModelError`].
//!
//! ```rust
//! use atrius_fhir_model::choice::ChoiceValue;
//! use atrius_fhir_model::datatypes::{CodeableConcept, Reference};
//! use atrius_fhir_model::primitives::String;
//! use atrius_fhir_model::resources::AdverseEventSuspectEntity;
//! use atrius_model_support::ModelError;
//!
//! let patient = Reference::builder()
//!     .reference(String::of("Patient/123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let err = AdverseEventSuspectEntity::builder()
//!     .instance(patient)
//!     .build()
//!     .unwrap_err();
//! assert!(matches!(err, ModelError::InvalidReferenceTarget { element: "instance", .. }));
//!
//! let concept = CodeableConcept::builder()
//!     .text(String::of("aspirin").unwrap())
//!     .build()
//!     .unwrap();
//! let suspect = AdverseEventSuspectEntity::builder()
//!     .instance(concept.clone())
//!     .build()
//!     .unwrap();
//! assert_eq!(suspect.instance(), Some(&ChoiceValue::CodeableConcept(concept)));
//! ```

pub mod choice;
pub mod datatypes;
pub mod date_time;
pub mod element;
pub mod precise_decimal;
pub mod primitives;
pub mod resources;
pub mod visitor;

pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::{Element, ElementBuilder, PrimitiveKind};
pub use precise_decimal::PreciseDecimal;
