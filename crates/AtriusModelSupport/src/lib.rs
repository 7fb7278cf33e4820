//! # FHIR Model Support Types
//!
//! This crate holds the pieces of the FHIR model layer that do not depend on any
//! concrete resource: the error type returned by every builder, the stateless
//! structural validation functions invoked from generated `build()` methods, the
//! element metadata tables and the process-wide reference checking switch.
//!
//! ## Overview
//!
//! Generated model code (see `atrius-macros`) calls into this crate:
//! - [`validate`] functions enforce required elements, list non-nullity, choice
//!   membership, reference target kinds and the `ele-1` rule
//! - [`ModelError`] reports the first violation found
//! - [`TypeInfo`] and [`ModelInfo`] expose type names and per-element metadata
//! - [`config`] controls whether reference targets are checked at all
//!
//! ## Usage Example
//!
//! ```rust
//! use atrius_model_support::{validate, ModelError};
//!
//! let status: Option<&str> = None;
//! let err = validate::require_non_null(status, "AdverseEvent", "status").unwrap_err();
//! assert_eq!(err, ModelError::MissingRequiredField { owner: "AdverseEvent", element: "status" });
//! assert_eq!(err.path(), "AdverseEvent.status");
//! ```

pub mod config;
pub mod error;
pub mod resource_types;
pub mod type_info;
pub mod validate;

pub use config::{reference_type_checking, set_reference_type_checking};
pub use error::ModelError;
pub use resource_types::{is_resource_type, RESOURCE_TYPES};
pub use type_info::{choice_element_name, ElementInfo, ModelInfo, ModelKind, TypeInfo};
pub use validate::{ChoiceType, ElementContent, ReferenceLike};
