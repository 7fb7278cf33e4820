//! # Model Errors
//!
//! Errors raised while building FHIR model values. Every variant names the type
//! that owns the offending element so a caller can report a dotted path.

use thiserror::Error;

/// Structural violation detected by a builder.
///
/// Builders stop at the first violation, so a failed `build()` carries exactly
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required element was absent, or a repeating element with a minimum
    /// cardinality of one was empty.
    #[error("Missing required element: '{owner}.{element}'")]
    MissingRequiredField {
        owner: &'static str,
        element: &'static str,
    },

    /// A choice element holds a type outside its declared set.
    #[error(
        "Invalid type: {actual} for choice element: '{owner}.{element}' must be one of: [{}]",
        .allowed.join(", ")
    )]
    InvalidChoiceType {
        owner: &'static str,
        element: &'static str,
        actual: &'static str,
        allowed: &'static [&'static str],
    },

    /// A reference resolved to a resource type outside the element's target list.
    #[error(
        "Resource type found in reference value: '{actual}' for element: '{owner}.{element}' must be one of: [{}]",
        .allowed.join(", ")
    )]
    InvalidReferenceTarget {
        owner: &'static str,
        element: &'static str,
        actual: String,
        allowed: &'static [&'static str],
    },

    /// The resource type in `Reference.reference` disagrees with `Reference.type`.
    #[error(
        "Resource type found in reference value: '{literal}' for element: '{owner}.{element}' does not match Reference.type: '{declared}'"
    )]
    ReferenceTypeMismatch {
        owner: &'static str,
        element: &'static str,
        literal: String,
        declared: String,
    },

    /// ele-1: an element carries neither a value nor any child.
    #[error("ele-1: All FHIR elements must have a @value or children ({owner})")]
    EmptyElement { owner: &'static str },

    /// A repeating element contains an absent entry.
    #[error("Repeating element: '{owner}.{element}' does not permit null elements (index {index})")]
    NullListElement {
        owner: &'static str,
        element: &'static str,
        index: usize,
    },

    /// A primitive value does not match the format of its FHIR type.
    #[error("Invalid {type_name} value: {reason}")]
    InvalidValue {
        type_name: &'static str,
        reason: String,
    },
}

impl ModelError {
    /// Name of the type that owns the offending element.
    pub fn owner(&self) -> &'static str {
        match self {
            ModelError::MissingRequiredField { owner, .. }
            | ModelError::InvalidChoiceType { owner, .. }
            | ModelError::InvalidReferenceTarget { owner, .. }
            | ModelError::ReferenceTypeMismatch { owner, .. }
            | ModelError::EmptyElement { owner }
            | ModelError::NullListElement { owner, .. } => owner,
            ModelError::InvalidValue { type_name, .. } => type_name,
        }
    }

    /// Name of the offending element, if the error concerns a single element.
    pub fn element(&self) -> Option<&'static str> {
        match self {
            ModelError::MissingRequiredField { element, .. }
            | ModelError::InvalidChoiceType { element, .. }
            | ModelError::InvalidReferenceTarget { element, .. }
            | ModelError::ReferenceTypeMismatch { element, .. }
            | ModelError::NullListElement { element, .. } => Some(element),
            ModelError::EmptyElement { .. } | ModelError::InvalidValue { .. } => None,
        }
    }

    /// Dotted path of the violation, e.g. `AdverseEvent.subject`.
    pub fn path(&self) -> String {
        match self.element() {
            Some(element) => format!("{}.{}", self.owner(), element),
            None => self.owner().to_string(),
        }
    }
}
