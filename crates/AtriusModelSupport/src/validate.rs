//! # Structural Validation
//!
//! Stateless checks invoked by generated `build()` methods. Each function takes
//! the candidate value together with the rule it enforces and returns the first
//! violation as a [`ModelError`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::reference_type_checking;
use crate::error::ModelError;
use crate::resource_types::RESOURCE_TYPES;

/// A tagged union whose populated member can be named.
pub trait ChoiceType {
    /// FHIR type code of the populated member (`"Quantity"`, `"dateTime"`).
    fn type_name(&self) -> &'static str;

    /// The populated member viewed as a reference, if it is one.
    fn as_reference(&self) -> Option<&dyn ReferenceLike> {
        None
    }
}

/// The parts of a FHIR `Reference` needed to resolve its target kind.
pub trait ReferenceLike {
    /// `Reference.reference`: literal, relative or absolute.
    fn reference_literal(&self) -> Option<&str>;

    /// `Reference.type`: explicit target type URI or name.
    fn reference_type(&self) -> Option<&str>;
}

/// Presence of a value and of child elements, used by the ele-1 rule.
pub trait ElementContent {
    fn has_value(&self) -> bool {
        false
    }

    fn has_children(&self) -> bool;
}

/// Matches `[base]/Type/id[/_history/vid]` for every R5 resource type.
static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^((http|https)://([A-Za-z0-9\-\.\:\%\$]*/)+)?({})/[A-Za-z0-9\-\.]{{1,64}}(/_history/[A-Za-z0-9\-\.]{{1,64}})?$",
        RESOURCE_TYPES.join("|")
    );
    Regex::new(&pattern).expect("reference pattern is a valid regex")
});

const RESOURCE_TYPE_GROUP: usize = 4;

/// Fails with `MissingRequiredField` when `value` is absent.
pub fn require_non_null<T: ?Sized>(
    value: Option<&T>,
    owner: &'static str,
    element: &'static str,
) -> Result<(), ModelError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ModelError::MissingRequiredField { owner, element }),
    }
}

/// Fails with `MissingRequiredField` when a list with minimum cardinality one is empty.
pub fn require_non_empty<T>(
    values: &[T],
    owner: &'static str,
    element: &'static str,
) -> Result<(), ModelError> {
    if values.is_empty() {
        return Err(ModelError::MissingRequiredField { owner, element });
    }
    Ok(())
}

/// Fails with `NullListElement` at the first absent entry of a staged list.
pub fn check_list<T>(
    values: &[Option<T>],
    owner: &'static str,
    element: &'static str,
) -> Result<(), ModelError> {
    match values.iter().position(Option::is_none) {
        Some(index) => Err(ModelError::NullListElement {
            owner,
            element,
            index,
        }),
        None => Ok(()),
    }
}

/// Fails with `InvalidChoiceType` when a present choice holds a type outside `allowed`.
pub fn choice_element<C: ChoiceType + ?Sized>(
    value: Option<&C>,
    owner: &'static str,
    element: &'static str,
    allowed: &'static [&'static str],
) -> Result<(), ModelError> {
    let Some(value) = value else {
        return Ok(());
    };
    let actual = value.type_name();
    if allowed.contains(&actual) {
        Ok(())
    } else {
        Err(ModelError::InvalidChoiceType {
            owner,
            element,
            actual,
            allowed,
        })
    }
}

/// Like [`choice_element`], but the choice must also be present.
pub fn require_choice_element<C: ChoiceType + ?Sized>(
    value: Option<&C>,
    owner: &'static str,
    element: &'static str,
    allowed: &'static [&'static str],
) -> Result<(), ModelError> {
    require_non_null(value, owner, element)?;
    choice_element(value, owner, element, allowed)
}

/// Checks that a reference targets one of the `allowed` resource types.
///
/// The target type is taken from the literal reference when it has the form
/// `Type/id` (optionally absolute or versioned) or `Type?query`, and from
/// `Reference.type` otherwise. Contained (`#id`) and URN references never
/// resolve from the literal. When no type can be resolved the check passes.
pub fn check_reference_type<R: ReferenceLike + ?Sized>(
    reference: Option<&R>,
    owner: &'static str,
    element: &'static str,
    allowed: &'static [&'static str],
) -> Result<(), ModelError> {
    let Some(reference) = reference else {
        return Ok(());
    };
    if allowed.contains(&"Resource") {
        return Ok(());
    }
    if !reference_type_checking() {
        tracing::debug!(owner, element, "reference type checking is disabled");
        return Ok(());
    }

    let declared = reference.reference_type().map(declared_resource_type);
    let literal = reference.reference_literal().and_then(literal_resource_type);

    let resolved = match (literal, declared) {
        (Some(literal), Some(declared)) if literal != declared => {
            return Err(ModelError::ReferenceTypeMismatch {
                owner,
                element,
                literal: literal.to_string(),
                declared: declared.to_string(),
            });
        }
        (Some(literal), _) => literal,
        (None, Some(declared)) => declared,
        (None, None) => {
            tracing::debug!(
                owner,
                element,
                reference = reference.reference_literal(),
                "reference target type could not be resolved; skipping check"
            );
            return Ok(());
        }
    };

    if allowed.contains(&resolved) {
        Ok(())
    } else {
        Err(ModelError::InvalidReferenceTarget {
            owner,
            element,
            actual: resolved.to_string(),
            allowed,
        })
    }
}

/// ele-1: fails with `EmptyElement` when the element has no value and no children.
pub fn require_value_or_children<E: ElementContent + ?Sized>(
    element: &E,
    owner: &'static str,
) -> Result<(), ModelError> {
    if element.has_value() || element.has_children() {
        Ok(())
    } else {
        Err(ModelError::EmptyElement { owner })
    }
}

/// Resource type named by a literal reference, if it can be determined locally.
fn literal_resource_type(literal: &str) -> Option<&str> {
    if literal.starts_with('#') || literal.starts_with("urn:uuid:") || literal.starts_with("urn:oid:")
    {
        return None;
    }
    if let Some((resource_type, _query)) = literal.split_once('?') {
        // conditional references are only meaningful in relative form
        if resource_type.is_empty() || resource_type.contains(['/', ':']) {
            return None;
        }
        return Some(resource_type);
    }
    REFERENCE_PATTERN
        .captures(literal)
        .and_then(|captures| captures.get(RESOURCE_TYPE_GROUP))
        .map(|m| m.as_str())
}

/// `Reference.type` may be a canonical StructureDefinition URL; keep the last segment.
fn declared_resource_type(declared: &str) -> &str {
    declared.rsplit('/').next().unwrap_or(declared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_resource_type() {
        assert_eq!(literal_resource_type("Patient/123"), Some("Patient"));
        assert_eq!(
            literal_resource_type("http://example.org/fhir/Device/d1/_history/2"),
            Some("Device")
        );
        assert_eq!(literal_resource_type("Patient?identifier=abc"), Some("Patient"));
        assert_eq!(literal_resource_type("#contained-1"), None);
        assert_eq!(
            literal_resource_type("urn:uuid:53fefa32-fcbb-4ff8-8a92-55ee120877b7"),
            None
        );
        assert_eq!(literal_resource_type("Unknown/123"), None);
        assert_eq!(literal_resource_type("not a reference"), None);
    }

    #[test]
    fn test_declared_resource_type() {
        assert_eq!(declared_resource_type("Patient"), "Patient");
        assert_eq!(
            declared_resource_type("http://hl7.org/fhir/StructureDefinition/Patient"),
            "Patient"
        );
    }
}
