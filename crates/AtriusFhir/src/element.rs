use std::fmt;
use std::hash::Hash;

use atrius_model_support::validate::{check_list, require_value_or_children};
use atrius_model_support::{ElementContent, ElementInfo, ModelError, ModelInfo, ModelKind, TypeInfo};

use crate::datatypes::Extension;
use crate::visitor::{accept_list, ModelNode, ValueRef, Visitable, Visitor};

/// Behaviour shared by every FHIR primitive type.
///
/// A kind names the primitive, fixes the Rust type of its value and checks
/// the value's lexical constraints. See [`crate::primitives`] for the kinds.
pub trait PrimitiveKind: Sized + 'static {
    type Value: fmt::Debug + Clone + PartialEq + Eq + Hash + Send + Sync;

    /// FHIR type code, e.g. `"dateTime"`.
    const NAME: &'static str;

    /// Element metadata: `id`, `extension` and `value`.
    const ELEMENTS: &'static [ElementInfo];

    /// Parses the FHIR text form of a value.
    fn parse(text: &str) -> Option<Self::Value>;

    /// Checks constraints the Rust value type does not capture.
    fn check(_value: &Self::Value) -> Result<(), ModelError> {
        Ok(())
    }

    fn value_ref(value: &Self::Value) -> ValueRef<'_>;

    fn node(element: &Element<Self>) -> ModelNode<'_>;
}

/// A FHIR primitive element: an optional value plus `id` and extensions.
///
/// In FHIR any primitive can carry an `id` and extensions next to (or instead
/// of) its value. Values are immutable; build them with [`Element::of`],
/// [`Element::parse`] or [`Element::builder`].
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_model::primitives::{Code, DateTime};
///
/// let status = Code::of("completed").unwrap();
/// assert_eq!(status.value().map(String::as_str), Some("completed"));
///
/// let when = DateTime::parse("2024-05-01T09:30:00Z").unwrap();
/// assert_eq!(when.value().unwrap().original_string(), "2024-05-01T09:30:00Z");
///
/// assert!(Code::of(" leading space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element<K: PrimitiveKind> {
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    value: Option<K::Value>,
}

impl<K: PrimitiveKind> Element<K> {
    /// Builds a validated element holding `value`.
    pub fn of(value: impl Into<K::Value>) -> Result<Self, ModelError> {
        Self::builder().value(value).build()
    }

    /// Parses the FHIR text form of the value and builds a validated element.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        let value = K::parse(text).ok_or_else(|| ModelError::InvalidValue {
            type_name: K::NAME,
            reason: format!("'{}' is not a valid {}", text, K::NAME),
        })?;
        Self::of(value)
    }

    pub fn builder() -> ElementBuilder<K> {
        ElementBuilder::default()
    }

    pub fn to_builder(&self) -> ElementBuilder<K> {
        ElementBuilder {
            validating: true,
            id: self.id.clone(),
            extension: self.extension.iter().cloned().map(Some).collect(),
            value: self.value.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn value(&self) -> Option<&K::Value> {
        self.value.as_ref()
    }
}

/// Builder for [`Element`].
#[derive(Debug, Clone)]
pub struct ElementBuilder<K: PrimitiveKind> {
    validating: bool,
    id: Option<std::string::String>,
    extension: Vec<Option<Extension>>,
    value: Option<K::Value>,
}

impl<K: PrimitiveKind> Default for ElementBuilder<K> {
    fn default() -> Self {
        Self {
            validating: true,
            id: None,
            extension: Vec::new(),
            value: None,
        }
    }
}

impl<K: PrimitiveKind> ElementBuilder<K> {
    pub fn validating(mut self, validating: bool) -> Self {
        self.validating = validating;
        self
    }

    pub fn id(mut self, id: impl Into<std::string::String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Extension>>,
    {
        self.extension = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_extension(mut self, value: impl Into<Option<Extension>>) -> Self {
        self.extension.push(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<K::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Element<K>, ModelError> {
        if self.validating {
            check_list(&self.extension, K::NAME, "extension")?;
            if let Some(value) = &self.value {
                K::check(value)?;
            }
        } else {
            tracing::trace!(type_name = K::NAME, "building without validation");
        }
        let element = Element {
            id: self.id,
            extension: self.extension.into_iter().flatten().collect(),
            value: self.value,
        };
        if self.validating {
            require_value_or_children(&element, K::NAME)?;
        }
        Ok(element)
    }
}

impl<K: PrimitiveKind> ElementContent for Element<K> {
    fn has_value(&self) -> bool {
        self.value.is_some()
    }

    fn has_children(&self) -> bool {
        !self.extension.is_empty()
    }
}

impl<K: PrimitiveKind> TypeInfo for Element<K> {
    fn type_name() -> &'static str {
        K::NAME
    }
}

impl<K: PrimitiveKind> ModelInfo for Element<K> {
    fn kind() -> ModelKind {
        ModelKind::Primitive
    }

    fn elements() -> &'static [ElementInfo] {
        K::ELEMENTS
    }
}

impl<K: PrimitiveKind> Visitable for Element<K> {
    fn as_node(&self) -> ModelNode<'_> {
        K::node(self)
    }

    fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if let Some(id) = self.id.as_deref() {
            visitor.visit_value("id", ValueRef::String(id));
        }
        accept_list(&self.extension, "extension", visitor);
        if let Some(value) = &self.value {
            visitor.visit_value("value", K::value_ref(value));
        }
    }
}
