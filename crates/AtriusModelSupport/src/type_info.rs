//! # Model Type Information
//!
//! Type names and per-element metadata for generated model types. The metadata
//! mirrors the declarative contract each element carries: cardinality, choice
//! types, reference targets, binding and summary membership.

/// Trait for types that can provide their FHIR type information.
///
/// Primitive types report their FHIR code (`"dateTime"`), complex types and
/// resources their type name (`"Quantity"`, `"Patient"`) and backbone elements
/// their path within the declaring resource (`"AdverseEvent.SuspectEntity"`).
pub trait TypeInfo {
    /// Returns the namespace for this type (e.g., "FHIR", "System").
    fn type_namespace() -> &'static str {
        "FHIR"
    }

    /// Returns the name of this type within its namespace.
    fn type_name() -> &'static str;
}

/// Category of a generated model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Resource,
    Backbone,
    Datatype,
    Primitive,
}

impl ModelKind {
    /// Parses the kind names accepted by `#[fhir_model(kind = "...")]`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "resource" => Some(ModelKind::Resource),
            "backbone" => Some(ModelKind::Backbone),
            "datatype" => Some(ModelKind::Datatype),
            "primitive" => Some(ModelKind::Primitive),
            _ => None,
        }
    }

    /// Whether instances of this kind must satisfy ele-1 (value or children).
    pub fn requires_value_or_children(&self) -> bool {
        !matches!(self, ModelKind::Resource)
    }
}

/// Metadata describing one element of a model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    /// FHIR element name without any choice suffix (`value`, `class`).
    pub name: &'static str,
    /// Declared type; choice elements report `Element`.
    pub type_name: &'static str,
    /// Type that declares the element.
    pub declaring_type: &'static str,
    pub required: bool,
    pub repeating: bool,
    pub choice: bool,
    pub choice_types: &'static [&'static str],
    pub reference: bool,
    pub reference_types: &'static [&'static str],
    /// Name of the value set binding, if the element is coded.
    pub binding: Option<&'static str>,
    pub summary: bool,
}

impl ElementInfo {
    /// Returns `true` if the choice element accepts `type_name`.
    pub fn is_choice_type_allowed(&self, type_name: &str) -> bool {
        self.choice && self.choice_types.contains(&type_name)
    }

    /// Returns `true` if the reference element accepts targets of `resource_type`.
    pub fn is_reference_type_allowed(&self, resource_type: &str) -> bool {
        self.reference
            && (self.reference_types.contains(&"Resource")
                || self.reference_types.contains(&resource_type))
    }
}

/// Element metadata for a generated model type.
pub trait ModelInfo: TypeInfo {
    /// Category of the type.
    fn kind() -> ModelKind;

    /// Elements in declaration order, inherited elements first.
    fn elements() -> &'static [ElementInfo];

    /// Looks up an element by its FHIR name.
    fn element(name: &str) -> Option<&'static ElementInfo> {
        Self::elements().iter().find(|info| info.name == name)
    }
}

/// Returns the serialized name of a populated choice element.
///
/// ```rust
/// use atrius_model_support::choice_element_name;
///
/// assert_eq!(choice_element_name("value", "Quantity"), "valueQuantity");
/// assert_eq!(choice_element_name("occurrence", "dateTime"), "occurrenceDateTime");
/// ```
pub fn choice_element_name(name: &str, type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", name, first.to_uppercase(), chars.as_str()),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_element_name() {
        assert_eq!(choice_element_name("instance", "CodeableConcept"), "instanceCodeableConcept");
        assert_eq!(choice_element_name("deceased", "boolean"), "deceasedBoolean");
        assert_eq!(choice_element_name("value", ""), "value");
    }

    #[test]
    fn test_reference_type_allowed() {
        let info = ElementInfo {
            name: "subject",
            type_name: "Reference",
            declaring_type: "Encounter",
            required: false,
            repeating: false,
            choice: false,
            choice_types: &[],
            reference: true,
            reference_types: &["Patient", "Group"],
            binding: None,
            summary: true,
        };
        assert!(info.is_reference_type_allowed("Group"));
        assert!(!info.is_reference_type_allowed("Device"));
        assert!(!info.is_choice_type_allowed("Reference"));
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(ModelKind::from_name("backbone"), Some(ModelKind::Backbone));
        assert_eq!(ModelKind::from_name("element"), None);
        assert!(!ModelKind::Resource.requires_value_or_children());
        assert!(ModelKind::Datatype.requires_value_or_children());
    }
}
