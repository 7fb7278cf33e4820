//! Depth-first traversal of model values.
//!
//! Every model type implements [`Visitable`], which exposes the value as a
//! [`ModelNode`] and feeds its populated children to a [`Visitor`] in
//! declaration order. [`accept`] drives the callbacks for one node:
//!
//! 1. `pre_visit(node)`: returning `false` skips the node entirely
//! 2. `visit_start(name, index, node)`
//! 3. `visit(name, index, node)`: returning `false` skips the children
//! 4. the children, depth first
//! 5. `visit_end(name, index, node)`
//! 6. `post_visit(node)`
//!
//! Lists are bracketed by `visit_list_start` / `visit_list_end` and their
//! entries carry `Some(position)` as index. Primitive values and plain string
//! attributes arrive through `visit_value`. Absent fields and empty lists are
//! never visited.
//!
//! ```rust
//! use atrius_fhir_model::datatypes::{CodeableConcept, Coding};
//! use atrius_fhir_model::primitives::{Code, Uri};
//! use atrius_fhir_model::visitor::{walk, PathCollector};
//!
//! let concept = CodeableConcept::builder()
//!     .add_coding(
//!         Coding::builder()
//!             .system(Uri::of("http://snomed.info/sct").unwrap())
//!             .code(Code::of("22298006").unwrap())
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut paths = PathCollector::default();
//! walk(&concept, &mut paths);
//! assert_eq!(
//!     paths.paths(),
//!     [
//!         "CodeableConcept",
//!         "CodeableConcept.coding[0]",
//!         "CodeableConcept.coding[0].system",
//!         "CodeableConcept.coding[0].code",
//!     ]
//! );
//! ```

use atrius_model_support::{ElementInfo, ModelInfo, ModelKind, TypeInfo};

use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::datatypes;
use crate::precise_decimal::PreciseDecimal;
use crate::primitives;
use crate::resources::{adverse_event, device, encounter, patient, practitioner};

/// A borrowed primitive value handed to [`Visitor::visit_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRef<'a> {
    Boolean(bool),
    Integer(i32),
    Integer64(i64),
    String(&'a str),
    Decimal(&'a PreciseDecimal),
    Date(&'a PrecisionDate),
    DateTime(&'a PrecisionDateTime),
    Time(&'a PrecisionTime),
    Instant(&'a PrecisionInstant),
}

macro_rules! model_nodes {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        /// A borrowed model value, one variant per model type.
        ///
        /// Choice values and the `Resource` enum have no variant of their own:
        /// they appear as the node of their populated member.
        #[derive(Debug, Clone, Copy)]
        pub enum ModelNode<'a> {
            $($variant(&'a $ty),)*
        }

        impl<'a> ModelNode<'a> {
            /// FHIR type name of the node, e.g. `"AdverseEvent.SuspectEntity"`.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$ty as TypeInfo>::type_name(),)*
                }
            }

            pub fn kind(&self) -> ModelKind {
                match self {
                    $(Self::$variant(_) => <$ty as ModelInfo>::kind(),)*
                }
            }

            pub fn elements(&self) -> &'static [ElementInfo] {
                match self {
                    $(Self::$variant(_) => <$ty as ModelInfo>::elements(),)*
                }
            }

            /// Feeds the node's children to `visitor`.
            pub fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                match self {
                    $(Self::$variant(node) => Visitable::accept_children(*node, visitor),)*
                }
            }
        }
    };
}

model_nodes! {
    Base64Binary => primitives::Base64Binary,
    Boolean => primitives::Boolean,
    Canonical => primitives::Canonical,
    Code => primitives::Code,
    Date => primitives::Date,
    DateTime => primitives::DateTime,
    Decimal => primitives::Decimal,
    Id => primitives::Id,
    Instant => primitives::Instant,
    Integer => primitives::Integer,
    Integer64 => primitives::Integer64,
    Markdown => primitives::Markdown,
    PositiveInt => primitives::PositiveInt,
    String => primitives::String,
    Time => primitives::Time,
    UnsignedInt => primitives::UnsignedInt,
    Uri => primitives::Uri,
    Url => primitives::Url,
    Xhtml => primitives::Xhtml,

    Address => datatypes::Address,
    Annotation => datatypes::Annotation,
    Attachment => datatypes::Attachment,
    CodeableConcept => datatypes::CodeableConcept,
    CodeableReference => datatypes::CodeableReference,
    Coding => datatypes::Coding,
    ContactPoint => datatypes::ContactPoint,
    Count => datatypes::Count,
    Duration => datatypes::Duration,
    Extension => datatypes::Extension,
    HumanName => datatypes::HumanName,
    Identifier => datatypes::Identifier,
    Meta => datatypes::Meta,
    Narrative => datatypes::Narrative,
    Period => datatypes::Period,
    Quantity => datatypes::Quantity,
    Range => datatypes::Range,
    Ratio => datatypes::Ratio,
    Reference => datatypes::Reference,
    RelatedArtifact => datatypes::RelatedArtifact,
    Timing => datatypes::Timing,
    TimingRepeat => datatypes::TimingRepeat,
    VirtualServiceDetail => datatypes::VirtualServiceDetail,

    AdverseEvent => adverse_event::AdverseEvent,
    AdverseEventParticipant => adverse_event::AdverseEventParticipant,
    AdverseEventSuspectEntity => adverse_event::AdverseEventSuspectEntity,
    AdverseEventSuspectEntityCausality => adverse_event::AdverseEventSuspectEntityCausality,
    AdverseEventContributingFactor => adverse_event::AdverseEventContributingFactor,
    AdverseEventPreventiveAction => adverse_event::AdverseEventPreventiveAction,
    AdverseEventMitigatingAction => adverse_event::AdverseEventMitigatingAction,
    AdverseEventSupportingInfo => adverse_event::AdverseEventSupportingInfo,

    Device => device::Device,
    DeviceUdiCarrier => device::DeviceUdiCarrier,
    DeviceName => device::DeviceName,
    DeviceVersion => device::DeviceVersion,
    DeviceConformsTo => device::DeviceConformsTo,
    DeviceProperty => device::DeviceProperty,

    Encounter => encounter::Encounter,
    EncounterParticipant => encounter::EncounterParticipant,
    EncounterReason => encounter::EncounterReason,
    EncounterDiagnosis => encounter::EncounterDiagnosis,
    EncounterAdmission => encounter::EncounterAdmission,
    EncounterLocation => encounter::EncounterLocation,

    Patient => patient::Patient,
    PatientContact => patient::PatientContact,
    PatientCommunication => patient::PatientCommunication,
    PatientLink => patient::PatientLink,

    Practitioner => practitioner::Practitioner,
    PractitionerQualification => practitioner::PractitionerQualification,
    PractitionerCommunication => practitioner::PractitionerCommunication,
}

/// Implemented by every model type, choice value and the `Resource` enum.
pub trait Visitable {
    fn as_node(&self) -> ModelNode<'_>;

    /// Feeds the populated children to `visitor` in declaration order.
    fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

/// Callbacks invoked during traversal. Every method has a no-op default.
#[allow(unused_variables)]
pub trait Visitor {
    fn pre_visit(&mut self, node: ModelNode<'_>) -> bool {
        true
    }

    fn visit_start(&mut self, name: &str, index: Option<usize>, node: ModelNode<'_>) {}

    /// Returning `false` keeps the walker out of this node's children.
    fn visit(&mut self, name: &str, index: Option<usize>, node: ModelNode<'_>) -> bool {
        true
    }

    fn visit_end(&mut self, name: &str, index: Option<usize>, node: ModelNode<'_>) {}

    fn post_visit(&mut self, node: ModelNode<'_>) {}

    fn visit_list_start(&mut self, name: &str, len: usize) {}

    fn visit_list_end(&mut self, name: &str, len: usize) {}

    fn visit_value(&mut self, name: &str, value: ValueRef<'_>) {}
}

/// Visits one element named `name`; `index` is its position within a list.
pub fn accept<T, V>(element: &T, name: &str, index: Option<usize>, visitor: &mut V)
where
    T: Visitable + ?Sized,
    V: Visitor + ?Sized,
{
    let node = element.as_node();
    if !visitor.pre_visit(node) {
        return;
    }
    visitor.visit_start(name, index, node);
    if visitor.visit(name, index, node) {
        element.accept_children(visitor);
    }
    visitor.visit_end(name, index, node);
    visitor.post_visit(node);
}

/// Visits a singular field if it is populated.
pub fn accept_field<T, V>(element: Option<&T>, name: &str, visitor: &mut V)
where
    T: Visitable + ?Sized,
    V: Visitor + ?Sized,
{
    if let Some(element) = element {
        accept(element, name, None, visitor);
    }
}

/// Visits every entry of a repeating field, bracketed by list events.
pub fn accept_list<T, V>(elements: &[T], name: &str, visitor: &mut V)
where
    T: Visitable,
    V: Visitor + ?Sized,
{
    if elements.is_empty() {
        return;
    }
    visitor.visit_list_start(name, elements.len());
    for (index, element) in elements.iter().enumerate() {
        accept(element, name, Some(index), visitor);
    }
    visitor.visit_list_end(name, elements.len());
}

/// Visits `root` and everything below it, naming the root by its type.
pub fn walk<T, V>(root: &T, visitor: &mut V)
where
    T: Visitable + ?Sized,
    V: Visitor + ?Sized,
{
    let name = root.as_node().type_name();
    accept(root, name, None, visitor);
}

/// Records the dotted path of every visited node.
///
/// Paths use FHIR element names and list positions, e.g.
/// `AdverseEvent.suspectEntity[0].instance`.
#[derive(Debug, Default, Clone)]
pub struct PathCollector {
    stack: Vec<std::string::String>,
    paths: Vec<std::string::String>,
}

impl PathCollector {
    pub fn paths(&self) -> &[std::string::String] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<std::string::String> {
        self.paths
    }
}

impl Visitor for PathCollector {
    fn visit_start(&mut self, name: &str, index: Option<usize>, _node: ModelNode<'_>) {
        let segment = match index {
            Some(index) => format!("{}[{}]", name, index),
            None => name.to_string(),
        };
        self.stack.push(segment);
        self.paths.push(self.stack.join("."));
    }

    fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: ModelNode<'_>) {
        self.stack.pop();
    }
}
