use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;
use crate::datatypes::{Annotation, CodeableConcept, Extension, Identifier, Meta, Narrative, Reference};
use crate::primitives::{Boolean, Code, DateTime, Id, Uri};
use crate::resources::Resource;

/// An event (i.e. any change to current patient status) that may be related
/// to unintended effects on a patient or research participant.
///
/// The unintended effects may require additional monitoring, treatment,
/// hospitalization, or may result in death. The AdverseEvent resource also
/// extends to potential or avoided events that could have had such effects.
///
/// See: [AdverseEvent](http://hl7.org/fhir/StructureDefinition/AdverseEvent)
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_model::datatypes::Reference;
/// use atrius_fhir_model::primitives::{Code, String};
/// use atrius_fhir_model::resources::AdverseEvent;
/// use atrius_model_support::ModelError;
///
/// let missing_subject = AdverseEvent::builder()
///     .status(Code::of("completed").unwrap())
///     .actuality(Code::of("actual").unwrap())
///     .build();
/// assert_eq!(
///     missing_subject.unwrap_err(),
///     ModelError::MissingRequiredField { owner: "AdverseEvent", element: "subject" }
/// );
///
/// let subject = Reference::builder()
///     .reference(String::of("Patient/example").unwrap())
///     .build()
///     .unwrap();
/// let event = AdverseEvent::builder()
///     .status(Code::of("completed").unwrap())
///     .actuality(Code::of("actual").unwrap())
///     .subject(subject)
///     .build()
///     .unwrap();
/// assert_eq!(event.to_builder().build().unwrap(), event);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent", kind = "resource")]
pub struct AdverseEvent {
    /// Logical id of this artifact
    #[fhir(summary)]
    id: Option<Id>,
    #[fhir(summary)]
    meta: Option<Meta>,
    #[fhir(summary)]
    implicit_rules: Option<Uri>,
    #[fhir(binding = "AllLanguages")]
    language: Option<Code>,
    text: Option<Narrative>,
    contained: Vec<Resource>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Business identifier for the event
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// in-progress | completed | entered-in-error | unknown
    #[fhir(required, summary, binding = "AdverseEventStatus")]
    status: Option<Code>,
    /// actual | potential
    #[fhir(required, summary, binding = "AdverseEventActuality")]
    actuality: Option<Code>,
    /// wrong-patient | procedure-mishap | medication-mishap | device | unsafe-physical-environment | hospital-aquired-infection | wrong-body-site
    #[fhir(summary, binding = "AdverseEventCategory")]
    category: Vec<CodeableConcept>,
    /// Event or incident that occurred or was averted
    #[fhir(summary, binding = "AdverseEventType")]
    code: Option<CodeableConcept>,
    /// Subject impacted by event
    #[fhir(
        required,
        summary,
        reference = "Patient, Group, Practitioner, RelatedPerson, ResearchSubject"
    )]
    subject: Option<Reference>,
    /// The Encounter associated with the start of the AdverseEvent
    #[fhir(summary, reference = "Encounter")]
    encounter: Option<Reference>,
    /// When the event occurred
    #[fhir(summary, choice = "dateTime, Period, Timing")]
    occurrence: Option<ChoiceValue>,
    /// When the event was detected
    #[fhir(summary)]
    detected: Option<DateTime>,
    /// When the event was recorded
    #[fhir(summary)]
    recorded_date: Option<DateTime>,
    /// Effect on the subject due to this event
    #[fhir(summary, reference = "Condition, Observation")]
    resulting_effect: Vec<Reference>,
    /// Location where adverse event occurred
    #[fhir(summary, reference = "Location")]
    location: Option<Reference>,
    /// Seriousness or gravity of the event
    #[fhir(summary, binding = "AdverseEventSeriousness")]
    seriousness: Option<CodeableConcept>,
    /// Type of outcome from the adverse event
    #[fhir(summary, binding = "AdverseEventOutcome")]
    outcome: Vec<CodeableConcept>,
    /// Who recorded the adverse event
    #[fhir(
        summary,
        reference = "Patient, Practitioner, PractitionerRole, RelatedPerson, ResearchSubject"
    )]
    recorder: Option<Reference>,
    /// Who was involved in the adverse event or the potential adverse event and what they did
    #[fhir(summary)]
    participant: Vec<AdverseEventParticipant>,
    /// Research study that the subject is enrolled in
    #[fhir(summary, reference = "ResearchStudy")]
    study: Vec<Reference>,
    /// Considered likely or probable or anticipated in the research study
    #[fhir(summary)]
    expected_in_research_study: Option<Boolean>,
    /// The suspected agent causing the adverse event
    #[fhir(summary)]
    suspect_entity: Vec<AdverseEventSuspectEntity>,
    /// Contributing factors suspected to have increased the probability or severity of the adverse event
    #[fhir(summary)]
    contributing_factor: Vec<AdverseEventContributingFactor>,
    /// Preventive actions that contributed to avoiding the adverse event
    #[fhir(summary)]
    preventive_action: Vec<AdverseEventPreventiveAction>,
    /// Ameliorating actions taken after the adverse event occured in order to reduce the extent of harm
    #[fhir(summary)]
    mitigating_action: Vec<AdverseEventMitigatingAction>,
    /// Supporting information relevant to the event
    #[fhir(summary)]
    supporting_info: Vec<AdverseEventSupportingInfo>,
    /// Comment on adverse event
    note: Vec<Annotation>,
}

/// Who was involved in the adverse event or the potential adverse event and
/// what they did.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent.Participant", kind = "backbone")]
pub struct AdverseEventParticipant {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Type of involvement
    #[fhir(summary, binding = "AdverseEventParticipantFunction")]
    function: Option<CodeableConcept>,
    /// Who was involved in the adverse event or the potential adverse event
    #[fhir(
        required,
        summary,
        reference = "Practitioner, PractitionerRole, Organization, CareTeam, Patient, Device, RelatedPerson, ResearchSubject"
    )]
    actor: Option<Reference>,
}

/// The suspected agent causing the adverse event.
///
/// Describes the entity that is suspected to have caused the adverse event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent.SuspectEntity", kind = "backbone")]
pub struct AdverseEventSuspectEntity {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Refers to the specific entity that caused the adverse event
    #[fhir(
        required,
        summary,
        choice = "CodeableConcept, Reference",
        reference = "Immunization, Procedure, Substance, Medication, MedicationAdministration, MedicationStatement, Device, BiologicallyDerivedProduct, ResearchStudy",
        binding = "AdverseEventAgent"
    )]
    instance: Option<ChoiceValue>,
    /// Information on the possible cause of the event
    #[fhir(summary)]
    causality: Option<AdverseEventSuspectEntityCausality>,
}

/// Information on the possible cause of the event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent.SuspectEntity.Causality", kind = "backbone")]
pub struct AdverseEventSuspectEntityCausality {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Method of evaluating the relatedness of the suspected entity to the event
    #[fhir(summary, binding = "AdverseEventCausalityMethod")]
    assessment_method: Option<CodeableConcept>,
    /// Result of the assessment regarding the relatedness of the suspected entity to the event
    #[fhir(summary, binding = "AdverseEventCausalityAssessment")]
    entity_relatedness: Option<CodeableConcept>,
    /// Author of the information on the possible cause of the event
    #[fhir(
        summary,
        reference = "Practitioner, PractitionerRole, Patient, RelatedPerson, ResearchSubject"
    )]
    author: Option<Reference>,
}

/// Contributing factors suspected to have increased the probability or
/// severity of the adverse event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent.ContributingFactor", kind = "backbone")]
pub struct AdverseEventContributingFactor {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Item suspected to have increased the probability or severity of the adverse event
    #[fhir(
        required,
        summary,
        choice = "Reference, CodeableConcept",
        reference = "Condition, Observation, AllergyIntolerance, FamilyMemberHistory, Immunization, Procedure, Device, DeviceUsage, DocumentReference, MedicationAdministration, MedicationStatement",
        binding = "AdverseEventContributingFactor"
    )]
    item: Option<ChoiceValue>,
}

/// Preventive actions that contributed to avoiding the adverse event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent.PreventiveAction", kind = "backbone")]
pub struct AdverseEventPreventiveAction {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Action that contributed to avoiding the adverse event
    #[fhir(
        required,
        summary,
        choice = "Reference, CodeableConcept",
        reference = "Immunization, Procedure, DocumentReference, MedicationAdministration, MedicationRequest",
        binding = "AdverseEventPreventiveAction"
    )]
    item: Option<ChoiceValue>,
}

/// Ameliorating actions taken after the adverse event occured in order to
/// reduce the extent of harm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent.MitigatingAction", kind = "backbone")]
pub struct AdverseEventMitigatingAction {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Ameliorating action taken after the adverse event occured in order to reduce the extent of harm
    #[fhir(
        required,
        summary,
        choice = "Reference, CodeableConcept",
        reference = "Procedure, DocumentReference, MedicationAdministration, MedicationRequest, MedicationStatement",
        binding = "AdverseEventMitigatingAction"
    )]
    item: Option<ChoiceValue>,
}

/// Supporting information relevant to the event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "AdverseEvent.SupportingInfo", kind = "backbone")]
pub struct AdverseEventSupportingInfo {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Subject medical history or document relevant to this adverse event
    #[fhir(
        required,
        summary,
        choice = "Reference, CodeableConcept",
        reference = "Condition, Observation, AllergyIntolerance, FamilyMemberHistory, Immunization, Procedure, DocumentReference, MedicationAdministration, MedicationStatement, QuestionnaireResponse",
        binding = "AdverseEventSupportingInfo"
    )]
    item: Option<ChoiceValue>,
}
