use atrius_macros::FhirModel;

use crate::datatypes::{
    CodeableConcept, CodeableReference, Duration, Extension, Identifier, Meta, Narrative, Period,
    Reference, VirtualServiceDetail,
};
use crate::primitives::{Code, DateTime, Id, Uri};
use crate::resources::Resource;

/// An interaction between healthcare provider(s), and/or patient(s) for the
/// purpose of providing healthcare service(s) or assessing the health status
/// of patient(s).
///
/// See: [Encounter](http://hl7.org/fhir/StructureDefinition/Encounter)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Encounter", kind = "resource")]
pub struct Encounter {
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
    /// Identifier(s) by which this encounter is known
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// planned | in-progress | on-hold | discharged | completed | cancelled | discontinued | entered-in-error | unknown
    #[fhir(required, summary, binding = "EncounterStatus")]
    status: Option<Code>,
    /// Classification of patient encounter context - e.g. Inpatient, outpatient
    #[fhir(rename = "class", summary, binding = "EncounterClass")]
    class_: Vec<CodeableConcept>,
    /// Indicates the urgency of the encounter
    #[fhir(binding = "EncounterPriority")]
    priority: Option<CodeableConcept>,
    /// Specific type of encounter (e.g. e-mail consultation, surgical day-care, ...)
    #[fhir(rename = "type", summary, binding = "EncounterType")]
    type_: Vec<CodeableConcept>,
    /// Specific type of service
    #[fhir(summary, binding = "EncounterServiceType")]
    service_type: Vec<CodeableReference>,
    /// The patient or group related to this encounter
    #[fhir(summary, reference = "Patient, Group")]
    subject: Option<Reference>,
    /// The current status of the subject in relation to the Encounter
    #[fhir(binding = "EncounterSubjectStatus")]
    subject_status: Option<CodeableConcept>,
    /// Episode(s) of care that this encounter should be recorded against
    #[fhir(summary, reference = "EpisodeOfCare")]
    episode_of_care: Vec<Reference>,
    /// The request that initiated this encounter
    #[fhir(reference = "CarePlan, DeviceRequest, MedicationRequest, ServiceRequest")]
    based_on: Vec<Reference>,
    /// The group(s) that are allocated to participate in this encounter
    #[fhir(reference = "CareTeam")]
    care_team: Vec<Reference>,
    /// Another Encounter this encounter is part of
    #[fhir(reference = "Encounter")]
    part_of: Option<Reference>,
    /// The organization (facility) responsible for this encounter
    #[fhir(reference = "Organization")]
    service_provider: Option<Reference>,
    /// List of participants involved in the encounter
    #[fhir(summary)]
    participant: Vec<EncounterParticipant>,
    /// The appointment that scheduled this encounter
    #[fhir(summary, reference = "Appointment")]
    appointment: Vec<Reference>,
    /// Connection details of a virtual service (e.g. conference call)
    virtual_service: Vec<VirtualServiceDetail>,
    /// The actual start and end time of the encounter
    actual_period: Option<Period>,
    /// The planned start date/time (or admission date) of the encounter
    planned_start_date: Option<DateTime>,
    /// The planned end date/time (or discharge date) of the encounter
    planned_end_date: Option<DateTime>,
    /// Actual quantity of time the encounter lasted (less time absent)
    length: Option<Duration>,
    /// The list of medical reasons that are expected to be addressed during the episode of care
    #[fhir(summary)]
    reason: Vec<EncounterReason>,
    /// The list of diagnosis relevant to this encounter
    #[fhir(summary)]
    diagnosis: Vec<EncounterDiagnosis>,
    /// The set of accounts that may be used for billing for this Encounter
    #[fhir(reference = "Account")]
    account: Vec<Reference>,
    /// Diet preferences reported by the patient
    #[fhir(binding = "PatientDiet")]
    diet_preference: Vec<CodeableConcept>,
    /// Wheelchair, translator, stretcher, etc
    #[fhir(binding = "SpecialArrangements")]
    special_arrangement: Vec<CodeableConcept>,
    /// Special courtesies (VIP, board member)
    #[fhir(binding = "Courtesies")]
    special_courtesy: Vec<CodeableConcept>,
    /// Details about the admission to a healthcare service
    admission: Option<EncounterAdmission>,
    /// List of locations where the patient has been
    location: Vec<EncounterLocation>,
}

/// List of participants involved in the encounter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Encounter.Participant", kind = "backbone")]
pub struct EncounterParticipant {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Role of participant in encounter
    #[fhir(rename = "type", summary, binding = "ParticipantType")]
    type_: Vec<CodeableConcept>,
    /// Period of time during the encounter that the participant participated
    period: Option<Period>,
    /// The individual, device, or service participating in the encounter
    #[fhir(
        summary,
        reference = "Patient, Group, RelatedPerson, Practitioner, PractitionerRole, Device, HealthcareService"
    )]
    actor: Option<Reference>,
}

/// The list of medical reasons that are expected to be addressed during the
/// episode of care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Encounter.Reason", kind = "backbone")]
pub struct EncounterReason {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// What the reason value should be used for/as
    #[fhir(rename = "use", summary, binding = "EncounterReasonUse")]
    use_: Vec<CodeableConcept>,
    /// Reason the encounter takes place (core or reference)
    #[fhir(summary, binding = "EncounterReason")]
    value: Vec<CodeableReference>,
}

/// The list of diagnosis relevant to this encounter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Encounter.Diagnosis", kind = "backbone")]
pub struct EncounterDiagnosis {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// The diagnosis relevant to the encounter
    #[fhir(summary, binding = "EncounterDiagnosis")]
    condition: Vec<CodeableReference>,
    /// Role that this diagnosis has within the encounter (e.g. admission, billing, discharge …)
    #[fhir(rename = "use", binding = "EncounterDiagnosisUse")]
    use_: Vec<CodeableConcept>,
}

/// Details about the admission to a healthcare service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Encounter.Admission", kind = "backbone")]
pub struct EncounterAdmission {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Pre-admission identifier
    pre_admission_identifier: Option<Identifier>,
    /// The location/organization from which the patient came before admission
    #[fhir(reference = "Location, Organization")]
    origin: Option<Reference>,
    /// From where patient was admitted (physician referral, transfer)
    #[fhir(binding = "AdmitSource")]
    admit_source: Option<CodeableConcept>,
    /// Indicates that the patient is being re-admitted
    #[fhir(binding = "ReAdmissionType")]
    re_admission: Option<CodeableConcept>,
    /// Location/organization to which the patient is discharged
    #[fhir(reference = "Location, Organization")]
    destination: Option<Reference>,
    /// Category or kind of location after discharge
    #[fhir(binding = "DischargeDisp")]
    discharge_disposition: Option<CodeableConcept>,
}

/// List of locations where the patient has been.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Encounter.Location", kind = "backbone")]
pub struct EncounterLocation {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// Location the encounter takes place
    #[fhir(required, reference = "Location")]
    location: Option<Reference>,
    /// planned | active | reserved | completed
    #[fhir(binding = "EncounterLocationStatus")]
    status: Option<Code>,
    /// The physical type of the location (usually the level in the location hierarchy - bed, room, ward, virtual etc.)
    #[fhir(binding = "LocationForm")]
    form: Option<CodeableConcept>,
    /// Time period during which the patient was present at the location
    period: Option<Period>,
}
