use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;
use crate::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta,
    Narrative, Period, Reference,
};
use crate::primitives::{Boolean, Code, Date, Id, Uri};
use crate::resources::Resource;

/// Demographics and other administrative information about an individual or
/// animal receiving care or other health-related services.
///
/// See: [Patient](http://hl7.org/fhir/StructureDefinition/Patient)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Patient", kind = "resource")]
pub struct Patient {
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
    /// An identifier for this patient
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// Whether this patient's record is in active use
    #[fhir(summary)]
    active: Option<Boolean>,
    /// A name associated with the patient
    #[fhir(summary)]
    name: Vec<HumanName>,
    /// A contact detail for the individual
    #[fhir(summary)]
    telecom: Vec<ContactPoint>,
    /// male | female | other | unknown
    #[fhir(summary, binding = "AdministrativeGender")]
    gender: Option<Code>,
    /// The date of birth for the individual
    #[fhir(summary)]
    birth_date: Option<Date>,
    /// Indicates if the individual is deceased or not
    #[fhir(summary, choice = "boolean, dateTime")]
    deceased: Option<ChoiceValue>,
    /// An address for the individual
    #[fhir(summary)]
    address: Vec<Address>,
    /// Marital (civil) status of a patient
    #[fhir(binding = "MaritalStatus")]
    marital_status: Option<CodeableConcept>,
    /// Whether patient is part of a multiple birth
    #[fhir(choice = "boolean, integer")]
    multiple_birth: Option<ChoiceValue>,
    /// Image of the patient
    photo: Vec<Attachment>,
    /// A contact party (e.g. guardian, partner, friend) for the patient
    contact: Vec<PatientContact>,
    /// A language which may be used to communicate with the patient about his or her health
    communication: Vec<PatientCommunication>,
    /// Patient's nominated primary care provider
    #[fhir(reference = "Organization, Practitioner, PractitionerRole")]
    general_practitioner: Vec<Reference>,
    /// Organization that is the custodian of the patient record
    #[fhir(summary, reference = "Organization")]
    managing_organization: Option<Reference>,
    /// Link to a Patient or RelatedPerson resource that concerns the same actual individual
    #[fhir(summary)]
    link: Vec<PatientLink>,
}

/// A contact party (e.g. guardian, partner, friend) for the patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Patient.Contact", kind = "backbone")]
pub struct PatientContact {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// The kind of relationship
    #[fhir(binding = "ContactRelationship")]
    relationship: Vec<CodeableConcept>,
    name: Option<HumanName>,
    telecom: Vec<ContactPoint>,
    address: Option<Address>,
    #[fhir(binding = "AdministrativeGender")]
    gender: Option<Code>,
    /// Organization that is associated with the contact
    #[fhir(reference = "Organization")]
    organization: Option<Reference>,
    /// The period during which this contact person or organization is valid to be contacted relating to this patient
    period: Option<Period>,
}

/// A language which may be used to communicate with the patient about his or
/// her health.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Patient.Communication", kind = "backbone")]
pub struct PatientCommunication {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// The language which can be used to communicate with the patient about his or her health
    #[fhir(required, binding = "AllLanguages")]
    language: Option<CodeableConcept>,
    /// Language preference indicator
    preferred: Option<Boolean>,
}

/// Link to a Patient or RelatedPerson resource that concerns the same actual
/// individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Patient.Link", kind = "backbone")]
pub struct PatientLink {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// The other patient or related person resource that the link refers to
    #[fhir(required, summary, reference = "Patient, RelatedPerson")]
    other: Option<Reference>,
    /// replaced-by | replaces | refer | seealso
    #[fhir(rename = "type", required, summary, binding = "LinkType")]
    type_: Option<Code>,
}
