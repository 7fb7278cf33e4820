use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;
use crate::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, Extension, HumanName, Identifier, Meta,
    Narrative, Period, Reference,
};
use crate::primitives::{Boolean, Code, Date, Id, Uri};
use crate::resources::Resource;

/// A person who is directly or indirectly involved in the provisioning of
/// healthcare or related services.
///
/// See: [Practitioner](http://hl7.org/fhir/StructureDefinition/Practitioner)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Practitioner", kind = "resource")]
pub struct Practitioner {
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
    #[fhir(summary)]
    identifier: Vec<Identifier>,
    /// Whether this practitioner's record is in active use
    #[fhir(summary)]
    active: Option<Boolean>,
    /// The name(s) associated with the practitioner
    #[fhir(summary)]
    name: Vec<HumanName>,
    #[fhir(summary)]
    telecom: Vec<ContactPoint>,
    #[fhir(summary, binding = "AdministrativeGender")]
    gender: Option<Code>,
    #[fhir(summary)]
    birth_date: Option<Date>,
    /// Indicates if the practitioner is deceased or not
    #[fhir(summary, choice = "boolean, dateTime")]
    deceased: Option<ChoiceValue>,
    #[fhir(summary)]
    address: Vec<Address>,
    photo: Vec<Attachment>,
    /// Qualifications, certifications, accreditations, licenses, training, etc. pertaining to the provision of care
    qualification: Vec<PractitionerQualification>,
    /// A language which may be used to communicate with the practitioner
    communication: Vec<PractitionerCommunication>,
}

/// Qualifications, certifications, accreditations, licenses, training, etc.
/// pertaining to the provision of care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Practitioner.Qualification", kind = "backbone")]
pub struct PractitionerQualification {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// An identifier for this qualification for the practitioner
    identifier: Vec<Identifier>,
    /// Coded representation of the qualification
    #[fhir(required, binding = "Qualification")]
    code: Option<CodeableConcept>,
    /// Period during which the qualification is valid
    period: Option<Period>,
    /// Organization that regulates and issues the qualification
    #[fhir(reference = "Organization")]
    issuer: Option<Reference>,
}

/// A language which may be used to communicate with the practitioner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Practitioner.Communication", kind = "backbone")]
pub struct PractitionerCommunication {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// The language code used to communicate with the practitioner
    #[fhir(required, binding = "AllLanguages")]
    language: Option<CodeableConcept>,
    /// Language preference indicator
    preferred: Option<Boolean>,
}
