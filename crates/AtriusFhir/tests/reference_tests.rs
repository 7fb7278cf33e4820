mod common;

use atrius_fhir_model::datatypes::{Annotation, CodeableReference, Identifier, Reference, RelatedArtifact};
use atrius_fhir_model::primitives::{Markdown, Uri};
use atrius_fhir_model::resources::{AdverseEvent, AdverseEventSuspectEntity, Encounter, Patient};
use atrius_model_support::{ModelError, ReferenceLike};
use common::{code, init_tracing, reference, string, typed_reference};

fn event_with_subject(subject: Reference) -> Result<AdverseEvent, ModelError> {
    AdverseEvent::builder()
        .status(code("completed"))
        .actuality(code("actual"))
        .subject(subject)
        .build()
}

#[test]
fn test_suspect_entity_patient_reference() {
    init_tracing();
    let err = AdverseEventSuspectEntity::builder()
        .instance(reference("Patient/123"))
        .build()
        .unwrap_err();

    match err {
        ModelError::InvalidReferenceTarget {
            owner,
            element,
            actual,
            allowed,
        } => {
            assert_eq!(owner, "AdverseEvent.SuspectEntity");
            assert_eq!(element, "instance");
            assert_eq!(actual, "Patient");
            assert!(allowed.contains(&"Medication"));
            assert!(!allowed.contains(&"Patient"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_suspect_entity_allowed_reference() {
    let suspect = AdverseEventSuspectEntity::builder()
        .instance(reference("Medication/aspirin"))
        .build()
        .unwrap();
    let instance = suspect.instance().and_then(|i| i.as_reference()).unwrap();
    assert_eq!(instance.reference_literal(), Some("Medication/aspirin"));
}

#[test]
fn test_literal_forms() {
    for literal in [
        "Patient/example",
        "Group/g1",
        "http://example.org/fhir/Patient/123",
        "https://example.org/fhir/Patient/123/_history/2",
        "Patient?identifier=http://example.org/mrn|12345",
    ] {
        assert!(event_with_subject(reference(literal)).is_ok(), "{literal}");
    }

    for literal in [
        "Device/d1",
        "http://example.org/fhir/Device/d1",
        "Medication/m1/_history/1",
        "Device?udi-di=123",
    ] {
        let err = event_with_subject(reference(literal)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidReferenceTarget { element: "subject", .. }), "{literal}");
    }
}

#[test]
fn test_unresolvable_references_pass() {
    for literal in [
        "#contained-patient",
        "urn:uuid:53fefa32-fcbb-4ff8-8a92-55ee120877b7",
        "urn:oid:1.2.3.4",
        "NotAResource/1",
        "http://example.org/fhir/Patient?name=x",
    ] {
        assert!(event_with_subject(reference(literal)).is_ok(), "{literal}");
    }

    let by_identifier = Reference::builder()
        .identifier(
            Identifier::builder()
                .system(Uri::of("http://example.org/mrn").unwrap())
                .value(string("12345"))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert!(event_with_subject(by_identifier).is_ok());
}

#[test]
fn test_type_only_reference() {
    assert!(event_with_subject(typed_reference("ResearchSubject")).is_ok());
    assert!(event_with_subject(typed_reference("http://hl7.org/fhir/StructureDefinition/Patient")).is_ok());

    let err = event_with_subject(typed_reference("Device")).unwrap_err();
    assert!(matches!(err, ModelError::InvalidReferenceTarget { .. }));

    // a contained reference falls back to the declared type
    let contained = Reference::builder()
        .reference(string("#dev"))
        .type_(Uri::of("Device").unwrap())
        .build()
        .unwrap();
    assert!(event_with_subject(contained).is_err());
}

#[test]
fn test_literal_and_type_disagree() {
    let subject = Reference::builder()
        .reference(string("Patient/1"))
        .type_(Uri::of("Group").unwrap())
        .build()
        .unwrap();
    assert_eq!(
        event_with_subject(subject).unwrap_err(),
        ModelError::ReferenceTypeMismatch {
            owner: "AdverseEvent",
            element: "subject",
            literal: "Patient".to_string(),
            declared: "Group".to_string(),
        }
    );

    let agreeing = Reference::builder()
        .reference(string("Patient/1"))
        .type_(Uri::of("Patient").unwrap())
        .build()
        .unwrap();
    assert!(event_with_subject(agreeing).is_ok());
}

#[test]
fn test_each_list_entry_is_checked() {
    let err = Encounter::builder()
        .status(code("in-progress"))
        .add_account(reference("Account/a1"))
        .add_account(reference("Patient/p1"))
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidReferenceTarget { element: "account", ref actual, .. } if actual == "Patient"
    ));

    let encounter = Encounter::builder()
        .status(code("in-progress"))
        .add_based_on(reference("ServiceRequest/s1"))
        .add_based_on(reference("CarePlan/c1"))
        .build()
        .unwrap();
    assert_eq!(encounter.based_on().len(), 2);
}

#[test]
fn test_choice_reference_member_is_checked() {
    let by_device = Annotation::builder()
        .author(reference("Device/d1"))
        .text(Markdown::of("checked").unwrap())
        .build();
    assert!(matches!(by_device, Err(ModelError::InvalidReferenceTarget { element: "author", .. })));

    let by_name = Annotation::builder()
        .author(string("Dr. Adams"))
        .text(Markdown::of("checked").unwrap())
        .build()
        .unwrap();
    assert!(by_name.author().is_some_and(|a| a.is_string()));
}

#[test]
fn test_any_resource_target() {
    let artifact = RelatedArtifact::builder()
        .type_(code("documentation"))
        .resource_reference(reference("Device/d1"))
        .build()
        .unwrap();
    assert!(artifact.resource_reference().is_some());
}

#[test]
fn test_codeable_reference_targets_are_not_checked() {
    let service = CodeableReference::builder()
        .reference(reference("Patient/p1"))
        .build()
        .unwrap();
    let encounter = Encounter::builder()
        .status(code("planned"))
        .add_service_type(service)
        .build()
        .unwrap();
    assert_eq!(encounter.service_type().len(), 1);
}

#[test]
fn test_backbone_and_patient_references() {
    let patient = Patient::builder()
        .managing_organization(reference("Organization/o1"))
        .add_general_practitioner(reference("PractitionerRole/r1"))
        .build()
        .unwrap();
    assert!(patient.managing_organization().is_some());

    let err = Patient::builder()
        .managing_organization(reference("Practitioner/x"))
        .build()
        .unwrap_err();
    assert_eq!(err.path(), "Patient.managingOrganization");
}
