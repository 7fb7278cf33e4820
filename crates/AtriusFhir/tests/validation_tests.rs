mod common;

use atrius_fhir_model::choice::ChoiceValue;
use atrius_fhir_model::datatypes::{Extension, HumanName, Narrative};
use atrius_fhir_model::primitives::{Boolean, Uri, Xhtml};
use atrius_fhir_model::resources::{
    AdverseEvent, AdverseEventSuspectEntity, AdverseEventSuspectEntityCausality, DeviceName,
    DeviceUdiCarrier, Encounter, EncounterLocation, Patient, PatientCommunication,
};
use atrius_model_support::ModelError;
use common::{code, concept, reference, string};

#[test]
fn test_adverse_event_without_subject() {
    let err = AdverseEvent::builder()
        .status(code("completed"))
        .actuality(code("actual"))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        ModelError::MissingRequiredField {
            owner: "AdverseEvent",
            element: "subject"
        }
    );
    assert_eq!(err.element(), Some("subject"));
    assert_eq!(err.path(), "AdverseEvent.subject");
    assert_eq!(err.to_string(), "Missing required element: 'AdverseEvent.subject'");
}

#[test]
fn test_first_violation_in_declaration_order() {
    // status, actuality and subject are all missing; status is declared first
    let err = AdverseEvent::builder().build().unwrap_err();
    assert_eq!(err.element(), Some("status"));

    let err = AdverseEvent::builder()
        .status(code("completed"))
        .build()
        .unwrap_err();
    assert_eq!(err.element(), Some("actuality"));
}

#[test]
fn test_minimal_adverse_event_builds() {
    let event = common::adverse_event();
    assert_eq!(event.status().and_then(|s| s.value()).map(|s| s.as_str()), Some("completed"));
    assert!(event.suspect_entity().is_empty());
    assert!(event.occurrence().is_none());
}

#[test]
fn test_empty_backbone_is_rejected() {
    let err = AdverseEventSuspectEntityCausality::builder().build().unwrap_err();
    assert_eq!(
        err,
        ModelError::EmptyElement {
            owner: "AdverseEvent.SuspectEntity.Causality"
        }
    );

    let causality = AdverseEventSuspectEntityCausality::builder()
        .assessment_method(concept("expert judgement"))
        .build()
        .unwrap();
    assert_eq!(causality.assessment_method(), Some(&concept("expert judgement")));
}

#[test]
fn test_element_id_alone_is_not_content() {
    let err = AdverseEventSuspectEntityCausality::builder()
        .id("c1")
        .build()
        .unwrap_err();
    assert!(matches!(err, ModelError::EmptyElement { .. }));
}

#[test]
fn test_extension_alone_is_content() {
    let extension = Extension::builder()
        .url("http://example.org/fhir/StructureDefinition/note")
        .value(string("reviewed"))
        .build()
        .unwrap();
    let causality = AdverseEventSuspectEntityCausality::builder()
        .add_extension(extension)
        .build()
        .unwrap();
    assert_eq!(causality.extension().len(), 1);
}

#[test]
fn test_resources_may_be_empty() {
    let patient = Patient::builder().build().unwrap();
    assert!(patient.id().is_none());
    assert!(patient.name().is_empty());
}

#[test]
fn test_null_list_entry() {
    let name = HumanName::builder().family(string("Chalmers")).build().unwrap();

    let err = Patient::builder()
        .add_name(name.clone())
        .add_name(None::<HumanName>)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::NullListElement {
            owner: "Patient",
            element: "name",
            index: 1
        }
    );

    let err = Patient::builder()
        .name(vec![None, Some(name)])
        .build()
        .unwrap_err();
    assert!(matches!(err, ModelError::NullListElement { index: 0, .. }));
}

#[test]
fn test_list_setter_replaces_and_add_appends() {
    let first = HumanName::builder().family(string("First")).build().unwrap();
    let second = HumanName::builder().family(string("Second")).build().unwrap();
    let third = HumanName::builder().family(string("Third")).build().unwrap();

    let patient = Patient::builder()
        .add_name(first)
        .name(vec![second.clone()])
        .add_name(third.clone())
        .build()
        .unwrap();
    assert_eq!(patient.name(), [second, third]);
}

#[test]
fn test_validation_can_be_turned_off() {
    let event = AdverseEvent::builder().validating(false).build().unwrap();
    assert!(event.subject().is_none());

    let causality = AdverseEventSuspectEntityCausality::builder()
        .validating(false)
        .build()
        .unwrap();
    assert!(causality.author().is_none());

    let suspect = AdverseEventSuspectEntity::builder()
        .validating(false)
        .instance(reference("Patient/1"))
        .build()
        .unwrap();
    assert!(suspect.instance().is_some_and(ChoiceValue::is_reference));
}

#[test]
fn test_unvalidated_build_drops_null_entries() {
    let name = HumanName::builder().family(string("Chalmers")).build().unwrap();
    let patient = Patient::builder()
        .validating(false)
        .add_name(None::<HumanName>)
        .add_name(name.clone())
        .build()
        .unwrap();
    assert_eq!(patient.name(), [name]);
}

#[test]
fn test_required_backbone_elements() {
    let err = EncounterLocation::builder()
        .status(code("active"))
        .build()
        .unwrap_err();
    assert_eq!(err.path(), "Encounter.Location.location");

    let err = DeviceUdiCarrier::builder()
        .device_identifier(string("09504000059118"))
        .build()
        .unwrap_err();
    assert_eq!(err.path(), "Device.UdiCarrier.issuer");

    let err = DeviceName::builder()
        .value(string("Pump"))
        .build()
        .unwrap_err();
    assert_eq!(err.path(), "Device.Name.type");

    let err = PatientCommunication::builder()
        .preferred(Boolean::of(true).unwrap())
        .build()
        .unwrap_err();
    assert_eq!(err.path(), "Patient.Communication.language");
}

#[test]
fn test_extension_url_and_content() {
    let err = Extension::builder()
        .value(Boolean::of(true).unwrap())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingRequiredField {
            owner: "Extension",
            element: "url"
        }
    );

    // url is an attribute, so it does not count as content
    let err = Extension::builder()
        .url("http://example.org/fhir/StructureDefinition/flag")
        .build()
        .unwrap_err();
    assert_eq!(err, ModelError::EmptyElement { owner: "Extension" });

    let nested = Extension::builder()
        .url("http://example.org/fhir/StructureDefinition/flag")
        .add_extension(
            Extension::builder()
                .url("part")
                .value(code("a"))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(nested.url(), Some("http://example.org/fhir/StructureDefinition/flag"));
    assert!(nested.value().is_none());
}

#[test]
fn test_narrative_requires_div() {
    let err = Narrative::builder()
        .status(code("generated"))
        .build()
        .unwrap_err();
    assert_eq!(err.path(), "Narrative.div");

    let narrative = Narrative::builder()
        .status(code("generated"))
        .div(Xhtml::of("<div xmlns=\"http://www.w3.org/1999/xhtml\">Fever</div>").unwrap())
        .build()
        .unwrap();
    let encounter = Encounter::builder()
        .text(narrative)
        .status(code("completed"))
        .build()
        .unwrap();
    assert!(encounter.text().is_some());
}

#[test]
fn test_children_are_validated_when_built() {
    let err = Uri::of("has space").unwrap_err();
    assert!(matches!(err, ModelError::InvalidValue { type_name: "uri", .. }));
}
