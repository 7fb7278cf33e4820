mod common;

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use atrius_fhir_model::datatypes::{Annotation, Extension, Identifier, Meta, Period, Reference};
use atrius_fhir_model::primitives::{Boolean, DateTime, Id, Instant, Markdown, Uri};
use atrius_fhir_model::resources::{
    AdverseEvent, AdverseEventParticipant, AdverseEventSuspectEntity,
    AdverseEventSuspectEntityCausality, Device, DeviceName, DeviceProperty, Encounter,
    EncounterLocation, Patient, Resource,
};
use common::{code, concept, kilograms, reference, string};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn full_adverse_event() -> AdverseEvent {
    AdverseEvent::builder()
        .id(Id::of("ae-1").unwrap())
        .meta(
            Meta::builder()
                .last_updated(Instant::parse("2024-03-06T08:00:00Z").unwrap())
                .build()
                .unwrap(),
        )
        .add_extension(
            Extension::builder()
                .url("http://example.org/fhir/StructureDefinition/reviewed")
                .value(Boolean::of(true).unwrap())
                .build()
                .unwrap(),
        )
        .add_identifier(
            Identifier::builder()
                .system(Uri::of("http://example.org/ae").unwrap())
                .value(string("49476534"))
                .build()
                .unwrap(),
        )
        .status(code("completed"))
        .actuality(code("actual"))
        .add_category(concept("product-use-error"))
        .code(concept("rash"))
        .subject(reference("Patient/example"))
        .encounter(reference("Encounter/enc-1"))
        .occurrence(DateTime::parse("2024-03-05T10:00:00Z").unwrap())
        .seriousness(concept("non-serious"))
        .add_participant(
            AdverseEventParticipant::builder()
                .function(concept("author"))
                .actor(reference("Practitioner/dr-1"))
                .build()
                .unwrap(),
        )
        .add_suspect_entity(
            AdverseEventSuspectEntity::builder()
                .instance(reference("Medication/aspirin"))
                .causality(
                    AdverseEventSuspectEntityCausality::builder()
                        .entity_relatedness(concept("probably"))
                        .author(reference("Practitioner/dr-1"))
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .add_note(
            Annotation::builder()
                .text(Markdown::of("Patient developed a rash").unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[test]
fn test_to_builder_round_trip() {
    let event = full_adverse_event();
    let rebuilt = event.to_builder().build().unwrap();
    assert_eq!(rebuilt, event);
    assert_eq!(hash_of(&rebuilt), hash_of(&event));
}

#[test]
fn test_to_builder_round_trip_device() {
    let device = Device::builder()
        .display_name(string("Infusion pump"))
        .add_name(
            DeviceName::builder()
                .value(string("Pump 3000"))
                .type_(code("registered-name"))
                .build()
                .unwrap(),
        )
        .add_property(
            DeviceProperty::builder()
                .type_(concept("weight"))
                .value(kilograms())
                .build()
                .unwrap(),
        )
        .owner(reference("Organization/o1"))
        .parent(reference("Device/hub"))
        .build()
        .unwrap();
    assert_eq!(device.to_builder().build().unwrap(), device);
}

#[test]
fn test_to_builder_leaves_original_untouched() {
    let event = full_adverse_event();
    let changed = event
        .to_builder()
        .status(code("entered-in-error"))
        .build()
        .unwrap();

    assert_ne!(changed, event);
    assert_eq!(event.status(), Some(&code("completed")));
    assert_eq!(changed.status(), Some(&code("entered-in-error")));
    assert_eq!(changed.suspect_entity(), event.suspect_entity());
}

#[test]
fn test_to_builder_can_clear_fields() {
    let event = full_adverse_event();
    let cleared = event
        .to_builder()
        .encounter(None::<Reference>)
        .note(Vec::<Annotation>::new())
        .build()
        .unwrap();
    assert!(cleared.encounter().is_none());
    assert!(cleared.note().is_empty());
}

#[test]
fn test_structural_equality() {
    assert_eq!(full_adverse_event(), full_adverse_event());
    assert_eq!(hash_of(&full_adverse_event()), hash_of(&full_adverse_event()));

    let set: HashSet<AdverseEvent> = [full_adverse_event(), full_adverse_event(), common::adverse_event()]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);

    let location = |status: &str| {
        EncounterLocation::builder()
            .location(reference("Location/ward-1"))
            .status(code(status))
            .build()
            .unwrap()
    };
    assert_ne!(location("active"), location("completed"));
}

#[test]
fn test_contained_resources() {
    let patient = Patient::builder()
        .id(Id::of("p1").unwrap())
        .active(Boolean::of(true).unwrap())
        .build()
        .unwrap();
    let encounter = Encounter::builder()
        .add_contained(Resource::from(patient.clone()))
        .status(code("completed"))
        .subject(reference("#p1"))
        .actual_period(
            Period::builder()
                .start(DateTime::parse("2024-03-05").unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let contained = &encounter.contained()[0];
    assert_eq!(contained.resource_type(), "Patient");
    assert_eq!(contained.id(), Some(&Id::of("p1").unwrap()));
    assert_eq!(contained.as_patient(), Some(&patient));
    assert_eq!(encounter.to_builder().build().unwrap(), encounter);
}

#[test]
fn test_built_values_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdverseEvent>();
    assert_send_sync::<Resource>();
    assert_send_sync::<Encounter>();

    let event = std::sync::Arc::new(full_adverse_event());
    let shared = std::sync::Arc::clone(&event);
    let status = std::thread::spawn(move || shared.status().cloned())
        .join()
        .unwrap();
    assert_eq!(status, Some(code("completed")));
}
