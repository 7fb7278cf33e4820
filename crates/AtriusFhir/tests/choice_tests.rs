mod common;

use atrius_fhir_model::choice::ChoiceValue;
use atrius_fhir_model::datatypes::{Period, Timing, TimingRepeat};
use atrius_fhir_model::primitives::{Boolean, DateTime, Integer, PositiveInt};
use atrius_fhir_model::resources::{AdverseEvent, DeviceProperty, Patient};
use atrius_model_support::{choice_element_name, ModelError};
use common::{code, concept, kilograms, reference, string};

#[test]
fn test_device_property_quantity_value() {
    let property = DeviceProperty::builder()
        .type_(concept("weight"))
        .value(kilograms())
        .build()
        .unwrap();

    assert_eq!(property.value().and_then(ChoiceValue::as_quantity), Some(&kilograms()));
    assert_eq!(property.value().map(ChoiceValue::type_name), Some("Quantity"));
    assert!(property.value().is_some_and(|v| !v.is_codeable_concept()));
}

#[test]
fn test_device_property_disallowed_type() {
    let period = Period::builder()
        .start(DateTime::parse("2024-01-01").unwrap())
        .build()
        .unwrap();
    let err = DeviceProperty::builder()
        .type_(concept("service window"))
        .value(period)
        .build()
        .unwrap_err();

    let ModelError::InvalidChoiceType {
        owner,
        element,
        actual,
        allowed,
    } = &err
    else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(*owner, "Device.Property");
    assert_eq!(*element, "value");
    assert_eq!(*actual, "Period");
    assert_eq!(
        *allowed,
        ["Quantity", "CodeableConcept", "string", "boolean", "integer", "Range", "Attachment"]
    );
    assert_eq!(
        err.to_string(),
        "Invalid type: Period for choice element: 'Device.Property.value' must be one of: \
         [Quantity, CodeableConcept, string, boolean, integer, Range, Attachment]"
    );
}

#[test]
fn test_required_choice_missing() {
    let err = DeviceProperty::builder()
        .type_(concept("weight"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingRequiredField {
            owner: "Device.Property",
            element: "value"
        }
    );
}

#[test]
fn test_primitive_members() {
    let property = DeviceProperty::builder()
        .type_(concept("sterile"))
        .value(Boolean::of(true).unwrap())
        .build()
        .unwrap();
    let value = property.value().unwrap();
    assert_eq!(value.type_name(), "boolean");
    assert_eq!(value.as_boolean().and_then(|b| b.value()), Some(&true));

    let property = DeviceProperty::builder()
        .type_(concept("label"))
        .value(string("single use"))
        .build()
        .unwrap();
    assert!(property.value().unwrap().is_string());

    // positiveInt is not in the list even though integer is
    let err = DeviceProperty::builder()
        .type_(concept("count"))
        .value(PositiveInt::of(3).unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidChoiceType { actual: "positiveInt", .. }));
}

#[test]
fn test_occurrence_choice() {
    let onset = DateTime::parse("2024-03-05T10:00:00+01:00").unwrap();
    let event = AdverseEvent::builder()
        .status(code("completed"))
        .actuality(code("actual"))
        .subject(reference("Patient/example"))
        .occurrence(onset.clone())
        .build()
        .unwrap();
    assert_eq!(event.occurrence(), Some(&ChoiceValue::DateTime(onset)));

    let err = AdverseEvent::builder()
        .status(code("completed"))
        .actuality(code("actual"))
        .subject(reference("Patient/example"))
        .occurrence(kilograms())
        .build()
        .unwrap_err();
    assert_eq!(err.path(), "AdverseEvent.occurrence");
}

#[test]
fn test_boxed_member() {
    let timing = Timing::builder()
        .repeat(
            TimingRepeat::builder()
                .frequency(PositiveInt::of(2).unwrap())
                .period_unit(code("d"))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let value = ChoiceValue::from(timing.clone());

    assert_eq!(value, ChoiceValue::Timing(Box::new(timing.clone())));
    assert_eq!(value.as_timing(), Some(&timing));
    assert_eq!(value.type_name(), "Timing");
}

#[test]
fn test_patient_choices() {
    let patient = Patient::builder()
        .deceased(Boolean::of(false).unwrap())
        .multiple_birth(Integer::of(2).unwrap())
        .build()
        .unwrap();
    assert!(patient.deceased().is_some_and(ChoiceValue::is_boolean));
    assert_eq!(
        patient
            .multiple_birth()
            .and_then(ChoiceValue::as_integer)
            .and_then(|i| i.value()),
        Some(&2)
    );

    let err = Patient::builder()
        .multiple_birth(DateTime::parse("2020").unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidChoiceType { element: "multipleBirth", .. }));
}

#[test]
fn test_choice_element_names() {
    assert_eq!(choice_element_name("value", ChoiceValue::from(kilograms()).type_name()), "valueQuantity");
    assert_eq!(
        choice_element_name("deceased", ChoiceValue::from(Boolean::of(true).unwrap()).type_name()),
        "deceasedBoolean"
    );
    assert_eq!(
        choice_element_name("occurrence", ChoiceValue::from(DateTime::parse("2024").unwrap()).type_name()),
        "occurrenceDateTime"
    );
}
