mod common;

use atrius_fhir_model::datatypes::Extension;
use atrius_fhir_model::primitives::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, Decimal, Id, Instant, Integer,
    Markdown, PositiveInt, String, Time, UnsignedInt, Uri,
};
use atrius_fhir_model::{DatePrecision, DateTimePrecision, PreciseDecimal};
use atrius_model_support::{ModelError, ModelInfo, ModelKind, TypeInfo};
use rust_decimal_macros::dec;

#[test]
fn test_string_values() {
    assert!(String::of("hello").is_ok());
    assert!(String::of(" padded ").is_ok());
    assert!(matches!(String::of(""), Err(ModelError::InvalidValue { type_name: "string", .. })));
    assert!(String::of(" \t\n").is_err());
    assert!(String::of("x".repeat(1_048_577)).is_err());
    assert!(Markdown::of("**bold**").is_ok());
}

#[test]
fn test_code_and_id_values() {
    assert!(Code::of("in-progress").is_ok());
    assert!(Code::of("two words").is_ok());
    assert!(Code::of("two  spaces").is_err());
    assert!(Code::of("tab\tinside").is_err());

    assert!(Id::of("a-1.B").is_ok());
    assert!(Id::of("with_underscore").is_err());
    assert!(Id::of("x".repeat(65)).is_err());
}

#[test]
fn test_uri_values() {
    assert!(Uri::of("http://hl7.org/fhir").is_ok());
    assert!(Uri::of("urn:oid:1.2.3").is_ok());
    assert!(Uri::of("has space").is_err());
    assert!(Canonical::of("http://hl7.org/fhir/ValueSet/x|1.0").is_ok());
}

#[test]
fn test_integer_ranges() {
    assert!(Integer::of(-5).is_ok());
    assert!(PositiveInt::of(1).is_ok());
    assert_eq!(
        PositiveInt::of(0).unwrap_err().to_string(),
        "Invalid positiveInt value: 0 is less than 1"
    );
    assert!(UnsignedInt::of(0).is_ok());
    assert!(UnsignedInt::of(-1).is_err());
}

#[test]
fn test_base64_values() {
    assert!(Base64Binary::of("SGVsbG8=").is_ok());
    assert!(Base64Binary::of("SGVsbG8").is_err());
    assert!(Base64Binary::of("SGV*bG8=").is_err());
}

#[test]
fn test_parse_text_forms() {
    assert_eq!(Boolean::parse("true").unwrap().value(), Some(&true));
    assert!(Boolean::parse("yes").is_err());
    assert_eq!(Integer::parse("42").unwrap().value(), Some(&42));
    assert!(matches!(Integer::parse("4.2"), Err(ModelError::InvalidValue { type_name: "integer", .. })));
    assert!(PositiveInt::parse("0").is_err());

    let date = Date::parse("2024-02").unwrap();
    assert_eq!(date.value().unwrap().precision(), DatePrecision::YearMonth);
    assert!(Date::parse("2024-02-30").is_err());

    let when = DateTime::parse("2024-02-29T13:45:10.123+02:00").unwrap();
    assert_eq!(when.value().unwrap().precision(), DateTimePrecision::Full);
    assert!(DateTime::parse("2024-02-29T13:45").is_err());

    assert!(Time::parse("13:45:10").is_ok());
    assert!(Instant::parse("2024-02-29T13:45:10Z").is_ok());
    assert!(Instant::parse("2024-02-29").is_err());
}

#[test]
fn test_decimal_keeps_precision() {
    let decimal = Decimal::parse("1.50").unwrap();
    let value = decimal.value().unwrap();
    assert_eq!(value.original_string(), "1.50");
    assert_eq!(value.value(), Some(dec!(1.5)));
    assert_eq!(decimal, Decimal::of(PreciseDecimal::parse("1.5").unwrap()).unwrap());

    let from_rust = Decimal::of(dec!(0.250)).unwrap();
    assert_eq!(from_rust.value().unwrap().original_string(), "0.250");
}

#[test]
fn test_times_require_seconds() {
    for text in ["14", "14:30"] {
        assert!(
            matches!(Time::parse(text), Err(ModelError::InvalidValue { type_name: "time", .. })),
            "{text}"
        );
    }
    for text in ["2023-03-15T10Z", "2023-03-15T10:30+01:00"] {
        assert!(
            matches!(DateTime::parse(text), Err(ModelError::InvalidValue { type_name: "dateTime", .. })),
            "{text}"
        );
    }
    assert!(DateTime::parse("2023-03-15T10:30:00+01:00").is_ok());
}

#[test]
fn test_out_of_range_decimals_stay_distinct() {
    let small = common::quantity_of(Decimal::parse("1e100").unwrap(), "m");
    let large = common::quantity_of(Decimal::parse("9e200").unwrap(), "m");
    assert_ne!(small, large);
    assert_eq!(small, common::quantity_of(Decimal::parse("1e100").unwrap(), "m"));
}

#[test]
fn test_element_content_rules() {
    let err = String::builder().build().unwrap_err();
    assert_eq!(err, ModelError::EmptyElement { owner: "string" });

    let err = String::builder().id("s1").build().unwrap_err();
    assert_eq!(err, ModelError::EmptyElement { owner: "string" });

    // a primitive may carry only extensions, e.g. a data-absent-reason
    let absent = Code::builder()
        .add_extension(
            Extension::builder()
                .url("http://hl7.org/fhir/StructureDefinition/data-absent-reason")
                .value(Code::of("unknown").unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert!(absent.value().is_none());
    assert_eq!(absent.extension().len(), 1);

    let err = Code::builder().add_extension(None::<Extension>).value("x").build().unwrap_err();
    assert_eq!(
        err,
        ModelError::NullListElement {
            owner: "code",
            element: "extension",
            index: 0
        }
    );
}

#[test]
fn test_unvalidated_primitive() {
    let zero = PositiveInt::builder().validating(false).value(0).build().unwrap();
    assert_eq!(zero.value(), Some(&0));
    assert_eq!(zero.to_builder().validating(false).build().unwrap(), zero);
    assert!(zero.to_builder().build().is_err());
}

#[test]
fn test_primitive_metadata() {
    assert_eq!(<DateTime as TypeInfo>::type_name(), "dateTime");
    assert_eq!(<Code as ModelInfo>::kind(), ModelKind::Primitive);

    let names: Vec<&str> = <Boolean as ModelInfo>::elements().iter().map(|e| e.name).collect();
    assert_eq!(names, ["id", "extension", "value"]);

    let value = <Boolean as ModelInfo>::element("value").unwrap();
    assert_eq!(value.type_name, "System.Boolean");
    assert_eq!(value.declaring_type, "boolean");
    assert!(<Boolean as ModelInfo>::element("extension").unwrap().repeating);
}
