//! FHIR primitive types.
//!
//! Every primitive is an [`Element`] parameterised by a zero-sized kind that
//! fixes the value type and its lexical checks. The aliases carry the FHIR
//! names, so `String` in this module is the FHIR `string` element, not
//! `std::string::String`.
//!
//! ```rust
//! use atrius_fhir_model::primitives::{Id, PositiveInt, String};
//! use atrius_model_support::ModelError;
//!
//! assert!(Id::of("example-1").is_ok());
//! assert!(matches!(PositiveInt::of(0), Err(ModelError::InvalidValue { type_name: "positiveInt", .. })));
//! assert!(String::of("   ").is_err());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use atrius_model_support::{ElementInfo, ModelError};

use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::element::{Element, PrimitiveKind};
use crate::precise_decimal::PreciseDecimal;
use crate::visitor::{ModelNode, ValueRef};

/// Upper bound FHIR places on `string` and `markdown` values.
pub const MAX_STRING_LENGTH: usize = 1_048_576;

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s]+( [^\s]+)*$").expect("Invalid code pattern"));

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").expect("Invalid id pattern"));

fn invalid(type_name: &'static str, reason: impl Into<std::string::String>) -> ModelError {
    ModelError::InvalidValue {
        type_name,
        reason: reason.into(),
    }
}

fn check_string(type_name: &'static str, value: &str) -> Result<(), ModelError> {
    if value.len() > MAX_STRING_LENGTH {
        return Err(invalid(
            type_name,
            format!("length {} exceeds {}", value.len(), MAX_STRING_LENGTH),
        ));
    }
    if value.trim().is_empty() {
        return Err(invalid(type_name, "value must contain non-whitespace content"));
    }
    Ok(())
}

fn check_uri(type_name: &'static str, value: &str) -> Result<(), ModelError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(invalid(type_name, format!("'{}' is empty or contains whitespace", value)));
    }
    Ok(())
}

fn check_pattern(type_name: &'static str, pattern: &Regex, value: &str) -> Result<(), ModelError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(invalid(type_name, format!("'{}' does not match {}", value, pattern.as_str())))
    }
}

fn check_base64(value: &str) -> Result<(), ModelError> {
    let compact: Vec<u8> = value.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    let body = compact
        .iter()
        .rposition(|b| *b != b'=')
        .map_or(&compact[..0], |last| &compact[..=last]);
    let padding = compact.len() - body.len();
    let alphabet_ok = body
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/');
    if compact.len() % 4 != 0 || padding > 2 || !alphabet_ok {
        return Err(invalid("base64Binary", "value is not base64 encoded"));
    }
    Ok(())
}

/// `id`, `extension` and `value` metadata for one primitive.
macro_rules! primitive_elements {
    ($name:literal, $value_type:literal) => {
        &[
            ElementInfo {
                name: "id",
                type_name: "string",
                declaring_type: $name,
                required: false,
                repeating: false,
                choice: false,
                choice_types: &[],
                reference: false,
                reference_types: &[],
                binding: None,
                summary: false,
            },
            ElementInfo {
                name: "extension",
                type_name: "Extension",
                declaring_type: $name,
                required: false,
                repeating: true,
                choice: false,
                choice_types: &[],
                reference: false,
                reference_types: &[],
                binding: None,
                summary: false,
            },
            ElementInfo {
                name: "value",
                type_name: $value_type,
                declaring_type: $name,
                required: false,
                repeating: false,
                choice: false,
                choice_types: &[],
                reference: false,
                reference_types: &[],
                binding: None,
                summary: false,
            },
        ]
    };
}

/// Declares a primitive kind and its alias.
///
/// `parse` turns FHIR text into the value, `check` validates a value and
/// `value_ref` lends it to visitors.
macro_rules! primitive {
    (
        $(#[$doc:meta])*
        $alias:ident, $kind:ident, $name:literal, $value_type:literal, $value:ty,
        parse: $parse:expr,
        check: $check:expr,
        value_ref: $value_ref:expr $(,)?
    ) => {
        #[doc = concat!("Kind of the FHIR `", $name, "` primitive.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $kind;

        impl PrimitiveKind for $kind {
            type Value = $value;

            const NAME: &'static str = $name;

            const ELEMENTS: &'static [ElementInfo] = primitive_elements!($name, $value_type);

            fn parse(text: &str) -> Option<Self::Value> {
                let parse: fn(&str) -> Option<$value> = $parse;
                parse(text)
            }

            fn check(value: &Self::Value) -> Result<(), ModelError> {
                let check: fn(&$value) -> Result<(), ModelError> = $check;
                check(value)
            }

            fn value_ref(value: &Self::Value) -> ValueRef<'_> {
                let value_ref: fn(&$value) -> ValueRef<'_> = $value_ref;
                value_ref(value)
            }

            fn node(element: &Element<Self>) -> ModelNode<'_> {
                ModelNode::$alias(element)
            }
        }

        $(#[$doc])*
        pub type $alias = Element<$kind>;
    };
}

fn no_check<T>(_: &T) -> Result<(), ModelError> {
    Ok(())
}

fn owned(text: &str) -> Option<std::string::String> {
    Some(text.to_string())
}

primitive! {
    /// `true` or `false`.
    Boolean, BooleanKind, "boolean", "System.Boolean", bool,
    parse: |text| match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    },
    check: no_check,
    value_ref: |value| ValueRef::Boolean(*value),
}

primitive! {
    /// A signed 32-bit integer.
    Integer, IntegerKind, "integer", "System.Integer", i32,
    parse: |text| text.parse().ok(),
    check: no_check,
    value_ref: |value| ValueRef::Integer(*value),
}

primitive! {
    /// A signed 64-bit integer.
    Integer64, Integer64Kind, "integer64", "System.Long", i64,
    parse: |text| text.parse().ok(),
    check: no_check,
    value_ref: |value| ValueRef::Integer64(*value),
}

primitive! {
    /// An integer of at least 1.
    PositiveInt, PositiveIntKind, "positiveInt", "System.Integer", i32,
    parse: |text| text.parse().ok(),
    check: |value| {
        if *value < 1 {
            return Err(invalid("positiveInt", format!("{} is less than 1", value)));
        }
        Ok(())
    },
    value_ref: |value| ValueRef::Integer(*value),
}

primitive! {
    /// An integer of at least 0.
    UnsignedInt, UnsignedIntKind, "unsignedInt", "System.Integer", i32,
    parse: |text| text.parse().ok(),
    check: |value| {
        if *value < 0 {
            return Err(invalid("unsignedInt", format!("{} is negative", value)));
        }
        Ok(())
    },
    value_ref: |value| ValueRef::Integer(*value),
}

primitive! {
    /// A decimal that keeps its written precision.
    Decimal, DecimalKind, "decimal", "System.Decimal", PreciseDecimal,
    parse: PreciseDecimal::parse,
    check: no_check,
    value_ref: |value| ValueRef::Decimal(value),
}

primitive! {
    String, StringKind, "string", "System.String", std::string::String,
    parse: owned,
    check: |value| check_string("string", value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    Markdown, MarkdownKind, "markdown", "System.String", std::string::String,
    parse: owned,
    check: |value| check_string("markdown", value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    /// A token from a code system: no leading, trailing or doubled spaces.
    Code, CodeKind, "code", "System.String", std::string::String,
    parse: owned,
    check: |value| check_pattern("code", &CODE_PATTERN, value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    /// A logical id: up to 64 letters, digits, `-` and `.`.
    Id, IdKind, "id", "System.String", std::string::String,
    parse: owned,
    check: |value| check_pattern("id", &ID_PATTERN, value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    Uri, UriKind, "uri", "System.String", std::string::String,
    parse: owned,
    check: |value| check_uri("uri", value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    Url, UrlKind, "url", "System.String", std::string::String,
    parse: owned,
    check: |value| check_uri("url", value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    /// A canonical URL, optionally with a `|version` suffix.
    Canonical, CanonicalKind, "canonical", "System.String", std::string::String,
    parse: owned,
    check: |value| check_uri("canonical", value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    Base64Binary, Base64BinaryKind, "base64Binary", "System.String", std::string::String,
    parse: owned,
    check: |value| check_base64(value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    /// Limited XHTML content of a narrative.
    Xhtml, XhtmlKind, "xhtml", "System.String", std::string::String,
    parse: owned,
    check: |value| check_string("xhtml", value),
    value_ref: |value| ValueRef::String(value),
}

primitive! {
    Date, DateKind, "date", "System.Date", PrecisionDate,
    parse: PrecisionDate::parse,
    check: no_check,
    value_ref: |value| ValueRef::Date(value),
}

primitive! {
    DateTime, DateTimeKind, "dateTime", "System.DateTime", PrecisionDateTime,
    parse: PrecisionDateTime::parse,
    check: no_check,
    value_ref: |value| ValueRef::DateTime(value),
}

primitive! {
    Time, TimeKind, "time", "System.Time", PrecisionTime,
    parse: PrecisionTime::parse,
    check: no_check,
    value_ref: |value| ValueRef::Time(value),
}

primitive! {
    /// A point in time to at least the second, with a timezone.
    Instant, InstantKind, "instant", "System.DateTime", PrecisionInstant,
    parse: PrecisionInstant::parse,
    check: no_check,
    value_ref: |value| ValueRef::Instant(value),
}
