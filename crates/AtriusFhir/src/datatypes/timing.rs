use atrius_macros::FhirModel;

use crate::choice::ChoiceValue;
use crate::datatypes::{CodeableConcept, Extension};
use crate::primitives::{Code, DateTime, Decimal, PositiveInt, Time, UnsignedInt};

/// A timing schedule that specifies an event that may occur multiple times.
///
/// See: [Timing](http://hl7.org/fhir/StructureDefinition/Timing)
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Timing", kind = "datatype")]
pub struct Timing {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    #[fhir(summary)]
    modifier_extension: Vec<Extension>,
    /// When the event occurs
    #[fhir(summary)]
    event: Vec<DateTime>,
    /// When the event is to occur
    #[fhir(summary)]
    repeat: Option<TimingRepeat>,
    /// C | BID | TID | QID | AM | PM | QD | QOD | +
    #[fhir(summary, binding = "TimingAbbreviation")]
    code: Option<CodeableConcept>,
}

/// When the event is to occur.
#[derive(Debug, Clone, PartialEq, Eq, Hash, FhirModel)]
#[fhir_model(name = "Timing.Repeat", kind = "datatype")]
pub struct TimingRepeat {
    #[fhir(attribute)]
    id: Option<std::string::String>,
    extension: Vec<Extension>,
    /// Length/Range of lengths, or (Start and/or end) limits
    #[fhir(summary, choice = "Duration, Range, Period")]
    bounds: Option<ChoiceValue>,
    /// Number of times to repeat
    #[fhir(summary)]
    count: Option<PositiveInt>,
    #[fhir(summary)]
    count_max: Option<PositiveInt>,
    /// How long when it happens
    #[fhir(summary)]
    duration: Option<Decimal>,
    #[fhir(summary)]
    duration_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir(summary, binding = "UnitsOfTime")]
    duration_unit: Option<Code>,
    /// Indicates the number of repetitions that should occur within a period
    #[fhir(summary)]
    frequency: Option<PositiveInt>,
    #[fhir(summary)]
    frequency_max: Option<PositiveInt>,
    /// The duration to which the frequency applies
    #[fhir(summary)]
    period: Option<Decimal>,
    #[fhir(summary)]
    period_max: Option<Decimal>,
    #[fhir(summary, binding = "UnitsOfTime")]
    period_unit: Option<Code>,
    /// mon | tue | wed | thu | fri | sat | sun
    #[fhir(summary, binding = "DaysOfWeek")]
    day_of_week: Vec<Code>,
    /// Time of day for action
    #[fhir(summary)]
    time_of_day: Vec<Time>,
    /// Code for time period of occurrence
    #[fhir(summary, binding = "EventTiming")]
    when: Vec<Code>,
    /// Minutes from event (before or after)
    #[fhir(summary)]
    offset: Option<UnsignedInt>,
}
