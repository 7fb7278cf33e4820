use std::fmt;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveTime, Utc};

/// Precision levels for FHIR Date values.
///
/// FHIR dates support partial precision, allowing year-only, year-month,
/// or full date specifications. This enum tracks which components are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR Time values.
///
/// FHIR times always carry seconds; only the fractional part is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    /// Hour, minute, and second (HH:MM:SS)
    HourMinuteSecond,
    /// Time with a fractional second (HH:MM:SS.sss)
    Millisecond,
}

/// Precision levels for FHIR DateTime values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date with time to seconds (YYYY-MM-DDTHH:MM:SS)
    DateHourMinuteSecond,
    /// Full datetime with sub-second precision (YYYY-MM-DDTHH:MM:SS.sss)
    Full,
}

/// Precision-aware FHIR date value.
///
/// Keeps the original text so a value round-trips unchanged.
///
/// # Examples
/// ```rust
/// use atrius_fhir_model::{DatePrecision, PrecisionDate};
///
/// let date = PrecisionDate::parse("2023-03").unwrap();
/// assert_eq!(date.precision(), DatePrecision::YearMonth);
/// assert_eq!(date.month(), Some(3));
/// assert!(PrecisionDate::parse("2023-02-30").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl PrecisionDate {
    /// Creates a year-only precision date.
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            precision: DatePrecision::Year,
            original_string: Arc::from(format!("{:04}", year)),
        }
    }

    /// Creates a full precision date, or `None` if the calendar date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        })
    }

    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts[0].len() != 4 || parts.iter().skip(1).any(|p| p.len() != 2) {
            return None;
        }
        let year = parse_digits(parts[0])? as i32;
        let (month, day, precision) = match parts.len() {
            1 => (None, None, DatePrecision::Year),
            2 => {
                let month = parse_digits(parts[1])?;
                if !(1..=12).contains(&month) {
                    return None;
                }
                (Some(month), None, DatePrecision::YearMonth)
            }
            3 => {
                let month = parse_digits(parts[1])?;
                let day = parse_digits(parts[2])?;
                NaiveDate::from_ymd_opt(year, month, day)?;
                (Some(month), Some(day), DatePrecision::Full)
            }
            _ => return None,
        };
        Some(Self {
            year,
            month,
            day,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a `NaiveDate`, filling missing components with 1.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

/// Precision-aware FHIR time value. FHIR times never carry a timezone.
///
/// # Examples
/// ```rust
/// use atrius_fhir_model::{PrecisionTime, TimePrecision};
///
/// let time = PrecisionTime::parse("14:30:45.123").unwrap();
/// assert_eq!(time.precision(), TimePrecision::Millisecond);
/// assert!(PrecisionTime::parse("14:30Z").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: Option<u32>,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    /// Creates an hour-minute-second precision time, or `None` if out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(Self {
            hour,
            minute,
            second,
            millisecond: None,
            precision: TimePrecision::HourMinuteSecond,
            original_string: Arc::from(format!("{:02}:{:02}:{:02}", hour, minute, second)),
        })
    }

    /// Parses `HH:MM:SS` or `HH:MM:SS.fff`.
    pub fn parse(s: &str) -> Option<Self> {
        if s.contains(['+', '-', 'Z']) {
            return None;
        }
        let mut parts = s.split(':');
        let (Some(hour), Some(minute), Some(seconds), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        if hour.len() != 2 || minute.len() != 2 {
            return None;
        }
        let (whole, fraction) = match seconds.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (seconds, None),
        };
        if whole.len() != 2 {
            return None;
        }
        let (millisecond, precision) = match fraction {
            Some(fraction) => {
                if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let digits: String = fraction.chars().chain("00".chars()).take(3).collect();
                (Some(parse_digits(&digits)?), TimePrecision::Millisecond)
            }
            None => (None, TimePrecision::HourMinuteSecond),
        };
        let (hour, minute, second) = (parse_digits(hour)?, parse_digits(minute)?, parse_digits(whole)?);
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
            millisecond,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_milli_opt(
            self.hour,
            self.minute,
            self.second,
            self.millisecond.unwrap_or(0),
        )
    }
}

/// Precision-aware FHIR dateTime value, with an optional timezone offset.
///
/// # Examples
/// ```rust
/// use atrius_fhir_model::{DateTimePrecision, PrecisionDateTime};
///
/// let dt = PrecisionDateTime::parse("2023-03-15T14:30:45.123+05:30").unwrap();
/// assert_eq!(dt.precision(), DateTimePrecision::Full);
/// assert_eq!(dt.timezone_offset(), Some(330));
/// assert_eq!(dt.to_string(), "2023-03-15T14:30:45.123+05:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Minutes east of UTC; `None` when no zone was given.
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    /// Creates a date-only datetime.
    pub fn from_date(date: PrecisionDate) -> Self {
        let precision = match date.precision {
            DatePrecision::Year => DateTimePrecision::Year,
            DatePrecision::YearMonth => DateTimePrecision::YearMonth,
            DatePrecision::Full => DateTimePrecision::Date,
        };
        Self {
            original_string: date.original_string.clone(),
            date,
            time: None,
            timezone_offset: None,
            precision,
        }
    }

    /// Parses a FHIR dateTime. A time part requires a full date, seconds and a timezone.
    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, time_and_tz)) = s.split_once('T') else {
            let date = PrecisionDate::parse(s)?;
            return Some(Self::from_date(date));
        };
        let date = PrecisionDate::parse(date_part)?;
        if date.precision != DatePrecision::Full {
            return None;
        }

        let (time_part, timezone_offset) = if let Some(stripped) = time_and_tz.strip_suffix('Z') {
            (stripped, 0)
        } else if let Some(pos) = time_and_tz.rfind(['+', '-']) {
            let offset = Self::parse_timezone_offset(&time_and_tz[pos + 1..])?;
            let sign = if time_and_tz[pos..].starts_with('-') { -1 } else { 1 };
            (&time_and_tz[..pos], sign * offset)
        } else {
            return None;
        };

        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision {
            TimePrecision::HourMinuteSecond => DateTimePrecision::DateHourMinuteSecond,
            TimePrecision::Millisecond => DateTimePrecision::Full,
        };
        Some(Self {
            date,
            time: Some(time),
            timezone_offset: Some(timezone_offset),
            precision,
            original_string: Arc::from(s),
        })
    }

    /// Parses `HH:MM` into minutes.
    fn parse_timezone_offset(s: &str) -> Option<i32> {
        let (hours, minutes) = s.split_once(':')?;
        if hours.len() != 2 || minutes.len() != 2 {
            return None;
        }
        let hours = parse_digits(hours)? as i32;
        let minutes = parse_digits(minutes)? as i32;
        if hours > 14 || minutes > 59 {
            return None;
        }
        Some(hours * 60 + minutes)
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    pub fn timezone_offset(&self) -> Option<i32> {
        self.timezone_offset
    }

    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// Converts to UTC, filling missing components; values without a zone are taken as UTC.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let naive_time = match &self.time {
            Some(time) => time.to_naive_time()?,
            None => NaiveTime::MIN,
        };
        let naive = self.date.to_naive_date()?.and_time(naive_time);
        let offset = chrono::Duration::minutes(i64::from(self.timezone_offset.unwrap_or(0)));
        Some(ChronoDateTime::<Utc>::from_naive_utc_and_offset(naive - offset, Utc))
    }
}

/// A FHIR instant: a dateTime with at least second precision and a timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    /// Parses a FHIR instant, rejecting partial values.
    pub fn parse(s: &str) -> Option<Self> {
        let inner = PrecisionDateTime::parse(s)?;
        if inner.precision < DateTimePrecision::DateHourMinuteSecond {
            return None;
        }
        Some(PrecisionInstant { inner })
    }

    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime()
    }
}

/// Parses a run of ASCII digits; signs and whitespace are rejected.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// === Display Implementations for Precision Types ===

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_precision() {
        assert_eq!(PrecisionDate::parse("2024").unwrap().precision(), DatePrecision::Year);
        assert_eq!(PrecisionDate::parse("2024-02-29").unwrap().day(), Some(29));
        assert!(PrecisionDate::parse("2023-02-29").is_none());
        assert!(PrecisionDate::parse("24-01-01").is_none());
        assert!(PrecisionDate::parse("2024-1").is_none());
        assert_eq!(PrecisionDate::from_ymd(2024, 1, 5).unwrap().original_string(), "2024-01-05");
    }

    #[test]
    fn test_time_parse() {
        let time = PrecisionTime::parse("08:15:00").unwrap();
        assert_eq!(time.precision(), TimePrecision::HourMinuteSecond);
        assert!(PrecisionTime::parse("14").is_none());
        assert!(PrecisionTime::parse("14:30").is_none());
        assert!(PrecisionTime::parse("14:30:00:00").is_none());
        assert_eq!(PrecisionTime::parse("23:59:59.5").unwrap().millisecond, Some(500));
        assert!(PrecisionTime::parse("24:00:00").is_none());
        assert!(PrecisionTime::parse("12:00:00-05:00").is_none());
    }

    #[test]
    fn test_datetime_requires_zone_with_time() {
        assert!(PrecisionDateTime::parse("2023-03-15T10:00:00").is_none());
        assert!(PrecisionDateTime::parse("2023-03-15T10Z").is_none());
        assert!(PrecisionDateTime::parse("2023-03-15T10:30+01:00").is_none());
        let dt = PrecisionDateTime::parse("2023-03-15T10:00:00-04:00").unwrap();
        assert_eq!(dt.timezone_offset(), Some(-240));
        assert_eq!(
            dt.to_chrono_datetime().unwrap().to_rfc3339(),
            "2023-03-15T14:00:00+00:00"
        );
        assert_eq!(PrecisionDateTime::parse("2023").unwrap().precision(), DateTimePrecision::Year);
    }

    #[test]
    fn test_instant_precision() {
        assert!(PrecisionInstant::parse("2023-03-15T10:00:00Z").is_some());
        assert!(PrecisionInstant::parse("2023-03-15T10:00Z").is_none());
        assert!(PrecisionInstant::parse("2023").is_none());
        assert!(PrecisionInstant::parse("2023-03-15").is_none());
    }
}
