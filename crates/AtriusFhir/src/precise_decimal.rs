use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rust_decimal::Decimal;

/// High-precision decimal type that preserves original string representation.
///
/// FHIR requires that decimal values keep their original precision, so
/// `"12.340"` must stay `"12.340"`. This type stores both the parsed `Decimal`
/// value and the original string.
///
/// Equality, ordering and hashing follow the parsed value, so `10.0` and
/// `10.00` compare equal. Text too large for `Decimal` has no parsed value and
/// is compared by its original string instead.
///
/// # Examples
///
/// ```rust
/// use atrius_fhir_model::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::from(Decimal::new(12340, 3));
/// assert_eq!(precise.original_string(), "12.340");
///
/// let parsed = PreciseDecimal::parse("1.2340E1").unwrap();
/// assert_eq!(parsed.value(), Some(Decimal::new(1234, 2)));
/// assert_eq!(parsed.original_string(), "1.2340E1");
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    /// The parsed decimal value, `None` if the text is outside `Decimal`'s range
    value: Option<Decimal>,
    original_string: Arc<str>,
}

impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.original_string == other.original_string,
            _ => false,
        }
    }
}

impl Eq for PreciseDecimal {}

impl Hash for PreciseDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Decimal hashes its normalized form, which agrees with `eq`
        match self.value {
            Some(value) => value.hash(state),
            None => self.original_string.hash(state),
        }
    }
}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreciseDecimal {
    /// Out-of-range values sort after every parsed value, by text among themselves.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, None) => self.original_string.cmp(&other.original_string),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
        }
    }
}

impl PreciseDecimal {
    /// Parses FHIR decimal text: `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    ///
    /// Returns `None` when the text is not a FHIR decimal. Text that is well
    /// formed but too large for `Decimal` keeps its string with no value.
    pub fn parse(s: &str) -> Option<Self> {
        if !is_decimal_lexical(s) {
            return None;
        }
        Some(Self {
            value: parse_decimal_string(s),
            original_string: Arc::from(s),
        })
    }

    /// Returns the parsed decimal value if parsing was successful.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Returns the original string representation.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }
}

/// Parses a decimal string with support for scientific notation.
fn parse_decimal_string(s: &str) -> Option<Decimal> {
    if s.contains(['e', 'E']) {
        Decimal::from_scientific(&s.replace('E', "e")).ok()
    } else {
        s.parse::<Decimal>().ok()
    }
}

fn is_decimal_lexical(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let integer_ok = all_digits(integer) && (integer == "0" || !integer.starts_with('0'));
    let fraction_ok = fraction.is_none_or(all_digits);
    let exponent_ok = exponent.is_none_or(|e| all_digits(e.strip_prefix(['+', '-']).unwrap_or(e)));
    integer_ok && fraction_ok && exponent_ok
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            original_string: Arc::from(value.to_string()),
            value: Some(value),
        }
    }
}

impl fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}
