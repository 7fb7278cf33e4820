//! Process-wide model configuration.
//!
//! Reference target checking can be switched off for trusted input, either with
//! the `ATRIUS_FHIR_REFERENCE_TYPE_CHECKING` environment variable (read once, on
//! first use) or at runtime with [`set_reference_type_checking`].

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

/// Environment variable consulted on first use of the switch.
pub const REFERENCE_TYPE_CHECKING_ENV: &str = "ATRIUS_FHIR_REFERENCE_TYPE_CHECKING";

static REFERENCE_TYPE_CHECKING: Lazy<AtomicBool> = Lazy::new(|| {
    let enabled = std::env::var(REFERENCE_TYPE_CHECKING_ENV)
        .map(|value| parse_switch(&value))
        .unwrap_or(true);
    if !enabled {
        tracing::info!(
            "reference type checking disabled by {}",
            REFERENCE_TYPE_CHECKING_ENV
        );
    }
    AtomicBool::new(enabled)
});

/// Whether `check_reference_type` compares resolved targets against allow-lists.
pub fn reference_type_checking() -> bool {
    REFERENCE_TYPE_CHECKING.load(Ordering::Relaxed)
}

/// Turns reference target checking on or off for the whole process.
pub fn set_reference_type_checking(enabled: bool) {
    REFERENCE_TYPE_CHECKING.store(enabled, Ordering::Relaxed);
}

fn parse_switch(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_switch;

    #[test]
    fn test_parse_switch() {
        assert!(parse_switch("true"));
        assert!(parse_switch(""));
        assert!(parse_switch("anything"));
        assert!(!parse_switch("false"));
        assert!(!parse_switch(" OFF "));
        assert!(!parse_switch("0"));
        assert!(!parse_switch("No"));
    }
}
