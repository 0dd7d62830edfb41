//! Voicemail duration normalization

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Unit the caller-facing voicemail duration is expressed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DurationUnit {
    Second,
    Minute,
    /// Unrecognized unit; normalization passes the value through unchanged
    Other(String),
}

impl From<String> for DurationUnit {
    fn from(unit: String) -> Self {
        match unit.as_str() {
            "SECOND" => Self::Second,
            "MINUTE" => Self::Minute,
            _ => Self::Other(unit),
        }
    }
}

impl From<DurationUnit> for String {
    fn from(unit: DurationUnit) -> Self {
        match unit {
            DurationUnit::Second => "SECOND".to_string(),
            DurationUnit::Minute => "MINUTE".to_string(),
            DurationUnit::Other(unit) => unit,
        }
    }
}

impl FromStr for DurationUnit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from(self.clone()))
    }
}

/// Timeout and prompt text derived from a maximum voicemail duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDuration {
    pub canonical_seconds: u32,
    pub label: &'static str,
    pub prompt_fragment: String,
}

/// Convert `max_duration` in `unit` into seconds plus the spoken prompt.
///
/// The prompt quotes `max_duration` in the caller's unit, not the converted
/// seconds. Unknown units are not an error: the value is used as seconds and
/// the label is left empty.
pub fn normalize(max_duration: u32, unit: &DurationUnit) -> NormalizedDuration {
    let (canonical_seconds, label) = match unit {
        DurationUnit::Second => (max_duration, if max_duration == 1 { "second" } else { "seconds" }),
        DurationUnit::Minute => (
            max_duration.saturating_mul(60),
            if max_duration == 1 { "minute" } else { "minutes" },
        ),
        DurationUnit::Other(_) => (max_duration, ""),
    };

    NormalizedDuration {
        canonical_seconds,
        label,
        prompt_fragment: format!(
            "Please leave a message after the beep. You have {} {}",
            max_duration, label
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(max: u32, unit: &str, seconds: u32, label: &str) {
        let unit: DurationUnit = unit.parse().unwrap();
        let normalized = normalize(max, &unit);
        assert_eq!(normalized.canonical_seconds, seconds);
        assert_eq!(normalized.label, label);
    }

    #[test]
    fn test_seconds() {
        check(1, "SECOND", 1, "second");
        check(2, "SECOND", 2, "seconds");
    }

    #[test]
    fn test_minutes() {
        check(1, "MINUTE", 60, "minute");
        check(5, "MINUTE", 300, "minutes");
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        check(5, "HOUR", 5, "");
        assert_eq!(
            normalize(5, &DurationUnit::Other("HOUR".into())).prompt_fragment,
            "Please leave a message after the beep. You have 5 "
        );
    }

    #[test]
    fn test_prompt_uses_unscaled_count() {
        let normalized = normalize(3, &DurationUnit::Minute);
        assert_eq!(normalized.canonical_seconds, 180);
        assert_eq!(
            normalized.prompt_fragment,
            "Please leave a message after the beep. You have 3 minutes"
        );
    }

    #[test]
    fn test_unit_serde() {
        let unit: DurationUnit = serde_json::from_str("\"MINUTE\"").unwrap();
        assert_eq!(unit, DurationUnit::Minute);
        assert_eq!(serde_json::to_string(&DurationUnit::Second).unwrap(), "\"SECOND\"");
        let unit: DurationUnit = serde_json::from_str("\"minute\"").unwrap();
        assert_eq!(unit, DurationUnit::Other("minute".into()));
    }
}
