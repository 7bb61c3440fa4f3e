//! Clock-style duration codec (`HH:MM:SS` <-> seconds).

use std::num::ParseIntError;

use thiserror::Error;

/// Why a duration string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    /// The text did not split into exactly three `:`-separated fields.
    #[error("expected HH:MM:SS, got {fields} field(s) in {text:?}")]
    FieldCount { text: String, fields: usize },

    /// One of the fields is not an unsigned integer.
    #[error("non-numeric field in {text:?}: {source}")]
    NotANumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// The fields are numeric but the total does not fit in `u64` seconds.
    #[error("duration {text:?} is too large")]
    Overflow { text: String },
}

/// Parses `HH:MM:SS` into a number of seconds.
///
/// Hours may exceed two digits and fields may carry surrounding whitespace.
/// Minute and second fields are not range-checked, so `0:90:00` is 5400 seconds.
pub fn parse_duration(text: &str) -> Result<u64, DurationParseError> {
    let fields: Vec<&str> = text.split(':').collect();
    let [hours, minutes, seconds] = fields.as_slice() else {
        return Err(DurationParseError::FieldCount {
            text: text.to_string(),
            fields: fields.len(),
        });
    };

    let number = |field: &str| {
        field
            .trim()
            .parse::<u64>()
            .map_err(|source| DurationParseError::NotANumber {
                text: text.to_string(),
                source,
            })
    };

    let (hours, minutes, seconds) = (number(*hours)?, number(*minutes)?, number(*seconds)?);
    hours
        .checked_mul(3600)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| DurationParseError::Overflow {
            text: text.to_string(),
        })
}

/// Parses a duration, treating anything malformed as zero.
///
/// The row still counts as a viewing with no time attached. The failure is
/// traced and never returned.
pub fn parse_duration_or_zero(text: &str) -> u64 {
    parse_duration(text).unwrap_or_else(|err| {
        tracing::trace!(%err, "duration defaulted to zero");
        0
    })
}

/// Formats seconds as zero-padded `HH:MM:SS`, truncating.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_basic() {
        assert_eq!(parse_duration("0:01:05"), Ok(65));
        assert_eq!(parse_duration("01:00:00"), Ok(3600));
        assert_eq!(parse_duration("00:00:00"), Ok(0));
    }

    #[test]
    fn test_parse_duration_long_hours() {
        assert_eq!(parse_duration("123:00:01"), Ok(442_801));
    }

    #[test]
    fn test_parse_duration_does_not_normalize_fields() {
        assert_eq!(parse_duration("0:90:75"), Ok(5475));
    }

    #[test]
    fn test_parse_duration_rejects_wrong_field_count() {
        assert!(matches!(
            parse_duration("1:2"),
            Err(DurationParseError::FieldCount { fields: 2, .. })
        ));
        assert!(matches!(
            parse_duration("1:2:3:4"),
            Err(DurationParseError::FieldCount { fields: 4, .. })
        ));
    }

    #[test]
    fn test_parse_duration_rejects_non_numeric() {
        assert!(matches!(
            parse_duration("a:b:c"),
            Err(DurationParseError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_duration("-1:00:00"),
            Err(DurationParseError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert!(matches!(
            parse_duration("9999999999999999999:00:00"),
            Err(DurationParseError::Overflow { .. })
        ));
        assert_eq!(parse_duration("0:0:18446744073709551615"), Ok(u64::MAX));
        assert!(matches!(
            parse_duration("0:1:18446744073709551615"),
            Err(DurationParseError::Overflow { .. })
        ));
    }

    #[test]
    fn test_oversized_duration_defaults_to_zero() {
        assert_eq!(parse_duration_or_zero("9999999999999999999:00:00"), 0);
        assert_eq!(parse_duration_or_zero("0:307445734561825861:00"), 0);
    }

    #[test]
    fn test_malformed_durations_default_to_zero() {
        for text in ["", "abc", "1:2", "1:2:3:4", "1.00.00", "1::2"] {
            assert_eq!(parse_duration_or_zero(text), 0, "input {text:?}");
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(65), "00:01:05");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(360_000), "100:00:00");
    }

    #[test]
    fn test_format_then_parse_roundtrip() {
        // Step through the bounded range with an odd stride to hit varied fields
        let bound = 24 * 3600 * 100;
        for s in (0..bound).step_by(7919).chain([bound - 1]) {
            assert_eq!(parse_duration(&format_duration(s)), Ok(s), "seconds {s}");
        }
    }

    #[test]
    fn test_parse_then_format_canonical() {
        assert_eq!(format_duration(parse_duration("02:03:04").unwrap()), "02:03:04");
    }
}
