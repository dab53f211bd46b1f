//! Lenient flight time parser
//!
//! The flight log accepts times as "HH:MM", "HH-MM", or a bare minute
//! count. An empty field means zero minutes.

use avia_types::{Error, Result};

/// Parses a flight time entry into minutes.
///
/// When the text contains both `-` and `:`, the `-` separator wins; this
/// mirrors the established log sheet behavior and is deliberately not
/// normalized. The integer parse would accept a signed part, but a `-`
/// anywhere in the text is always taken as the separator, so a negative
/// minute part never survives the split.
pub fn parse_flight_minutes(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let separator = if text.contains('-') {
        Some('-')
    } else if text.contains(':') {
        Some(':')
    } else {
        None
    };

    if let Some(sep) = separator {
        let parts: Vec<&str> = text.split(sep).collect();
        if parts.len() != 2 {
            return Err(Error::Format(text.to_string()));
        }
        let (hours, minutes) = match (parts[0].parse::<i64>(), parts[1].parse::<i64>()) {
            (Ok(h), Ok(m)) => (h, m),
            _ => return Err(Error::Format(text.to_string())),
        };
        return Ok((hours * 60 + minutes) as f64);
    }

    text.parse::<f64>()
        .map_err(|_| Error::Format(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_separated() {
        assert_eq!(parse_flight_minutes("1:30").unwrap(), 90.0);
        assert_eq!(parse_flight_minutes("0:45").unwrap(), 45.0);
        assert_eq!(parse_flight_minutes("2:00").unwrap(), 120.0);
    }

    #[test]
    fn test_dash_separated() {
        assert_eq!(parse_flight_minutes("1-30").unwrap(), 90.0);
        assert_eq!(parse_flight_minutes("0-05").unwrap(), 5.0);
    }

    #[test]
    fn test_plain_minutes() {
        assert_eq!(parse_flight_minutes("45").unwrap(), 45.0);
        assert_eq!(parse_flight_minutes("45.5").unwrap(), 45.5);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_flight_minutes("").unwrap(), 0.0);
        assert_eq!(parse_flight_minutes("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_garbage_is_format_error() {
        assert!(matches!(
            parse_flight_minutes("abc"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_dash_wins_over_colon() {
        // "1-2:3" splits on '-' first; ":3" is not an integer
        assert!(parse_flight_minutes("1-2:3").is_err());
        // "2:3-1" also splits on '-' first; "2:3" is not an integer
        assert!(parse_flight_minutes("2:3-1").is_err());
    }

    #[test]
    fn test_too_many_parts_is_format_error() {
        assert!(parse_flight_minutes("1:2:3").is_err());
        assert!(parse_flight_minutes("1--30").is_err());
    }

    #[test]
    fn test_minus_always_wins_as_separator() {
        // The '-' in the minutes part is taken as the separator, leaving
        // "1:" as the hours part
        assert!(matches!(
            parse_flight_minutes("1:-30"),
            Err(Error::Format(_))
        ));
        assert!(parse_flight_minutes("-1:30").is_err());
    }

    #[test]
    fn test_non_integer_parts_rejected() {
        assert!(parse_flight_minutes("1:3a").is_err());
        assert!(parse_flight_minutes("1.5:30").is_err());
    }
}
