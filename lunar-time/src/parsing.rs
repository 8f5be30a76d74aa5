use crate::{JulianDate, TimeError, TimeResult};

/// Calendar components extracted from an ISO 8601 string.
#[derive(Debug, Clone)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl ParsedDateTime {
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Parses `YYYY-MM-DD[T ]HH:MM:SS[.fff][Z]` into calendar components.
///
/// Only UTC is accepted; a trailing `Z` is allowed and ignored, numeric
/// timezone offsets are not.
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    const MAX_ISO8601_LENGTH: usize = 32;
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let separator_pos = s.find('T').or_else(|| s.find(' ')).ok_or_else(|| {
        TimeError::ParseError(format!(
            "Invalid datetime format: '{}'. Expected YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })?;

    let (date_part, time_part) = s.split_at(separator_pos);
    let time_part = &time_part[1..];

    let date_fields: Vec<&str> = date_part.split('-').collect();
    if date_fields.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    let year = parse_year(date_fields[0])?;
    let month = parse_field(date_fields[1], "month")?;
    let day = parse_field(date_fields[2], "day")?;

    if !(1..=12).contains(&month) {
        return Err(TimeError::ParseError(format!(
            "Month out of range: {}",
            month
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(TimeError::ParseError(format!("Day out of range: {}", day)));
    }

    let time_fields: Vec<&str> = time_part.split(':').collect();
    if time_fields.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time_part
        )));
    }

    let hour = parse_field(time_fields[0], "hour")?;
    let minute = parse_field(time_fields[1], "minute")?;
    let second = time_fields[2]
        .parse::<f64>()
        .map_err(|_| TimeError::ParseError(format!("Invalid second: '{}'", time_fields[2])))?;

    if hour > 23 {
        return Err(TimeError::ParseError(format!(
            "Hour out of range: {}",
            hour
        )));
    }
    if minute > 59 {
        return Err(TimeError::ParseError(format!(
            "Minute out of range: {}",
            minute
        )));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(TimeError::ParseError(format!(
            "Second out of range: {}",
            second
        )));
    }

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn parse_year(field: &str) -> TimeResult<i32> {
    if field.len() != 4 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!("Invalid year: '{}'", field)));
    }
    field
        .parse::<i32>()
        .map_err(|_| TimeError::ParseError(format!("Invalid year: '{}'", field)))
}

fn parse_field(field: &str, what: &str) -> TimeResult<u8> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid {}: '{}'",
            what, field
        )));
    }
    field
        .parse::<u8>()
        .map_err(|_| TimeError::ParseError(format!("Invalid {}: '{}'", what, field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000_JD;

    #[test]
    fn test_iso8601() {
        let dt = parse_iso8601("2024-01-11T11:57:00").unwrap();
        assert_eq!(dt.year, 2024);
        assert_eq!(dt.month, 1);
        assert_eq!(dt.day, 11);
        assert_eq!(dt.hour, 11);
        assert_eq!(dt.minute, 57);
        assert_eq!(dt.second, 0.0);
    }

    #[test]
    fn test_iso8601_variants() {
        assert!(parse_iso8601("2000-01-01T12:00:00Z").is_ok());
        assert!(parse_iso8601("2000-01-01 12:00:00").is_ok());
        assert!(parse_iso8601("  2000-01-01T12:00:00  ").is_ok());
        assert_eq!(
            parse_iso8601("2000-01-01T12:00:00.123Z").unwrap().second,
            0.123
        );
        assert!(parse_iso8601("2000-1-1T1:1:1").is_ok());
    }

    #[test]
    fn test_invalid_format() {
        assert!(parse_iso8601("not-a-date").is_err());
        assert!(parse_iso8601("2000-01-01").is_err());
        assert!(parse_iso8601("12:00:00").is_err());
        assert!(parse_iso8601("2000-01T12:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T12:00").is_err());
        assert!(parse_iso8601("200-01-01T12:00:00").is_err());
        assert!(parse_iso8601("2000-ab-01T12:00:00").is_err());
        assert!(parse_iso8601(&"2000-01-01T12:00:00.".repeat(10)).is_err());
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(parse_iso8601("2000-13-01T12:00:00").is_err());
        assert!(parse_iso8601("2000-00-01T12:00:00").is_err());
        assert!(parse_iso8601("2000-01-32T12:00:00").is_err());
        assert!(parse_iso8601("2000-01-00T12:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T25:00:00").is_err());
        assert!(parse_iso8601("2000-01-01T12:60:00").is_err());
        assert!(parse_iso8601("2000-01-01T12:00:60").is_err());
        assert!(parse_iso8601("2000-12-31T23:59:59.999").is_ok());
    }

    #[test]
    fn test_to_julian_date() {
        let dt = parse_iso8601("2000-01-01T12:00:00").unwrap();
        assert_eq!(dt.to_julian_date().to_f64(), J2000_JD);
    }
}
