use chrono::{DateTime, FixedOffset};

/// Fixed timestamp format used by the API for birth dates and message
/// sent dates: `YYYY-MM-DDThh:mm:ss.ffffff±hhmm`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse an API timestamp, keeping the offset the server sent.
pub fn parse_datetime(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(value, DATETIME_FORMAT)
}
