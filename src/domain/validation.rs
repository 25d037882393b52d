use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidOtpCode { input: String },
    AgeFilterOutOfRange { min: u8, max: u8 },
    DistanceFilterOutOfRange { actual: u8 },
    LatitudeOutOfRange { actual: f64 },
    LongitudeOutOfRange { actual: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidOtpCode { input } => {
                write!(f, "otp code must be decimal digits: {input}")
            }
            Self::AgeFilterOutOfRange { min, max } => {
                write!(f, "age filter out of range: {min}..{max}")
            }
            Self::DistanceFilterOutOfRange { actual } => {
                write!(
                    f,
                    "distance filter out of range: {actual} (expected 1..=100)"
                )
            }
            Self::LatitudeOutOfRange { actual } => {
                write!(f, "latitude out of range: {actual} (expected -90..=90)")
            }
            Self::LongitudeOutOfRange { actual } => {
                write!(f, "longitude out of range: {actual} (expected -180..=180)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "match_id" };
        assert_eq!(err.to_string(), "match_id must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidOtpCode {
            input: "12a4".to_owned(),
        };
        assert_eq!(err.to_string(), "otp code must be decimal digits: 12a4");

        let err = ValidationError::AgeFilterOutOfRange { min: 17, max: 25 };
        assert_eq!(err.to_string(), "age filter out of range: 17..25");

        let err = ValidationError::DistanceFilterOutOfRange { actual: 101 };
        assert_eq!(
            err.to_string(),
            "distance filter out of range: 101 (expected 1..=100)"
        );

        let err = ValidationError::LatitudeOutOfRange { actual: 91.0 };
        assert_eq!(
            err.to_string(),
            "latitude out of range: 91 (expected -90..=90)"
        );
    }
}
