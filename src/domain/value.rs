use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Bearer token attached to every authenticated call (`X-Auth-Token`).
///
/// Invariant: non-empty after trimming. The token itself is opaque; it is
/// produced by [`crate::SmsAuth::exchange_refresh_token`] or supplied by the
/// caller from an external source.
pub struct AuthToken(String);

impl AuthToken {
    /// Header name the API expects (`X-Auth-Token`).
    pub const FIELD: &'static str = "X-Auth-Token";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Intermediate token returned by OTP validation (`refresh_token`).
///
/// Invariant: non-empty after trimming.
pub struct RefreshToken(String);

impl RefreshToken {
    /// Body field name used by the API (`refresh_token`).
    pub const FIELD: &'static str = "refresh_token";

    /// Create a validated [`RefreshToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One-time password received over SMS (`otp_code`).
///
/// Invariant: non-empty and decimal digits only after trimming.
pub struct OtpCode(String);

impl OtpCode {
    /// Body field name used by the API (`otp_code`).
    pub const FIELD: &'static str = "otp_code";

    /// Create a validated [`OtpCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidOtpCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque profile identifier (`_id` on user objects).
///
/// Invariant: non-empty after trimming.
pub struct ProfileId(String);

impl ProfileId {
    /// Wire field name used by the API (`_id`).
    pub const FIELD: &'static str = "_id";

    /// Create a validated [`ProfileId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque match identifier.
///
/// Invariant: non-empty after trimming.
pub struct MatchId(String);

impl MatchId {
    /// Wire field name used by the API (`match_id`).
    pub const FIELD: &'static str = "match_id";

    /// Create a validated [`MatchId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque message identifier (`_id` on message objects).
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Wire field name used by the API (`_id`).
    pub const FIELD: &'static str = "_id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Outgoing chat message body (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Body field name used by the API (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque pagination cursor returned by list endpoints (`next_page_token`).
///
/// The server mints these; no structure is assumed, so construction is
/// infallible. Pass the cursor back unchanged to fetch the next page.
pub struct PageToken(String);

impl PageToken {
    /// Query/body field name used by the API (`page_token`).
    pub const FIELD: &'static str = "page_token";

    /// Wrap a server-issued cursor.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw cursor.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// The OTP endpoints expect the number as a bare digit string (MSISDN), which
/// is derived from the E.164 form. Equality, ordering, and hashing are based
/// on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    msisdn: u64,
}

impl PhoneNumber {
    /// Body field name used by the API (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        // E.164 numbers are at most 15 digits, so the MSISDN always fits u64.
        let msisdn = e164
            .trim_start_matches('+')
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        Ok(Self { raw, e164, msisdn })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Digit-only form sent in OTP request bodies.
    pub fn msisdn(&self) -> u64 {
        self.msisdn
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Geographic position for passport/location updates.
///
/// Invariant: latitude in `-90..=90`, longitude in `-180..=180`.
pub struct Position {
    lat: f64,
    lon: f64,
}

impl Position {
    /// Create a validated [`Position`].
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange { actual: lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::LongitudeOutOfRange { actual: lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(self) -> f64 {
        self.lon
    }
}
