use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Which gender the account wants to be shown (`gender` preference code).
pub enum GenderFilter {
    Men,
    Women,
}

impl GenderFilter {
    /// Numeric code used on the wire (0 seeks men, 1 seeks women).
    pub fn code(self) -> u8 {
        match self {
            Self::Men => 0,
            Self::Women => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Partial update of the account's discovery preferences.
///
/// Only the fields that were set are sent; the server keeps the rest
/// unchanged. Range invariants match the app's own limits:
/// - minimum age in `18..=46`, maximum age in `22..=55`, and
///   `min + 4 <= max`,
/// - distance filter in `1..=100` miles.
pub struct PreferenceUpdate {
    age_filter: Option<(u8, u8)>,
    distance_filter: Option<u8>,
    gender_filter: Option<GenderFilter>,
    discoverable: Option<bool>,
}

impl PreferenceUpdate {
    /// Lowest accepted minimum age.
    pub const AGE_MIN_FLOOR: u8 = 18;
    /// Highest accepted minimum age.
    pub const AGE_MIN_CEIL: u8 = 46;
    /// Lowest accepted maximum age.
    pub const AGE_MAX_FLOOR: u8 = 22;
    /// Highest accepted maximum age.
    pub const AGE_MAX_CEIL: u8 = 55;
    /// Minimum gap between the two age bounds.
    pub const AGE_SPREAD: u8 = 4;
    /// Accepted distance filter range in miles.
    pub const DISTANCE_MAX: u8 = 100;

    /// Start an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the age window shown in discovery.
    pub fn with_age_filter(mut self, min: u8, max: u8) -> Result<Self, ValidationError> {
        let min_ok = (Self::AGE_MIN_FLOOR..=Self::AGE_MIN_CEIL).contains(&min);
        let max_ok = (Self::AGE_MAX_FLOOR..=Self::AGE_MAX_CEIL).contains(&max);
        if !min_ok || !max_ok || min + Self::AGE_SPREAD > max {
            return Err(ValidationError::AgeFilterOutOfRange { min, max });
        }
        self.age_filter = Some((min, max));
        Ok(self)
    }

    /// Set the maximum distance (miles) shown in discovery.
    pub fn with_distance_filter(mut self, miles: u8) -> Result<Self, ValidationError> {
        if !(1..=Self::DISTANCE_MAX).contains(&miles) {
            return Err(ValidationError::DistanceFilterOutOfRange { actual: miles });
        }
        self.distance_filter = Some(miles);
        Ok(self)
    }

    /// Set the gender preference.
    pub fn with_gender_filter(mut self, filter: GenderFilter) -> Self {
        self.gender_filter = Some(filter);
        self
    }

    /// Toggle whether the account shows up in discovery at all.
    pub fn with_discoverable(mut self, discoverable: bool) -> Self {
        self.discoverable = Some(discoverable);
        self
    }

    pub fn age_filter(&self) -> Option<(u8, u8)> {
        self.age_filter
    }

    pub fn distance_filter(&self) -> Option<u8> {
        self.distance_filter
    }

    pub fn gender_filter(&self) -> Option<GenderFilter> {
        self.gender_filter
    }

    pub fn discoverable(&self) -> Option<bool> {
        self.discoverable
    }

    /// `true` if no field was set.
    pub fn is_empty(&self) -> bool {
        self.age_filter.is_none()
            && self.distance_filter.is_none()
            && self.gender_filter.is_none()
            && self.discoverable.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reason for reporting a profile.
///
/// `Other` requires a free-text explanation; the remaining causes are sent
/// without one.
pub enum ReportCause {
    Other { explanation: String },
    Spam,
    InappropriatePhotos,
}

impl ReportCause {
    /// Create [`ReportCause::Other`] with a validated explanation.
    pub fn other(explanation: impl Into<String>) -> Result<Self, ValidationError> {
        let explanation = explanation.into();
        if explanation.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "explanation",
            });
        }
        Ok(Self::Other { explanation })
    }

    /// Numeric cause code used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            Self::Other { .. } => 0,
            Self::Spam => 1,
            Self::InappropriatePhotos => 4,
        }
    }

    /// Explanation text, present only for [`ReportCause::Other`].
    pub fn explanation(&self) -> Option<&str> {
        match self {
            Self::Other { explanation } => Some(explanation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_filter_enforces_ranges_and_spread() {
        let update = PreferenceUpdate::new().with_age_filter(25, 35).unwrap();
        assert_eq!(update.age_filter(), Some((25, 35)));

        assert!(PreferenceUpdate::new().with_age_filter(17, 30).is_err());
        assert!(PreferenceUpdate::new().with_age_filter(47, 55).is_err());
        assert!(PreferenceUpdate::new().with_age_filter(25, 56).is_err());
        // Spread below four years.
        assert!(PreferenceUpdate::new().with_age_filter(30, 33).is_err());
        // Exactly four years is fine.
        assert!(PreferenceUpdate::new().with_age_filter(30, 34).is_ok());
    }

    #[test]
    fn distance_filter_enforces_range() {
        assert!(PreferenceUpdate::new().with_distance_filter(1).is_ok());
        assert!(PreferenceUpdate::new().with_distance_filter(100).is_ok());
        assert!(PreferenceUpdate::new().with_distance_filter(0).is_err());
        assert!(PreferenceUpdate::new().with_distance_filter(101).is_err());
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(PreferenceUpdate::new().is_empty());
        let update = PreferenceUpdate::new().with_discoverable(false);
        assert!(!update.is_empty());
        assert_eq!(update.discoverable(), Some(false));
    }

    #[test]
    fn gender_filter_codes_match_wire_values() {
        assert_eq!(GenderFilter::Men.code(), 0);
        assert_eq!(GenderFilter::Women.code(), 1);
    }

    #[test]
    fn report_cause_codes_and_explanation() {
        let other = ReportCause::other("fake profile").unwrap();
        assert_eq!(other.code(), 0);
        assert_eq!(other.explanation(), Some("fake profile"));

        assert!(ReportCause::other("   ").is_err());
        assert_eq!(ReportCause::Spam.code(), 1);
        assert_eq!(ReportCause::Spam.explanation(), None);
        assert_eq!(ReportCause::InappropriatePhotos.code(), 4);
    }
}
