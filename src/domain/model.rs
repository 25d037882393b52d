use chrono::{DateTime, FixedOffset};

use crate::domain::value::{MatchId, MessageId, ProfileId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Optional profile attributes, populated opportunistically by the parser.
///
/// Every field defaults to unset and is written at most once per profile
/// parse. Attribute values are open strings: the server vocabulary grows
/// without notice, so the crate does not validate them against a closed set.
/// The list fields are bounded by the app's own UI limits (see the `MAX_*`
/// consts); the parser trusts the server and does not re-check the bounds.
pub struct AdditionalInfo {
    pub relationship_goal: Option<String>,
    pub passions: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub zodiac_sign: Option<String>,
    pub education_level: Option<String>,
    pub children_attitude: Option<String>,
    pub vaccination_status: Option<String>,
    /// One of the 16 four-letter personality type codes.
    pub personality_type: Option<String>,
    pub communication_style: Option<String>,
    pub love_language: Option<String>,
    pub pets: Option<String>,
    pub drinking: Option<String>,
    pub smoking: Option<String>,
    pub training_frequency: Option<String>,
    pub diet_preference: Option<String>,
    pub social_media_presence: Option<String>,
    pub sleeping_habits: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub schools: Option<Vec<String>>,
    /// Free text, typically a city name.
    pub location: Option<String>,
    /// Unset when the profile owner hides gender; otherwise a custom free-text
    /// value or the mapped numeric code.
    pub gender: Option<String>,
    pub sexual_orientations: Option<Vec<String>>,
}

impl AdditionalInfo {
    /// App UI cap on selected passions.
    pub const MAX_PASSIONS: usize = 5;
    /// App UI cap on selected languages.
    pub const MAX_LANGUAGES: usize = 5;
    /// App UI cap on selected sexual orientations.
    pub const MAX_SEXUAL_ORIENTATIONS: usize = 3;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully parsed user profile.
///
/// All fields except the contents of [`AdditionalInfo`] are mandatory in the
/// source payload; the parser rejects payloads missing any of them.
pub struct Profile {
    pub id: ProfileId,
    pub bio: String,
    pub birth_date: DateTime<FixedOffset>,
    pub name: String,
    /// Photo URLs in server order, still-frame/video variants filtered out.
    pub photos: Vec<String>,
    /// Distance from the requesting user, in miles.
    pub distance_mi: u32,
    pub additional: AdditionalInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A match: the match record's id paired with the matched profile's id.
pub struct Match {
    pub match_id: MatchId,
    pub profile_id: ProfileId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single chat message within a match.
pub struct Message {
    pub id: MessageId,
    pub sent_date: DateTime<FixedOffset>,
    pub message: String,
    pub from_id: ProfileId,
    pub to_id: ProfileId,
    pub match_id: MatchId,
}
