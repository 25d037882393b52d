use serde::Deserialize;
use serde_json::Value;

use crate::domain::descriptor::{self, DescriptorAttribute};
use crate::domain::{AdditionalInfo, Profile, ProfileId};
use crate::transport::datetime;
use crate::transport::error::ParseError;

/// Photo URLs with this suffix are still-frame placeholders for videos and
/// animated variants; they are dropped from the photo list.
const STILL_FRAME_SUFFIX: &str = ".webp";

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    #[serde(default)]
    results: Option<ProfileWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileWire {
    #[serde(rename = "_id")]
    id: Option<String>,
    bio: Option<String>,
    birth_date: Option<String>,
    name: Option<String>,
    photos: Option<Vec<PhotoWire>>,
    distance_mi: Option<u32>,
    schools: Vec<NamedWire>,
    jobs: Vec<JobWire>,
    user_interests: Option<InterestsWire>,
    city: Option<NamedWire>,
    show_gender_on_profile: Option<bool>,
    custom_gender: Option<String>,
    gender: Option<i64>,
    sexual_orientations: Option<Vec<NamedWire>>,
    selected_descriptors: Vec<DescriptorWire>,
}

#[derive(Debug, Deserialize)]
struct PhotoWire {
    url: String,
}

#[derive(Debug, Deserialize)]
struct NamedWire {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JobWire {
    title: Option<NamedWire>,
    company: Option<NamedWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InterestsWire {
    selected_interests: Vec<NamedWire>,
}

#[derive(Debug, Deserialize)]
struct DescriptorWire {
    section_name: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    choice_selections: Vec<NamedWire>,
}

/// Normalize a profile-fetch payload into a [`Profile`].
///
/// Mandatory fields (`_id`, `bio`, `birth_date`, `name`, `photos`,
/// `distance_mi`) fail the parse with [`ParseError::MalformedProfile`] when
/// missing or mis-shaped. Optional attributes populate [`AdditionalInfo`]
/// opportunistically, except that a descriptor entry outside the modeled
/// vocabulary aborts the whole parse with [`ParseError::UnknownDescriptor`]:
/// partial attribute data is not an acceptable output for that case.
pub fn parse_profile(raw: &Value) -> Result<Profile, ParseError> {
    let envelope = ProfileEnvelope::deserialize(raw)
        .map_err(|err| ParseError::malformed_profile(err.to_string()))?;
    let wire = envelope
        .results
        .ok_or_else(|| ParseError::malformed_profile("missing `results` object"))?;

    let mut additional = AdditionalInfo {
        gender: resolve_gender(wire.show_gender_on_profile, wire.custom_gender, wire.gender),
        ..AdditionalInfo::default()
    };

    if !wire.schools.is_empty() {
        additional.schools = Some(wire.schools.into_iter().map(|s| s.name).collect());
    }

    let interests = wire
        .user_interests
        .map(|i| i.selected_interests)
        .unwrap_or_default();
    if !interests.is_empty() {
        additional.passions = Some(interests.into_iter().map(|p| p.name).collect());
    }

    // Only the first job entry counts; title and company are independent.
    if let Some(job) = wire.jobs.into_iter().next() {
        additional.job_title = job.title.map(|t| t.name);
        additional.company = job.company.map(|c| c.name);
    }

    if let Some(city) = wire.city {
        additional.location = Some(city.name);
    }

    if let Some(orientations) = wire.sexual_orientations {
        if !orientations.is_empty() {
            additional.sexual_orientations =
                Some(orientations.into_iter().map(|o| o.name).collect());
        }
    }

    for entry in wire.selected_descriptors {
        apply_descriptor(&mut additional, entry)?;
    }

    let id = require(wire.id, "_id")?;
    let id = ProfileId::new(id).map_err(|err| ParseError::malformed_profile(err.to_string()))?;
    let bio = require(wire.bio, "bio")?;
    let birth_date_raw = require(wire.birth_date, "birth_date")?;
    let birth_date = datetime::parse_datetime(&birth_date_raw).map_err(|err| {
        ParseError::malformed_profile(format!("invalid birth_date {birth_date_raw:?}: {err}"))
    })?;
    let name = require(wire.name, "name")?;
    let distance_mi = require(wire.distance_mi, "distance_mi")?;

    let photos = require(wire.photos, "photos")?
        .into_iter()
        .map(|p| p.url)
        .filter(|url| !url.ends_with(STILL_FRAME_SUFFIX))
        .collect();

    Ok(Profile {
        id,
        bio,
        birth_date,
        name,
        photos,
        distance_mi,
        additional,
    })
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ParseError> {
    value.ok_or_else(|| ParseError::malformed_profile(format!("missing mandatory field `{field}`")))
}

/// Gender resolution: hidden wins, then custom free text, then the numeric
/// code (0 man, 1 woman). Unknown codes resolve to unset rather than an
/// error; consumers must tolerate an unset gender.
fn resolve_gender(
    show_on_profile: Option<bool>,
    custom: Option<String>,
    code: Option<i64>,
) -> Option<String> {
    if !show_on_profile.unwrap_or(true) {
        return None;
    }
    if let Some(custom) = custom {
        return Some(custom);
    }
    match code {
        Some(0) => Some("Man".to_owned()),
        Some(1) => Some("Woman".to_owned()),
        _ => None,
    }
}

fn apply_descriptor(info: &mut AdditionalInfo, wire: DescriptorWire) -> Result<(), ParseError> {
    let attribute = descriptor::resolve(&wire.section_name, wire.name.as_deref())?;

    let mut choices = wire.choice_selections.into_iter().map(|c| c.name);
    let first = choices.next().ok_or_else(|| {
        ParseError::malformed_profile(format!(
            "descriptor {:?} has no choice selections",
            wire.section_name
        ))
    })?;

    match attribute {
        DescriptorAttribute::Languages => {
            let mut all = vec![first];
            all.extend(choices);
            info.languages = Some(all);
        }
        DescriptorAttribute::RelationshipGoal => info.relationship_goal = Some(first),
        DescriptorAttribute::ZodiacSign => info.zodiac_sign = Some(first),
        DescriptorAttribute::EducationLevel => info.education_level = Some(first),
        DescriptorAttribute::ChildrenAttitude => info.children_attitude = Some(first),
        DescriptorAttribute::VaccinationStatus => info.vaccination_status = Some(first),
        DescriptorAttribute::PersonalityType => info.personality_type = Some(first),
        DescriptorAttribute::CommunicationStyle => info.communication_style = Some(first),
        DescriptorAttribute::LoveLanguage => info.love_language = Some(first),
        DescriptorAttribute::Pets => info.pets = Some(first),
        DescriptorAttribute::Drinking => info.drinking = Some(first),
        DescriptorAttribute::Smoking => info.smoking = Some(first),
        DescriptorAttribute::TrainingFrequency => info.training_frequency = Some(first),
        DescriptorAttribute::DietPreference => info.diet_preference = Some(first),
        DescriptorAttribute::SocialMediaPresence => info.social_media_presence = Some(first),
        DescriptorAttribute::SleepingHabits => info.sleeping_habits = Some(first),
    }
    Ok(())
}
