//! Mapping from the server's free-form descriptor vocabulary onto the fixed
//! [`AdditionalInfo`](crate::domain::AdditionalInfo) schema.
//!
//! Profile payloads carry a `selected_descriptors` list whose entries are
//! identified by a `section_name` plus an optional `name`. The route table
//! below is the complete vocabulary this crate understands; anything outside
//! it is a hard error so that new server-side categories surface immediately
//! instead of being dropped on the floor.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Canonical attribute a descriptor entry resolves to.
pub enum DescriptorAttribute {
    RelationshipGoal,
    ZodiacSign,
    EducationLevel,
    ChildrenAttitude,
    VaccinationStatus,
    PersonalityType,
    CommunicationStyle,
    LoveLanguage,
    Pets,
    Drinking,
    Smoking,
    TrainingFrequency,
    DietPreference,
    SocialMediaPresence,
    SleepingHabits,
    Languages,
}

impl DescriptorAttribute {
    /// Whether the attribute keeps the full ordered selection list.
    ///
    /// Single-value attributes take only the first selected choice.
    pub fn is_multi_value(self) -> bool {
        matches!(self, Self::Languages)
    }
}

/// One row of the descriptor route table.
///
/// `name: None` matches entries whose category carries no sub-name.
struct DescriptorRoute {
    section: &'static str,
    name: Option<&'static str>,
    attribute: DescriptorAttribute,
}

const fn route(
    section: &'static str,
    name: Option<&'static str>,
    attribute: DescriptorAttribute,
) -> DescriptorRoute {
    DescriptorRoute {
        section,
        name,
        attribute,
    }
}

/// Complete descriptor vocabulary, exact-matched on `(section, name)`.
static ROUTES: &[DescriptorRoute] = &[
    route("Basics", Some("Zodiac"), DescriptorAttribute::ZodiacSign),
    route("Basics", Some("Education"), DescriptorAttribute::EducationLevel),
    route(
        "Basics",
        Some("Family Plans"),
        DescriptorAttribute::ChildrenAttitude,
    ),
    route(
        "Basics",
        Some("COVID Vaccine"),
        DescriptorAttribute::VaccinationStatus,
    ),
    route(
        "Basics",
        Some("Personality Type"),
        DescriptorAttribute::PersonalityType,
    ),
    route(
        "Basics",
        Some("Communication Style"),
        DescriptorAttribute::CommunicationStyle,
    ),
    route("Basics", Some("Love Style"), DescriptorAttribute::LoveLanguage),
    route("Lifestyle", Some("Pets"), DescriptorAttribute::Pets),
    route("Lifestyle", Some("Drinking"), DescriptorAttribute::Drinking),
    route("Lifestyle", Some("Smoking"), DescriptorAttribute::Smoking),
    route(
        "Lifestyle",
        Some("Workout"),
        DescriptorAttribute::TrainingFrequency,
    ),
    route(
        "Lifestyle",
        Some("Dietary Preference"),
        DescriptorAttribute::DietPreference,
    ),
    route(
        "Lifestyle",
        Some("Social Media"),
        DescriptorAttribute::SocialMediaPresence,
    ),
    route(
        "Lifestyle",
        Some("Sleeping Habits"),
        DescriptorAttribute::SleepingHabits,
    ),
    route(
        "Relationship Goals",
        Some("Looking for"),
        DescriptorAttribute::RelationshipGoal,
    ),
    route("Languages I Know", None, DescriptorAttribute::Languages),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown descriptor section/name: {section:?} {name:?}")]
/// A `(section, name)` pair outside the route table.
///
/// This is fatal to profile parsing: an unmodeled vocabulary term means the
/// domain model is missing a field the server now sends.
pub struct UnknownDescriptor {
    pub section: String,
    pub name: Option<String>,
}

/// Resolve a descriptor `(section, name)` pair to its canonical attribute.
///
/// Pure exact lookup against the static route table; no normalization is
/// applied to either input.
pub fn resolve(
    section: &str,
    name: Option<&str>,
) -> Result<DescriptorAttribute, UnknownDescriptor> {
    ROUTES
        .iter()
        .find(|r| r.section == section && r.name == name)
        .map(|r| r.attribute)
        .ok_or_else(|| UnknownDescriptor {
            section: section.to_owned(),
            name: name.map(str::to_owned),
        })
}
