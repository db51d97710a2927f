use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::catalog::{DevelopmentNeed, Domain};

/// Rubric-anchored proficiency, guaranteed to lie in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BehavioralLevel(u8);

impl BehavioralLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&level)
            .then_some(Self(level))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for BehavioralLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Behavioral level as captured from a rating select.
///
/// The form sends free text, so parsing never fails: blank input is `Unset`, an integer in
/// `1..=5` is `Valid`, and anything else is kept verbatim as `Invalid`. Only `Valid` ratings
/// take part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Rating {
    #[default]
    Unset,
    Valid(BehavioralLevel),
    Invalid(String),
}

impl Rating {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Rating::Unset;
        }

        match trimmed.parse::<i64>() {
            Ok(value) => Self::from_integer(value),
            Err(_) => Rating::Invalid(raw.to_string()),
        }
    }

    pub fn from_integer(value: i64) -> Self {
        u8::try_from(value)
            .ok()
            .and_then(BehavioralLevel::new)
            .map(Rating::Valid)
            .unwrap_or_else(|| Rating::Invalid(value.to_string()))
    }

    pub fn level(&self) -> Option<BehavioralLevel> {
        match self {
            Rating::Valid(level) => Some(*level),
            Rating::Unset | Rating::Invalid(_) => None,
        }
    }

    /// Scoring representation: the level, or 0 when unset or invalid.
    pub fn score(&self) -> u8 {
        self.level().map(BehavioralLevel::get).unwrap_or(0)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Rating::Valid(_))
    }
}

impl From<BehavioralLevel> for Rating {
    fn from(level: BehavioralLevel) -> Self {
        Rating::Valid(level)
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Rating::Unset => serializer.serialize_str(""),
            Rating::Valid(level) => serializer.serialize_str(&level.to_string()),
            Rating::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRating {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawRating>::deserialize(deserializer)?;
        Ok(match raw {
            None => Rating::Unset,
            Some(RawRating::Text(text)) => Rating::parse(&text),
            Some(RawRating::Integer(value)) => Rating::from_integer(value),
            Some(RawRating::Decimal(value)) => Rating::Invalid(value.to_string()),
            Some(RawRating::Flag(value)) => Rating::Invalid(value.to_string()),
        })
    }
}

/// Assessment captured for one domain of one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainScore {
    pub behavioral_level: Rating,
    #[serde(deserialize_with = "null_as_default")]
    pub evidence: String,
    #[serde(
        serialize_with = "serialize_need",
        deserialize_with = "deserialize_need"
    )]
    pub development_needed: Option<DevelopmentNeed>,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
}

/// Treat an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn serialize_need<S>(value: &Option<DevelopmentNeed>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(need) => need.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_need<'de, D>(deserializer: D) -> Result<Option<DevelopmentNeed>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.trim().to_ascii_lowercase().as_str() {
        "minimal" => Some(DevelopmentNeed::Minimal),
        "moderate" => Some(DevelopmentNeed::Moderate),
        "extensive" => Some(DevelopmentNeed::Extensive),
        _ => None,
    }))
}

/// One `DomainScore` per LEADS domain.
///
/// Missing keys deserialize as unset scores and unknown keys are dropped, so a partially keyed
/// payload behaves exactly like one with blank ratings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadsScoreSet {
    #[serde(deserialize_with = "null_as_default")]
    pub lead_self: DomainScore,
    #[serde(deserialize_with = "null_as_default")]
    pub engage_others: DomainScore,
    #[serde(deserialize_with = "null_as_default")]
    pub achieve_results: DomainScore,
    #[serde(deserialize_with = "null_as_default")]
    pub develop_coalitions: DomainScore,
    #[serde(deserialize_with = "null_as_default")]
    pub systems_transformation: DomainScore,
}

impl LeadsScoreSet {
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = (Domain, Rating)>,
    {
        let mut set = Self::default();
        for (domain, rating) in ratings {
            set.get_mut(domain).behavioral_level = rating;
        }
        set
    }

    pub fn get(&self, domain: Domain) -> &DomainScore {
        match domain {
            Domain::LeadSelf => &self.lead_self,
            Domain::EngageOthers => &self.engage_others,
            Domain::AchieveResults => &self.achieve_results,
            Domain::DevelopCoalitions => &self.develop_coalitions,
            Domain::SystemsTransformation => &self.systems_transformation,
        }
    }

    pub fn get_mut(&mut self, domain: Domain) -> &mut DomainScore {
        match domain {
            Domain::LeadSelf => &mut self.lead_self,
            Domain::EngageOthers => &mut self.engage_others,
            Domain::AchieveResults => &mut self.achieve_results,
            Domain::DevelopCoalitions => &mut self.develop_coalitions,
            Domain::SystemsTransformation => &mut self.systems_transformation,
        }
    }

    /// Scores in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Domain, &DomainScore)> + '_ {
        Domain::ALL.into_iter().map(move |domain| (domain, self.get(domain)))
    }

    pub fn has_valid_level(&self) -> bool {
        self.iter().any(|(_, score)| score.behavioral_level.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_parse_is_tolerant() {
        assert_eq!(Rating::parse(""), Rating::Unset);
        assert_eq!(Rating::parse("   "), Rating::Unset);
        assert_eq!(Rating::parse(" 4 ").score(), 4);
        assert_eq!(Rating::parse("0"), Rating::Invalid("0".to_string()));
        assert_eq!(Rating::parse("6"), Rating::Invalid("6".to_string()));
        assert_eq!(Rating::parse("expert"), Rating::Invalid("expert".to_string()));
        assert_eq!(Rating::from_integer(-3).score(), 0);
    }

    #[test]
    fn score_set_deserializes_strings_numbers_and_missing_keys() {
        let payload = serde_json::json!({
            "leadSelf": { "behavioralLevel": "4", "evidence": "Led budget review" },
            "engageOthers": { "behavioralLevel": 3, "developmentNeeded": "moderate" },
            "achieveResults": { "behavioralLevel": null },
            "developCoalitions": { "behavioralLevel": "n/a" },
            "leadTeams": { "behavioralLevel": "5" }
        });

        let set: LeadsScoreSet = serde_json::from_value(payload).expect("score set parses");

        assert_eq!(set.lead_self.behavioral_level.score(), 4);
        assert_eq!(set.lead_self.evidence, "Led budget review");
        assert_eq!(set.engage_others.behavioral_level.score(), 3);
        assert_eq!(
            set.engage_others.development_needed,
            Some(DevelopmentNeed::Moderate)
        );
        assert_eq!(set.achieve_results.behavioral_level, Rating::Unset);
        assert_eq!(
            set.develop_coalitions.behavioral_level,
            Rating::Invalid("n/a".to_string())
        );
        assert_eq!(set.systems_transformation, DomainScore::default());
    }

    #[test]
    fn score_set_treats_null_text_and_domains_as_blank() {
        let raw = r#"{
            "leadSelf": { "behavioralLevel": "4", "evidence": null, "notes": null },
            "leadTeams": null
        }"#;

        let set: LeadsScoreSet = serde_json::from_str(raw).expect("null fields are tolerated");

        assert_eq!(set.lead_self.behavioral_level.score(), 4);
        assert_eq!(set.lead_self.evidence, "");
        assert_eq!(set.lead_self.notes, "");
        assert_eq!(set.lead_teams, DomainScore::default());
    }

    #[test]
    fn score_set_serializes_in_form_shape() {
        let set = LeadsScoreSet::from_ratings([(Domain::AchieveResults, Rating::parse("2"))]);

        let value = serde_json::to_value(&set).expect("serializes");

        assert_eq!(value["achieveResults"]["behavioralLevel"], "2");
        assert_eq!(value["leadSelf"]["behavioralLevel"], "");
        assert_eq!(value["leadSelf"]["developmentNeeded"], "");
    }
}
