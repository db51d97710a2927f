use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::leads::domain::null_as_default;
use crate::leads::{DevelopmentPathway, LeadsScoreSet, ReadinessRating, ReadinessResult};

/// Numeric identifier of a candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceRating {
    Exceeds,
    Meets,
    Below,
}

impl PerformanceRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exceeds => "Exceeds",
            Self::Meets => "Meets",
            Self::Below => "Below",
        }
    }
}

impl fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PerformanceRating {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exceeds" => Ok(Self::Exceeds),
            "meets" => Ok(Self::Meets),
            "below" => Ok(Self::Below),
            _ => Err(format!("unknown performance rating '{value}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotentialRating {
    High,
    Medium,
    Low,
}

impl PotentialRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for PotentialRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PotentialRating {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("unknown potential rating '{value}'")),
        }
    }
}

/// Shared scale for the impact of losing a candidate and the resulting retention risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown risk level '{value}'")),
        }
    }
}

/// Position held inside or outside the organization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub division: String,
    #[serde(
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_default")]
    pub program: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevelopmentPlan {
    #[serde(deserialize_with = "null_as_default")]
    pub key_areas: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetentionProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub factors: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reason_for_leaving: String,
    #[serde(
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub impact_of_loss: Option<RiskLevel>,
    #[serde(
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub risk_of_loss: Option<RiskLevel>,
}

/// Profile fields captured by the succession form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(deserialize_with = "null_as_default")]
    pub portfolio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credentials: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub length_of_service: u32,
    #[serde(
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub performance_rating: Option<PerformanceRating>,
    #[serde(
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub potential_rating: Option<PotentialRating>,
    #[serde(deserialize_with = "null_as_default")]
    pub leadership_accomplishments: String,
    #[serde(deserialize_with = "null_as_default")]
    pub demonstrated_strengths: String,
    #[serde(deserialize_with = "null_as_default")]
    pub work_history: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub development_plan: DevelopmentPlan,
    #[serde(deserialize_with = "null_as_default")]
    pub retention_profile: RetentionProfile,
}

/// Stored candidate: profile, LEADS scores, and the last computed readiness fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(rename = "Id")]
    pub id: CandidateId,
    #[serde(flatten)]
    pub profile: CandidateProfile,
    #[serde(default, deserialize_with = "null_as_default")]
    pub leads_scores: LeadsScoreSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_leads_score: u32,
    #[serde(
        default,
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub readiness_rating: Option<ReadinessRating>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_to_readiness: String,
    #[serde(
        default,
        serialize_with = "serialize_or_empty",
        deserialize_with = "empty_string_as_none"
    )]
    pub development_pathway: Option<DevelopmentPathway>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Candidate {
    pub fn new(id: CandidateId, profile: CandidateProfile) -> Self {
        Self {
            id,
            profile,
            leads_scores: LeadsScoreSet::default(),
            total_leads_score: 0,
            readiness_rating: None,
            time_to_readiness: String::new(),
            development_pathway: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Denormalize a computed result onto the record.
    pub fn apply_result(&mut self, result: &ReadinessResult) {
        self.total_leads_score = result.total_score;
        self.readiness_rating = Some(result.readiness_rating);
        self.time_to_readiness = result.time_to_readiness.to_string();
        self.development_pathway = result.development_pathway;
    }

    pub fn risk_of_loss(&self) -> Option<RiskLevel> {
        self.profile.retention_profile.risk_of_loss
    }

    pub fn readiness_label(&self) -> &'static str {
        self.readiness_rating
            .map(ReadinessRating::label)
            .unwrap_or("")
    }
}

pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

pub(crate) fn serialize_or_empty<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: fmt::Display,
{
    match value {
        Some(inner) => serializer.collect_str(inner),
        None => serializer.serialize_str(""),
    }
}
