use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub(crate) const READY_THRESHOLD: f64 = 4.0;
pub(crate) const DEVELOPING_THRESHOLD: f64 = 3.0;

/// Coarse readiness classification derived from the average behavioral level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessRating {
    #[serde(rename = "Not Assessed")]
    NotAssessed,
    Ready,
    Developing,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl ReadinessRating {
    pub const ORDERED: [ReadinessRating; 4] = [
        ReadinessRating::Ready,
        ReadinessRating::Developing,
        ReadinessRating::NotReady,
        ReadinessRating::NotAssessed,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotAssessed => "Not Assessed",
            Self::Ready => "Ready",
            Self::Developing => "Developing",
            Self::NotReady => "Not Ready",
        }
    }

    /// Estimated time until the candidate is ready; empty when not assessed.
    pub const fn time_to_readiness(self) -> &'static str {
        match self {
            Self::NotAssessed => "",
            Self::Ready => "<1 year",
            Self::Developing => "1-2 years",
            Self::NotReady => "2-3 years",
        }
    }

    pub const fn development_pathway(self) -> Option<DevelopmentPathway> {
        match self {
            Self::NotAssessed => None,
            Self::Ready => Some(DevelopmentPathway::Minimal),
            Self::Developing => Some(DevelopmentPathway::Moderate),
            Self::NotReady => Some(DevelopmentPathway::Extensive),
        }
    }
}

impl fmt::Display for ReadinessRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReadinessRating {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "ready" => Ok(Self::Ready),
            "developing" => Ok(Self::Developing),
            "notready" => Ok(Self::NotReady),
            "notassessed" => Ok(Self::NotAssessed),
            _ => Err(format!("unknown readiness rating '{value}'")),
        }
    }
}

/// How much development work remains before the candidate is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevelopmentPathway {
    Minimal,
    Moderate,
    Extensive,
}

impl DevelopmentPathway {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Moderate => "Moderate",
            Self::Extensive => "Extensive",
        }
    }
}

impl fmt::Display for DevelopmentPathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DevelopmentPathway {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "minimal" => Ok(Self::Minimal),
            "moderate" => Ok(Self::Moderate),
            "extensive" => Ok(Self::Extensive),
            _ => Err(format!("unknown development pathway '{value}'")),
        }
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Fixed thresholds: `>= 4.0` ready, `[3.0, 4.0)` developing, below that not ready.
pub(crate) fn classify(average: Option<f64>) -> ReadinessRating {
    match average {
        None => ReadinessRating::NotAssessed,
        Some(avg) if avg >= READY_THRESHOLD => ReadinessRating::Ready,
        Some(avg) if avg >= DEVELOPING_THRESHOLD => ReadinessRating::Developing,
        Some(_) => ReadinessRating::NotReady,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_closed_below_and_open_above() {
        assert_eq!(classify(Some(4.0)), ReadinessRating::Ready);
        assert_eq!(classify(Some(3.999)), ReadinessRating::Developing);
        assert_eq!(classify(Some(3.0)), ReadinessRating::Developing);
        assert_eq!(classify(Some(2.999)), ReadinessRating::NotReady);
        assert_eq!(classify(Some(1.0)), ReadinessRating::NotReady);
        assert_eq!(classify(None), ReadinessRating::NotAssessed);
    }

    #[test]
    fn ratings_parse_from_labels_and_cli_spellings() {
        assert_eq!("Not Ready".parse(), Ok(ReadinessRating::NotReady));
        assert_eq!("not-assessed".parse(), Ok(ReadinessRating::NotAssessed));
        assert_eq!("READY".parse(), Ok(ReadinessRating::Ready));
        assert!("promotable".parse::<ReadinessRating>().is_err());
        assert_eq!("moderate".parse(), Ok(DevelopmentPathway::Moderate));
    }

    #[test]
    fn rating_drives_time_and_pathway() {
        assert_eq!(ReadinessRating::Ready.time_to_readiness(), "<1 year");
        assert_eq!(
            ReadinessRating::NotReady.development_pathway(),
            Some(DevelopmentPathway::Extensive)
        );
        assert_eq!(ReadinessRating::NotAssessed.time_to_readiness(), "");
        assert_eq!(ReadinessRating::NotAssessed.development_pathway(), None);
    }
}
