use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five LEADS leadership domains, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Domain {
    LeadSelf,
    EngageOthers,
    AchieveResults,
    DevelopCoalitions,
    SystemsTransformation,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::LeadSelf,
        Domain::EngageOthers,
        Domain::AchieveResults,
        Domain::DevelopCoalitions,
        Domain::SystemsTransformation,
    ];

    /// Identifier used by score sets and seed data.
    pub const fn id(self) -> &'static str {
        match self {
            Domain::LeadSelf => "leadSelf",
            Domain::EngageOthers => "engageOthers",
            Domain::AchieveResults => "achieveResults",
            Domain::DevelopCoalitions => "developCoalitions",
            Domain::SystemsTransformation => "systemsTransformation",
        }
    }

    const fn index(self) -> usize {
        match self {
            Domain::LeadSelf => 0,
            Domain::EngageOthers => 1,
            Domain::AchieveResults => 2,
            Domain::DevelopCoalitions => 3,
            Domain::SystemsTransformation => 4,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Domain {
    type Err = CatalogError;

    /// Accepts the camelCase identifier or a kebab/snake variant (`lead-self`, `lead_self`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Domain::ALL
            .into_iter()
            .find(|domain| domain.id().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CatalogError::UnknownDomain(value.to_string()))
    }
}

/// Raised when an identifier outside the fixed five domains reaches the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown LEADS domain '{0}'")]
    UnknownDomain(String),
}

/// Catalog entry for a single domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainDefinition {
    pub domain: Domain,
    pub name: &'static str,
    pub description: &'static str,
    pub behaviors: &'static [&'static str],
    #[serde(skip)]
    pub(crate) guidance: DevelopmentGuidance,
}

/// Canned recommendation text for the two remedial tiers of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DevelopmentGuidance {
    pub(crate) foundational: &'static str,
    pub(crate) expand: &'static str,
}

/// Rubric anchor for one behavioral level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringLevel {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// Qualitative amount of development a domain still needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentNeed {
    Minimal,
    Moderate,
    Extensive,
}

impl DevelopmentNeed {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Moderate => "Moderate",
            Self::Extensive => "Extensive",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Minimal => "Ready for role with minor development",
            Self::Moderate => "Some targeted development needed",
            Self::Extensive => "Significant development required",
        }
    }
}

/// Immutable LEADS catalog handed to the scoring collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadsFramework {
    domains: [DomainDefinition; 5],
    scoring_levels: [ScoringLevel; 5],
}

impl LeadsFramework {
    pub fn standard() -> Self {
        Self {
            domains: [
                DomainDefinition {
                    domain: Domain::LeadSelf,
                    name: "Lead Self",
                    description: "Self-awareness, emotional regulation, and personal accountability",
                    behaviors: &[
                        "Demonstrates self-awareness and emotional intelligence",
                        "Takes accountability for decisions and outcomes",
                        "Manages stress and maintains composure under pressure",
                        "Seeks feedback and acts on development opportunities",
                        "Models ethical behavior and integrity",
                    ],
                    guidance: DevelopmentGuidance {
                        foundational: "Engage in executive coaching focused on self-awareness and emotional intelligence. Consider 360-degree feedback assessment.",
                        expand: "Continue leadership development through advanced executive programs and peer coaching.",
                    },
                },
                DomainDefinition {
                    domain: Domain::EngageOthers,
                    name: "Engage Others",
                    description: "Building relationships, communication, and influence",
                    behaviors: &[
                        "Builds and maintains effective relationships",
                        "Communicates clearly and persuasively",
                        "Listens actively and empathetically",
                        "Influences and motivates others",
                        "Demonstrates cultural competence and inclusion",
                    ],
                    guidance: DevelopmentGuidance {
                        foundational: "Develop communication and influence skills through targeted training and practice opportunities.",
                        expand: "Expand influence through cross-functional leadership roles and stakeholder engagement.",
                    },
                },
                DomainDefinition {
                    domain: Domain::AchieveResults,
                    name: "Achieve Results",
                    description: "Goal setting, execution, and performance management",
                    behaviors: &[
                        "Sets clear goals and expectations",
                        "Drives execution and delivers results",
                        "Makes data-driven decisions",
                        "Manages resources effectively",
                        "Holds self and others accountable for performance",
                    ],
                    guidance: DevelopmentGuidance {
                        foundational: "Focus on goal-setting, accountability, and performance management training.",
                        expand: "Take on larger scope responsibilities with P&L accountability.",
                    },
                },
                DomainDefinition {
                    domain: Domain::DevelopCoalitions,
                    name: "Develop Coalitions",
                    description: "Stakeholder engagement and partnership building",
                    behaviors: &[
                        "Identifies and engages key stakeholders",
                        "Builds strategic partnerships and alliances",
                        "Navigates complex political environments",
                        "Negotiates win-win solutions",
                        "Represents organization effectively externally",
                    ],
                    guidance: DevelopmentGuidance {
                        foundational: "Gain experience in stakeholder management and partnership development.",
                        expand: "Lead external-facing initiatives and represent organization in industry forums.",
                    },
                },
                DomainDefinition {
                    domain: Domain::SystemsTransformation,
                    name: "Systems Transformation",
                    description: "Change leadership and organizational development",
                    behaviors: &[
                        "Thinks systemically about organizational challenges",
                        "Leads change and transformation initiatives",
                        "Anticipates and adapts to environmental changes",
                        "Develops organizational capabilities",
                        "Creates sustainable improvements",
                    ],
                    guidance: DevelopmentGuidance {
                        foundational: "Participate in change management training and lead smaller transformation initiatives.",
                        expand: "Lead enterprise-wide transformation efforts and develop systems thinking capabilities.",
                    },
                },
            ],
            scoring_levels: [
                ScoringLevel {
                    level: 1,
                    name: "Foundational",
                    description: "Basic understanding and occasional demonstration",
                },
                ScoringLevel {
                    level: 2,
                    name: "Developing",
                    description: "Growing competence with some consistency",
                },
                ScoringLevel {
                    level: 3,
                    name: "Proficient",
                    description: "Consistent demonstration of competence",
                },
                ScoringLevel {
                    level: 4,
                    name: "Advanced",
                    description: "Strong competence with ability to coach others",
                },
                ScoringLevel {
                    level: 5,
                    name: "Expert",
                    description: "Exceptional competence and recognized expertise",
                },
            ],
        }
    }

    pub fn domain(&self, domain: Domain) -> &DomainDefinition {
        &self.domains[domain.index()]
    }

    /// Domain definitions in catalog order.
    pub fn domains(&self) -> &[DomainDefinition] {
        &self.domains
    }

    pub fn scoring_levels(&self) -> &[ScoringLevel] {
        &self.scoring_levels
    }

    /// Rubric anchor for a level, `None` outside 1..=5.
    pub fn scoring_level(&self, level: u8) -> Option<&ScoringLevel> {
        self.scoring_levels.iter().find(|entry| entry.level == level)
    }
}

impl Default for LeadsFramework {
    fn default() -> Self {
        Self::standard()
    }
}
