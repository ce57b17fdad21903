use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Screens of the assessment flow, in visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Intro,
    Inputs,
    Scoring,
    Results,
}

/// Identifier of one of the seven fixed cost layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerId {
    Replacement,
    Productivity,
    Knowledge,
    Morale,
    Client,
    Manager,
    Culture,
}

impl LayerId {
    pub fn as_str(self) -> &'static str {
        match self {
            LayerId::Replacement => "replacement",
            LayerId::Productivity => "productivity",
            LayerId::Knowledge => "knowledge",
            LayerId::Morale => "morale",
            LayerId::Client => "client",
            LayerId::Manager => "manager",
            LayerId::Culture => "culture",
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replacement" => Ok(LayerId::Replacement),
            "productivity" => Ok(LayerId::Productivity),
            "knowledge" => Ok(LayerId::Knowledge),
            "morale" => Ok(LayerId::Morale),
            "client" => Ok(LayerId::Client),
            "manager" => Ok(LayerId::Manager),
            "culture" => Ok(LayerId::Culture),
            other => Err(DomainError::UnknownLayer(other.to_string())),
        }
    }
}

/// User-assigned rating of how strongly a cost layer applies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minimal,
    Low,
    #[default]
    Moderate,
    Significant,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Minimal,
        Severity::Low,
        Severity::Moderate,
        Severity::Significant,
        Severity::Severe,
    ];

    pub fn value(self) -> u8 {
        match self {
            Severity::Minimal => 1,
            Severity::Low => 2,
            Severity::Moderate => 3,
            Severity::Significant => 4,
            Severity::Severe => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::Significant => "Significant",
            Severity::Severe => "Severe",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Severity::Minimal),
            2 => Ok(Severity::Low),
            3 => Ok(Severity::Moderate),
            4 => Ok(Severity::Significant),
            5 => Ok(Severity::Severe),
            other => Err(DomainError::InvalidSeverity(other)),
        }
    }
}

/// Severity assignments keyed by layer. A missing entry reads as
/// [`Severity::Moderate`].
pub type SeverityScores = BTreeMap<LayerId, Severity>;

/// Names of the three organization input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgField {
    TeamSize,
    AvgSalary,
    TurnoverRate,
}

/// Raw organization inputs exactly as the user typed them. Parsing happens
/// at calculation time; these strings are never rewritten with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgInputs {
    pub team_size: String,
    pub avg_salary: String,
    pub turnover_rate: String,
}

impl OrgInputs {
    pub fn set(&mut self, field: OrgField, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            OrgField::TeamSize => self.team_size = raw,
            OrgField::AvgSalary => self.avg_salary = raw,
            OrgField::TurnoverRate => self.turnover_rate = raw,
        }
    }

    pub fn get(&self, field: OrgField) -> &str {
        match field {
            OrgField::TeamSize => &self.team_size,
            OrgField::AvgSalary => &self.avg_salary,
            OrgField::TurnoverRate => &self.turnover_rate,
        }
    }

    pub fn all_present(&self) -> bool {
        !self.team_size.is_empty() && !self.avg_salary.is_empty() && !self.turnover_rate.is_empty()
    }
}
