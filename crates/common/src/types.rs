use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operator-stated priority on an incoming lead. Defaults to Medium when the
/// import layer supplies nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("unknown priority: {value}")),
        }
    }
}

/// A company record as handed over by the persistence/import layer.
///
/// Optional fields default safely: missing numbers behave as zero for
/// comparisons, missing priority is Medium. The scoring core never mutates
/// a lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadInput {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub company: String,
    pub sector: String,
    #[serde(default)]
    pub sub_sector: Option<String>,
    #[serde(default)]
    pub use_case: Option<String>,
    /// Annual revenue in billions of dollars.
    #[serde(default)]
    pub revenue_b: Option<f64>,
    #[serde(default)]
    pub employees: Option<u32>,
    /// Free-text label describing where the lead came from.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Set once enrichment data has been attached to the lead.
    #[serde(default)]
    pub enriched_at: Option<DateTime<Utc>>,
}

impl LeadInput {
    pub fn is_enriched(&self) -> bool {
        self.enriched_at.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
}

impl ServiceInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
        }
    }
}
