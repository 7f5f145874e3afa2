use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{ExperienceLevel, PaymentType, ProjectScope, RemoteType};

/// Upper end of the budget slider in $/hr. A criteria range spanning the
/// whole slider imposes no budget constraint at all.
pub const BUDGET_SLIDER_CEILING: u32 = 200;

/// Hourly-rate range selected on the budget slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    #[serde(default)]
    pub min: u32,
    #[serde(default = "default_budget_max")]
    pub max: u32,
}

fn default_budget_max() -> u32 {
    BUDGET_SLIDER_CEILING
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: BUDGET_SLIDER_CEILING,
        }
    }
}

impl BudgetRange {
    /// The budget filter only engages once the slider has been moved off
    /// either end of its full range.
    pub fn is_narrowed(&self, ceiling: u32) -> bool {
        self.min > 0 || self.max < ceiling
    }
}

/// Recency bucket for the "date posted" filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePosted {
    #[default]
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "week")]
    LastWeek,
    #[serde(rename = "month")]
    LastMonth,
}

impl DatePosted {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Last24Hours => "24h",
            Self::LastWeek => "week",
            Self::LastMonth => "month",
        }
    }

    /// Oldest `created_at` still inside the bucket, relative to `now`.
    /// `Any` imposes no cutoff.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Any => None,
            Self::Last24Hours => Some(now - Duration::hours(24)),
            Self::LastWeek => Some(now - Duration::days(7)),
            Self::LastMonth => Some(now - Duration::days(30)),
        }
    }
}

/// Snapshot of the viewer's search state for one matching pass. Fields left
/// at their defaults impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub payment: Option<PaymentType>,
    #[serde(default)]
    pub scope: Option<ProjectScope>,
    #[serde(default)]
    pub experience: Option<ExperienceLevel>,
    #[serde(default)]
    pub remote: Option<RemoteType>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub date_posted: DatePosted,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub budget: BudgetRange,
}
