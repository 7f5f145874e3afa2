pub mod api;
pub mod board;
pub mod logging;
pub mod matching;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Core data models shared by the board, the match engine, and the API.

/// One job or collaboration opportunity on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_roles: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub programming_languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub preferred_timezones: Vec<String>,
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub min_hourly_rate: Option<u32>,
    /// Absent means the poster left the rate open-ended.
    #[serde(default)]
    pub max_hourly_rate: Option<u32>,
    #[serde(default)]
    pub project_scope: Option<ProjectScope>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub remote_type: Option<RemoteType>,
    /// Free-form bucket label such as "1-10" or "50+".
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub application_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub application_count: u32,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
}

impl JobPosting {
    /// Where an applicant is sent for this posting. External listings with a
    /// known original URL never open the in-app application form.
    pub fn apply_route(&self) -> ApplyRoute {
        match &self.original_url {
            Some(url) if self.external => ApplyRoute::ExternalLink(url.clone()),
            _ => ApplyRoute::InApp,
        }
    }
}

/// Routing decision for an application attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyRoute {
    InApp,
    ExternalLink(String),
}

impl ApplyRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyRoute::InApp => "in_app",
            ApplyRoute::ExternalLink(_) => "external",
        }
    }
}

/// Reduced projection of a signed-in user, used only for ranking. Anonymous
/// browsing passes no profile at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub developer_roles: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Usd,
    Eur,
    Crypto,
    HourlyRate,
    FixedPrice,
    Equity,
    RevShare,
}

impl PaymentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Crypto => "Crypto",
            Self::HourlyRate => "Hourly Rate",
            Self::FixedPrice => "Fixed Price",
            Self::Equity => "Equity",
            Self::RevShare => "Rev-Share",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectScope {
    SmallTask,
    PartTime,
    FullTime,
    LongTerm,
}

impl ProjectScope {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SmallTask => "Small Task",
            Self::PartTime => "Part-time",
            Self::FullTime => "Full-time",
            Self::LongTerm => "Long-term",
        }
    }
}

/// Seniority ladder, ordered from Junior up to Principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
    Principal,
}

impl ExperienceLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Junior,
            Self::Mid,
            Self::Senior,
            Self::Lead,
            Self::Principal,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Principal => "Principal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteType {
    Remote,
    Hybrid,
    OnSite,
}

impl RemoteType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
            Self::OnSite => "On-site",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Filled,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Filled => "Filled",
        }
    }
}
