use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    ExperienceLevel, JobPosting, JobStatus, PaymentType, ProjectScope, RemoteType,
};

/// Payload for creating a posting. `id` and `created_at` are normally
/// assigned server-side; external feed imports may carry their own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitJobRequest {
    #[serde(default)]
    pub id: Option<String>,
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
    #[serde(default)]
    pub max_hourly_rate: Option<u32>,
    #[serde(default)]
    pub project_scope: Option<ProjectScope>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub remote_type: Option<RemoteType>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub application_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
}

impl SubmitJobRequest {
    /// Materialize an open posting, filling in the server-assigned fields
    /// where the submitter left them out.
    pub fn into_posting(self, assigned_id: String, received_at: DateTime<Utc>) -> JobPosting {
        JobPosting {
            id: self.id.unwrap_or(assigned_id),
            title: self.title,
            description: self.description,
            required_roles: self.required_roles,
            required_skills: self.required_skills,
            programming_languages: self.programming_languages,
            frameworks: self.frameworks,
            preferred_locations: self.preferred_locations,
            preferred_timezones: self.preferred_timezones,
            payment_type: self.payment_type,
            min_hourly_rate: self.min_hourly_rate,
            max_hourly_rate: self.max_hourly_rate,
            project_scope: self.project_scope,
            experience_level: self.experience_level,
            remote_type: self.remote_type,
            company_size: self.company_size,
            status: JobStatus::Open,
            created_at: self.created_at.unwrap_or(received_at),
            application_deadline: self.application_deadline,
            application_count: 0,
            external: self.external,
            source: self.source,
            original_url: self.original_url,
        }
    }
}
