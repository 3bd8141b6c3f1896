use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_ACTIVE: &str = "ACTIVE";

/// A job or gig listing as stored by the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company_name: Option<String>,
    /// "job" | "gig"
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

fn default_kind() -> String {
    "job".to_string()
}

impl JobPosting {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_ACTIVE)
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}
