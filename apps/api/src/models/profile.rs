use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Job seeker preferences used for recommendations.
/// Any field may be missing; missing fields simply never match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, FromRow)]
pub struct SeekerProfile {
    #[serde(default)]
    pub user_id: Uuid,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub preferred_job_types: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

impl SeekerProfile {
    pub fn preferred_job_types(&self) -> &[String] {
        self.preferred_job_types.as_deref().unwrap_or_default()
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }
}
