use sqlx::PgPool;
use uuid::Uuid;

use crate::models::posting::{JobPosting, STATUS_ACTIVE};
use crate::models::profile::SeekerProfile;

/// Loads the recommendation-relevant part of a seeker's profile.
pub async fn fetch_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<SeekerProfile>, sqlx::Error> {
    sqlx::query_as::<_, SeekerProfile>(
        r#"
        SELECT user_id, experience_level, preferred_job_types, skills
        FROM seeker_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Returns every active posting, newest first. This order is what ties keep
/// after ranking.
pub async fn fetch_active_postings(pool: &PgPool) -> Result<Vec<JobPosting>, sqlx::Error> {
    sqlx::query_as::<_, JobPosting>(
        r#"
        SELECT p.id, p.title, c.name AS company_name, p.kind,
               p.experience_level, p.job_type, p.tags, p.status, p.created_at
        FROM job_postings p
        LEFT JOIN companies c ON c.id = p.company_id
        WHERE p.status = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(STATUS_ACTIVE)
    .fetch_all(pool)
    .await
}
