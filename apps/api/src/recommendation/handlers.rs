//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::models::profile::SeekerProfile;
use crate::recommendation::queries::{fetch_active_postings, fetch_profile};
use crate::recommendation::scoring::ScoredPosting;
use crate::recommendation::Recommender;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub profile: SeekerProfile,
    pub postings: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub postings: Vec<ScoredPosting>,
    pub total_candidates: usize,
    pub good_matches: usize,
    pub fallback_applied: bool,
    pub scorer_backend: String,
}

fn build_response(
    recommender: &dyn Recommender,
    profile: &SeekerProfile,
    postings: &[JobPosting],
) -> RecommendationResponse {
    let recommendation = recommender.recommend(profile, postings);
    RecommendationResponse {
        postings: recommendation.postings,
        total_candidates: recommendation.total_candidates,
        good_matches: recommendation.good_matches,
        fallback_applied: recommendation.fallback_applied,
        scorer_backend: recommender.backend().to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/seekers/:user_id/recommendations
///
/// Ranks all active postings for the seeker's stored profile.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let profile = fetch_profile(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Seeker profile {user_id} not found")))?;

    let postings = fetch_active_postings(&state.db).await?;

    let response = build_response(state.recommender.as_ref(), &profile, &postings);
    info!(
        "Recommended {} of {} postings for user {user_id} (fallback: {})",
        response.postings.len(),
        response.total_candidates,
        response.fallback_applied
    );

    Ok(Json(response))
}

/// POST /api/v1/recommendations/preview
///
/// Ranks caller-supplied postings against a caller-supplied profile.
/// Inactive postings are dropped before scoring; an empty candidate list
/// yields an empty response.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Json<RecommendationResponse> {
    let active: Vec<JobPosting> = request
        .postings
        .into_iter()
        .filter(JobPosting::is_active)
        .collect();

    Json(build_response(
        state.recommender.as_ref(),
        &request.profile,
        &active,
    ))
}
