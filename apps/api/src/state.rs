use std::sync::Arc;

use sqlx::PgPool;

use crate::recommendation::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable recommender. Default: WeightedRecommender built from config.
    pub recommender: Arc<dyn Recommender>,
}
