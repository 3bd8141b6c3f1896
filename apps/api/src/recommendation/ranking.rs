use serde::Serialize;
use tracing::debug;

use crate::recommendation::scoring::ScoredPosting;

/// Decides which scored postings are shown.
///
/// Postings scoring at least `good_match_score` are good matches. When fewer
/// than `min_good_matches` exist the whole ranked list is returned instead,
/// so a sparse profile still sees something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    pub good_match_score: u32,
    pub min_good_matches: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            good_match_score: 1,
            min_good_matches: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub postings: Vec<ScoredPosting>,
    pub total_candidates: usize,
    pub good_matches: usize,
    pub fallback_applied: bool,
}

/// Sorts descending by score (stable, ties keep input order) and applies the
/// fallback policy.
pub fn rank(mut scored: Vec<ScoredPosting>, policy: &RankingPolicy) -> Ranking {
    let total_candidates = scored.len();
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let good_matches = scored
        .iter()
        .filter(|p| p.score >= policy.good_match_score)
        .count();
    let fallback_applied = good_matches < policy.min_good_matches;

    if !fallback_applied {
        // Sorted descending, so the good matches are a prefix.
        scored.truncate(good_matches);
    }

    debug!(
        total_candidates,
        good_matches, fallback_applied, "Ranked recommendation candidates"
    );

    Ranking {
        postings: scored,
        total_candidates,
        good_matches,
        fallback_applied,
    }
}
