use std::collections::HashSet;

use serde::Serialize;

use crate::models::posting::JobPosting;
use crate::models::profile::SeekerProfile;
use crate::recommendation::normalize::{normalize_label, normalize_skill};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub experience_level: u32,
    pub job_type: u32,
    pub per_matching_tag: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            experience_level: 10,
            job_type: 5,
            per_matching_tag: 2,
        }
    }
}

/// A posting together with its relevance score. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub score: u32,
}

/// The profile side of scoring, normalized once and reused for every posting.
#[derive(Debug, Clone, Default)]
pub struct ProfileSignals {
    experience_level: Option<String>,
    job_types: HashSet<String>,
    skills: HashSet<String>,
}

impl ProfileSignals {
    pub fn from_profile(profile: &SeekerProfile) -> Self {
        Self {
            experience_level: profile
                .experience_level
                .as_deref()
                .and_then(normalize_label),
            job_types: profile
                .preferred_job_types()
                .iter()
                .filter_map(|t| normalize_label(t))
                .collect(),
            skills: profile
                .skills()
                .iter()
                .filter_map(|s| normalize_skill(s))
                .collect(),
        }
    }
}

/// Scores one posting against a profile.
///
/// - experience level match (normalized) → `weights.experience_level`
/// - posting job type among preferred types (normalized) → `weights.job_type`
/// - each tag matching a skill (case-insensitive) → `weights.per_matching_tag`
///
/// Duplicate matching tags each count.
pub fn score_posting(signals: &ProfileSignals, posting: &JobPosting, weights: &ScoringWeights) -> u32 {
    let mut score = 0;

    let posting_level = posting.experience_level.as_deref().and_then(normalize_label);
    if posting_level.is_some() && posting_level == signals.experience_level {
        score += weights.experience_level;
    }

    if let Some(job_type) = posting.job_type.as_deref().and_then(normalize_label) {
        if signals.job_types.contains(&job_type) {
            score += weights.job_type;
        }
    }

    let matching_tags = posting
        .tags()
        .iter()
        .filter_map(|t| normalize_skill(t))
        .filter(|t| signals.skills.contains(t))
        .count() as u32;
    score += weights.per_matching_tag * matching_tags;

    score
}

/// Scores every posting, preserving input order.
pub fn score_postings(
    profile: &SeekerProfile,
    postings: &[JobPosting],
    weights: &ScoringWeights,
) -> Vec<ScoredPosting> {
    let signals = ProfileSignals::from_profile(profile);
    postings
        .iter()
        .map(|posting| ScoredPosting {
            score: score_posting(&signals, posting, weights),
            posting: posting.clone(),
        })
        .collect()
}
