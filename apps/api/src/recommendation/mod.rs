//! Job recommendations: scores active postings against a seeker profile and
//! orders them by relevance.
//!
//! `AppState` holds an `Arc<dyn Recommender>`, built at startup from config.

pub mod handlers;
pub mod normalize;
pub mod queries;
pub mod ranking;
pub mod scoring;

use serde::Serialize;

use crate::models::posting::JobPosting;
use crate::models::profile::SeekerProfile;
use crate::recommendation::ranking::{rank, RankingPolicy};
use crate::recommendation::scoring::{score_postings, ScoredPosting, ScoringWeights};

/// Ordered recommendations for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub postings: Vec<ScoredPosting>,
    pub total_candidates: usize,
    pub good_matches: usize,
    pub fallback_applied: bool,
}

impl Recommendation {
    /// Drops the scores, leaving postings in ranked order.
    pub fn into_postings(self) -> Vec<JobPosting> {
        self.postings.into_iter().map(|p| p.posting).collect()
    }
}

/// Implement this to swap the ranking backend without touching handlers.
///
/// `postings` must already be restricted to active listings. Implementations
/// only borrow their inputs.
pub trait Recommender: Send + Sync {
    fn recommend(&self, profile: &SeekerProfile, postings: &[JobPosting]) -> Recommendation;

    fn backend(&self) -> &'static str;
}

/// Default recommender: additive integer score per matching factor, stable
/// descending sort, fallback to the full list when good matches are scarce.
#[derive(Debug, Clone, Default)]
pub struct WeightedRecommender {
    pub weights: ScoringWeights,
    pub policy: RankingPolicy,
}

impl WeightedRecommender {
    pub fn new(weights: ScoringWeights, policy: RankingPolicy) -> Self {
        Self { weights, policy }
    }
}

impl Recommender for WeightedRecommender {
    fn recommend(&self, profile: &SeekerProfile, postings: &[JobPosting]) -> Recommendation {
        let ranking = rank(score_postings(profile, postings, &self.weights), &self.policy);
        Recommendation {
            postings: ranking.postings,
            total_candidates: ranking.total_candidates,
            good_matches: ranking.good_matches,
            fallback_applied: ranking.fallback_applied,
        }
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

/// Plain ranking entry point: default weights and policy, scores dropped.
/// The HTTP layer goes through `Recommender` instead because it reports
/// scores; this is for callers that only need the ordered postings.
#[allow(dead_code)]
pub fn recommend(profile: &SeekerProfile, postings: &[JobPosting]) -> Vec<JobPosting> {
    WeightedRecommender::default()
        .recommend(profile, postings)
        .into_postings()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::scoring::tests::{make_posting, make_profile};
    use proptest::prelude::*;

    #[test]
    fn test_three_postings_two_matches_returns_all_three() {
        let profile = make_profile(Some("Mid Level"), &[], &["rust"]);
        let postings = vec![
            make_posting("none", Some("SENIOR"), None, &["java"]),
            make_posting("tag", None, None, &["Rust"]),
            make_posting("level", Some("MID_LEVEL"), None, &[]),
        ];

        let result = recommend(&profile, &postings);
        let titles: Vec<&str> = result.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["level", "tag", "none"]);
    }

    #[test]
    fn test_six_postings_five_matches_returns_those_five() {
        let profile = make_profile(Some("junior"), &["part time"], &["sql"]);
        let postings = vec![
            make_posting("a", Some("JUNIOR"), None, &[]),
            make_posting("b", None, None, &["SQL"]),
            make_posting("c", None, None, &[]),
            make_posting("d", Some("JUNIOR"), Some("PART_TIME"), &["sql"]),
            make_posting("e", None, Some("Part Time"), &[]),
            make_posting("f", None, None, &["sql", "sql"]),
        ];

        let recommendation = WeightedRecommender::default().recommend(&profile, &postings);
        assert!(!recommendation.fallback_applied);
        let ranked: Vec<(&str, u32)> = recommendation
            .postings
            .iter()
            .map(|p| (p.posting.title.as_str(), p.score))
            .collect();
        assert_eq!(
            ranked,
            vec![("d", 17), ("a", 10), ("e", 5), ("f", 4), ("b", 2)]
        );
    }

    #[test]
    fn test_recommend_matches_default_recommender_without_scores() {
        let profile = make_profile(None, &["contract"], &["figma"]);
        let postings = vec![
            make_posting("plain", None, None, &[]),
            make_posting("design", None, Some("CONTRACT"), &["Figma"]),
        ];

        let expected = WeightedRecommender::default()
            .recommend(&profile, &postings)
            .into_postings();
        let result = recommend(&profile, &postings);

        assert_eq!(result, expected);
        assert_eq!(result[0].title, "design");
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(WeightedRecommender::default().backend(), "weighted");
    }

    fn arb_label() -> impl Strategy<Value = Option<String>> {
        proptest::option::of(prop_oneof![
            Just("Mid Level".to_string()),
            Just("MID_LEVEL".to_string()),
            Just("senior".to_string()),
            Just("Full Time".to_string()),
            Just("".to_string()),
        ])
    }

    fn arb_words() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-zA-Z ]{0,6}", 0..5)
    }

    fn arb_profile() -> impl Strategy<Value = SeekerProfile> {
        (arb_label(), arb_words(), arb_words()).prop_map(|(level, types, skills)| SeekerProfile {
            user_id: uuid::Uuid::nil(),
            experience_level: level,
            preferred_job_types: Some(types),
            skills: Some(skills),
        })
    }

    fn arb_postings() -> impl Strategy<Value = Vec<JobPosting>> {
        proptest::collection::vec((arb_label(), arb_label(), arb_words()), 0..12).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (level, job_type, tags))| {
                        let mut posting = make_posting(&format!("p{i}"), None, None, &[]);
                        posting.experience_level = level;
                        posting.job_type = job_type;
                        posting.tags = Some(tags);
                        posting
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn test_recommend_is_pure(profile in arb_profile(), postings in arb_postings()) {
            let profile_before = profile.clone();
            let postings_before = postings.clone();
            let recommender = WeightedRecommender::default();

            let first = recommender.recommend(&profile, &postings);
            let second = recommender.recommend(&profile, &postings);

            prop_assert_eq!(first, second);
            prop_assert_eq!(profile, profile_before);
            prop_assert_eq!(postings, postings_before);
        }

        #[test]
        fn test_ranked_output_is_sorted_and_stable(profile in arb_profile(), postings in arb_postings()) {
            let recommendation = WeightedRecommender::default().recommend(&profile, &postings);
            let position = |title: &str| postings.iter().position(|p| p.title == title);

            for pair in recommendation.postings.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(position(&pair[0].posting.title) < position(&pair[1].posting.title));
                }
            }
        }

        #[test]
        fn test_fallback_or_only_good_matches(profile in arb_profile(), postings in arb_postings()) {
            let recommendation = WeightedRecommender::default().recommend(&profile, &postings);
            if recommendation.fallback_applied {
                prop_assert_eq!(recommendation.postings.len(), postings.len());
                prop_assert!(recommendation.good_matches < 5);
            } else {
                prop_assert!(recommendation.postings.len() >= 5);
                prop_assert!(recommendation.postings.iter().all(|p| p.score >= 1));
            }
        }
    }
}
