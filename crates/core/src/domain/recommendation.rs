use crate::domain::lottery::Lottery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub lottery: Lottery,
    /// 0..=100.
    pub match_score: u32,
    pub personalized_reason: String,
    pub matched_criteria: Vec<String>,
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
    pub total_matches: usize,
    pub average_match_score: f64,
}

impl RecommendationResponse {
    pub fn from_recommendations(recommendations: Vec<Recommendation>) -> Self {
        let total_matches = recommendations.len();
        let average_match_score = if total_matches == 0 {
            0.0
        } else {
            let sum: u32 = recommendations.iter().map(|r| r.match_score).sum();
            f64::from(sum) / total_matches as f64
        };

        Self {
            recommendations,
            total_matches,
            average_match_score,
        }
    }
}
