pub mod reason;
pub mod scorer;

use crate::domain::lottery::Lottery;
use crate::domain::preferences::UserPreferences;
use crate::domain::recommendation::{Recommendation, RecommendationResponse};
use std::collections::BTreeSet;

/// Lotteries scoring below this are never surfaced.
pub const RECOMMENDATION_THRESHOLD: u32 = 50;

/// Scores every lottery, ranks by score (ties keep catalog order) and keeps those at or
/// above the threshold. `previous_ids = None` marks every entry as new.
pub fn generate_recommendations(
    catalog: &[Lottery],
    prefs: &UserPreferences,
    previous_ids: Option<&BTreeSet<String>>,
) -> Vec<Recommendation> {
    let mut scored: Vec<Recommendation> = catalog
        .iter()
        .map(|lottery| {
            let match_score = scorer::score(lottery, prefs);
            Recommendation {
                lottery: lottery.clone(),
                match_score,
                personalized_reason: reason::personalized_reason(lottery, prefs, match_score),
                matched_criteria: scorer::matched_criteria(lottery, prefs)
                    .into_iter()
                    .map(|c| c.label().to_string())
                    .collect(),
                is_new: previous_ids.map_or(true, |ids| !ids.contains(&lottery.id)),
            }
        })
        .collect();

    // Stable, so equal scores stay in catalog order.
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.retain(|r| r.match_score >= RECOMMENDATION_THRESHOLD);
    scored
}

pub fn recommend(
    catalog: &[Lottery],
    prefs: &UserPreferences,
    previous_ids: Option<&BTreeSet<String>>,
) -> RecommendationResponse {
    let recommendations = generate_recommendations(catalog, prefs, previous_ids);
    tracing::debug!(
        candidates = catalog.len(),
        matches = recommendations.len(),
        "generated recommendations"
    );
    RecommendationResponse::from_recommendations(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lottery::{DrawFrequency, LotteryType};
    use crate::domain::preferences::Range;
    use crate::ingest::fallback::fallback_catalog;
    use crate::testutil::lottery;

    fn daily_numeric() -> UserPreferences {
        UserPreferences {
            ticket_price: Range::new(50.0, 100.0),
            play_frequency: DrawFrequency::Daily,
            lottery_type: Some(LotteryType::NumericPick),
            max_jackpot: Range::new(1_000_000.0, 10_000_000.0),
            win_probability: Range::new(0.001, 1.0),
        }
    }

    #[test]
    fn output_is_ranked_and_thresholded() {
        let recs = generate_recommendations(&fallback_catalog(), &daily_numeric(), None);
        assert!(!recs.is_empty());
        assert!(recs.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        assert!(recs.iter().all(|r| r.match_score >= RECOMMENDATION_THRESHOLD));
        assert!(recs.iter().all(|r| r.is_new));
    }

    #[test]
    fn twelve_of_twenty_four_scenario() {
        let recs = generate_recommendations(&fallback_catalog(), &daily_numeric(), None);
        let r = recs.iter().find(|r| r.lottery.name == "12/24").unwrap();

        assert!(r.match_score < 100);
        assert!(r.matched_criteria.contains(&"ticket price".to_string()));
        assert!(r.matched_criteria.contains(&"lottery type".to_string()));
        assert!(r.matched_criteria.contains(&"win probability".to_string()));
        assert!(!r.matched_criteria.contains(&"jackpot size".to_string()));
    }

    #[test]
    fn novelty_is_relative_to_previous_ids() {
        let previous: BTreeSet<String> = ["6".to_string(), "8".to_string()].into();
        let recs = generate_recommendations(&fallback_catalog(), &daily_numeric(), Some(&previous));

        for r in &recs {
            assert_eq!(r.is_new, !previous.contains(&r.lottery.id), "{}", r.lottery.id);
        }

        let empty = BTreeSet::new();
        let recs = generate_recommendations(&fallback_catalog(), &daily_numeric(), Some(&empty));
        assert!(recs.iter().all(|r| r.is_new));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            lottery("b", LotteryType::Instant, 60.0, 5_000_000.0, 0.05),
            lottery("a", LotteryType::Instant, 60.0, 5_000_000.0, 0.05),
            lottery("c", LotteryType::Instant, 60.0, 5_000_000.0, 0.05),
        ];
        let ids: Vec<_> = generate_recommendations(&catalog, &daily_numeric(), None)
            .into_iter()
            .map(|r| r.lottery.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn low_scores_are_dropped_and_average_is_zero_when_empty() {
        let catalog = vec![lottery("far", LotteryType::SportsPool, 10_000.0, 1e12, 90.0)];
        let response = recommend(&catalog, &daily_numeric(), None);
        assert!(response.recommendations.is_empty());
        assert_eq!(response.total_matches, 0);
        assert_eq!(response.average_match_score, 0.0);
    }

    #[test]
    fn average_is_the_mean_of_returned_scores() {
        let response = recommend(&fallback_catalog(), &daily_numeric(), None);
        let sum: u32 = response.recommendations.iter().map(|r| r.match_score).sum();
        assert_eq!(response.total_matches, response.recommendations.len());
        assert_eq!(
            response.average_match_score,
            f64::from(sum) / response.total_matches as f64
        );
    }
}
