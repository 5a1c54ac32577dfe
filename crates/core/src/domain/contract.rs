use crate::domain::preferences::{FilterCriteria, Range, UserPreferences};
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Body of `POST /api/recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub preferences: UserPreferences,
    #[serde(default)]
    pub previous_lottery_ids: Option<Vec<String>>,
}

/// A request that passed boundary validation. The scorer relies on these ranges being
/// well-formed and does not re-check them.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub preferences: UserPreferences,
    pub previous_lottery_ids: Option<BTreeSet<String>>,
}

impl RecommendationRequest {
    pub fn validate_and_into_request(self) -> anyhow::Result<ValidatedRequest> {
        validate_preferences(&self.preferences)?;

        let previous_lottery_ids = self.previous_lottery_ids.map(|ids| {
            ids.into_iter()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect()
        });

        Ok(ValidatedRequest {
            preferences: self.preferences,
            previous_lottery_ids,
        })
    }
}

pub fn validate_preferences(prefs: &UserPreferences) -> anyhow::Result<()> {
    validate_range("ticketPrice", &prefs.ticket_price)?;
    validate_range("maxJackpot", &prefs.max_jackpot)?;
    validate_range("winProbability", &prefs.win_probability)?;
    ensure!(
        prefs.win_probability.max <= 100.0,
        "winProbability.max must be at most 100 (got {})",
        prefs.win_probability.max
    );
    Ok(())
}

impl FilterCriteria {
    pub fn validate(&self) -> anyhow::Result<()> {
        let ranges = [
            ("ticketPrice", &self.ticket_price),
            ("maxJackpot", &self.max_jackpot),
            ("winProbability", &self.win_probability),
        ];
        for (field, range) in ranges {
            if let Some(range) = range {
                validate_range(field, range)?;
            }
        }
        Ok(())
    }
}

fn validate_range(field: &str, range: &Range) -> anyhow::Result<()> {
    ensure!(
        range.min.is_finite() && range.max.is_finite(),
        "{field} bounds must be finite numbers"
    );
    ensure!(
        range.min >= 0.0,
        "{field}.min must be non-negative (got {})",
        range.min
    );
    ensure!(
        range.min <= range.max,
        "{field}.min must not exceed {field}.max (got {} > {})",
        range.min,
        range.max
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_json(ticket_min: f64, ticket_max: f64) -> serde_json::Value {
        json!({
            "preferences": {
                "ticketPrice": {"min": ticket_min, "max": ticket_max},
                "playFrequency": "еженедельно",
                "lotteryType": "тиражная",
                "maxJackpot": {"min": 0, "max": 500000000},
                "winProbability": {"min": 0.0001, "max": 1},
            },
            "previousLotteryIds": ["1", " 2 ", ""],
        })
    }

    #[test]
    fn accepts_well_formed_request() {
        let req: RecommendationRequest = serde_json::from_value(request_json(50.0, 150.0)).unwrap();
        let validated = req.validate_and_into_request().unwrap();
        let ids = validated.previous_lottery_ids.unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("2"));
    }

    #[test]
    fn rejects_inverted_range() {
        let req: RecommendationRequest = serde_json::from_value(request_json(200.0, 100.0)).unwrap();
        let err = req.validate_and_into_request().unwrap_err();
        assert!(err.to_string().contains("ticketPrice"));
    }

    #[test]
    fn rejects_unknown_play_frequency() {
        let mut v = request_json(50.0, 150.0);
        v["preferences"]["playFrequency"] = json!("hourly");
        assert!(serde_json::from_value::<RecommendationRequest>(v).is_err());
    }

    #[test]
    fn absent_previous_ids_stay_absent() {
        let mut v = request_json(50.0, 150.0);
        v.as_object_mut().unwrap().remove("previousLotteryIds");
        let req: RecommendationRequest = serde_json::from_value(v).unwrap();
        assert!(req.validate_and_into_request().unwrap().previous_lottery_ids.is_none());
    }

    #[test]
    fn filter_validates_only_present_ranges() {
        let criteria: FilterCriteria = serde_json::from_value(json!({
            "lotteryType": "числовая",
            "winProbability": {"min": 0.01, "max": 0.001},
        }))
        .unwrap();
        assert!(criteria.validate().is_err());
        assert!(FilterCriteria::default().validate().is_ok());
    }
}
