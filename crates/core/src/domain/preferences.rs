use crate::domain::lottery::{DrawFrequency, Lottery, LotteryType};
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Distance from `value` to the nearer bound; zero when inside.
    pub fn distance(&self, value: f64) -> f64 {
        if self.contains(value) {
            return 0.0;
        }
        (value - self.min).abs().min((value - self.max).abs())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub ticket_price: Range,
    pub play_frequency: DrawFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lottery_type: Option<LotteryType>,
    /// Acceptable range for the lottery's *current* jackpot.
    pub max_jackpot: Range,
    pub win_probability: Range,
}

/// Conjunctive catalog filter; absent fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub ticket_price: Option<Range>,
    #[serde(default)]
    pub lottery_type: Option<LotteryType>,
    #[serde(default)]
    pub max_jackpot: Option<Range>,
    #[serde(default)]
    pub win_probability: Option<Range>,
}

impl FilterCriteria {
    pub fn matches(&self, lottery: &Lottery) -> bool {
        if let Some(r) = &self.ticket_price {
            if !r.contains(lottery.ticket_price) {
                return false;
            }
        }
        if let Some(t) = self.lottery_type {
            if lottery.lottery_type != t {
                return false;
            }
        }
        if let Some(r) = &self.max_jackpot {
            if !r.contains(lottery.current_jackpot) {
                return false;
            }
        }
        if let Some(r) = &self.win_probability {
            if !r.contains(lottery.win_probability) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_distance_uses_nearer_bound() {
        let r = Range::new(50.0, 100.0);
        assert_eq!(r.distance(75.0), 0.0);
        assert_eq!(r.distance(40.0), 10.0);
        assert_eq!(r.distance(130.0), 30.0);
        assert!(r.contains(50.0) && r.contains(100.0));
    }

    #[test]
    fn preferences_accept_missing_lottery_type() {
        let v = serde_json::json!({
            "ticketPrice": {"min": 50, "max": 100},
            "playFrequency": "ежедневно",
            "maxJackpot": {"min": 1000000, "max": 10000000},
            "winProbability": {"min": 0.001, "max": 1},
        });
        let prefs: UserPreferences = serde_json::from_value(v).unwrap();
        assert_eq!(prefs.lottery_type, None);
        assert_eq!(prefs.play_frequency, DrawFrequency::Daily);
        assert_eq!(prefs.ticket_price.max, 100.0);
    }

    #[test]
    fn filter_requires_every_present_predicate() {
        let l = crate::testutil::lottery("a", LotteryType::Instant, 60.0, 3_000_000.0, 0.1);
        assert!(FilterCriteria::default().matches(&l));

        let mut criteria = FilterCriteria {
            lottery_type: Some(LotteryType::Instant),
            ticket_price: Some(Range::new(50.0, 60.0)),
            ..Default::default()
        };
        assert!(criteria.matches(&l));

        criteria.max_jackpot = Some(Range::new(5_000_000.0, 9_000_000.0));
        assert!(!criteria.matches(&l));
    }
}
