use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LotteryType {
    #[serde(rename = "числовая")]
    NumericPick,
    #[serde(rename = "моментальная")]
    Instant,
    #[serde(rename = "тиражная")]
    DrawBased,
    #[serde(rename = "спортлото")]
    SportsPool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawFrequency {
    #[serde(rename = "ежедневно")]
    Daily,
    #[serde(rename = "несколько раз в неделю")]
    SeveralTimesWeekly,
    #[serde(rename = "еженедельно")]
    Weekly,
    #[serde(rename = "раз в месяц")]
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeCategory {
    pub category: String,
    pub prize: String,
    /// Odds as printed on the ticket, e.g. "1:1000".
    pub probability: String,
}

/// One catalog entry. Amounts are in roubles, `win_probability` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lottery {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub lottery_type: LotteryType,
    pub ticket_price: f64,
    pub max_jackpot: f64,
    pub current_jackpot: f64,
    pub win_probability: f64,
    pub draw_frequency: DrawFrequency,
    pub description: String,
    pub rules: String,
    pub prize_structure: Vec<PrizeCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enums_use_russian_wire_values() {
        assert_eq!(
            serde_json::to_value(LotteryType::NumericPick).unwrap(),
            json!("числовая")
        );
        assert_eq!(
            serde_json::to_value(DrawFrequency::SeveralTimesWeekly).unwrap(),
            json!("несколько раз в неделю")
        );
        let parsed: LotteryType = serde_json::from_value(json!("спортлото")).unwrap();
        assert_eq!(parsed, LotteryType::SportsPool);
        assert!(serde_json::from_value::<LotteryType>(json!("numeric")).is_err());
    }

    #[test]
    fn lottery_serializes_camel_case_and_defaults_active() {
        let v = json!({
            "id": "x",
            "name": "X",
            "type": "тиражная",
            "ticketPrice": 100.0,
            "maxJackpot": 10.0,
            "currentJackpot": 5.0,
            "winProbability": 0.001,
            "drawFrequency": "еженедельно",
            "description": "d",
            "rules": "r",
            "prizeStructure": [],
        });

        let lottery: Lottery = serde_json::from_value(v).unwrap();
        assert!(lottery.is_active);
        assert_eq!(lottery.lottery_type, LotteryType::DrawBased);

        let out = serde_json::to_value(&lottery).unwrap();
        assert_eq!(out["type"], json!("тиражная"));
        assert_eq!(out["currentJackpot"], json!(5.0));
        assert!(out.get("imageUrl").is_none());
    }
}
