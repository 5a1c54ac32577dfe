use crate::domain::lottery::{DrawFrequency, Lottery, LotteryType};
use crate::domain::preferences::UserPreferences;
use crate::recommend::scorer::frequency_matches;

const HIGH_CHANCE_PCT: f64 = 0.05;
const GOOD_CHANCE_PCT: f64 = 0.01;

const FALLBACK_REASON: &str = "This lottery might be a good fit for you!";

fn type_sentence(lottery_type: LotteryType) -> &'static str {
    match lottery_type {
        LotteryType::NumericPick => "You prefer number-pick lotteries where you choose the numbers yourself",
        LotteryType::Instant => "You enjoy fast-paced games with frequent draws",
        LotteryType::DrawBased => "You prefer traditional draw lotteries",
        LotteryType::SportsPool => "You are into sports lotteries",
    }
}

/// Human-readable justification for one scored lottery.
pub fn personalized_reason(lottery: &Lottery, prefs: &UserPreferences, match_score: u32) -> String {
    let mut reasons: Vec<String> = Vec::new();

    if prefs.ticket_price.contains(lottery.ticket_price) {
        reasons.push(format!(
            "The ticket costs {} ₽, which fits your budget ({}-{} ₽)",
            lottery.ticket_price, prefs.ticket_price.min, prefs.ticket_price.max
        ));
    }

    if prefs.lottery_type == Some(lottery.lottery_type) {
        reasons.push(type_sentence(lottery.lottery_type).to_string());
    }

    let jackpot_mln = lottery.current_jackpot / 1_000_000.0;
    if prefs.max_jackpot.contains(lottery.current_jackpot) {
        reasons.push(format!(
            "The current jackpot of {jackpot_mln:.1}M ₽ is within the range you are interested in"
        ));
    } else if lottery.current_jackpot > prefs.max_jackpot.max {
        reasons.push(format!(
            "A huge jackpot of {jackpot_mln:.1}M ₽, even bigger than you planned for!"
        ));
    }

    if lottery.win_probability >= prefs.win_probability.min {
        if lottery.win_probability >= HIGH_CHANCE_PCT {
            reasons.push(format!(
                "High chance of winning ({:.3}%), excellent odds!",
                lottery.win_probability
            ));
        } else if lottery.win_probability >= GOOD_CHANCE_PCT {
            reasons.push(format!(
                "Good chance of winning ({:.3}%) with a decent prize pool",
                lottery.win_probability
            ));
        }
    }

    if frequency_matches(lottery, prefs) {
        match lottery.draw_frequency {
            DrawFrequency::Daily => {
                reasons.push("Daily draws mean you won't wait long for results".to_string())
            }
            DrawFrequency::Weekly => {
                reasons.push("Weekly draws suit how often you play".to_string())
            }
            _ => {}
        }
    }

    if reasons.is_empty() {
        return FALLBACK_REASON.to_string();
    }

    let joined = reasons.join(". ");
    if match_score >= 90 {
        format!("Perfect choice! {joined}.")
    } else if match_score >= 70 {
        format!("Great option! {joined}.")
    } else {
        format!("{joined}.")
    }
}
