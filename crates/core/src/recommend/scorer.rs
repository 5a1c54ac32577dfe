use crate::domain::lottery::{DrawFrequency, Lottery};
use crate::domain::preferences::{Range, UserPreferences};

pub const TICKET_PRICE_WEIGHT: f64 = 25.0;
pub const LOTTERY_TYPE_WEIGHT: f64 = 20.0;
pub const JACKPOT_WEIGHT: f64 = 30.0;
pub const WIN_PROBABILITY_WEIGHT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    TicketPrice,
    LotteryType,
    Jackpot,
    WinProbability,
    /// Reported as a match but never scored.
    DrawFrequency,
}

impl Criterion {
    pub fn label(self) -> &'static str {
        match self {
            Criterion::TicketPrice => "ticket price",
            Criterion::LotteryType => "lottery type",
            Criterion::Jackpot => "jackpot size",
            Criterion::WinProbability => "win probability",
            Criterion::DrawFrequency => "draw frequency",
        }
    }
}

/// Full `weight` inside the range, otherwise linearly decayed by the distance to the
/// nearer bound over the range width, floored at zero. A zero-width range has nothing to
/// decay over and only credits an exact hit.
pub fn range_credit(range: &Range, value: f64, weight: f64) -> f64 {
    if range.contains(value) {
        return weight;
    }

    let width = range.width();
    if width.is_nan() || width <= 0.0 {
        return 0.0;
    }

    (weight - range.distance(value) / width * weight).max(0.0)
}

/// Weighted compatibility between one lottery and one preference set, 0..=100.
///
/// The type criterion only counts when the preferences name a type; otherwise the score
/// is taken over the remaining 80 points.
pub fn score(lottery: &Lottery, prefs: &UserPreferences) -> u32 {
    let mut earned = 0.0;
    let mut applicable = 0.0;

    earned += range_credit(&prefs.ticket_price, lottery.ticket_price, TICKET_PRICE_WEIGHT);
    applicable += TICKET_PRICE_WEIGHT;

    if let Some(wanted) = prefs.lottery_type {
        applicable += LOTTERY_TYPE_WEIGHT;
        if lottery.lottery_type == wanted {
            earned += LOTTERY_TYPE_WEIGHT;
        }
    }

    earned += range_credit(&prefs.max_jackpot, lottery.current_jackpot, JACKPOT_WEIGHT);
    applicable += JACKPOT_WEIGHT;

    earned += range_credit(
        &prefs.win_probability,
        lottery.win_probability,
        WIN_PROBABILITY_WEIGHT,
    );
    applicable += WIN_PROBABILITY_WEIGHT;

    (100.0 * earned / applicable).round().clamp(0.0, 100.0) as u32
}

/// Only daily and weekly play habits are matched against the draw schedule.
pub fn frequency_matches(lottery: &Lottery, prefs: &UserPreferences) -> bool {
    matches!(
        (prefs.play_frequency, lottery.draw_frequency),
        (DrawFrequency::Daily, DrawFrequency::Daily)
            | (DrawFrequency::Weekly, DrawFrequency::Weekly)
    )
}

/// Criteria whose in-range test passed, in reporting order.
pub fn matched_criteria(lottery: &Lottery, prefs: &UserPreferences) -> Vec<Criterion> {
    let mut out = Vec::with_capacity(5);

    if prefs.ticket_price.contains(lottery.ticket_price) {
        out.push(Criterion::TicketPrice);
    }
    if prefs.lottery_type == Some(lottery.lottery_type) {
        out.push(Criterion::LotteryType);
    }
    if prefs.max_jackpot.contains(lottery.current_jackpot) {
        out.push(Criterion::Jackpot);
    }
    if prefs.win_probability.contains(lottery.win_probability) {
        out.push(Criterion::WinProbability);
    }
    if frequency_matches(lottery, prefs) {
        out.push(Criterion::DrawFrequency);
    }

    out
}
