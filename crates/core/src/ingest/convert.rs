use crate::domain::lottery::{DrawFrequency, Lottery, LotteryType, PrizeCategory};
use crate::ingest::types::Game;

/// Ordered (needles, result) table; the first row with any needle contained in the
/// lowercased input wins.
type Rule<T> = (&'static [&'static str], T);

const TYPE_RULES: &[Rule<LotteryType>] = &[
    (&["6x45", "5x36", "4x20", "7x49"], LotteryType::NumericPick),
    (&["rapido", "12x24"], LotteryType::Instant),
    (&["top3"], LotteryType::SportsPool),
];

const FREQUENCY_RULES: &[Rule<DrawFrequency>] = &[
    (&["daily", "ежедневно"], DrawFrequency::Daily),
    (&["weekly", "еженедельно"], DrawFrequency::Weekly),
    (&["several", "несколько"], DrawFrequency::SeveralTimesWeekly),
    (&["monthly", "месяц"], DrawFrequency::Monthly),
];

// Coarse per-game estimates in percent, not computed odds.
const WIN_PROBABILITY_RULES: &[Rule<f64>] = &[
    (&["6x45"], 0.00001),
    (&["5x36"], 0.0001),
    (&["4x20"], 0.001),
    (&["rapido", "12x24"], 0.01),
];

const DEFAULT_WIN_PROBABILITY: f64 = 0.0001;

fn classify<T: Copy>(rules: &[Rule<T>], input: &str, default: T) -> T {
    let lowered = input.to_lowercase();
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(_, result)| *result)
        .unwrap_or(default)
}

pub fn classify_type(game_name: &str) -> LotteryType {
    classify(TYPE_RULES, game_name, LotteryType::DrawBased)
}

pub fn classify_frequency(label: &str) -> DrawFrequency {
    classify(FREQUENCY_RULES, label, DrawFrequency::Weekly)
}

pub fn estimate_win_probability(game_name: &str) -> f64 {
    classify(WIN_PROBABILITY_RULES, game_name, DEFAULT_WIN_PROBABILITY)
}

pub fn kopecks_to_roubles(kopecks: i64) -> f64 {
    kopecks as f64 / 100.0
}

/// Maps one upstream game onto a catalog entry. Pure: the same game always yields the
/// same lottery.
pub fn convert_game(game: &Game) -> Lottery {
    let ticket_price = kopecks_to_roubles(game.ticket_price);
    let current_jackpot = kopecks_to_roubles(game.jackpot);
    let lottery_type = classify_type(&game.name);

    Lottery {
        id: game.name.clone(),
        name: game.display_name.clone(),
        lottery_type,
        ticket_price,
        // No historical maximum upstream.
        max_jackpot: current_jackpot,
        current_jackpot,
        win_probability: estimate_win_probability(&game.name),
        draw_frequency: classify_frequency(&game.draw_frequency),
        description: describe(&game.display_name, lottery_type),
        rules: format!(
            "Купите билет {}, выберите числа согласно правилам игры. Розыгрыш проходит согласно расписанию. При совпадении всех чисел вы выигрываете главный приз!",
            game.display_name
        ),
        prize_structure: prize_tiers(current_jackpot),
        image_url: None,
        is_active: true,
    }
}

fn describe(display_name: &str, lottery_type: LotteryType) -> String {
    match lottery_type {
        LotteryType::NumericPick => format!(
            "{display_name} - популярная числовая лотерея. Выберите числа и выиграйте крупный приз!"
        ),
        LotteryType::Instant => format!(
            "{display_name} - моментальная лотерея с частыми розыгрышами и быстрыми результатами!"
        ),
        LotteryType::DrawBased => {
            format!("{display_name} - классическая тиражная лотерея с большими призами!")
        }
        LotteryType::SportsPool => {
            format!("{display_name} - спортивная лотерея для любителей динамичных игр!")
        }
    }
}

fn prize_tiers(jackpot: f64) -> Vec<PrizeCategory> {
    let tier = |category: &str, prize: String, probability: &str| PrizeCategory {
        category: category.to_string(),
        prize,
        probability: probability.to_string(),
    };

    vec![
        tier("Джекпот", format!("{:.1} млн ₽", jackpot / 1_000_000.0), "1:1000000"),
        tier("2 категория", format!("{:.0} ₽", jackpot * 0.1), "1:100000"),
        tier("3 категория", "10000 ₽".to_string(), "1:10000"),
        tier("4 категория", "1000 ₽".to_string(), "1:1000"),
    ]
}
