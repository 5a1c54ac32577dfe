use crate::domain::lottery::{DrawFrequency, Lottery, LotteryType, PrizeCategory};

struct Entry {
    id: &'static str,
    name: &'static str,
    lottery_type: LotteryType,
    ticket_price: f64,
    max_jackpot: f64,
    current_jackpot: f64,
    win_probability: f64,
    draw_frequency: DrawFrequency,
    description: &'static str,
    rules: &'static str,
    prizes: &'static [(&'static str, &'static str, &'static str)],
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        name: "6 из 45",
        lottery_type: LotteryType::NumericPick,
        ticket_price: 100.0,
        max_jackpot: 400_000_000.0,
        current_jackpot: 320_000_000.0,
        win_probability: 0.00001,
        draw_frequency: DrawFrequency::Daily,
        description: "Самая популярная числовая лотерея России. Угадайте 6 чисел из 45, чтобы выиграть джекпот!",
        rules: "Выберите 6 чисел от 1 до 45. Розыгрыш проходит ежедневно в 20:00 МСК. Совпадение всех 6 чисел - главный приз!",
        prizes: &[
            ("6 из 6", "Джекпот", "1:8145060"),
            ("5 из 6", "10000 ₽", "1:34808"),
            ("4 из 6", "1000 ₽", "1:733"),
            ("3 из 6", "100 ₽", "1:45"),
        ],
    },
    Entry {
        id: "2",
        name: "Русское лото",
        lottery_type: LotteryType::DrawBased,
        ticket_price: 100.0,
        max_jackpot: 600_000_000.0,
        current_jackpot: 523_000_000.0,
        win_probability: 0.0001,
        draw_frequency: DrawFrequency::Weekly,
        description: "Классическая русская лотерея с огромными призами. Каждое воскресенье разыгрываются миллионы!",
        rules: "На билете 3 поля по 15 чисел. Ведущий вытягивает бочонки с числами. Закройте все числа в одном поле первым, чтобы выиграть джекпот.",
        prizes: &[
            ("Джекпот", "523 млн ₽", "1:500000"),
            ("1 поле", "100000 ₽", "1:10000"),
            ("2 поля", "50000 ₽", "1:5000"),
            ("Тираж", "1000 ₽", "1:100"),
        ],
    },
    Entry {
        id: "3",
        name: "Жилищная лотерея",
        lottery_type: LotteryType::DrawBased,
        ticket_price: 100.0,
        max_jackpot: 50_000_000.0,
        current_jackpot: 32_000_000.0,
        win_probability: 0.001,
        draw_frequency: DrawFrequency::Weekly,
        description: "Выиграйте квартиру или загородный дом! Главные призы - недвижимость и автомобили.",
        rules: "Каждое воскресенье разыгрываются квартиры, дома и автомобили. На билете 3 поля по 20 чисел.",
        prizes: &[
            ("Квартира", "Квартира в Москве", "1:200000"),
            ("Автомобиль", "BMW X5", "1:100000"),
            ("1 поле", "500000 ₽", "1:5000"),
            ("Тираж", "5000 ₽", "1:50"),
        ],
    },
    Entry {
        id: "4",
        name: "7 из 49",
        lottery_type: LotteryType::NumericPick,
        ticket_price: 150.0,
        max_jackpot: 500_000_000.0,
        current_jackpot: 412_000_000.0,
        win_probability: 0.000007,
        draw_frequency: DrawFrequency::Weekly,
        description: "Одна из крупнейших лотерей с джекпотом более 400 миллионов рублей!",
        rules: "Выберите 7 чисел от 1 до 49. Розыгрыш каждую среду и субботу в 21:00 МСК.",
        prizes: &[
            ("7 из 7", "Джекпот", "1:85900584"),
            ("6 из 7", "50000 ₽", "1:1235790"),
            ("5 из 7", "5000 ₽", "1:24696"),
            ("4 из 7", "500 ₽", "1:1032"),
        ],
    },
    Entry {
        id: "5",
        name: "Рапидо",
        lottery_type: LotteryType::Instant,
        ticket_price: 50.0,
        max_jackpot: 5_000_000.0,
        current_jackpot: 3_200_000.0,
        win_probability: 0.1,
        draw_frequency: DrawFrequency::Daily,
        description: "Моментальная лотерея с розыгрышами каждые 5 минут! Быстрые выигрыши и высокая вероятность.",
        rules: "Выберите 8 чисел от 1 до 20. Компьютер вытягивает 8 чисел. Чем больше совпадений, тем больше приз!",
        prizes: &[
            ("8 из 8", "До 5 млн ₽", "1:125970"),
            ("7 из 8", "5000 ₽", "1:2571"),
            ("6 из 8", "500 ₽", "1:175"),
            ("5 из 8", "50 ₽", "1:27"),
            ("4 из 8", "10 ₽", "1:7"),
        ],
    },
    Entry {
        id: "6",
        name: "12/24",
        lottery_type: LotteryType::NumericPick,
        ticket_price: 60.0,
        max_jackpot: 30_000_000.0,
        current_jackpot: 18_500_000.0,
        win_probability: 0.05,
        draw_frequency: DrawFrequency::Daily,
        description: "Угадайте 12 из 24 чисел и выиграйте до 30 миллионов! Розыгрыши дважды в день.",
        rules: "Выберите 12 чисел от 1 до 24. Розыгрыши в 13:00 и 21:00 МСК ежедневно.",
        prizes: &[
            ("12 из 12", "До 30 млн ₽", "1:2704156"),
            ("11 из 12", "50000 ₽", "1:18144"),
            ("10 из 12", "2000 ₽", "1:1512"),
            ("9 из 12", "200 ₽", "1:173"),
            ("8 из 12", "60 ₽", "1:30"),
        ],
    },
    Entry {
        id: "7",
        name: "ТОП-3",
        lottery_type: LotteryType::NumericPick,
        ticket_price: 40.0,
        max_jackpot: 10_000_000.0,
        current_jackpot: 6_300_000.0,
        win_probability: 0.3,
        draw_frequency: DrawFrequency::Daily,
        description: "Простая и быстрая лотерея! Угадайте 3 числа в правильном порядке.",
        rules: "Выберите 3 числа от 0 до 9. Розыгрыши каждый час с 9:00 до 23:00 МСК.",
        prizes: &[
            ("3 в порядке", "До 10 млн ₽", "1:1000"),
            ("3 любые", "1000 ₽", "1:167"),
            ("2 в порядке", "100 ₽", "1:100"),
            ("1 число", "40 ₽", "1:10"),
        ],
    },
    Entry {
        id: "8",
        name: "4 из 20",
        lottery_type: LotteryType::NumericPick,
        ticket_price: 80.0,
        max_jackpot: 80_000_000.0,
        current_jackpot: 52_000_000.0,
        win_probability: 0.01,
        draw_frequency: DrawFrequency::Daily,
        description: "Компактная числовая лотерея с отличными шансами на выигрыш!",
        rules: "Выберите 4 числа от 1 до 20. Розыгрыш ежедневно в 19:00 МСК.",
        prizes: &[
            ("4 из 4", "До 80 млн ₽", "1:4845"),
            ("3 из 4", "5000 ₽", "1:145"),
            ("2 из 4", "500 ₽", "1:19"),
        ],
    },
    Entry {
        id: "9",
        name: "Кено-Спортлото",
        lottery_type: LotteryType::SportsPool,
        ticket_price: 120.0,
        max_jackpot: 200_000_000.0,
        current_jackpot: 156_000_000.0,
        win_probability: 0.002,
        draw_frequency: DrawFrequency::Daily,
        description: "Классическая лотерея Кено с большими джекпотами и гибкими правилами игры.",
        rules: "Выберите от 1 до 10 чисел от 1 до 80. Компьютер вытягивает 20 чисел. Чем больше совпадений, тем больше приз!",
        prizes: &[
            ("10 из 10", "До 200 млн ₽", "1:8911711"),
            ("9 из 10", "100000 ₽", "1:163381"),
            ("8 из 10", "10000 ₽", "1:7384"),
            ("7 из 10", "1000 ₽", "1:621"),
            ("6 из 10", "120 ₽", "1:88"),
        ],
    },
    Entry {
        id: "10",
        name: "Бинго-75",
        lottery_type: LotteryType::Instant,
        ticket_price: 90.0,
        max_jackpot: 100_000_000.0,
        current_jackpot: 73_000_000.0,
        win_probability: 0.05,
        draw_frequency: DrawFrequency::Daily,
        description: "Динамичная игра в стиле бинго с частыми розыгрышами и большими призами!",
        rules: "На билете 15 чисел от 1 до 75. Компьютер вытягивает числа до тех пор, пока кто-то не соберет все 15.",
        prizes: &[
            ("15 из 15 (до 30 шаров)", "Джекпот", "1:2000000"),
            ("15 из 15 (31-40 шаров)", "1000000 ₽", "1:50000"),
            ("14 из 15", "10000 ₽", "1:1000"),
            ("13 из 15", "500 ₽", "1:100"),
        ],
    },
];

/// Hand-authored catalog served whenever the upstream cannot be used.
pub fn fallback_catalog() -> Vec<Lottery> {
    ENTRIES
        .iter()
        .map(|e| Lottery {
            id: e.id.to_string(),
            name: e.name.to_string(),
            lottery_type: e.lottery_type,
            ticket_price: e.ticket_price,
            max_jackpot: e.max_jackpot,
            current_jackpot: e.current_jackpot,
            win_probability: e.win_probability,
            draw_frequency: e.draw_frequency,
            description: e.description.to_string(),
            rules: e.rules.to_string(),
            prize_structure: e
                .prizes
                .iter()
                .map(|(category, prize, probability)| PrizeCategory {
                    category: category.to_string(),
                    prize: prize.to_string(),
                    probability: probability.to_string(),
                })
                .collect(),
            image_url: None,
            is_active: true,
        })
        .collect()
}
