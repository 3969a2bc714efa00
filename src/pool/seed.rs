//! Built-in question pool
//!
//! A small table of seed themes is expanded across reading tracks and
//! difficulty tiers. Every generated item gets a unique id and a numbered
//! question so players can tell repeats apart.

use crate::domain::QuizItem;

/// One hand-written seed question. The first option is the correct one.
struct SeedTheme {
    title: &'static str,
    question: &'static str,
    options: [&'static str; 4],
    explanation: &'static str,
}

static SEED_THEMES: &[SeedTheme] = &[
    SeedTheme {
        title: "The Little Prince",
        question: "What is the name of the little prince's home asteroid?",
        options: ["B612", "Earth", "Mars", "Andromeda"],
        explanation: "A tiny planet where a single precious rose grows.",
    },
    SeedTheme {
        title: "Charlotte's Web",
        question: "Which pig does Charlotte the spider try to save?",
        options: ["Wilbur", "Babe", "Piglet", "George"],
        explanation: "Charlotte wove words into her web to save Wilbur's life.",
    },
    SeedTheme {
        title: "Harry Potter",
        question: "What shape is the scar on Harry Potter's forehead?",
        options: ["A lightning bolt", "A star", "A moon", "A cloud"],
        explanation: "The scar was left by his first encounter with Voldemort.",
    },
    SeedTheme {
        title: "Pinocchio",
        question: "What happens to Pinocchio when he tells a lie?",
        options: [
            "His nose grows longer",
            "His ears get bigger",
            "His feet shrink",
            "His hair turns white",
        ],
        explanation: "A famous tale about why honesty matters.",
    },
    SeedTheme {
        title: "The Hen Who Dreamed She Could Fly",
        question: "What did the hen Sprout dream of doing?",
        options: [
            "Hatching an egg of her own",
            "Flying in the sky",
            "Owning the farm",
            "Eating tasty feed",
        ],
        explanation: "A journey toward freedom and a mother's love.",
    },
    SeedTheme {
        title: "The Number Devil",
        question: "What does the number devil dislike most?",
        options: ["Calculators", "Pencils", "Erasers", "Notebooks"],
        explanation: "The book celebrates discovering how numbers work.",
    },
    SeedTheme {
        title: "Greek and Roman Myths",
        question: "What weapon does Zeus wield?",
        options: ["Lightning bolts", "A trident", "A bow", "A shield"],
        explanation: "The king of the Olympian gods hurls thunderbolts.",
    },
    SeedTheme {
        title: "Romance of the Three Kingdoms",
        question: "What was the oath of brotherhood sworn by Liu Bei, Guan Yu and Zhang Fei?",
        options: [
            "The Oath of the Peach Garden",
            "Three visits to the cottage",
            "The Battle of Red Cliffs",
            "The chicken rib",
        ],
        explanation: "The three became brothers beneath the peach trees.",
    },
    SeedTheme {
        title: "Heungbu and Nolbu",
        question: "What did the swallow bring to Heungbu?",
        options: ["A gourd seed", "A gold ring", "A sack of rice", "Silk cloth"],
        explanation: "Kind Heungbu was rewarded for helping the swallow.",
    },
    SeedTheme {
        title: "Economics for Kids",
        question: "What measures the value of goods and is used to trade them?",
        options: ["Money", "Toys", "Friendship", "Time"],
        explanation: "Money is the basic tool of every economic exchange.",
    },
    SeedTheme {
        title: "Global Warming",
        question: "Which gas is the main driver of rising global temperatures?",
        options: ["Carbon dioxide", "Oxygen", "Nitrogen", "Helium"],
        explanation: "Cutting carbon emissions helps protect the planet.",
    },
    SeedTheme {
        title: "The Rice Cake Shop",
        question: "What happened after eating the sticky rice cake?",
        options: [
            "He could no longer say mean words",
            "He sang beautifully",
            "He fell asleep",
            "He turned invisible",
        ],
        explanation: "A mouth that used to insult others learned consideration.",
    },
];

static READING_TRACKS: &[&str] = &[
    "History",
    "Science",
    "Arts",
    "Language",
    "Society",
    "Ethics",
    "Nature",
    "World Travel",
    "Future Tech",
    "Biographies",
];

static TIERS: &[&str] = &["Basic", "Intermediate", "Advanced", "Challenge"];

/// Expand every theme over every track and tier. Ids start at 1.
pub(super) fn expand_seed_themes() -> Vec<QuizItem> {
    let total = SEED_THEMES.len() * READING_TRACKS.len() * TIERS.len();

    (0..total)
        .map(|i| {
            let theme = &SEED_THEMES[i % SEED_THEMES.len()];
            let track = READING_TRACKS[(i / SEED_THEMES.len()) % READING_TRACKS.len()];
            let tier = TIERS[(i / (SEED_THEMES.len() * READING_TRACKS.len())) % TIERS.len()];
            let number = i + 1;

            QuizItem {
                id: number as u32,
                book_title: format!("{} [{} {}]", theme.title, track, tier),
                question: format!("{} (Key of Wisdom #{})", theme.question, number),
                options: theme.options.map(String::from),
                correct_answer_index: 0,
                explanation: theme.explanation.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_size_and_ids() {
        let items = expand_seed_themes();
        assert_eq!(items.len(), 480);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[479].id, 480);
        assert!(items[11].question.ends_with("#12)"));
    }
}
