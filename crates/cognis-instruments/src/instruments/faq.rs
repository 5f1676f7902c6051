use super::{single_field, Item};
use crate::answers::Section;
use crate::scoring::{question_key, FAQ_ITEM_COUNT};
use crate::Instrument;

/// FAQ: Functional Activities Questionnaire.
/// 10 everyday activities, each rated 0 (normal) to 3 (dependent). Total 0–30.
pub struct Faq;

const QUESTIONS: [&str; FAQ_ITEM_COUNT] = [
    "Writing checks, paying bills, balancing checkbook",
    "Assembling tax records, business affairs, papers",
    "Shopping alone for clothes, household necessities, groceries",
    "Playing a game of skill, working on a hobby",
    "Heating water, making a cup of coffee, turning off stove after use",
    "Preparing a balanced meal",
    "Keeping track of current events",
    "Paying attention to, understanding, discussing TV, book, magazine",
    "Remembering appointments, family occasions, holidays, medications",
    "Traveling out of neighborhood, driving, arranging transport",
];

impl Instrument for Faq {
    fn id(&self) -> &str {
        "faq"
    }

    fn name(&self) -> &str {
        "Functional Activities Questionnaire"
    }

    fn section(&self) -> Section {
        Section::Faq
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let scale = [
                ("Normal", 0.0),
                ("Has difficulty but does by self", 1.0),
                ("Requires assistance", 2.0),
                ("Dependent", 3.0),
            ];

            QUESTIONS
                .iter()
                .enumerate()
                .map(|(i, prompt)| Item {
                    key: question_key(i + 1),
                    prompt: prompt.to_string(),
                    fields: single_field(&scale),
                })
                .collect()
        });
        &ITEMS
    }
}
