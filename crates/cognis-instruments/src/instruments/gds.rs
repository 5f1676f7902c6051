use super::{single_field, Item};
use crate::answers::Section;
use crate::scoring::{question_key, GDS_ITEM_COUNT};
use crate::Instrument;

/// GDS: Geriatric Depression Scale, short form.
/// 15 yes/no questions scored 0/1. Total 0–15.
pub struct Gds;

const QUESTIONS: [&str; GDS_ITEM_COUNT] = [
    "Are you basically satisfied with your life?",
    "Have you dropped many of your activities and interests?",
    "Do you feel that your life is empty?",
    "Do you often get bored?",
    "Are you hopeful about the future?",
    "Are you bothered by thoughts you can't get out of your head?",
    "Are you in good spirits most of the time?",
    "Are you afraid that something bad is going to happen to you?",
    "Do you feel happy most of the time?",
    "Do you often feel helpless?",
    "Do you prefer to stay at home, rather than going out and doing new things?",
    "Do you feel you have more problems with memory than most?",
    "Do you think it is wonderful to be alive now?",
    "Do you feel pretty worthless the way you are now?",
    "Do you feel full of energy?",
];

impl Instrument for Gds {
    fn id(&self) -> &str {
        "gds"
    }

    fn name(&self) -> &str {
        "Geriatric Depression Scale"
    }

    fn section(&self) -> Section {
        Section::Gds
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            QUESTIONS
                .iter()
                .enumerate()
                .map(|(i, prompt)| Item {
                    key: question_key(i + 1),
                    prompt: prompt.to_string(),
                    fields: single_field(&[("No", 0.0), ("Yes", 1.0)]),
                })
                .collect()
        });
        &ITEMS
    }
}
