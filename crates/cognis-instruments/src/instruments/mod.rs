pub mod cdr;
pub mod faq;
pub mod gds;
pub mod npi;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// A question (FAQ, GDS) or rated domain (NPI, CDR).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Key under which the answer is submitted (`"Q3"`, `"Memory"`).
    pub key: String,
    pub prompt: String,
    pub fields: Vec<ItemField>,
}

/// One rating the respondent gives for an item.
///
/// `name` is `None` when the answer is the item's value itself, and set when
/// the item's answer is a record (NPI `frequency` and `severity`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemField {
    pub name: Option<String>,
    pub options: Vec<ResponseOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub label: String,
    pub value: f64,
}

/// Answered versus total items for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Completion {
    pub answered: u32,
    pub total: u32,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

impl Item {
    /// Whether `answer` supplies a value for every field of this item.
    pub fn is_answered(&self, answer: Option<&Value>) -> bool {
        let Some(answer) = answer else {
            return false;
        };
        self.fields.iter().all(|field| match &field.name {
            None => is_filled(answer),
            Some(name) => answer.get(name).is_some_and(is_filled),
        })
    }
}

fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn options(choices: &[(&str, f64)]) -> Vec<ResponseOption> {
    choices
        .iter()
        .map(|(label, value)| ResponseOption {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

fn single_field(choices: &[(&str, f64)]) -> Vec<ItemField> {
    vec![ItemField {
        name: None,
        options: options(choices),
    }]
}
