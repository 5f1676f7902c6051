use super::{single_field, Item};
use crate::answers::Section;
use crate::scoring::CDR_DOMAINS;
use crate::Instrument;

/// CDR: Clinical Dementia Rating.
/// 6 domains rated 0, 0.5, 1, 2 or 3. Sum of boxes 0–18.
pub struct Cdr;

impl Instrument for Cdr {
    fn id(&self) -> &str {
        "cdr"
    }

    fn name(&self) -> &str {
        "Clinical Dementia Rating"
    }

    fn section(&self) -> Section {
        Section::Cdr
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let scale = [
                ("None", 0.0),
                ("Questionable", 0.5),
                ("Mild", 1.0),
                ("Moderate", 2.0),
                ("Severe", 3.0),
            ];

            CDR_DOMAINS
                .iter()
                .map(|domain| Item {
                    key: domain.to_string(),
                    prompt: domain.to_string(),
                    fields: single_field(&scale),
                })
                .collect()
        });
        &ITEMS
    }
}
