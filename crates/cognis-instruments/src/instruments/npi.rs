use super::{options, Item, ItemField};
use crate::answers::Section;
use crate::scoring::NPI_DOMAINS;
use crate::Instrument;

/// NPI: Neuropsychiatric Inventory.
/// 12 behavioral domains. Each present domain is rated for frequency (1–4)
/// and severity (1–3); the domain score is their product.
pub struct Npi;

impl Instrument for Npi {
    fn id(&self) -> &str {
        "npi"
    }

    fn name(&self) -> &str {
        "Neuropsychiatric Inventory"
    }

    fn section(&self) -> Section {
        Section::Npi
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let frequency = [
                ("Occasionally", 1.0),
                ("Often", 2.0),
                ("Frequently", 3.0),
                ("Very Frequently", 4.0),
            ];
            let severity = [("Mild", 1.0), ("Moderate", 2.0), ("Severe", 3.0)];

            NPI_DOMAINS
                .iter()
                .map(|domain| Item {
                    key: domain.to_string(),
                    prompt: domain.to_string(),
                    fields: vec![
                        ItemField {
                            name: Some("frequency".to_string()),
                            options: options(&frequency),
                        },
                        ItemField {
                            name: Some("severity".to_string()),
                            options: options(&severity),
                        },
                    ],
                })
                .collect()
        });
        &ITEMS
    }
}
