use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// Raw answers for one questionnaire, keyed by question or domain name.
pub type Answers = HashMap<String, Value>;

/// The four questionnaires making up a screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Section {
    #[serde(rename = "FAQ")]
    Faq,
    #[serde(rename = "NPI")]
    Npi,
    #[serde(rename = "GDS")]
    Gds,
    #[serde(rename = "CDR")]
    Cdr,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Faq, Section::Npi, Section::Gds, Section::Cdr];
}

/// One submitted screening. Every section is required on the wire, but a
/// section may be empty.
///
/// Values are kept as raw JSON: the scorer coerces them, so `"3"` and `3`
/// are equivalent and anything unreadable counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet {
    #[serde(rename = "FAQ")]
    pub faq: Answers,
    /// Domain name → `{ "frequency": .., "severity": .. }`.
    #[serde(rename = "NPI")]
    pub npi: Answers,
    #[serde(rename = "GDS")]
    pub gds: Answers,
    #[serde(rename = "CDR")]
    pub cdr: Answers,
}

impl AnswerSet {
    pub fn section(&self, section: Section) -> &Answers {
        match section {
            Section::Faq => &self.faq,
            Section::Npi => &self.npi,
            Section::Gds => &self.gds,
            Section::Cdr => &self.cdr,
        }
    }
}
