//! cognis-instruments
//!
//! Screening questionnaire definitions and scoring. Pure data and arithmetic,
//! no I/O. Covers the four instruments of the Alzheimer's screening (FAQ, NPI,
//! GDS, CDR): what each one asks, and how a submitted [`AnswerSet`] turns
//! into sub-scores and a likelihood flag.

pub mod answers;
pub mod coerce;
pub mod error;
pub mod instruments;
pub mod scoring;

pub use answers::{AnswerSet, Section};
pub use scoring::{score, ScoreResult};

use instruments::{Completion, Item};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "faq", "npi").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Functional Activities Questionnaire").
    fn name(&self) -> &str;

    /// Which part of an [`AnswerSet`] holds this instrument's answers.
    fn section(&self) -> Section;

    /// The questions or domains, in presentation order.
    fn items(&self) -> &[Item];

    /// How many items have a value for every field.
    fn answered(&self, answers: &AnswerSet) -> Completion {
        let section = answers.section(self.section());
        let answered = self
            .items()
            .iter()
            .filter(|item| item.is_answered(section.get(&item.key)))
            .count();

        Completion {
            answered: answered as u32,
            total: self.items().len() as u32,
        }
    }
}

/// Return all registered instruments, in screening order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::faq::Faq),
        Box::new(instruments::npi::Npi),
        Box::new(instruments::gds::Gds),
        Box::new(instruments::cdr::Cdr),
    ]
}

/// Look up an instrument by ID (case-insensitive).
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments()
        .into_iter()
        .find(|i| i.id().eq_ignore_ascii_case(id))
}
