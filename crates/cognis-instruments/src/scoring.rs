use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::answers::{AnswerSet, Answers};
use crate::coerce::{float_or_zero, int_or_zero, to_int};

/// FAQ items are keyed `Q1`..`Q10`, each rated 0–3.
pub const FAQ_ITEM_COUNT: usize = 10;

/// GDS items are keyed `Q1`..`Q15`, each answered 0 (no) or 1 (yes).
pub const GDS_ITEM_COUNT: usize = 15;

/// NPI domains, each scored as frequency × severity.
pub const NPI_DOMAINS: [&str; 12] = [
    "Delusions",
    "Hallucinations",
    "Agitation/Aggression",
    "Depression/Dysphoria",
    "Anxiety",
    "Elation/Euphoria",
    "Apathy/Indifference",
    "Disinhibition",
    "Irritability/Lability",
    "Aberrant Motor Behavior",
    "Nighttime Behavior Disturbances",
    "Appetite/Eating",
];

/// CDR domains, each rated 0, 0.5, 1, 2 or 3.
pub const CDR_DOMAINS: [&str; 6] = [
    "Memory",
    "Orientation",
    "Judgment & Problem Solving",
    "Community Affairs",
    "Home & Hobbies",
    "Personal Care",
];

// A screening is flagged when any score is strictly above its cutoff.
pub const FAQ_THRESHOLD: i64 = 9;
pub const NPI_THRESHOLD: i64 = 12;
pub const GDS_THRESHOLD: i64 = 5;
pub const CDR_THRESHOLD: f64 = 2.0;

/// Per-questionnaire totals and the resulting likelihood flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    #[ts(type = "number")]
    pub faq_score: i64,
    #[ts(type = "number")]
    pub npi_score: i64,
    #[ts(type = "number")]
    pub gds_score: i64,
    pub cdr_score: f64,
    pub likely: bool,
    pub summary: String,
}

/// Key of the `n`th (1-based) numbered question.
pub fn question_key(n: usize) -> String {
    format!("Q{n}")
}

/// Score a full screening. Never fails: missing or unreadable answers count
/// as zero.
pub fn score(answers: &AnswerSet) -> ScoreResult {
    let faq_score = compute_faq(&answers.faq);
    let npi_score = compute_npi(&answers.npi);
    let gds_score = compute_gds(&answers.gds);
    let cdr_score = compute_cdr(&answers.cdr);
    let likely = classify(faq_score, npi_score, gds_score, cdr_score);

    ScoreResult {
        faq_score,
        npi_score,
        gds_score,
        cdr_score,
        likely,
        summary: format_summary(likely, faq_score, npi_score, gds_score, cdr_score),
    }
}

/// Sum of `Q1`..`Q10`.
pub fn compute_faq(faq: &Answers) -> i64 {
    sum_numbered(faq, FAQ_ITEM_COUNT)
}

/// Sum of `Q1`..`Q15`.
pub fn compute_gds(gds: &Answers) -> i64 {
    sum_numbered(gds, GDS_ITEM_COUNT)
}

/// Sum of frequency × severity over the NPI domains.
///
/// A domain whose frequency or severity cannot be read contributes 0 as a
/// whole; the other field is never counted on its own.
pub fn compute_npi(npi: &Answers) -> i64 {
    NPI_DOMAINS.iter().fold(0i64, |total, domain| {
        total.saturating_add(npi_domain_score(domain, npi.get(*domain)))
    })
}

/// Sum of the CDR domain ratings.
pub fn compute_cdr(cdr: &Answers) -> f64 {
    CDR_DOMAINS
        .iter()
        .map(|domain| float_or_zero(cdr.get(*domain)))
        .sum()
}

pub fn classify(faq: i64, npi: i64, gds: i64, cdr: f64) -> bool {
    faq > FAQ_THRESHOLD || npi > NPI_THRESHOLD || gds > GDS_THRESHOLD || cdr > CDR_THRESHOLD
}

pub fn format_summary(likely: bool, faq: i64, npi: i64, gds: i64, cdr: f64) -> String {
    let label = if likely {
        "Likely Alzheimer's"
    } else {
        "Unlikely Alzheimer's"
    };
    format!("{label} (FAQ: {faq}, NPI: {npi}, GDS: {gds}, CDR: {cdr})")
}

fn sum_numbered(answers: &Answers, count: usize) -> i64 {
    (1..=count).fold(0i64, |total, n| {
        total.saturating_add(int_or_zero(answers.get(&question_key(n))))
    })
}

fn npi_domain_score(domain: &str, record: Option<&Value>) -> i64 {
    let record = match record {
        None => return 0,
        Some(Value::Object(record)) => record,
        Some(_) => {
            tracing::debug!(domain, "NPI domain is not a record; counted as zero");
            return 0;
        }
    };

    let field = |name: &str| record.get(name).map(to_int).unwrap_or(Ok(0));

    match (field("frequency"), field("severity")) {
        (Ok(frequency), Ok(severity)) => frequency.checked_mul(severity).unwrap_or_else(|| {
            tracing::debug!(domain, "NPI domain product overflows; counted as zero");
            0
        }),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(domain, error = %e, "NPI domain counted as zero");
            0
        }
    }
}
