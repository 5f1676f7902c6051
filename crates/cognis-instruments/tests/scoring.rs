use serde_json::{json, Value};

use cognis_instruments::answers::{AnswerSet, Answers};
use cognis_instruments::scoring::{
    classify, compute_cdr, compute_faq, compute_gds, compute_npi, format_summary, score,
    CDR_DOMAINS, NPI_DOMAINS,
};

fn answers(value: Value) -> Answers {
    serde_json::from_value(value).unwrap()
}

fn answer_set(value: Value) -> AnswerSet {
    serde_json::from_value(value).unwrap()
}

#[test]
fn faq_sums_the_ten_questions() {
    let faq = answers(json!({
        "Q1": 3, "Q2": "2", "Q3": 1, "Q4": "0", "Q5": 3,
        "Q6": 3, "Q7": 2, "Q8": 1, "Q9": 0, "Q10": "3",
    }));
    assert_eq!(compute_faq(&faq), 18);
}

#[test]
fn faq_ignores_extra_and_missing_keys() {
    let faq = answers(json!({ "Q1": 2, "Q11": 3, "Q0": 3, "notes": "x" }));
    assert_eq!(compute_faq(&faq), 2);
    assert_eq!(compute_faq(&Answers::new()), 0);
}

#[test]
fn faq_malformed_answers_count_as_zero() {
    let faq = answers(json!({ "Q1": "abc", "Q2": null, "Q3": [1], "Q4": "2.5", "Q5": 2 }));
    assert_eq!(compute_faq(&faq), 2);
}

#[test]
fn faq_maximum_is_thirty() {
    let faq: Answers = (1..=10).map(|i| (format!("Q{i}"), json!(3))).collect();
    assert_eq!(compute_faq(&faq), 30);
}

#[test]
fn gds_sums_the_fifteen_questions() {
    let all_yes: Answers = (1..=15).map(|i| (format!("Q{i}"), json!("1"))).collect();
    assert_eq!(compute_gds(&all_yes), 15);

    let gds = answers(json!({ "Q1": 1, "Q15": "1", "Q16": 1, "Q7": "yes" }));
    assert_eq!(compute_gds(&gds), 2);
}

#[test]
fn npi_multiplies_frequency_by_severity() {
    let npi = answers(json!({
        "Delusions": { "frequency": 4, "severity": 3 },
        "Anxiety": { "frequency": "2", "severity": "2" },
        "Appetite/Eating": { "frequency": 1, "severity": 1 },
    }));
    assert_eq!(compute_npi(&npi), 17);
}

#[test]
fn npi_bad_field_zeroes_the_whole_domain() {
    let npi = answers(json!({
        "Delusions": { "frequency": "often", "severity": 3 },
        "Hallucinations": { "frequency": 2, "severity": null },
        "Anxiety": { "frequency": 2, "severity": 3 },
    }));
    assert_eq!(compute_npi(&npi), 6);
}

#[test]
fn npi_missing_field_defaults_to_zero() {
    let npi = answers(json!({
        "Delusions": { "frequency": 4 },
        "Anxiety": {},
    }));
    assert_eq!(compute_npi(&npi), 0);
}

#[test]
fn npi_non_record_domain_counts_as_zero() {
    let npi = answers(json!({
        "Delusions": 12,
        "Anxiety": "4x3",
        "Apathy/Indifference": { "frequency": 1, "severity": 2 },
    }));
    assert_eq!(compute_npi(&npi), 2);
}

#[test]
fn npi_ignores_unknown_domains() {
    let npi = answers(json!({ "Boredom": { "frequency": 4, "severity": 3 } }));
    assert_eq!(compute_npi(&npi), 0);
}

#[test]
fn npi_overflowing_domain_counts_as_zero() {
    let npi = answers(json!({
        "Delusions": { "frequency": i64::MAX, "severity": 2 },
        "Anxiety": { "frequency": 1, "severity": 3 },
    }));
    assert_eq!(compute_npi(&npi), 3);
}

#[test]
fn npi_all_domains_at_maximum() {
    let npi: Answers = NPI_DOMAINS
        .iter()
        .map(|d| (d.to_string(), json!({ "frequency": 4, "severity": 3 })))
        .collect();
    assert_eq!(compute_npi(&npi), 144);
}

#[test]
fn cdr_sums_domain_ratings() {
    let cdr = answers(json!({
        "Memory": "0.5",
        "Orientation": 1,
        "Judgment & Problem Solving": 0.5,
        "Community Affairs": "0",
        "Home & Hobbies": "2",
        "Personal Care": 0,
    }));
    assert_eq!(compute_cdr(&cdr), 4.0);
}

#[test]
fn cdr_malformed_and_non_finite_count_as_zero() {
    let cdr = answers(json!({
        "Memory": "nan",
        "Orientation": "inf",
        "Home & Hobbies": "severe",
        "Personal Care": "3",
    }));
    assert_eq!(compute_cdr(&cdr), 3.0);
}

#[test]
fn cdr_maximum_is_eighteen() {
    let cdr: Answers = CDR_DOMAINS
        .iter()
        .map(|d| (d.to_string(), json!(3)))
        .collect();
    assert_eq!(compute_cdr(&cdr), 18.0);
}

#[test]
fn classify_boundaries() {
    assert!(!classify(9, 0, 0, 0.0));
    assert!(classify(10, 0, 0, 0.0));
    assert!(!classify(0, 12, 0, 0.0));
    assert!(classify(0, 13, 0, 0.0));
    assert!(!classify(0, 0, 5, 0.0));
    assert!(classify(0, 0, 6, 0.0));
    assert!(!classify(0, 0, 0, 2.0));
    assert!(classify(0, 0, 0, 2.5));
}

#[test]
fn classify_is_monotonic() {
    let grid = [(0, 0, 0, 0.0), (9, 12, 5, 2.0), (10, 0, 0, 0.0), (3, 13, 1, 0.5)];
    for (faq, npi, gds, cdr) in grid {
        let before = classify(faq, npi, gds, cdr);
        for bumped in [
            classify(faq + 1, npi, gds, cdr),
            classify(faq, npi + 1, gds, cdr),
            classify(faq, npi, gds + 1, cdr),
            classify(faq, npi, gds, cdr + 0.5),
        ] {
            assert!(!before || bumped);
        }
    }
}

#[test]
fn summary_formats_both_labels() {
    assert_eq!(
        format_summary(false, 1, 2, 3, 0.5),
        "Unlikely Alzheimer's (FAQ: 1, NPI: 2, GDS: 3, CDR: 0.5)"
    );
    assert_eq!(
        format_summary(true, 10, 0, 0, 3.0),
        "Likely Alzheimer's (FAQ: 10, NPI: 0, GDS: 0, CDR: 3)"
    );
}

#[test]
fn all_zero_screening_is_unlikely() {
    let set = answer_set(json!({
        "FAQ": (1..=10).map(|i| (format!("Q{i}"), json!("0"))).collect::<Answers>(),
        "NPI": NPI_DOMAINS
            .iter()
            .map(|d| (d.to_string(), json!({ "frequency": 0, "severity": 0 })))
            .collect::<Answers>(),
        "GDS": (1..=15).map(|i| (format!("Q{i}"), json!("0"))).collect::<Answers>(),
        "CDR": CDR_DOMAINS.iter().map(|d| (d.to_string(), json!("0"))).collect::<Answers>(),
    }));

    let result = score(&set);
    assert_eq!(
        (result.faq_score, result.npi_score, result.gds_score, result.cdr_score),
        (0, 0, 0, 0.0)
    );
    assert!(!result.likely);
    assert_eq!(
        result.summary,
        "Unlikely Alzheimer's (FAQ: 0, NPI: 0, GDS: 0, CDR: 0)"
    );
}

#[test]
fn maximal_faq_alone_is_likely() {
    let set = answer_set(json!({
        "FAQ": (1..=10).map(|i| (format!("Q{i}"), json!(3))).collect::<Answers>(),
        "NPI": {}, "GDS": {}, "CDR": {},
    }));

    let result = score(&set);
    assert_eq!(result.faq_score, 30);
    assert!(result.likely);
    assert!(result
        .summary
        .contains("Likely Alzheimer's (FAQ: 30, NPI: 0, GDS: 0, CDR: 0)"));
}

#[test]
fn npi_of_twelve_is_not_enough() {
    let set = answer_set(json!({
        "FAQ": {}, "GDS": {}, "CDR": {},
        "NPI": { "Delusions": { "frequency": 4, "severity": 3 } },
    }));

    let result = score(&set);
    assert_eq!(result.npi_score, 12);
    assert!(!result.likely);
}

#[test]
fn cdr_of_two_and_a_half_is_likely() {
    let set = answer_set(json!({
        "FAQ": {}, "NPI": {}, "GDS": {},
        "CDR": { "Memory": 2, "Orientation": 0, "Personal Care": "0.5" },
    }));

    let result = score(&set);
    assert_eq!(result.cdr_score, 2.5);
    assert!(result.likely);
    assert_eq!(
        result.summary,
        "Likely Alzheimer's (FAQ: 0, NPI: 0, GDS: 0, CDR: 2.5)"
    );
}

#[test]
fn scoring_is_repeatable() {
    let set = answer_set(json!({
        "FAQ": { "Q1": "2", "Q4": 3 },
        "NPI": { "Anxiety": { "frequency": "3", "severity": 2 } },
        "GDS": { "Q2": 1, "Q9": "1" },
        "CDR": { "Memory": "0.5", "Orientation": 1 },
    }));

    assert_eq!(score(&set), score(&set));
}
