use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use cognis_instruments::instruments::Completion;
use cognis_instruments::{all_instruments, score, AnswerSet, ScoreResult, Section};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct PredictResponse {
    /// Human-readable outcome, e.g. "Unlikely Alzheimer's (FAQ: 0, ...)".
    pub result: String,
    pub scores: ScoreResult,
    pub completion: BTreeMap<Section, Completion>,
}

/// Score a submitted screening.
///
/// Answers are never rejected for their values; only a body that is not an
/// AnswerSet at all fails.
pub async fn predict(
    payload: Result<Json<AnswerSet>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(answers) = payload?;

    let scores = score(&answers);
    let completion = all_instruments()
        .iter()
        .map(|i| (i.section(), i.answered(&answers)))
        .collect();

    tracing::info!(
        faq = scores.faq_score,
        npi = scores.npi_score,
        gds = scores.gds_score,
        cdr = scores.cdr_score,
        likely = scores.likely,
        "screening scored"
    );

    Ok(Json(PredictResponse {
        result: scores.summary.clone(),
        scores,
        completion,
    }))
}
