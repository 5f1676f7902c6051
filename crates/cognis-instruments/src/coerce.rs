//! Lenient number coercion for questionnaire answers.
//!
//! Clients send answers either as JSON numbers or as the string values of the
//! option buttons (`"2"`, `"0.5"`). These helpers accept both and report
//! anything else as a [`CoercionError`]. The `*_or_zero` forms are what the
//! aggregator uses: a failed answer simply contributes nothing.

use serde_json::Value;

use crate::error::CoercionError;

// 2^63 as f64; anything at or above it cannot be represented as i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Read a value as an integer.
///
/// Floats are truncated toward zero, booleans count as 1/0, and strings must
/// hold a base-10 integer (surrounding whitespace allowed).
pub fn to_int(value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let f = n.as_f64().unwrap_or(f64::NAN);
            float_to_int(f)
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoercionError::Unparseable(s.clone())),
        other => Err(CoercionError::WrongType(type_name(other))),
    }
}

/// Read a value as a finite float.
pub fn to_float(value: &Value) -> Result<f64, CoercionError> {
    let f = match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| CoercionError::Unparseable(s.clone()))?,
        other => return Err(CoercionError::WrongType(type_name(other))),
    };

    if f.is_finite() {
        Ok(f)
    } else {
        Err(CoercionError::NonFinite(f))
    }
}

/// [`to_int`], with a missing or malformed value counted as zero.
pub fn int_or_zero(value: Option<&Value>) -> i64 {
    match value.map(to_int) {
        None => 0,
        Some(Ok(i)) => i,
        Some(Err(e)) => {
            tracing::debug!(error = %e, "answer counted as zero");
            0
        }
    }
}

/// [`to_float`], with a missing or malformed value counted as zero.
pub fn float_or_zero(value: Option<&Value>) -> f64 {
    match value.map(to_float) {
        None => 0.0,
        Some(Ok(f)) => f,
        Some(Err(e)) => {
            tracing::debug!(error = %e, "answer counted as zero");
            0.0
        }
    }
}

fn float_to_int(f: f64) -> Result<i64, CoercionError> {
    if !f.is_finite() {
        return Err(CoercionError::NonFinite(f));
    }
    let truncated = f.trunc();
    if truncated >= I64_BOUND || truncated < -I64_BOUND {
        return Err(CoercionError::OutOfRange(f));
    }
    Ok(truncated as i64)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
