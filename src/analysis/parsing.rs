use serde_json::Value;

use crate::error::AnalysisError;

use super::types::{AnalysisResult, MAX_SCORE, MIN_SCORE};

/// Drops reasoning blocks the model emits ahead of its answer. Only leading
/// blocks count, so `<think>` inside a JSON string is left alone.
fn strip_leading_think(input: &str) -> &str {
    let mut rest = input.trim_start();
    while let Some(after_open) = rest.strip_prefix("<think>") {
        match after_open.find("</think>") {
            Some(close) => rest = after_open[close + "</think>".len()..].trim_start(),
            None => break,
        }
    }
    rest
}

/// End index (inclusive) of the balanced object opening at `start`.
/// Braces inside string literals do not count.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Finds the first `{...}` block in the reply that parses as JSON.
///
/// Candidates that never balance or fail to parse are skipped and the scan
/// resumes at the next `{`. When nothing parses, the last failure is reported:
/// `MalformedResponse` if some block balanced, `NoJsonFound` otherwise.
pub(crate) fn extract_json_object(input: &str) -> Result<Value, AnalysisError> {
    let text = strip_leading_think(input);
    let mut last_err = AnalysisError::NoJsonFound;
    let mut from = 0;

    while let Some(offset) = text[from..].find('{') {
        let start = from + offset;
        if let Some(end) = balanced_end(text, start) {
            match serde_json::from_str::<Value>(&text[start..=end]) {
                Ok(value) => return Ok(value),
                Err(err) => last_err = AnalysisError::MalformedResponse(err.to_string()),
            }
        }
        from = start + 1;
    }

    Err(last_err)
}

/// Turns the model's raw reply into a validated [`AnalysisResult`].
pub fn interpret_response(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let value = extract_json_object(raw)?;

    let result: AnalysisResult = serde_json::from_value(value)
        .map_err(|err| AnalysisError::SchemaMismatch(err.to_string()))?;

    validate_result(&result)?;
    Ok(result)
}

fn validate_result(result: &AnalysisResult) -> Result<(), AnalysisError> {
    let score = result.validation.score;
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AnalysisError::SchemaMismatch(format!(
            "validation.score {score} is outside {MIN_SCORE}..={MAX_SCORE}"
        )));
    }
    Ok(())
}
