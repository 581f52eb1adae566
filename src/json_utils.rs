use tracing::{debug, instrument, warn};

use crate::error::QuizError;
use crate::model::{QuizCandidate, QuizPayload};

// Model replies are cleaned first and parsed second: control characters are
// removed across the whole payload, which also deletes literal line breaks
// inside string values.

/// C0 (U+0000..=U+001F) and C1 (U+007F..=U+009F) control characters.
pub fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Remove every control character from `text`.
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !is_stripped_control(*c)).collect()
}

/// Byte span from the first `{` to the last `}` (inclusive), if both exist in order.
pub fn outermost_object_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then_some((start, end))
}

/// Clean `raw` and slice out the outermost JSON object.
pub fn extract_json_object(raw: &str) -> Result<String, QuizError> {
    let cleaned = strip_control_chars(raw);
    let (start, end) = outermost_object_span(&cleaned).ok_or_else(|| {
        warn!(response_len = raw.len(), "No JSON object delimiters in model response");
        QuizError::NoJsonFound(preview(&cleaned))
    })?;
    Ok(cleaned[start..=end].to_string())
}

/// Sanitize and parse a raw model reply into its quiz candidates.
#[instrument(target = "quizgen::sanitizer", skip(raw), fields(raw_len = raw.len()))]
pub fn parse_quiz_response(raw: &str) -> Result<Vec<QuizCandidate>, QuizError> {
    let json = extract_json_object(raw)?;
    let payload: QuizPayload = serde_json::from_str(&json).map_err(|e| {
        warn!(error = %e, "Model response is not valid quiz JSON");
        QuizError::JsonParse(e, json.clone())
    })?;
    debug!(count = payload.quizzies.len(), "Parsed quiz candidates");
    Ok(payload.quizzies)
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 200;
    match text.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
