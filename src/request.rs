//! Inbound request normalization.
//!
//! Lambda hands us either an API Gateway proxy event whose `body` is a JSON
//! string, an event whose `body` was already decoded, or the request object
//! itself. Everything below `QuizRequest::from_event` sees one shape.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::QuizError;
use crate::model::QuizFormat;
use crate::prompt::PromptParams;

pub const DEFAULT_NUM_QUESTIONS: u32 = 5;
pub const DEFAULT_DIFFICULTY: &str = "standard";

/// A validated quiz-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub note: String,
    pub note_ids: Vec<String>,
    pub num_questions: u32,
    pub difficulty: String,
    pub format: QuizFormat,
    /// The caller's label for `format`, kept for the prompt.
    pub format_label: String,
}

/// Pull the request object out of an inbound event.
pub fn extract_body(event: Value) -> Result<Map<String, Value>, QuizError> {
    match event {
        Value::Object(mut envelope) => match envelope.remove("body") {
            Some(Value::String(raw)) => decode_body(&raw),
            Some(Value::Object(body)) => Ok(body),
            Some(Value::Null) | None => Ok(envelope),
            Some(other) => Err(QuizError::InvalidRequest(format!(
                "request body must be a JSON object, got {}",
                kind(&other)
            ))),
        },
        Value::String(raw) => decode_body(&raw),
        other => Err(QuizError::InvalidRequest(format!(
            "request must be a JSON object, got {}",
            kind(&other)
        ))),
    }
}

fn decode_body(raw: &str) -> Result<Map<String, Value>, QuizError> {
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(body)) => Ok(body),
        Ok(other) => Err(QuizError::InvalidRequest(format!(
            "request body must be a JSON object, got {}",
            kind(&other)
        ))),
        Err(e) => Err(QuizError::InvalidRequest(format!("request body is not valid JSON: {e}"))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Normalize the `noteId` field to a list of ids.
///
/// Strings are split on commas and trimmed, lists keep their truthy elements
/// as strings, and anything else yields no ids.
pub fn normalize_note_ids(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter(|v| is_truthy(v))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_num_questions(value: Option<&Value>) -> Result<u32, QuizError> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(DEFAULT_NUM_QUESTIONS),
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        Some(_) => None,
    };
    parsed.filter(|n| *n > 0).ok_or_else(|| {
        QuizError::InvalidRequest(format!(
            "num_questions must be a positive integer, got {}",
            value.map(Value::to_string).unwrap_or_default()
        ))
    })
}

fn non_empty_str<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

impl QuizRequest {
    /// Normalize and validate an inbound event.
    pub fn from_event(event: Value) -> Result<Self, QuizError> {
        let body = extract_body(event)?;
        Self::from_body(&body)
    }

    /// Validate a decoded request body.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, QuizError> {
        let note = non_empty_str(body, "note");
        let note_ids = normalize_note_ids(body.get("noteId"));
        debug!(
            note_len = note.map_or(0, str::len),
            note_ids = ?note_ids,
            "Received quiz request"
        );

        let note = match note {
            Some(note) if !note_ids.is_empty() => note.to_string(),
            _ => {
                return Err(QuizError::InvalidRequest(format!(
                    "note or noteId is missing. received: note={}, note_ids={:?}",
                    note.is_some(),
                    note_ids
                )))
            }
        };

        let num_questions = parse_num_questions(body.get("num_questions"))?;
        let difficulty = non_empty_str(body, "difficulty").unwrap_or(DEFAULT_DIFFICULTY).to_string();
        let (format, format_label) = match non_empty_str(body, "question_format") {
            Some(label) => (QuizFormat::from_label(label), label.to_string()),
            None => (QuizFormat::default(), QuizFormat::default().label().to_string()),
        };

        Ok(Self { note, note_ids, num_questions, difficulty, format, format_label })
    }

    pub fn prompt_params(&self) -> PromptParams<'_> {
        PromptParams {
            note: &self.note,
            num_questions: self.num_questions,
            difficulty: &self.difficulty,
            format: self.format,
            format_label: &self.format_label,
        }
    }
}
