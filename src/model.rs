//! Quiz data carried through one request: the caller's format choice, the
//! candidates the model returns, and the records written to the store.

use serde::{Deserialize, Serialize};

/// Question style requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizFormat {
    FreeResponse,
    TrueFalse,
    #[default]
    MultipleChoice,
}

impl QuizFormat {
    pub const ALL: [QuizFormat; 3] = [Self::FreeResponse, Self::TrueFalse, Self::MultipleChoice];

    /// Resolve a caller-supplied label. Unknown labels fall back to multiple choice.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "記述式" | "essay" | "free-response" => Self::FreeResponse,
            "正誤判定" | "true-false" => Self::TrueFalse,
            _ => Self::MultipleChoice,
        }
    }

    /// Canonical label, used when the caller did not send one.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FreeResponse => "free-response",
            Self::TrueFalse => "true-false",
            Self::MultipleChoice => "multiple-choice",
        }
    }

    /// Whether items of this format carry a `choices` list.
    pub fn has_choices(&self) -> bool {
        !matches!(self, Self::FreeResponse)
    }
}

impl std::fmt::Display for QuizFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One quiz item as produced by the model, before it gets an id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizCandidate {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
}

/// The object the model is asked to return.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub quizzies: Vec<QuizCandidate>,
}

/// A persisted quiz item. Absent fields are skipped both in the store and in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    #[serde(rename = "quizId")]
    pub id: String,
    #[serde(rename = "noteIds")]
    pub note_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl QuizRecord {
    pub fn from_candidate(id: String, note_ids: Vec<String>, candidate: QuizCandidate) -> Self {
        Self {
            id,
            note_ids,
            question: candidate.question,
            answer: candidate.answer,
            explanation: candidate.explanation,
            intent: candidate.intent,
            choices: candidate.choices,
        }
    }
}

/// Success body: `{"quizzies": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizBatch {
    pub quizzies: Vec<QuizRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_to_formats() {
        assert_eq!(QuizFormat::from_label("記述式"), QuizFormat::FreeResponse);
        assert_eq!(QuizFormat::from_label("essay"), QuizFormat::FreeResponse);
        assert_eq!(QuizFormat::from_label("正誤判定"), QuizFormat::TrueFalse);
        assert_eq!(QuizFormat::from_label("true-false"), QuizFormat::TrueFalse);
        assert_eq!(QuizFormat::from_label("選択式"), QuizFormat::MultipleChoice);
        assert_eq!(QuizFormat::from_label("多肢選択"), QuizFormat::MultipleChoice);
        assert_eq!(QuizFormat::from_label("anything"), QuizFormat::MultipleChoice);
    }

    #[test]
    fn record_serialization_skips_absent_fields() {
        let record = QuizRecord::from_candidate(
            "q-1".into(),
            vec!["n1".into()],
            QuizCandidate { question: Some("Q".into()), answer: Some("A".into()), ..Default::default() },
        );
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["quizId"], "q-1");
        assert_eq!(obj["noteIds"], serde_json::json!(["n1"]));
        assert!(!obj.contains_key("choices"));
        assert!(!obj.contains_key("explanation"));
    }
}
