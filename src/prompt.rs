//! Prompt construction for quiz generation.

use crate::model::QuizFormat;

const FREE_RESPONSE_EXAMPLE: &str = r#"{
  "quizzies": [
    {
      "question": "Question text",
      "answer": "Expected answer text",
      "explanation": "Why this is the answer",
      "intent": "What the learner should take away from this question"
    }
  ]
}"#;

const TRUE_FALSE_EXAMPLE: &str = r#"{
  "quizzies": [
    {
      "question": "Statement to judge",
      "choices": ["True", "False"],
      "answer": "True",
      "explanation": "Why this is the answer",
      "intent": "What the learner should take away from this question"
    }
  ]
}"#;

const MULTIPLE_CHOICE_EXAMPLE: &str = r#"{
  "quizzies": [
    {
      "question": "Question text",
      "choices": ["Choice 1", "Choice 2", "Choice 3", "Choice 4"],
      "answer": "The correct choice, copied exactly",
      "explanation": "Why this is the answer",
      "intent": "What the learner should take away from this question"
    }
  ]
}"#;

impl QuizFormat {
    /// JSON shape the model must follow for this format.
    pub fn format_example(&self) -> &'static str {
        match self {
            Self::FreeResponse => FREE_RESPONSE_EXAMPLE,
            Self::TrueFalse => TRUE_FALSE_EXAMPLE,
            Self::MultipleChoice => MULTIPLE_CHOICE_EXAMPLE,
        }
    }

    fn instruction(&self, label: &str) -> String {
        match self {
            Self::FreeResponse => format!(
                "- Use the \"{label}\" format: each answer is a short word or sentence."
            ),
            Self::TrueFalse => format!(
                "- Use the \"{label}\" format: each question is a statement the learner judges as true or false. \
                 `choices` is exactly [\"True\", \"False\"] and `answer` is one of them."
            ),
            Self::MultipleChoice => format!(
                "- Use the \"{label}\" format: each question has exactly 4 choices and one correct answer. \
                 `answer` must be copied exactly from `choices`."
            ),
        }
    }
}

/// Everything the prompt needs from a request.
#[derive(Debug, Clone, Copy)]
pub struct PromptParams<'a> {
    pub note: &'a str,
    pub num_questions: u32,
    pub difficulty: &'a str,
    pub format: QuizFormat,
    /// The caller's own name for the format, echoed back to the model.
    pub format_label: &'a str,
}

/// Compose the single user message sent to the model.
pub fn build_prompt(params: &PromptParams<'_>) -> String {
    let instruction = params.format.instruction(params.format_label);
    let example = params.format.format_example();

    format!(
        "You are an excellent educator. Based on the study note below, write a quiz that lets the learner check how well they have retained the material.

# Instructions
- Write {count} questions at the \"{difficulty}\" difficulty level.
{instruction}
- Give every question an `explanation` of why the answer is correct and an `intent` describing what the question is meant to teach.
- Write the quiz in the same language as the study note.
- Respond with JSON only, in exactly the format shown below. Do not add any other text, headings, or code fences.
- Do not put control characters (such as raw line breaks or tabs) inside JSON string values.

# Study note
---
{note}
---

# Output format (JSON)
{example}
",
        count = params.num_questions,
        difficulty = params.difficulty,
        instruction = instruction,
        note = params.note,
        example = example,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn params(format: QuizFormat) -> PromptParams<'static> {
        PromptParams {
            note: "Mitochondria produce ATP.",
            num_questions: 3,
            difficulty: "advanced",
            format,
            format_label: format.label(),
        }
    }

    #[test]
    fn every_format_example_is_valid_json_with_expected_shape() {
        for format in QuizFormat::ALL {
            let v: Value = serde_json::from_str(format.format_example()).unwrap();
            let items = v["quizzies"].as_array().unwrap();
            assert_eq!(items.len(), 1);
            let item = items[0].as_object().unwrap();
            for key in ["question", "answer", "explanation", "intent"] {
                assert!(item[key].is_string(), "{format}: missing {key}");
            }
            assert_eq!(item.contains_key("choices"), format.has_choices(), "{format}");
        }
    }

    #[test]
    fn choice_counts_match_format() {
        let mc: Value = serde_json::from_str(QuizFormat::MultipleChoice.format_example()).unwrap();
        assert_eq!(mc["quizzies"][0]["choices"].as_array().unwrap().len(), 4);
        let tf: Value = serde_json::from_str(QuizFormat::TrueFalse.format_example()).unwrap();
        assert_eq!(tf["quizzies"][0]["choices"], serde_json::json!(["True", "False"]));
    }

    #[test]
    fn prompt_embeds_parameters_and_example() {
        let prompt = build_prompt(&params(QuizFormat::TrueFalse));
        assert!(prompt.contains("Write 3 questions"));
        assert!(prompt.contains("\"advanced\""));
        assert!(prompt.contains("Mitochondria produce ATP."));
        assert!(prompt.contains("\"true-false\" format"));
        assert!(prompt.contains(TRUE_FALSE_EXAMPLE));
        assert!(prompt.contains("JSON only"));
    }

    #[test]
    fn prompt_echoes_caller_label() {
        let p = PromptParams { format_label: "多肢選択", ..params(QuizFormat::MultipleChoice) };
        let prompt = build_prompt(&p);
        assert!(prompt.contains("\"多肢選択\" format"));
        assert!(prompt.contains("exactly 4 choices"));
    }
}
