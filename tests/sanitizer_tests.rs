use quizgen::error::QuizError;
use quizgen::json_utils::{extract_json_object, parse_quiz_response, strip_control_chars};

#[test]
fn strips_every_control_character_before_searching() {
    let all_controls: String = (0x00u32..=0x1F)
        .chain(0x7F..=0x9F)
        .filter_map(char::from_u32)
        .collect();
    let raw = format!("{all_controls}{{\"quizzies\": []}}{all_controls}");
    assert_eq!(strip_control_chars(&raw), "{\"quizzies\": []}");
    assert!(parse_quiz_response(&raw).unwrap().is_empty());
}

#[test]
fn literal_newline_inside_string_value_is_removed_then_parsed() {
    let raw = "{\n  \"quizzies\": [\n    {\"question\": \"Line one\nline two\", \"answer\": \"A\"}\n  ]\n}";
    // Raw newlines inside strings are invalid JSON until they are stripped.
    assert!(serde_json::from_str::<serde_json::Value>(raw).is_err());

    let items = parse_quiz_response(raw).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].question.as_deref(), Some("Line oneline two"));
    assert_eq!(items[0].answer.as_deref(), Some("A"));
}

#[test]
fn escaped_newlines_survive() {
    let raw = r#"{"quizzies": [{"question": "a\nb"}]}"#;
    let items = parse_quiz_response(raw).unwrap();
    assert_eq!(items[0].question.as_deref(), Some("a\nb"));
}

#[test]
fn prose_and_code_fences_around_json_are_ignored() {
    let raw = "Sure! Here is your quiz:\n```json\n{\"quizzies\": [{\"question\": \"Q\", \"choices\": [\"True\", \"False\"], \"answer\": \"True\"}]}\n```\nGood luck.";
    let items = parse_quiz_response(raw).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].choices.as_ref().unwrap(), &vec!["True".to_string(), "False".to_string()]);
}

#[test]
fn missing_delimiters_is_no_json_found() {
    for raw in ["", "plain text", "only { open", "only } close", "} backwards {"] {
        match parse_quiz_response(raw) {
            Err(QuizError::NoJsonFound(_)) => {}
            other => panic!("{raw:?}: expected NoJsonFound, got {other:?}"),
        }
    }
}

#[test]
fn invalid_json_reports_the_offending_content() {
    let raw = "prefix {\"quizzies\": [ {\"question\": } ]} suffix";
    match parse_quiz_response(raw) {
        Err(err @ QuizError::JsonParse(..)) => {
            let message = err.to_string();
            assert!(message.contains("{\"quizzies\": [ {\"question\": } ]}"), "{message}");
            assert_eq!(err.status_code(), 500);
        }
        other => panic!("expected JsonParse, got {other:?}"),
    }
}

#[test]
fn missing_quizzies_key_yields_no_items() {
    assert!(parse_quiz_response("{\"other\": 1}").unwrap().is_empty());
}

#[test]
fn wrong_field_types_are_parse_errors() {
    assert!(matches!(
        parse_quiz_response("{\"quizzies\": \"none\"}"),
        Err(QuizError::JsonParse(..))
    ));
    assert!(matches!(
        parse_quiz_response("{\"quizzies\": [{\"choices\": \"A, B\"}]}"),
        Err(QuizError::JsonParse(..))
    ));
}

#[test]
fn extraction_spans_first_open_to_last_close() {
    let raw = "a {\"x\": 1} b {\"y\": 2} c";
    assert_eq!(extract_json_object(raw).unwrap(), "{\"x\": 1} b {\"y\": 2}");
    assert!(matches!(parse_quiz_response(raw), Err(QuizError::JsonParse(..))));
}
