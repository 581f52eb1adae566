
use quizgen::clients::{MockGenerator, MockResponse};
use quizgen::error::{AIError, QuizError};
use quizgen::invoker::FallbackInvoker;

use crate::test_utils::{init_test_logging, model_ids, MODELS};

fn invoker(responses: Vec<MockResponse>) -> (FallbackInvoker<MockGenerator>, std::sync::Arc<quizgen::clients::MockHandle>) {
    init_test_logging();
    let (generator, handle) = MockGenerator::with_responses(responses);
    (FallbackInvoker::new(generator, model_ids()), handle)
}

#[tokio::test]
async fn first_success_stops_the_chain() {
    let (invoker, handle) = invoker(vec![MockResponse::Text("{}".into())]);

    let generation = invoker.invoke("prompt").await.unwrap();

    assert_eq!(generation.model_id, MODELS[0]);
    assert_eq!(generation.text, "{}");
    assert_eq!(handle.call_count(), 1);
    assert_eq!(handle.calls()[0].prompt, "prompt");
}

#[tokio::test]
async fn candidates_are_tried_in_order() {
    let (invoker, handle) = invoker(vec![
        MockResponse::Failure("one".into()),
        MockResponse::Failure("two".into()),
        MockResponse::Text("ok".into()),
    ]);

    let generation = invoker.invoke("prompt").await.unwrap();

    assert_eq!(generation.model_id, MODELS[2]);
    assert_eq!(handle.called_models(), MODELS.to_vec());
}

#[tokio::test]
async fn exhausted_chain_reports_last_failure() {
    let (invoker, handle) = invoker(vec![
        MockResponse::Failure("first".into()),
        MockResponse::Failure("second".into()),
        MockResponse::Failure("third".into()),
    ]);

    match invoker.invoke("prompt").await {
        Err(QuizError::ModelsExhausted { attempts, model, source }) => {
            assert_eq!(attempts, 3);
            assert_eq!(model, MODELS[2]);
            assert!(matches!(source, AIError::Mock(ref m) if m == "third"));
        }
        other => panic!("expected ModelsExhausted, got {other:?}"),
    }
    assert_eq!(handle.call_count(), 3);
}

#[tokio::test]
async fn empty_candidate_list_makes_no_calls() {
    init_test_logging();
    let (generator, handle) = MockGenerator::with_responses(vec![MockResponse::Text("{}".into())]);
    let invoker = FallbackInvoker::new(generator, Vec::new());

    let err = invoker.invoke("prompt").await.unwrap_err();

    assert!(matches!(err, QuizError::NoCandidates));
    assert_eq!(err.status_code(), 500);
    assert_eq!(handle.call_count(), 0);
}
