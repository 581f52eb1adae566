use anyhow::Context;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use quizgen::clients::ClaudeClient;
use quizgen::config::AppConfig;
use quizgen::store::DynamoQuizStore;
use quizgen::{ApiResponse, QuizService};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("invalid quizgen configuration")?;
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let generator = ClaudeClient::from_config(&config, &sdk_config).context("failed to create model client")?;
    let store = DynamoQuizStore::from_sdk_config(&sdk_config, config.table_name.clone());
    info!(
        table = %config.table_name,
        provider = %config.provider,
        candidates = ?config.model_ids,
        "quizgen lambda ready"
    );

    let service = QuizService::new(generator, config.model_ids.clone(), store);
    let service = &service;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        let (payload, context) = event.into_parts();
        info!(request_id = %context.request_id, "Handling quiz request");
        Ok::<ApiResponse, Error>(service.handle_event(payload).await)
    }))
    .await
}
