use std::io::{self, Read};
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use quizgen::clients::{ClaudeClient, MockGenerator, TextGenerator};
use quizgen::config::AppConfig;
use quizgen::store::{DynamoQuizStore, MemoryQuizStore, QuizStore};
use quizgen::{QuizRequest, QuizService};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Generate and store a quiz from a study note", long_about = None)]
#[command(after_help = "ENVIRONMENT VARIABLES:
    QUIZGEN_TABLE_NAME      DynamoDB table (default: quizzies)
    QUIZGEN_BEDROCK_REGION  Bedrock region (default: ap-northeast-1)
    QUIZGEN_MODEL_IDS       Comma-separated candidate models, most capable first
    QUIZGEN_MAX_TOKENS      Output token cap (default: 4096)
    QUIZGEN_PROVIDER        bedrock | anthropic (default: bedrock)
    ANTHROPIC_API_KEY       Required for the anthropic provider

EXAMPLES:
    echo '{\"note\":\"...\",\"noteId\":\"n1\"}' | quizgen --dry-run --pretty
    quizgen --input event.json")]
struct Args {
    /// Request event or body as JSON [default: stdin]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use a scripted model reply and an in-memory store instead of AWS
    #[arg(long)]
    dry_run: bool,

    /// Model reply to use with --dry-run [default: the format's example shape]
    #[arg(long, requires = "dry_run")]
    mock_response: Option<PathBuf>,

    /// Pretty-print the response envelope
    #[arg(long)]
    pretty: bool,
}

fn read_event(input: Option<&PathBuf>) -> Result<Value> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("input is not valid JSON")
}

async fn handle<G, S>(service: QuizService<G, S>, event: Value, pretty: bool) -> Result<u16>
where
    G: TextGenerator,
    S: QuizStore,
{
    let response = service.handle_event(event).await;
    let rendered = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");
    Ok(response.status_code)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env().context("invalid quizgen configuration")?;
    let event = read_event(args.input.as_ref())?;

    let status = if args.dry_run {
        let reply = match &args.mock_response {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let format = QuizRequest::from_event(event.clone())
                    .map(|r| r.format)
                    .unwrap_or_default();
                format.format_example().to_string()
            }
        };
        let (generator, mock) = MockGenerator::new();
        mock.push_text(reply);
        let service = QuizService::new(generator, config.model_ids.clone(), MemoryQuizStore::new());
        handle(service, event, args.pretty).await?
    } else {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let generator = ClaudeClient::from_config(&config, &sdk_config)?;
        let store = DynamoQuizStore::from_sdk_config(&sdk_config, config.table_name.clone());
        let service = QuizService::new(generator, config.model_ids.clone(), store);
        handle(service, event, args.pretty).await?
    };

    if status >= 400 {
        exit(1);
    }
    Ok(())
}
