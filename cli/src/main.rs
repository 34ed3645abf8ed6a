//! CLI entrypoint for medchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use medchat_application::{AgentGateway, NoView, SubmissionOutcome, SubmitQuestionUseCase};
use medchat_domain::Conversation;
use medchat_infrastructure::{
    ConfigLoader, DemoAgentGateway, HttpAgentGateway, RetryPolicy, RetryingGateway, check_endpoint,
};
use medchat_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, TerminalView};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting medchat");

    // Load configuration; the CLI endpoint flag wins over every file
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }

    // === Dependency Injection ===
    // Build the gateway chain: transport wrapped in the retry policy
    let policy = RetryPolicy::new(config.retry_attempts, config.retry_base_delay());
    let gateway: Arc<dyn AgentGateway> = if cli.demo {
        Arc::new(RetryingGateway::new(DemoAgentGateway::new(), policy))
    } else {
        Arc::new(RetryingGateway::new(HttpAgentGateway::new(&config)?, policy))
    };

    // Startup health probe: fire-and-forget, independent of the pipeline
    if !cli.demo && !cli.no_health_check {
        tokio::spawn(check_endpoint(config.endpoint.clone()));
    }

    let endpoint_label = if cli.demo {
        "demo".to_string()
    } else {
        config.endpoint.clone()
    };

    // Chat mode
    if cli.chat {
        let view = Arc::new(TerminalView::new().with_spinner(!cli.quiet));
        let use_case = SubmitQuestionUseCase::new(gateway, view);
        let repl = ChatRepl::new(use_case, endpoint_label);

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    match cli.output {
        OutputFormat::Text => {
            // The view renders the whole round, failures included
            let view = Arc::new(TerminalView::new().with_spinner(!cli.quiet));
            let use_case = SubmitQuestionUseCase::new(gateway, view);
            match use_case.execute(&question).await {
                SubmissionOutcome::Answered(_) | SubmissionOutcome::Busy => {}
                SubmissionOutcome::Rejected(_) | SubmissionOutcome::Failed(_) => {
                    // Already shown in the error banner
                    std::process::exit(1);
                }
            }
        }
        OutputFormat::Json | OutputFormat::Html => {
            // Headless run: nothing renders while in flight, the result
            // prints once at the end
            let use_case = SubmitQuestionUseCase::new(gateway, Arc::new(NoView));
            match use_case.execute(&question).await {
                SubmissionOutcome::Answered(answer) => {
                    let output = if cli.output == OutputFormat::Json {
                        ConsoleFormatter::format_json(&answer)
                    } else {
                        let mut conversation = Conversation::new();
                        conversation.push_user(question.trim());
                        conversation.push_agent(answer.text.clone(), answer.sources.clone());
                        ConsoleFormatter::format_html(&conversation)
                    };
                    println!("{output}");
                }
                SubmissionOutcome::Rejected(error) => bail!("{error}"),
                SubmissionOutcome::Failed(error) => bail!("{error}"),
                SubmissionOutcome::Busy => {}
            }
        }
    }

    Ok(())
}
