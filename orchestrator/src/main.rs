//! Main entry point for the orchestrator binary
//!
//! Wires the OpenAI-compatible provider, the backend client and a terminal
//! presenter into the generation orchestrator.

use std::sync::Arc;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use orchestrator::{
    services::{RealBackendClient, TerminalPresenter},
    GenerationOrchestrator, OrchestratorConfig, Outcome,
};
use producer::OpenAiChatProvider;
use shared::{logging, process_info, ProcessId};

/// Generate product FAQ content with an AI provider and a backend fallback
#[derive(Parser)]
#[command(name = "orchestrator")]
#[command(about = "Generates FAQ questions and a safety answer for a product")]
pub struct Args {
    /// Product name; without it, every line read from stdin is one request
    #[arg(long)]
    pub product_name: Option<String>,

    /// Base URL of the fallback backend
    #[arg(long, env = "GENERATE_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Chat model for the primary path
    #[arg(long, env = "GENERATE_MODEL")]
    pub model: Option<String>,

    /// Sampling temperature for the primary path (0.0 to 2.0)
    #[arg(long, env = "GENERATE_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Completion token cap for the primary path
    #[arg(long, env = "GENERATE_MAX_TOKENS")]
    pub max_tokens: Option<u32>,

    /// Skip the AI provider and go straight to the backend
    #[arg(long)]
    pub no_ai: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ProcessId::init_orchestrator();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut config = OrchestratorConfig::from_env()?;
    if let Some(url) = args.backend_url.as_deref() {
        config = config.with_backend_url(url)?;
    }
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(temperature) = args.temperature {
        config = config.with_temperature(temperature)?;
    }
    if let Some(max_tokens) = args.max_tokens {
        config = config.with_max_tokens(max_tokens)?;
    }
    config.ai_enabled = !args.no_ai;

    logging::log_startup(
        ProcessId::current(),
        &format!("orchestrator (model {}, backend {})", config.model, config.backend_url),
    );

    let provider =
        Arc::new(OpenAiChatProvider::from_env().with_generation_params(config.temperature, config.max_tokens));
    let backend = RealBackendClient::new(&config.backend_url)?;
    let orchestrator = GenerationOrchestrator::from_config(&config, provider, backend, TerminalPresenter::stdout());

    let failed = match args.product_name {
        Some(name) => matches!(orchestrator.generate(&name).await, Outcome::Failed(_)),
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut any_failed = false;
            while let Some(line) = lines.next_line().await? {
                any_failed |= matches!(orchestrator.generate(&line).await, Outcome::Failed(_));
            }
            any_failed
        }
    };

    process_info!(ProcessId::current(), "Orchestrator finished");
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
