//! WebServer process entry point
//!
//! Serves the backend `/api/generate` endpoint over the configured provider.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use clap::Parser;

use producer::{ContentWorkflow, ProviderMode, RoutedProvider, WorkflowConfig};
use shared::{logging, ProcessId, process_info};
use webserver::WebServer;

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Backend serving FAQ generation over HTTP")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "5000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Content provider (mock, openai); overrides CONTENT_LLM_MODE
    #[arg(long)]
    llm_mode: Option<String>,

    /// Fail instead of substituting canned questions on unparseable model output
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut config = WorkflowConfig::from_env();
    if let Some(mode) = args.llm_mode.as_deref() {
        config.mode = mode.parse::<ProviderMode>()?;
    }
    config.strict |= args.strict;

    let provider = Arc::new(RoutedProvider::build(config.mode));
    let workflow = ContentWorkflow::new(provider, &config);
    process_info!(
        ProcessId::current(),
        "Content workflow ready (mode: {}, strict: {})",
        workflow.mode(),
        config.strict
    );

    let bind_address = SocketAddr::from((Ipv4Addr::LOCALHOST, args.port));
    WebServer::new(bind_address, workflow).run().await?;
    Ok(())
}
