//! Producer binary entry point
//!
//! `pages` writes the offline content pages; `faq` runs the backend content
//! workflow once and prints its response.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use producer::pages::{seed_record, PagePipeline, ProductSource, ProductStore};
use producer::{ContentWorkflow, ProviderMode, RoutedProvider, WorkflowConfig};
use shared::{logging, process_info, ProcessId};

#[derive(Parser)]
#[command(name = "producer")]
#[command(about = "Builds product content pages and FAQ answers")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write faq.json, product_page.json, comparison_page.json and dag_metadata.json
    Pages {
        /// Directory the JSON pages are written to
        #[arg(long, default_value = "outputs")]
        output_dir: PathBuf,

        /// Look this product up in the dataset instead of using the built-in record
        #[arg(long)]
        product_name: Option<String>,

        /// Directory holding products.json and products.csv
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Generate FAQ questions and a safety answer once and print the JSON response
    Faq {
        product_name: String,

        /// Content provider (mock, openai); overrides CONTENT_LLM_MODE
        #[arg(long)]
        llm_mode: Option<String>,

        /// Fail instead of substituting canned questions on unparseable model output
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ProcessId::init_producer();
    logging::init_tracing_with_level(Some(&args.log_level));

    match args.command {
        Command::Pages {
            output_dir,
            product_name,
            data_dir,
        } => {
            let source = match product_name {
                Some(name) => {
                    let store = ProductStore::discover(&data_dir)?;
                    process_info!(ProcessId::current(), "Looking up '{}' among {} products", name, store.len());
                    ProductSource::Parsed(store.find(&name))
                }
                None => ProductSource::Raw(seed_record()),
            };

            let pages = match PagePipeline::default().run(source) {
                Ok(pages) => pages,
                Err(e) => {
                    logging::log_error(ProcessId::current(), "Building content pages", &e);
                    return Err(e.into());
                }
            };
            let paths = pages.write_to(&output_dir).await?;
            for path in paths.all() {
                println!("{}", path.display());
            }
            logging::log_success(
                ProcessId::current(),
                &format!("Wrote content pages to {}", output_dir.display()),
            );
        }
        Command::Faq {
            product_name,
            llm_mode,
            strict,
        } => {
            let mut config = WorkflowConfig::from_env();
            if let Some(mode) = llm_mode.as_deref() {
                config.mode = mode.parse::<ProviderMode>()?;
            }
            config.strict |= strict;

            let workflow = ContentWorkflow::new(Arc::new(RoutedProvider::build(config.mode)), &config);
            let response = workflow.run(&product_name).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.error.is_some() {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
