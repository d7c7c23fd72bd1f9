//! Task runner CLI
//!
//! Reads `BROWSER_TASK_WEBSITE` and `BROWSER_TASK_INSTRUCTIONS` from the
//! environment (both have defaults), delegates the task to the LLM-backed
//! agent, and streams newline-delimited JSON events to stdout.
//!
//! Always exits 0: failures are signaled inside the `error` event so the
//! calling process parses the JSON body instead of the exit status.

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;
use webtask_agent::{run_task, AgentClient, Model};
use webtask_core::EnvConfig;

#[derive(Parser)]
#[command(name = "task-run")]
#[command(version, about = "Run a natural-language browser task via an autonomous agent")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = EnvConfig::from_env();
    let agent = AgentClient::new(Model::default());

    let mut stdout = std::io::stdout();
    if let Err(e) = run_task(&agent, &config.website, &config.instructions, &mut stdout).await {
        // Only event serialization/write failures land here; agent failures
        // are already embedded in the event stream
        error!("Task runner failed: {}", e);
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // stdout carries the JSON event stream, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
