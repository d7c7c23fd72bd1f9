//! Plan executor CLI
//!
//! Usage:
//!   plan-exec '{"steps":[...]}'     Execute a plan passed as the first argument
//!   plan-exec < plan.json           Execute a plan read from stdin
//!
//! Emits a single JSON `ExecutionResult` to stdout. Invalid input JSON is
//! reported as a failed result with exit code 1; browser and step failures
//! are reported as `success: false` with exit code 0.

use clap::Parser;
use std::io::Read;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use webtask_browser::{BrowserConfig, BrowserSession};
use webtask_core::{EnvConfig, ExecutionResult, Plan};
use webtask_executor::PlanExecutor;

#[derive(Parser)]
#[command(name = "plan-exec")]
#[command(version, about = "Execute a JSON browser automation plan")]
struct Cli {
    /// JSON plan; read from stdin when omitted
    plan: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let plan_json = match cli.plan {
        Some(plan) => plan,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let plan: Plan = match serde_json::from_str(&plan_json) {
        Ok(plan) => plan,
        Err(e) => {
            let result = ExecutionResult::failed(
                format!("Invalid JSON: {}", e),
                Vec::new(),
                Vec::new(),
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
            std::process::exit(1);
        }
    };

    let result = execute(&plan).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Launch a browser and run the plan; every failure past JSON parsing is
/// folded into the result rather than the exit code
async fn execute(plan: &Plan) -> ExecutionResult {
    let env = EnvConfig::from_env();
    let config = BrowserConfig {
        headless: env.headless,
        ..BrowserConfig::default()
    };

    match BrowserSession::launch_with_config(config).await {
        Ok(session) => PlanExecutor::new(session).run(plan).await,
        Err(e) => ExecutionResult::failed(e.to_string(), Vec::new(), Vec::new()),
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // stdout carries the JSON result, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
