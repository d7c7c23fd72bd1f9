//! Plan generator CLI
//!
//! Usage:
//!   plan-gen '<task json>'                Generate a plan for a task definition
//!   plan-gen --mock < task.json           Skip the LLM and use the heuristic plan
//!   plan-gen --param query=rust ...       Supply runtime values for {{param}} tokens
//!
//! Emits the generated plan as pretty JSON on stdout. When no API key is
//! configured, or the LLM reply cannot be decoded, generation falls back to
//! the deterministic heuristic plan.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::collections::HashMap;
use std::io::Read;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use webtask_agent::{api_key, AgentClient, Model};
use webtask_core::{Plan, TaskDefinition};
use webtask_planner::{heuristic_plan, parse_plan_response, planning_prompt};

#[derive(Parser)]
#[command(name = "plan-gen")]
#[command(version, about = "Generate a browser automation plan from a task definition")]
struct Cli {
    /// Task definition JSON; read from stdin when omitted
    task: Option<String>,

    /// Skip the LLM and build the heuristic plan
    #[arg(long)]
    mock: bool,

    /// Model to use for planning
    #[arg(short, long, default_value = "haiku")]
    model: CliModel,

    /// Runtime parameter values as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    params: Vec<(String, String)>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// CLI-friendly model enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliModel {
    Opus,
    Sonnet,
    Haiku,
}

impl From<CliModel> for Model {
    fn from(m: CliModel) -> Self {
        match m {
            CliModel::Opus => Model::Opus,
            CliModel::Sonnet => Model::Sonnet,
            CliModel::Haiku => Model::Haiku,
        }
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let task_json = match cli.task {
        Some(task) => task,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let task: TaskDefinition =
        serde_json::from_str(&task_json).context("Failed to parse task definition JSON")?;
    let values: HashMap<String, String> = cli.params.into_iter().collect();

    let plan = generate(&task, &values, cli.mock, cli.model.into()).await;
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}

async fn generate(
    task: &TaskDefinition,
    values: &HashMap<String, String>,
    mock: bool,
    model: Model,
) -> Plan {
    if mock || api_key().is_err() {
        info!("Using heuristic plan generation for {}", task.id);
        return heuristic_plan(task, values);
    }

    let prompt = planning_prompt(task, values);
    let client = AgentClient::new(model);

    match client.run(&prompt).await {
        Ok(result) => match parse_plan_response(&result.output) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Could not decode LLM plan, falling back to heuristic: {}", e);
                heuristic_plan(task, values)
            }
        },
        Err(e) => {
            warn!("LLM planning failed, falling back to heuristic: {}", e);
            heuristic_plan(task, values)
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // stdout carries the plan JSON, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
