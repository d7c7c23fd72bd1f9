//! # webtask-agent
//!
//! LLM-backed autonomous task runner.
//!
//! A task is a website + natural-language instructions pair. The runner
//! renders them into a fixed prompt, hands the prompt to an agent whose
//! planning and execution loop is opaque to this crate, and streams
//! newline-delimited JSON progress events while it runs.
//!
//! Agent failures never propagate as process failures: they are embedded in
//! an `error` event so callers parse the JSON body instead of relying on
//! exit-code signaling.

mod auth;
mod client;
mod prompt;
mod runner;
mod types;

pub use auth::api_key;
pub use client::AgentClient;
pub use prompt::task_prompt;
pub use runner::{run_task, TaskAgent};
pub use types::*;
