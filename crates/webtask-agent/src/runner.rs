//! Event-streaming task runner
//!
//! Drives one agent run and reports progress as JSON lines. The sequence is
//! always `start`, `progress`, then either `progress` + `complete` or a
//! single `error` event. An agent failure is not an error for the runner:
//! it is embedded in the `error` event and the runner returns `Ok(())` so
//! the process can exit 0 and let the caller parse the payload.

use crate::client::AgentClient;
use crate::prompt::task_prompt;
use async_trait::async_trait;
use std::io::Write;
use tracing::{error, info};
use webtask_core::{Result, TaskEvent, TaskOutcome};

/// Autonomous agent seam: one free-text task in, one transcript out
#[async_trait]
pub trait TaskAgent: Send + Sync {
    async fn run(&self, task: &str) -> Result<String>;
}

#[async_trait]
impl TaskAgent for AgentClient {
    async fn run(&self, task: &str) -> Result<String> {
        Ok(AgentClient::run(self, task).await?.output)
    }
}

/// Run one task through the agent, streaming events to `out`.
///
/// Returns `Err` only when writing an event fails; agent failures are
/// reported inside the event stream.
pub async fn run_task<A, W>(agent: &A, website: &str, instructions: &str, out: &mut W) -> Result<()>
where
    A: TaskAgent + ?Sized,
    W: Write,
{
    let task = task_prompt(website, instructions);

    emit(
        out,
        &TaskEvent::start("Starting browser automation...", task.as_str(), website),
    )?;

    emit(
        out,
        &TaskEvent::progress("Browser agent initialized, starting execution..."),
    )?;

    match agent.run(&task).await {
        Ok(output) => {
            info!("Agent run succeeded for {}", website);

            emit(
                out,
                &TaskEvent::progress("Task execution completed, processing results..."),
            )?;

            let output = if output.is_empty() {
                "No result returned".to_string()
            } else {
                output
            };

            emit(
                out,
                &TaskEvent::complete(
                    "Browser automation completed successfully",
                    TaskOutcome {
                        success: true,
                        output,
                        screenshots: Vec::new(),
                        logs: vec![
                            "Browser automation started".to_string(),
                            format!("Navigated to {}", website),
                            "Executed instructions".to_string(),
                            "Browser automation completed successfully".to_string(),
                        ],
                    },
                ),
            )?;
        }
        Err(e) => {
            let error_msg = e.to_string();
            error!("Agent run failed: {}", error_msg);

            emit(
                out,
                &TaskEvent::error(
                    format!("Browser automation failed: {}", error_msg),
                    error_msg.clone(),
                    TaskOutcome {
                        success: false,
                        output: format!("Error: {}", error_msg),
                        screenshots: Vec::new(),
                        logs: vec![format!("Error: {}", error_msg)],
                    },
                ),
            )?;
        }
    }

    Ok(())
}

fn emit<W: Write>(out: &mut W, event: &TaskEvent) -> Result<()> {
    let line = serde_json::to_string(event)?;
    writeln!(out, "{}", line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webtask_core::WebtaskError;

    struct ScriptedAgent {
        response: std::result::Result<String, String>,
    }

    #[async_trait]
    impl TaskAgent for ScriptedAgent {
        async fn run(&self, _task: &str) -> Result<String> {
            match &self.response {
                Ok(output) => Ok(output.clone()),
                Err(msg) => Err(WebtaskError::Agent(msg.clone())),
            }
        }
    }

    fn events_from(buf: &[u8]) -> Vec<TaskEvent> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_successful_run_emits_four_events() {
        let agent = ScriptedAgent {
            response: Ok("searched and found results".to_string()),
        };
        let mut buf = Vec::new();

        run_task(&agent, "https://example.com", "search for rust", &mut buf)
            .await
            .unwrap();

        let events = events_from(&buf);
        assert_eq!(events.len(), 4);

        match &events[0] {
            TaskEvent::Start { task, website, .. } => {
                assert!(task.starts_with("Go to https://example.com and search for rust"));
                assert_eq!(website, "https://example.com");
            }
            other => panic!("expected start event, got {:?}", other),
        }
        assert!(matches!(events[1], TaskEvent::Progress { .. }));
        assert!(matches!(events[2], TaskEvent::Progress { .. }));

        match &events[3] {
            TaskEvent::Complete { result, .. } => {
                assert!(result.success);
                assert_eq!(result.output, "searched and found results");
                assert!(result.screenshots.is_empty());
                assert_eq!(result.logs.len(), 4);
                assert_eq!(result.logs[1], "Navigated to https://example.com");
            }
            other => panic!("expected complete event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_output_placeholder() {
        let agent = ScriptedAgent {
            response: Ok(String::new()),
        };
        let mut buf = Vec::new();

        run_task(&agent, "https://example.com", "do nothing", &mut buf)
            .await
            .unwrap();

        let events = events_from(&buf);
        match &events[3] {
            TaskEvent::Complete { result, .. } => {
                assert_eq!(result.output, "No result returned");
            }
            other => panic!("expected complete event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_agent_failure_is_not_a_runner_error() {
        let agent = ScriptedAgent {
            response: Err("model overloaded".to_string()),
        };
        let mut buf = Vec::new();

        // Failure stays inside the event stream
        run_task(&agent, "https://example.com", "search", &mut buf)
            .await
            .unwrap();

        let events = events_from(&buf);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], TaskEvent::Start { .. }));
        assert!(matches!(events[1], TaskEvent::Progress { .. }));

        match &events[2] {
            TaskEvent::Error { message, error, result, .. } => {
                assert!(message.contains("model overloaded"));
                assert!(error.contains("model overloaded"));
                assert!(!result.success);
                assert!(result.output.starts_with("Error: "));
                assert_eq!(result.logs.len(), 1);
            }
            other => panic!("expected error event, got {:?}", other),
        }
    }
}
