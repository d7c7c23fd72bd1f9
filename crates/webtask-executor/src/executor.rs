//! Plan execution against a live browser driver

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};
use webtask_browser::BrowserDriver;
use webtask_core::{ExecutionResult, Plan, PlanStep, Result, WebtaskError};

/// Fallback target for `click` steps that carry no selector
const DEFAULT_CLICK_TARGET: &str = "button";

/// Settle delays applied between steps.
///
/// These approximate waiting for page state to settle after an action; they
/// are not a readiness signal. Tests run with zeroed delays.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Delay after a `navigate` step, in milliseconds
    pub navigate_settle_ms: u64,
    /// Delay after `click` and `type` steps, in milliseconds
    pub action_settle_ms: u64,
    /// Duration of a `wait` step that carries no `timeout`, in milliseconds
    pub default_wait_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            navigate_settle_ms: 2000,
            action_settle_ms: 1000,
            default_wait_ms: 2000,
        }
    }
}

/// Executes a plan strictly sequentially against a browser driver.
///
/// The executor owns the driver for the duration of the run and releases it
/// exactly once on every exit path. Logs and screenshots accumulated before
/// a step failure are preserved in the failed result.
pub struct PlanExecutor<D: BrowserDriver> {
    driver: D,
    config: ExecutorConfig,
    logs: Vec<String>,
    screenshots: Vec<String>,
}

impl<D: BrowserDriver> PlanExecutor<D> {
    /// Create an executor with default settle delays
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, ExecutorConfig::default())
    }

    /// Create an executor with custom settle delays
    pub fn with_config(driver: D, config: ExecutorConfig) -> Self {
        Self {
            driver,
            config,
            logs: Vec::new(),
            screenshots: Vec::new(),
        }
    }

    /// Execute every step of the plan in order.
    ///
    /// Never returns an error: step failures abort the remaining steps and
    /// are reported as `success: false` with the stringified error. The
    /// driver is closed before the result is produced, on both outcomes.
    pub async fn run(mut self, plan: &Plan) -> ExecutionResult {
        let outcome = self.execute_steps(&plan.steps).await;

        if let Err(e) = self.driver.close().await {
            warn!("Failed to close browser driver: {}", e);
        }

        match outcome {
            Ok(()) => ExecutionResult::ok(self.logs, self.screenshots),
            Err(e) => ExecutionResult::failed(e.to_string(), self.logs, self.screenshots),
        }
    }

    async fn execute_steps(&mut self, steps: &[PlanStep]) -> Result<()> {
        let total = steps.len();

        for (i, step) in steps.iter().enumerate() {
            let log_msg = format!("Executing step {}/{}: {}", i + 1, total, step.kind());
            info!("{}", log_msg);
            self.logs.push(log_msg);

            match step {
                PlanStep::Navigate { value } => {
                    let url = value.as_deref().ok_or_else(|| {
                        WebtaskError::InvalidPlan("navigate step missing value".to_string())
                    })?;
                    self.driver.navigate(url).await?;
                    self.settle(self.config.navigate_settle_ms).await;
                }

                PlanStep::Click { selector } => {
                    let target = selector.as_deref().unwrap_or(DEFAULT_CLICK_TARGET);
                    self.driver.click(target).await?;
                    self.settle(self.config.action_settle_ms).await;
                }

                PlanStep::Type { selector, value } => {
                    if let (Some(selector), Some(value)) = (selector.as_deref(), value.as_deref()) {
                        self.driver.type_text(selector, value).await?;
                    }
                    // Settles even when the step was skipped
                    self.settle(self.config.action_settle_ms).await;
                }

                PlanStep::Wait { timeout } => {
                    let ms = timeout.unwrap_or(self.config.default_wait_ms);
                    self.settle(ms).await;
                }

                PlanStep::AssertText { selector, text } => {
                    // Placeholder: records the assertion without inspecting
                    // the page, matching the original wire contract
                    if let (Some(selector), Some(text)) = (selector, text) {
                        self.logs
                            .push(format!("Asserting text '{}' in {}", text, selector));
                    }
                }

                PlanStep::Capture => {
                    let data = self.driver.take_screenshot().await?;
                    if !data.is_empty() {
                        self.screenshots
                            .push(format!("data:image/png;base64,{}", BASE64.encode(&data)));
                        self.logs.push("Screenshot captured".to_string());
                    }
                }

                PlanStep::Unknown => {}
            }
        }

        Ok(())
    }

    async fn settle(&self, ms: u64) {
        if ms > 0 {
            sleep(Duration::from_millis(ms)).await;
        }
    }
}
