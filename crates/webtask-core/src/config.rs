//! Environment-driven configuration
//!
//! The runner binaries are configured entirely through environment
//! variables; every variable has a hardcoded default so the binaries run
//! with no setup at all.

use std::env;

/// Default website when `BROWSER_TASK_WEBSITE` is unset
pub const DEFAULT_WEBSITE: &str = "https://www.google.com";

/// Default instructions when `BROWSER_TASK_INSTRUCTIONS` is unset
pub const DEFAULT_INSTRUCTIONS: &str = "Search for something";

/// Settings read from the process environment
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Target website for the task runner
    pub website: String,
    /// Natural-language instructions for the task runner
    pub instructions: String,
    /// Headless browser unless `BROWSER_HEADLESS=false`
    pub headless: bool,
}

impl EnvConfig {
    /// Read configuration from the environment, applying defaults
    pub fn from_env() -> Self {
        Self {
            website: env::var("BROWSER_TASK_WEBSITE")
                .unwrap_or_else(|_| DEFAULT_WEBSITE.to_string()),
            instructions: env::var("BROWSER_TASK_INSTRUCTIONS")
                .unwrap_or_else(|_| DEFAULT_INSTRUCTIONS.to_string()),
            headless: env::var("BROWSER_HEADLESS").as_deref() != Ok("false"),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            website: DEFAULT_WEBSITE.to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            headless: true,
        }
    }
}
