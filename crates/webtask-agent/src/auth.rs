//! Authentication for the Anthropic API

use std::env;
use webtask_core::{Result, WebtaskError};

/// Read the Anthropic API key from `ANTHROPIC_API_KEY`
pub fn api_key() -> Result<String> {
    env::var("ANTHROPIC_API_KEY").map_err(|_| {
        WebtaskError::Auth(
            "No authentication found. Set ANTHROPIC_API_KEY=sk-ant-api03-...".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent concurrent env var modifications
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_key_present() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = env::var("ANTHROPIC_API_KEY").ok();

        env::set_var("ANTHROPIC_API_KEY", "test-key");
        assert_eq!(api_key().unwrap(), "test-key");

        match original {
            Some(v) => env::set_var("ANTHROPIC_API_KEY", v),
            None => env::remove_var("ANTHROPIC_API_KEY"),
        }
    }

    #[test]
    fn test_key_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = env::var("ANTHROPIC_API_KEY").ok();

        env::remove_var("ANTHROPIC_API_KEY");
        assert!(api_key().is_err());

        match original {
            Some(v) => env::set_var("ANTHROPIC_API_KEY", v),
            None => env::remove_var("ANTHROPIC_API_KEY"),
        }
    }
}
