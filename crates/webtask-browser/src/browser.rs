//! Browser lifecycle management using Chrome DevTools Protocol

use crate::driver::BrowserDriver;
use async_trait::async_trait;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use webtask_core::{Result, WebtaskError};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Element lookup timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            timeout_seconds: 30,
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
pub struct BrowserSession {
    /// Underlying browser instance; dropping it tears down Chromium
    browser: Option<Browser>,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new headless browser instance
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| WebtaskError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| WebtaskError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| WebtaskError::Browser(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser: Some(browser),
            tab,
            config,
        })
    }

    fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

#[async_trait]
impl BrowserDriver for BrowserSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| WebtaskError::Browser(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| WebtaskError::Browser(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    async fn click(&mut self, selector: &str) -> Result<()> {
        debug!("Clicking element: {}", selector);

        let element = self
            .tab
            .wait_for_element_with_custom_timeout(selector, self.element_timeout())
            .map_err(|_e| WebtaskError::ElementNotFound(selector.to_string()))?;

        element
            .click()
            .map_err(|e| WebtaskError::Browser(format!("Failed to click {}: {}", selector, e)))?;

        Ok(())
    }

    async fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        debug!("Typing into element: {}", selector);

        let element = self
            .tab
            .wait_for_element_with_custom_timeout(selector, self.element_timeout())
            .map_err(|_e| WebtaskError::ElementNotFound(selector.to_string()))?;

        element
            .type_into(text)
            .map_err(|e| WebtaskError::Browser(format!("Failed to type into {}: {}", selector, e)))?;

        Ok(())
    }

    async fn take_screenshot(&mut self) -> Result<Vec<u8>> {
        debug!("Capturing full page screenshot");

        let data = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| WebtaskError::Browser(format!("Screenshot capture failed: {}", e)))?;

        Ok(data)
    }

    async fn close(&mut self) -> Result<()> {
        info!("Closing browser session");
        // Dropping the Browser handle shuts down the Chromium process
        self.browser.take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_custom_config() {
        let config = BrowserConfig {
            headless: false,
            window_width: 1024,
            window_height: 768,
            timeout_seconds: 60,
        };

        assert!(!config.headless);
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.timeout_seconds, 60);
    }
}
