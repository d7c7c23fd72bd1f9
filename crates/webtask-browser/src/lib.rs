//! Browser control layer for webtask plan execution
//!
//! Wraps Chrome DevTools Protocol (via `headless_chrome`) behind the
//! [`BrowserDriver`] trait so the plan executor can be driven against a real
//! browser in production and a mock in tests.

pub mod browser;
pub mod driver;

pub use browser::{BrowserConfig, BrowserSession};
pub use driver::BrowserDriver;
