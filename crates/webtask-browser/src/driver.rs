//! Driver trait abstracting the live browser handle

use async_trait::async_trait;
use webtask_core::Result;

/// Operations the plan executor needs from a browser handle.
///
/// `close` takes `&mut self` and must be safe to call exactly once; the
/// executor guarantees it is invoked on every exit path.
#[async_trait]
pub trait BrowserDriver: Send {
    /// Navigate to a URL and wait for the navigation to complete
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Click the element matching a CSS selector
    async fn click(&mut self, selector: &str) -> Result<()>;

    /// Type text into the element matching a CSS selector
    async fn type_text(&mut self, selector: &str, text: &str) -> Result<()>;

    /// Capture a PNG screenshot of the current page
    async fn take_screenshot(&mut self) -> Result<Vec<u8>>;

    /// Release the browser handle
    async fn close(&mut self) -> Result<()>;
}
