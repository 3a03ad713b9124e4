//! The page driver seam
//!
//! Checks talk to the browser only through [`PageDriver`]. The production
//! implementation is [`crate::BrowserSession`]; tests substitute an
//! in-memory page.

use async_trait::async_trait;
use std::path::Path;
use uxv_core::{Locator, Result, ScreenshotArtifact};

/// Operations a check needs from an open page
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to `url` and wait for the load to finish
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Whether the locator's match is rendered and visible right now
    ///
    /// A locator that matches nothing is not visible; this never waits.
    async fn is_visible(&self, locator: &Locator) -> Result<bool>;

    /// Number of elements matching the locator's selector
    async fn count(&self, locator: &Locator) -> Result<usize>;

    /// Click the locator's match
    async fn click(&self, locator: &Locator) -> Result<()>;

    /// Replace the value of the locator's input with `text`
    async fn fill(&self, locator: &Locator, text: &str) -> Result<()>;

    /// Read an attribute (`None` when the element lacks it)
    async fn get_attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>>;

    /// Capture a full-page PNG to `path`, overwriting it
    async fn screenshot(&self, path: &Path) -> Result<ScreenshotArtifact>;

    /// Release the page and its browser
    async fn close(&self) -> Result<()>;
}
