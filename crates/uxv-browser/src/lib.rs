//! Browser automation driver for uxv smoke checks
//!
//! This crate provides the page operations the checks need, implemented on
//! the Chrome DevTools Protocol (CDP) through `headless_chrome`.
//!
//! # Features
//!
//! - **Browser Management**: launch a headless Chrome/Chromium and open a tab
//! - **Page Operations**: navigate, visibility checks, click, fill, attributes
//! - **Waiting**: bounded visibility polling with explicit timeouts, plus a
//!   single-match gate for controls that must be unique
//! - **Screenshots**: full-page PNG capture written to a fixed path
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::time::Duration;
//! use uxv_browser::{wait_for_visible, BrowserSession, PageDriver};
//! use uxv_core::Locator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = BrowserSession::launch().await?;
//!     session.navigate("http://localhost:3002").await?;
//!
//!     let dashboard = Locator::button("Go to Dashboard");
//!     wait_for_visible(&session, &dashboard, Duration::from_secs(10)).await?;
//!
//!     session.screenshot(Path::new("verification/page.png")).await?;
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium installed (or `browser.chrome_path` configured)
//!
//! # Architecture
//!
//! - [`driver`]: the [`PageDriver`] trait checks are written against
//! - [`browser`]: [`BrowserSession`], the CDP implementation
//! - [`verification`]: visibility waits and attribute checks
//! - [`screenshot`]: PNG persistence
//! - [`error`]: error types for browser operations

pub mod browser;
pub mod driver;
pub mod error;
pub mod screenshot;
pub mod verification;

// Re-export commonly used types
pub use browser::{BrowserConfig, BrowserSession};
pub use driver::PageDriver;
pub use error::{BrowserError, Result};
pub use screenshot::write_png;
pub use verification::{verify_attribute, wait_for_unique, wait_for_visible};
