//! Browser error types - re-exports the unified UxError from uxv-core
//!
//! Driver failures map onto these variants:
//! - Browser(String) - launch, CDP and script evaluation failures
//! - Navigation { url, message } - page load failures
//! - ElementNotFound { selector } - a locator matched nothing when acting on it
//! - Timeout { selector, timeout_ms } - a visibility wait expired
//! - Screenshot(String) - capture failures
//!
//! Error messages should name the selector or URL involved.

pub use uxv_core::{Result, UxError};

pub type BrowserError = UxError;
