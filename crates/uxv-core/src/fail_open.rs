//! Fail-open utilities for best-effort steps
//!
//! Some steps of a check run must never mask the primary outcome: the
//! diagnostic screenshot taken after a failure, closing the browser session.
//! Those go through [`fail_open`].
//!
//! DO NOT use fail-open for:
//! - Element waits (they define pass/fail)
//! - Success screenshots (part of the success path)

use std::future::Future;
use tracing::warn;

use crate::Result;

/// Execute an operation whose failure should only be logged
///
/// Logs the error via `tracing::warn!` on failure and returns `None`.
///
/// # Usage
///
/// ```no_run
/// use uxv_core::fail_open::fail_open;
/// use uxv_core::Result;
///
/// async fn close_session() -> Result<()> {
///     Ok(())
/// }
///
/// async fn example() {
///     let closed = fail_open("close_session", || close_session()).await;
///     // closed is None if close_session() failed
/// }
/// ```
pub async fn fail_open<F, Fut, T>(operation_name: &str, f: F) -> Option<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match f().await {
        Ok(val) => Some(val),
        Err(e) => {
            warn!("{} failed (fail-open): {}", operation_name, e);
            None
        }
    }
}
