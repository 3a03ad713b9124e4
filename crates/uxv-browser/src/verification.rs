//! Wait-gated verification helpers
//!
//! Every element a check depends on goes through [`wait_for_visible`]: poll
//! the driver until the locator's match is visible or the timeout expires.
//! There is no retry beyond the polling itself; an expired wait is terminal.
//! Controls that must exist exactly once go through [`wait_for_unique`].

use crate::driver::PageDriver;
use crate::error::{BrowserError, Result};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};
use uxv_core::Locator;

/// How often visibility is re-checked while waiting
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wait until the locator's match is visible
///
/// Driver errors while polling count as "not visible yet" (the page may be
/// mid-render); only the timeout ends the wait with an error.
pub async fn wait_for_visible(
    driver: &dyn PageDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<()> {
    debug!("Waiting for {} (timeout: {:?})", locator, timeout);
    let start = Instant::now();

    loop {
        match driver.is_visible(locator).await {
            Ok(true) => {
                debug!("Visible: {} after {:?}", locator, start.elapsed());
                return Ok(());
            }
            Ok(false) => {}
            Err(e) => debug!("Visibility check for {} failed: {}", locator, e),
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            return Err(BrowserError::Timeout {
                selector: locator.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            });
        }

        sleep(POLL_INTERVAL.min(timeout - elapsed)).await;
    }
}

/// Wait until the locator is visible, then require a single match
///
/// A duplicated control (two Dashboard buttons, two dialogs) is an
/// `Assertion` failure even though the first match is visible.
pub async fn wait_for_unique(
    driver: &dyn PageDriver,
    locator: &Locator,
    timeout: Duration,
) -> Result<()> {
    wait_for_visible(driver, locator, timeout).await?;

    let matches = driver.count(locator).await?;
    if matches > 1 {
        return Err(BrowserError::Assertion(format!(
            "Expected exactly one {}, found {}",
            locator, matches
        )));
    }
    Ok(())
}

/// Verify an element's attribute equals `expected`
///
/// A missing attribute compares unequal.
pub async fn verify_attribute(
    driver: &dyn PageDriver,
    locator: &Locator,
    attribute: &str,
    expected_value: &str,
) -> Result<bool> {
    debug!(
        "Verifying attribute {}={} on {}",
        attribute, expected_value, locator
    );

    let actual = driver.get_attribute(locator, attribute).await?;
    let matches = actual.as_deref() == Some(expected_value);

    if matches {
        info!("Attribute verification passed for {}", locator);
    } else {
        info!(
            "Attribute verification failed for {}: expected '{}', got {:?}",
            locator, expected_value, actual
        );
    }

    Ok(matches)
}
