//! Activity bar accessibility check
//!
//! The activity bar must expose a "Go to Dashboard" button and a sidebar
//! toggle labelled "Collapse sidebar" or "Expand sidebar" depending on the
//! sidebar's current state.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use uxv_browser::{wait_for_unique, PageDriver};
use uxv_core::{CheckReport, Locator, Result, UxError};

use crate::check::{emit, Check, CheckContext};

pub const DASHBOARD_LABEL: &str = "Go to Dashboard";
pub const COLLAPSE_LABEL: &str = "Collapse sidebar";
pub const EXPAND_LABEL: &str = "Expand sidebar";

/// First render of the app can be slow (bundle load)
pub const DASHBOARD_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const TOGGLE_TIMEOUT: Duration = Duration::from_millis(2_000);

pub struct ActivityBarCheck;

#[async_trait]
impl Check for ActivityBarCheck {
    fn name(&self) -> &'static str {
        "activity-bar"
    }

    fn screenshot_file(&self) -> &'static str {
        "activity_bar.png"
    }

    async fn verify(
        &self,
        page: &dyn PageDriver,
        ctx: &CheckContext,
        report: &mut CheckReport,
    ) -> Result<()> {
        wait_for_unique(page, &Locator::button(DASHBOARD_LABEL), DASHBOARD_TIMEOUT).await?;

        let collapse = Locator::button(COLLAPSE_LABEL);
        let expand = Locator::button(EXPAND_LABEL);

        // Collapse is expected on a fresh load; Expand when the sidebar starts collapsed
        let (toggle, other) = if currently_visible(page, &collapse).await {
            (collapse, expand)
        } else {
            (expand, collapse)
        };
        debug!("Sidebar toggle: {}", toggle);
        wait_for_unique(page, &toggle, TOGGLE_TIMEOUT).await?;

        if currently_visible(page, &other).await {
            let message = format!("Both {} and {} are visible", toggle, other);
            if ctx.strict {
                return Err(UxError::Assertion(message));
            }
            warn!("{}", message);
            report.note(message);
        }

        emit(report, "Found Dashboard and Collapse buttons with correct ARIA labels.");
        Ok(())
    }
}

/// One-shot visibility check; a driver error reads as "not visible"
async fn currently_visible(page: &dyn PageDriver, locator: &Locator) -> bool {
    match page.is_visible(locator).await {
        Ok(visible) => visible,
        Err(e) => {
            debug!("Visibility check for {} failed: {}", locator, e);
            false
        }
    }
}
