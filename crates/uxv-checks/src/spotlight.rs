//! Spotlight search accessibility check
//!
//! Opens the Spotlight overlay from the activity bar, types a query and
//! verifies the combobox/listbox wiring: a dialog-role backdrop, a
//! combobox input, a `spotlight-results` listbox with option children and
//! the first option marked as the active selection.

use async_trait::async_trait;
use std::time::Duration;
use uxv_browser::{verify_attribute, wait_for_unique, wait_for_visible, PageDriver};
use uxv_core::{CheckReport, Locator, Result, UxError};

use crate::activity_bar::{DASHBOARD_LABEL, DASHBOARD_TIMEOUT};
use crate::check::{emit, Check, CheckContext};

pub const SEARCH_LABEL: &str = "Search";
pub const DIALOG_LABEL: &str = "Close spotlight search";
pub const INPUT_LABEL: &str = "Spotlight Search";
pub const RESULTS_ID: &str = "spotlight-results";
pub const QUERY: &str = "dash";

pub const SEARCH_TIMEOUT: Duration = Duration::from_millis(2_000);
pub const DIALOG_TIMEOUT: Duration = Duration::from_millis(5_000);
pub const INPUT_TIMEOUT: Duration = Duration::from_millis(1_000);
pub const RESULTS_TIMEOUT: Duration = Duration::from_millis(2_000);
pub const OPTION_TIMEOUT: Duration = Duration::from_millis(2_000);

pub struct SpotlightCheck;

fn dialog() -> Locator {
    Locator::role("dialog").on_tag("div").with_name(DIALOG_LABEL)
}

fn input() -> Locator {
    Locator::role("combobox").on_tag("input").with_name(INPUT_LABEL)
}

fn results() -> Locator {
    Locator::role("listbox").with_id(RESULTS_ID)
}

fn options() -> Locator {
    Locator::role("option").on_tag("div")
}

#[async_trait]
impl Check for SpotlightCheck {
    fn name(&self) -> &'static str {
        "spotlight"
    }

    fn screenshot_file(&self) -> &'static str {
        "spotlight.png"
    }

    async fn verify(
        &self,
        page: &dyn PageDriver,
        ctx: &CheckContext,
        report: &mut CheckReport,
    ) -> Result<()> {
        emit(report, "Verifying ActivityBar...");
        wait_for_unique(page, &Locator::button(DASHBOARD_LABEL), DASHBOARD_TIMEOUT).await?;
        emit(report, "ActivityBar accessibility checks passed.");

        emit(report, "Verifying Spotlight...");
        let search = Locator::button(SEARCH_LABEL);
        wait_for_unique(page, &search, SEARCH_TIMEOUT).await?;
        page.click(&search).await?;

        // The backdrop appearing is the signal that the overlay opened
        wait_for_unique(page, &dialog(), DIALOG_TIMEOUT).await?;

        let input = input();
        wait_for_unique(page, &input, INPUT_TIMEOUT).await?;
        page.fill(&input, QUERY).await?;

        wait_for_unique(page, &results(), RESULTS_TIMEOUT).await?;

        // Several options are expected; only the first has to render
        let first = options().first();
        wait_for_visible(page, &first, OPTION_TIMEOUT).await?;

        let count = page.count(&options()).await?;
        emit(report, format!("Found {} results with role='option'.", count));

        if verify_attribute(page, &first, "aria-selected", "true").await? {
            emit(report, "First option is selected (aria-selected=true).");
        } else {
            emit(report, "First option is NOT selected.");
            if ctx.strict {
                return Err(UxError::Assertion(format!(
                    "{} is not marked aria-selected=true after a fresh query",
                    first
                )));
            }
        }

        emit(report, "Spotlight accessibility checks passed.");
        Ok(())
    }
}
