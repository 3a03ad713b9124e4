//! Shared run skeleton: navigate, verify, screenshot, always clean up

use tracing::{error, info};
use uxv_browser::{BrowserConfig, BrowserSession, PageDriver};
use uxv_core::fail_open::fail_open;
use uxv_core::{CheckReport, CheckStatus, Result, ScreenshotArtifact, UxvConfig};

use crate::check::{Check, CheckContext};

/// Run `check` against an open page and release the page afterwards
///
/// Errors never escape: the first failing step ends the run, its message is
/// recorded, a best-effort screenshot goes to the shared error path and the
/// page is closed on every path.
pub async fn run_check(
    page: &dyn PageDriver,
    check: &dyn Check,
    ctx: &CheckContext,
) -> CheckReport {
    let mut report = CheckReport::begin(check.name());

    match execute(page, check, ctx, &mut report).await {
        Ok(artifact) => {
            report.screenshot = Some(artifact);
            report.status = CheckStatus::Passed;
        }
        Err(e) => {
            let message = e.to_string();
            error!("Error: {}", message);
            report.note(format!("Error: {}", message));
            report.fail(message);
            report.screenshot =
                fail_open("error_screenshot", || page.screenshot(&ctx.error_screenshot)).await;
        }
    }

    fail_open("close_session", || page.close()).await;
    report.finish();
    report
}

async fn execute(
    page: &dyn PageDriver,
    check: &dyn Check,
    ctx: &CheckContext,
    report: &mut CheckReport,
) -> Result<ScreenshotArtifact> {
    page.navigate(&ctx.base_url).await?;
    check.verify(page, ctx, report).await?;
    let path = ctx.output_dir.join(check.screenshot_file());
    page.screenshot(&path).await
}

/// Launch a dedicated browser session, run `check`, and drop the session
///
/// A launch failure is reported as a failed check without a screenshot.
pub async fn launch_and_run(check: &dyn Check, config: &UxvConfig) -> CheckReport {
    let ctx = CheckContext::from(config);
    info!("Running {} against {}", check.name(), ctx.base_url);

    match BrowserSession::launch_with_config(BrowserConfig::from(&config.browser)).await {
        Ok(session) => run_check(&session, check, &ctx).await,
        Err(e) => {
            error!("Error: {}", e);
            let mut report = CheckReport::begin(check.name());
            report.note(format!("Error: {}", e));
            report.fail(e.to_string());
            report.finish();
            report
        }
    }
}
