//! The check abstraction and its run context

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;
use uxv_browser::PageDriver;
use uxv_core::{CheckReport, Result, UxvConfig};

use crate::activity_bar::ActivityBarCheck;
use crate::spotlight::SpotlightCheck;

/// Settings every check run reads
#[derive(Debug, Clone, PartialEq)]
pub struct CheckContext {
    /// Application root to navigate to
    pub base_url: String,
    /// Directory for success screenshots
    pub output_dir: PathBuf,
    /// Shared failure screenshot path
    pub error_screenshot: PathBuf,
    /// Observational checks fail the run instead of only logging
    pub strict: bool,
}

impl From<&UxvConfig> for CheckContext {
    fn from(config: &UxvConfig) -> Self {
        Self {
            base_url: config.target.base_url.clone(),
            output_dir: config.checks.output_dir.clone(),
            error_screenshot: config.error_screenshot_path(),
            strict: config.checks.strict,
        }
    }
}

/// A one-shot verification routine run against an already navigated page
#[async_trait]
pub trait Check: Send + Sync {
    /// Stable name used in reports and on the command line
    fn name(&self) -> &'static str;

    /// File name of the success screenshot inside the output directory
    fn screenshot_file(&self) -> &'static str;

    /// Run the wait-gated steps; any error fails the check
    async fn verify(
        &self,
        page: &dyn PageDriver,
        ctx: &CheckContext,
        report: &mut CheckReport,
    ) -> Result<()>;
}

/// The checks this crate ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    ActivityBar,
    Spotlight,
}

impl CheckKind {
    /// Every check, in run order
    pub fn all() -> [CheckKind; 2] {
        [CheckKind::ActivityBar, CheckKind::Spotlight]
    }

    pub fn check(self) -> Box<dyn Check> {
        match self {
            Self::ActivityBar => Box::new(ActivityBarCheck),
            Self::Spotlight => Box::new(SpotlightCheck),
        }
    }
}

/// Log a progress line and keep it in the report
pub(crate) fn emit(report: &mut CheckReport, line: impl Into<String>) {
    let line = line.into();
    info!("{}", line);
    report.note(line);
}
