//! Check reports and screenshot artifacts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A PNG written to disk during a check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotArtifact {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub captured_at: DateTime<Utc>,
}

/// Outcome of a check run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    #[default]
    Failed,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => f.pad("passed"),
            Self::Failed => f.pad("failed"),
        }
    }
}

/// Everything a single check run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Check name (`activity-bar`, `spotlight`)
    pub check: String,
    pub status: CheckStatus,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// Progress and result lines in the order they were emitted
    pub findings: Vec<String>,
    /// Success screenshot, or the error screenshot on failure
    pub screenshot: Option<ScreenshotArtifact>,
    pub error: Option<String>,
}

impl CheckReport {
    /// Start a report for `check`; it stays failed until marked passed
    pub fn begin(check: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status: CheckStatus::Failed,
            started_at: Utc::now(),
            duration_ms: 0,
            findings: Vec::new(),
            screenshot: None,
            error: None,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    pub fn failed(&self) -> bool {
        !self.passed()
    }

    /// Append a finding line
    pub fn note(&mut self, line: impl Into<String>) {
        self.findings.push(line.into());
    }

    /// Record the terminal error of a run
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = CheckStatus::Failed;
        self.error = Some(message.into());
    }

    /// Stamp the elapsed time since `started_at`
    pub fn finish(&mut self) {
        let elapsed = Utc::now() - self.started_at;
        self.duration_ms = elapsed.num_milliseconds().max(0) as u64;
    }
}

/// True when every report passed
pub fn all_passed(reports: &[CheckReport]) -> bool {
    reports.iter().all(CheckReport::passed)
}
