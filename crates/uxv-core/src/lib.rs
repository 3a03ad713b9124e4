//! # uxv-core
//!
//! Core types for uxv, a pair of accessibility smoke checks that drive a
//! headless browser against a locally running web application.
//!
//! ## Contents
//!
//! - [`UxError`] / [`Result`]: the error type every crate returns
//! - [`UxvConfig`]: target URL, browser settings and check behaviour
//! - [`Locator`]: selector plus match index, rendered to CSS
//! - [`CheckReport`] / [`ScreenshotArtifact`]: what a check run produced
//! - [`fail_open`]: wrapper for best-effort steps

pub mod config;
mod error;
pub mod fail_open;
pub mod locator;
pub mod report;

pub use config::{BrowserSettings, CheckSettings, TargetConfig, UxvConfig};
pub use error::{Result, UxError};
pub use locator::{Locator, Selector};
pub use report::{all_passed, CheckReport, CheckStatus, ScreenshotArtifact};
