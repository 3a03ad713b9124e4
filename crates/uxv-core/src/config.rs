//! Configuration management for uxv
//!
//! This module provides the configuration structures for a verification run:
//! the application under test, browser launch settings and check behaviour.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Result, UxError};

/// Relative location of the config file inside a project root
pub const CONFIG_FILE: &str = ".uxv/config.toml";

/// Top-level uxv configuration
///
/// Loaded from `.uxv/config.toml` in the project root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UxvConfig {
    /// Application under test
    #[serde(default)]
    pub target: TargetConfig,

    /// Browser launch settings
    #[serde(default)]
    pub browser: BrowserSettings,

    /// Check behaviour and output locations
    #[serde(default)]
    pub checks: CheckSettings,
}

/// Where the application under test is reachable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Root URL of the running application
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Browser launch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Run in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Driver default timeout, used for navigation
    #[serde(default = "default_navigation_timeout_secs")]
    pub navigation_timeout_secs: u64,

    /// Explicit Chrome/Chromium binary (auto-detected when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<PathBuf>,
}

/// Check behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSettings {
    /// Directory receiving screenshots
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the shared failure screenshot
    #[serde(default = "default_error_screenshot")]
    pub error_screenshot: String,

    /// Turn observational checks into hard assertions
    #[serde(default = "default_strict")]
    pub strict: bool,
}

// Default value providers
fn default_base_url() -> String {
    "http://localhost:3002".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

fn default_navigation_timeout_secs() -> u64 {
    30
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("verification")
}

fn default_error_screenshot() -> String {
    "error.png".to_string()
}

fn default_strict() -> bool {
    true
}

impl UxvConfig {
    /// Load configuration from `.uxv/config.toml` or use defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            UxError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write default configuration to `.uxv/config.toml`
    ///
    /// Returns the path that was written.
    pub fn write_default(root: &Path) -> Result<PathBuf> {
        let config_path = root.join(CONFIG_FILE);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| UxError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Path of the shared failure screenshot
    pub fn error_screenshot_path(&self) -> PathBuf {
        self.checks.output_dir.join(&self.checks.error_screenshot)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            navigation_timeout_secs: default_navigation_timeout_secs(),
            chrome_path: None,
        }
    }
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            error_screenshot: default_error_screenshot(),
            strict: default_strict(),
        }
    }
}
