//! Browser lifecycle management using Chrome DevTools Protocol

use crate::driver::PageDriver;
use crate::error::{BrowserError, Result};
use crate::screenshot::write_png;
use async_trait::async_trait;
use base64::Engine;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uxv_core::{BrowserSettings, Locator, ScreenshotArtifact};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Driver default timeout in seconds (navigation and element lookups)
    pub timeout_seconds: u64,
    /// Chrome/Chromium binary, auto-detected when None
    pub chrome_path: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::from(&BrowserSettings::default())
    }
}

impl From<&BrowserSettings> for BrowserConfig {
    fn from(settings: &BrowserSettings) -> Self {
        Self {
            headless: settings.headless,
            window_width: settings.window_width,
            window_height: settings.window_height,
            timeout_seconds: settings.navigation_timeout_secs,
            chrome_path: settings.chrome_path.clone(),
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// Dropping the session terminates the browser process.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
}

#[derive(Debug, Deserialize)]
struct AttributeReading {
    found: bool,
    value: Option<String>,
}

impl BrowserSession {
    /// Launch a new headless browser instance
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .path(config.chrome_path.clone())
            .build()
            .map_err(|e| BrowserError::Browser(format!("Invalid launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::Browser(format!("Failed to create tab: {}", e)))?;
        tab.set_default_timeout(Duration::from_secs(config.timeout_seconds));

        info!("Browser launched successfully");

        Ok(Self { browser, tab })
    }

    /// Execute JavaScript in the page context
    ///
    /// # Returns
    /// JSON result from JavaScript execution (`Null` for non-primitive results)
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| BrowserError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// CSS size of the whole document, not just the viewport
    fn content_size(&self) -> Result<(f64, f64)> {
        let metrics = self
            .tab
            .call_method(Page::GetLayoutMetrics(None))
            .map_err(|e| BrowserError::Screenshot(format!("No layout metrics: {}", e)))?;
        let size = metrics.css_content_size;
        Ok((size.width, size.height))
    }
}

#[async_trait]
impl PageDriver for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| BrowserError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| BrowserError::Navigation {
                url: url.to_string(),
                message: format!("navigation did not complete: {}", e),
            })?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    async fn is_visible(&self, locator: &Locator) -> Result<bool> {
        let result = self.evaluate_script(&visibility_script(locator)).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    async fn count(&self, locator: &Locator) -> Result<usize> {
        let result = self.evaluate_script(&count_script(locator)).await?;
        Ok(result.as_f64().map(|n| n as usize).unwrap_or(0))
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        debug!("Clicking {}", locator);

        let not_found = || BrowserError::ElementNotFound {
            selector: locator.to_string(),
        };
        let elements = self
            .tab
            .find_elements(&locator.to_css())
            .map_err(|_e| not_found())?;
        let element = elements.get(locator.index).ok_or_else(not_found)?;

        element
            .click()
            .map_err(|e| BrowserError::Browser(format!("Click on {} failed: {}", locator, e)))?;
        Ok(())
    }

    async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
        debug!("Filling {} with {:?}", locator, text);

        let filled = self.evaluate_script(&fill_script(locator, text)).await?;
        if filled.as_bool() != Some(true) {
            return Err(BrowserError::ElementNotFound {
                selector: locator.to_string(),
            });
        }
        Ok(())
    }

    async fn get_attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        let raw = self.evaluate_script(&attribute_script(locator, name)).await?;
        let reading: AttributeReading = serde_json::from_str(raw.as_str().unwrap_or("{}"))?;

        if !reading.found {
            return Err(BrowserError::ElementNotFound {
                selector: locator.to_string(),
            });
        }
        Ok(reading.value)
    }

    async fn screenshot(&self, path: &Path) -> Result<ScreenshotArtifact> {
        debug!("Capturing full page screenshot to {}", path.display());

        let (width, height) = self.content_size()?;
        let encoded = self
            .tab
            .call_method(Page::CaptureScreenshot {
                format: Some(Page::CaptureScreenshotFormatOption::Png),
                quality: None,
                clip: full_page_clip(width, height),
                from_surface: Some(true),
                capture_beyond_viewport: Some(true),
                optimize_for_speed: None,
            })
            .map_err(|e| BrowserError::Screenshot(format!("CDP capture failed: {}", e)))?
            .data;
        let data = base64::prelude::BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| BrowserError::Screenshot(format!("Invalid capture payload: {}", e)))?;

        write_png(path, &data).await
    }

    async fn close(&self) -> Result<()> {
        info!("Closing browser session");
        self.tab
            .close(true)
            .map_err(|e| BrowserError::Browser(format!("Failed to close tab: {}", e)))?;
        // The browser process itself goes away when the session is dropped
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}

/// Clip covering the whole document (None for an empty page: viewport capture)
fn full_page_clip(width: f64, height: f64) -> Option<Page::Viewport> {
    if width < 1.0 || height < 1.0 {
        return None;
    }
    Some(Page::Viewport {
        x: 0.0,
        y: 0.0,
        width: width.ceil(),
        height: height.ceil(),
        scale: 1.0,
    })
}

/// Encode a Rust string as a JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Expression resolving to the locator's element (or `undefined`)
fn element_expr(locator: &Locator) -> String {
    format!(
        "document.querySelectorAll({})[{}]",
        js_string(&locator.to_css()),
        locator.index
    )
}

fn visibility_script(locator: &Locator) -> String {
    format!(
        r#"(() => {{
            const el = {};
            if (!el) {{ return false; }}
            const style = window.getComputedStyle(el);
            if (style.visibility === 'hidden' || style.display === 'none') {{ return false; }}
            const rect = el.getBoundingClientRect();
            return rect.width > 0 && rect.height > 0;
        }})()"#,
        element_expr(locator)
    )
}

fn count_script(locator: &Locator) -> String {
    format!(
        "document.querySelectorAll({}).length",
        js_string(&locator.to_css())
    )
}

// Goes through the prototype setter so framework-controlled inputs see the change
fn fill_script(locator: &Locator, text: &str) -> String {
    format!(
        r#"(() => {{
            const el = {};
            if (!el) {{ return false; }}
            el.focus();
            const proto = el instanceof HTMLTextAreaElement
                ? HTMLTextAreaElement.prototype
                : HTMLInputElement.prototype;
            Object.getOwnPropertyDescriptor(proto, 'value').set.call(el, {});
            el.dispatchEvent(new Event('input', {{ bubbles: true }}));
            el.dispatchEvent(new Event('change', {{ bubbles: true }}));
            return true;
        }})()"#,
        element_expr(locator),
        js_string(text)
    )
}

fn attribute_script(locator: &Locator, name: &str) -> String {
    format!(
        r#"(() => {{
            const el = {};
            if (!el) {{ return JSON.stringify({{ found: false, value: null }}); }}
            return JSON.stringify({{ found: true, value: el.getAttribute({}) }});
        }})()"#,
        element_expr(locator),
        js_string(name)
    )
}
