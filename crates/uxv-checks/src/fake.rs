//! In-memory page used by the check tests
//!
//! Elements are keyed by the exact CSS the checks render, so a typo in a
//! locator shows up as a timeout here just as it would in a real browser.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use uxv_browser::screenshot::write_png;
use uxv_browser::PageDriver;
use uxv_core::{Locator, Result, ScreenshotArtifact, UxError};

pub const DASHBOARD: &str = r#"button[aria-label="Go to Dashboard"]"#;
pub const COLLAPSE: &str = r#"button[aria-label="Collapse sidebar"]"#;
pub const EXPAND: &str = r#"button[aria-label="Expand sidebar"]"#;
pub const SEARCH: &str = r#"button[aria-label="Search"]"#;
pub const DIALOG: &str = r#"div[role="dialog"][aria-label="Close spotlight search"]"#;
pub const INPUT: &str = r#"input[role="combobox"][aria-label="Spotlight Search"]"#;
pub const RESULTS: &str = r#"[id="spotlight-results"][role="listbox"]"#;
pub const OPTIONS: &str = r#"div[role="option"]"#;

/// PNG signature plus a few bytes; enough for `write_png`
fn png_stub() -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(b"uxv");
    data
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub count: usize,
    pub visible: bool,
    /// Becomes visible only this long after the page was created
    pub appear_after: Option<Duration>,
    /// Attributes per match index
    pub attributes: Vec<HashMap<String, String>>,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub elements: HashMap<String, FakeElement>,
    /// Clicking the key reveals the listed selectors
    pub on_click: HashMap<String, Vec<String>>,
    /// Filling the key reveals the listed selectors
    pub on_fill: HashMap<String, Vec<String>>,
    /// Visibility checks on these selectors return a driver error
    pub flaky: HashSet<String>,
    pub navigations: Vec<String>,
    pub clicks: Vec<String>,
    pub fills: Vec<(String, String)>,
    pub screenshots: Vec<PathBuf>,
    pub closed: bool,
    pub fail_navigation: bool,
    pub fail_screenshots: bool,
}

pub struct FakePage {
    pub state: Mutex<FakeState>,
    created: Instant,
}

impl FakePage {
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
            created: Instant::now(),
        }
    }

    /// The application as it renders when everything works
    pub fn healthy_app() -> Self {
        let page = Self::empty();
        page.show(DASHBOARD);
        page.show(COLLAPSE);
        page.show(SEARCH);
        page.hide(DIALOG);
        page.hide(INPUT);
        page.hide(RESULTS);
        page.insert(
            OPTIONS,
            FakeElement {
                count: 3,
                visible: false,
                appear_after: None,
                attributes: vec![
                    HashMap::from([("aria-selected".to_string(), "true".to_string())]),
                    HashMap::from([("aria-selected".to_string(), "false".to_string())]),
                    HashMap::from([("aria-selected".to_string(), "false".to_string())]),
                ],
            },
        );
        page.reveal_on_click(SEARCH, &[DIALOG, INPUT]);
        page.reveal_on_fill(INPUT, &[RESULTS, OPTIONS]);
        page
    }

    pub fn insert(&self, css: &str, element: FakeElement) {
        self.lock().elements.insert(css.to_string(), element);
    }

    pub fn show(&self, css: &str) {
        self.insert(
            css,
            FakeElement {
                count: 1,
                visible: true,
                ..Default::default()
            },
        );
    }

    /// Present in the DOM but not rendered
    pub fn hide(&self, css: &str) {
        self.insert(
            css,
            FakeElement {
                count: 1,
                visible: false,
                ..Default::default()
            },
        );
    }

    pub fn remove(&self, css: &str) {
        self.lock().elements.remove(css);
    }

    pub fn appear_after(&self, css: &str, delay: Duration) {
        if let Some(element) = self.lock().elements.get_mut(css) {
            element.appear_after = Some(delay);
        }
    }

    pub fn set_attribute(&self, css: &str, index: usize, name: &str, value: &str) {
        let mut state = self.lock();
        if let Some(element) = state.elements.get_mut(css) {
            if element.attributes.len() <= index {
                element.attributes.resize(index + 1, HashMap::new());
            }
            element.attributes[index].insert(name.to_string(), value.to_string());
        }
    }

    pub fn make_flaky(&self, css: &str) {
        self.lock().flaky.insert(css.to_string());
    }

    pub fn reveal_on_click(&self, css: &str, targets: &[&str]) {
        self.lock().on_click.insert(
            css.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        );
    }

    pub fn reveal_on_fill(&self, css: &str, targets: &[&str]) {
        self.lock().on_fill.insert(
            css.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        );
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn reveal(state: &mut FakeState, targets: Vec<String>) {
        for target in targets {
            if let Some(element) = state.elements.get_mut(&target) {
                element.visible = true;
            }
        }
    }

    fn require(state: &FakeState, locator: &Locator) -> Result<()> {
        match state.elements.get(&locator.to_css()) {
            Some(element) if element.count > locator.index => Ok(()),
            _ => Err(UxError::ElementNotFound {
                selector: locator.to_string(),
            }),
        }
    }
}

#[async_trait]
impl PageDriver for FakePage {
    async fn navigate(&self, url: &str) -> Result<()> {
        let mut state = self.lock();
        if state.fail_navigation {
            return Err(UxError::Navigation {
                url: url.to_string(),
                message: "net::ERR_CONNECTION_REFUSED".to_string(),
            });
        }
        state.navigations.push(url.to_string());
        Ok(())
    }

    async fn is_visible(&self, locator: &Locator) -> Result<bool> {
        let state = self.lock();
        if state.flaky.contains(&locator.to_css()) {
            return Err(UxError::Browser("Execution context was destroyed".to_string()));
        }
        let visible = state
            .elements
            .get(&locator.to_css())
            .map(|element| {
                element.count > locator.index
                    && element.visible
                    && element
                        .appear_after
                        .map_or(true, |delay| self.created.elapsed() >= delay)
            })
            .unwrap_or(false);
        Ok(visible)
    }

    async fn count(&self, locator: &Locator) -> Result<usize> {
        let state = self.lock();
        Ok(state
            .elements
            .get(&locator.to_css())
            .map_or(0, |element| element.count))
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let mut state = self.lock();
        Self::require(&state, locator)?;
        let css = locator.to_css();
        state.clicks.push(css.clone());
        if let Some(targets) = state.on_click.get(&css).cloned() {
            Self::reveal(&mut state, targets);
        }
        Ok(())
    }

    async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
        let mut state = self.lock();
        Self::require(&state, locator)?;
        let css = locator.to_css();
        state.fills.push((css.clone(), text.to_string()));
        if let Some(targets) = state.on_fill.get(&css).cloned() {
            Self::reveal(&mut state, targets);
        }
        Ok(())
    }

    async fn get_attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        let state = self.lock();
        Self::require(&state, locator)?;
        Ok(state
            .elements
            .get(&locator.to_css())
            .and_then(|element| element.attributes.get(locator.index))
            .and_then(|attrs| attrs.get(name).cloned()))
    }

    async fn screenshot(&self, path: &Path) -> Result<ScreenshotArtifact> {
        {
            let mut state = self.lock();
            if state.fail_screenshots {
                return Err(UxError::Screenshot("target closed".to_string()));
            }
            state.screenshots.push(path.to_path_buf());
        }
        write_png(path, &png_stub()).await
    }

    async fn close(&self) -> Result<()> {
        self.lock().closed = true;
        Ok(())
    }
}
