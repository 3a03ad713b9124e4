//! Element locators
//!
//! A [`Locator`] is a selector plus an optional match index. Every locator
//! renders to a single CSS selector string so any driver that understands
//! `querySelectorAll` can resolve it. Locators hold no element handles and
//! are resolved afresh on every lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector kinds understood by the drivers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selector {
    /// Raw CSS selector
    Css { value: String },
    /// ARIA role selector, optionally narrowed by accessible name, id and tag
    Role {
        role: String,
        name: Option<String>,
        id: Option<String>,
        tag: Option<String>,
    },
}

/// A selector plus the index of the match to act on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    pub selector: Selector,
    /// Which match to use (0 = first)
    #[serde(default)]
    pub index: usize,
}

impl Locator {
    /// Locate by raw CSS selector
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: Selector::Css {
                value: selector.into(),
            },
            index: 0,
        }
    }

    /// Locate by ARIA role
    pub fn role(role: impl Into<String>) -> Self {
        Self {
            selector: Selector::Role {
                role: role.into(),
                name: None,
                id: None,
                tag: None,
            },
            index: 0,
        }
    }

    /// Locate a `button` by its accessible name
    pub fn button(name: impl Into<String>) -> Self {
        Self::labelled("button", name)
    }

    /// Locate an element of `tag` by its `aria-label`
    pub fn labelled(tag: &str, name: impl Into<String>) -> Self {
        Self::css(format!("{}[aria-label={}]", tag, quote(&name.into())))
    }

    /// Narrow a role locator to an accessible name
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        if let Selector::Role { name, .. } = &mut self.selector {
            *name = Some(value.into());
        }
        self
    }

    /// Narrow a role locator to an element id
    pub fn with_id(mut self, value: impl Into<String>) -> Self {
        if let Selector::Role { id, .. } = &mut self.selector {
            *id = Some(value.into());
        }
        self
    }

    /// Narrow a role locator to a tag name
    pub fn on_tag(mut self, value: impl Into<String>) -> Self {
        if let Selector::Role { tag, .. } = &mut self.selector {
            *tag = Some(value.into());
        }
        self
    }

    /// Select the `index`-th match
    pub fn nth(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Select the first match
    pub fn first(self) -> Self {
        self.nth(0)
    }

    /// Render the selector as CSS (the match index is not part of it)
    pub fn to_css(&self) -> String {
        match &self.selector {
            Selector::Css { value } => value.clone(),
            Selector::Role { role, name, id, tag } => {
                let mut css = String::new();
                if let Some(tag) = tag {
                    css.push_str(tag);
                }
                if let Some(id) = id {
                    css.push_str(&format!("[id={}]", quote(id)));
                }
                css.push_str(&format!("[role={}]", quote(role)));
                if let Some(name) = name {
                    css.push_str(&format!("[aria-label={}]", quote(name)));
                }
                css
            }
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index == 0 {
            write!(f, "{}", self.to_css())
        } else {
            write!(f, "{} >> nth={}", self.to_css(), self.index)
        }
    }
}

/// Quote a CSS attribute value
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_locator() {
        let locator = Locator::button("Go to Dashboard");
        assert_eq!(locator.to_css(), r#"button[aria-label="Go to Dashboard"]"#);
        assert_eq!(locator.index, 0);
    }

    #[test]
    fn test_role_locator_with_name_and_tag() {
        let dialog = Locator::role("dialog")
            .on_tag("div")
            .with_name("Close spotlight search");
        assert_eq!(
            dialog.to_css(),
            r#"div[role="dialog"][aria-label="Close spotlight search"]"#
        );

        let input = Locator::role("combobox")
            .on_tag("input")
            .with_name("Spotlight Search");
        assert_eq!(
            input.to_css(),
            r#"input[role="combobox"][aria-label="Spotlight Search"]"#
        );
    }

    #[test]
    fn test_role_locator_with_id() {
        let results = Locator::role("listbox").with_id("spotlight-results");
        assert_eq!(results.to_css(), r#"[id="spotlight-results"][role="listbox"]"#);
    }

    #[test]
    fn test_name_is_escaped() {
        let locator = Locator::button(r#"Say "hi""#);
        assert_eq!(locator.to_css(), r#"button[aria-label="Say \"hi\""]"#);
    }

    #[test]
    fn test_with_name_ignored_for_css() {
        let locator = Locator::css("div.card").with_name("ignored");
        assert_eq!(locator.to_css(), "div.card");
    }

    #[test]
    fn test_nth_display() {
        let options = Locator::role("option").on_tag("div");
        assert_eq!(options.clone().first().to_string(), r#"div[role="option"]"#);
        assert_eq!(
            options.nth(2).to_string(),
            r#"div[role="option"] >> nth=2"#
        );
    }
}
