//! Theme controller configuration.
//!
//! Defaults reproduce the French deployment (`Mode clair` / `Mode sombre`).
//! A page may override any subset of fields by embedding JSON in a
//! `<script id="theme-config" type="application/json">` element.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_ICON_ID: &str = "theme-icon";
pub const DEFAULT_TEXT_ID: &str = "theme-text";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
/// Id of the optional element carrying JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "theme-config";

/// What the toggle control shows while a given theme is active.
///
/// Text and label describe the theme the user would switch *to*.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleLabels {
    pub icon: String,
    pub text: String,
    pub aria_label: String,
}

impl ToggleLabels {
    fn new(icon: &str, text: &str, aria_label: &str) -> Self {
        Self { icon: icon.to_owned(), text: text.to_owned(), aria_label: aria_label.to_owned() }
    }
}

/// Element ids the controller looks up in the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub icon: String,
    pub text: String,
    pub toggle: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON_ID.to_owned(),
            text: DEFAULT_TEXT_ID.to_owned(),
            toggle: DEFAULT_TOGGLE_ID.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    /// Attribute set on the root element.
    pub attribute: String,
    pub ids: ElementIds,
    /// Shown while the light theme is active.
    pub light: ToggleLabels,
    /// Shown while the dark theme is active.
    pub dark: ToggleLabels,
    /// Fall back to `prefers-color-scheme` when nothing is stored.
    pub follow_system: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            ids: ElementIds::default(),
            light: ToggleLabels::new("🌙", "Mode sombre", "Passer en mode sombre"),
            dark: ToggleLabels::new("☀️", "Mode clair", "Passer en mode clair"),
            follow_system: false,
        }
    }
}

impl ThemeConfig {
    /// Preset with English labels and otherwise default settings.
    #[must_use]
    pub fn english() -> Self {
        Self {
            light: ToggleLabels::new("🌙", "Dark mode", "Switch to dark mode"),
            dark: ToggleLabels::new("☀️", "Light mode", "Switch to light mode"),
            ..Self::default()
        }
    }

    /// Parse JSON overrides on top of the defaults. Missing fields keep
    /// their default value.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Labels for the toggle control while `theme` is active.
    #[must_use]
    pub fn labels(&self, theme: Theme) -> &ToggleLabels {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}
