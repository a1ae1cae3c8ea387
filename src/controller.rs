//! Theme state synchronization.
//!
//! Keeps three things consistent: the persisted preference, the root
//! element's theme attribute, and the toggle control (icon, text,
//! aria-label). Every operation runs to completion synchronously, so no
//! partially applied state is ever observable between event dispatches.
//!
//! TRADE-OFFS
//! ==========
//! `toggle_theme` reads the live attribute rather than storage or the last
//! value passed to `set_theme`. If other code edits the attribute directly,
//! the next toggle follows the attribute; the `set_theme` it performs then
//! brings storage and the control back in line.

use crate::config::ThemeConfig;
use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

const ARIA_LABEL: &str = "aria-label";

/// Owns the mapping between preference, document attribute and toggle UI.
pub struct ThemeController<S, D> {
    store: S,
    document: D,
    config: ThemeConfig,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeController<S, D> {
    #[must_use]
    pub fn new(store: S, document: D, config: ThemeConfig) -> Self {
        Self { store, document, config }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// The persisted preference, or the default when nothing usable is stored.
    ///
    /// With `follow_system` enabled the system color scheme replaces the
    /// `light` default. Never writes anything.
    #[must_use]
    pub fn get_theme(&self) -> Theme {
        let stored = self.store.get(&self.config.storage_key);
        match stored.as_deref().and_then(Theme::parse) {
            Some(theme) => theme,
            None if self.config.follow_system && self.document.prefers_dark() => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// The theme the document currently displays, read from its attribute.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        Theme::from_attribute(self.document.root_attribute(&self.config.attribute).as_deref())
    }

    /// Apply `theme` to the document, persist it, and refresh the toggle control.
    pub fn set_theme(&self, theme: Theme) {
        if let Err(err) = self.document.set_root_attribute(&self.config.attribute, theme.as_str()) {
            log::warn!("theme: could not apply {theme}: {err}");
        }
        if let Err(err) = self.store.set(&self.config.storage_key, theme.as_str()) {
            log::warn!("theme: could not persist {theme}: {err}");
        }
        self.update_toggle_button(theme);
        log::debug!("theme: set to {theme}");
    }

    /// Refresh icon, text and aria-label for `theme`. Elements that are not
    /// in the document are skipped.
    pub fn update_toggle_button(&self, theme: Theme) {
        let labels = self.config.labels(theme);
        let ids = &self.config.ids;
        warn_on_error("icon", self.document.set_element_text(&ids.icon, &labels.icon));
        warn_on_error("text", self.document.set_element_text(&ids.text, &labels.text));
        warn_on_error(
            "aria-label",
            self.document.set_element_attribute(&ids.toggle, ARIA_LABEL, &labels.aria_label),
        );
    }

    /// Switch to the opposite of the displayed theme and return it.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current_theme().opposite();
        self.set_theme(next);
        next
    }

    /// Page-ready initialization: re-apply the stored (or default) theme so
    /// attribute, storage and control agree before any interaction.
    pub fn init(&self) -> Theme {
        let theme = self.get_theme();
        self.set_theme(theme);
        theme
    }

    /// Whether the toggle control is present and should get a click handler.
    #[must_use]
    pub fn has_toggle_control(&self) -> bool {
        self.document.has_element(&self.config.ids.toggle)
    }
}

fn warn_on_error(part: &str, result: Result<bool, ThemeError>) {
    if let Err(err) = result {
        log::warn!("theme: could not update toggle {part}: {err}");
    }
}
