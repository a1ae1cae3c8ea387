//! Process-wide access to the page's theme service.
//!
//! Markup-level handlers (`onclick="toggleTheme()"`) have no reference to
//! the controller. Startup installs the controller here once; the exported
//! `toggleTheme` entry point and the toggle's click handler look it up.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::ThemeController;
use crate::document::ThemeDocument;
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Narrow interface exposed to code outside the controller's own wiring.
pub trait ThemeService {
    /// The theme currently displayed.
    fn theme(&self) -> Theme;

    fn set_theme(&self, theme: Theme);

    /// Switch to the opposite theme and return it.
    fn toggle_theme(&self) -> Theme;
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeService for ThemeController<S, D> {
    fn theme(&self) -> Theme {
        self.current_theme()
    }

    fn set_theme(&self, theme: Theme) {
        ThemeController::set_theme(self, theme);
    }

    fn toggle_theme(&self) -> Theme {
        ThemeController::toggle_theme(self)
    }
}

thread_local! {
    static SERVICE: RefCell<Option<Rc<dyn ThemeService>>> = const { RefCell::new(None) };
}

/// Install the page's theme service, replacing any previous one.
pub fn install(service: Rc<dyn ThemeService>) {
    let previous = SERVICE.with(|slot| slot.borrow_mut().replace(service));
    if previous.is_some() {
        log::debug!("theme: replaced installed theme service");
    }
}

/// Remove and return the installed service.
pub fn uninstall() -> Option<Rc<dyn ThemeService>> {
    SERVICE.with(|slot| slot.borrow_mut().take())
}

/// The installed service, if startup has run.
#[must_use]
pub fn service() -> Option<Rc<dyn ThemeService>> {
    SERVICE.with(|slot| slot.borrow().clone())
}

/// Toggle through the installed service. A no-op returning `None` before
/// startup has installed one.
pub fn toggle() -> Option<Theme> {
    // The slot borrow is released before calling out, so the service may
    // itself reach back into the registry.
    service().map(|svc| svc.toggle_theme())
}
