//! Browser bindings: `localStorage`, the live DOM, and page-ready wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that talks to `web-sys`. It builds the
//! controller from the page (config JSON, storage, document), runs
//! initialization once the DOM is ready, and exposes `toggleTheme` both as
//! a wasm export and on `window` for inline handlers.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::{CONFIG_ELEMENT_ID, ThemeConfig};
use crate::controller::ThemeController;
use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::registry;
use crate::store::PreferenceStore;

const GLOBAL_TOGGLE: &str = "toggleTheme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`, when the browser grants it.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            _ => None,
        };
        if storage.is_none() {
            log::warn!("theme: localStorage unavailable, preference will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref().map(|s| s.get_item(key)) {
            Some(Ok(value)) => value,
            _ => None,
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| ThemeError::StorageWrite { key: key.to_owned(), detail: js_detail(&err) })
    }
}

/// The live page document.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl ThemeDocument for WebDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element().and_then(|root| root.get_attribute(name))
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self.document.document_element().ok_or(ThemeError::MissingRoot)?;
        root.set_attribute(name, value)
            .map_err(|err| ThemeError::Dom { op: "setAttribute", detail: js_detail(&err) })
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_element_text(&self, id: &str, text: &str) -> Result<bool, ThemeError> {
        let Some(el) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        el.set_text_content(Some(text));
        Ok(true)
    }

    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> Result<bool, ThemeError> {
        let Some(el) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        el.set_attribute(name, value)
            .map_err(|err| ThemeError::Dom { op: "setAttribute", detail: js_detail(&err) })?;
        Ok(true)
    }

    fn prefers_dark(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        matches!(window.match_media(DARK_SCHEME_QUERY), Ok(Some(mq)) if mq.matches())
    }
}

/// Module entry point: set up logging, then initialize on page-ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logger();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("theme: no document, controller disabled");
        return;
    };

    expose_global(&window);

    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(initialize) as Box<dyn FnMut()>);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
            log::warn!("theme: could not wait for DOMContentLoaded: {}", js_detail(&err));
        }
        // Lives for the page.
        on_ready.forget();
    } else {
        initialize();
    }
}

/// Toggle the page theme. Exported to JavaScript as `toggleTheme`.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    if registry::toggle().is_none() {
        log::debug!("theme: toggle requested before initialization");
    }
}

fn init_logger() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("theme: logger already installed");
    }
}

fn initialize() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = load_config(&document);
    let toggle_id = config.ids.toggle.clone();

    let controller = Rc::new(ThemeController::new(LocalStore::new(), WebDocument::new(document.clone()), config));
    let theme = controller.init();
    let has_toggle = controller.has_toggle_control();
    registry::install(controller);
    log::info!("theme: initialized with {theme}");

    if !has_toggle {
        return;
    }
    let Some(toggle) = document.get_element_by_id(&toggle_id) else {
        return;
    };
    let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| toggle_theme()) as Box<dyn FnMut(_)>);
    if let Err(err) = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("theme: could not attach toggle handler: {}", js_detail(&err));
    }
    on_click.forget();
}

/// Read overrides from `<script id="theme-config" type="application/json">`.
fn load_config(document: &web_sys::Document) -> ThemeConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return ThemeConfig::default();
    };
    match ThemeConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("theme: {err}; using defaults");
            ThemeConfig::default()
        }
    }
}

fn expose_global(window: &web_sys::Window) {
    let global = Closure::wrap(Box::new(toggle_theme) as Box<dyn FnMut()>);
    if let Err(err) = js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_TOGGLE), global.as_ref()) {
        log::warn!("theme: could not expose window.{GLOBAL_TOGGLE}: {}", js_detail(&err));
    }
    global.forget();
}

fn js_detail(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
