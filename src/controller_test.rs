use super::*;
use crate::document::MemoryDocument;
use crate::store::MemoryStore;

// =============================================================
// Helpers
// =============================================================

const ALL_IDS: &[&str] = &["theme-icon", "theme-text", "theme-toggle"];

fn controller(store: MemoryStore, doc: MemoryDocument) -> ThemeController<MemoryStore, MemoryDocument> {
    ThemeController::new(store, doc, ThemeConfig::default())
}

fn full_page(stored: Option<&str>) -> ThemeController<MemoryStore, MemoryDocument> {
    let store = match stored {
        Some(value) => MemoryStore::with_entry("theme", value),
        None => MemoryStore::new(),
    };
    controller(store, MemoryDocument::with_elements(ALL_IDS))
}

/// Attribute, stored value, icon, text, aria-label.
type Snapshot = (Option<String>, Option<String>, Option<String>, Option<String>, Option<String>);

fn snapshot(c: &ThemeController<MemoryStore, MemoryDocument>) -> Snapshot {
    let doc = c.document();
    (
        doc.root_attribute("data-theme"),
        c.store().get("theme"),
        doc.text("theme-icon"),
        doc.text("theme-text"),
        doc.element_attribute("theme-toggle", "aria-label"),
    )
}

fn expected(attr: &str, stored: &str, icon: &str, text: &str, label: &str) -> Snapshot {
    (
        Some(attr.to_owned()),
        Some(stored.to_owned()),
        Some(icon.to_owned()),
        Some(text.to_owned()),
        Some(label.to_owned()),
    )
}

// =============================================================
// get_theme
// =============================================================

#[test]
fn get_theme_is_dark_only_when_dark_is_stored() {
    assert_eq!(full_page(None).get_theme(), Theme::Light);
    assert_eq!(full_page(Some("light")).get_theme(), Theme::Light);
    assert_eq!(full_page(Some("dark")).get_theme(), Theme::Dark);
    assert_eq!(full_page(Some("garbage")).get_theme(), Theme::Light);
    assert_eq!(full_page(Some("")).get_theme(), Theme::Light);
}

#[test]
fn get_theme_has_no_side_effects() {
    let c = full_page(None);
    assert_eq!(c.get_theme(), Theme::Light);
    assert!(c.store().is_empty());
    assert_eq!(c.document().root_attribute("data-theme"), None);
}

#[test]
fn get_theme_ignores_system_preference_by_default() {
    let c = controller(MemoryStore::new(), MemoryDocument::new().preferring_dark());
    assert_eq!(c.get_theme(), Theme::Light);
}

#[test]
fn get_theme_follows_system_when_enabled_and_nothing_stored() {
    let config = ThemeConfig { follow_system: true, ..ThemeConfig::default() };
    let c = ThemeController::new(MemoryStore::new(), MemoryDocument::new().preferring_dark(), config.clone());
    assert_eq!(c.get_theme(), Theme::Dark);

    let stored = ThemeController::new(
        MemoryStore::with_entry("theme", "light"),
        MemoryDocument::new().preferring_dark(),
        config,
    );
    assert_eq!(stored.get_theme(), Theme::Light);
}

// =============================================================
// set_theme / update_toggle_button
// =============================================================

#[test]
fn set_theme_dark_updates_attribute_storage_and_control() {
    let c = full_page(None);
    c.set_theme(Theme::Dark);
    assert_eq!(
        snapshot(&c),
        expected("dark", "dark", "☀️", "Mode clair", "Passer en mode clair")
    );
}

#[test]
fn set_theme_is_idempotent() {
    let c = full_page(None);
    c.set_theme(Theme::Dark);
    let once = snapshot(&c);
    c.set_theme(Theme::Dark);
    assert_eq!(snapshot(&c), once);
    assert_eq!(c.store().len(), 1);
}

#[test]
fn update_toggle_button_tolerates_missing_icon() {
    let c = controller(MemoryStore::new(), MemoryDocument::with_elements(&["theme-text", "theme-toggle"]));
    c.update_toggle_button(Theme::Dark);
    assert_eq!(c.document().text("theme-icon"), None);
    assert_eq!(c.document().text("theme-text").as_deref(), Some("Mode clair"));
    assert_eq!(
        c.document().element_attribute("theme-toggle", "aria-label").as_deref(),
        Some("Passer en mode clair")
    );
}

#[test]
fn update_toggle_button_with_no_control_is_a_noop() {
    let c = controller(MemoryStore::new(), MemoryDocument::new());
    c.update_toggle_button(Theme::Light);
    c.set_theme(Theme::Light);
    assert!(!c.has_toggle_control());
    assert_eq!(c.document().root_attribute("data-theme").as_deref(), Some("light"));
}

#[test]
fn label_names_the_theme_switched_to() {
    let c = full_page(None);
    c.update_toggle_button(Theme::Light);
    assert_eq!(
        c.document().element_attribute("theme-toggle", "aria-label").as_deref(),
        Some("Passer en mode sombre")
    );
    assert_eq!(c.document().text("theme-text").as_deref(), Some("Mode sombre"));
    assert_eq!(c.document().text("theme-icon").as_deref(), Some("🌙"));
}

#[test]
fn storage_failure_still_updates_document_and_control() {
    let c = controller(MemoryStore::read_only(), MemoryDocument::with_elements(ALL_IDS));
    c.set_theme(Theme::Dark);
    assert_eq!(c.store().get("theme"), None);
    assert_eq!(c.document().root_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(c.document().text("theme-icon").as_deref(), Some("☀️"));
}

#[test]
fn custom_config_drives_keys_ids_and_labels() {
    let mut config = ThemeConfig::english();
    config.storage_key = "site-theme".into();
    config.attribute = "data-mode".into();
    config.ids.toggle = "mode-btn".into();
    let c = ThemeController::new(MemoryStore::new(), MemoryDocument::with_elements(&["mode-btn"]), config);

    c.set_theme(Theme::Dark);
    assert_eq!(c.store().get("site-theme").as_deref(), Some("dark"));
    assert_eq!(c.document().root_attribute("data-mode").as_deref(), Some("dark"));
    assert_eq!(
        c.document().element_attribute("mode-btn", "aria-label").as_deref(),
        Some("Switch to light mode")
    );
    assert!(c.has_toggle_control());
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_twice_restores_light_and_dark() {
    for start in [Theme::Light, Theme::Dark] {
        let c = full_page(None);
        c.set_theme(start);
        assert_eq!(c.toggle_theme(), start.opposite());
        assert_eq!(c.toggle_theme(), start);
        assert_eq!(c.document().root_attribute("data-theme").as_deref(), Some(start.as_str()));
    }
}

#[test]
fn toggle_from_unset_attribute_goes_dark_then_light() {
    let c = full_page(None);
    assert_eq!(c.toggle_theme(), Theme::Dark);
    assert_eq!(c.toggle_theme(), Theme::Light);
    assert_eq!(c.current_theme(), Theme::Light);
}

#[test]
fn toggle_reads_live_attribute_not_storage() {
    let c = full_page(Some("dark"));
    c.document().set_root_attribute("data-theme", "light").expect("root");
    assert_eq!(c.toggle_theme(), Theme::Dark);
    assert_eq!(c.store().get("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_treats_foreign_attribute_as_light() {
    let c = full_page(None);
    c.document().set_root_attribute("data-theme", "high-contrast").expect("root");
    assert_eq!(c.toggle_theme(), Theme::Dark);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn first_load_without_preference_settles_on_light() {
    let c = full_page(None);
    assert_eq!(c.init(), Theme::Light);
    assert_eq!(
        snapshot(&c),
        expected("light", "light", "🌙", "Mode sombre", "Passer en mode sombre")
    );
}

#[test]
fn load_with_stored_dark_applies_dark() {
    let c = full_page(Some("dark"));
    assert_eq!(c.init(), Theme::Dark);
    let (attr, _, icon, text, label) = snapshot(&c);
    assert_eq!(attr.as_deref(), Some("dark"));
    assert_eq!(icon.as_deref(), Some("☀️"));
    assert_eq!(text.as_deref(), Some("Mode clair"));
    assert_eq!(label.as_deref(), Some("Passer en mode clair"));
}

#[test]
fn load_with_garbage_preference_rewrites_it_as_light() {
    let c = full_page(Some("purple"));
    assert_eq!(c.init(), Theme::Light);
    assert_eq!(c.store().get("theme").as_deref(), Some("light"));
}

#[test]
fn user_toggle_from_light_goes_dark_everywhere() {
    let c = full_page(None);
    c.init();
    c.toggle_theme();
    assert_eq!(
        snapshot(&c),
        expected("dark", "dark", "☀️", "Mode clair", "Passer en mode clair")
    );
}
