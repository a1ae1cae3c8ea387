//! Light/dark theme toggle for web pages, compiled to WebAssembly.
//!
//! The crate keeps three pieces of page state in sync: the theme preference
//! in `localStorage`, the `data-theme` attribute on `<html>`, and the toggle
//! control's icon, text and aria-label. Stylesheets key off the attribute;
//! this crate never touches CSS.
//!
//! Everything except [`web`] is browser-free and tested natively. The
//! `hydrate` feature enables the `web-sys` bindings and the wasm entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `Theme` enum and its parsing rules |
//! | [`config`] | Storage key, attribute, element ids and per-theme labels |
//! | [`error`] | Host failures from storage and DOM backends |
//! | [`store`] | `PreferenceStore` trait and in-memory store |
//! | [`document`] | `ThemeDocument` trait and in-memory document |
//! | [`controller`] | `ThemeController`: get/set/toggle/init |
//! | [`registry`] | Singleton lookup behind the global `toggleTheme` |
//! | `web` | Browser bindings and page-ready wiring (`hydrate` only) |

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod registry;
pub mod store;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;
