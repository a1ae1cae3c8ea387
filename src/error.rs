//! Host failures surfaced by storage and document backends.
//!
//! None of these reach the page: the controller logs them and carries on,
//! since theme state is cosmetic and best-effort.

/// Error returned by [`crate::store::PreferenceStore`] and
/// [`crate::document::ThemeDocument`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No durable storage is available (private mode, sandboxed iframe, SSR).
    #[error("preference storage is unavailable")]
    StorageUnavailable,
    /// The storage backend rejected a write (quota, security policy).
    #[error("failed to write preference `{key}`: {detail}")]
    StorageWrite { key: String, detail: String },
    /// The document has no root element to carry the theme attribute.
    #[error("document has no root element")]
    MissingRoot,
    /// A DOM call was rejected.
    #[error("dom operation `{op}` failed: {detail}")]
    Dom { op: &'static str, detail: String },
    /// Embedded configuration JSON could not be parsed.
    #[error("invalid theme configuration: {0}")]
    Config(#[from] serde_json::Error),
}
