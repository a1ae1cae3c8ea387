//! The two visual themes a page can be rendered in.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default theme when nothing usable is stored.
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal value written to storage and to the document attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value, returning `None` for anything
    /// other than the exact literals `light` and `dark`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolve a possibly-absent stored value. Absent, empty and
    /// unrecognized values all resolve to [`Theme::Light`].
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Resolve the live document attribute. Only `dark` counts as dark;
    /// a missing or foreign value is treated as light.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        if raw == Some("dark") { Self::Dark } else { Self::Light }
    }

    /// The theme a toggle switches to.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
