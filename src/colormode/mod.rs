//! Color-mode preference model.
//!
//! ARCHITECTURE
//! ============
//! The preference is a binary dark/light value carried in a single cookie.
//! Resolution from the raw `Cookie` header lives in [`resolve`]; this module
//! holds the value type shared by the resolver, config, and routes.

pub mod resolve;

pub use resolve::{Resolution, resolve};

use serde::{Deserialize, Serialize};

/// Cookie key carrying the client's color-mode preference.
pub const COLOR_MODE_COOKIE: &str = "chakra-ui-color-mode";

/// A recognized color-mode value. Absence of a preference is modeled as
/// `Option<ColorMode>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Dark,
    Light,
}

impl ColorMode {
    /// Cookie/attribute wire form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a cookie value. Anything other than the two exact wire forms is
    /// rejected; callers treat `None` as "no preference present".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
