//! Application configuration parsed from environment variables.

use crate::colormode::ColorMode;

/// Configuration error raised at startup.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown DEFAULT_COLOR_MODE '{0}' (expected 'dark' or 'light')")]
    UnknownDefaultMode(String),
}

/// Typed startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fallback preference established for clients with no stored cookie.
    /// `None` leaves first-time clients unset.
    pub default_mode: Option<ColorMode>,
    /// Whether the color-mode cookie is written with the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `DEFAULT_COLOR_MODE`: `dark` or `light`; unset or empty means no default
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `DEFAULT_COLOR_MODE` is set to an
    /// unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_mode = parse_default_mode(std::env::var("DEFAULT_COLOR_MODE").ok().as_deref())?;
        let cookie_secure = env_bool("COOKIE_SECURE").unwrap_or(false);
        Ok(Self { default_mode, cookie_secure })
    }
}

fn parse_default_mode(raw: Option<&str>) -> Result<Option<ColorMode>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => ColorMode::parse(value)
            .map(Some)
            .ok_or_else(|| ConfigError::UnknownDefaultMode(value.to_owned())),
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
