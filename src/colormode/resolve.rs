//! Cookie-header color-mode resolution.
//!
//! DESIGN
//! ======
//! `resolve` is a pure function of the raw `Cookie` header and the configured
//! default: no environment probing, no global state, no I/O. Both callers
//! (page render and JSON API) pass whichever header their request carried.
//!
//! The effective header uses copy-on-extend semantics: when a default is
//! established the synthesized pair goes into a fresh string and the input is
//! never modified, so callers can still forward the original header.

use super::{COLOR_MODE_COOKIE, ColorMode};

/// Outcome of resolving a color mode from a `Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved preference; `None` when the cookie is absent and no default
    /// is configured.
    pub mode: Option<ColorMode>,
    /// The header with the default pair appended when one was established,
    /// otherwise the input header unchanged (absent input becomes `""`).
    pub header: String,
    /// True when the configured default had to be applied because no valid
    /// preference was present in the header.
    pub established: bool,
}

/// Resolve the color-mode preference carried by `header`, falling back to
/// `default` when the cookie is missing or carries an unrecognized value.
///
/// Matching is exact and delimiter-bounded: pairs are split on `;` and
/// whitespace and the key must equal [`COLOR_MODE_COOKIE`] in full, so a
/// longer key that merely contains it as a substring never matches.
#[must_use]
pub fn resolve(header: Option<&str>, default: Option<ColorMode>) -> Resolution {
    let header = header.unwrap_or_default();

    if let Some(mode) = find_mode(header) {
        return Resolution { mode: Some(mode), header: header.to_owned(), established: false };
    }

    let Some(default) = default else {
        return Resolution { mode: None, header: header.to_owned(), established: false };
    };

    let pair = format!("{COLOR_MODE_COOKIE}={default}");
    let header = if header.is_empty() { pair } else { format!("{header} {pair}") };
    Resolution { mode: Some(default), header, established: true }
}

/// Scan the pair list for the first occurrence of the color-mode key with a
/// recognized value. Occurrences with unrecognized values are skipped, so a
/// header that already had a default appended past a malformed pair resolves
/// without appending again.
fn find_mode(header: &str) -> Option<ColorMode> {
    header
        .split(';')
        .flat_map(str::split_whitespace)
        .filter_map(|token| token.split_once('='))
        .filter(|(key, _)| *key == COLOR_MODE_COOKIE)
        .find_map(|(_, value)| ColorMode::parse(value))
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
