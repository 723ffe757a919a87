//! Color-mode routes — server-rendered page, preference read/write API.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::colormode::{self, COLOR_MODE_COOKIE, ColorMode, Resolution};
use crate::state::AppState;

/// How long an established preference persists client-side.
const COOKIE_MAX_AGE: Duration = Duration::days(365);

// =============================================================================
// RESOLVED-MODE EXTRACTOR
// =============================================================================

/// Color-mode resolution for the current request.
/// Use as a handler parameter; resolution is total, so extraction never rejects.
pub struct ResolvedMode(pub Resolution);

impl<S> FromRequestParts<S> for ResolvedMode
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts.headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
        let config = &AppState::from_ref(state).config;
        Ok(Self(colormode::resolve(raw, config.default_mode)))
    }
}

/// Persistent cookie for an explicit or newly established preference.
/// Not `HttpOnly`: client-side theme scripts read this cookie directly.
fn mode_cookie(mode: ColorMode, secure: bool) -> Cookie<'static> {
    Cookie::build((COLOR_MODE_COOKIE, mode.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(COOKIE_MAX_AGE)
        .build()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /` — server-rendered page carrying the resolved mode on the root element.
///
/// When resolution established the configured default, the response also sets
/// the color-mode cookie so later requests carry an explicit preference and
/// the first paint never flashes the wrong theme.
pub async fn page(State(state): State<AppState>, ResolvedMode(resolution): ResolvedMode) -> Response {
    let html = Html(render_page(resolution.mode));

    if resolution.established {
        if let Some(mode) = resolution.mode {
            tracing::info!(%mode, "established default color mode");
            let jar = CookieJar::new().add(mode_cookie(mode, state.config.cookie_secure));
            return (jar, html).into_response();
        }
    }

    html.into_response()
}

/// `GET /api/colormode` — current resolution as JSON.
pub async fn current(ResolvedMode(resolution): ResolvedMode) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "mode": resolution.mode,
        "established": resolution.established,
    }))
}

#[derive(Deserialize)]
pub struct SetModeRequest {
    mode: ColorMode,
}

/// `POST /api/colormode` — persist an explicit preference via `Set-Cookie`.
/// Unknown mode values are rejected by deserialization before we get here.
pub async fn set(State(state): State<AppState>, Json(req): Json<SetModeRequest>) -> impl IntoResponse {
    let jar = CookieJar::new().add(mode_cookie(req.mode, state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// Render the page shell. The `data-theme` attribute on the root element is
/// what downstream styling keys on; an unset preference omits it entirely.
fn render_page(mode: Option<ColorMode>) -> String {
    let theme_attr = mode.map_or_else(String::new, |m| format!(" data-theme=\"{m}\""));
    let label = mode.map_or("unset", ColorMode::as_str);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\"{theme_attr}>\n\
         <head><meta charset=\"utf-8\"><title>dusk</title></head>\n\
         <body>\n\
         <p>Active color mode: {label}</p>\n\
         </body>\n\
         </html>\n"
    )
}

#[cfg(test)]
#[path = "colormode_test.rs"]
mod tests;
