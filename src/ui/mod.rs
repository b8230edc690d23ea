//! Server-side rendered pages.
//!
//! Each page is the static shell with the navigation bar rendered for the
//! request path. Signed-in state comes from the presence of the session
//! cookie; the backend that issues it is responsible for validating it.

mod assets;
mod shell;

pub use assets::{stylesheet_handler, STYLESHEET_CSS};
pub use shell::StaticShell;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::nav::{HOME_PATH, HOTELS_PATH, LOGIN_PATH, PROFILE_PATH};

/// Title and heading for each server-rendered path
fn page_meta(path: &str) -> Option<(&'static str, &'static str)> {
    match path {
        HOME_PATH => Some(("Home", "Find your next stay")),
        HOTELS_PATH => Some(("Hotels", "Hotels")),
        LOGIN_PATH => Some(("Login", "Login or register")),
        PROFILE_PATH => Some(("Profile", "Your profile")),
        _ => None,
    }
}

/// True when the request carries a non-empty cookie named `cookie_name`
pub fn has_session_cookie(headers: &HeaderMap, cookie_name: &str) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name == cookie_name && !value.is_empty())
}

/// Render the shell for `path` into a full HTML document
pub fn render_page(path: &str, is_authenticated: bool, state: &AppState) -> Option<String> {
    let (title, heading) = page_meta(path)?;
    let links = state.config.nav.clone();
    let current_path = path.to_string();

    let html = dioxus::ssr::render_element(rsx! {
        StaticShell {
            title: title.to_string(),
            heading: heading.to_string(),
            current_path,
            is_authenticated,
            links,
        }
    });

    Some(format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html))
}

/// GET /, /hotels, /login, /user-profile
pub async fn page_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let path = uri.path();
    let is_authenticated = has_session_cookie(&headers, &state.config.session_cookie);
    tracing::debug!("Rendering {} (authenticated={})", path, is_authenticated);

    match render_page(path, is_authenticated, &state) {
        Some(html) => (StatusCode::OK, Html(html)),
        None => (
            StatusCode::NOT_FOUND,
            Html("<!DOCTYPE html>\n<html lang=\"en\"><body>Page not found</body></html>".to_string()),
        ),
    }
}
