//! Server-rendered page tests
//!
//! Drives the axum router in-process and checks the navigation bar each page
//! renders for its own path and auth state.
//!
//! Run with: cargo test --test ssr_pages

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use staybooker_web::api::{router, AppState};
use staybooker_web::config::Config;
use staybooker_web::nav::NavLinks;

fn app_with(config: Config) -> axum::Router {
    router(AppState::new(config))
}

fn app() -> axum::Router {
    app_with(Config::default())
}

async fn get(app: axum::Router, path: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// The opening `<a ...>` tag whose text is `label`.
fn anchor_tag<'a>(html: &'a str, label: &str) -> &'a str {
    let text = html
        .find(&format!(">{}</a>", label))
        .unwrap_or_else(|| panic!("anchor {} not rendered", label));
    let start = html[..text].rfind("<a ").expect("anchor start");
    &html[start..text]
}

#[tokio::test]
async fn status_reports_service() {
    let (status, body) = get(app(), "/status", None).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["service"], "staybooker-web");
    assert!(json["uptime_secs"].is_u64());
}

#[tokio::test]
async fn each_page_marks_its_own_entry_active() {
    for (path, label) in [
        ("/", "Home"),
        ("/hotels", "Hotels"),
        ("/login", "Login/Register"),
    ] {
        let (status, html) = get(app(), path, None).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(
            anchor_tag(&html, label).contains("active-link"),
            "{} should be active on {}",
            label,
            path
        );
        assert_eq!(html.matches("active-link").count(), 1, "{}", path);
    }
}

#[tokio::test]
async fn signed_out_request_gets_login_link() {
    let (_, html) = get(app(), "/hotels", None).await;
    assert!(html.contains("Login/Register"));
    assert!(!html.contains("dropdown-trigger"));
}

#[tokio::test]
async fn session_cookie_switches_to_account_dropdown() {
    let (_, html) = get(app(), "/hotels", Some("session=abc123")).await;
    assert!(html.contains("dropdown-trigger"));
    assert!(!html.contains("Login/Register"));
}

#[tokio::test]
async fn signed_in_page_offers_profile_and_logout_without_script() {
    let (_, html) = get(app(), "/hotels", Some("session=abc")).await;
    assert!(anchor_tag(&html, "Profile").contains(r#"href="/user-profile""#));

    let form_start = html.find("<form").expect("logout form rendered");
    let form = &html[form_start..];
    let form_tag = &form[..form.find('>').unwrap()];
    assert!(form_tag.contains(r#"method="post""#));
    assert!(form_tag.contains(r#"action="/api/users/logout""#));
    assert!(form.contains(">Logout</button>"));
}

#[tokio::test]
async fn logout_form_posts_to_configured_endpoint() {
    let config = Config {
        nav: NavLinks {
            logout_endpoint: "/v2/session/end".to_string(),
            ..NavLinks::default()
        },
        ..Config::default()
    };
    let (_, html) = get(app_with(config), "/", Some("session=abc")).await;
    assert!(html.contains(r#"action="/v2/session/end""#));
}

#[tokio::test]
async fn signed_out_page_has_no_logout_form() {
    let (_, html) = get(app(), "/hotels", None).await;
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn linked_stylesheet_is_served() {
    let (_, html) = get(app(), "/", None).await;
    assert!(html.contains(r#"href="/assets/staybooker.css""#));

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/assets/staybooker.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
}

#[tokio::test]
async fn configured_session_cookie_name_is_used() {
    let config = Config {
        session_cookie: "sb_token".to_string(),
        ..Config::default()
    };
    let (_, html) = get(app_with(config), "/", Some("session=abc123")).await;
    assert!(html.contains("Login/Register"));

    let config = Config {
        session_cookie: "sb_token".to_string(),
        ..Config::default()
    };
    let (_, html) = get(app_with(config), "/", Some("sb_token=xyz")).await;
    assert!(!html.contains("Login/Register"));
}

#[tokio::test]
async fn profile_page_renders_for_signed_in_user() {
    let (status, html) = get(app(), "/user-profile", Some("session=abc123")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Your profile"));
    // The dropdown trigger is never marked active
    assert!(!html.contains("active-link"));
}

#[tokio::test]
async fn flight_link_opens_new_tab() {
    let (_, html) = get(app(), "/", None).await;
    let tag = anchor_tag(&html, "Flight");
    assert!(tag.contains(r#"target="_blank""#));
    assert!(tag.contains(r#"rel="noopener noreferrer""#));
    assert!(!tag.contains("active-link"));
}

#[tokio::test]
async fn nav_links_come_from_config() {
    let config = Config {
        nav: NavLinks {
            health_url: "https://health.example.com/".to_string(),
            weather_url: "https://weather.example.com/".to_string(),
            ..NavLinks::default()
        },
        ..Config::default()
    };
    let (_, html) = get(app_with(config), "/", None).await;
    assert!(anchor_tag(&html, "Health").contains(r#"href="https://health.example.com/""#));
    assert!(anchor_tag(&html, "Weather").contains(r#"href="https://weather.example.com/""#));
}

#[tokio::test]
async fn unknown_page_is_not_routed() {
    let (status, _) = get(app(), "/bookings", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
