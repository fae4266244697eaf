//! Display theme preference tests.

use actix_web::cookie::SameSite;
use actix_web::test::TestRequest;
use cocktail_maker::handlers::pages::return_path;
use cocktail_maker::theme::{self, Theme, THEME_COOKIE};

#[test]
fn test_parse_recognises_stored_values() {
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse("system"), Theme::System);
}

#[test]
fn test_parse_falls_back_to_system_on_garbage() {
    assert_eq!(Theme::parse(""), Theme::System);
    assert_eq!(Theme::parse("DARK"), Theme::System);
    assert_eq!(Theme::parse("midnight"), Theme::System);
}

#[test]
fn test_toggle_cycles_system_light_dark() {
    assert_eq!(Theme::System.next(), Theme::Light);
    assert_eq!(Theme::Light.next(), Theme::Dark);
    assert_eq!(Theme::Dark.next(), Theme::System);
}

#[test]
fn test_three_toggles_return_to_start() {
    let start = Theme::Light;
    assert_eq!(start.next().next().next(), start);
}

#[test]
fn test_request_without_cookie_uses_system_default() {
    let req = TestRequest::default().to_http_request();
    assert_eq!(theme::current(&req), Theme::System);
}

#[test]
fn test_request_with_cookie_uses_persisted_value() {
    let req = TestRequest::default()
        .cookie(theme::cookie(Theme::Dark))
        .to_http_request();
    assert_eq!(theme::current(&req), Theme::Dark);
}

#[test]
fn test_toggle_returns_to_the_referring_page_path() {
    assert_eq!(return_path(Some("http://localhost:8080/guide")), "/guide");
    assert_eq!(
        return_path(Some("http://localhost:8080/register/spirits?draft=1")),
        "/register/spirits?draft=1"
    );
    assert_eq!(return_path(Some("/dashboard")), "/dashboard");
}

#[test]
fn test_toggle_never_redirects_off_site() {
    // Absolute URLs are reduced to their path, foreign hosts included
    assert_eq!(return_path(Some("https://evil.example/phish")), "/phish");
    // Scheme-relative and malformed values fall back to home
    assert_eq!(return_path(Some("//evil.example")), "/");
    assert_eq!(return_path(Some("https://")), "/");
    assert_eq!(return_path(None), "/");
}

#[test]
fn test_preference_cookie_is_site_wide_and_long_lived() {
    let cookie = theme::cookie(Theme::Light);
    assert_eq!(cookie.name(), THEME_COOKIE);
    assert_eq!(cookie.value(), "light");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert!(cookie.max_age().is_some());
}
