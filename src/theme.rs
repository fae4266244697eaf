//! Display theme preference: process-wide per browser, persisted in a
//! cookie. Init reads the persisted value or falls back to the system
//! default; every change writes the cookie back.

use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite, time::Duration};

pub const THEME_COOKIE: &str = "cocktail-maker-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown or missing values fall back to the system default.
    pub fn parse(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// Toggle cycle: system -> light -> dark -> system.
    pub fn next(self) -> Theme {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }
}

/// Read the persisted preference from the request.
pub fn current(req: &HttpRequest) -> Theme {
    req.cookie(THEME_COOKIE)
        .map(|c| Theme::parse(c.value()))
        .unwrap_or(Theme::System)
}

/// Build the persistent preference cookie for a (changed) theme.
pub fn cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build(THEME_COOKIE, theme.as_str())
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .finish()
}
