//! Web front-end for the Cocktail Maker catalog: page routing,
//! session-aware navigation, and registration forms that forward to the
//! backend REST API.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod health;
pub mod templates_structs;
pub mod theme;
