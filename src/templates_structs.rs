//! Template context structures for the Askama templates.

use actix_session::Session;
use actix_web::HttpRequest;
use askama::Template;

use crate::auth::session::{does_session_exist, get_user_id, take_flash};
use crate::health::HealthState;
use crate::theme;

/// Common context shared by all pages: session presence, flash message,
/// theme, backend liveness, and the active path for nav highlighting.
pub struct PageContext {
    pub signed_in: bool,
    /// Empty when anonymous.
    pub user_id: String,
    pub flash: Option<String>,
    pub theme: String,
    pub backend_status: &'static str,
    pub current_path: String,
}

impl PageContext {
    pub fn build(
        req: &HttpRequest,
        session: &Session,
        health: &HealthState,
        current_path: &str,
    ) -> Self {
        Self {
            signed_in: does_session_exist(session),
            user_id: get_user_id(session).unwrap_or_default(),
            flash: take_flash(session),
            theme: theme::current(req).as_str().to_string(),
            backend_status: health.get().as_str(),
            current_path: current_path.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
}

pub struct GuideTip {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Recipe {
    pub name: &'static str,
    pub difficulty: &'static str,
    pub time: &'static str,
    pub ingredients: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "guide.html")]
pub struct GuideTemplate {
    pub ctx: PageContext,
    pub tips: Vec<GuideTip>,
    pub recipes: Vec<Recipe>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub spirit_name: &'static str,
    pub spirit_json: Option<String>,
    pub error: Option<String>,
}

/// One rendered checkbox of a multi-select field.
pub struct CheckboxOption {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

/// Render model for one form field, derived from the schema entry and
/// the draft's current state.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: &'static str,
    pub required: bool,
    pub value: String,
    pub accept: &'static str,
    pub errors: Vec<String>,
    pub options: Vec<CheckboxOption>,
    pub options_error: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub action: &'static str,
    pub fields: Vec<FieldView>,
    pub form_error: Option<String>,
}
