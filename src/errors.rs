use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

/// Request-fatal failures. Backend API problems are deliberately not
/// here: they are rendered inline on the page instead of failing the
/// request.
#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Multipart(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Multipart(e) => write!(f, "Multipart error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Multipart(e) => {
                log::warn!("Rejected multipart body: {e}");
                HttpResponse::BadRequest().body("Bad Request")
            }
            AppError::Template(e) => {
                log::error!("Template error: {e}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
