use actix_web::{HttpResponse, web};

use crate::health::HealthState;

/// JSON status of the last backend liveness poll, for the nav badge.
pub async fn healthz(health: web::Data<HealthState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": health.get().as_str() }))
}
