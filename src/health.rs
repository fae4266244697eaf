//! Background liveness poll of the backend, surfaced in the navigation.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::api::ApiClient;

pub const POLL_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    /// No poll has completed yet.
    Unknown,
    Up,
    Down,
}

impl BackendStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendStatus::Unknown => "unknown",
            BackendStatus::Up => "up",
            BackendStatus::Down => "down",
        }
    }
}

/// Last observed backend status, shared between the poller task and the
/// request handlers.
#[derive(Clone)]
pub struct HealthState(Arc<RwLock<BackendStatus>>);

impl HealthState {
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(BackendStatus::Unknown)))
    }

    pub fn get(&self) -> BackendStatus {
        *self.0.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set(&self, status: BackendStatus) {
        *self.0.write().unwrap_or_else(|e| e.into_inner()) = status;
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Poll `GET /health` every 30 seconds and publish the last observed
/// status for the navigation badge.
pub fn spawn_poller(api: ApiClient, state: HealthState) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(POLL_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let status = if api.health().await {
                BackendStatus::Up
            } else {
                BackendStatus::Down
            };
            if status != state.get() {
                log::info!("Backend liveness changed: {}", status.as_str());
            }
            state.set(status);
        }
    });
}
