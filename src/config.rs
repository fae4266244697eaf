use actix_web::cookie::Key;

/// Runtime configuration, read once at startup from the environment
/// (a `.env` file is honored via dotenvy).
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Base URL of the catalog backend. All endpoints live under
    /// `{api_base_url}/api/v1`.
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self { bind_addr, api_base_url }
    }
}

/// Session encryption key — load from SESSION_KEY env var for persistent
/// sessions across restarts.
pub fn session_key() -> Key {
    match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
