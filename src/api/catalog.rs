//! Liveness probe and single-entity lookups.

use super::ApiClient;

impl ApiClient {
    /// `GET /health` — true when the backend answered 2xx.
    pub async fn health(&self) -> bool {
        match self.client().get(self.url("/health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                log::debug!("health check failed: {e}");
                false
            }
        }
    }

    /// `GET /spirits/{name}` — lookup by (URL-encoded) display name.
    /// Errors come back as display strings for the inline error state.
    pub async fn find_spirit(&self, name: &str) -> Result<serde_json::Value, String> {
        let mut url = reqwest::Url::parse(self.base()).map_err(|e| e.to_string())?;
        url.path_segments_mut()
            .map_err(|_| "invalid API base URL".to_string())?
            .push("spirits")
            .push(name);

        let resp = self
            .client()
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            return Err(format!("HTTP error! status: {}", resp.status().as_u16()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
}
