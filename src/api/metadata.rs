//! Remote-loaded option catalogs (aroma/taste/finish enumerations).

use serde::Deserialize;

use super::{ApiClient, EntityKind};

/// Metadata category names accepted by `GET /metadata/{kind}/{category}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataCategory {
    Aroma,
    Taste,
    Finish,
}

impl MetadataCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataCategory::Aroma => "aroma",
            MetadataCategory::Taste => "taste",
            MetadataCategory::Finish => "finish",
        }
    }
}

/// One selectable option, referenced from multi-select fields by the
/// string form of its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataOption {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize)]
struct MetadataEnvelope {
    status: String,
    #[serde(default)]
    data: Vec<RawOption>,
    #[serde(default)]
    message: String,
}

// id/name are optional here so a partially-malformed payload drops the
// bad entries instead of failing the whole catalog.
#[derive(Deserialize)]
struct RawOption {
    id: Option<i64>,
    name: Option<String>,
}

/// Decode a metadata envelope body. Entries with a null id or name are
/// dropped; a non-`success` status becomes an error with the server's
/// message when it carries one.
pub fn decode_envelope(body: &str) -> Result<Vec<MetadataOption>, String> {
    let env: MetadataEnvelope = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if env.status != "success" {
        let msg = if env.message.is_empty() {
            "Failed to fetch metadata".to_string()
        } else {
            env.message
        };
        return Err(msg);
    }
    Ok(env
        .data
        .into_iter()
        .filter_map(|r| match (r.id, r.name) {
            (Some(id), Some(name)) => Some(MetadataOption { id, name }),
            _ => None,
        })
        .collect())
}

/// Loaded state of one option catalog. Safe to hand to templates even
/// when the backend call failed: the catalog is then empty and `error`
/// carries the inline message.
#[derive(Debug, Clone, Default)]
pub struct OptionsState {
    pub options: Vec<MetadataOption>,
    pub error: Option<String>,
}

impl ApiClient {
    /// `GET /metadata/{kind}/{category}`. Never fails the page build:
    /// HTTP and decode failures come back as an empty catalog plus an
    /// error string.
    pub async fn load_metadata(
        &self,
        kind: EntityKind,
        category: MetadataCategory,
    ) -> OptionsState {
        match self.fetch_metadata(kind, category).await {
            Ok(options) => OptionsState { options, error: None },
            Err(e) => {
                log::warn!(
                    "metadata {}/{} unavailable: {e}",
                    kind.as_str(),
                    category.as_str()
                );
                OptionsState {
                    options: Vec::new(),
                    error: Some("옵션을 불러올 수 없습니다".to_string()),
                }
            }
        }
    }

    async fn fetch_metadata(
        &self,
        kind: EntityKind,
        category: MetadataCategory,
    ) -> Result<Vec<MetadataOption>, String> {
        let url = self.url(&format!("/metadata/{}/{}", kind.as_str(), category.as_str()));
        let resp = self
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            return Err(format!("Failed to fetch metadata: {}", resp.status().as_u16()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        decode_envelope(&body)
    }
}
