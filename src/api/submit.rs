//! Multipart registration submission.

use reqwest::multipart::{Form, Part};

use crate::forms::{Draft, PayloadPart};
use super::{ApiClient, EntityKind};

pub const MSG_NETWORK_ERROR: &str = "네트워크 오류가 발생했습니다. 다시 시도해주세요.";
pub const MSG_UNKNOWN_ERROR: &str = "알 수 없는 오류가 발생했습니다";

/// Outcome of one registration attempt. Produced once per submit, never
/// persisted; presentation decides how to display it.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Success(serde_json::Value),
    Failure(String),
}

/// Classify the backend's reply: 2xx with a JSON body is success; error
/// replies surface the `message` field of their JSON body when present.
pub fn classify_response(status: u16, body: &str) -> SubmissionResult {
    if (200..300).contains(&status) {
        match serde_json::from_str(body) {
            Ok(value) => SubmissionResult::Success(value),
            Err(_) => SubmissionResult::Failure(MSG_NETWORK_ERROR.to_string()),
        }
    } else {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| MSG_UNKNOWN_ERROR.to_string());
        SubmissionResult::Failure(message)
    }
}

impl ApiClient {
    /// POST the draft as multipart form data to the per-kind endpoint.
    /// Transport failures become `Failure` with a generic connectivity
    /// message; this never returns `Err` to the caller.
    pub async fn submit_registration(&self, kind: EntityKind, draft: &Draft) -> SubmissionResult {
        let mut form = Form::new();
        for part in draft.payload_parts() {
            match part {
                PayloadPart::Text { name, value } => {
                    form = form.text(name, value);
                }
                PayloadPart::File { name, image } => {
                    let bytes = match image.read() {
                        Ok(b) => b,
                        Err(e) => {
                            log::error!("failed to read upload '{}': {e}", image.file_name);
                            return SubmissionResult::Failure(MSG_NETWORK_ERROR.to_string());
                        }
                    };
                    let part = Part::bytes(bytes).file_name(image.file_name.clone());
                    // The MIME string came from a parsed content type, so
                    // this only fails on a hand-built draft.
                    let part = match part.mime_str(&image.mime) {
                        Ok(p) => p,
                        Err(e) => {
                            log::error!("invalid MIME '{}' on upload: {e}", image.mime);
                            return SubmissionResult::Failure(MSG_NETWORK_ERROR.to_string());
                        }
                    };
                    form = form.part(name, part);
                }
            }
        }

        let url = self.url(&format!("/{}", kind.as_str()));
        let resp = match self.client().post(&url).multipart(form).send().await {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{} submission failed: {e}", kind.as_str());
                return SubmissionResult::Failure(MSG_NETWORK_ERROR.to_string());
            }
        };

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        classify_response(status, &body)
    }
}
