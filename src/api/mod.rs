//! Thin client for the remote catalog backend. All endpoints live under
//! `{base}/api/v1`; this app keeps no storage of its own.

pub mod catalog;
pub mod metadata;
pub mod submit;

/// The three registrable entity kinds, used both for metadata lookups
/// and for the per-kind submission endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Spirits,
    Liqueur,
    Ingredient,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Spirits => "spirits",
            EntityKind::Liqueur => "liqueur",
            EntityKind::Ingredient => "ingredient",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: format!("{}/api/v1", base_url.trim_end_matches('/')),
        }
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub(crate) fn base(&self) -> &str {
        &self.base
    }
}
