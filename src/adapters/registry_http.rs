//! Registry client over HTTP.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::AppError;
use crate::domain::registry::{BaseColorTemplates, Style};
use crate::ports::Registry;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("shade/", env!("CARGO_PKG_VERSION"));

/// Registry served at `<base>/registry/...`.
///
/// One request per call; a 404 means the resource does not exist.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    base_url: Url,
    client: Client,
}

impl HttpRegistry {
    pub fn new(base_url: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Registry {
                url: base_url.to_string(),
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        // Joining against a base without a trailing slash would drop its last segment.
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { base_url, client })
    }

    fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        let url = self.base_url.join(path).map_err(|e| AppError::Registry {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })?;
        tracing::debug!(%url, "Fetching registry resource");

        let response = self.client.get(url.clone()).send().map_err(|e| AppError::Registry {
            url: url.to_string(),
            reason: format!("HTTP request failed: {}", e),
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::Registry {
                url: url.to_string(),
                reason: format!("unexpected status {}", status),
            });
        }

        let body = response.text().map_err(|e| AppError::Registry {
            url: url.to_string(),
            reason: format!("Failed to read response: {}", e),
        })?;
        serde_json::from_str(&body).map(Some).map_err(|e| AppError::Registry {
            url: url.to_string(),
            reason: format!("Failed to parse response: {}", e),
        })
    }
}

impl Registry for HttpRegistry {
    fn styles(&self) -> Result<Vec<Style>, AppError> {
        let path = "registry/styles/index.json";
        self.fetch_json(path)?.ok_or_else(|| AppError::Registry {
            url: format!("{}{}", self.base_url, path),
            reason: "style index not found".to_string(),
        })
    }

    fn base_color(&self, name: &str) -> Result<Option<BaseColorTemplates>, AppError> {
        self.fetch_json(&format!("registry/colors/{}.json", name))
    }
}
