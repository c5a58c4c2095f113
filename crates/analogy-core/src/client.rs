//! HTTP client for the generation proxy.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AnalogyError, AnalogyResult};
use crate::form::AnalogyService;
use crate::model::GenerationRequest;

/// Default proxy endpoint when running `analogy serve` locally.
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3030/generate-analogy";

/// Calls a running proxy over HTTP.
#[derive(Clone)]
pub struct ProxyClient {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ProxyBody {
    analogy: Option<String>,
    error: Option<String>,
}

impl ProxyClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalogyService for ProxyClient {
    async fn generate(&self, request: &GenerationRequest) -> AnalogyResult<String> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(%status, body = %text, "Response from proxy");

        let body: ProxyBody = serde_json::from_str(&text).map_err(|_| {
            AnalogyError::Proxy(format!("Unexpected response ({})", status))
        })?;

        if !status.is_success() {
            return Err(AnalogyError::Proxy(
                body.error.unwrap_or_else(|| format!("Request failed ({})", status)),
            ));
        }

        body.analogy
            .ok_or_else(|| AnalogyError::Proxy("No analogy received".to_string()))
    }
}
