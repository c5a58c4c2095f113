//! Proxy configuration.
//!
//! Values come from an optional TOML file, then environment variables, then
//! whatever the caller overrides explicitly (CLI flags).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::error::{AnalogyError, AnalogyResult};
use crate::prompt::{SamplingParams, DEFAULT_MODEL};
use crate::provider::{CompletionProvider, OpenAiClient, DEFAULT_OPENAI_URL};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const MODEL_ENV: &str = "ANALOGY_MODEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub sampling: SamplingParams,
    /// Outbound request timeout. Unset means the runtime default (none).
    pub timeout_secs: Option<u64>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            sampling: SamplingParams::default(),
            timeout_secs: None,
        }
    }
}

impl ProxyConfig {
    pub fn from_toml_str(content: &str) -> AnalogyResult<Self> {
        toml::from_str(content).map_err(|e| AnalogyError::Config(e.to_string()))
    }

    /// Load from `path` if given, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> AnalogyResult<Self> {
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading proxy config");
                Self::from_toml_str(&std::fs::read_to_string(path)?)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup such as `std::env::var`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV) {
            self.base_url = url;
        }
        if let Some(model) = lookup(MODEL_ENV) {
            self.model = model;
        }
    }

    /// The credential, if one is set and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Build the provider client. `None` when no credential is configured.
    pub fn provider(&self) -> AnalogyResult<Option<Arc<dyn CompletionProvider>>> {
        let Some(key) = self.api_key() else {
            return Ok(None);
        };
        let client = OpenAiClient::new(
            &self.base_url,
            &self.model,
            key,
            self.timeout_secs.map(Duration::from_secs),
        )?;
        Ok(Some(Arc::new(client)))
    }
}
