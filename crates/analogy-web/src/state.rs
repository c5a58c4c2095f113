//! Application state.

use analogy_core::config::ProxyConfig;
use analogy_core::prompt::SamplingParams;
use analogy_core::provider::CompletionProvider;
use analogy_core::AnalogyResult;
use std::sync::Arc;

/// State shared across handlers. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider credential is configured.
    pub provider: Option<Arc<dyn CompletionProvider>>,
    pub sampling: SamplingParams,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, sampling: SamplingParams) -> Self {
        Self { provider, sampling }
    }

    pub fn from_config(config: &ProxyConfig) -> AnalogyResult<Self> {
        Ok(Self::new(config.provider()?, config.sampling))
    }
}
