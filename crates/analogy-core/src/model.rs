//! Request and result types exchanged between the form and the proxy.

use serde::{Deserialize, Serialize};

use crate::error::{AnalogyError, AnalogyResult};

/// Notice shown when either concept is blank.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter both concepts to compare!";

/// Notice returned by the proxy when a field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Both thing1 and thing2 are required";

/// Two concepts to compare. Both are non-empty once constructed through [`GenerationRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub thing1: String,
    pub thing2: String,
}

impl GenerationRequest {
    /// Build a request from raw form input, trimming both sides.
    pub fn new(thing1: &str, thing2: &str) -> AnalogyResult<Self> {
        let thing1 = thing1.trim();
        let thing2 = thing2.trim();
        if thing1.is_empty() || thing2.is_empty() {
            return Err(AnalogyError::validation(EMPTY_INPUT_NOTICE));
        }
        Ok(Self {
            thing1: thing1.to_string(),
            thing2: thing2.to_string(),
        })
    }
}

/// Body the proxy accepts. Fields are optional so a missing one can be
/// reported as a validation error instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct RawGenerationRequest {
    pub thing1: Option<String>,
    pub thing2: Option<String>,
}

impl RawGenerationRequest {
    /// Require both fields to be present and non-empty. Values are kept verbatim.
    pub fn validate(self) -> AnalogyResult<GenerationRequest> {
        match (self.thing1, self.thing2) {
            (Some(thing1), Some(thing2)) if !thing1.is_empty() && !thing2.is_empty() => {
                Ok(GenerationRequest { thing1, thing2 })
            }
            _ => Err(AnalogyError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }
}

/// JSON body returned by the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Analogy { analogy: String },
    Error { error: String },
}

impl GenerationResult {
    pub fn analogy(text: impl Into<String>) -> Self {
        Self::Analogy {
            analogy: text.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Convert into a `Result`, treating an `{"error"}` body as a proxy error.
    pub fn into_result(self) -> AnalogyResult<String> {
        match self {
            Self::Analogy { analogy } => Ok(analogy),
            Self::Error { error } => Err(AnalogyError::Proxy(error)),
        }
    }
}

/// Shareable URL carrying an analogy as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShareLink(pub String);

impl ShareLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShareLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
