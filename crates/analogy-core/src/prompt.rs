//! Prompt construction for analogy generation.

use serde::{Deserialize, Serialize};

use crate::model::GenerationRequest;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Instruction that fixes tone, length and phrasing of every analogy.
pub const SYSTEM_INSTRUCTION: &str = "Write a short, witty analogy between the two concepts. \
Keep it under 25 words. Use pop culture references, irony, or wordplay. \
Be clever enough to go viral on Twitter. Avoid em dashes. Use plain punctuation. \
Format: \"X is like Y because [funny or surprising punchline].\"";

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.8,
        }
    }
}

/// A system/user instruction pair ready to send to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionPrompt {
    pub system: String,
    pub user: String,
    pub sampling: SamplingParams,
}

impl CompletionPrompt {
    /// Build the prompt for a pair of concepts. The concepts are embedded verbatim.
    pub fn for_request(request: &GenerationRequest, sampling: SamplingParams) -> Self {
        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user: user_instruction(&request.thing1, &request.thing2),
            sampling,
        }
    }
}

fn user_instruction(thing1: &str, thing2: &str) -> String {
    format!(
        "Create an analogy between \"{}\" and \"{}\". Explain how they are similar in an interesting and creative way.",
        thing1, thing2
    )
}
