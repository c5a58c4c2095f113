//! Share links and social-network compose URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::model::ShareLink;

/// Characters left untouched by a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query parameter holding the analogy in a share link.
pub const ANALOGY_PARAM: &str = "analogy";

const TWITTER_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Percent-encode text the way `encodeURIComponent` does (spaces become `%20`).
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// `<origin>?analogy=<encoded analogy>`.
pub fn share_link(origin: &str, analogy: &str) -> ShareLink {
    ShareLink(format!(
        "{}?{}={}",
        origin.trim_end_matches('/'),
        ANALOGY_PARAM,
        encode_uri_component(analogy)
    ))
}

/// Read the analogy back out of a share link. Best-effort.
pub fn analogy_from_share_link(link: &str) -> Option<String> {
    let url = url::Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == ANALOGY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Networks the form can share to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Twitter,
    TikTok,
}

impl SocialNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::TikTok => "tiktok",
        }
    }
}

impl std::str::FromStr for SocialNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Self::Twitter),
            "tiktok" => Ok(Self::TikTok),
            other => Err(format!("Unknown social network: {}", other)),
        }
    }
}

/// How a network receives the analogy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open a pre-filled compose URL in a new browsing context.
    Open(String),
    /// No compose URL exists; put text on the clipboard instead.
    Clipboard { text: String, notice: String },
}

/// Build the share action for `network`.
pub fn share_action(network: SocialNetwork, analogy: &str, origin: &str) -> ShareAction {
    match network {
        SocialNetwork::Twitter => {
            let text = format!("{}\n\n{}", analogy, origin);
            ShareAction::Open(format!(
                "{}?text={}",
                TWITTER_INTENT_URL,
                encode_uri_component(&text)
            ))
        }
        SocialNetwork::TikTok => ShareAction::Clipboard {
            text: format!("Check out this clever analogy: \"{}\"", analogy),
            notice: "Analogy copied to clipboard for TikTok!".to_string(),
        },
    }
}
