//! Form page route handler.
//!
//! One template serves every presentation; the theme only swaps the palette
//! and headline copy.

use axum::{
    extract::Query,
    http::StatusCode,
    response::Html,
};
use serde::{Deserialize, Serialize};

const PAGE_TEMPLATE: &str = include_str!("../../../../assets/web/index.html");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Minimal,
    Dark,
    Playful,
}

/// Colors and copy for a theme.
#[derive(Debug, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub border: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Self::Minimal => Palette {
                background: "#ffffff",
                card: "#ffffff",
                foreground: "#0a0a0a",
                muted: "#f4f4f5",
                primary: "#18181b",
                primary_foreground: "#fafafa",
                border: "#e4e4e7",
                headline: "What's the Analogy?",
                tagline: "Get your analogy instantly.",
            },
            Self::Dark => Palette {
                background: "#09090b",
                card: "#18181b",
                foreground: "#fafafa",
                muted: "#27272a",
                primary: "#fafafa",
                primary_foreground: "#18181b",
                border: "#3f3f46",
                headline: "What's the Analogy?",
                tagline: "Two things in, one punchline out.",
            },
            Self::Playful => Palette {
                background: "#fdf4ff",
                card: "#ffffff",
                foreground: "#3b0764",
                muted: "#fae8ff",
                primary: "#c026d3",
                primary_foreground: "#ffffff",
                border: "#f0abfc",
                headline: "Compare Anything!",
                tagline: "Pick two things. We'll find the joke.",
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "dark" => Ok(Self::Dark),
            "playful" => Ok(Self::Playful),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Unknown or empty values fall back to the default theme so the page
/// (and its `?analogy=` read-back) still loads.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub theme: Option<String>,
}

impl PageQuery {
    pub fn theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(|theme| theme.parse().ok())
            .unwrap_or_default()
    }
}

pub fn render(theme: Theme) -> Result<String, tera::Error> {
    let mut context = tera::Context::new();
    context.insert("theme", &theme);
    context.insert("palette", &theme.palette());
    tera::Tera::one_off(PAGE_TEMPLATE, &context, true)
}

/// GET / - Serve the analogy form.
pub async fn index(Query(query): Query<PageQuery>) -> Result<Html<String>, (StatusCode, String)> {
    let page = render(query.theme())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Html(page))
}
