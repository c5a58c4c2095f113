//! Route handlers.

pub mod generate;
pub mod page;

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
