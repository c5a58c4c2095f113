//! Analogy Web Server
//!
//! Axum-based generation proxy and the page that hosts the analogy form.

pub mod routes;
pub mod state;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use state::AppState;

/// Headers a browser-based JSON client may send.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    let generate = post(routes::generate::generate_analogy)
        .options(routes::generate::preflight)
        .fallback(routes::generate::method_not_allowed);

    let api_routes = Router::new()
        .route("/generate-analogy", generate.clone())
        // Path the hosted client invokes functions under
        .route("/functions/v1/generate-analogy", generate)
        .with_state(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/health", get(routes::health))
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    if state.provider.is_none() {
        tracing::warn!("OpenAI API key is not configured; generation requests will fail");
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
