use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    handle_descriptive, handle_get_term, handle_get_translations, handle_health, handle_search,
    handle_suggest, handle_term_frequency,
};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/search", get(handle_search))
        .route("/suggest", get(handle_suggest))
        .route("/terms/:id", get(handle_get_term))
        .route("/terms/:id/translations", get(handle_get_translations))
        .route("/analytics/descriptive", get(handle_descriptive))
        .route("/analytics/term-frequency", get(handle_term_frequency));

    Router::new()
        .route("/health", get(handle_health))
        .nest(&state.config.server.api_prefix, api)
        .layer(cors_layer(&state.config.server.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring malformed CORS origin {origin:?}");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Bind, warm the dataset, and serve until `shutdown` is cancelled
pub async fn serve(state: Arc<AppState>, shutdown: CancellationToken) -> anyhow::Result<()> {
    let addr = state.config.server.bind_addr.clone();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        "listening on {} (api at {})",
        listener.local_addr()?,
        state.config.server.api_prefix
    );

    // A failed preload is retried by the first request that needs the data
    match state.engine.loader().load_terms().await {
        Ok(terms) => tracing::info!("dataset ready with {} terms", terms.len()),
        Err(e) => tracing::error!("dataset preload failed: {e}"),
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
