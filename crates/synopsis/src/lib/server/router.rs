use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    server::handler::{index, summarize},
    FallbackSummarizer, PrimarySummarizer, SummarizationService,
};

/// Largest request body accepted by `POST /summarize`.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

pub fn router<P, F>(service: SummarizationService<P, F>) -> Router
where
    P: PrimarySummarizer + Send + Sync + 'static,
    F: FallbackSummarizer + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/summarize", post(summarize::<P, F>))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(service))
}
