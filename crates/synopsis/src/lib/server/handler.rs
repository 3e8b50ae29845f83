use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Json,
};

use crate::{
    server::{ApiError, SummarizeRequest, SummarizeResponse},
    FallbackSummarizer, PrimarySummarizer, SummarizationService,
};

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[tracing::instrument(skip_all)]
pub async fn summarize<P, F>(
    State(service): State<Arc<SummarizationService<P, F>>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError>
where
    P: PrimarySummarizer + Send + Sync + 'static,
    F: FallbackSummarizer + Send + Sync + 'static,
{
    if service.rejects_requests() {
        return Err(ApiError::ModelUnavailable);
    }

    // blank text is left to the service, which answers with `EmptyInput`
    let text = match payload {
        Ok(Json(request)) => request.text.ok_or(ApiError::NoText)?,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(error = %rejection, "Request body over the size limit");
            return Err(ApiError::PayloadTooLarge);
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            return Err(ApiError::NoText);
        }
    };

    let result = service.handle_summarize(&text).await?;

    Ok(Json(result.into()))
}
