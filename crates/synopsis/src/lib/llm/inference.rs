use reqwest::Client;
use serde::Deserialize;

use crate::{AbstractiveModel, DecodingParams};

/// Client for a pipeline-style summarization endpoint, as served by the
/// Hugging Face inference API or a compatible self-hosted server.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    api_token: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No summary in response")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
pub struct SummarizationOutput {
    pub summary_text: String,
}

impl InferenceClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://router.huggingface.co/hf-inference";
    pub const DEFAULT_MODEL: &'static str = "facebook/bart-large-cnn";

    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: None,
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: model.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn send_summarization_request(
        &self,
        text: &str,
        params: &DecodingParams,
    ) -> Result<Vec<SummarizationOutput>, InferenceError> {
        let body = serde_json::json!({
            "inputs": text,
            "parameters": params,
        });

        let mut request = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .json(&body);

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Api { status, message });
        }

        Ok(resp.json::<Vec<SummarizationOutput>>().await?)
    }
}

impl AbstractiveModel for InferenceClient {
    type Error = InferenceError;

    async fn generate(&self, text: &str, params: &DecodingParams) -> Result<String, Self::Error> {
        let outputs = self
            .send_summarization_request(text, params)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Failed to summarize content")
            })?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or(InferenceError::EmptyResponse)
    }
}
