pub mod builder;

use std::time::Duration;

use crate::{
    FallbackSummarizer, ModelState, PrimaryError, PrimarySummarizer, SummarizationResult,
    SummarizeError,
};

/// What to do with requests when the startup self-test failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnavailablePolicy {
    /// Refuse every request with [`SummarizeError::ModelUnavailable`].
    #[default]
    Reject,
    /// Skip the primary summarizer and serve extractive summaries only.
    FallbackOnly,
}

/// Runs the primary summarizer and degrades to the fallback when it fails.
pub struct SummarizationService<P, F>
where
    P: PrimarySummarizer + Send + Sync + 'static,
    F: FallbackSummarizer + Send + Sync + 'static,
{
    pub(crate) primary: P,
    pub(crate) fallback: F,
    pub(crate) model_state: ModelState,
    pub(crate) unavailable_policy: UnavailablePolicy,
    pub(crate) primary_timeout: Option<Duration>,
}

impl<P, F> SummarizationService<P, F>
where
    P: PrimarySummarizer + Send + Sync + 'static,
    F: FallbackSummarizer + Send + Sync + 'static,
{
    pub fn model_state(&self) -> &ModelState {
        &self.model_state
    }

    /// True when every request is refused up front because the model never
    /// loaded.
    pub fn rejects_requests(&self) -> bool {
        !self.model_state.is_available() && self.unavailable_policy == UnavailablePolicy::Reject
    }

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub async fn handle_summarize(
        &self,
        text: &str,
    ) -> Result<SummarizationResult, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let primary = if self.model_state.is_available() {
            self.run_primary(text).await
        } else if self.unavailable_policy == UnavailablePolicy::FallbackOnly {
            Err(PrimaryError::ModelUnavailable)
        } else {
            return Err(SummarizeError::ModelUnavailable);
        };

        match primary {
            Ok(result) => {
                return Ok(SummarizationResult {
                    used_fallback: false,
                    ..result
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Primary summarizer failed, falling back");
            }
        }

        // the fallback always sees the original text, never the truncated model input
        match self.fallback.summarize(text).await {
            Ok(result) => {
                tracing::info!(
                    output_words = result.stats.output_words,
                    "Served extractive fallback summary"
                );
                Ok(SummarizationResult {
                    used_fallback: true,
                    ..result
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Fallback summarizer failed");
                Err(SummarizeError::AllMethodsFailed)
            }
        }
    }

    async fn run_primary(&self, text: &str) -> Result<SummarizationResult, PrimaryError> {
        match self.primary_timeout {
            Some(limit) => tokio::time::timeout(limit, self.primary.summarize(text))
                .await
                .map_err(|_| PrimaryError::Timeout(limit))?,
            None => self.primary.summarize(text).await,
        }
    }
}
