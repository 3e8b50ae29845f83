use std::sync::Arc;

use crate::{
    text::LengthGuard, AbstractiveModel, DecodingParams, ModelState, PrimaryError,
    PrimarySummarizer, SummarizationResult, WordStats,
};

/// Fixed input for the startup self-test.
pub const SELF_TEST_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    This sentence is summarized once at startup to check that the model is loaded and answering.";

/// Primary summarizer: guards the input length, then asks the abstractive
/// model for a summary with [`DecodingParams::SUMMARY`].
///
/// Whether the model is usable at all is decided by the owning
/// [`SummarizationService`](crate::SummarizationService), not here.
pub struct Abstractive<M> {
    model: M,
    guard: Arc<LengthGuard>,
}

impl<M: AbstractiveModel> Abstractive<M> {
    pub fn new(model: M, guard: LengthGuard) -> Self {
        Self {
            model,
            guard: Arc::new(guard),
        }
    }
}

/// Runs the model once on [`SELF_TEST_TEXT`]. A failure is logged and turned
/// into [`ModelState::Unavailable`]; it never aborts startup.
#[tracing::instrument(skip_all)]
pub async fn self_test<M: AbstractiveModel>(model: &M) -> ModelState {
    match model
        .generate(SELF_TEST_TEXT, &DecodingParams::SELF_TEST)
        .await
    {
        Ok(summary) => {
            tracing::info!(summary_len = summary.len(), "Summarization model loaded");
            ModelState::Ready
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load summarization model");
            ModelState::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

impl<M> PrimarySummarizer for Abstractive<M>
where
    M: AbstractiveModel + Send + Sync,
{
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    async fn summarize(&self, text: &str) -> Result<SummarizationResult, PrimaryError> {
        let guard = Arc::clone(&self.guard);
        let owned = text.to_owned();

        // encoding a large body is CPU bound; keep it off the async workers so
        // the primary timeout can still fire
        let input = tokio::task::spawn_blocking(move || guard.apply(&owned).into_owned())
            .await
            .map_err(|e| PrimaryError::Truncation(e.to_string()))?;

        let summary = self
            .model
            .generate(&input, &DecodingParams::SUMMARY)
            .await
            .map_err(|e| PrimaryError::Inference(e.to_string()))?;

        let stats = WordStats::compute(&input, &summary);
        tracing::debug!(
            input_words = stats.input_words,
            output_words = stats.output_words,
            "Abstractive summary generated"
        );

        Ok(SummarizationResult::primary(summary, stats))
    }
}
