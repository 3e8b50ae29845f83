use std::sync::Arc;

use textrank::TextRank;

use crate::{
    ExtractiveModel, FallbackError, FallbackSummarizer, SummarizationResult, WordStats,
};

impl ExtractiveModel for TextRank {
    type Error = textrank::Error;

    fn extract(&self, text: &str, ratio: f64) -> Result<String, Self::Error> {
        self.summarize(text, ratio)
    }
}

/// Fallback summarizer: keeps the best ranked sentences of the untruncated
/// input. Ranking is CPU bound and runs on the blocking thread pool.
pub struct Extractive<E> {
    model: Arc<E>,
    ratio: f64,
}

impl<E: ExtractiveModel> Extractive<E> {
    pub const RATIO: f64 = 0.4;

    pub fn new(model: E) -> Self {
        Self {
            model: Arc::new(model),
            ratio: Self::RATIO,
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl<E> FallbackSummarizer for Extractive<E>
where
    E: ExtractiveModel + Send + Sync + 'static,
{
    #[tracing::instrument(skip_all, fields(text_len = text.len(), ratio = self.ratio))]
    async fn summarize(&self, text: &str) -> Result<SummarizationResult, FallbackError> {
        let model = Arc::clone(&self.model);
        let input = text.to_owned();
        let ratio = self.ratio;

        let summary = tokio::task::spawn_blocking(move || {
            model
                .extract(&input, ratio)
                .map_err(|e| FallbackError::Extraction(e.to_string()))
        })
        .await
        .map_err(|e| FallbackError::Extraction(e.to_string()))??;

        if summary.trim().is_empty() {
            return Err(FallbackError::EmptySummary);
        }

        let stats = WordStats::compute(text, &summary);
        Ok(SummarizationResult::fallback(summary, stats))
    }
}
