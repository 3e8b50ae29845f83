use std::sync::{Arc, Mutex};
use synopsis::{FallbackError, FallbackSummarizer, SummarizationResult, WordStats};

#[derive(Clone)]
pub struct MockFallback {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<FallbackError>,
}

impl MockFallback {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(err: FallbackError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new("")
        }
    }
}

impl FallbackSummarizer for MockFallback {
    async fn summarize(&self, text: &str) -> Result<SummarizationResult, FallbackError> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref err) = self.fail_with {
            return Err(err.clone());
        }
        Ok(SummarizationResult::fallback(
            self.summary.clone(),
            WordStats::compute(text, &self.summary),
        ))
    }
}
