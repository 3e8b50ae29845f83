use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use synopsis::{PrimaryError, PrimarySummarizer, SummarizationResult, WordStats};

#[derive(Clone)]
pub struct MockPrimary {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<PrimaryError>,
    pub delay: Option<Duration>,
}

impl MockPrimary {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            delay: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(PrimaryError::Inference(msg.to_string())),
            ..Self::new("")
        }
    }

    pub fn slow(summary: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(summary)
        }
    }
}

impl PrimarySummarizer for MockPrimary {
    async fn summarize(&self, text: &str) -> Result<SummarizationResult, PrimaryError> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref err) = self.fail_with {
            return Err(err.clone());
        }
        Ok(SummarizationResult::primary(
            self.summary.clone(),
            WordStats::compute(text, &self.summary),
        ))
    }
}
