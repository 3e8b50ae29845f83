use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
}

/// Failures of the abstractive path. All of them are recoverable through the
/// extractive fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimaryError {
    #[error("Model not available")]
    ModelUnavailable,
    #[error("Input truncation failed: {0}")]
    Truncation(String),
    #[error("Inference error: {0}")]
    Inference(String),
    #[error("Inference timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallbackError {
    #[error("Extractive summary is empty")]
    EmptySummary,
    #[error("Extraction error: {0}")]
    Extraction(String),
}

/// Terminal outcome of a summarization request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummarizeError {
    #[error("No text provided")]
    EmptyInput,
    #[error("Model not available")]
    ModelUnavailable,
    #[error("All summarization methods failed")]
    AllMethodsFailed,
}
