use serde::{Deserialize, Serialize};

use crate::{SummarizationResult, WordStats};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub stats: WordStats,
    /// Only present, and `true`, when the extractive fallback produced the summary.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl From<SummarizationResult> for SummarizeResponse {
    fn from(result: SummarizationResult) -> Self {
        Self {
            summary: result.summary,
            stats: result.stats,
            fallback: result.used_fallback,
        }
    }
}
