mod error;
mod llm;
mod orchestrator;
pub mod server;
pub mod text;
pub mod tracing;
pub mod types;

pub use error::{Error, FallbackError, PrimaryError, SummarizeError};
pub use llm::inference;
pub use llm::{
    abstractive::{self_test, Abstractive},
    extractive::Extractive,
    summarizer::{AbstractiveModel, ExtractiveModel, FallbackSummarizer, PrimarySummarizer},
};
pub use orchestrator::{
    builder::SummarizationServiceBuilder, SummarizationService, UnavailablePolicy,
};
pub use types::{DecodingParams, ModelState, SummarizationResult, WordStats};
