use std::{fmt::Display, future::Future};

use crate::{DecodingParams, FallbackError, PrimaryError, SummarizationResult};

/// A sequence model that writes a new summary of `text`.
pub trait AbstractiveModel {
    type Error: Display;

    fn generate(
        &self,
        text: &str,
        params: &DecodingParams,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// An algorithm that picks roughly `ratio` of the input's sentences.
pub trait ExtractiveModel {
    type Error: Display + Send + 'static;

    fn extract(&self, text: &str, ratio: f64) -> Result<String, Self::Error>;
}

pub trait PrimarySummarizer {
    fn summarize(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<SummarizationResult, PrimaryError>> + Send;
}

pub trait FallbackSummarizer {
    fn summarize(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<SummarizationResult, FallbackError>> + Send;
}
