use serde::Serialize;

use crate::text::count_words;

/// Decoding configuration sent along with every abstractive inference call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodingParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    pub num_beams: u32,
    pub truncation: bool,
}

impl DecodingParams {
    /// Used for every user request.
    pub const SUMMARY: Self = Self {
        max_length: 150,
        min_length: 50,
        do_sample: false,
        num_beams: 4,
        truncation: true,
    };

    /// Used once at startup to check that the model answers at all.
    pub const SELF_TEST: Self = Self {
        max_length: 20,
        min_length: 10,
        ..Self::SUMMARY
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordStats {
    pub input_words: usize,
    pub output_words: usize,
    #[serde(rename = "reduction")]
    pub reduction_percent: i64,
}

impl WordStats {
    pub fn new(input_words: usize, output_words: usize) -> Self {
        let reduction_percent = if input_words == 0 {
            0
        } else {
            ((1.0 - output_words as f64 / input_words as f64) * 100.0).round() as i64
        };

        Self {
            input_words,
            output_words,
            reduction_percent,
        }
    }

    pub fn compute(input: &str, summary: &str) -> Self {
        Self::new(count_words(input), count_words(summary))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationResult {
    pub summary: String,
    pub used_fallback: bool,
    pub stats: WordStats,
}

impl SummarizationResult {
    pub fn primary(summary: String, stats: WordStats) -> Self {
        Self {
            summary,
            used_fallback: false,
            stats,
        }
    }

    pub fn fallback(summary: String, stats: WordStats) -> Self {
        Self {
            summary,
            used_fallback: true,
            stats,
        }
    }
}

/// Outcome of the startup self-test. Decided once per process and never
/// reloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelState {
    Ready,
    Unavailable { reason: String },
}

impl ModelState {
    pub fn is_available(&self) -> bool {
        matches!(self, ModelState::Ready)
    }
}
