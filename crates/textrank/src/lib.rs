//! # TextRank
//!
//! Extractive summarization: sentences are the vertices of a graph weighted by
//! word overlap, ranked with PageRank, and the best ones are emitted in their
//! original order.

use std::{collections::HashSet, sync::LazyLock};

use itertools::Itertools;
use rayon::prelude::*;
use regex::Regex;

static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]+["')\]]*\s+|\n\s*\n"#).unwrap());

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "his", "i", "if", "in", "into", "is", "it", "its", "my", "no", "not", "of", "on", "or",
    "our", "she", "so", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "to", "us", "was", "we", "were", "what", "when", "which", "who", "will", "with",
    "would", "you", "your",
];

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("input must have more than one sentence, found {0}")]
    TooFewSentences(usize),
    #[error("input has {found} sentences, at most {max} can be ranked")]
    TooManySentences { found: usize, max: usize },
    #[error("ratio must be within (0, 1], got {0}")]
    InvalidRatio(f64),
}

/// Sentence ranker.
///
/// The defaults follow the original TextRank paper: a damping factor of 0.85
/// and iteration until no score moves by more than `1e-4`.
#[derive(Debug, Clone)]
pub struct TextRank {
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
}

impl Default for TextRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

impl TextRank {
    /// Largest input [`TextRank::summarize`] accepts. Building the sentence
    /// graph compares every pair of sentences.
    pub const MAX_SENTENCES: usize = 2_000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the `floor(sentences * ratio)` highest ranked sentences of `text`,
    /// joined by newlines in the order they appear.
    ///
    /// The result is empty when the ratio selects no sentence at all, which
    /// callers should treat as "input too short to extract from".
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn summarize(&self, text: &str, ratio: f64) -> Result<String, Error> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(Error::InvalidRatio(ratio));
        }

        let sentences = split_sentences(text);
        if sentences.len() < 2 {
            return Err(Error::TooFewSentences(sentences.len()));
        }
        if sentences.len() > Self::MAX_SENTENCES {
            return Err(Error::TooManySentences {
                found: sentences.len(),
                max: Self::MAX_SENTENCES,
            });
        }

        let keep = (sentences.len() as f64 * ratio).floor() as usize;
        let scores = self.rank(&sentences);

        let summary = scores
            .iter()
            .enumerate()
            .sorted_by(|(ia, a), (ib, b)| b.total_cmp(a).then(ia.cmp(ib)))
            .take(keep)
            .map(|(idx, _)| idx)
            .sorted()
            .map(|idx| sentences[idx])
            .join("\n");

        tracing::debug!(
            sentences = sentences.len(),
            kept = keep,
            "Ranked sentences for extraction"
        );

        Ok(summary)
    }

    /// PageRank score of every sentence, indexed like `sentences`.
    pub fn rank(&self, sentences: &[&str]) -> Vec<f64> {
        let bags = sentences.iter().map(|s| content_words(s)).collect::<Vec<_>>();
        let n = bags.len();

        // similarity is symmetric, so each list holds both in and out edges;
        // only overlapping pairs are stored
        let edges = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i)
                    .filter_map(|j| {
                        let weight = similarity(&bags[i], &bags[j]);
                        (weight > 0.0).then_some((j, weight))
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let out_weight = edges
            .iter()
            .map(|row| row.iter().map(|(_, w)| w).sum::<f64>())
            .collect::<Vec<_>>();

        let mut scores = vec![1.0_f64; n];

        for _ in 0..self.max_iterations {
            let next = edges
                .iter()
                .map(|row| {
                    let incoming = row
                        .iter()
                        .map(|&(j, w)| w / out_weight[j] * scores[j])
                        .sum::<f64>();
                    (1.0 - self.damping) + self.damping * incoming
                })
                .collect::<Vec<_>>();

            let delta = next
                .iter()
                .zip(&scores)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            scores = next;

            if delta < self.tolerance {
                break;
            }
        }

        scores
    }
}

/// Splits text on terminal punctuation followed by whitespace, and on blank lines.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END_RE.find_iter(text) {
        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

fn content_words(sentence: &str) -> HashSet<String> {
    WORD_RE
        .find_iter(sentence)
        .map(|m| m.as_str().to_lowercase())
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .collect()
}

// |common| / (ln|a| + ln|b|)
fn similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let common = a.intersection(b).count() as f64;
    if common == 0.0 {
        return 0.0;
    }

    let norm = (a.len() as f64).ln() + (b.len() as f64).ln();
    if norm <= 0.0 {
        common
    } else {
        common / norm
    }
}
