use std::borrow::Cow;

use another_tiktoken_rs::{r50k_base, CoreBPE};

use crate::error::Error;

/// Keeps model input inside the abstractive model's context window.
///
/// Text is measured with the GPT-2 byte pair encoding (the vocabulary BART
/// uses). Anything longer than [`LengthGuard::MAX_TOKENS`] is cut down to its
/// first [`LengthGuard::KEEP_TOKENS`] tokens, leaving room for the special
/// tokens the model adds on its own.
pub struct LengthGuard {
    bpe: CoreBPE,
    max_tokens: usize,
    keep_tokens: usize,
}

impl LengthGuard {
    pub const MAX_TOKENS: usize = 1024;
    pub const KEEP_TOKENS: usize = 1000;

    pub fn new() -> Result<Self, Error> {
        let bpe = r50k_base().map_err(|e| Error::Tokenizer(e.to_string()))?;

        Ok(Self {
            bpe,
            max_tokens: Self::MAX_TOKENS,
            keep_tokens: Self::KEEP_TOKENS,
        })
    }

    /// Overrides the budget. `keep_tokens` is clamped to `max_tokens`.
    pub fn with_limits(mut self, max_tokens: usize, keep_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self.keep_tokens = keep_tokens.min(max_tokens);
        self
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    /// Returns `text` untouched when it fits the budget, otherwise the decoded
    /// prefix of its first `keep_tokens` tokens.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let tokens = self.bpe.encode_with_special_tokens(text);
        if tokens.len() <= self.max_tokens {
            return Cow::Borrowed(text);
        }

        // a cut inside a multi-byte character does not decode; move it back
        // until it lands on a character boundary (zero tokens always decodes)
        let (kept, truncated) = (0..=self.keep_tokens)
            .rev()
            .find_map(|n| self.bpe.decode(tokens[..n].to_vec()).ok().map(|t| (n, t)))
            .unwrap_or_default();

        tracing::warn!(
            tokens = tokens.len(),
            kept_tokens = kept,
            max_tokens = self.max_tokens,
            "Input exceeds model token budget, truncating"
        );

        Cow::Owned(truncated)
    }
}
