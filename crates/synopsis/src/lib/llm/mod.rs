pub mod abstractive;
pub mod extractive;
pub mod inference;
pub mod summarizer;
