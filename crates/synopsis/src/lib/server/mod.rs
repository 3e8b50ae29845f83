//! HTTP surface: `GET /` serves the web page, `POST /summarize` runs the
//! summarization service.

mod dto;
mod error;
mod handler;
mod router;

pub use dto::{SummarizeRequest, SummarizeResponse};
pub use error::ApiError;
pub use router::{router, MAX_BODY_BYTES};
