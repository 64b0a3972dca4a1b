//! # Repository Summarization Core
//!
//! This crate provides the shared data model and the AI-facing half of the
//! repository analysis pipeline: prompt construction for the two-part
//! summary request, configurable AI providers, best-effort parsing of the
//! model's reply into a structured summary, and the client for the external
//! funding checkout backend.

pub mod checkout;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod summary;
pub mod types;

pub use checkout::{CheckoutClient, PledgeRequest, DEFAULT_CHECKOUT_API_URL, MIN_PLEDGE};
pub use errors::{CheckoutError, SummaryError};
pub use summary::{parse_summary_response, Summarizer};
pub use types::{CodeSummary, Complexity, Extraction, ExtractedFile, Repository, SummaryPair};
