pub mod gemini;
pub mod local;

use crate::errors::SummaryError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for sending a single text prompt
/// to a Large Language Model (e.g., Gemini, a local OpenAI-compatible
/// server) and receiving its free-text reply.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for the given prompt.
    ///
    /// The result is the raw text of the model's reply.
    async fn generate(&self, prompt: &str) -> Result<String, SummaryError>;
}

dyn_clone::clone_trait_object!(AiProvider);
