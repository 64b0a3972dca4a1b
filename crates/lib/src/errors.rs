use thiserror::Error;

/// Custom error types for the summarization pipeline.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("The AI provider returned an error: {0}")]
    AiApi(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Errors raised by the funding checkout client.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Minimum pledge amount is {min}, got {amount}")]
    BelowMinimum { amount: u32, min: u32 },
    #[error("Failed to reach the payment server: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to create checkout session: {0}")]
    Session(String),
    #[error("The payment server response did not include a checkout URL")]
    MissingUrl,
}
