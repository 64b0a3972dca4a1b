//! # Funding Checkout Client
//!
//! This module provides the client for the external payment backend. A
//! pledge is validated locally first, then exchanged for a hosted checkout
//! session whose URL the caller is expected to open in a browser.

use crate::errors::CheckoutError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The default address of the payment backend's session endpoint.
pub const DEFAULT_CHECKOUT_API_URL: &str = "http://localhost:5000/create-checkout-session";

/// The smallest pledge the payment backend accepts.
pub const MIN_PLEDGE: u32 = 50;

/// The payload expected by the payment backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PledgeRequest {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "projectTitle")]
    pub project_title: String,
    #[serde(rename = "ticketPrice")]
    pub ticket_price: u32,
}

#[derive(Debug, Deserialize)]
struct CheckoutSessionResponse {
    url: Option<String>,
    error: Option<String>,
}

/// The client for creating checkout sessions on the payment backend.
#[derive(Clone, Debug)]
pub struct CheckoutClient {
    client: Client,
    api_url: String,
}

impl CheckoutClient {
    /// Creates a new `CheckoutClient` for the given session endpoint.
    pub fn new(api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
        }
    }

    /// Validates a pledge and exchanges it for a checkout session URL.
    ///
    /// A pledge below `MIN_PLEDGE` is rejected synchronously, before any
    /// network call. A non-OK backend response surfaces the backend's
    /// `error` message when one is present, otherwise the HTTP status.
    pub async fn create_session(&self, pledge: &PledgeRequest) -> Result<String, CheckoutError> {
        if pledge.ticket_price < MIN_PLEDGE {
            return Err(CheckoutError::BelowMinimum {
                amount: pledge.ticket_price,
                min: MIN_PLEDGE,
            });
        }

        debug!(
            "Creating checkout session for project '{}' ({})",
            pledge.project_title, pledge.project_id
        );

        let response = self.client.post(&self.api_url).json(pledge).send().await?;
        let status = response.status();

        let body: CheckoutSessionResponse = match response.json().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(CheckoutError::Request(e)),
            Err(_) => {
                return Err(CheckoutError::Session(format!(
                    "payment server responded with {status}"
                )))
            }
        };

        if !status.is_success() {
            let message = body
                .error
                .unwrap_or_else(|| format!("payment server responded with {status}"));
            return Err(CheckoutError::Session(message));
        }

        let url = body.url.ok_or(CheckoutError::MissingUrl)?;
        info!("Checkout session created, redirecting to {url}");
        Ok(url)
    }
}
