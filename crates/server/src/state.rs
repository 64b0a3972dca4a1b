//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it
//! at startup. The state holds the instantiated API clients; when the
//! analysis feature is disabled only the reason is carried, and handlers
//! answer with it instead of reaching for a summarizer that does not exist.

use crate::config::{AnalysisFeature, Config};
use gitscribe::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use gitscribe::{CheckoutClient, Summarizer};
use gitscribe_github::GitHubClient;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub github: GitHubClient,
    /// Present only when the analysis feature is enabled.
    pub summarizer: Option<Summarizer>,
    /// The reason analysis is unavailable, when it is.
    pub analysis_disabled: Option<String>,
    pub checkout: CheckoutClient,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: Config) -> anyhow::Result<AppState> {
    let github = GitHubClient::new(config.github_api_url.clone(), config.github_token.clone())?;
    let checkout = CheckoutClient::new(config.checkout_api_url.clone());

    let (summarizer, analysis_disabled) = match &config.analysis {
        AnalysisFeature::Enabled(provider_config) => {
            let ai_provider: Box<dyn AiProvider> = match provider_config.provider.as_str() {
                "gemini" => {
                    let api_key = provider_config.api_key.clone().ok_or_else(|| {
                        anyhow::anyhow!("api_key is required for the gemini provider")
                    })?;
                    Box::new(GeminiProvider::new(provider_config.api_url.clone(), api_key)?)
                }
                "local" => Box::new(LocalAiProvider::new(
                    provider_config.api_url.clone(),
                    provider_config.api_key.clone(),
                    provider_config.model.clone(),
                )?),
                other => {
                    return Err(anyhow::anyhow!("Unsupported AI provider: {other}"));
                }
            };
            (Some(Summarizer::new(ai_provider)), None)
        }
        AnalysisFeature::Disabled { reason } => {
            tracing::warn!("Analysis feature disabled: {reason}");
            (None, Some(reason.clone()))
        }
    };

    Ok(AppState {
        github,
        summarizer,
        analysis_disabled,
        checkout,
    })
}
