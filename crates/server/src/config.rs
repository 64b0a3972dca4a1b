//! # Server Configuration
//!
//! Loads the server configuration from environment variables (a `.env`
//! file is honored by the binary). Whether the analysis feature is usable
//! is decided once here, at startup, as a typed value: handlers never
//! re-inspect the environment, they only look at `AnalysisFeature`.

use std::env;

/// The environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
/// The environment variable holding the hosting API token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// The AI provider settings backing an enabled analysis feature.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// The provider type: "gemini" or "local".
    pub provider: String,
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

/// Whether repository analysis is available, decided once at startup.
///
/// The feature needs both the model API key and the hosting API token; if
/// either is missing the feature is disabled with a reason that tells the
/// operator exactly what to set up.
#[derive(Debug, Clone)]
pub enum AnalysisFeature {
    Enabled(ProviderConfig),
    Disabled { reason: String },
}

impl AnalysisFeature {
    fn from_env() -> Self {
        let provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

        if nonempty_var(GITHUB_TOKEN_VAR).is_none() {
            return AnalysisFeature::Disabled {
                reason: format!(
                    "{GITHUB_TOKEN_VAR} is not set. Create a token at \
                     https://github.com/settings/tokens and add it to your .env file."
                ),
            };
        }

        match provider.as_str() {
            "gemini" => {
                let Some(api_key) = nonempty_var(GEMINI_API_KEY_VAR) else {
                    return AnalysisFeature::Disabled {
                        reason: format!(
                            "{GEMINI_API_KEY_VAR} is not set. Get an API key from \
                             https://aistudio.google.com/apikey and add it to your .env file."
                        ),
                    };
                };
                let model =
                    env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
                let api_url = env::var("AI_API_URL").unwrap_or_else(|_| {
                    format!(
                        "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
                    )
                });
                AnalysisFeature::Enabled(ProviderConfig {
                    provider,
                    api_url,
                    api_key: Some(api_key),
                    model: Some(model),
                })
            }
            "local" => match nonempty_var("AI_API_URL") {
                Some(api_url) => AnalysisFeature::Enabled(ProviderConfig {
                    provider,
                    api_url,
                    api_key: nonempty_var("AI_API_KEY"),
                    model: env::var("AI_MODEL").ok(),
                }),
                None => AnalysisFeature::Disabled {
                    reason: "AI_API_URL is required for the local provider. \
                             Add it to your .env file."
                        .to_string(),
                },
            },
            other => AnalysisFeature::Disabled {
                reason: format!("Unsupported AI provider: {other}"),
            },
        }
    }
}

/// The server's startup configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub checkout_api_url: String,
    pub analysis: AnalysisFeature,
}

/// Loads the configuration from the environment.
pub fn get_config() -> anyhow::Result<Config> {
    let port = match env::var("PORT") {
        Ok(value) => value.parse()?,
        Err(_) => 9090,
    };

    Ok(Config {
        port,
        github_api_url: env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| gitscribe_github::DEFAULT_API_BASE_URL.to_string()),
        github_token: nonempty_var(GITHUB_TOKEN_VAR),
        checkout_api_url: env::var("CHECKOUT_API_URL")
            .unwrap_or_else(|_| gitscribe::DEFAULT_CHECKOUT_API_URL.to_string()),
        analysis: AnalysisFeature::from_env(),
    })
}

fn nonempty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
