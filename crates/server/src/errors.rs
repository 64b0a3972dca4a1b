use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gitscribe::CheckoutError;
use gitscribe_github::GitHubError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within
/// the server, allowing them to be converted into appropriate HTTP
/// responses.
pub enum AppError {
    /// Errors from the hosting API client and the extraction walk.
    GitHub(GitHubError),
    /// Errors from the payment checkout client.
    Checkout(CheckoutError),
    /// The analysis feature is disabled by the startup configuration.
    AnalysisDisabled(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<GitHubError> for AppError {
    fn from(err: GitHubError) -> Self {
        AppError::GitHub(err)
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        AppError::Checkout(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::GitHub(err) => {
                error!("GitHubError: {:?}", err);
                match err {
                    GitHubError::InvalidRepoRef(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                    GitHubError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                    GitHubError::Request(_)
                    | GitHubError::RepositoryFetch(_)
                    | GitHubError::ContentsFetch(_)
                    | GitHubError::ContentFetch(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
                }
            }
            AppError::Checkout(err) => {
                error!("CheckoutError: {:?}", err);
                match err {
                    CheckoutError::BelowMinimum { .. } => {
                        (StatusCode::BAD_REQUEST, err.to_string())
                    }
                    CheckoutError::Request(_)
                    | CheckoutError::Session(_)
                    | CheckoutError::MissingUrl => (StatusCode::BAD_GATEWAY, err.to_string()),
                }
            }
            AppError::AnalysisDisabled(reason) => (StatusCode::SERVICE_UNAVAILABLE, reason),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
