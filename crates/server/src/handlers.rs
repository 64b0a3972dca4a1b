use crate::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use gitscribe::{Extraction, PledgeRequest, SummaryPair};
use gitscribe_github::{extract_repository, ExtractionConfig, RepoRef};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

// --- API Payloads ---

/// The request body for the `/analyze` endpoint.
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// An `owner/repo` reference or a full GitHub URL.
    pub repo: String,
    #[serde(default)]
    pub options: ExtractionConfig,
}

/// The response body for the `/analyze` endpoint.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub extraction: Extraction,
    pub summary: SummaryPair,
}

// --- Route Handlers ---

pub async fn root() -> &'static str {
    "gitscribe server is running."
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for the `/analyze` endpoint.
///
/// Extracts a bounded snapshot of the repository, then asks the model for
/// the two-part summary. A summary failure never fails the request; the
/// fallback pair is returned alongside the (still valuable) extraction.
pub async fn analyze_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let summarizer = match (&app_state.summarizer, &app_state.analysis_disabled) {
        (Some(summarizer), _) => summarizer,
        (None, reason) => {
            return Err(AppError::AnalysisDisabled(
                reason
                    .clone()
                    .unwrap_or_else(|| "Analysis is not configured.".to_string()),
            ))
        }
    };

    let repo_ref: RepoRef = payload.repo.parse()?;
    info!("Received analyze request for {repo_ref}");

    let extraction = extract_repository(
        &app_state.github,
        &repo_ref.owner,
        &repo_ref.repo,
        &payload.options,
    )
    .await?;

    let summary = summarizer.summarize(&extraction).await;

    Ok(Json(AnalyzeResponse {
        extraction,
        summary,
    }))
}

/// The handler for the `/pledge` endpoint.
///
/// Validates the pledge and exchanges it for a checkout session on the
/// payment backend, returning the URL the caller should redirect to.
pub async fn pledge_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<PledgeRequest>,
) -> Result<Json<Value>, AppError> {
    info!(
        "Received pledge request for project '{}'",
        payload.project_id
    );

    let url = app_state.checkout.create_session(&payload).await?;

    Ok(Json(json!({ "url": url })))
}
