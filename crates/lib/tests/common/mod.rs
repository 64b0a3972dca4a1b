#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the library's integration tests: a scripted mock AI
//! provider, a provider that always fails, and sample extraction data.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use dotenvy::dotenv;
use gitscribe::providers::ai::AiProvider;
use gitscribe::{Extraction, ExtractedFile, Repository, SummaryError};
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

// --- Mock AI Provider for Logic Testing ---

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<String>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        self.call_history.write().unwrap().push(prompt.to_string());

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok("Default mock response".to_string())
        }
    }
}

/// A provider whose calls always fail, for exercising the fallback path.
#[derive(Clone, Debug)]
pub struct FailingAiProvider;

#[async_trait]
impl AiProvider for FailingAiProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, SummaryError> {
        Err(SummaryError::AiApi("model service unavailable".to_string()))
    }
}

// --- Sample Data ---

pub fn sample_repository() -> Repository {
    Repository {
        id: 42,
        name: "sample".to_string(),
        full_name: "octocat/sample".to_string(),
        description: Some("A sample project".to_string()),
        html_url: "https://github.com/octocat/sample".to_string(),
        clone_url: "https://github.com/octocat/sample.git".to_string(),
        language: Some("Rust".to_string()),
        stargazers_count: 7,
        forks_count: 2,
        open_issues_count: 1,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_extraction(files: Vec<ExtractedFile>) -> Extraction {
    let total_files = files.len();
    let total_size = files.iter().map(|f| f.size).sum();
    Extraction {
        repository: sample_repository(),
        files,
        total_files,
        total_size,
        extracted_at: Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
    }
}

pub fn sample_file(path: &str, content: &str) -> ExtractedFile {
    ExtractedFile {
        path: path.to_string(),
        content: content.to_string(),
        size: content.len() as u64,
        language: "Rust".to_string(),
    }
}
