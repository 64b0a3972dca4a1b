//! # Shared Data Model
//!
//! The wire types shared between the extraction and summarization stages.
//! `Repository` and `Extraction` are produced by the GitHub crate and
//! consumed by the prompt builder; `CodeSummary` is what the model is asked
//! to return. Field names follow the upstream JSON contracts, so the
//! summary types keep their camelCase keys via serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository metadata as returned by the hosting API's `/repos/{owner}/{repo}` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub clone_url: String,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single file collected during an extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedFile {
    /// Path relative to the repository root.
    pub path: String,
    /// The full text content of the file.
    pub content: String,
    /// Size in bytes, as reported by the directory listing.
    pub size: u64,
    /// Display label for the file's language, derived from its extension.
    pub language: String,
}

/// The aggregate result of one extraction run.
///
/// Files appear in traversal order. `total_files` never exceeds the
/// configured budget and `total_size` is the sum of the individual sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    pub repository: Repository,
    pub files: Vec<ExtractedFile>,
    pub total_files: usize,
    pub total_size: u64,
    pub extracted_at: DateTime<Utc>,
}

/// The complexity label the model is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Low => write!(f, "Low"),
            Complexity::Medium => write!(f, "Medium"),
            Complexity::High => write!(f, "High"),
        }
    }
}

/// The structured technical summary the model is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSummary {
    pub overview: String,
    #[serde(rename = "keyFeatures")]
    pub key_features: Vec<String>,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
    #[serde(rename = "projectStructure")]
    pub project_structure: String,
    #[serde(rename = "gettingStarted")]
    pub getting_started: String,
    #[serde(rename = "mainFiles")]
    pub main_files: Vec<String>,
    pub complexity: Complexity,
    #[serde(rename = "estimatedReadingTime")]
    pub estimated_reading_time: String,
}

impl CodeSummary {
    fn placeholder(overview: &str) -> Self {
        Self {
            overview: overview.to_string(),
            key_features: Vec::new(),
            tech_stack: Vec::new(),
            project_structure: String::new(),
            getting_started: String::new(),
            main_files: Vec::new(),
            complexity: Complexity::Low,
            estimated_reading_time: "Unknown".to_string(),
        }
    }
}

/// A technical summary paired with its plain-language counterpart.
///
/// This is the only thing the summarizer ever returns: every failure path
/// substitutes one of the fixed fallback pairs instead of propagating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPair {
    pub technical: CodeSummary,
    pub non_technical: String,
}

impl SummaryPair {
    /// The fallback used when the model reply has no parseable JSON block.
    pub fn unparsed() -> Self {
        Self {
            technical: CodeSummary::placeholder("Unable to parse technical summary."),
            non_technical: "An error occurred with the AI response. Please try again.".to_string(),
        }
    }

    /// The fallback used when the model call itself fails.
    pub fn service_error() -> Self {
        Self {
            technical: CodeSummary::placeholder(
                "Unable to generate technical summary due to a service error.",
            ),
            non_technical: "Unable to generate non-technical summary due to a service error."
                .to_string(),
        }
    }
}
