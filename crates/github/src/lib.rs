//! # gitscribe-github: Hosting API Client and Extraction
//!
//! This crate contains everything that talks to the repository-hosting
//! API: the REST client, the extraction configuration and filtering rules,
//! language classification, and the bounded directory walk that produces
//! an `Extraction` for the summarization pipeline.

pub mod client;
pub mod extract;
pub mod types;

// Re-export the main entry points for easy access from other crates.
pub use client::{GitHubClient, DEFAULT_API_BASE_URL};
pub use extract::filter::ExtractionConfig;
pub use extract::language::language_for;
pub use extract::extract_repository;
pub use types::{EntryType, GitHubError, RepoRef, TreeEntry};
