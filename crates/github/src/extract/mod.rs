//! # Bounded Repository Extraction
//!
//! This module contains the depth-first directory walk over the hosting
//! API's content tree and the orchestrator that turns one repository into
//! an `Extraction`. The walk is bounded by the configuration's file budget
//! and filtered by `ExtractionConfig`; individual content-fetch failures
//! are logged and skipped so a single bad file never sinks the run.

pub mod filter;
pub mod language;

use crate::client::GitHubClient;
use crate::types::{EntryType, GitHubError};
use chrono::Utc;
use filter::ExtractionConfig;
use futures::future::{BoxFuture, FutureExt};
use gitscribe::{Extraction, ExtractedFile};
use language::language_for;
use tracing::{debug, info, instrument, warn};

/// The accumulator threaded through the recursive walk.
///
/// Owned by the orchestrator and passed by mutable reference, so the walk
/// carries no hidden shared state and the collected order is exactly the
/// traversal order.
#[derive(Default)]
struct WalkState {
    files: Vec<ExtractedFile>,
}

/// Extracts a bounded, filtered snapshot of a repository's file tree.
///
/// Fails only if the repository metadata call fails; the walk itself
/// omits files whose content cannot be fetched and succeeds with whatever
/// was collected.
#[instrument(skip(client, config), fields(owner = %owner, repo = %repo))]
pub async fn extract_repository(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    config: &ExtractionConfig,
) -> Result<Extraction, GitHubError> {
    info!("Starting repository extraction");
    let repository = client.get_repository(owner, repo).await?;

    let mut state = WalkState::default();
    walk_directory(client, owner, repo, String::new(), config, &mut state).await?;

    let total_files = state.files.len();
    let total_size = state.files.iter().map(|f| f.size).sum();
    info!("Extraction finished: {total_files} files, {total_size} bytes");

    Ok(Extraction {
        repository,
        files: state.files,
        total_files,
        total_size,
        extracted_at: Utc::now(),
    })
}

/// Walks one directory level, depth-first in listing order.
///
/// The file budget is checked per entry, so traversal can stop in the
/// middle of a directory. Accepted subdirectories are descended into
/// immediately, before their later siblings are considered.
fn walk_directory<'a>(
    client: &'a GitHubClient,
    owner: &'a str,
    repo: &'a str,
    path: String,
    config: &'a ExtractionConfig,
    state: &'a mut WalkState,
) -> BoxFuture<'a, Result<(), GitHubError>> {
    async move {
        let entries = client.get_contents(owner, repo, &path).await?;

        for entry in entries {
            if state.files.len() >= config.max_files {
                debug!("File budget reached, stopping traversal in '{path}'");
                break;
            }

            match entry.entry_type {
                EntryType::File => {
                    if !config.should_include(&entry) {
                        continue;
                    }
                    let Some(download_url) = entry.download_url.clone() else {
                        warn!("File entry '{}' has no download URL, skipping", entry.path);
                        continue;
                    };
                    match client.get_file_content(&download_url).await {
                        Ok(content) => {
                            let language = language_for(&entry.name).to_string();
                            state.files.push(ExtractedFile {
                                path: entry.path,
                                content,
                                size: entry.size,
                                language,
                            });
                        }
                        Err(e) => {
                            warn!("Failed to fetch content for '{}': {e}", entry.path);
                        }
                    }
                }
                EntryType::Dir => {
                    if config.is_excluded_dir(&entry.path) {
                        debug!("Skipping excluded directory '{}'", entry.path);
                        continue;
                    }
                    walk_directory(client, owner, repo, entry.path, config, &mut *state).await?;
                }
                EntryType::Symlink | EntryType::Submodule => {}
            }
        }

        Ok(())
    }
    .boxed()
}
