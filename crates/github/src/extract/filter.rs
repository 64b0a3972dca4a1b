//! # Extraction Filtering
//!
//! The user-editable extraction configuration and the pure predicates that
//! decide which listing entries are collected. The decision order is fixed:
//! size cap, excluded directories, excluded extensions, then the optional
//! include allow-list.

use crate::types::TreeEntry;
use serde::{Deserialize, Serialize};

/// The knobs bounding one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Allow-list of extensions. Empty means every extension is eligible.
    pub include_extensions: Vec<String>,
    /// Extensions that are never collected.
    pub exclude_extensions: Vec<String>,
    /// Directory names excluded by case-insensitive substring match
    /// against the full path, for both files and recursion.
    pub exclude_directories: Vec<String>,
    /// Per-file size cap in bytes.
    pub max_file_size: u64,
    /// Global budget on the number of collected files.
    pub max_files: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            include_extensions: Vec::new(),
            exclude_extensions: ["png", "jpg", "jpeg", "gif", "svg", "ico", "pdf", "zip", "tar", "gz"]
                .map(String::from)
                .to_vec(),
            exclude_directories: ["node_modules", ".git", "dist", "build", "target", "bin", "obj"]
                .map(String::from)
                .to_vec(),
            max_file_size: 100_000,
            max_files: 50,
        }
    }
}

impl ExtractionConfig {
    /// Decides whether a file entry should be collected.
    ///
    /// Deterministic and free of side effects; first matching rule wins.
    pub fn should_include(&self, entry: &TreeEntry) -> bool {
        if entry.size > self.max_file_size {
            return false;
        }

        if self.is_excluded_dir(&entry.path) {
            return false;
        }

        let extension = extension_of(&entry.name);

        if self.exclude_extensions.iter().any(|e| *e == extension) {
            return false;
        }

        if !self.include_extensions.is_empty() {
            return self.include_extensions.iter().any(|e| *e == extension);
        }

        true
    }

    /// Whether a path falls under any configured excluded directory.
    pub fn is_excluded_dir(&self, path: &str) -> bool {
        let path = path.to_lowercase();
        self.exclude_directories
            .iter()
            .any(|dir| path.contains(&dir.to_lowercase()))
    }
}

/// The lower-cased extension after the final `.`, or empty if there is none.
fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, extension)) => extension.to_ascii_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryType;

    fn file_entry(name: &str, path: &str, size: u64) -> TreeEntry {
        TreeEntry {
            name: name.to_string(),
            path: path.to_string(),
            sha: "abc123".to_string(),
            size,
            url: String::new(),
            html_url: String::new(),
            git_url: String::new(),
            download_url: Some(format!("https://raw.example.com/{path}")),
            entry_type: EntryType::File,
        }
    }

    #[test]
    fn test_oversized_file_is_rejected_regardless_of_extension() {
        let config = ExtractionConfig {
            max_file_size: 1000,
            ..Default::default()
        };
        let entry = file_entry("main.rs", "src/main.rs", 1001);
        assert!(!config.should_include(&entry));
        assert!(config.should_include(&file_entry("main.rs", "src/main.rs", 1000)));
    }

    #[test]
    fn test_excluded_directory_substring_match_is_case_insensitive() {
        let config = ExtractionConfig::default();
        assert!(!config.should_include(&file_entry("index.js", "Node_Modules/pkg/index.js", 10)));
        assert!(config.is_excluded_dir("some/NODE_MODULES/lib"));
        assert!(!config.is_excluded_dir("src/components"));
    }

    #[test]
    fn test_excluded_extension_wins_before_include_list() {
        let config = ExtractionConfig {
            include_extensions: vec!["png".to_string()],
            ..Default::default()
        };
        // png is in both sets; the exclude rule is evaluated first.
        assert!(!config.should_include(&file_entry("logo.png", "assets/logo.png", 10)));
    }

    #[test]
    fn test_include_list_restricts_when_non_empty() {
        let config = ExtractionConfig {
            include_extensions: vec!["rs".to_string()],
            ..Default::default()
        };
        assert!(config.should_include(&file_entry("main.rs", "src/main.rs", 10)));
        assert!(!config.should_include(&file_entry("app.py", "src/app.py", 10)));
    }

    #[test]
    fn test_empty_include_list_allows_unknown_extensions() {
        let config = ExtractionConfig::default();
        assert!(config.should_include(&file_entry("main.zig", "src/main.zig", 10)));
        assert!(config.should_include(&file_entry("Makefile", "Makefile", 10)));
    }

    #[test]
    fn test_extension_is_taken_after_the_final_dot() {
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README.MD"), "md");
        assert_eq!(extension_of("notes"), "");
        assert_eq!(extension_of(".gitignore"), "gitignore");
    }
}
