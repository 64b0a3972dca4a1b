//! # Language Classification
//!
//! Maps a filename's extension to a display language label. Lookup is by
//! extension only, so extensionless files (including `Dockerfile`-style
//! names) fall back to the default label.

/// The label used when no extension entry matches.
pub const DEFAULT_LANGUAGE: &str = "Text";

/// Returns the display language label for a filename. Total; never fails.
pub fn language_for(filename: &str) -> &'static str {
    let extension = match filename.rsplit_once('.') {
        Some((_, extension)) => extension.to_ascii_lowercase(),
        None => return DEFAULT_LANGUAGE,
    };

    match extension.as_str() {
        "js" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "py" => "Python",
        "java" => "Java",
        "cpp" => "C++",
        "c" => "C",
        "cs" => "C#",
        "php" => "PHP",
        "rb" => "Ruby",
        "go" => "Go",
        "rs" => "Rust",
        "swift" => "Swift",
        "kt" => "Kotlin",
        "html" => "HTML",
        "css" => "CSS",
        "scss" => "SCSS",
        "sass" => "Sass",
        "json" => "JSON",
        "xml" => "XML",
        "yaml" | "yml" => "YAML",
        "md" => "Markdown",
        "sql" => "SQL",
        "sh" => "Shell",
        "dockerfile" => "Docker",
        _ => DEFAULT_LANGUAGE,
    }
}
