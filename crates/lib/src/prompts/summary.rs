//! # Repository Summary Prompts
//!
//! The template for the two-part repository summary request and the pure
//! function that fills it in from an `Extraction`. The model is instructed
//! to answer with one fenced JSON block (the technical summary) followed by
//! a plain-text section introduced by `NON_TECHNICAL_HEADING`; the response
//! parser in `crate::summary` relies on both markers.

use crate::types::Extraction;

/// Only this many files are embedded in the prompt, in traversal order.
pub const MAX_PROMPT_FILES: usize = 20;

/// Per-file content cap, in characters, before truncation.
pub const MAX_SNIPPET_CHARS: usize = 2000;

/// Marker appended to a snippet that was cut at `MAX_SNIPPET_CHARS`.
pub const TRUNCATION_MARKER: &str = "...[truncated]";

/// The heading that separates the technical JSON block from the
/// plain-language section in the model's reply.
pub const NON_TECHNICAL_HEADING: &str = "2. **Non-Technical Summary**:";

/// The user prompt for the repository summary task.
///
/// Placeholders: `{full_name}`, `{description}`, `{language}`, `{stars}`,
/// `{forks}`, `{introduction}`, `{file_count}`, `{code_snippets}`.
pub const SUMMARY_USER_PROMPT: &str = r#"Analyze this GitHub repository and provide two types of summaries:

1. **Technical Summary**:
- Repository: {full_name}
- Description: {description}
- Primary Language: {language}
- Stars: {stars}
- Forks: {forks}

Introduction:
{introduction}

Code Files ({file_count} total files):
{code_snippets}

Please provide a JSON response with the following structure. Do not include any text before or after the JSON block.
{
  "overview": "A comprehensive overview of what this project does and its main purpose",
  "keyFeatures": ["feature1", "feature2", "feature3"],
  "techStack": ["technology1", "technology2", "technology3"],
  "projectStructure": "Description of how the project is organized",
  "gettingStarted": "Brief guide on how to get started with this project",
  "mainFiles": ["important_file1.js", "important_file2.py"],
  "complexity": "Low|Medium|High",
  "estimatedReadingTime": "X minutes"
}

2. **Non-Technical Summary**:
- What this project is and its main purpose.
- Who the target audience or users are.
- The key features and benefits of the project.
- The technologies or tools used, described in simple terms.

Provide the technical summary in JSON format enclosed in a Markdown code block like ```json... ```. Provide the non-technical summary in plain text."#;

/// Builds the summary prompt for an extraction result.
///
/// Embeds the repository metadata, a one-paragraph introduction synthesized
/// from the collected file names, and at most `MAX_PROMPT_FILES` snippets,
/// each truncated to `MAX_SNIPPET_CHARS` characters.
pub fn build_summary_prompt(extraction: &Extraction) -> String {
    let repository = &extraction.repository;

    let file_names = extraction
        .files
        .iter()
        .map(|file| file.path.rsplit('/').next().unwrap_or(&file.path))
        .collect::<Vec<_>>()
        .join(", ");
    let introduction = format!(
        "This project contains the following key files: {file_names}. These files indicate \
         that the project is likely a web-based application with components, services, and \
         types organized for scalability and maintainability."
    );

    let code_snippets = extraction
        .files
        .iter()
        .take(MAX_PROMPT_FILES)
        .map(|file| {
            let truncated: String = if file.content.chars().count() > MAX_SNIPPET_CHARS {
                let head: String = file.content.chars().take(MAX_SNIPPET_CHARS).collect();
                format!("{head}{TRUNCATION_MARKER}")
            } else {
                file.content.clone()
            };
            format!(
                "\nFile: {path} ({language})\n{truncated}\n---",
                path = file.path,
                language = file.language,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    SUMMARY_USER_PROMPT
        .replace("{full_name}", &repository.full_name)
        .replace(
            "{description}",
            repository
                .description
                .as_deref()
                .unwrap_or("No description provided"),
        )
        .replace(
            "{language}",
            repository.language.as_deref().unwrap_or("Not specified"),
        )
        .replace("{stars}", &repository.stargazers_count.to_string())
        .replace("{forks}", &repository.forks_count.to_string())
        .replace("{introduction}", &introduction)
        .replace("{file_count}", &extraction.files.len().to_string())
        .replace("{code_snippets}", &code_snippets)
}
