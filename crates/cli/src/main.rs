//! # gitscribe: A CLI for repository extraction and summarization
//!
//! This is the terminal surface over the analysis pipeline: `analyze`
//! pulls a bounded snapshot of a public repository and asks the configured
//! AI provider for a two-part summary; `pledge` exchanges a funding pledge
//! for a checkout session URL on the payment backend.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gitscribe::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use gitscribe::{
    CheckoutClient, Extraction, PledgeRequest, Summarizer, SummaryPair, DEFAULT_CHECKOUT_API_URL,
};
use gitscribe_github::{
    extract_repository, ExtractionConfig, GitHubClient, RepoRef, DEFAULT_API_BASE_URL,
};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const SETUP_INSTRUCTIONS: &str = "\
To use repository analysis, set up the following API keys:

  GEMINI_API_KEY  Get your API key from: https://aistudio.google.com/apikey
  GITHUB_TOKEN    Get your token from: https://github.com/settings/tokens

Setup:
  1. Create a .env file in your project root
  2. Add your API keys (see .env.example for the format)
  3. Re-run this command";

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract a repository's code and summarize it with the configured AI provider
    Analyze(AnalyzeArgs),
    /// Pledge funding for a project and print the checkout URL
    Pledge(PledgeArgs),
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Repository reference: owner/repo or a full GitHub URL
    repo: String,
    /// Only collect files with these extensions (repeatable)
    #[arg(long = "include-ext", value_name = "EXT")]
    include_ext: Vec<String>,
    /// Never collect files with these extensions (repeatable, replaces the defaults)
    #[arg(long = "exclude-ext", value_name = "EXT")]
    exclude_ext: Vec<String>,
    /// Skip paths containing these directory names (repeatable, replaces the defaults)
    #[arg(long = "exclude-dir", value_name = "DIR")]
    exclude_dir: Vec<String>,
    /// Per-file size cap in bytes
    #[arg(long = "max-file-size", value_name = "BYTES")]
    max_file_size: Option<u64>,
    /// Maximum number of files to collect
    #[arg(long = "max-files", value_name = "COUNT")]
    max_files: Option<usize>,
    /// Extract only; do not call the AI provider
    #[arg(long)]
    skip_summary: bool,
}

impl AnalyzeArgs {
    fn to_config(&self) -> ExtractionConfig {
        let mut config = ExtractionConfig::default();
        if !self.include_ext.is_empty() {
            config.include_extensions = self.include_ext.clone();
        }
        if !self.exclude_ext.is_empty() {
            config.exclude_extensions = self.exclude_ext.clone();
        }
        if !self.exclude_dir.is_empty() {
            config.exclude_directories = self.exclude_dir.clone();
        }
        if let Some(max_file_size) = self.max_file_size {
            config.max_file_size = max_file_size;
        }
        if let Some(max_files) = self.max_files {
            config.max_files = max_files;
        }
        config
    }
}

#[derive(Parser, Debug)]
struct PledgeArgs {
    /// The project to fund
    #[arg(long)]
    project_id: String,
    /// The project's display title
    #[arg(long)]
    title: String,
    /// Pledge amount
    #[arg(long)]
    amount: u32,
    /// The pledging user's id
    #[arg(long, default_value = "demo-mentor-1")]
    user_id: String,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::Analyze(args) => handle_analyze(args).await,
        Commands::Pledge(args) => handle_pledge(args).await,
    }
}

// --- Command Handlers ---

async fn handle_analyze(args: &AnalyzeArgs) -> Result<()> {
    // Reject a malformed reference before anything touches the network.
    let repo_ref: RepoRef = args.repo.parse()?;

    let ai_provider = match resolve_ai_provider() {
        Ok(provider) => provider,
        Err(reason) => {
            eprintln!("{reason}\n");
            println!("{SETUP_INSTRUCTIONS}");
            return Ok(());
        }
    };

    let token = nonempty_var("GITHUB_TOKEN");
    let base_url =
        env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    let client = GitHubClient::new(base_url, token)?;
    let config = args.to_config();

    info!("Analyzing repository {repo_ref}");
    println!("Analyzing {repo_ref}...");
    let extraction =
        extract_repository(&client, &repo_ref.owner, &repo_ref.repo, &config).await?;
    print_extraction(&extraction);

    if args.skip_summary {
        return Ok(());
    }

    println!("\nGenerating summary...");
    let summarizer = Summarizer::new(ai_provider);
    let summary = summarizer.summarize(&extraction).await;
    print_summary(&summary);

    Ok(())
}

async fn handle_pledge(args: &PledgeArgs) -> Result<()> {
    let api_url =
        env::var("CHECKOUT_API_URL").unwrap_or_else(|_| DEFAULT_CHECKOUT_API_URL.to_string());
    let checkout = CheckoutClient::new(api_url);

    let request = PledgeRequest {
        project_id: args.project_id.clone(),
        user_id: args.user_id.clone(),
        project_title: args.title.clone(),
        ticket_price: args.amount,
    };

    let url = checkout.create_session(&request).await?;
    println!("Checkout session created. Open this URL to complete the pledge:\n\n  {url}");

    Ok(())
}

// --- Helpers ---

/// Builds the AI provider from the environment, or explains why analysis
/// is unavailable.
fn resolve_ai_provider() -> Result<Box<dyn AiProvider>, String> {
    if nonempty_var("GITHUB_TOKEN").is_none() {
        return Err("GITHUB_TOKEN is not set.".to_string());
    }

    let provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
    match provider.as_str() {
        "gemini" => {
            let api_key =
                nonempty_var("GEMINI_API_KEY").ok_or("GEMINI_API_KEY is not set.".to_string())?;
            let model = env::var("AI_MODEL").unwrap_or_else(|_| "gemini-2.5-pro".to_string());
            let api_url = env::var("AI_API_URL").unwrap_or_else(|_| {
                format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
                )
            });
            GeminiProvider::new(api_url, api_key)
                .map(|p| Box::new(p) as Box<dyn AiProvider>)
                .map_err(|e| e.to_string())
        }
        "local" => {
            let api_url = nonempty_var("AI_API_URL")
                .ok_or("AI_API_URL is required for the local provider.".to_string())?;
            LocalAiProvider::new(api_url, nonempty_var("AI_API_KEY"), env::var("AI_MODEL").ok())
                .map(|p| Box::new(p) as Box<dyn AiProvider>)
                .map_err(|e| e.to_string())
        }
        other => Err(format!("Unsupported AI provider: {other}")),
    }
}

fn nonempty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn print_extraction(extraction: &Extraction) {
    let repository = &extraction.repository;

    println!();
    println!("# {}", repository.full_name);
    if let Some(description) = &repository.description {
        println!("{description}");
    }
    println!(
        "Language: {}  Stars: {}  Forks: {}  Open issues: {}",
        repository.language.as_deref().unwrap_or("Not specified"),
        repository.stargazers_count,
        repository.forks_count,
        repository.open_issues_count,
    );
    println!();
    println!(
        "Extracted {} files ({} bytes) at {}",
        extraction.total_files, extraction.total_size, extraction.extracted_at
    );
    for file in &extraction.files {
        println!("  {:<56} {:>9} B  {}", file.path, file.size, file.language);
    }
}

fn print_summary(summary: &SummaryPair) {
    let technical = &summary.technical;

    println!("\n## Technical Summary\n");
    println!("{}", technical.overview);
    if !technical.key_features.is_empty() {
        println!("\nKey features:");
        for feature in &technical.key_features {
            println!("  - {feature}");
        }
    }
    if !technical.tech_stack.is_empty() {
        println!("\nTech stack:");
        for tech in &technical.tech_stack {
            println!("  - {tech}");
        }
    }
    if !technical.project_structure.is_empty() {
        println!("\nStructure: {}", technical.project_structure);
    }
    if !technical.getting_started.is_empty() {
        println!("Getting started: {}", technical.getting_started);
    }
    if !technical.main_files.is_empty() {
        println!("\nMain files:");
        for file in &technical.main_files {
            println!("  - {file}");
        }
    }
    println!(
        "\nComplexity: {}  Estimated reading time: {}",
        technical.complexity, technical.estimated_reading_time
    );

    println!("\n## Non-Technical Summary\n");
    println!("{}", summary.non_technical);
}
