use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use rapid_summarizer::{PostSummarizer, RecordingObserver, Summarizer, SummarizerConfig};

/// Extractive TextRank summaries of long posts.
///
/// Reads a document from a file or stdin and prints its most central
/// sentences in their original order.
#[derive(Parser)]
#[command(name = "rapid-summarize", version, about)]
struct Cli {
    /// File to summarize (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Number of sentences to keep (default: 5)
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// Stopword language code, e.g. en, de, fr (default: en)
    #[arg(long)]
    language: Option<String>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Apply the post policy: placeholder for empty bodies, short bodies unchanged
    #[arg(long)]
    post: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rapid_summarizer=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SummarizerConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SummarizerConfig::default(),
    };
    if let Some(n) = cli.sentences {
        config.num_sentences = n;
    }
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    debug!(?config, "resolved config");

    let summarizer = Summarizer::try_from_config(config).context("invalid configuration")?;
    let text = read_input(cli.input.as_ref())?;
    info!(bytes = text.len(), "read input");

    if cli.post {
        let posts = PostSummarizer::from_summarizer(summarizer);
        let summarized = posts.needs_summary(&text);
        let summary = posts.summarize_post(&text);
        if cli.json {
            let out = serde_json::json!({ "summary": summary, "summarized": summarized });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{summary}");
        }
        return Ok(());
    }

    let mut observer = RecordingObserver::new();
    let summary = summarizer.summarize_with_observer(&text, &mut observer);

    if cli.json {
        let out = serde_json::json!({ "summary": summary, "stages": observer });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", summary.text);
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
