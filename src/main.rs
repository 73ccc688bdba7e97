use anyhow::{Context, Result};
use clap::Parser;
use codefathom::analyzer::ProjectAnalyzer;
use codefathom::config::Config;
use codefathom::enrich::{EmbeddingEnricher, HttpEmbeddingClient};
use std::path::PathBuf;
use std::sync::Arc;

/// Parse a Java project into an IR and enrich it with embeddings.
#[derive(Debug, Parser)]
#[command(name = "codefathom", version, about)]
struct Cli {
    /// Root directory of the Java project to analyze
    project_path: PathBuf,

    /// Directory where ir.json is written
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Skip embedding enrichment and emit the bare IR
    #[arg(long)]
    analyze_only: bool,

    /// Embedding service endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Number of entities per embedding request
    #[arg(long)]
    batch_size: Option<usize>,

    /// Embedding request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Source file extension to analyze
    #[arg(long)]
    extension: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(endpoint) = cli.endpoint {
        config.embedding.endpoint_url = endpoint;
    }
    if let Some(batch_size) = cli.batch_size {
        config.embedding.batch_size = batch_size;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.embedding.timeout_secs = timeout_secs;
    }
    if let Some(extension) = cli.extension {
        config.source.extension = extension;
    }
    config.validate()?;

    let analyzer = ProjectAnalyzer::new(&cli.project_path, config.source.clone());
    let classes = analyzer.analyze().await?;
    tracing::info!("Extracted {} classes", classes.len());

    let classes = if cli.analyze_only {
        classes
    } else {
        let client = HttpEmbeddingClient::new(&config.embedding)?;
        let enricher = EmbeddingEnricher::new(Arc::new(client), config.embedding.batch_size);
        enricher.enrich(classes).await?
    };

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create output dir {}", cli.output_dir.display()))?;
    let output_path = cli.output_dir.join("ir.json");
    let json = serde_json::to_string_pretty(&classes)?;
    std::fs::write(&output_path, json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    tracing::info!("Wrote IR to {}", output_path.display());
    Ok(())
}
