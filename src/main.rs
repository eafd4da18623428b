use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibweb::bib;
use bibweb::config::{find_config_file, ConfigFile, SiteConfig};
use bibweb::pages;
use bibweb::render::Renderer;
use bibweb::site::Website;

/// Bibweb - Generate a static website from BibTeX bibliographies
#[derive(Parser, Debug)]
#[command(name = "bibweb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a static website from BibTeX bibliographies", long_about = None)]
struct Cli {
    /// BibTeX files to index
    #[arg(required = true)]
    bib_files: Vec<PathBuf>,

    /// Template directory
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("bibweb={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config_file = if let Some(path) = &cli.config {
        Some(
            ConfigFile::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
        )
    } else if let Some(path) = find_config_file() {
        tracing::info!("Using config file: {}", path.display());
        Some(
            ConfigFile::load(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
        )
    } else {
        None
    };

    let config = SiteConfig::resolve(cli.template, cli.output, config_file.as_ref());

    // Check that the template directory exists before producing any output
    if !config.template_dir.exists() {
        bail!(
            "template directory {} does not exist",
            config.template_dir.display()
        );
    }

    let mut papers = Vec::new();
    for path in &cli.bib_files {
        let records = bib::read_file(path)?;
        tracing::info!("{}: {} records", path.display(), records.len());
        papers.extend(records.into_iter().map(Arc::new));
    }

    let website = Website::build(papers);
    let jobs = pages::plan(&website);

    let renderer = Renderer::new(&config.template_dir, &config.output_dir);
    renderer.render_all(&jobs)?;
    renderer.copy_static()?;

    tracing::info!(
        "indexed {} papers, generated {} pages",
        website.total(),
        jobs.len()
    );
    Ok(())
}
