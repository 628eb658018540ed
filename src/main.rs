//! hostcrawl main entry point
//!
//! This is the command-line interface for the hostcrawl single-host crawler.

use anyhow::Context;
use clap::Parser;
use hostcrawl::config::{load_config, validate, Config};
use hostcrawl::crawler::Crawler;
use hostcrawl::output::{format_statistics, render, CrawlStatistics, OutputFormat};
use hostcrawl::url::{extract_host, parse_absolute};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// hostcrawl: crawl every page of a single host
///
/// Starting from URL, hostcrawl follows links that stay on the URL's host and
/// prints every page it fetched together with the raw links found on it,
/// sorted by URL.
#[derive(Parser, Debug)]
#[command(name = "hostcrawl")]
#[command(version)]
#[command(about = "Crawl every page of a single host", long_about = None)]
struct Cli {
    /// Absolute URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Number of concurrently operating HTTP fetchers
    #[arg(short, long, value_name = "N")]
    concurrency: Option<usize>,

    /// Print results as JSON
    #[arg(short, long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Path to TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print crawl statistics to stderr after the results
    #[arg(long)]
    stats: bool,

    /// Validate config and seed and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        return handle_dry_run(&config, &cli.url);
    }

    handle_crawl(&config, &cli).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout only carries crawl results.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("hostcrawl=info,warn"),
            1 => EnvFilter::new("hostcrawl=debug,info"),
            2 => EnvFilter::new("hostcrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }

    validate(&config).context("Invalid configuration")?;

    Ok(config)
}

/// Handles the --dry-run mode: validates the seed and shows the crawl setup
fn handle_dry_run(config: &Config, seed: &str) -> anyhow::Result<()> {
    let root = parse_absolute(seed).with_context(|| format!("Invalid URL ({})", seed))?;
    let host = extract_host(&root).unwrap_or_default();

    println!("=== hostcrawl Dry Run ===\n");
    println!("Seed: {}", seed);
    println!("Host scope: {}", host);
    println!("Workers: {}", config.crawler.concurrency);
    println!("User agent: {}", config.user_agent.header_value());
    println!(
        "Timeouts: {}s request, {}s connect",
        config.http.request_timeout_secs, config.http.connect_timeout_secs
    );
    println!("Max redirects: {}", config.http.max_redirects);
    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, cli: &Cli) -> anyhow::Result<()> {
    let crawler = Crawler::from_config(config)?;

    let results = match crawler.crawl(&cli.url).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let stats = CrawlStatistics::from_results(&results);
    tracing::info!(
        "{} pages fetched, {} failed, {} links found",
        stats.total_pages,
        stats.failed_pages,
        stats.total_links
    );

    let format = if cli.json {
        OutputFormat::Json { pretty: cli.pretty }
    } else {
        OutputFormat::Text
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(render(&results, format).as_bytes())
        .context("Failed to write results")?;
    stdout.flush()?;

    if cli.stats {
        eprint!("{}", format_statistics(&stats));
    }

    Ok(())
}
