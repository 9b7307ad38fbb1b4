//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use talentscout_client::{GithubClient, RateLimitedClient, SerpClient, TokenPool};
use talentscout_search::aggregate::{SearchProgress, run_search};
use talentscout_shared::{
    AppConfig, Candidate, ResultSet, SearchOptions, SearchTerm, TalentScoutError, init_config,
    load_config, resolve_tokens,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// TalentScout — discover experienced professionals via GitHub bio search.
#[derive(Parser)]
#[command(
    name = "talentscout",
    version,
    about = "Match a domain against GitHub bios and rank candidates by experience and confidence.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Search GitHub bios for candidates in a domain.
    Search {
        /// Domain to search for, e.g. "Cybersecurity" or "Machine Learning".
        domain: String,

        /// Optional comma-separated keywords, e.g. "python,cloud,ai".
        #[arg(short, long, default_value = "")]
        keywords: String,

        /// Maximum unique candidates to collect.
        #[arg(short, long)]
        max: Option<usize>,

        /// Tier to display/export: all, veterans (10+ years), or rising
        /// (<10 years, high confidence).
        #[arg(short, long, default_value = "all")]
        tier: Tier,

        /// Write the selected tier as CSV to this path.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Result tier selector.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum Tier {
    All,
    Veterans,
    Rising,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "talentscout=info",
        1 => "talentscout=debug",
        _ => "talentscout=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search {
            domain,
            keywords,
            max,
            tier,
            out,
        } => cmd_search(&domain, &keywords, max, tier, out.as_deref()).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Search command
// ---------------------------------------------------------------------------

async fn cmd_search(
    domain: &str,
    keywords: &str,
    max: Option<usize>,
    tier: Tier,
    out: Option<&std::path::Path>,
) -> Result<()> {
    // Input validation happens before any network call.
    if domain.trim().is_empty() {
        return Err(eyre!("please enter a domain, e.g. `talentscout search Cybersecurity`"));
    }

    let config = load_config()?;
    let tokens = resolve_tokens(&config.github)?;
    let pool = TokenPool::new(tokens)?;
    let fetch = RateLimitedClient::new(
        pool,
        Duration::from_secs(config.defaults.max_backoff_secs),
    )?;
    let serp = SerpClient::from_env(&config.serp);
    let github = GithubClient::new(fetch, &config.github.api_base, serp)?;

    let term = SearchTerm::new(domain.trim(), keywords);
    let mut opts = SearchOptions::from(&config);
    if let Some(max) = max {
        opts.max_candidates = max;
    }

    info!(
        domain = %term.domain,
        keywords = term.keywords.len(),
        max_candidates = opts.max_candidates,
        "searching for candidates"
    );

    let reporter = CliProgress::new();
    let result = match run_search(Arc::new(github), &term, &opts, &reporter).await {
        Ok(result) => result,
        Err(TalentScoutError::NoResults) => {
            reporter.finish();
            println!();
            println!("  No profiles found. The search may have matched nothing,");
            println!("  or GitHub rate limits were reached — try again later.");
            println!();
            return Ok(());
        }
        Err(e) => {
            reporter.finish();
            return Err(e.into());
        }
    };
    reporter.finish();

    print_summary(&term.domain, &result);

    let selected = select_tier(&result, tier);
    print_tier(tier, selected);

    if let Some(path) = out {
        let file = std::fs::File::create(path)
            .map_err(|e| eyre!("cannot create '{}': {e}", path.display()))?;
        talentscout_export::write_csv(selected, file)?;
        println!("  Exported {} candidates to {}", selected.len(), path.display());
        println!();
    }

    Ok(())
}

fn select_tier(result: &ResultSet, tier: Tier) -> &[Candidate] {
    match tier {
        Tier::All => &result.all_candidates,
        Tier::Veterans => &result.ten_years_plus,
        Tier::Rising => &result.strong_under_ten,
    }
}

fn print_summary(domain: &str, result: &ResultSet) {
    println!();
    println!("  Search complete!");
    println!("  Domain:     {domain}");
    println!("  Candidates: {}", result.all_candidates.len());
    println!("  Veterans:   {} (10+ years)", result.ten_years_plus.len());
    println!(
        "  Rising:     {} (<10 years, confidence ≥ 70)",
        result.strong_under_ten.len()
    );
    println!();
}

fn print_tier(tier: Tier, candidates: &[Candidate]) {
    let label = match tier {
        Tier::All => "All candidates",
        Tier::Veterans => "Veterans (10+ years)",
        Tier::Rising => "Rising (<10 years, high confidence)",
    };

    if candidates.is_empty() {
        println!("  {label}: none");
        println!();
        return;
    }

    println!("  {label}:");
    for c in candidates {
        println!(
            "  {:>3}  {:>2}y  {} ({}) — {}",
            c.confidence_score, c.experience_years, c.name, c.location, c.contact_url
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl SearchProgress for CliProgress {
    fn variant_started(&self, variant: &str, index: usize, total: usize) {
        self.spinner
            .set_message(format!("Variant [{index}/{total}] \"{variant}\""));
    }

    fn page_fetched(&self, variant: &str, page: u32, hits: usize) {
        self.spinner
            .set_message(format!("\"{variant}\" page {page}: {hits} hits"));
    }

    fn candidate_added(&self, username: &str, pooled: usize) {
        self.spinner
            .set_message(format!("Enriched {username} ({pooled} collected)"));
    }
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
