//! Application configuration for TalentScout.
//!
//! User config lives at `~/.talentscout/talentscout.toml`.
//! CLI flags override config file values, which override defaults.
//! Secrets are never stored in the file — only the env var names that hold them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentScoutError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "talentscout.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".talentscout";

// ---------------------------------------------------------------------------
// Config structs (matching talentscout.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Search defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// GitHub API settings.
    #[serde(default)]
    pub github: GithubConfig,

    /// SerpAPI settings (optional LinkedIn lookup).
    #[serde(default)]
    pub serp: SerpConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Unique-candidate budget per search.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Search-index pages fetched per query variant.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Hits per search-index page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Concurrent enrichment tasks per page.
    #[serde(default = "default_enrich_concurrency")]
    pub enrich_concurrency: usize,

    /// Maximum seconds to wait out a quota reset before giving up.
    #[serde(default = "default_max_backoff_secs")]
    pub max_backoff_secs: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
            max_pages: default_max_pages(),
            per_page: default_per_page(),
            enrich_concurrency: default_enrich_concurrency(),
            max_backoff_secs: default_max_backoff_secs(),
        }
    }
}

fn default_max_candidates() -> usize {
    25
}
fn default_max_pages() -> u32 {
    3
}
fn default_per_page() -> u32 {
    30
}
fn default_enrich_concurrency() -> usize {
    8
}
fn default_max_backoff_secs() -> u64 {
    120
}

/// `[github]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Names of the env vars holding bearer tokens (never the tokens themselves).
    /// Unset or empty vars are skipped; at least one must resolve.
    #[serde(default = "default_token_env_vars")]
    pub token_env_vars: Vec<String>,

    /// Base URL of the GitHub REST API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token_env_vars: default_token_env_vars(),
            api_base: default_api_base(),
        }
    }
}

fn default_token_env_vars() -> Vec<String> {
    vec!["GITHUB_TOKEN_1".into(), "GITHUB_TOKEN_2".into()]
}
fn default_api_base() -> String {
    "https://api.github.com".into()
}

/// `[serp]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerpConfig {
    /// Name of the env var holding the SerpAPI key.
    #[serde(default = "default_serp_key_env")]
    pub api_key_env: String,

    /// SerpAPI search endpoint.
    #[serde(default = "default_serp_endpoint")]
    pub endpoint: String,
}

impl Default for SerpConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_serp_key_env(),
            endpoint: default_serp_endpoint(),
        }
    }
}

fn default_serp_key_env() -> String {
    "SERP_API_KEY".into()
}
fn default_serp_endpoint() -> String {
    "https://serpapi.com/search".into()
}

// ---------------------------------------------------------------------------
// Search options (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime search configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Stop collecting once this many unique candidates are pooled.
    pub max_candidates: usize,
    /// Pages fetched per query variant.
    pub max_pages: u32,
    /// Hits per page.
    pub per_page: u32,
    /// Concurrent enrichment tasks per page.
    pub enrich_concurrency: usize,
}

impl From<&AppConfig> for SearchOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_candidates: config.defaults.max_candidates,
            max_pages: config.defaults.max_pages,
            per_page: config.defaults.per_page,
            enrich_concurrency: config.defaults.enrich_concurrency,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.talentscout/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| TalentScoutError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.talentscout/talentscout.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| TalentScoutError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        TalentScoutError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| TalentScoutError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| TalentScoutError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| TalentScoutError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Resolve GitHub tokens from the configured env var names.
///
/// Unset or empty vars are skipped. Errors with a config error when no token
/// resolves — the credential pool must never be empty.
pub fn resolve_tokens(github: &GithubConfig) -> Result<Vec<String>> {
    let tokens: Vec<String> = github
        .token_env_vars
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .filter(|val| !val.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(TalentScoutError::config(format!(
            "no GitHub tokens found. Set at least one of: {}",
            github.token_env_vars.join(", ")
        )));
    }

    Ok(tokens)
}
