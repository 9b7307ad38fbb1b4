//! Shared types, error model, and configuration for TalentScout.
//!
//! This crate is the foundation depended on by all other TalentScout crates.
//! It provides:
//! - [`TalentScoutError`] — the unified error type
//! - Domain types ([`Candidate`], [`ResultSet`], [`SearchTerm`], wire shapes)
//! - Configuration ([`AppConfig`], [`SearchOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, GithubConfig, SearchOptions, SerpConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from, resolve_tokens,
};
pub use error::{Result, TalentScoutError};
pub use types::{Candidate, RawHit, RepoSummary, ResultSet, SearchTerm, UserProfile};
