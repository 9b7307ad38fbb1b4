//! TalentScout CLI — find experienced professionals by GitHub bio search.
//!
//! Matches a free-text domain against user biographies, scores each match
//! on tenure and keyword signals, and groups the results into tiers.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
