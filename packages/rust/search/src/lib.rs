//! Candidate discovery and scoring pipeline.
//!
//! This crate turns a free-text domain into a tiered set of candidates:
//! - [`variants`] — query variant expansion for wider bio-search recall
//! - [`score`] — tenure, keyword-match, and confidence heuristics
//! - [`enrich`] — per-hit profile enrichment
//! - [`aggregate`] — variant/page iteration, concurrent fan-out, dedup, tiering
//! - [`source`] — the upstream-API seam, implemented by the GitHub client
//!   and by fixtures in tests

pub mod aggregate;
pub mod enrich;
pub mod score;
pub mod source;
pub mod variants;

#[cfg(test)]
pub(crate) mod testutil;

pub use aggregate::{SearchProgress, SilentProgress, run_search};
pub use enrich::enrich;
pub use score::{compute_confidence, experience_years};
pub use source::CandidateSource;
pub use variants::generate_variants;
