//! Tenure, keyword-match, and confidence heuristics.
//!
//! The confidence formula is policy, not an invariant: the weights live here
//! and nowhere else, and callers treat the resulting score as opaque.

use chrono::{DateTime, NaiveDateTime, Utc};

use talentscout_shared::RepoSummary;

/// Creation timestamp assumed when a profile's is missing or unparseable.
/// A deterministic fallback, not an error.
pub const FALLBACK_CREATED_AT: &str = "2020-01-01T00:00:00Z";

/// Upstream timestamp format: ISO-8601 `YYYY-MM-DDTHH:MM:SSZ`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Per-year, per-repository, and per-keyword-match confidence weights.
const YEAR_WEIGHT: u64 = 6;
const REPO_WEIGHT: u64 = 2;
const MATCH_WEIGHT: u64 = 5;

/// Whole years between account creation and `now`, floored at 365-day years.
///
/// A missing or malformed timestamp falls back to [`FALLBACK_CREATED_AT`].
pub fn experience_years(created_at: Option<&str>, now: DateTime<Utc>) -> u32 {
    let created = created_at
        .and_then(parse_timestamp)
        .unwrap_or_else(fallback_epoch);

    ((now - created).num_days().max(0) / 365) as u32
}

/// Linear weighted confidence heuristic, capped at 100.
pub fn compute_confidence(years: u32, repo_count: usize, keyword_matches: u32) -> u32 {
    let score = u64::from(years) * YEAR_WEIGHT
        + repo_count as u64 * REPO_WEIGHT
        + u64::from(keyword_matches) * MATCH_WEIGHT;
    score.min(100) as u32
}

/// Count keyword occurrences: one per keyword found in the bio, plus one per
/// repository whose description contains it. A single keyword may contribute
/// several matches across repositories.
///
/// Keywords are expected pre-lowercased (see `SearchTerm::new`).
pub fn count_keyword_matches(
    keywords: &[String],
    bio: Option<&str>,
    repos: &[RepoSummary],
) -> u32 {
    let bio = bio.unwrap_or_default().to_lowercase();
    let mut matches = 0;

    for keyword in keywords {
        if bio.contains(keyword.as_str()) {
            matches += 1;
        }
        for repo in repos {
            let description = repo.description.as_deref().unwrap_or_default().to_lowercase();
            if description.contains(keyword.as_str()) {
                matches += 1;
            }
        }
    }

    matches
}

/// Fixed-template human-readable justification for a score.
pub fn explanation(years: u32, repo_count: usize, keyword_matches: u32) -> String {
    format!("{years} years on GitHub, {repo_count} public repos, {keyword_matches} keyword matches")
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn fallback_epoch() -> DateTime<Utc> {
    parse_timestamp(FALLBACK_CREATED_AT).expect("fallback epoch is well-formed")
}
