//! Core domain types for TalentScout candidate discovery.

use serde::{Deserialize, Serialize};

/// Experience threshold (in years) for the veteran tier.
pub const VETERAN_YEARS: u32 = 10;

/// Confidence threshold for the "strong but under 10 years" tier.
pub const STRONG_CONFIDENCE: u32 = 70;

// ---------------------------------------------------------------------------
// SearchTerm
// ---------------------------------------------------------------------------

/// The raw search input: a free-text domain plus optional keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    /// The domain string, e.g. "Machine Learning".
    pub domain: String,
    /// Keywords, already lowercased and trimmed.
    pub keywords: Vec<String>,
}

impl SearchTerm {
    /// Build a search term from a domain and a comma-separated keyword list.
    /// Keywords are trimmed, lowercased, and empty entries dropped.
    pub fn new(domain: impl Into<String>, keyword_csv: &str) -> Self {
        let keywords = keyword_csv
            .split(',')
            .map(|kw| kw.trim().to_lowercase())
            .filter(|kw| !kw.is_empty())
            .collect();

        Self {
            domain: domain.into(),
            keywords,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire shapes (GitHub API responses)
// ---------------------------------------------------------------------------

/// A single hit from a bio search-index page. Ephemeral; consumed by the
/// enricher immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHit {
    /// Account handle — the canonical dedup key.
    #[serde(rename = "login")]
    pub username: String,
    /// Public profile URL.
    #[serde(rename = "html_url")]
    pub profile_url: String,
}

/// Full profile returned by the user-read endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Account creation timestamp, ISO-8601 `YYYY-MM-DDTHH:MM:SSZ`.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Account type tag: "User" for individuals, "Organization" otherwise.
    #[serde(rename = "type")]
    pub account_type: String,
    pub html_url: String,
}

/// A repository from the repository-list endpoint. Only the description
/// participates in keyword matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// An enriched candidate record. Created once per unique handle; never
/// mutated after it enters the result pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Account handle — unique upstream, used for dedup and tie-breaking.
    pub username: String,
    /// Display name, falling back to the handle.
    pub name: String,
    /// Public profile URL.
    #[serde(rename = "contact")]
    pub contact_url: String,
    /// External professional-network profile, when the optional lookup found one.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Location, defaulting to "Unknown".
    pub location: String,
    /// Whole years since account creation.
    pub experience_years: u32,
    /// Heuristic confidence, 0–100.
    pub confidence_score: u32,
    /// Fixed-template human-readable justification for the score.
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// ResultSet
// ---------------------------------------------------------------------------

/// Three views over a common candidate pool, each sorted by confidence
/// descending (username ascending as tie-break).
///
/// A handle appears in `all_candidates` at most once, and in at most one of
/// the other two tiers: `ten_years_plus` requires `experience_years >= 10`,
/// `strong_under_ten` requires `experience_years < 10` and
/// `confidence_score >= 70`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(rename = "10_years_plus")]
    pub ten_years_plus: Vec<Candidate>,
    #[serde(rename = "strong_but_less_than_10")]
    pub strong_under_ten: Vec<Candidate>,
    pub all_candidates: Vec<Candidate>,
}
