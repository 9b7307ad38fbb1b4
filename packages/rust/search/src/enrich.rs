//! Per-hit candidate enrichment.
//!
//! A single candidate's failure must never abort the batch: any fetch error
//! or disqualifying profile yields `None` and the hit is dropped.

use chrono::{DateTime, Utc};
use tracing::debug;

use talentscout_shared::{Candidate, RawHit};

use crate::score;
use crate::source::CandidateSource;

/// Account type tag for individual users; anything else (organizations,
/// bots) is not a candidate.
const INDIVIDUAL_ACCOUNT: &str = "User";

/// Enrich one search hit into a candidate.
///
/// Fetches the profile and repository list, computes tenure and keyword
/// matches, and folds them into a confidence score with a fixed-template
/// explanation. Returns `None` for organizations and on any fetch failure.
pub async fn enrich<S: CandidateSource>(
    source: &S,
    hit: &RawHit,
    keywords: &[String],
    now: DateTime<Utc>,
) -> Option<Candidate> {
    let profile = match source.get_user(&hit.username).await {
        Ok(profile) => profile,
        Err(e) => {
            debug!(username = %hit.username, error = %e, "profile fetch failed, dropping hit");
            return None;
        }
    };

    if profile.account_type != INDIVIDUAL_ACCOUNT {
        debug!(username = %hit.username, account_type = %profile.account_type, "not an individual, dropping");
        return None;
    }

    let repos = match source.list_repos(&hit.username).await {
        Ok(repos) => repos,
        Err(e) => {
            debug!(username = %hit.username, error = %e, "repo list fetch failed, dropping hit");
            return None;
        }
    };

    let years = score::experience_years(profile.created_at.as_deref(), now);
    let matches = score::count_keyword_matches(keywords, profile.bio.as_deref(), &repos);
    let confidence = score::compute_confidence(years, repos.len(), matches);
    let explanation = score::explanation(years, repos.len(), matches);

    let name = profile.name.unwrap_or_else(|| profile.login.clone());
    let location = profile.location.unwrap_or_else(|| "Unknown".to_string());
    let linkedin = source.locate_profile(&name, &location).await;

    Some(Candidate {
        username: profile.login,
        name,
        contact_url: hit.profile_url.clone(),
        linkedin,
        location,
        experience_years: years,
        confidence_score: confidence,
        explanation,
    })
}
