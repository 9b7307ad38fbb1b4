//! Search aggregation: variant/page iteration, concurrent enrichment
//! fan-out, dedup, and tiered grouping.
//!
//! One coordinating task drives the variant × page loop sequentially so the
//! fetch client's quota backoff is never entered from several directions at
//! once; within a page, enrichment fans out under a semaphore and joins
//! before the next page is fetched.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tokio::sync::Semaphore;
use tracing::{info, instrument, warn};

use talentscout_shared::types::{STRONG_CONFIDENCE, VETERAN_YEARS};
use talentscout_shared::{Candidate, Result, ResultSet, SearchOptions, SearchTerm, TalentScoutError};

use crate::enrich::enrich;
use crate::source::CandidateSource;
use crate::variants::generate_variants;

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

/// Progress callback for reporting search status.
pub trait SearchProgress: Send + Sync {
    /// Called when a new query variant starts.
    fn variant_started(&self, variant: &str, index: usize, total: usize);
    /// Called after a search-index page is fetched.
    fn page_fetched(&self, variant: &str, page: u32, hits: usize);
    /// Called when a candidate enters the pool.
    fn candidate_added(&self, username: &str, pooled: usize);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl SearchProgress for SilentProgress {
    fn variant_started(&self, _variant: &str, _index: usize, _total: usize) {}
    fn page_fetched(&self, _variant: &str, _page: u32, _hits: usize) {}
    fn candidate_added(&self, _username: &str, _pooled: usize) {}
}

// ---------------------------------------------------------------------------
// Search driver
// ---------------------------------------------------------------------------

/// Run the full discovery pipeline for a search term.
///
/// Iterates variant × page (bounded by `opts`), enriches each page's hits
/// concurrently, merges first-seen-wins by account handle, and stops issuing
/// fetches once `max_candidates` unique candidates are pooled. An empty pool
/// is [`TalentScoutError::NoResults`], never an empty `ResultSet`.
#[instrument(skip_all, fields(domain = %term.domain))]
pub async fn run_search<S: CandidateSource>(
    source: Arc<S>,
    term: &SearchTerm,
    opts: &SearchOptions,
    progress: &dyn SearchProgress,
) -> Result<ResultSet> {
    let started = Instant::now();
    let now = Utc::now();
    let variants = generate_variants(&term.domain);
    let semaphore = Arc::new(Semaphore::new(opts.enrich_concurrency.max(1)));

    info!(
        variants = variants.len(),
        max_pages = opts.max_pages,
        max_candidates = opts.max_candidates,
        "starting candidate search"
    );

    let mut pool: HashMap<String, Candidate> = HashMap::new();

    'variants: for (index, variant) in variants.iter().enumerate() {
        progress.variant_started(variant, index + 1, variants.len());

        for page in 1..=opts.max_pages {
            if pool.len() >= opts.max_candidates {
                break 'variants;
            }

            let hits = match source.search_users(variant, page, opts.per_page).await {
                Ok(hits) => hits,
                Err(
                    e @ (TalentScoutError::AccessDenied(_) | TalentScoutError::RateLimited { .. }),
                ) => {
                    if pool.is_empty() {
                        return Err(e);
                    }
                    warn!(error = %e, pooled = pool.len(), "fatal fetch error, returning partial results");
                    break 'variants;
                }
                Err(e) => {
                    warn!(variant, page, error = %e, "page fetch failed, skipping");
                    continue;
                }
            };

            progress.page_fetched(variant, page, hits.len());
            if hits.is_empty() {
                // Search exhausted for this variant; no deeper pages exist.
                break;
            }

            // Fan out enrichment for hits not already pooled, bounded by the
            // semaphore; join in hit order so the merge is deterministic.
            let mut in_flight: HashSet<String> = HashSet::new();
            let mut handles = Vec::new();

            for hit in hits {
                if pool.contains_key(&hit.username) || !in_flight.insert(hit.username.clone()) {
                    continue;
                }

                let source = source.clone();
                let keywords = term.keywords.clone();
                let sem = semaphore.clone();

                handles.push(tokio::spawn(async move {
                    let _permit = sem.acquire().await.expect("semaphore closed");
                    enrich(source.as_ref(), &hit, &keywords, now).await
                }));
            }

            for handle in handles {
                match handle.await {
                    Ok(Some(candidate)) => {
                        if pool.len() >= opts.max_candidates
                            || pool.contains_key(&candidate.username)
                        {
                            continue;
                        }
                        progress.candidate_added(&candidate.username, pool.len() + 1);
                        pool.insert(candidate.username.clone(), candidate);
                    }
                    Ok(None) => {}
                    Err(e) => warn!(error = %e, "enrichment task panicked"),
                }
            }
        }
    }

    if pool.is_empty() {
        return Err(TalentScoutError::NoResults);
    }

    let result = build_tiers(pool.into_values().collect());

    info!(
        candidates = result.all_candidates.len(),
        veterans = result.ten_years_plus.len(),
        rising = result.strong_under_ten.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "search complete"
    );

    Ok(result)
}

/// Partition and sort the candidate pool into the three tiers.
///
/// Sort is confidence descending with username ascending as tie-break, so a
/// fixed input set always produces the same ordering.
fn build_tiers(mut all: Vec<Candidate>) -> ResultSet {
    all.sort_by(|a, b| {
        b.confidence_score
            .cmp(&a.confidence_score)
            .then_with(|| a.username.cmp(&b.username))
    });

    let ten_years_plus = all
        .iter()
        .filter(|c| c.experience_years >= VETERAN_YEARS)
        .cloned()
        .collect();

    let strong_under_ten = all
        .iter()
        .filter(|c| c.experience_years < VETERAN_YEARS && c.confidence_score >= STRONG_CONFIDENCE)
        .cloned()
        .collect();

    ResultSet {
        ten_years_plus,
        strong_under_ten,
        all_candidates: all,
    }
}
