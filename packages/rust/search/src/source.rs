//! The upstream-API seam for the pipeline.
//!
//! The aggregator and enricher talk to a [`CandidateSource`] rather than to
//! the GitHub client directly, so tests can drive the pipeline from fixture
//! data with deterministic results.

use std::future::Future;

use talentscout_client::GithubClient;
use talentscout_shared::{RawHit, RepoSummary, Result, UserProfile};

/// Read access to the upstream search, profile, and repository endpoints.
///
/// Enrichment tasks are spawned onto the runtime, so implementations must be
/// shareable across tasks.
pub trait CandidateSource: Send + Sync + 'static {
    /// One page of bio-search hits for a query variant.
    fn search_users(
        &self,
        variant: &str,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<RawHit>>> + Send;

    /// Full profile for an account handle.
    fn get_user(&self, login: &str) -> impl Future<Output = Result<UserProfile>> + Send;

    /// Public repositories for an account handle.
    fn list_repos(&self, login: &str) -> impl Future<Output = Result<Vec<RepoSummary>>> + Send;

    /// Best-effort external professional-network lookup. Optional; the
    /// default finds nothing.
    fn locate_profile(
        &self,
        _name: &str,
        _location: &str,
    ) -> impl Future<Output = Option<String>> + Send {
        async { None }
    }
}

impl CandidateSource for GithubClient {
    async fn search_users(&self, variant: &str, page: u32, per_page: u32) -> Result<Vec<RawHit>> {
        GithubClient::search_users(self, variant, page, per_page).await
    }

    async fn get_user(&self, login: &str) -> Result<UserProfile> {
        GithubClient::get_user(self, login).await
    }

    async fn list_repos(&self, login: &str) -> Result<Vec<RepoSummary>> {
        GithubClient::list_repos(self, login).await
    }

    async fn locate_profile(&self, name: &str, location: &str) -> Option<String> {
        match self.serp() {
            Some(serp) => serp.locate(name, location).await,
            None => None,
        }
    }
}
