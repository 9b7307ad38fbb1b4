//! Fixture-backed [`CandidateSource`] for pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use talentscout_shared::{RawHit, RepoSummary, Result, TalentScoutError, UserProfile};

use crate::source::CandidateSource;

/// In-memory upstream: fixed search pages, profiles, and repo lists, with
/// switchable failure modes and a fetch counter for budget assertions.
#[derive(Default)]
pub(crate) struct FixtureSource {
    users: HashMap<String, (UserProfile, Vec<RepoSummary>)>,
    pages: HashMap<(String, u32), Vec<RawHit>>,
    failing_pages: HashSet<(String, u32)>,
    denied_pages: HashSet<(String, u32)>,
    failing_repos: HashSet<String>,
    profile_links: HashMap<String, String>,
    pub search_calls: AtomicUsize,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, profile: UserProfile, repos: Vec<RepoSummary>) -> Self {
        self.users.insert(profile.login.clone(), (profile, repos));
        self
    }

    pub fn with_page(mut self, variant: &str, page: u32, usernames: &[&str]) -> Self {
        let hits = usernames
            .iter()
            .map(|u| RawHit {
                username: (*u).to_string(),
                profile_url: format!("https://github.com/{u}"),
            })
            .collect();
        self.pages.insert((variant.to_string(), page), hits);
        self
    }

    pub fn failing_page(mut self, variant: &str, page: u32) -> Self {
        self.failing_pages.insert((variant.to_string(), page));
        self
    }

    pub fn denied_page(mut self, variant: &str, page: u32) -> Self {
        self.denied_pages.insert((variant.to_string(), page));
        self
    }

    pub fn failing_repos_for(mut self, login: &str) -> Self {
        self.failing_repos.insert(login.to_string());
        self
    }

    pub fn with_profile_link(mut self, name: &str, link: &str) -> Self {
        self.profile_links.insert(name.to_string(), link.to_string());
        self
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

impl CandidateSource for FixtureSource {
    async fn search_users(&self, variant: &str, page: u32, _per_page: u32) -> Result<Vec<RawHit>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        let key = (variant.to_string(), page);
        if self.denied_pages.contains(&key) {
            return Err(TalentScoutError::AccessDenied("fixture: denied".into()));
        }
        if self.failing_pages.contains(&key) {
            return Err(TalentScoutError::upstream(Some(500), "fixture: page failure"));
        }

        Ok(self.pages.get(&key).cloned().unwrap_or_default())
    }

    async fn get_user(&self, login: &str) -> Result<UserProfile> {
        self.users
            .get(login)
            .map(|(profile, _)| profile.clone())
            .ok_or_else(|| TalentScoutError::upstream(Some(404), format!("{login}: not found")))
    }

    async fn list_repos(&self, login: &str) -> Result<Vec<RepoSummary>> {
        if self.failing_repos.contains(login) {
            return Err(TalentScoutError::upstream(Some(500), "fixture: repo failure"));
        }
        self.users
            .get(login)
            .map(|(_, repos)| repos.clone())
            .ok_or_else(|| TalentScoutError::upstream(Some(404), format!("{login}: not found")))
    }

    async fn locate_profile(&self, name: &str, _location: &str) -> Option<String> {
        self.profile_links.get(name).cloned()
    }
}
