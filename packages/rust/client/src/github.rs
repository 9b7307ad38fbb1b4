//! Typed GitHub REST endpoints over the rate-limited client.
//!
//! All other crates go through [`GithubClient`]; nothing else issues raw
//! requests against the API.

use serde::Deserialize;
use tracing::debug;
use url::Url;

use talentscout_shared::{RawHit, RepoSummary, Result, TalentScoutError, UserProfile};

use crate::fetch::RateLimitedClient;
use crate::serp::SerpClient;

/// GitHub API client: bio search, profile reads, repository listings.
pub struct GithubClient {
    fetch: RateLimitedClient,
    api_base: Url,
    serp: Option<SerpClient>,
}

/// Wire shape of `/search/users` responses.
#[derive(Debug, Deserialize)]
struct SearchUsersResponse {
    #[serde(default)]
    items: Vec<RawHit>,
}

impl GithubClient {
    /// Create a client against the given API base URL.
    ///
    /// `api_base` is injectable so tests can point at a mock server;
    /// production uses `https://api.github.com`.
    pub fn new(fetch: RateLimitedClient, api_base: &str, serp: Option<SerpClient>) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .map_err(|e| TalentScoutError::config(format!("invalid API base '{api_base}': {e}")))?;

        Ok(Self {
            fetch,
            api_base,
            serp,
        })
    }

    /// Search user bios for the given query variant.
    ///
    /// The `in:bio` qualifier is appended here; callers pass the bare variant.
    pub async fn search_users(
        &self,
        variant: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawHit>> {
        let mut url = self.endpoint("search/users")?;
        url.query_pairs_mut()
            .append_pair("q", &format!("{variant} in:bio"))
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());

        debug!(variant, page, "searching user bios");
        let response: SearchUsersResponse = self.fetch.get_json(url.as_str()).await?;
        Ok(response.items)
    }

    /// Fetch the full profile for an account handle.
    pub async fn get_user(&self, login: &str) -> Result<UserProfile> {
        let url = self.endpoint(&format!("users/{login}"))?;
        self.fetch.get_json(url.as_str()).await
    }

    /// Fetch the public repository list for an account handle.
    pub async fn list_repos(&self, login: &str) -> Result<Vec<RepoSummary>> {
        let url = self.endpoint(&format!("users/{login}/repos"))?;
        self.fetch.get_json(url.as_str()).await
    }

    /// The optional LinkedIn locator, when a SerpAPI key is configured.
    pub fn serp(&self) -> Option<&SerpClient> {
        self.serp.as_ref()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_base
            .join(path)
            .map_err(|e| TalentScoutError::config(format!("bad endpoint path '{path}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::token::TokenPool;

    fn github_for(server: &MockServer) -> GithubClient {
        let pool = TokenPool::new(vec!["t".into()]).unwrap();
        let fetch = RateLimitedClient::new(pool, Duration::from_secs(60)).unwrap();
        GithubClient::new(fetch, &server.uri(), None).unwrap()
    }

    #[tokio::test]
    async fn search_users_appends_bio_qualifier_and_parses_items() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/users"))
            .and(query_param("q", "rust in:bio"))
            .and(query_param("per_page", "30"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 2,
                "items": [
                    {"login": "alice", "html_url": "https://github.com/alice"},
                    {"login": "bob", "html_url": "https://github.com/bob"},
                ]
            })))
            .mount(&server)
            .await;

        let client = github_for(&server);
        let hits = client.search_users("rust", 1, 30).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].username, "alice");
        assert_eq!(hits[1].profile_url, "https://github.com/bob");
    }

    #[tokio::test]
    async fn search_users_tolerates_missing_items() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"total_count": 0})),
            )
            .mount(&server)
            .await;

        let client = github_for(&server);
        let hits = client.search_users("nothing", 1, 30).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn get_user_parses_profile() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/alice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "login": "alice",
                "name": "Alice Doe",
                "bio": "Security researcher",
                "location": "Berlin",
                "created_at": "2012-04-01T10:00:00Z",
                "type": "User",
                "html_url": "https://github.com/alice",
            })))
            .mount(&server)
            .await;

        let client = github_for(&server);
        let profile = client.get_user("alice").await.unwrap();

        assert_eq!(profile.login, "alice");
        assert_eq!(profile.account_type, "User");
        assert_eq!(profile.location.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn list_repos_parses_descriptions() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/alice/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "scanner", "description": "Port scanner in Rust"},
                {"name": "dotfiles", "description": null},
            ])))
            .mount(&server)
            .await;

        let client = github_for(&server);
        let repos = client.list_repos("alice").await.unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].description.as_deref(), Some("Port scanner in Rust"));
        assert!(repos[1].description.is_none());
    }
}
