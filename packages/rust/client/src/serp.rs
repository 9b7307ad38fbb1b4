//! Best-effort LinkedIn profile lookup via SerpAPI.
//!
//! Absence of a result is not an error: every failure path — missing key,
//! network trouble, non-200 reply, no matching link — collapses to `None`.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use talentscout_shared::SerpConfig;

/// SerpAPI request timeout; lookups are decoration, keep them short.
const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// LinkedIn profile path marker in organic result links.
const LINKEDIN_MARKER: &str = "linkedin.com/in/";

/// Web-search client that locates a professional-network profile by
/// name and location.
pub struct SerpClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl SerpClient {
    /// Build a client from config, reading the API key from its env var.
    /// Returns `None` when the key is unset or empty — the lookup is optional.
    pub fn from_env(config: &SerpConfig) -> Option<Self> {
        let api_key = std::env::var(&config.api_key_env).ok()?;
        if api_key.is_empty() {
            return None;
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .ok()?;

        Some(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key,
        })
    }

    /// Find a LinkedIn profile URL for the given name, narrowing by location
    /// when one is known.
    pub async fn locate(&self, name: &str, location: &str) -> Option<String> {
        let mut query = format!("{name} site:{LINKEDIN_MARKER}");
        if !location.is_empty() && location != "Unknown" {
            query.push(' ');
            query.push_str(location);
        }

        let mut url = Url::parse(&self.endpoint).ok()?;
        url.query_pairs_mut()
            .append_pair("engine", "google")
            .append_pair("q", &query)
            .append_pair("api_key", &self.api_key);

        let response = self.http.get(url).send().await.ok()?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "profile lookup returned non-200, skipping");
            return None;
        }

        let body: serde_json::Value = response.json().await.ok()?;
        body.get("organic_results")?
            .as_array()?
            .iter()
            .filter_map(|result| result.get("link").and_then(|l| l.as_str()))
            .find(|link| link.contains(LINKEDIN_MARKER))
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn serp_for(server: &MockServer) -> SerpClient {
        SerpClient {
            http: Client::new(),
            endpoint: server.uri(),
            api_key: "test-key".into(),
        }
    }

    #[tokio::test]
    async fn finds_first_linkedin_link() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("engine", "google"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organic_results": [
                    {"link": "https://example.com/not-it"},
                    {"link": "https://www.linkedin.com/in/alice-doe"},
                    {"link": "https://www.linkedin.com/in/other"},
                ]
            })))
            .mount(&server)
            .await;

        let client = serp_for(&server);
        let link = client.locate("Alice Doe", "Berlin").await;
        assert_eq!(link.as_deref(), Some("https://www.linkedin.com/in/alice-doe"));
    }

    #[tokio::test]
    async fn non_200_yields_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = serp_for(&server);
        assert!(client.locate("Alice Doe", "Berlin").await.is_none());
    }

    #[tokio::test]
    async fn missing_results_yield_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = serp_for(&server);
        assert!(client.locate("Nobody", "Unknown").await.is_none());
    }

    #[test]
    fn from_env_requires_a_key() {
        let config = SerpConfig {
            api_key_env: "TS_TEST_MISSING_SERP_KEY".into(),
            endpoint: "https://serpapi.com/search".into(),
        };
        assert!(SerpClient::from_env(&config).is_none());
    }
}
