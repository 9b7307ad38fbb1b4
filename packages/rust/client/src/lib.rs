//! Rate-limited GitHub API client and optional SerpAPI lookup.
//!
//! This crate is the sole point of contact with the remote APIs:
//! - [`TokenPool`] — atomic round-robin credential rotation
//! - [`RateLimitedClient`] — authenticated reads with quota-aware backoff
//! - [`GithubClient`] — typed search/profile/repository endpoints
//! - [`SerpClient`] — best-effort LinkedIn profile locator

pub mod fetch;
pub mod github;
pub mod serp;
pub mod token;

pub use fetch::{RateLimitedClient, backoff_duration};
pub use github::GithubClient;
pub use serp::SerpClient;
pub use token::TokenPool;
