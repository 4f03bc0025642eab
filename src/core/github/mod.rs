//! GitHub REST client: repository search and user profiles.
//!
//! Non-200 answers are folded into "nothing found" (empty list / `None`).
//! Transport and decoding failures are returned to the caller.

mod models;

pub use models::{RepoResult, UserProfile};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode, Url};

use models::{SearchResponse, UserItem};

#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error("Invalid GitHub API URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("Invalid GitHub token value")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Failed to deserialize GitHub response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Preconfigured client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
}

impl GitHubClient {
    /// Build a client against `api_base`. A token, when present, is sent as a bearer credential.
    pub fn new(api_base: &str, token: Option<&str>) -> Result<Self, GitHubError> {
        let base_url_error = |reason: String| GitHubError::BaseUrl {
            url: api_base.to_string(),
            reason,
        };
        let api_base = Url::parse(api_base).map_err(|e| base_url_error(e.to_string()))?;
        if api_base.cannot_be_a_base() {
            return Err(base_url_error("not a hierarchical URL".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(token) = token {
            let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(GitHubError::InvalidToken)?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GitHubError::Client)?;

        Ok(GitHubClient { http, api_base })
    }

    /// API URL with `segments` appended to the base path, each percent-encoded
    /// as a single segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Search repositories sorted by stars (descending).
    /// Returns results in API order; any non-200 status yields an empty list.
    pub async fn search_repos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RepoResult>, GitHubError> {
        let url = self.endpoint(&["search", "repositories"]);
        let per_page = max_results.to_string();

        let response = self
            .http
            .get(url)
            .query(&[
                ("q", query),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            log::warn!(
                "GitHub search for {:?} returned {}",
                query,
                response.status()
            );
            return Ok(Vec::new());
        }

        let search: SearchResponse = response.json().await.map_err(GitHubError::Decode)?;
        Ok(search.items.into_iter().map(RepoResult::from).collect())
    }

    /// Fetch a user profile. Any non-200 status yields `None`.
    /// The username always stays inside the `/users/` path segment.
    pub async fn fetch_user(&self, username: &str) -> Result<Option<UserProfile>, GitHubError> {
        // Dot segments would be dropped from the path and hit `/users` itself.
        if matches!(username, "" | "." | "..") {
            return Ok(None);
        }
        let url = self.endpoint(&["users", username]);

        let response = self.http.get(url).send().await?;

        if response.status() != StatusCode::OK {
            log::info!("GitHub user {:?} lookup returned {}", username, response.status());
            return Ok(None);
        }

        let user: UserItem = response.json().await.map_err(GitHubError::Decode)?;
        Ok(Some(UserProfile::from_api(user, username)))
    }
}
