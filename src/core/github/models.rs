//! GitHub API payloads and the flat records the bot replies with.

use serde::Deserialize;

/// Substituted when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description.";

/// Substituted when a user has no bio.
pub const NO_BIO: &str = "No bio available.";

/// Response from the repository search API (`/search/repositories`).
#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RepoItem>,
}

/// A single repository from the search results.
#[derive(Debug, Deserialize)]
pub(super) struct RepoItem {
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u64,
    pub description: Option<String>,
}

/// A user profile from the `/users/{username}` API.
#[derive(Debug, Deserialize)]
pub(super) struct UserItem {
    pub login: String,
    pub html_url: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoResult {
    /// `owner/name`
    pub name: String,
    pub url: String,
    pub stars: u64,
    pub description: String,
}

impl From<RepoItem> for RepoResult {
    fn from(item: RepoItem) -> Self {
        RepoResult {
            name: item.full_name,
            url: item.html_url,
            stars: item.stargazers_count,
            description: non_blank(item.description).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub login: String,
    pub url: String,
    pub avatar: String,
    pub bio: String,
    pub repos: u64,
    pub followers: u64,
    pub following: u64,
}

impl UserProfile {
    /// Flatten an API user. A missing display name falls back to the username that was asked for.
    pub(super) fn from_api(item: UserItem, requested: &str) -> Self {
        UserProfile {
            name: non_blank(item.name).unwrap_or_else(|| requested.to_string()),
            login: item.login,
            url: item.html_url,
            avatar: item.avatar_url,
            bio: non_blank(item.bio).unwrap_or_else(|| NO_BIO.to_string()),
            repos: item.public_repos,
            followers: item.followers,
            following: item.following,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
