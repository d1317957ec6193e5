//! Mock esa API client for testing
//!
//! Provides a mock implementation of [`EsaApi`] for unit testing CLI
//! handlers without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::EsaApi;
use super::models::{Category, NewPost, Post, Posts, Team, TeamMembers, TeamStats};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
/// Operations without a configured response fail with `InvalidResponse`.
#[derive(Default)]
pub struct MockEsaClient {
    team: Arc<Mutex<Option<Team>>>,
    stats: Arc<Mutex<Option<TeamStats>>>,
    members: Arc<Mutex<Option<TeamMembers>>>,
    posts: Arc<Mutex<Option<Posts>>>,
    post: Arc<Mutex<Option<Post>>>,
    categories: Arc<Mutex<Vec<Category>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Payloads passed to create_post
    created: Arc<Mutex<Vec<NewPost>>>,
    /// Number of operations invoked
    calls: Arc<Mutex<usize>>,
}

impl MockEsaClient {
    /// Create a new mock client with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_team(self, team: Team) -> Self {
        *self.team.lock().await = Some(team);
        self
    }

    pub async fn with_stats(self, stats: TeamStats) -> Self {
        *self.stats.lock().await = Some(stats);
        self
    }

    pub async fn with_members(self, members: TeamMembers) -> Self {
        *self.members.lock().await = Some(members);
        self
    }

    pub async fn with_posts(self, posts: Posts) -> Self {
        *self.posts.lock().await = Some(posts);
        self
    }

    /// Post returned by get_post and create_post
    pub async fn with_post(self, post: Post) -> Self {
        *self.post.lock().await = Some(post);
        self
    }

    pub async fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.lock().await = categories;
        self
    }

    /// Configure an error to return on the next API call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Payloads received by create_post, in call order.
    pub async fn created_posts(&self) -> Vec<NewPost> {
        self.created.lock().await.clone()
    }

    /// Total number of operations invoked.
    pub async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }

    /// Count the call and return the pending error, if any.
    async fn check_error(&self) -> Result<()> {
        *self.calls.lock().await += 1;
        match self.error.lock().await.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

fn configured<T: Clone>(value: &Option<T>, what: &str) -> Result<T> {
    value
        .clone()
        .ok_or_else(|| ApiError::InvalidResponse(format!("mock has no {} configured", what)).into())
}

#[async_trait]
impl EsaApi for MockEsaClient {
    async fn get_team(&self) -> Result<Team> {
        self.check_error().await?;
        configured(&*self.team.lock().await, "team")
    }

    async fn get_team_stats(&self) -> Result<TeamStats> {
        self.check_error().await?;
        configured(&*self.stats.lock().await, "stats")
    }

    async fn get_team_members(&self, _page: u32) -> Result<TeamMembers> {
        self.check_error().await?;
        configured(&*self.members.lock().await, "members")
    }

    async fn get_posts(&self, _page: u32, _query: &[String]) -> Result<Posts> {
        self.check_error().await?;
        configured(&*self.posts.lock().await, "posts")
    }

    async fn get_post(&self, _number: u64) -> Result<Post> {
        self.check_error().await?;
        configured(&*self.post.lock().await, "post")
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        if post.name.is_empty() {
            return Err(ApiError::Validation("post name is required".to_string()).into());
        }
        self.check_error().await?;
        self.created.lock().await.push(post.clone());
        configured(&*self.post.lock().await, "post")
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.check_error().await?;
        Ok(self.categories.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_mock_client_default_empty_categories() {
        let mock = MockEsaClient::new();

        let categories = mock.get_categories().await.unwrap();
        assert!(categories.is_empty());
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_client_returns_configured_team_and_stats() {
        let team = Team {
            name: "docs".to_string(),
            privacy: "open".to_string(),
            description: String::new(),
            icon: String::new(),
            url: "https://docs.esa.io/".to_string(),
        };
        let stats = TeamStats {
            members: 20,
            ..TeamStats::default()
        };
        let mock = MockEsaClient::new()
            .with_team(team)
            .await
            .with_stats(stats)
            .await;

        assert_eq!(mock.get_team().await.unwrap().name, "docs");
        assert_eq!(mock.get_team_stats().await.unwrap().members, 20);
        assert_eq!(mock.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_mock_client_unconfigured_record_fails() {
        let mock = MockEsaClient::new();
        assert!(mock.get_team().await.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_with_error_is_consumed() {
        let mock = MockEsaClient::new()
            .with_error(ApiError::Service {
                status: StatusCode::UNAUTHORIZED,
                body: "unauthorized".to_string(),
            })
            .await;

        assert!(mock.get_categories().await.is_err());
        assert!(mock.get_categories().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_rejects_empty_name_without_calling() {
        let mock = MockEsaClient::new();

        let result = mock.create_post(&NewPost::default()).await;

        assert!(result.is_err());
        assert_eq!(mock.call_count().await, 0);
    }
}
