//! esa API client

use async_trait::async_trait;

use crate::error::Result;

pub mod esa;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use esa::{ClientConfig, EsaClient};
#[cfg(test)]
pub use mock::MockEsaClient;

use models::{Category, NewPost, Post, Posts, Team, TeamMembers, TeamStats};

/// esa API operations for a single team
///
/// Every method performs exactly one HTTP round trip.
#[async_trait]
pub trait EsaApi: Send + Sync {
    /// Get the team record
    async fn get_team(&self) -> Result<Team>;

    /// Get team activity counters
    async fn get_team_stats(&self) -> Result<TeamStats>;

    /// Get one page of team members (pages start at 1)
    async fn get_team_members(&self, page: u32) -> Result<TeamMembers>;

    /// Search posts. Query terms are joined with spaces using esa search
    /// syntax (`in:dev wip:false`); an empty query lists every post.
    async fn get_posts(&self, page: u32, query: &[String]) -> Result<Posts>;

    /// Get a single post by number
    async fn get_post(&self, number: u64) -> Result<Post>;

    /// Create a post.
    ///
    /// Fails with a validation error, without sending anything, when the
    /// name is empty. Only `201 Created` counts as success.
    async fn create_post(&self, post: &NewPost) -> Result<Post>;

    /// Get the team's top-level category trees
    async fn get_categories(&self) -> Result<Vec<Category>>;
}
