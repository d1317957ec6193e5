//! Post models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Author reference embedded in posts (`created_by` / `updated_by`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub screen_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub icon: String,
}

/// A single document
///
/// List responses omit the counters and flags at the bottom, so those
/// default when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post number, unique within the team
    pub number: u64,

    pub name: String,

    /// Category path, name and tags, e.g. `dev/2015/05/10/hi! #api`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub full_name: String,

    /// Work in progress
    #[serde(default)]
    pub wip: bool,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub body_md: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub body_html: String,

    pub created_at: DateTime<FixedOffset>,

    pub updated_at: DateTime<FixedOffset>,

    /// Commit message of the latest revision
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub message: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub revision_number: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Author>,

    /// `stock` or `flow`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub comments_count: u64,

    #[serde(default)]
    pub tasks_count: u64,

    #[serde(default)]
    pub done_tasks_count: u64,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub watchers_count: u64,

    #[serde(default)]
    pub star: bool,

    #[serde(default)]
    pub watch: bool,
}

/// One page of posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posts {
    pub posts: Vec<Post>,

    #[serde(default)]
    pub prev_page: Option<u32>,

    #[serde(default)]
    pub next_page: Option<u32>,

    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,

    #[serde(default)]
    pub max_per_page: u32,
}

/// Fields accepted when creating a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body_md: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub wip: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
impl NewPost {
    /// Create a post payload with just a name; everything else defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Request body for post creation: `{"post": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest<'a> {
    pub post: &'a NewPost,
}
