//! Team, stats and member models

use serde::{Deserialize, Serialize};

/// Team workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team slug
    pub name: String,

    /// `open` or `closed`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub privacy: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,

    /// Icon URL
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub icon: String,

    /// Team URL
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url: String,
}

/// Team activity counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamStats {
    pub members: u64,
    pub posts: u64,
    pub posts_wip: u64,
    pub posts_shipped: u64,
    pub comments: u64,
    pub stars: u64,
    pub daily_active_users: u64,
    pub weekly_active_users: u64,
    pub monthly_active_users: u64,
}

/// Team member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Display name
    pub name: String,

    /// Account handle
    pub screen_name: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub icon: String,

    /// Only visible to team owners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub posts_count: u64,
}

/// One page of team members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMembers {
    pub members: Vec<Member>,

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
