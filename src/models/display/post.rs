//! Post display model

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::models::Post;

const MAX_NAME_WIDTH: usize = 40;

/// Post display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PostDisplay {
    #[tabled(rename = "#")]
    pub number: u64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "WIP")]
    pub wip: String,

    #[tabled(rename = "UPDATED")]
    pub updated_at: String,
}

impl From<Post> for PostDisplay {
    fn from(post: Post) -> Self {
        Self {
            number: post.number,
            name: truncate_string(&post.name, MAX_NAME_WIDTH),
            category: post.category.unwrap_or_else(|| "-".to_string()),
            wip: if post.wip { "yes" } else { "no" }.to_string(),
            updated_at: post.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}
