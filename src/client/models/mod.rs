//! esa API data models
//!
//! Records mirror the JSON shapes returned by the API, organized by
//! resource type.

use serde::{Deserialize, Deserializer};

mod category;
mod post;
mod team;

pub use category::{Categories, Category, flatten_categories};
pub use post::{Author, CreatePostRequest, NewPost, Post, Posts};
pub use team::{Member, Team, TeamMembers, TeamStats};

/// Decode an explicit JSON `null` as the field's default value.
///
/// Pair with `#[serde(default)]` so a missing key defaults as well.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
