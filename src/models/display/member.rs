//! Member display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Member;

/// Team member display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "SCREEN NAME")]
    pub screen_name: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "POSTS")]
    pub posts_count: u64,
}

impl From<Member> for MemberDisplay {
    fn from(member: Member) -> Self {
        Self {
            screen_name: member.screen_name,
            name: member.name,
            email: member.email.unwrap_or_else(|| "-".to_string()),
            posts_count: member.posts_count,
        }
    }
}
