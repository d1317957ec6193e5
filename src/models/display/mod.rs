//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod member;
mod post;

pub use member::MemberDisplay;
pub use post::PostDisplay;
