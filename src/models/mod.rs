//! Display models for CLI output
//!
//! This module converts API records into CLI-friendly display formats.

pub mod display;

pub use display::{MemberDisplay, PostDisplay};
