//! JSON output formatting
//!
//! Every JSON document printed by the CLI is wrapped as
//! `{"data": ..., "meta": {"timestamp": ..., "version": ...}}`.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Envelope around printed data
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

/// When and by which CLI version the document was produced
#[derive(Debug, Serialize)]
pub struct Metadata {
    pub timestamp: String,
    pub version: &'static str,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
