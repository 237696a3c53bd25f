//! Common test utilities for analyzer tests.

use crate::analyzer::release::ReleaseRecord;

/// Parse a release record from a version and publish timestamp, panicking
/// on entries the tests expect to be valid.
pub fn record(version: &str, published: &str) -> ReleaseRecord {
    ReleaseRecord::parse_entry(version, published).unwrap_or_else(|| {
        panic!("expected valid release entry: {version} @ {published}")
    })
}

/// Midnight UTC timestamp string for a calendar date.
pub fn day(date: &str) -> String {
    format!("{date}T00:00:00.000Z")
}
