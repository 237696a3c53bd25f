//! Registry document normalization tests.
//!
//! Tests for:
//! - Pairing versions with publish timestamps
//! - Silent exclusion of malformed entries
//! - Document order preservation
//! - UTC year and month key derivation

use serde_json::json;

use super::common::record;
use crate::{analyzer::normalize_releases, registry::types::Packument};

fn packument(value: serde_json::Value) -> Packument {
    Packument::from_value(value)
}

#[test]
fn normalizes_versions_with_publish_times() {
    let packument = packument(json!({
        "time": {
            "created": "2023-12-01T00:00:00.000Z",
            "modified": "2024-02-20T00:00:00.000Z",
            "1.0.0": "2024-01-05T00:00:00.000Z",
            "1.1.0": "2024-02-10T00:00:00.000Z",
        },
        "versions": {
            "1.0.0": {},
            "1.1.0": {},
        },
    }));

    let releases = normalize_releases(&packument);

    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0].version, "1.0.0");
    assert_eq!(releases[0].year, 2024);
    assert_eq!(releases[0].month_key, "2024-01");
    assert_eq!(releases[1].version, "1.1.0");
    assert_eq!(releases[1].month_key, "2024-02");
}

#[test]
fn skips_versions_without_publish_time() {
    let packument = packument(json!({
        "time": {
            "1.0.0": "2024-01-05T00:00:00.000Z",
        },
        "versions": {
            "1.0.0": {},
            "1.1.0": {},
        },
    }));

    let releases = normalize_releases(&packument);

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].version, "1.0.0");
}

#[test]
fn skips_non_semver_version_keys() {
    let packument = packument(json!({
        "time": {
            "latest": "2024-01-05T00:00:00.000Z",
            "next-experimental": "2024-01-06T00:00:00.000Z",
            "2.0.0": "2024-01-07T00:00:00.000Z",
        },
        "versions": {
            "latest": {},
            "next-experimental": {},
            "2.0.0": {},
        },
    }));

    let releases = normalize_releases(&packument);

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].version, "2.0.0");
}

#[test]
fn skips_invalid_publish_timestamps() {
    let packument = packument(json!({
        "time": {
            "1.0.0": "not-a-date",
            "1.1.0": "",
            "1.2.0": 1704412800,
            "2.0.0": "2024-01-05T00:00:00.000Z",
        },
        "versions": {
            "1.0.0": {},
            "1.1.0": {},
            "1.2.0": {},
            "2.0.0": {},
        },
    }));

    let releases = normalize_releases(&packument);

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].version, "2.0.0");
}

#[test]
fn preserves_document_order() {
    // registries list versions in publish order, but nothing guarantees it
    let packument = packument(json!({
        "time": {
            "2.0.0": "2024-03-01T00:00:00.000Z",
            "1.0.0": "2024-01-05T00:00:00.000Z",
            "1.5.0": "2024-02-10T00:00:00.000Z",
        },
        "versions": {
            "2.0.0": {},
            "1.0.0": {},
            "1.5.0": {},
        },
    }));

    let releases = normalize_releases(&packument);

    let versions: Vec<&str> =
        releases.iter().map(|r| r.version.as_str()).collect();
    assert_eq!(versions, ["2.0.0", "1.0.0", "1.5.0"]);
}

#[test]
fn derives_year_and_month_in_utc() {
    // published late on new year's eve in a western offset lands in
    // january of the following year once converted to utc
    let release = record("1.0.0", "2023-12-31T23:30:00-05:00");

    assert_eq!(release.year, 2024);
    assert_eq!(release.month_key, "2024-01");
}

#[test]
fn empty_document_yields_no_releases() {
    let packument = packument(json!({}));
    assert!(normalize_releases(&packument).is_empty());
}
