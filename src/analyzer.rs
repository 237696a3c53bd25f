//! Release normalization and wrapped statistics.
//!
//! Converts raw registry publish history into normalized release records,
//! classifies them into semantic version tiers, and aggregates per-year
//! statistics: busiest months, release candidate ratios, and gaps between
//! stable releases.

use log::*;

use crate::registry::types::Packument;

pub mod release;
pub mod stats;

use release::ReleaseRecord;

/// Normalize a registry package document into release records.
///
/// Walks the document's version list in document order, pairing each
/// version with its publish timestamp. Versions that fail semver parsing,
/// lack a publish timestamp, or carry an unparseable timestamp are
/// silently excluded. Non-version keys in the `time` mapping such as
/// `created` and `modified` never match a version and fall out naturally.
///
/// The output preserves document order, which is not necessarily
/// chronological. Aggregation sorts explicitly wherever order matters.
pub fn normalize_releases(packument: &Packument) -> Vec<ReleaseRecord> {
    let mut releases = vec![];

    for version in packument.versions() {
        let Some(published) = packument.publish_time(version) else {
            debug!("skipping version without publish time: {version}");
            continue;
        };

        match ReleaseRecord::parse_entry(version, published) {
            Some(record) => releases.push(record),
            None => {
                debug!(
                    "skipping unparseable version entry: {version} ({published})"
                );
            }
        }
    }

    releases
}
