//! Wrapped statistics aggregation.
//!
//! Reduces a normalized release sequence to the single statistics record
//! for one package and year: counts by tier, busiest months, release
//! candidate ratios, and the longest gap between stable releases.
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::analyzer::release::{ReleaseRecord, ReleaseTier};

/// Aggregate statistics for one package and year. Recomputed from scratch
/// on every query; carries no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrappedStats {
    /// Report year echoed back from the query.
    pub year: i32,
    /// Package name echoed back from the query.
    pub package_name: String,
    /// Count of tracked releases (stable or release candidate) in the year.
    pub total_releases: usize,
    /// Count of stable tracked releases.
    pub stable_count: usize,
    /// Count of release candidate tracked releases.
    pub rc_count: usize,
    /// Count of stable major releases.
    pub majors: usize,
    /// Count of stable minor releases.
    pub minors: usize,
    /// Count of stable patch releases.
    pub patches: usize,
    /// Display name of the month with the most tracked releases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_month_overall: Option<String>,
    /// Display name of the month with the most stable releases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_month_stable: Option<String>,
    /// Display name of the month with the most stable patch releases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_month_patches: Option<String>,
    /// Release candidates per stable release sharing the same base
    /// version, rounded to 2 decimal places. Zero when there are no stable
    /// releases.
    pub average_rc_per_stable: f64,
    /// Longest whole-day gap between consecutive stable releases. Absent
    /// when fewer than two stable releases exist in the year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_gap_days: Option<i64>,
}

/// Compute wrapped statistics for one target year from the full normalized
/// release sequence of a package.
///
/// The whole record is produced from one consistent snapshot of the
/// filtered releases; no field is ever computed against a different
/// subset. Calling this twice with the same inputs yields identical
/// results.
pub fn compute_wrapped_stats(
    package_name: &str,
    releases: &[ReleaseRecord],
    year: i32,
) -> WrappedStats {
    let tracked: Vec<&ReleaseRecord> = releases
        .iter()
        .filter(|r| r.year == year && r.is_tracked())
        .collect();

    let stable: Vec<&ReleaseRecord> =
        tracked.iter().filter(|r| r.stable).copied().collect();

    let rcs: Vec<&ReleaseRecord> = tracked
        .iter()
        .filter(|r| r.release_candidate)
        .copied()
        .collect();

    let majors = count_tier(&stable, ReleaseTier::Major);
    let minors = count_tier(&stable, ReleaseTier::Minor);
    let patches = count_tier(&stable, ReleaseTier::Patch);

    let stable_patches: Vec<&ReleaseRecord> = stable
        .iter()
        .filter(|r| r.tier == ReleaseTier::Patch)
        .copied()
        .collect();

    WrappedStats {
        year,
        package_name: package_name.to_string(),
        total_releases: tracked.len(),
        stable_count: stable.len(),
        rc_count: rcs.len(),
        majors,
        minors,
        patches,
        busiest_month_overall: busiest_month(&tracked),
        busiest_month_stable: busiest_month(&stable),
        busiest_month_patches: busiest_month(&stable_patches),
        average_rc_per_stable: average_rc_per_stable(&stable, &rcs),
        longest_gap_days: longest_gap_days(&stable),
    }
}

fn count_tier(releases: &[&ReleaseRecord], tier: ReleaseTier) -> usize {
    releases.iter().filter(|r| r.tier == tier).count()
}

/// Group releases by month key in first-occurrence order. The explicit
/// insertion-ordered grouping makes the busiest-month tie-break
/// deterministic: on equal counts the month encountered first in the
/// sequence wins.
fn group_by_month(releases: &[&ReleaseRecord]) -> Vec<(String, usize)> {
    let mut groups: Vec<(String, usize)> = vec![];

    for release in releases {
        match groups.iter_mut().find(|(key, _)| *key == release.month_key) {
            Some((_, count)) => *count += 1,
            None => groups.push((release.month_key.clone(), 1)),
        }
    }

    groups
}

/// Display name of the month with the strictly greatest release count, or
/// `None` when there are no releases to group.
fn busiest_month(releases: &[&ReleaseRecord]) -> Option<String> {
    let groups = group_by_month(releases);

    let mut best_key: Option<&str> = None;
    let mut max = 0;

    for (month_key, count) in &groups {
        if *count > max {
            max = *count;
            best_key = Some(month_key);
        }
    }

    best_key.and_then(month_key_to_name)
}

/// Converts "YYYY-MM" to the display month name ("2024-03" to "March").
fn month_key_to_name(month_key: &str) -> Option<String> {
    let date =
        NaiveDate::parse_from_str(&format!("{month_key}-01"), "%Y-%m-%d")
            .ok()?;
    Some(date.format("%B").to_string())
}

/// Release candidates per stable release, matched by base version and
/// rounded to 2 decimal places. Deliberately `0` rather than absent when
/// there are no stable releases.
fn average_rc_per_stable(
    stable: &[&ReleaseRecord],
    rcs: &[&ReleaseRecord],
) -> f64 {
    if stable.is_empty() {
        return 0.0;
    }

    let mut rc_count_by_base: HashMap<&str, usize> = HashMap::new();

    for rc in rcs {
        *rc_count_by_base.entry(rc.base_version.as_str()).or_insert(0) += 1;
    }

    let total_rc_for_stable: usize = stable
        .iter()
        .map(|s| {
            rc_count_by_base
                .get(s.base_version.as_str())
                .copied()
                .unwrap_or(0)
        })
        .sum();

    let average = total_rc_for_stable as f64 / stable.len() as f64;

    (average * 100.0).round() / 100.0
}

/// Longest gap in whole days between consecutive stable releases sorted by
/// publish time. `None` with fewer than two stable releases.
fn longest_gap_days(stable: &[&ReleaseRecord]) -> Option<i64> {
    if stable.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&ReleaseRecord> = stable.to_vec();
    sorted.sort_by_key(|r| r.published_at);

    sorted
        .windows(2)
        .map(|pair| (pair[1].published_at - pair[0].published_at).num_days())
        .max()
}
