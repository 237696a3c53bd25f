//! Data types for normalized release records.
use chrono::{DateTime, Datelike, Utc};
use semver::Version;

/// Semantic version tier of a release, derived from the base
/// `major.minor.patch` triple alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseTier {
    Major,
    Minor,
    Patch,
}

impl ReleaseTier {
    /// Classify a parsed version by its minor and patch components. Any
    /// `x.0.0` base counts as a major release, including `0.0.0`.
    pub fn classify(version: &Version) -> Self {
        if version.minor == 0 && version.patch == 0 {
            return Self::Major;
        }
        if version.patch == 0 {
            return Self::Minor;
        }
        Self::Patch
    }
}

/// One published version of a package, normalized from the registry
/// document. Records only exist for versions that parse as valid semantic
/// versions and carry a valid publish timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    /// Full published version string, including any prerelease label.
    pub version: String,
    /// The `major.minor.patch` triple with prerelease and build metadata
    /// stripped.
    pub base_version: String,
    /// Version tier derived from the base version.
    pub tier: ReleaseTier,
    /// Whether the version has no prerelease component.
    pub stable: bool,
    /// Whether the first prerelease identifier is `rc`, case-insensitively.
    pub release_candidate: bool,
    /// Publish timestamp in UTC.
    pub published_at: DateTime<Utc>,
    /// Calendar year of the publish timestamp.
    pub year: i32,
    /// Year-month grouping key (e.g. "2024-03").
    pub month_key: String,
}

impl ReleaseRecord {
    /// Parse one registry entry into a release record. Returns `None` when
    /// the version string is not valid semver or the publish timestamp is
    /// not a valid instant. Registries legitimately contain such entries,
    /// so a failed parse is an exclusion, not an error.
    pub fn parse_entry(version: &str, published: &str) -> Option<Self> {
        let parsed = Version::parse(version).ok()?;

        let base_version = format!(
            "{}.{}.{}",
            parsed.major, parsed.minor, parsed.patch
        );

        let stable = parsed.pre.is_empty();

        let release_candidate = !parsed.pre.is_empty()
            && parsed
                .pre
                .as_str()
                .split('.')
                .next()
                .unwrap_or("")
                .eq_ignore_ascii_case("rc");

        let published_at = DateTime::parse_from_rfc3339(published)
            .ok()?
            .with_timezone(&Utc);

        Some(Self {
            version: version.to_string(),
            tier: ReleaseTier::classify(&parsed),
            base_version,
            stable,
            release_candidate,
            year: published_at.year(),
            month_key: published_at.format("%Y-%m").to_string(),
            published_at,
        })
    }

    /// Whether this release counts toward wrapped statistics. Only stable
    /// releases and release candidates are tracked; other prereleases
    /// (alpha, beta, etc.) are excluded from every statistic.
    pub fn is_tracked(&self) -> bool {
        self.stable || self.release_candidate
    }
}
