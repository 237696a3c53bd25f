//! Wrapped report rendering.
//!
//! Renders a pair of yearly statistics (report year and the year before)
//! through a Tera template, or serializes them directly for JSON output.
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::{analyzer::stats::WrappedStats, result::Result};

/// Default report body template.
pub const DEFAULT_BODY: &str = r#"# ✨ NPM Wrapped ✨

## {{ current.package_name }} — {{ current.year }}

- Total releases: {{ current.total_releases }}
- Stable releases: {{ current.stable_count }}
- RCs: {{ current.rc_count }}
- Avg RCs / stable: {{ current.average_rc_per_stable }}

### Stable breakdown

- Majors: {{ current.majors }}
- Minors: {{ current.minors }}
- Patches: {{ current.patches }}

### Monthly highlights

- Busiest month: {{ current.busiest_month_overall | default(value="—") }}
- Most stable releases: {{ current.busiest_month_stable | default(value="—") }}
- Patch-iest month: {{ current.busiest_month_patches | default(value="—") }}
- Longest stable gap: {% if current.longest_gap_days is defined %}{{ current.longest_gap_days }} days{% else %}—{% endif %}

### Last year ({{ previous.year }})

- Total releases: {{ previous.total_releases }}
- Stable releases: {{ previous.stable_count }}
- RCs: {{ previous.rc_count }}
- Majors / Minors / Patches: {{ previous.majors }}/{{ previous.minors }}/{{ previous.patches }}
"#;

/// Matches 3 or more consecutive new lines
static EXTRA_NEW_LINES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Wrapped statistics rendered together: the report year and the year
/// before it, computed from the same normalized release sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrappedReport {
    /// Statistics for the report year.
    pub current: WrappedStats,
    /// Statistics for the year before the report year.
    pub previous: WrappedStats,
}

/// Configuration for report rendering.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Tera template string for the report body.
    pub body: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            body: DEFAULT_BODY.into(),
        }
    }
}

/// Render the report through its Tera template. Optional statistics that
/// are absent render as an em dash placeholder.
pub fn render(report: &WrappedReport, config: &ReportConfig) -> Result<String> {
    let context = tera::Context::from_serialize(report)?;

    let rendered = tera::Tera::one_off(&config.body, &context, false)?;

    Ok(strip_extra_lines(rendered.trim()))
}

/// Normalize report formatting by replacing consecutive blank lines (3+)
/// with double newlines and trimming whitespace.
fn strip_extra_lines(report: &str) -> String {
    EXTRA_NEW_LINES_REGEX
        .replace_all(report, "\n\n")
        .trim()
        .to_string()
}
