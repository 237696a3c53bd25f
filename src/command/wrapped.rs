//! Wrapped report command implementation.
use log::*;

use crate::{
    analyzer,
    analyzer::stats::compute_wrapped_stats,
    cli,
    registry::{npm::NpmRegistry, traits::Registry},
    report::{self, ReportConfig, WrappedReport},
    result::Result,
};

/// Execute the wrapped command: fetch a package's publish history and
/// print its year-in-review report.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let package = args.package_name()?;
    let year = args.report_year();

    let registry = NpmRegistry::new(args.get_registry_config())?;

    let wrapped = run(&registry, &package, year).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&wrapped)?);
    } else {
        println!("{}", report::render(&wrapped, &ReportConfig::default())?);
    }

    Ok(())
}

/// Fetch the package document once, then aggregate the same normalized
/// release sequence for the report year and the year before it.
pub async fn run(
    registry: &dyn Registry,
    package: &str,
    year: i32,
) -> Result<WrappedReport> {
    info!("fetching publish history for package: {package}");

    let packument = registry.get_packument(package).await?;

    let releases = analyzer::normalize_releases(&packument);

    info!("normalized {} releases for {package}", releases.len());

    let current = compute_wrapped_stats(package, &releases, year);
    let previous = compute_wrapped_stats(package, &releases, year - 1);

    Ok(WrappedReport { current, previous })
}
