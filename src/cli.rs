//! CLI argument parsing and registry configuration.
use chrono::{Datelike, Utc};
use clap::Parser;
use secrecy::SecretString;
use std::env;

use crate::{
    error::WrappedError,
    registry::config::{DEFAULT_REGISTRY_URL, RegistryConfig},
    result::Result,
};

/// CLI arguments for the wrapped report.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Package to summarize (e.g. react or @scope/name).
    pub package: String,

    #[arg(long, short = 'y')]
    /// Report year. Defaults to the current UTC year.
    pub year: Option<i32>,

    #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
    /// Base URL of an npm-compatible registry.
    pub registry: String,

    #[arg(long, default_value = "")]
    /// Bearer token for registries that require authentication. Falls back
    /// to the NPM_TOKEN env var.
    pub registry_token: String,

    #[arg(long, default_value_t = false)]
    /// Print the report as pretty JSON instead of formatted text.
    pub json: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Validated package name with surrounding whitespace removed.
    pub fn package_name(&self) -> Result<String> {
        let name = self.package.trim();

        if name.is_empty() {
            return Err(WrappedError::invalid_args(
                "package name must not be blank",
            )
            .into());
        }

        Ok(name.to_string())
    }

    /// Report year, defaulting to the current UTC year. The aggregator
    /// itself never reads the clock; the default is resolved here.
    pub fn report_year(&self) -> i32 {
        self.year.unwrap_or_else(|| Utc::now().year())
    }

    /// Configure registry connection from CLI arguments.
    pub fn get_registry_config(&self) -> RegistryConfig {
        let mut token = self.registry_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("NPM_TOKEN")
        {
            token = env_var_token;
        }

        RegistryConfig {
            base_url: self.registry.clone(),
            token: if token.is_empty() {
                None
            } else {
                Some(SecretString::from(token))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI argument parsing and registry configuration.
    use super::*;

    fn args(package: &str) -> Args {
        Args {
            package: package.to_string(),
            year: None,
            registry: DEFAULT_REGISTRY_URL.to_string(),
            registry_token: "".to_string(),
            json: false,
            debug: false,
        }
    }

    /// Test package names are trimmed before use.
    #[test]
    fn trims_package_name() {
        let args = args("  react  ");
        assert_eq!(args.package_name().unwrap(), "react");
    }

    /// Test blank package names are rejected.
    #[test]
    fn rejects_blank_package_name() {
        let args = args("   ");
        let result = args.package_name();
        assert!(result.is_err());
    }

    /// Test scoped package names pass validation untouched.
    #[test]
    fn accepts_scoped_package_names() {
        let args = args("@angular/core");
        assert_eq!(args.package_name().unwrap(), "@angular/core");
    }

    /// Test the year flag takes precedence over the current year default.
    #[test]
    fn uses_year_flag_when_provided() {
        let mut args = args("react");
        args.year = Some(2021);
        assert_eq!(args.report_year(), 2021);
    }

    /// Test the report year defaults to the current UTC year.
    #[test]
    fn defaults_to_current_utc_year() {
        let args = args("react");
        assert_eq!(args.report_year(), Utc::now().year());
    }

    /// Test explicit tokens land in the registry configuration.
    #[test]
    fn carries_explicit_registry_token() {
        let mut args = args("react");
        args.registry_token = "secret-token".to_string();

        let config = args.get_registry_config();
        assert!(config.token.is_some());
        assert_eq!(config.base_url, DEFAULT_REGISTRY_URL);
    }

    /// Test custom registry URLs are carried through.
    #[test]
    fn carries_custom_registry_url() {
        let mut args = args("react");
        args.registry = "https://registry.example.com".to_string();

        let config = args.get_registry_config();
        assert_eq!(config.base_url, "https://registry.example.com");
    }
}
