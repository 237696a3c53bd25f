//! Command execution for npm-wrapped.
//!
//! A single command drives the whole query: validate arguments, fetch the
//! package's publish history once, normalize it, aggregate statistics for
//! the report year and the year before, and print the result.
//!
//! # Error Handling
//!
//! The command uses the unified error handling system provided by the
//! `result` module. A failed fetch is terminal for the query: no partial
//! statistics are ever shown, and the user resubmits. Malformed individual
//! registry entries are not errors; the normalizer excludes them silently.

/// Wrapped report command: fetch, normalize, aggregate, render.
pub mod wrapped;
