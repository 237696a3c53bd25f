//! Error handling and result types for npm-wrapped.
//!
//! This module provides a unified error handling approach using the `color-eyre` crate,
//! which offers enhanced error reporting with context, suggestions, and colored output.
//!
//! All functions in npm-wrapped that can fail should return the `Result<T>` type defined
//! in this module, ensuring consistent error handling and reporting across the application.
//!
//! # Features
//!
//! - **Enhanced Error Display**: Automatic colorized error output with context
//! - **Error Suggestions**: Helpful suggestions for common error scenarios
//! - **Stack Traces**: Optional stack trace information for debugging
//! - **Error Context**: Ability to add context to errors as they propagate
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::result::Result;
//!
//! fn example_function() -> Result<String> {
//!     // Operations that might fail...
//!     Ok("success".to_string())
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout npm-wrapped.
///
/// This is a type alias for `color_eyre::eyre::Result<T>`, providing enhanced
/// error reporting capabilities including:
///
/// - Colorized error output in terminals
/// - Automatic error context and suggestions
/// - Optional stack trace information
/// - Chain-able error contexts using `.wrap_err()`
///
/// # Examples
///
/// ```rust,ignore
/// use crate::result::Result;
/// use color_eyre::eyre::Context;
///
/// async fn fetch_history(package: &str) -> Result<Packument> {
///     let response = client
///         .get(url)
///         .send()
///         .await
///         .wrap_err("Failed to reach the registry")?;
///
///     let document = response
///         .json()
///         .await
///         .wrap_err("Failed to decode registry response")?;
///
///     Ok(document)
/// }
/// ```
///
/// # Error Context
///
/// Use `.wrap_err()` to add context as errors propagate:
///
/// ```rust,ignore
/// fn render_report() -> Result<()> {
///     let rendered = render(&report, &config)
///         .wrap_err("Failed to render wrapped report")?;
///
///     println!("{rendered}");
///
///     Ok(())
/// }
/// ```
pub type Result<T> = EyreResult<T>;
