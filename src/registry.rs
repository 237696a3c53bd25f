//! Unified interface for npm-compatible package registries.
//!
//! Provides token-based authentication, packument retrieval, and the raw
//! document types the release normalizer consumes.

/// Configuration for registry connections.
pub mod config;

/// npm registry client implementation using reqwest.
pub mod npm;

/// Common trait for registry data sources.
pub mod traits;

/// Raw registry document types.
pub mod types;
