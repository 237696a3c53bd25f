pub mod analyzer;
pub mod cli;
pub mod command;
pub mod error;
pub mod registry;
pub mod report;
pub mod result;

pub use error::WrappedError;
pub use result::Result;
