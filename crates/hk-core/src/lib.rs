//! # hk-core
//!
//! Shared error and result types for the histkit workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};

/// Crate version, re-exported so downstream artifacts can stamp themselves.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
