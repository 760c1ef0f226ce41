//! matrix-e2ee-filter core: identifiers, event shapes, power levels, verdicts.
//!
//! This crate defines the data model and error surface shared by the policy
//! module, host adapters, and tooling. It carries no runtime dependencies so
//! it can be embedded in any host event pipeline.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A malformed identifier or event must surface as `FilterError`/`Result`
//! so one bad event never takes down the host pipeline.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod identifier;
pub mod verdict;

/// Log target shared by every record this filter emits.
pub const LOG_TARGET: &str = "matrix_e2ee_filter";

pub use error::{ExtractionError, FilterError, Result};
pub use verdict::{DenyReason, Verdict};
