//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fund profit test suite.
//!
//! # Modules
//!
//! - `fixtures`: An in-memory `NavPort` and sample NAV data
//! - `generators`: Property-based test generators using proptest
//! - `assertions`: Custom assertion helpers for decimal and JSON values

pub mod fixtures;
pub mod generators;
pub mod assertions;

pub use fixtures::*;
pub use generators::*;
pub use assertions::*;
