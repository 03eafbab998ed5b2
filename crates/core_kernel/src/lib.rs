//! Core Kernel - Foundational types shared by the fund profit service
//!
//! This crate provides the building blocks used across the domain and API crates:
//! - Temporal types for holding-period arithmetic
//! - Port error type and marker traits for adapters to external systems

pub mod temporal;
pub mod ports;

pub use temporal::{HoldingPeriod, TemporalError, DAYS_PER_YEAR};
pub use ports::{DomainPort, PortError};
