//! Adapters implementing `NavPort` against external NAV providers

pub mod mfapi;

pub use mfapi::{MfApiAdapter, MfApiConfig};
