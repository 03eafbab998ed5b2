//! Fund Profit Domain
//!
//! This crate evaluates a lump-sum mutual-fund investment: how many units the
//! capital bought, what they were worth on redemption, and the resulting profit.
//!
//! # Key Concepts
//!
//! - **Scheme**: A mutual fund plan, addressed by an opaque scheme code
//! - **NAV**: Net Asset Value per unit, published daily by the provider
//! - **Holding Period**: The dates between purchase and redemption
//! - **CAGR**: Compound annual growth rate over the holding period
//!
//! # Flow
//!
//! `ProfitService` validates an `InvestmentRequest`, fetches the NAV on the start
//! and end dates through a `NavPort`, and runs the `InvestmentCalculator`.
//! Every failure is returned as a `FundError`; nothing is defaulted silently.

pub mod nav;
pub mod ports;
pub mod investment;
pub mod service;
pub mod adapters;
pub mod error;

pub use nav::{NavQuote, SchemeCode};
pub use ports::NavPort;
pub use investment::{InvestmentCalculator, InvestmentRequest, InvestmentResult};
pub use service::{FetchMode, ProfitService};
pub use adapters::{MfApiAdapter, MfApiConfig};
pub use error::FundError;
