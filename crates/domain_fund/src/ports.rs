//! NAV Port Definition
//!
//! `NavPort` is the seam between the profit calculation and whatever publishes
//! NAV data. The production adapter talks to the mfapi REST service; tests plug
//! in an in-memory stub.

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{DomainPort, PortError};

use crate::nav::{NavQuote, SchemeCode};

/// Port for looking up the NAV of a scheme on a date
///
/// Implementations must not cache: every call reflects the provider's answer
/// at the time of the call.
#[async_trait]
pub trait NavPort: DomainPort {
    /// Fetches the NAV published for `scheme_code` on `date`
    ///
    /// # Errors
    ///
    /// - `PortError::Upstream` if the provider answered with a non-success status
    /// - `PortError::Transformation` if the answer carried no usable NAV
    /// - `PortError::Timeout` / `PortError::Connection` on transport failures
    async fn get_nav(
        &self,
        scheme_code: &SchemeCode,
        date: NaiveDate,
    ) -> Result<NavQuote, PortError>;
}
