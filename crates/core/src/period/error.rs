//! Period resolution error types.

use thiserror::Error;

/// Errors raised while resolving a budget period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month outside 1-12.
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    /// Year outside the supported range.
    #[error("Year must be between 2000 and 2100, got {0}")]
    InvalidYear(i32),

    /// Configured start day outside 1-31.
    #[error("Period start day must be between 1 and 31, got {0}")]
    InvalidStartDay(u32),

    /// A period boundary does not exist in the calendar.
    ///
    /// Start days of 29-31 cannot be materialized in every month; the
    /// resolver does not clamp, it reports the boundary it could not build.
    #[error("No such calendar date: {year:04}-{month:02}-{day:02}")]
    UnrepresentableDate {
        /// Year of the boundary that failed to resolve.
        year: i32,
        /// Month of the boundary that failed to resolve.
        month: u32,
        /// Day-of-month that does not exist in that month.
        day: u32,
    },
}
