//! Budget period types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-user configuration of where a budget period starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    /// Day of month (1-31) the period starts on; `None` means plain
    /// calendar months.
    pub start_day: Option<u32>,
    /// When true, the period for month M begins on `start_day` of month
    /// M-1 instead of month M.
    pub starts_before_month: bool,
}

impl PeriodConfig {
    /// Plain calendar months, first through last day.
    #[must_use]
    pub const fn calendar() -> Self {
        Self {
            start_day: None,
            starts_before_month: false,
        }
    }

    /// A period anchored on a custom start day.
    #[must_use]
    pub const fn anchored(start_day: u32, starts_before_month: bool) -> Self {
        Self {
            start_day: Some(start_day),
            starts_before_month,
        }
    }
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self::calendar()
    }
}

/// A resolved budget period: an inclusive date range standing in for one
/// "month" of budgeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
    /// The calendar month (1-12) this period stands in for.
    pub month: u32,
    /// The calendar year this period stands in for.
    pub year: i32,
}

impl BudgetPeriod {
    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the period.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
