//! Maps (period configuration, month, year) to a concrete date range.

use chrono::NaiveDate;

use super::error::PeriodError;
use super::types::{BudgetPeriod, PeriodConfig};

/// Earliest supported budget year.
pub const MIN_YEAR: i32 = 2000;
/// Latest supported budget year.
pub const MAX_YEAR: i32 = 2100;

/// Resolves the inclusive date range standing in for `(month, year)` under
/// the given period configuration.
///
/// The end of a period is always the day before the next period's start,
/// never a fixed day count, so period lengths track the calendar.
///
/// Start days of 29-31 are not clamped: a boundary that does not exist in
/// the anchoring month (e.g., February 31st) yields
/// [`PeriodError::UnrepresentableDate`].
///
/// # Errors
///
/// Returns [`PeriodError`] for out-of-range arguments or an
/// unrepresentable period boundary.
pub fn resolve(config: &PeriodConfig, month: u32, year: i32) -> Result<BudgetPeriod, PeriodError> {
    if !(1..=12).contains(&month) {
        return Err(PeriodError::InvalidMonth(month));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(PeriodError::InvalidYear(year));
    }

    let (start, end) = match config.start_day {
        None => {
            let start = day_of(year, month, 1)?;
            let (next_year, next_month) = month_after(year, month);
            (start, end_before(next_year, next_month, 1)?)
        }
        Some(day) => {
            if !(1..=31).contains(&day) {
                return Err(PeriodError::InvalidStartDay(day));
            }
            if config.starts_before_month {
                let (prev_year, prev_month) = month_before(year, month);
                (day_of(prev_year, prev_month, day)?, end_before(year, month, day)?)
            } else {
                let (next_year, next_month) = month_after(year, month);
                (day_of(year, month, day)?, end_before(next_year, next_month, day)?)
            }
        }
    };

    Ok(BudgetPeriod {
        start,
        end,
        month,
        year,
    })
}

/// Checked date construction; the no-clamping policy lives here.
fn day_of(year: i32, month: u32, day: u32) -> Result<NaiveDate, PeriodError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(PeriodError::UnrepresentableDate { year, month, day })
}

/// One day before the next period's start at `(year, month, day)`.
fn end_before(year: i32, month: u32, day: u32) -> Result<NaiveDate, PeriodError> {
    day_of(year, month, day)?
        .pred_opt()
        .ok_or(PeriodError::UnrepresentableDate { year, month, day })
}

/// Calendar month after `(year, month)`, rolling December into January.
fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Calendar month before `(year, month)`, rolling January into December.
fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}
