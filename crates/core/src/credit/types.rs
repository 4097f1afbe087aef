//! Credit data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_shared::types::{CategoryId, CreditId, UserId};

/// Stored terms of one credit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditDetail {
    /// Credit line ID.
    pub id: CreditId,
    /// Owning user.
    pub user_id: UserId,
    /// The bill category the monthly payment is booked under.
    pub category_id: CategoryId,
    /// Principal borrowed.
    pub borrowed_amount: Decimal,
    /// Total interest over the loan's lifetime.
    pub interest_amount: Decimal,
    /// Contractual duration in months.
    pub duration_months: u32,
    /// Nominal interest rate, in percent.
    pub interest_rate: Decimal,
    /// Contractual monthly payment.
    pub monthly_payment: Decimal,
    /// Amount already paid back.
    pub already_repaid: Decimal,
}

/// Derived repayment state of one credit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSchedule {
    /// Principal plus lifetime interest.
    pub total_due: Decimal,
    /// `total_due - already_repaid`; negative once over-paid.
    pub remaining: Decimal,
    /// Repaid share of `total_due`, rounded to 2 decimal places; exactly
    /// 0 when `total_due` is zero.
    pub repaid_percent: Decimal,
    /// Months of payments left at the contractual rate, rounded up;
    /// `None` when the monthly payment is not positive.
    pub months_remaining: Option<u32>,
}

/// One credit line with its derived schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLineStatus {
    /// Credit line ID.
    pub credit_id: CreditId,
    /// The bill category the line is tied to.
    pub category_id: CategoryId,
    /// Derived repayment state.
    pub schedule: CreditSchedule,
}

/// All of a user's credit lines with portfolio totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditOverview {
    /// Per-line status, in snapshot order.
    pub lines: Vec<CreditLineStatus>,
    /// Sum of remaining amounts.
    pub total_remaining: Decimal,
    /// Sum of contractual monthly payments across open lines (remaining
    /// amount still positive).
    pub total_monthly_payment: Decimal,
}
