//! Credit schedule derivations.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use centime_shared::types::UserId;

use super::types::{CreditDetail, CreditLineStatus, CreditOverview, CreditSchedule};

/// Derived repayment figures over stored credit lines.
pub struct CreditService;

impl CreditService {
    /// Derives the repayment state of one credit line.
    #[must_use]
    pub fn schedule(credit: &CreditDetail) -> CreditSchedule {
        let total_due = credit.borrowed_amount + credit.interest_amount;
        let remaining = total_due - credit.already_repaid;

        let repaid_percent = if total_due.is_zero() {
            Decimal::ZERO
        } else {
            (credit.already_repaid / total_due * Decimal::ONE_HUNDRED).round_dp(2)
        };

        let months_remaining = if credit.monthly_payment > Decimal::ZERO {
            if remaining <= Decimal::ZERO {
                Some(0)
            } else {
                (remaining / credit.monthly_payment).ceil().to_u32()
            }
        } else {
            None
        };

        CreditSchedule {
            total_due,
            remaining,
            repaid_percent,
            months_remaining,
        }
    }

    /// Derives every credit line of the user plus portfolio totals.
    ///
    /// The total monthly payment only counts open lines; a fully repaid
    /// loan no longer weighs on the monthly budget.
    #[must_use]
    pub fn overview(user_id: UserId, credits: &[CreditDetail]) -> CreditOverview {
        let mut lines = Vec::new();
        let mut total_remaining = Decimal::ZERO;
        let mut total_monthly_payment = Decimal::ZERO;

        for credit in credits.iter().filter(|c| c.user_id == user_id) {
            let schedule = Self::schedule(credit);

            total_remaining += schedule.remaining;
            if schedule.remaining > Decimal::ZERO {
                total_monthly_payment += credit.monthly_payment;
            }

            lines.push(CreditLineStatus {
                credit_id: credit.id,
                category_id: credit.category_id,
                schedule,
            });
        }

        CreditOverview {
            lines,
            total_remaining,
            total_monthly_payment,
        }
    }
}
