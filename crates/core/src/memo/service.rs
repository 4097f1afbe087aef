//! Memo checklist summaries.

use rust_decimal::Decimal;

use centime_shared::types::UserId;

use super::types::{MemoItem, MemoSummary};

/// Monthly checklist totals over one user's memo items.
pub struct MemoService;

impl MemoService {
    /// Sums the user's checklist for one calendar month.
    #[must_use]
    pub fn summary(user_id: UserId, month: u32, items: &[MemoItem]) -> MemoSummary {
        let mut total = Decimal::ZERO;
        let mut paid_total = Decimal::ZERO;
        let mut item_count = 0;
        let mut paid_count = 0;

        for item in items
            .iter()
            .filter(|i| i.user_id == user_id && i.month_number == month)
        {
            total += item.amount;
            item_count += 1;
            if item.is_paid {
                paid_total += item.amount;
                paid_count += 1;
            }
        }

        MemoSummary {
            month,
            total,
            paid_total,
            unpaid_total: total - paid_total,
            item_count,
            paid_count,
        }
    }
}
