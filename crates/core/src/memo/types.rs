//! Memo data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_shared::types::{MemoItemId, UserId};

/// One expected payment on a monthly checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoItem {
    /// Memo item ID.
    pub id: MemoItemId,
    /// Owning user.
    pub user_id: UserId,
    /// Calendar month (1-12) the item belongs to.
    pub month_number: u32,
    /// What the payment is.
    pub description: String,
    /// Expected amount.
    pub amount: Decimal,
    /// True once the payment went through.
    pub is_paid: bool,
}

/// Totals of one month's checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoSummary {
    /// The calendar month summarized.
    pub month: u32,
    /// Sum over all items.
    pub total: Decimal,
    /// Sum over paid items.
    pub paid_total: Decimal,
    /// `total - paid_total`.
    pub unpaid_total: Decimal,
    /// Number of items.
    pub item_count: usize,
    /// Number of paid items.
    pub paid_count: usize,
}
