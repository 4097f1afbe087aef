//! Pure snapshot filtering for transaction listings.

use chrono::NaiveDate;

use centime_shared::types::{AccountId, CategoryId, PageRequest, PageResponse, UserId};

use super::transaction::{Transaction, TransactionKind};

/// Filter criteria for listing transactions out of a snapshot.
///
/// All criteria are conjunctive; an unset field matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Earliest date (inclusive).
    pub date_from: Option<NaiveDate>,
    /// Latest date (inclusive).
    pub date_to: Option<NaiveDate>,
    /// Account on either side of the transaction.
    pub account: Option<AccountId>,
    /// Budget category.
    pub category: Option<CategoryId>,
    /// Transaction kind.
    pub kind: Option<TransactionKind>,
    /// Cleared state.
    pub cleared: Option<bool>,
}

impl TransactionFilter {
    /// True if the transaction satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(from) = self.date_from
            && tx.date < from
        {
            return false;
        }
        if let Some(to) = self.date_to
            && tx.date > to
        {
            return false;
        }
        if let Some(account) = self.account
            && !tx.touches(account)
        {
            return false;
        }
        if let Some(category) = self.category
            && tx.category_id != Some(category)
        {
            return false;
        }
        if let Some(kind) = self.kind
            && tx.kind != kind
        {
            return false;
        }
        if let Some(cleared) = self.cleared
            && tx.cleared != cleared
        {
            return false;
        }
        true
    }

    /// Applies the filter to one user's slice of a snapshot, most recent
    /// first. Equal dates keep snapshot order.
    #[must_use]
    pub fn apply<'a>(&self, user_id: UserId, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut selected: Vec<&Transaction> = transactions
            .iter()
            .filter(|tx| tx.user_id == user_id && self.matches(tx))
            .collect();
        selected.sort_by(|a, b| b.date.cmp(&a.date));
        selected
    }

    /// Filters, orders, and pages in one step.
    #[must_use]
    pub fn apply_paged(
        &self,
        user_id: UserId,
        transactions: &[Transaction],
        page: PageRequest,
    ) -> PageResponse<Transaction> {
        let selected = self.apply(user_id, transactions);
        let total = selected.len() as u64;

        let data = selected
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect();

        PageResponse::new(data, page, total)
    }
}
