//! Transaction entity and its invariants.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_shared::types::{AccountId, CategoryId, TransactionId, UserId};

use super::error::LedgerError;

/// Transaction kind classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Incoming money (salary, refunds).
    Revenue,
    /// Recurring bills.
    Bill,
    /// Day-to-day spending.
    Expense,
    /// Money set aside toward savings.
    Savings,
    /// Movement between two of the user's own accounts.
    Transfer,
}

/// A money movement between two accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// True once the transaction has been reconciled against the real
    /// account statement.
    pub cleared: bool,
    /// Date the transaction takes effect.
    pub date: NaiveDate,
    /// Amount moved; always strictly positive.
    pub amount: Decimal,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Budget category; `None` only for pure transfers.
    pub category_id: Option<CategoryId>,
    /// Account the money leaves.
    pub from_account: AccountId,
    /// Account the money arrives on.
    pub to_account: AccountId,
    /// Free-form description.
    pub description: String,
}

impl Transaction {
    /// True if the record violates a balance-relevant invariant and must be
    /// treated as a zero-sum no-op by the aggregators.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.from_account == self.to_account || self.amount <= Decimal::ZERO
    }

    /// True if the transaction touches the given account on either side.
    #[must_use]
    pub fn touches(&self, account: AccountId) -> bool {
        self.from_account == account || self.to_account == account
    }

    /// Entity-invariant checks the hosting layer runs before a transaction
    /// enters a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }
        if self.from_account == self.to_account {
            return Err(LedgerError::SameAccountTransfer);
        }
        if self.kind != TransactionKind::Transfer && self.category_id.is_none() {
            return Err(LedgerError::MissingCategory);
        }
        Ok(())
    }
}
