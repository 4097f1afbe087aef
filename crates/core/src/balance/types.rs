//! Balance data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_shared::types::{AccountId, UserId};

/// A bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Balance before any tracked transaction.
    pub initial_balance: Decimal,
    /// True for dedicated savings accounts.
    pub is_savings: bool,
    /// True for the user's main account; at most one per user, enforced
    /// by the hosting layer.
    pub is_main: bool,
}

/// The three balances of one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalances {
    /// Account display name.
    pub name: String,
    /// Balance over cleared transactions only.
    pub real: Decimal,
    /// Balance over all transactions, cleared or not.
    pub upcoming: Decimal,
    /// `upcoming - real`: the net value of not-yet-cleared activity.
    pub pending: Decimal,
}

/// Portfolio-wide balance totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasurySummary {
    /// Sum of real balances.
    pub total_real: Decimal,
    /// Sum of upcoming balances.
    pub total_upcoming: Decimal,
    /// Sum of pending balances.
    pub total_pending: Decimal,
}

/// Balances for all of a user's accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Per-account balances.
    pub accounts: BTreeMap<AccountId, AccountBalances>,
    /// Portfolio totals.
    pub treasury: TreasurySummary,
}
