//! Savings data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_shared::types::{AccountId, CategoryId, SavingsAllocationId, SavingsGoalId, UserId};

/// A target amount for a savings category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Goal ID.
    pub id: SavingsGoalId,
    /// Owning user.
    pub user_id: UserId,
    /// The savings category the goal applies to.
    pub category_id: CategoryId,
    /// Amount to reach.
    pub target_amount: Decimal,
}

/// A standing earmark of money toward a savings category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAllocation {
    /// Allocation ID.
    pub id: SavingsAllocationId,
    /// Owning user.
    pub user_id: UserId,
    /// Earmarked amount.
    pub amount: Decimal,
    /// The savings category the money is earmarked for.
    pub category_id: CategoryId,
    /// The account the money sits on.
    pub account_id: AccountId,
}

/// Progress of one savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal ID.
    pub goal_id: SavingsGoalId,
    /// The goal's category.
    pub category_id: CategoryId,
    /// Category display name.
    pub category_name: String,
    /// Target amount.
    pub target: Decimal,
    /// Total allocated toward the category.
    pub allocated: Decimal,
    /// `target - allocated`; negative once over-funded.
    pub remaining: Decimal,
    /// Allocated as a percentage of the target, rounded to 2 decimal
    /// places; exactly 0 when the target is zero.
    pub progress_percent: Decimal,
}

/// Savings view across all of a user's goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsReport {
    /// Per-goal progress, in snapshot order.
    pub goals: Vec<GoalProgress>,
    /// Allocated totals per holding account.
    pub allocated_by_account: BTreeMap<AccountId, Decimal>,
    /// Total allocated across all categories.
    pub total_allocated: Decimal,
}
