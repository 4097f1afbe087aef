//! Savings progress service.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::warn;

use centime_shared::types::{CategoryId, UserId};

use crate::budget::Category;

use super::types::{GoalProgress, SavingsAllocation, SavingsGoal, SavingsReport};

/// Savings goal progress over one user's snapshot.
pub struct SavingsService;

impl SavingsService {
    /// Measures every goal against the user's standing allocations.
    ///
    /// Allocations are grouped by category in one pass; goals whose
    /// category is missing from the snapshot are dropped.
    #[must_use]
    pub fn progress(
        user_id: UserId,
        goals: &[SavingsGoal],
        allocations: &[SavingsAllocation],
        categories: &[Category],
    ) -> SavingsReport {
        let names: HashMap<CategoryId, &str> = categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let mut allocated_by_category: HashMap<CategoryId, Decimal> = HashMap::new();
        let mut allocated_by_account = BTreeMap::new();
        let mut total_allocated = Decimal::ZERO;
        for allocation in allocations.iter().filter(|a| a.user_id == user_id) {
            *allocated_by_category
                .entry(allocation.category_id)
                .or_default() += allocation.amount;
            *allocated_by_account
                .entry(allocation.account_id)
                .or_insert(Decimal::ZERO) += allocation.amount;
            total_allocated += allocation.amount;
        }

        let progress = goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .filter_map(|goal| {
                let Some(name) = names.get(&goal.category_id) else {
                    warn!(
                        goal = %goal.id,
                        category = %goal.category_id,
                        "savings goal references a category missing from the snapshot"
                    );
                    return None;
                };

                let allocated = allocated_by_category
                    .get(&goal.category_id)
                    .copied()
                    .unwrap_or_default();
                let progress_percent = if goal.target_amount.is_zero() {
                    Decimal::ZERO
                } else {
                    (allocated / goal.target_amount * Decimal::ONE_HUNDRED).round_dp(2)
                };

                Some(GoalProgress {
                    goal_id: goal.id,
                    category_id: goal.category_id,
                    category_name: (*name).to_string(),
                    target: goal.target_amount,
                    allocated,
                    remaining: goal.target_amount - allocated,
                    progress_percent,
                })
            })
            .collect();

        SavingsReport {
            goals: progress,
            allocated_by_account,
            total_allocated,
        }
    }
}
