//! Budget data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use centime_shared::types::{CategoryId, ForecastId, UserId};

use crate::period::BudgetPeriod;

/// Category kind classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Incoming money.
    Revenue,
    /// Recurring bills.
    Bill,
    /// Day-to-day spending.
    Expense,
    /// Money set aside.
    Savings,
}

impl CategoryKind {
    /// All kinds, in display order.
    pub const ALL: [Self; 4] = [Self::Revenue, Self::Bill, Self::Expense, Self::Savings];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Bill => "bills",
            Self::Expense => "expenses",
            Self::Savings => "savings",
        }
    }
}

/// A budget category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Kind, driving the summary rollup.
    pub kind: CategoryKind,
    /// True for bill categories backed by a tracked credit line.
    pub is_credit: bool,
    /// Display ordering; irrelevant to computation.
    pub sort_order: i32,
}

/// A forecasted amount for a category in a calendar month.
///
/// Forecasts are entered per calendar month (1-12) and reused every year;
/// they are deliberately independent of the custom period boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetForecast {
    /// Forecast ID.
    pub id: ForecastId,
    /// Owning user.
    pub user_id: UserId,
    /// Calendar month (1-12) the forecast applies to.
    pub month_number: u32,
    /// Forecasted category.
    pub category_id: CategoryId,
    /// Forecasted amount, same sign convention as the category's real sums.
    pub amount: Decimal,
}

/// Budget-vs-actual figures for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFigures {
    /// Category display name.
    pub name: String,
    /// Category kind.
    pub kind: CategoryKind,
    /// Forecasted amount (0 when no forecast exists).
    pub forecasted: Decimal,
    /// Sum of the period's transactions in this category.
    pub real: Decimal,
    /// `real - forecasted`.
    pub variance: Decimal,
    /// Variance as a percentage of the forecast, rounded to 2 decimal
    /// places; exactly 0 when there is no forecast to compare against.
    pub variance_percent: Decimal,
}

/// Summed figures for one category kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupFigures {
    /// Total forecasted amount.
    pub forecasted: Decimal,
    /// Total real amount.
    pub real: Decimal,
    /// Total variance.
    pub variance: Decimal,
}

/// Kind-level rollup across all of a user's categories.
///
/// Every kind is always present; kinds without categories report zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Revenue categories.
    pub revenue: RollupFigures,
    /// Bill categories.
    pub bills: RollupFigures,
    /// Expense categories.
    pub expenses: RollupFigures,
    /// Savings categories.
    pub savings: RollupFigures,
}

impl BudgetSummary {
    /// The rollup bucket for a kind.
    #[must_use]
    pub const fn for_kind(&self, kind: CategoryKind) -> &RollupFigures {
        match kind {
            CategoryKind::Revenue => &self.revenue,
            CategoryKind::Bill => &self.bills,
            CategoryKind::Expense => &self.expenses,
            CategoryKind::Savings => &self.savings,
        }
    }

    /// Mutable access to the rollup bucket for a kind.
    pub const fn for_kind_mut(&mut self, kind: CategoryKind) -> &mut RollupFigures {
        match kind {
            CategoryKind::Revenue => &mut self.revenue,
            CategoryKind::Bill => &mut self.bills,
            CategoryKind::Expense => &mut self.expenses,
            CategoryKind::Savings => &mut self.savings,
        }
    }
}

/// Complete budget-vs-actual view of one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// The resolved period.
    pub period: BudgetPeriod,
    /// Per-category figures; every category of the user appears, even
    /// with all-zero values.
    pub categories: BTreeMap<CategoryId, CategoryFigures>,
    /// Kind-level rollup.
    pub summary: BudgetSummary,
}
