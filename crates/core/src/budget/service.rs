//! Budget aggregation service.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use centime_shared::types::{CategoryId, UserId};

use crate::ledger::Transaction;
use crate::period::{self, PeriodConfig, PeriodError};

use super::types::{BudgetForecast, BudgetReport, BudgetSummary, Category, CategoryFigures};

/// Budget-vs-actual aggregation over one user's snapshot.
pub struct BudgetService;

impl BudgetService {
    /// Computes the budget-vs-actual view for `(month, year)`.
    ///
    /// Forecasts are selected by calendar month; real amounts are summed
    /// over the resolved (possibly shifted) period. Every category of the
    /// user appears in the result, zero-valued when untouched.
    ///
    /// When several forecasts exist for one category and month the first
    /// found wins; uniqueness is a caller invariant, not enforced here.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError`] if the period cannot be resolved.
    pub fn budget_for_period(
        user_id: UserId,
        config: &PeriodConfig,
        month: u32,
        year: i32,
        categories: &[Category],
        forecasts: &[BudgetForecast],
        transactions: &[Transaction],
    ) -> Result<BudgetReport, PeriodError> {
        let period = period::resolve(config, month, year)?;

        let mut forecast_by_category: HashMap<CategoryId, Decimal> = HashMap::new();
        for forecast in forecasts
            .iter()
            .filter(|f| f.user_id == user_id && f.month_number == month)
        {
            forecast_by_category
                .entry(forecast.category_id)
                .or_insert(forecast.amount);
        }

        let known: HashSet<CategoryId> = categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| c.id)
            .collect();

        // One pass over the snapshot, grouping real amounts by category.
        let mut real_by_category: HashMap<CategoryId, Decimal> = HashMap::new();
        for tx in transactions.iter().filter(|t| t.user_id == user_id) {
            if !period.contains(tx.date) {
                continue;
            }
            if tx.is_degenerate() {
                warn!(transaction = %tx.id, "degenerate transaction in snapshot, skipped");
                continue;
            }
            let Some(category_id) = tx.category_id else {
                continue; // pure transfer
            };
            if !known.contains(&category_id) {
                warn!(
                    transaction = %tx.id,
                    category = %category_id,
                    "transaction references a category missing from the snapshot"
                );
                continue;
            }
            *real_by_category.entry(category_id).or_default() += tx.amount;
        }

        let mut figures: BTreeMap<CategoryId, CategoryFigures> = BTreeMap::new();
        let mut summary = BudgetSummary::default();

        for category in categories.iter().filter(|c| c.user_id == user_id) {
            let forecasted = forecast_by_category
                .get(&category.id)
                .copied()
                .unwrap_or_default();
            let real = real_by_category
                .get(&category.id)
                .copied()
                .unwrap_or_default();
            let variance = real - forecasted;
            let variance_percent = if forecasted.is_zero() {
                // No-data sentinel, not a true zero variance.
                Decimal::ZERO
            } else {
                (variance / forecasted * Decimal::ONE_HUNDRED).round_dp(2)
            };

            let rollup = summary.for_kind_mut(category.kind);
            rollup.forecasted += forecasted;
            rollup.real += real;
            rollup.variance += variance;

            figures.insert(
                category.id,
                CategoryFigures {
                    name: category.name.clone(),
                    kind: category.kind,
                    forecasted,
                    real,
                    variance,
                    variance_percent,
                },
            );
        }

        debug!(
            categories = figures.len(),
            start = %period.start,
            end = %period.end,
            "budget aggregated"
        );

        Ok(BudgetReport {
            period,
            categories: figures,
            summary,
        })
    }
}
