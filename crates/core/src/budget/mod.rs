//! Budget-vs-actual aggregation.
//!
//! Compares forecasted amounts (entered per calendar month) against the
//! real transactions of the user's possibly shifted budget period, per
//! category and rolled up per category kind.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::BudgetService;
pub use types::{
    BudgetForecast, BudgetReport, BudgetSummary, Category, CategoryFigures, CategoryKind,
    RollupFigures,
};
