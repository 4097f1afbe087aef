//! Dashboard chart data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-account balance series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChart {
    /// Account names, alphabetical.
    pub labels: Vec<String>,
    /// Real balances, aligned with `labels`.
    pub real: Vec<Decimal>,
    /// Upcoming balances, aligned with `labels`.
    pub upcoming: Vec<Decimal>,
    /// Pending balances, aligned with `labels`.
    pub pending: Vec<Decimal>,
}

/// Forecast-vs-real series per category kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepartitionChart {
    /// Kind labels, in display order.
    pub labels: Vec<String>,
    /// Forecasted totals, aligned with `labels`.
    pub forecasted: Vec<Decimal>,
    /// Real totals, aligned with `labels`.
    pub real: Vec<Decimal>,
}

/// Savings goal progress series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsChart {
    /// Goal category names, in report order.
    pub labels: Vec<String>,
    /// Progress percentages, aligned with `labels`.
    pub progress: Vec<Decimal>,
}

/// The full chart payload of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCharts {
    /// Per-account balances.
    pub balances: BalanceChart,
    /// Forecast vs real per kind.
    pub repartition: RepartitionChart,
    /// Savings goal progress.
    pub savings: SavingsChart,
}
