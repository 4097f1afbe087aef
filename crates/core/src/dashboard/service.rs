//! Dashboard chart assembly.

use crate::balance::BalanceReport;
use crate::budget::{BudgetSummary, CategoryKind};
use crate::savings::SavingsReport;

use super::types::{BalanceChart, DashboardCharts, RepartitionChart, SavingsChart};

/// Turns computed reports into aligned chart series.
pub struct DashboardService;

impl DashboardService {
    /// Per-account balance series, ordered by account name for stable
    /// output.
    #[must_use]
    pub fn balance_chart(report: &BalanceReport) -> BalanceChart {
        let mut rows: Vec<_> = report.accounts.values().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        let mut chart = BalanceChart::default();
        for balances in rows {
            chart.labels.push(balances.name.clone());
            chart.real.push(balances.real);
            chart.upcoming.push(balances.upcoming);
            chart.pending.push(balances.pending);
        }
        chart
    }

    /// Forecast-vs-real series across the four category kinds.
    #[must_use]
    pub fn repartition_chart(summary: &BudgetSummary) -> RepartitionChart {
        let mut chart = RepartitionChart::default();
        for kind in CategoryKind::ALL {
            let rollup = summary.for_kind(kind);
            chart.labels.push(kind.label().to_string());
            chart.forecasted.push(rollup.forecasted);
            chart.real.push(rollup.real);
        }
        chart
    }

    /// Savings progress series, one bar per goal.
    #[must_use]
    pub fn savings_chart(report: &SavingsReport) -> SavingsChart {
        let mut chart = SavingsChart::default();
        for goal in &report.goals {
            chart.labels.push(goal.category_name.clone());
            chart.progress.push(goal.progress_percent);
        }
        chart
    }

    /// Assembles the complete dashboard payload.
    #[must_use]
    pub fn charts(
        summary: &BudgetSummary,
        balances: &BalanceReport,
        savings: &SavingsReport,
    ) -> DashboardCharts {
        DashboardCharts {
            balances: Self::balance_chart(balances),
            repartition: Self::repartition_chart(summary),
            savings: Self::savings_chart(savings),
        }
    }
}
