//! Tests for budget-vs-actual aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use centime_shared::types::{
    AccountId, CategoryId, ForecastId, TransactionId, UserId,
};

use crate::ledger::{Transaction, TransactionKind};
use crate::period::{PeriodConfig, PeriodError};

use super::service::BudgetService;
use super::types::{BudgetForecast, Category, CategoryKind, RollupFigures};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn category(user_id: UserId, name: &str, kind: CategoryKind) -> Category {
    Category {
        id: CategoryId::new(),
        user_id,
        name: name.to_string(),
        kind,
        is_credit: false,
        sort_order: 0,
    }
}

fn forecast(user_id: UserId, month_number: u32, category_id: CategoryId, amount: Decimal) -> BudgetForecast {
    BudgetForecast {
        id: ForecastId::new(),
        user_id,
        month_number,
        category_id,
        amount,
    }
}

fn tx(user_id: UserId, on: NaiveDate, amount: Decimal, category_id: Option<CategoryId>) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        user_id,
        cleared: true,
        date: on,
        amount,
        kind: TransactionKind::Expense,
        category_id,
        from_account: AccountId::new(),
        to_account: AccountId::new(),
        description: "test".to_string(),
    }
}

#[test]
fn test_zero_forecast_yields_sentinel_percent() {
    let user = UserId::new();
    let groceries = category(user, "Groceries", CategoryKind::Expense);
    let transactions = vec![
        tx(user, date(2024, 3, 5), dec!(50), Some(groceries.id)),
        tx(user, date(2024, 3, 20), dec!(30), Some(groceries.id)),
    ];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&groceries),
        &[],
        &transactions,
    )
    .unwrap();

    let figures = &report.categories[&groceries.id];
    assert_eq!(figures.forecasted, dec!(0));
    assert_eq!(figures.real, dec!(80));
    assert_eq!(figures.variance, dec!(80));
    assert_eq!(figures.variance_percent, dec!(0));
}

#[test]
fn test_untouched_category_still_appears() {
    let user = UserId::new();
    let rent = category(user, "Rent", CategoryKind::Bill);
    let forecasts = vec![forecast(user, 3, rent.id, dec!(900))];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&rent),
        &forecasts,
        &[],
    )
    .unwrap();

    let figures = &report.categories[&rent.id];
    assert_eq!(figures.forecasted, dec!(900));
    assert_eq!(figures.real, dec!(0));
    assert_eq!(figures.variance, dec!(-900));
    assert_eq!(figures.variance_percent, dec!(-100.00));
}

#[test]
fn test_variance_percent_is_rounded() {
    let user = UserId::new();
    let fun = category(user, "Fun", CategoryKind::Expense);
    let forecasts = vec![forecast(user, 3, fun.id, dec!(300))];
    let transactions = vec![tx(user, date(2024, 3, 10), dec!(100), Some(fun.id))];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&fun),
        &forecasts,
        &transactions,
    )
    .unwrap();

    let figures = &report.categories[&fun.id];
    assert_eq!(figures.variance, dec!(-200));
    assert_eq!(figures.variance_percent, dec!(-66.67));
}

#[test]
fn test_forecasts_stay_calendar_scoped_under_custom_period() {
    let user = UserId::new();
    let salary = category(user, "Salary", CategoryKind::Revenue);
    // Forecast entered for March, the requested month.
    let forecasts = vec![forecast(user, 3, salary.id, dec!(2000))];
    // Period for March runs 2024-02-27 through 2024-03-26; the February-dated
    // payment lands inside it.
    let transactions = vec![
        tx(user, date(2024, 2, 28), dec!(2000), Some(salary.id)),
        tx(user, date(2024, 3, 27), dec!(500), Some(salary.id)), // next period
    ];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::anchored(27, true),
        3,
        2024,
        std::slice::from_ref(&salary),
        &forecasts,
        &transactions,
    )
    .unwrap();

    assert_eq!(report.period.start, date(2024, 2, 27));
    assert_eq!(report.period.end, date(2024, 3, 26));

    let figures = &report.categories[&salary.id];
    assert_eq!(figures.forecasted, dec!(2000));
    assert_eq!(figures.real, dec!(2000));
    assert_eq!(figures.variance, dec!(0));
}

#[test]
fn test_transactions_outside_period_are_excluded() {
    let user = UserId::new();
    let groceries = category(user, "Groceries", CategoryKind::Expense);
    let transactions = vec![
        tx(user, date(2024, 2, 29), dec!(10), Some(groceries.id)),
        tx(user, date(2024, 3, 1), dec!(20), Some(groceries.id)),
        tx(user, date(2024, 3, 31), dec!(30), Some(groceries.id)),
        tx(user, date(2024, 4, 1), dec!(40), Some(groceries.id)),
    ];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&groceries),
        &[],
        &transactions,
    )
    .unwrap();

    assert_eq!(report.categories[&groceries.id].real, dec!(50));
}

#[test]
fn test_pure_transfers_do_not_hit_any_category() {
    let user = UserId::new();
    let savings = category(user, "Vacation fund", CategoryKind::Savings);
    let mut transfer = tx(user, date(2024, 3, 10), dec!(500), None);
    transfer.kind = TransactionKind::Transfer;

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&savings),
        &[],
        &[transfer],
    )
    .unwrap();

    assert_eq!(report.categories[&savings.id].real, dec!(0));
}

#[test]
fn test_unknown_category_contribution_is_dropped() {
    let user = UserId::new();
    let groceries = category(user, "Groceries", CategoryKind::Expense);
    let transactions = vec![
        tx(user, date(2024, 3, 5), dec!(25), Some(groceries.id)),
        // References a category absent from the snapshot.
        tx(user, date(2024, 3, 6), dec!(999), Some(CategoryId::new())),
    ];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&groceries),
        &[],
        &transactions,
    )
    .unwrap();

    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.categories[&groceries.id].real, dec!(25));
    assert_eq!(report.summary.expenses.real, dec!(25));
}

#[test]
fn test_degenerate_transactions_are_no_ops() {
    let user = UserId::new();
    let groceries = category(user, "Groceries", CategoryKind::Expense);
    let account = AccountId::new();
    let mut degenerate = tx(user, date(2024, 3, 5), dec!(75), Some(groceries.id));
    degenerate.from_account = account;
    degenerate.to_account = account;

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&groceries),
        &[],
        &[degenerate],
    )
    .unwrap();

    assert_eq!(report.categories[&groceries.id].real, dec!(0));
}

#[test]
fn test_first_forecast_wins_on_duplicates() {
    let user = UserId::new();
    let rent = category(user, "Rent", CategoryKind::Bill);
    let forecasts = vec![
        forecast(user, 3, rent.id, dec!(900)),
        forecast(user, 3, rent.id, dec!(1200)),
    ];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        std::slice::from_ref(&rent),
        &forecasts,
        &[],
    )
    .unwrap();

    assert_eq!(report.categories[&rent.id].forecasted, dec!(900));
}

#[test]
fn test_other_users_data_is_ignored() {
    let user = UserId::new();
    let stranger = UserId::new();
    let groceries = category(user, "Groceries", CategoryKind::Expense);
    let strangers_category = category(stranger, "Their groceries", CategoryKind::Expense);

    let forecasts = vec![forecast(stranger, 3, groceries.id, dec!(400))];
    let transactions = vec![tx(stranger, date(2024, 3, 5), dec!(60), Some(groceries.id))];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        &[groceries.clone(), strangers_category.clone()],
        &forecasts,
        &transactions,
    )
    .unwrap();

    assert_eq!(report.categories.len(), 1);
    assert!(!report.categories.contains_key(&strangers_category.id));
    let figures = &report.categories[&groceries.id];
    assert_eq!(figures.forecasted, dec!(0));
    assert_eq!(figures.real, dec!(0));
}

#[test]
fn test_summary_covers_all_four_kinds() {
    let user = UserId::new();
    let salary = category(user, "Salary", CategoryKind::Revenue);
    let rent = category(user, "Rent", CategoryKind::Bill);
    let forecasts = vec![
        forecast(user, 3, salary.id, dec!(2000)),
        forecast(user, 3, rent.id, dec!(900)),
    ];
    let transactions = vec![
        tx(user, date(2024, 3, 1), dec!(2000), Some(salary.id)),
        tx(user, date(2024, 3, 3), dec!(950), Some(rent.id)),
    ];

    let report = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        3,
        2024,
        &[salary, rent],
        &forecasts,
        &transactions,
    )
    .unwrap();

    assert_eq!(report.summary.revenue.forecasted, dec!(2000));
    assert_eq!(report.summary.revenue.real, dec!(2000));
    assert_eq!(report.summary.bills.variance, dec!(50));
    // Kinds with no categories report zeros, not absence.
    assert_eq!(report.summary.expenses, RollupFigures::default());
    assert_eq!(report.summary.savings, RollupFigures::default());
}

#[test]
fn test_invalid_month_propagates() {
    let user = UserId::new();
    let result = BudgetService::budget_for_period(
        user,
        &PeriodConfig::calendar(),
        13,
        2024,
        &[],
        &[],
        &[],
    );
    assert_eq!(result.unwrap_err(), PeriodError::InvalidMonth(13));
}

proptest! {
    /// The kind rollup is exactly the sum of the per-category figures.
    #[test]
    fn prop_summary_equals_sum_of_categories(
        forecast_cents in prop::collection::vec(0i64..100_000, 1..6),
        spent_cents in prop::collection::vec(0i64..100_000, 1..6),
    ) {
        let user = UserId::new();
        let kinds = CategoryKind::ALL;
        let categories: Vec<Category> = forecast_cents
            .iter()
            .enumerate()
            .map(|(i, _)| category(user, &format!("cat-{i}"), kinds[i % kinds.len()]))
            .collect();

        let forecasts: Vec<BudgetForecast> = categories
            .iter()
            .zip(&forecast_cents)
            .map(|(c, cents)| forecast(user, 3, c.id, Decimal::new(*cents, 2)))
            .collect();

        let transactions: Vec<Transaction> = categories
            .iter()
            .cycle()
            .zip(&spent_cents)
            .map(|(c, cents)| tx(user, date(2024, 3, 15), Decimal::new(*cents, 2), Some(c.id)))
            .filter(|t| t.amount > Decimal::ZERO)
            .collect();

        let report = BudgetService::budget_for_period(
            user,
            &PeriodConfig::calendar(),
            3,
            2024,
            &categories,
            &forecasts,
            &transactions,
        )
        .unwrap();

        for kind in kinds {
            let expected_real: Decimal = report
                .categories
                .values()
                .filter(|f| f.kind == kind)
                .map(|f| f.real)
                .sum();
            let expected_forecasted: Decimal = report
                .categories
                .values()
                .filter(|f| f.kind == kind)
                .map(|f| f.forecasted)
                .sum();

            let rollup = report.summary.for_kind(kind);
            prop_assert_eq!(rollup.real, expected_real);
            prop_assert_eq!(rollup.forecasted, expected_forecasted);
            prop_assert_eq!(rollup.variance, expected_real - expected_forecasted);
        }
    }
}
