//! Core budgeting logic for Centime.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Every operation is a deterministic function over a
//! read-only snapshot of one user's entities; the hosting layer is
//! responsible for snapshot consistency and serialization.
//!
//! # Modules
//!
//! - `period` - Budget period resolution (custom start-of-month handling)
//! - `ledger` - Transaction snapshot types, validation, and filtering
//! - `budget` - Budget-vs-actual aggregation per category and kind
//! - `balance` - Real / upcoming / pending account balances
//! - `savings` - Savings goal progress from standing allocations
//! - `credit` - Credit line repayment tracking
//! - `memo` - Monthly expected-payment checklists
//! - `dashboard` - Chart-ready assembly of computed reports

pub mod balance;
pub mod budget;
pub mod credit;
pub mod dashboard;
pub mod ledger;
pub mod memo;
pub mod period;
pub mod savings;
