//! Account balance computation.
//!
//! Every account carries two parallel balances: the real balance counts
//! only cleared (reconciled) transactions, the upcoming balance counts
//! everything. Their difference is the pending balance, the net value of
//! activity not yet confirmed by the bank.

pub mod service;
pub mod types;


pub use service::BalanceService;
pub use types::{Account, AccountBalances, BalanceReport, TreasurySummary};
