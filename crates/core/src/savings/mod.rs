//! Savings goal progress.
//!
//! Savings are tracked as standing allocations: earmarks of money toward
//! a savings category, each held on a concrete account. Goal progress is
//! the allocated total measured against the goal's target.

pub mod service;
pub mod types;


pub use service::SavingsService;
pub use types::{GoalProgress, SavingsAllocation, SavingsGoal, SavingsReport};
