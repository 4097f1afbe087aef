//! Credit line repayment tracking.
//!
//! A credit line ties a loan to the bill category its monthly payment is
//! booked under. All figures here are derivations over the stored loan
//! terms; payment booking itself happens through ordinary transactions.

pub mod service;
pub mod types;


pub use service::CreditService;
pub use types::{CreditDetail, CreditLineStatus, CreditOverview, CreditSchedule};
