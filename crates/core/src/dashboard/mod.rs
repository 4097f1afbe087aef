//! Chart-ready assembly of computed reports.
//!
//! Nothing here recomputes figures; the services turn the budget,
//! balance, and savings reports into aligned label/series vectors the
//! frontend can hand straight to a chart library.

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::{BalanceChart, DashboardCharts, RepartitionChart, SavingsChart};
