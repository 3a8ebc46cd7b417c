//! Dashboard module
//!
//! Provides an overview page with this month's totals and budget progress,
//! plus the forms for adding expenses, incomes and budgets.

mod budget_endpoint;
mod cards;
mod handlers;
mod summary;

pub use budget_endpoint::create_budget_endpoint;
pub use handlers::get_dashboard_page;
