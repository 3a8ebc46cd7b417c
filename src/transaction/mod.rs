//! Expenses and incomes, merged into one list of transactions.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the aggregation of expenses and incomes
//! - The filters for the transactions page
//! - View handlers and endpoints for listing, editing, creating and deleting

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod filter;
mod form;
mod repository;
mod transactions_page;

pub use create_endpoint::{create_expense_endpoint, create_income_endpoint};
pub use delete_endpoint::{delete_expense_endpoint, delete_income_endpoint};
pub use edit_endpoint::{edit_expense_endpoint, edit_income_endpoint};
pub use edit_page::{get_edit_expense_page, get_edit_income_page};
pub use form::{ExpenseFormValues, IncomeFormValues, expense_form_fields, income_form_fields};
pub use transactions_page::get_transactions_page;
