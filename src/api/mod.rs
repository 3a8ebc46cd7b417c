//! Bindings for the remote finance API.
//!
//! [ApiClient::request] is the single place where the bearer token is
//! attached and where authentication failures are turned into a cleared
//! session. The typed operations in the submodules are thin wrappers over it.

mod auth;
mod budget;
mod client;
mod expense;
mod income;

pub use auth::{LOG_IN_FAILED_MESSAGE, LogInRequest, REGISTER_FAILED_MESSAGE, RegisterRequest};
pub use budget::{Budget, BudgetData, BudgetProgress};
pub use client::{ApiClient, RequestError, RequestOptions};
pub use expense::{Expense, ExpenseData};
pub use income::{Frequency, Income, IncomeData};
