//! The URIs of the pages and form endpoints served by the app.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page for logged in users.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page listing the user's expenses and incomes.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for editing an expense.
pub const EDIT_EXPENSE_VIEW: &str = "/transactions/expense/{expense_id}/edit";
/// The page for editing an income.
pub const EDIT_INCOME_VIEW: &str = "/transactions/income/{income_id}/edit";
/// The route for getting the registration page.
pub const REGISTER_VIEW: &str = "/register";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for creating an account.
pub const REGISTER_API: &str = "/api/register";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to create an expense.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to update or delete an expense.
pub const EXPENSE_API: &str = "/api/expenses/{expense_id}";
/// The route to create an income.
pub const INCOMES_API: &str = "/api/incomes";
/// The route to update or delete an income.
pub const INCOME_API: &str = "/api/incomes/{income_id}";
/// The route to set a budget.
pub const BUDGETS_API: &str = "/api/budgets";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is the first substring wrapped in braces, e.g. '{expense_id}'
/// in '/api/expenses/{expense_id}'.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{id}{}",
        &endpoint_path[..param_start],
        &endpoint_path[param_end..]
    )
}
