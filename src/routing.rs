//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{
        auth_guard, auth_guard_hx, get_log_in_page, get_log_out, get_register_page, post_log_in,
        post_register,
    },
    dashboard::{create_budget_endpoint, get_dashboard_page},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        create_expense_endpoint, create_income_endpoint, delete_expense_endpoint,
        delete_income_endpoint, edit_expense_endpoint, edit_income_endpoint,
        get_edit_expense_page, get_edit_income_page, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::REGISTER_VIEW, get(get_register_page))
        .route(endpoints::REGISTER_API, post(post_register))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::EDIT_EXPENSE_VIEW, get(get_edit_expense_page))
        .route(endpoints::EDIT_INCOME_VIEW, get(get_edit_income_page))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // htmx requests need the HX-Redirect header for auth redirects to work.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
            .route(
                endpoints::EXPENSE_API,
                put(edit_expense_endpoint).delete(delete_expense_endpoint),
            )
            .route(endpoints::INCOMES_API, post(create_income_endpoint))
            .route(
                endpoints::INCOME_API,
                put(edit_income_endpoint).delete(delete_income_endpoint),
            )
            .route(endpoints::BUDGETS_API, post(create_budget_endpoint))
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard_hx)),
    );

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
