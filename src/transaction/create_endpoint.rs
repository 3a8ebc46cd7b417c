//! Defines the endpoints for recording a new expense or income.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{Form, PrivateCookieJar};
use axum_htmx::HxRedirect;

use crate::{api::ApiClient, endpoints, session::CookieSessionStore};

use super::form::{ExpenseForm, IncomeForm};

/// A route handler for creating an expense, redirects to the dashboard on success.
pub async fn create_expense_endpoint(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    match api.create_expense(&mut session, &form.into()).await {
        Ok(()) => {
            (HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()), StatusCode::OK).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not create expense: {error}");
            error.into_alert_response_with_jar(session.into_jar())
        }
    }
}

/// A route handler for creating an income, redirects to the dashboard on success.
pub async fn create_income_endpoint(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Form(form): Form<IncomeForm>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    match api.create_income(&mut session, &form.into()).await {
        Ok(()) => {
            (HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()), StatusCode::OK).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not create income: {error}");
            error.into_alert_response_with_jar(session.into_jar())
        }
    }
}
