//! Defines the endpoints for updating an existing expense or income.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, PrivateCookieJar};
use axum_htmx::HxRedirect;

use crate::{api::ApiClient, endpoints, session::CookieSessionStore};

use super::form::{ExpenseForm, IncomeForm};

/// A route handler for updating an expense, redirects to the transactions page on success.
pub async fn edit_expense_endpoint(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Path(expense_id): Path<i64>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    match api
        .update_expense(&mut session, expense_id, &form.into())
        .await
    {
        Ok(()) => {
            (HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()), StatusCode::OK).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not update expense {expense_id}: {error}");
            error.into_alert_response_with_jar(session.into_jar())
        }
    }
}

/// A route handler for updating an income, redirects to the transactions page on success.
///
/// The frequency and recurring flag are sent as submitted, so editing an
/// income keeps its schedule.
pub async fn edit_income_endpoint(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Path(income_id): Path<i64>,
    Form(form): Form<IncomeForm>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    match api.update_income(&mut session, income_id, &form.into()).await {
        Ok(()) => {
            (HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()), StatusCode::OK).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not update income {income_id}: {error}");
            error.into_alert_response_with_jar(session.into_jar())
        }
    }
}
