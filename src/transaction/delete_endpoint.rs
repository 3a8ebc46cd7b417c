//! Defines the endpoints for deleting an expense or income.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;

use crate::{Error, api::ApiClient, endpoints, session::CookieSessionStore};

fn deleted_response(result: Result<(), Error>, session: CookieSessionStore) -> Response {
    match result {
        Ok(()) => {
            (HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()), StatusCode::OK).into_response()
        }
        Err(error) => error.into_alert_response_with_jar(session.into_jar()),
    }
}

/// A route handler for deleting an expense.
pub async fn delete_expense_endpoint(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Path(expense_id): Path<i64>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);
    let result = api
        .delete_expense(&mut session, expense_id)
        .await
        .inspect_err(|error| tracing::warn!("Could not delete expense {expense_id}: {error}"));

    deleted_response(result, session)
}

/// A route handler for deleting an income.
pub async fn delete_income_endpoint(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Path(income_id): Path<i64>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);
    let result = api
        .delete_income(&mut session, income_id)
        .await
        .inspect_err(|error| tracing::warn!("Could not delete income {income_id}: {error}"));

    deleted_response(result, session)
}
