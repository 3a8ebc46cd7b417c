//! Defines the endpoint for setting a monthly category budget.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, PrivateCookieJar};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    api::{ApiClient, BudgetData},
    endpoints,
    session::CookieSessionStore,
};

/// The data submitted by the budget form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetForm {
    pub category: String,
    /// The spending limit in dollars.
    pub budget_amount: f64,
    /// The month number, 1 to 12.
    pub month: u8,
    pub year: i32,
}

impl From<BudgetForm> for BudgetData {
    fn from(form: BudgetForm) -> Self {
        Self {
            category: form.category.trim().to_owned(),
            budget_amount: form.budget_amount,
            month: form.month,
            year: form.year,
        }
    }
}

/// A route handler for setting a budget, redirects to the dashboard on success.
pub async fn create_budget_endpoint(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Form(form): Form<BudgetForm>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    match api.create_budget(&mut session, &form.into()).await {
        Ok(()) => {
            (HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()), StatusCode::OK).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not set budget: {error}");
            error.into_alert_response_with_jar(session.into_jar())
        }
    }
}
