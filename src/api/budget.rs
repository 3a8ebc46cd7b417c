//! Monthly category budgets and the progress made against them.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{Error, session::SessionStore};

use super::ApiClient;

/// A spending limit for one category in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub category: String,
    /// The limit in dollars.
    pub budget_amount: f64,
    /// The month number, 1 to 12.
    pub month: u8,
    pub year: i32,
}

/// The fields sent when setting a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetData {
    pub category: String,
    pub budget_amount: f64,
    pub month: u8,
    pub year: i32,
}

/// How much of a budget has been spent, as calculated by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    #[serde(default)]
    pub id: Option<i64>,
    pub category: String,
    pub budget_amount: f64,
    pub spent: f64,
    #[serde(default)]
    pub remaining: f64,
    /// The share of the budget spent, may exceed 100.
    pub percentage: f64,
}

#[derive(Serialize)]
struct MonthQuery {
    month: u8,
    year: i32,
}

impl ApiClient {
    /// Get the budgets set for `month` of `year`.
    pub async fn get_budgets(
        &self,
        session: &mut impl SessionStore,
        month: u8,
        year: i32,
    ) -> Result<Vec<Budget>, Error> {
        self.get_json(
            session,
            &format!("/budgets/month/{month}/year/{year}"),
            "Failed to load budgets",
        )
        .await
    }

    /// Get the progress of each budget set for `month` of `year`.
    pub async fn get_budget_progress(
        &self,
        session: &mut impl SessionStore,
        month: u8,
        year: i32,
    ) -> Result<Vec<BudgetProgress>, Error> {
        let query = serde_urlencoded::to_string(MonthQuery { month, year })
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.get_json(
            session,
            &format!("/budgets/progress?{query}"),
            "Failed to load budget progress",
        )
        .await
    }

    /// Set a budget for a category and month.
    pub async fn create_budget(
        &self,
        session: &mut impl SessionStore,
        budget: &BudgetData,
    ) -> Result<(), Error> {
        self.send_json(
            session,
            Method::POST,
            "/budgets",
            Some(budget),
            "Failed to set budget",
        )
        .await
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        Json, Router,
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, post},
    };
    use serde_json::{Value, json};

    use crate::{
        api::ApiClient,
        session::{MemorySessionStore, SessionStore},
        test_utils::spawn_mock_api,
    };

    use super::{Budget, BudgetData};

    fn logged_in_session() -> MemorySessionStore {
        let mut session = MemorySessionStore::new();
        session.save("abc123", "jane@example.com", "Jane Doe");
        session
    }

    #[tokio::test]
    async fn get_budgets_uses_month_and_year_path() {
        let url = spawn_mock_api(Router::new().route(
            "/api/budgets/month/{month}/year/{year}",
            get(|Path((month, year)): Path<(u8, i32)>| async move {
                Json(json!([{
                    "id": 1,
                    "category": "Food",
                    "budgetAmount": 300.0,
                    "month": month,
                    "year": year
                }]))
            }),
        ))
        .await;
        let client = ApiClient::new(&url);

        let budgets = client
            .get_budgets(&mut logged_in_session(), 3, 2024)
            .await
            .unwrap();

        assert_eq!(
            budgets,
            vec![Budget {
                id: 1,
                category: "Food".to_owned(),
                budget_amount: 300.0,
                month: 3,
                year: 2024
            }]
        );
    }

    #[tokio::test]
    async fn get_budget_progress_uses_query() {
        let url = spawn_mock_api(Router::new().route(
            "/api/budgets/progress",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!([{
                    "id": 1,
                    "category": format!("{}/{}", params["month"], params["year"]),
                    "budgetAmount": 100.0,
                    "spent": 95.0,
                    "remaining": 5.0,
                    "percentage": 95
                }]))
            }),
        ))
        .await;
        let client = ApiClient::new(&url);

        let progress = client
            .get_budget_progress(&mut logged_in_session(), 12, 2025)
            .await
            .unwrap();

        assert_eq!(progress.len(), 1);
        assert_eq!(progress[0].category, "12/2025");
        assert_eq!(progress[0].percentage, 95.0);
    }

    #[tokio::test]
    async fn create_budget_posts_budget_amount() {
        let url = spawn_mock_api(Router::new().route(
            "/api/budgets",
            post(|Json(body): Json<Value>| async move {
                if body["budgetAmount"] == 250.0 && body["month"] == 1 {
                    StatusCode::CREATED
                } else {
                    StatusCode::BAD_REQUEST
                }
            }),
        ))
        .await;
        let client = ApiClient::new(&url);

        let result = client
            .create_budget(
                &mut logged_in_session(),
                &BudgetData {
                    category: "Food".to_owned(),
                    budget_amount: 250.0,
                    month: 1,
                    year: 2024,
                },
            )
            .await;

        assert_eq!(result, Ok(()));
    }
}
