//! Loads the transactions for one page view.

use crate::{Error, api::ApiClient, session::SessionStore};

use super::core::{Transaction, aggregate};

/// Fetch the user's expenses and incomes and merge them, newest first.
///
/// Each call fetches fresh copies from the API; nothing is cached between
/// page views.
///
/// # Errors
///
/// Fails if either list cannot be fetched. If the session has expired the
/// session is cleared and [Error::AuthExpired] is returned.
pub async fn load_transactions(
    api: &ApiClient,
    session: &mut impl SessionStore,
) -> Result<Vec<Transaction>, Error> {
    let expenses = api.get_expenses(session).await?;
    let incomes = api.get_incomes(session).await?;

    tracing::debug!(
        "Loaded {} expenses and {} incomes",
        expenses.len(),
        incomes.len()
    );

    Ok(aggregate(expenses, incomes))
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::json;
    use time::macros::date;

    use crate::{
        Error,
        api::ApiClient,
        session::{MemorySessionStore, SessionStore},
        test_utils::spawn_mock_api,
        transaction::core::TransactionType,
    };

    use super::load_transactions;

    fn logged_in_session() -> MemorySessionStore {
        let mut session = MemorySessionStore::new();
        session.save("abc123", "jane@example.com", "Jane Doe");
        session
    }

    #[tokio::test]
    async fn loads_and_aggregates() {
        let url = spawn_mock_api(
            Router::new()
                .route(
                    "/api/expenses",
                    get(|| async {
                        Json(json!([
                            {"id": 1, "amount": 10.0, "category": "Food", "transactionDate": "2024-01-05"},
                            {"id": 2, "amount": 20.0, "category": "Food", "transactionDate": "2024-01-10"}
                        ]))
                    }),
                )
                .route(
                    "/api/incomes",
                    get(|| async {
                        Json(json!([
                            {"id": 1, "amount": 100.0, "source": "Salary", "transactionDate": "2024-01-07",
                             "frequency": "MONTHLY", "recurring": true}
                        ]))
                    }),
                ),
        )
        .await;
        let api = ApiClient::new(&url);

        let transactions = load_transactions(&api, &mut logged_in_session())
            .await
            .unwrap();

        let got: Vec<_> = transactions
            .iter()
            .map(|t| (t.transaction_type, t.transaction_date))
            .collect();
        assert_eq!(
            got,
            vec![
                (TransactionType::Expense, date!(2024 - 01 - 10)),
                (TransactionType::Income, date!(2024 - 01 - 07)),
                (TransactionType::Expense, date!(2024 - 01 - 05)),
            ]
        );
    }

    #[tokio::test]
    async fn expired_session_stops_loading() {
        let url = spawn_mock_api(
            Router::new()
                .route("/api/expenses", get(|| async { Json(json!([])) }))
                .route("/api/incomes", get(|| async { StatusCode::UNAUTHORIZED })),
        )
        .await;
        let api = ApiClient::new(&url);
        let mut session = logged_in_session();

        let result = load_transactions(&api, &mut session).await;

        assert_eq!(result, Err(Error::AuthExpired));
        assert!(!session.is_authenticated());
    }
}
