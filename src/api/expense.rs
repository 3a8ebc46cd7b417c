//! Expense records and their endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, session::SessionStore};

use super::ApiClient;

/// An expense as stored by the finance API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    /// The amount spent in dollars.
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub transaction_date: Date,
}

/// The fields sent when creating or updating an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseData {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub transaction_date: Date,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DateRange {
    start_date: String,
    end_date: String,
}

impl ApiClient {
    /// Get all of the user's expenses.
    pub async fn get_expenses(
        &self,
        session: &mut impl SessionStore,
    ) -> Result<Vec<Expense>, Error> {
        self.get_json(session, "/expenses", "Failed to load expenses")
            .await
    }

    /// Get the user's expenses dated between `start` and `end`, inclusive.
    pub async fn get_expenses_in_range(
        &self,
        session: &mut impl SessionStore,
        start: Date,
        end: Date,
    ) -> Result<Vec<Expense>, Error> {
        let query = serde_urlencoded::to_string(DateRange {
            start_date: start.to_string(),
            end_date: end.to_string(),
        })
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.get_json(
            session,
            &format!("/expenses/date-range?{query}"),
            "Failed to load expenses",
        )
        .await
    }

    /// Get a single expense by its ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if the user has no expense with `id`.
    pub async fn get_expense(
        &self,
        session: &mut impl SessionStore,
        id: i64,
    ) -> Result<Expense, Error> {
        self.get_expenses(session)
            .await?
            .into_iter()
            .find(|expense| expense.id == id)
            .ok_or(Error::NotFound)
    }

    /// Record a new expense.
    pub async fn create_expense(
        &self,
        session: &mut impl SessionStore,
        expense: &ExpenseData,
    ) -> Result<(), Error> {
        self.send_json(
            session,
            Method::POST,
            "/expenses",
            Some(expense),
            "Failed to add expense",
        )
        .await
        .map(|_| ())
    }

    /// Replace the fields of the expense with `id`.
    pub async fn update_expense(
        &self,
        session: &mut impl SessionStore,
        id: i64,
        expense: &ExpenseData,
    ) -> Result<(), Error> {
        self.send_json(
            session,
            Method::PUT,
            &format!("/expenses/{id}"),
            Some(expense),
            "Failed to update transaction",
        )
        .await
        .map(|_| ())
    }

    /// Delete the expense with `id`.
    pub async fn delete_expense(
        &self,
        session: &mut impl SessionStore,
        id: i64,
    ) -> Result<(), Error> {
        self.send_json::<()>(
            session,
            Method::DELETE,
            &format!("/expenses/{id}"),
            None,
            "Failed to delete transaction",
        )
        .await
        .map(|_| ())
    }
}
