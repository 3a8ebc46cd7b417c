//! Income records and their endpoints.

use std::fmt::Display;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, session::SessionStore};

use super::ApiClient;

/// How often an income is received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
    #[default]
    OneTime,
}

impl Frequency {
    /// Every frequency in the order it is offered to the user.
    pub const ALL: [Frequency; 7] = [
        Frequency::OneTime,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
    ];

    /// The value used on the wire and in HTML forms, e.g. "ONE_TIME".
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Quarterly => "QUARTERLY",
            Frequency::Yearly => "YEARLY",
            Frequency::OneTime => "ONE_TIME",
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Bi-weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
            Frequency::OneTime => "One time",
        };

        write!(f, "{label}")
    }
}

/// An income as stored by the finance API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: i64,
    /// The amount received in dollars.
    pub amount: f64,
    pub source: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    pub transaction_date: Date,
    #[serde(default)]
    pub recurring: bool,
}

/// The fields sent when creating or updating an income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeData {
    pub amount: f64,
    pub source: String,
    pub description: String,
    pub frequency: Frequency,
    pub transaction_date: Date,
    pub recurring: bool,
}

impl ApiClient {
    /// Get all of the user's incomes.
    pub async fn get_incomes(&self, session: &mut impl SessionStore) -> Result<Vec<Income>, Error> {
        self.get_json(session, "/incomes", "Failed to load incomes")
            .await
    }

    /// Get a single income by its ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if the user has no income with `id`.
    pub async fn get_income(
        &self,
        session: &mut impl SessionStore,
        id: i64,
    ) -> Result<Income, Error> {
        self.get_incomes(session)
            .await?
            .into_iter()
            .find(|income| income.id == id)
            .ok_or(Error::NotFound)
    }

    /// Record a new income.
    pub async fn create_income(
        &self,
        session: &mut impl SessionStore,
        income: &IncomeData,
    ) -> Result<(), Error> {
        self.send_json(
            session,
            Method::POST,
            "/incomes",
            Some(income),
            "Failed to add income",
        )
        .await
        .map(|_| ())
    }

    /// Replace the fields of the income with `id`.
    pub async fn update_income(
        &self,
        session: &mut impl SessionStore,
        id: i64,
        income: &IncomeData,
    ) -> Result<(), Error> {
        self.send_json(
            session,
            Method::PUT,
            &format!("/incomes/{id}"),
            Some(income),
            "Failed to update transaction",
        )
        .await
        .map(|_| ())
    }

    /// Delete the income with `id`.
    pub async fn delete_income(&self, session: &mut impl SessionStore, id: i64) -> Result<(), Error> {
        self.send_json::<()>(
            session,
            Method::DELETE,
            &format!("/incomes/{id}"),
            None,
            "Failed to delete transaction",
        )
        .await
        .map(|_| ())
    }
}
