//! The normalized view of expenses and incomes shown on the transactions page.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::api::{Expense, Income};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was spent or earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    /// The lowercase name used in URLs and forms, e.g. "expense".
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense or income, normalized so both can be listed in one table.
///
/// This is a copy of a record owned by the finance API and is rebuilt on every
/// page load.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the expense or income. IDs are only unique per type.
    pub id: i64,
    /// The amount of money in dollars, always as recorded (never negated).
    pub amount: f64,
    /// When the transaction happened.
    pub transaction_date: Date,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// The category of an expense or the source of an income.
    pub category_or_source: String,
    pub transaction_type: TransactionType,
}

impl From<Expense> for Transaction {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            transaction_date: expense.transaction_date,
            description: expense.description,
            category_or_source: expense.category,
            transaction_type: TransactionType::Expense,
        }
    }
}

impl From<Income> for Transaction {
    fn from(income: Income) -> Self {
        Self {
            id: income.id,
            amount: income.amount,
            transaction_date: income.transaction_date,
            description: income.description,
            category_or_source: income.source,
            transaction_type: TransactionType::Income,
        }
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Merge `expenses` and `incomes` into one list, newest first.
///
/// Transactions on the same date keep their input order with expenses before
/// incomes.
pub fn aggregate(expenses: Vec<Expense>, incomes: Vec<Income>) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = expenses
        .into_iter()
        .map(Transaction::from)
        .chain(incomes.into_iter().map(Transaction::from))
        .collect();

    // `sort_by` is stable.
    transactions.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));

    transactions
}
