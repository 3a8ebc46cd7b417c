//! Narrows the aggregated transactions down to what the filter form asks for.

use serde::{Deserialize, Serialize};
use time::Date;

use super::core::{Transaction, TransactionType};

/// Which kinds of transaction to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Expense,
    Income,
}

impl TypeFilter {
    fn matches(self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Expense => transaction_type == TransactionType::Expense,
            TypeFilter::Income => transaction_type == TransactionType::Income,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Expense => "expense",
            TypeFilter::Income => "income",
        }
    }
}

/// The filters from the transactions page query string.
///
/// Every field is optional and a transaction must satisfy all of the fields
/// that are set. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(rename = "type", default)]
    pub transaction_type: Option<TypeFilter>,
    /// Must equal the category or source exactly.
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive text to look for in the description or the category
    /// or source. Whitespace is part of the text.
    #[serde(default)]
    pub search: Option<String>,
    /// The earliest date to include.
    #[serde(default)]
    pub start_date: Option<Date>,
    /// The latest date to include.
    #[serde(default)]
    pub end_date: Option<Date>,
}

impl FilterCriteria {
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }

    fn search(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|search| !search.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether any filter is set.
    pub fn is_active(&self) -> bool {
        self.transaction_type.unwrap_or_default() != TypeFilter::All
            || self.category().is_some()
            || self.search().is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
    }
}

/// Keep the transactions that satisfy every filter in `criteria`, in their
/// original order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    criteria: &FilterCriteria,
) -> Vec<&'a Transaction> {
    let type_filter = criteria.transaction_type.unwrap_or_default();
    let category = criteria.category();
    let search = criteria.search();

    transactions
        .iter()
        .filter(|transaction| type_filter.matches(transaction.transaction_type))
        .filter(|transaction| category.is_none_or(|category| transaction.category_or_source == category))
        .filter(|transaction| {
            search
                .as_deref()
                .is_none_or(|search| matches_search(transaction, search))
        })
        .filter(|transaction| {
            criteria
                .start_date
                .is_none_or(|start| transaction.transaction_date >= start)
        })
        .filter(|transaction| {
            criteria
                .end_date
                .is_none_or(|end| transaction.transaction_date <= end)
        })
        .collect()
}

/// `search` must already be lowercase.
fn matches_search(transaction: &Transaction, search: &str) -> bool {
    let in_description = transaction
        .description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(search));

    in_description || transaction.category_or_source.to_lowercase().contains(search)
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;
    use axum_extra::extract::Query;
    use time::{Date, macros::date};

    use crate::transaction::core::{Transaction, TransactionType};

    use super::{FilterCriteria, TypeFilter, filter_transactions};

    fn transaction(
        id: i64,
        transaction_type: TransactionType,
        category_or_source: &str,
        description: Option<&str>,
        transaction_date: Date,
    ) -> Transaction {
        Transaction {
            id,
            amount: 10.0,
            transaction_date,
            description: description.map(str::to_owned),
            category_or_source: category_or_source.to_owned(),
            transaction_type,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            transaction(
                2,
                TransactionType::Expense,
                "Transport",
                Some("Bus fare"),
                date!(2024 - 01 - 10),
            ),
            transaction(
                1,
                TransactionType::Income,
                "Salary",
                None,
                date!(2024 - 01 - 07),
            ),
            transaction(
                1,
                TransactionType::Expense,
                "Food",
                Some("Lunch at the bus station"),
                date!(2024 - 01 - 05),
            ),
        ]
    }

    fn ids(transactions: &[&Transaction]) -> Vec<(TransactionType, i64)> {
        transactions
            .iter()
            .map(|t| (t.transaction_type, t.id))
            .collect()
    }

    #[test]
    fn no_criteria_keeps_everything() {
        let transactions = sample();

        let got = filter_transactions(&transactions, &FilterCriteria::default());

        assert_eq!(got.len(), 3);
    }

    #[test]
    fn type_expense_keeps_expenses_in_order() {
        let transactions = sample();
        let criteria = FilterCriteria {
            transaction_type: Some(TypeFilter::Expense),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &criteria);

        assert_eq!(
            ids(&got),
            vec![(TransactionType::Expense, 2), (TransactionType::Expense, 1)]
        );
    }

    #[test]
    fn type_income_keeps_incomes() {
        let transactions = sample();
        let criteria = FilterCriteria {
            transaction_type: Some(TypeFilter::Income),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &criteria);

        assert_eq!(ids(&got), vec![(TransactionType::Income, 1)]);
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let transactions = sample();

        let exact = FilterCriteria {
            category: Some("Food".to_owned()),
            ..Default::default()
        };
        let wrong_case = FilterCriteria {
            category: Some("food".to_owned()),
            ..Default::default()
        };
        let partial = FilterCriteria {
            category: Some("Foo".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            ids(&filter_transactions(&transactions, &exact)),
            vec![(TransactionType::Expense, 1)]
        );
        assert!(filter_transactions(&transactions, &wrong_case).is_empty());
        assert!(filter_transactions(&transactions, &partial).is_empty());
    }

    #[test]
    fn search_matches_description_or_category() {
        let transactions = sample();
        let criteria = FilterCriteria {
            search: Some("BUS".to_owned()),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &criteria);

        assert_eq!(
            ids(&got),
            vec![(TransactionType::Expense, 2), (TransactionType::Expense, 1)]
        );

        let by_source = FilterCriteria {
            search: Some("sal".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_transactions(&transactions, &by_source)),
            vec![(TransactionType::Income, 1)]
        );
    }

    #[test]
    fn category_and_search_must_both_match() {
        let transactions = sample();
        let criteria = FilterCriteria {
            category: Some("Food".to_owned()),
            search: Some("bus".to_owned()),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &criteria);

        assert_eq!(ids(&got), vec![(TransactionType::Expense, 1)]);
        for transaction in got {
            assert_eq!(transaction.category_or_source, "Food");
            assert!(
                transaction
                    .description
                    .as_deref()
                    .unwrap()
                    .to_lowercase()
                    .contains("bus")
            );
        }

        let no_overlap = FilterCriteria {
            category: Some("Salary".to_owned()),
            search: Some("bus".to_owned()),
            ..Default::default()
        };
        assert!(filter_transactions(&transactions, &no_overlap).is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let transactions = sample();
        let criteria = FilterCriteria {
            start_date: Some(date!(2024 - 01 - 07)),
            end_date: Some(date!(2024 - 01 - 10)),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &criteria);

        assert_eq!(
            ids(&got),
            vec![(TransactionType::Expense, 2), (TransactionType::Income, 1)]
        );
    }

    #[test]
    fn open_ended_date_ranges() {
        let transactions = sample();
        let from = FilterCriteria {
            start_date: Some(date!(2024 - 01 - 08)),
            ..Default::default()
        };
        let until = FilterCriteria {
            end_date: Some(date!(2024 - 01 - 05)),
            ..Default::default()
        };

        assert_eq!(
            ids(&filter_transactions(&transactions, &from)),
            vec![(TransactionType::Expense, 2)]
        );
        assert_eq!(
            ids(&filter_transactions(&transactions, &until)),
            vec![(TransactionType::Expense, 1)]
        );
    }

    #[test]
    fn search_whitespace_is_matched_literally() {
        let transactions = sample();
        let trailing_space = FilterCriteria {
            search: Some("salary ".to_owned()),
            ..Default::default()
        };
        let inner_space = FilterCriteria {
            search: Some("bus ".to_owned()),
            ..Default::default()
        };
        let only_spaces = FilterCriteria {
            search: Some("   ".to_owned()),
            ..Default::default()
        };

        assert!(filter_transactions(&transactions, &trailing_space).is_empty());
        assert_eq!(
            ids(&filter_transactions(&transactions, &inner_space)),
            vec![(TransactionType::Expense, 2), (TransactionType::Expense, 1)]
        );
        assert!(only_spaces.is_active());
        assert!(filter_transactions(&transactions, &only_spaces).is_empty());
    }

    #[test]
    fn empty_strings_are_ignored() {
        let transactions = sample();
        let criteria = FilterCriteria {
            transaction_type: Some(TypeFilter::All),
            category: Some(String::new()),
            search: Some(String::new()),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &criteria);

        assert_eq!(got.len(), 3);
        assert!(!criteria.is_active());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let criteria = FilterCriteria {
            search: Some("anything".to_owned()),
            ..Default::default()
        };

        assert!(filter_transactions(&[], &criteria).is_empty());
        assert!(filter_transactions(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn parses_query_string_with_empty_fields() {
        let uri: Uri = "/transactions?type=expense&category=&search=bus&startDate=2024-01-01&endDate="
            .parse()
            .unwrap();
        let Query(criteria) = Query::<FilterCriteria>::try_from_uri(&uri).unwrap();

        assert_eq!(
            criteria,
            FilterCriteria {
                transaction_type: Some(TypeFilter::Expense),
                category: None,
                search: Some("bus".to_owned()),
                start_date: Some(date!(2024 - 01 - 01)),
                end_date: None,
            }
        );
    }
}
