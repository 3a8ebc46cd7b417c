//! Defines the route handler for the page that lists the user's expenses and incomes.

use std::collections::BTreeSet;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, Query};
use maud::{Markup, html};

use crate::{
    api::ApiClient,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
    session::{CookieSessionStore, SessionStore},
};

use super::{
    core::{Transaction, TransactionType},
    filter::{FilterCriteria, TypeFilter, filter_transactions},
    repository::load_transactions,
};

/// Render the user's transactions, narrowed down by the filters in the query string.
pub async fn get_transactions_page(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Query(criteria): Query<FilterCriteria>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    let transactions = match load_transactions(&api, &mut session).await {
        Ok(transactions) => transactions,
        Err(error) => return error.into_response_with_jar(session.into_jar()),
    };

    let categories = categories(&transactions);
    let filtered = filter_transactions(&transactions, &criteria);
    let full_name = session.read().full_name;

    transactions_view(&filtered, &categories, &criteria, full_name.as_deref()).into_response()
}

/// The distinct categories and sources, sorted alphabetically.
fn categories(transactions: &[Transaction]) -> Vec<&str> {
    transactions
        .iter()
        .map(|transaction| transaction.category_or_source.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn amount_view(transaction: &Transaction) -> (String, &'static str) {
    match transaction.transaction_type {
        TransactionType::Income => (
            format!("+{}", format_currency(transaction.amount)),
            "text-green-700 dark:text-green-300",
        ),
        TransactionType::Expense => (
            format!("-{}", format_currency(transaction.amount)),
            "text-red-700 dark:text-red-300",
        ),
    }
}

fn edit_and_delete_urls(transaction: &Transaction) -> (String, String) {
    match transaction.transaction_type {
        TransactionType::Expense => (
            format_endpoint(endpoints::EDIT_EXPENSE_VIEW, transaction.id),
            format_endpoint(endpoints::EXPENSE_API, transaction.id),
        ),
        TransactionType::Income => (
            format_endpoint(endpoints::EDIT_INCOME_VIEW, transaction.id),
            format_endpoint(endpoints::INCOME_API, transaction.id),
        ),
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let (amount, amount_class) = amount_view(transaction);
    let (edit_url, delete_url) = edit_and_delete_urls(transaction);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-type=(transaction.transaction_type)
        {
            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(transaction.transaction_date) { (transaction.transaction_date) }
            }
            td class=(TABLE_CELL_STYLE) { (transaction.transaction_type) }
            td class=(TABLE_CELL_STYLE) { (transaction.category_or_source) }
            td class=(TABLE_CELL_STYLE) { (transaction.description.as_deref().unwrap_or("-")) }
            td class={ "px-6 py-4 text-right " (amount_class) } { (amount) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        hx-delete=(delete_url)
                        hx-confirm="Are you sure you want to delete this transaction?"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

fn filter_form_view(categories: &[&str], criteria: &FilterCriteria) -> Markup {
    let selected_type = criteria.transaction_type.unwrap_or_default();
    let selected_category = criteria.category.as_deref().unwrap_or_default();

    html! {
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            id="filter-form"
            class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-6 gap-4 items-end w-full"
        {
            div
            {
                label for="filter-type" class=(FORM_LABEL_STYLE) { "Type" }
                select name="type" id="filter-type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for (filter, label) in [
                        (TypeFilter::All, "All"),
                        (TypeFilter::Expense, "Expenses"),
                        (TypeFilter::Income, "Incomes"),
                    ] {
                        option value=(filter.as_str()) selected[filter == selected_type] { (label) }
                    }
                }
            }

            div
            {
                label for="filter-category" class=(FORM_LABEL_STYLE) { "Category" }
                select name="category" id="filter-category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "All categories" }
                    @for category in categories {
                        option value=(category) selected[*category == selected_category] { (category) }
                    }
                }
            }

            div
            {
                label for="filter-search" class=(FORM_LABEL_STYLE) { "Search" }
                input
                    type="search"
                    name="search"
                    id="filter-search"
                    placeholder="Description or category"
                    value=[criteria.search.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="filter-start-date" class=(FORM_LABEL_STYLE) { "From" }
                input
                    type="date"
                    name="startDate"
                    id="filter-start-date"
                    value=[criteria.start_date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="filter-end-date" class=(FORM_LABEL_STYLE) { "To" }
                input
                    type="date"
                    name="endDate"
                    id="filter-end-date"
                    value=[criteria.end_date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-4 items-center"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }

                @if criteria.is_active() {
                    a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) id="clear-filters"
                    {
                        "Clear"
                    }
                }
            }
        }
    }
}

fn transactions_view(
    transactions: &[&Transaction],
    categories: &[&str],
    criteria: &FilterCriteria,
    full_name: Option<&str>,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW)
        .with_user_name(full_name)
        .into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    a href=(endpoints::DASHBOARD_VIEW) class=(LINK_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                (filter_form_view(categories, criteria))

                div class="overflow-x-auto rounded"
                {
                    table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category/Source" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for transaction in transactions {
                                (transaction_row_view(transaction))
                            }

                            @if transactions.is_empty() {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td colspan="6" class="px-6 py-4 text-center"
                                    {
                                        "No transactions found"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}
