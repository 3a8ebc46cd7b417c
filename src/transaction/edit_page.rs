//! The pages for editing a single expense or income.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    api::ApiClient,
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, LINK_STYLE, base, dollar_input_styles, submit_button},
    navigation::NavBar,
    session::{CookieSessionStore, SessionStore},
};

use super::form::{ExpenseFormValues, IncomeFormValues, expense_form_fields, income_form_fields};

fn edit_page(title: &str, update_url: &str, fields: Markup, full_name: Option<&str>) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW)
        .with_user_name(full_name)
        .into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            div class="w-full space-y-4 md:space-y-6"
            {
                h1 class="text-xl font-bold" { (title) }

                form
                    hx-put=(update_url)
                    hx-target-error="#alert-container"
                    hx-disabled-elt="find button"
                    class="w-full space-y-4 md:space-y-6"
                {
                    (fields)

                    (submit_button("Save Changes"))
                }

                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Cancel" }
            }
        }
    };

    base(title, &[dollar_input_styles()], &content)
}

/// Render the form for editing the expense with `expense_id`.
pub async fn get_edit_expense_page(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Path(expense_id): Path<i64>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    let expense = match api.get_expense(&mut session, expense_id).await {
        Ok(expense) => expense,
        Err(error) => return error.into_response_with_jar(session.into_jar()),
    };

    let fields = expense_form_fields(&ExpenseFormValues {
        amount: Some(expense.amount),
        category: &expense.category,
        description: expense.description.as_deref().unwrap_or_default(),
        transaction_date: expense.transaction_date,
    });
    let full_name = session.read().full_name;

    edit_page(
        "Edit Expense",
        &format_endpoint(endpoints::EXPENSE_API, expense_id),
        fields,
        full_name.as_deref(),
    )
    .into_response()
}

/// Render the form for editing the income with `income_id`.
pub async fn get_edit_income_page(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Path(income_id): Path<i64>,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    let income = match api.get_income(&mut session, income_id).await {
        Ok(income) => income,
        Err(error) => return error.into_response_with_jar(session.into_jar()),
    };

    let fields = income_form_fields(&IncomeFormValues {
        amount: Some(income.amount),
        source: &income.source,
        description: income.description.as_deref().unwrap_or_default(),
        frequency: income.frequency,
        transaction_date: income.transaction_date,
        recurring: income.recurring,
    });
    let full_name = session.read().full_name;

    edit_page(
        "Edit Income",
        &format_endpoint(endpoints::INCOME_API, income_id),
        fields,
        full_name.as_deref(),
    )
    .into_response()
}
