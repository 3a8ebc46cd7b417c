//! The dashboard page: this month's totals, budget progress and the forms
//! for adding expenses, incomes and budgets.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    AppState, Error,
    api::{ApiClient, BudgetProgress},
    endpoints,
    html::{
        CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
        dollar_input_styles, submit_button,
    },
    navigation::NavBar,
    session::{CookieSessionStore, SessionStore},
    timezone::local_today,
    transaction::{ExpenseFormValues, IncomeFormValues, expense_form_fields, income_form_fields},
};

use super::{
    cards::{budget_progress_view, summary_cards_view},
    summary::{MonthRange, MonthSummary, summarize_month},
};

const LONG_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[weekday], [month repr:long] [day padding:none], [year]");

/// The state needed for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub api: ApiClient,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    today: Date,
    month: MonthRange,
    summary: MonthSummary,
    progress: Vec<BudgetProgress>,
}

/// Display a page with an overview of the user's month.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    jar: PrivateCookieJar,
) -> Response {
    let mut session = CookieSessionStore::new(jar);

    match build_dashboard_data(&state, &mut session).await {
        Ok(data) => {
            let full_name = session.read().full_name;
            dashboard_view(&data, full_name.as_deref()).into_response()
        }
        Err(error) => error.into_response_with_jar(session.into_jar()),
    }
}

/// Fetches this month's expenses, incomes, budgets and budget progress.
///
/// # Errors
/// Returns an error if the timezone is invalid or any request to the API fails.
async fn build_dashboard_data(
    state: &DashboardState,
    session: &mut CookieSessionStore,
) -> Result<DashboardData, Error> {
    let today = local_today(&state.local_timezone)?;
    let month = MonthRange::containing(today);
    let api = &state.api;

    let expenses = api
        .get_expenses_in_range(session, month.start, month.end)
        .await?;
    let incomes = api.get_incomes(session).await?;
    let budgets = api
        .get_budgets(session, month.month_number(), month.year())
        .await?;
    let progress = api
        .get_budget_progress(session, month.month_number(), month.year())
        .await?;

    Ok(DashboardData {
        today,
        month,
        summary: summarize_month(month, &expenses, &incomes, &budgets),
        progress,
    })
}

fn add_form(title: &str, id: &str, endpoint: &str, fields: Markup, button_label: &str) -> Markup {
    html! {
        section class={ (CARD_STYLE) " space-y-4" }
        {
            h2 class="text-lg font-semibold" { (title) }

            form
                id=(id)
                hx-post=(endpoint)
                hx-target-error="#alert-container"
                hx-disabled-elt="find button"
                class="space-y-4"
            {
                (fields)
                (submit_button(button_label))
            }
        }
    }
}

fn budget_form_fields(month: MonthRange) -> Markup {
    let months = std::iter::successors(Some(Month::January), |month| {
        (*month != Month::December).then(|| month.next())
    });

    html! {
        div
        {
            label for="budget-category" class=(FORM_LABEL_STYLE) { "Category" }
            input
                type="text"
                name="category"
                id="budget-category"
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="budget-amount" class=(FORM_LABEL_STYLE) { "Budget Amount" }
            div class="input-wrapper w-full"
            {
                input
                    type="number"
                    name="budget_amount"
                    id="budget-amount"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div class="grid grid-cols-2 gap-4"
        {
            div
            {
                label for="budget-month" class=(FORM_LABEL_STYLE) { "Month" }
                select name="month" id="budget-month" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for option_month in months {
                        option
                            value=(u8::from(option_month))
                            selected[option_month == month.month()]
                        {
                            (option_month)
                        }
                    }
                }
            }

            div
            {
                label for="budget-year" class=(FORM_LABEL_STYLE) { "Year" }
                input
                    type="number"
                    name="year"
                    id="budget-year"
                    min="2000"
                    max="2100"
                    value=(month.year())
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

fn dashboard_view(data: &DashboardData, full_name: Option<&str>) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW)
        .with_user_name(full_name)
        .into_html();
    let today_label = data
        .today
        .format(LONG_DATE_FORMAT)
        .unwrap_or_else(|_| data.today.to_string());

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl space-y-6"
            {
                header
                {
                    h1 id="greeting" class="text-2xl font-bold"
                    {
                        "Hello, " (full_name.unwrap_or("there"))
                    }
                    p id="current-date" class="text-gray-600 dark:text-gray-400"
                    {
                        time datetime=(data.today) { (today_label) }
                    }
                }

                (summary_cards_view(&data.summary))

                (budget_progress_view(&data.progress))

                div class="grid grid-cols-1 lg:grid-cols-3 gap-4"
                {
                    (add_form(
                        "Add Expense",
                        "expense-form",
                        endpoints::EXPENSES_API,
                        expense_form_fields(&ExpenseFormValues::new(data.today)),
                        "Add Expense",
                    ))
                    (add_form(
                        "Add Income",
                        "income-form",
                        endpoints::INCOMES_API,
                        income_form_fields(&IncomeFormValues::new(data.today)),
                        "Add Income",
                    ))
                    (add_form(
                        "Set Budget",
                        "budget-form",
                        endpoints::BUDGETS_API,
                        budget_form_fields(data.month),
                        "Set Budget",
                    ))
                }
            }
        }
    );

    base("Dashboard", &[dollar_input_styles()], &content)
}
