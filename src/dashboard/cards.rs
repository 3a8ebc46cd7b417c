//! Card components for the monthly summary and budget progress.

use maud::{Markup, html};

use crate::{
    api::BudgetProgress,
    html::{CARD_STYLE, format_currency},
};

use super::summary::{MonthSummary, ProgressLevel, display_percentage};

fn summary_card(id: &str, title: &str, value: &str, value_class: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h3 class="text-sm text-gray-600 dark:text-gray-400" { (title) }
            p id=(id) class={ "text-2xl font-bold " (value_class) } { (value) }
        }
    }
}

/// Renders the total income, total expenses, balance and budget status cards.
pub(super) fn summary_cards_view(summary: &MonthSummary) -> Markup {
    let balance_class = if summary.balance < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    };
    let budget_status = summary
        .budget_status
        .map_or_else(|| "-".to_owned(), |status| format!("{status:.1}%"));

    html! {
        section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 w-full"
        {
            (summary_card("total-income", "Total Income", &format_currency(summary.total_income), ""))
            (summary_card("total-expenses", "Total Expenses", &format_currency(summary.total_expenses), ""))
            (summary_card("balance", "Balance", &format_currency(summary.balance), balance_class))
            (summary_card("budget-status", "Budget Used", &budget_status, ""))
        }
    }
}

fn progress_bar_class(level: ProgressLevel) -> &'static str {
    match level {
        ProgressLevel::Normal => "bg-blue-600 dark:bg-blue-500",
        ProgressLevel::Warning => "bg-yellow-400 dark:bg-yellow-500",
        ProgressLevel::Danger => "bg-red-600 dark:bg-red-500",
    }
}

fn progress_level_name(level: ProgressLevel) -> &'static str {
    match level {
        ProgressLevel::Normal => "normal",
        ProgressLevel::Warning => "warning",
        ProgressLevel::Danger => "danger",
    }
}

/// Renders a horizontal progress bar for one budget.
fn progress_bar(percentage: f64) -> Markup {
    let width = display_percentage(percentage).max(0.0);
    let level = ProgressLevel::from_percentage(width);

    html! {
        div
            class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-4"
            role="progressbar"
            aria-valuenow=(format!("{width:.0}"))
            aria-valuemin="0"
            aria-valuemax="100"
            data-level=(progress_level_name(level))
        {
            div
                class={ "h-4 rounded-full text-xs text-white text-center leading-4 " (progress_bar_class(level)) }
                style=(format!("width: {width:.1}%"))
            {
                (format!("{width:.0}%"))
            }
        }
    }
}

/// Renders the spending against each budget set for the month.
pub(super) fn budget_progress_view(progress: &[BudgetProgress]) -> Markup {
    html! {
        section id="budget-progress" class={ (CARD_STYLE) " space-y-4" }
        {
            h2 class="text-lg font-semibold" { "Budget Progress" }

            @if progress.is_empty() {
                p class="text-gray-600 dark:text-gray-400"
                {
                    "No budgets set for this month. Create a budget below to start tracking!"
                }
            }

            @for budget in progress {
                div class="space-y-1" data-budget-category=(budget.category)
                {
                    div class="flex justify-between text-sm"
                    {
                        span class="font-medium" { (budget.category) }
                        span
                        {
                            (format_currency(budget.spent)) " / " (format_currency(budget.budget_amount))
                        }
                    }

                    (progress_bar(budget.percentage))
                }
            }
        }
    }
}
