//! The fields shared by the add and edit forms for expenses and incomes.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    api::{ExpenseData, Frequency, IncomeData},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The data submitted by an expense form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseForm {
    /// The value of the expense in dollars.
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub transaction_date: Date,
}

impl From<ExpenseForm> for ExpenseData {
    fn from(form: ExpenseForm) -> Self {
        Self {
            amount: form.amount,
            category: form.category.trim().to_owned(),
            description: form.description.trim().to_owned(),
            transaction_date: form.transaction_date,
        }
    }
}

/// The data submitted by an income form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncomeForm {
    /// The value of the income in dollars.
    pub amount: f64,
    pub source: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub frequency: Frequency,
    pub transaction_date: Date,
    /// A checkbox, so any value means checked and a missing field means unchecked.
    #[serde(default)]
    pub recurring: Option<String>,
}

impl From<IncomeForm> for IncomeData {
    fn from(form: IncomeForm) -> Self {
        Self {
            amount: form.amount,
            source: form.source.trim().to_owned(),
            description: form.description.trim().to_owned(),
            frequency: form.frequency,
            transaction_date: form.transaction_date,
            recurring: form.recurring.is_some(),
        }
    }
}

/// The initial values of the expense form fields.
pub struct ExpenseFormValues<'a> {
    pub amount: Option<f64>,
    pub category: &'a str,
    pub description: &'a str,
    pub transaction_date: Date,
}

impl ExpenseFormValues<'_> {
    /// An empty form dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            amount: None,
            category: "",
            description: "",
            transaction_date: today,
        }
    }
}

/// The initial values of the income form fields.
pub struct IncomeFormValues<'a> {
    pub amount: Option<f64>,
    pub source: &'a str,
    pub description: &'a str,
    pub frequency: Frequency,
    pub transaction_date: Date,
    pub recurring: bool,
}

impl IncomeFormValues<'_> {
    /// An empty one-off income dated `today`.
    pub fn new(today: Date) -> Self {
        Self {
            amount: None,
            source: "",
            description: "",
            frequency: Frequency::OneTime,
            transaction_date: today,
            recurring: false,
        }
    }
}

fn amount_input(id: &str, amount: Option<f64>) -> Markup {
    let amount = amount.map(|amount| format!("{amount:.2}"));

    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { "Amount" }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id=(id)
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    value=[amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

fn text_input(name: &str, id: &str, label: &str, value: &str, required: bool) -> Markup {
    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { (label) }

            input
                name=(name)
                id=(id)
                type="text"
                value=(value)
                required[required]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn date_input(id: &str, date: Date) -> Markup {
    html! {
        div
        {
            label for=(id) class=(FORM_LABEL_STYLE) { "Date" }

            input
                name="transaction_date"
                id=(id)
                type="date"
                value=(date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// The amount, category, description and date inputs of an expense form.
pub fn expense_form_fields(values: &ExpenseFormValues<'_>) -> Markup {
    html! {
        (amount_input("expense-amount", values.amount))
        (text_input("category", "expense-category", "Category", values.category, true))
        (text_input("description", "expense-description", "Description", values.description, false))
        (date_input("expense-date", values.transaction_date))
    }
}

/// The amount, source, description, frequency, date and recurring inputs of
/// an income form.
pub fn income_form_fields(values: &IncomeFormValues<'_>) -> Markup {
    html! {
        (amount_input("income-amount", values.amount))
        (text_input("source", "income-source", "Source", values.source, true))
        (text_input("description", "income-description", "Description", values.description, false))

        div
        {
            label for="income-frequency" class=(FORM_LABEL_STYLE) { "Frequency" }

            select name="frequency" id="income-frequency" class=(FORM_TEXT_INPUT_STYLE)
            {
                @for frequency in Frequency::ALL {
                    option value=(frequency.as_str()) selected[frequency == values.frequency]
                    {
                        (frequency)
                    }
                }
            }
        }

        (date_input("income-date", values.transaction_date))

        div class="flex items-center gap-x-3"
        {
            input
                type="checkbox"
                name="recurring"
                id="income-recurring"
                value="true"
                checked[values.recurring]
                class="rounded-xs";

            label for="income-recurring" class=(FORM_LABEL_STYLE) { "Recurring" }
        }
    }
}
