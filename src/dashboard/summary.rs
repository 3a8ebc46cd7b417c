//! The monthly totals and budget figures shown at the top of the dashboard.

use time::{Date, Month};

use crate::api::{Budget, Expense, Income};

/// Progress at or above this percentage of a budget is shown as a warning.
pub const WARNING_THRESHOLD: f64 = 70.0;
/// Progress at or above this percentage of a budget is shown as a danger.
pub const DANGER_THRESHOLD: f64 = 90.0;

/// The first and last day of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: Date,
    pub end: Date,
}

impl MonthRange {
    /// The month that `date` falls in.
    pub fn containing(date: Date) -> Self {
        let start = date.replace_day(1).unwrap_or(date);
        let end = start
            .replace_day(date.month().length(date.year()))
            .unwrap_or(date);

        Self { start, end }
    }

    pub fn month(self) -> Month {
        self.start.month()
    }

    /// The month number, 1 for January to 12 for December.
    pub fn month_number(self) -> u8 {
        self.start.month() as u8
    }

    pub fn year(self) -> i32 {
        self.start.year()
    }

    pub fn contains(self, date: Date) -> bool {
        (self.start..=self.end).contains(&date)
    }
}

/// The user's income and spending for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses. Negative when the user spent more than they earned.
    pub balance: f64,
    /// Total expenses as a percentage of the total budget, or `None` if no
    /// budgets were set for the month.
    pub budget_status: Option<f64>,
}

/// Summarize `month`.
///
/// `expenses` are expected to be already limited to the month. `incomes` may
/// cover any period and only those dated inside the month are counted.
pub fn summarize_month(
    month: MonthRange,
    expenses: &[Expense],
    incomes: &[Income],
    budgets: &[Budget],
) -> MonthSummary {
    let total_expenses: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let total_income: f64 = incomes
        .iter()
        .filter(|income| month.contains(income.transaction_date))
        .map(|income| income.amount)
        .sum();

    let budget_status = (!budgets.is_empty()).then(|| {
        let total_budget: f64 = budgets.iter().map(|budget| budget.budget_amount).sum();

        if total_budget > 0.0 {
            total_expenses / total_budget * 100.0
        } else {
            0.0
        }
    });

    MonthSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        budget_status,
    }
}

/// How close spending is to a budget's limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Normal,
    Warning,
    Danger,
}

impl ProgressLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= DANGER_THRESHOLD {
            ProgressLevel::Danger
        } else if percentage >= WARNING_THRESHOLD {
            ProgressLevel::Warning
        } else {
            ProgressLevel::Normal
        }
    }
}

/// The width of a progress bar, which stops at 100% for overspent budgets.
pub fn display_percentage(percentage: f64) -> f64 {
    percentage.min(100.0)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::api::{Budget, Expense, Frequency, Income};

    use super::{MonthRange, ProgressLevel, display_percentage, summarize_month};

    fn expense(amount: f64, transaction_date: time::Date) -> Expense {
        Expense {
            id: 1,
            amount,
            category: "Food".to_owned(),
            description: None,
            transaction_date,
        }
    }

    fn income(amount: f64, transaction_date: time::Date) -> Income {
        Income {
            id: 1,
            amount,
            source: "Salary".to_owned(),
            description: None,
            frequency: Frequency::OneTime,
            transaction_date,
            recurring: false,
        }
    }

    fn budget(budget_amount: f64) -> Budget {
        Budget {
            id: 1,
            category: "Food".to_owned(),
            budget_amount,
            month: 1,
            year: 2024,
        }
    }

    #[test]
    fn month_range_covers_whole_month() {
        assert_eq!(
            MonthRange::containing(date!(2024 - 02 - 15)),
            MonthRange {
                start: date!(2024 - 02 - 01),
                end: date!(2024 - 02 - 29),
            }
        );
        assert_eq!(
            MonthRange::containing(date!(2023 - 12 - 31)).end,
            date!(2023 - 12 - 31)
        );
    }

    #[test]
    fn only_counts_incomes_inside_the_month() {
        let month = MonthRange::containing(date!(2024 - 01 - 15));
        let incomes = [
            income(100.0, date!(2024 - 01 - 01)),
            income(50.0, date!(2024 - 01 - 31)),
            income(1000.0, date!(2023 - 12 - 31)),
            income(1000.0, date!(2024 - 02 - 01)),
        ];
        let expenses = [expense(30.0, date!(2024 - 01 - 10))];

        let summary = summarize_month(month, &expenses, &incomes, &[]);

        assert_eq!(summary.total_income, 150.0);
        assert_eq!(summary.total_expenses, 30.0);
        assert_eq!(summary.balance, 120.0);
    }

    #[test]
    fn budget_status_is_absent_without_budgets() {
        let month = MonthRange::containing(date!(2024 - 01 - 15));

        let summary = summarize_month(month, &[expense(30.0, date!(2024 - 01 - 10))], &[], &[]);

        assert_eq!(summary.budget_status, None);
        assert_eq!(summary.balance, -30.0);
    }

    #[test]
    fn budget_status_is_share_of_total_budget() {
        let month = MonthRange::containing(date!(2024 - 01 - 15));
        let expenses = [expense(75.0, date!(2024 - 01 - 10))];

        let summary = summarize_month(month, &expenses, &[], &[budget(100.0), budget(200.0)]);

        assert_eq!(summary.budget_status, Some(25.0));
    }

    #[test]
    fn zero_budget_gives_zero_status() {
        let month = MonthRange::containing(date!(2024 - 01 - 15));
        let expenses = [expense(75.0, date!(2024 - 01 - 10))];

        let summary = summarize_month(month, &expenses, &[], &[budget(0.0)]);

        assert_eq!(summary.budget_status, Some(0.0));
    }

    #[test]
    fn progress_levels_change_at_70_and_90() {
        assert_eq!(ProgressLevel::from_percentage(69.9), ProgressLevel::Normal);
        assert_eq!(ProgressLevel::from_percentage(70.0), ProgressLevel::Warning);
        assert_eq!(ProgressLevel::from_percentage(89.9), ProgressLevel::Warning);
        assert_eq!(ProgressLevel::from_percentage(90.0), ProgressLevel::Danger);
        assert_eq!(ProgressLevel::from_percentage(150.0), ProgressLevel::Danger);
    }

    #[test]
    fn display_percentage_stops_at_100() {
        assert_eq!(display_percentage(45.5), 45.5);
        assert_eq!(display_percentage(150.0), 100.0);
    }
}
