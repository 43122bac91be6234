//! Expense display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::models::Expense;
use crate::services::total_expenses;

use super::{date, money, table};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format expenses as a table followed by their total
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses
        .iter()
        .map(|expense| ExpenseRow {
            date: date(expense.date, settings),
            description: expense.description.clone(),
            category: expense.category.label(),
            amount: money(expense.amount, settings),
            status: expense.status.to_string(),
        })
        .collect();

    let mut output = table(rows, "");
    output.push_str(&format!(
        "\n{} expense(s), total {}\n",
        expenses.len(),
        money(total_expenses(expenses), settings)
    ));
    output
}
