//! Budget aggregation
//!
//! Pure arithmetic over already-loaded budget category and expense records.
//! Every function here is total: empty input, zero allocations and overspend
//! all produce defined values.

use tracing::debug;

use crate::models::{
    Band, Budget, BudgetCategory, Category, CategoryStats, EventId, Expense, Money, Summary,
};
use crate::services::filter::{filter_records, Facet, ListFilter};

/// Compute totals across one event's budget categories
pub fn summarize(categories: &[BudgetCategory]) -> Summary {
    let total_allocated: Money = categories.iter().map(|c| c.allocated).sum();
    let total_spent: Money = categories.iter().map(|c| c.spent).sum();

    let summary = Summary {
        total_allocated,
        total_spent,
        remaining: total_allocated - total_spent,
        spent_percentage: total_spent.percent_of(total_allocated),
    };

    debug!(
        categories = categories.len(),
        allocated = total_allocated.minor(),
        spent = total_spent.minor(),
        percent = summary.spent_percentage,
        "summarized budget"
    );

    summary
}

/// Compute remaining amount, percent used and band for one category
pub fn category_breakdown(category: &BudgetCategory) -> CategoryStats {
    let percent_used = category.spent.percent_of(category.allocated);
    CategoryStats {
        remaining: category.remaining(),
        percent_used,
        band: Band::classify(percent_used),
    }
}

/// Build the budget view for one event out of a mixed list of categories
///
/// Categories owned by other events are ignored; the rest keep their input order.
pub fn budget_for_event(event_id: EventId, categories: &[BudgetCategory]) -> Budget {
    let owned: Vec<BudgetCategory> = categories
        .iter()
        .filter(|c| c.event_id == event_id)
        .cloned()
        .collect();
    let total_allocated = owned.iter().map(|c| c.allocated).sum();

    Budget {
        event_id,
        total_allocated,
        categories: owned,
    }
}

impl Budget {
    pub fn summary(&self) -> Summary {
        summarize(&self.categories)
    }

    /// Each category paired with its derived figures, in budget order
    pub fn breakdown(&self) -> Vec<(&BudgetCategory, CategoryStats)> {
        self.categories
            .iter()
            .map(|c| (c, category_breakdown(c)))
            .collect()
    }
}

/// Filter expenses by category and a case-insensitive description search
///
/// Input order is preserved.
pub fn filter_expenses(
    expenses: &[Expense],
    category: Facet<Category>,
    search: &str,
) -> Vec<Expense> {
    let filter = ListFilter::new(category, search);
    let matched = filter_records(expenses, &filter);
    if matched.len() < expenses.len() {
        debug!(
            total = expenses.len(),
            matched = matched.len(),
            "filtered expenses"
        );
    }
    matched
}

/// Sum of the given expense amounts
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}
