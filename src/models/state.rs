//! Budget state
//!
//! The income figure plus the ordered list of expense categories. Insertion
//! order is display order.

use super::category::Category;
use super::ids::CategoryId;

/// Income and expense categories for one budget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetState {
    /// Income the categories are measured against
    pub income: f64,

    /// Expense categories in display order
    pub categories: Vec<Category>,
}

impl BudgetState {
    /// Create an empty state (no income, no categories)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of every category amount
    pub fn total_expenses(&self) -> f64 {
        self.categories.iter().map(|c| c.amount).sum()
    }

    /// Income left after expenses; negative when overspent
    pub fn remaining(&self) -> f64 {
        self.income - self.total_expenses()
    }

    /// Get a category by ID
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Get a mutable category by ID
    pub fn category_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Get a category by exact (case-sensitive) name
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Whether a live category already uses this name
    pub fn has_category_named(&self, name: &str) -> bool {
        self.category_by_name(name).is_some()
    }

    /// Ids of every live category
    pub fn category_ids(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories.iter().map(|c| c.id)
    }

    /// Check if the state is empty
    pub fn is_empty(&self) -> bool {
        self.income == 0.0 && self.categories.is_empty()
    }
}
