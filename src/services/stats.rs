//! Derived statistics
//!
//! Pure computations over a [`BudgetState`]. Nothing here mutates state or
//! knows how the numbers are painted.

use crate::models::{BudgetState, CategoryId};

/// Percent above which a category is shown as a warning
pub const WARNING_THRESHOLD: f64 = 50.0;

/// Percent above which a category is shown as danger
pub const DANGER_THRESHOLD: f64 = 75.0;

/// Visual classification of a category's share of income
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

impl Severity {
    /// Classify a percent-of-income value. Exactly 50% is still normal.
    pub fn classify(percent: f64) -> Self {
        if percent > DANGER_THRESHOLD {
            Self::Danger
        } else if percent > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// A category as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub amount: f64,
    /// Share of income, unclamped
    pub percent: f64,
    pub severity: Severity,
}

/// Everything a render surface needs to paint the budget
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub income: f64,
    pub total_expenses: f64,
    /// Income minus expenses; negative when overspent
    pub remaining: f64,
    /// Expenses as a percent of income, unclamped
    pub overall_percent: f64,
    /// Value shown on the progress ring, always within 0..=100
    pub ring_percent: f64,
    pub categories: Vec<CategoryView>,
}

impl ViewModel {
    /// Replace the ring value, clamping it into range
    pub fn with_ring(mut self, ring_percent: f64) -> Self {
        self.ring_percent = clamp_percent(ring_percent);
        self
    }
}

/// Derive the view model for a state. The ring starts at 0; see
/// [`ring_percent`] for the value a recompute produces.
pub fn derive_stats(state: &BudgetState) -> ViewModel {
    let income = state.income;
    let total_expenses = state.total_expenses();

    let categories = state
        .categories
        .iter()
        .map(|category| {
            let percent = percent_of(category.amount, income);
            CategoryView {
                id: category.id,
                name: category.name.clone(),
                amount: category.amount,
                percent,
                severity: Severity::classify(percent),
            }
        })
        .collect();

    ViewModel {
        income,
        total_expenses,
        remaining: income - total_expenses,
        overall_percent: percent_of(total_expenses, income),
        ring_percent: 0.0,
        categories,
    }
}

/// Ring value for a state, or `None` when there is no income to measure against
pub fn ring_percent(state: &BudgetState) -> Option<f64> {
    if state.income <= 0.0 {
        return None;
    }
    Some(clamp_percent(state.total_expenses() / state.income * 100.0))
}

fn percent_of(amount: f64, income: f64) -> f64 {
    if income > 0.0 {
        amount / income * 100.0
    } else {
        0.0
    }
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}
