//! Budget state manager
//!
//! Owns the income and category list, applies intents to them and persists a
//! snapshot after every change. Each operation builds the next state on a
//! copy, saves it, and only then commits it, so a failed save leaves the
//! in-memory state untouched.

use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    parse_amount, parse_income, BudgetState, Category, CategoryId, IdGenerator, Notification,
};
use crate::storage::{codec, KeyValueStore};

use super::stats::{derive_stats, ring_percent, ViewModel};

/// A user action coming from a render surface
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetIncome(String),
    AddCategory(String),
    UpdateAmount { id: CategoryId, raw: String },
    DeleteCategory(CategoryId),
    Recompute,
    Reset,
}

/// Owns the budget state for one session
pub struct BudgetManager<S: KeyValueStore> {
    store: S,
    key: String,
    state: BudgetState,
    ids: IdGenerator,
    ring_percent: f64,
}

impl<S: KeyValueStore> BudgetManager<S> {
    /// Hydrate a manager from whatever is stored under `key`
    pub fn load(store: S, key: impl Into<String>) -> BudgetResult<Self> {
        let key = key.into();
        let state = codec::load(&store, &key)?;
        let ids = IdGenerator::seeded(state.category_ids());

        info!(
            key = %key,
            income = state.income,
            categories = state.categories.len(),
            "budget state hydrated"
        );

        Ok(Self {
            store,
            key,
            state,
            ids,
            ring_percent: 0.0,
        })
    }

    /// Current state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key the state is persisted under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value last computed for the progress ring
    pub fn ring_percent(&self) -> f64 {
        self.ring_percent
    }

    /// Derived statistics for the current state
    pub fn view_model(&self) -> ViewModel {
        derive_stats(&self.state).with_ring(self.ring_percent)
    }

    /// Resolve a category by id (`cat-<n>` or `<n>`) or by exact name
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        if let Ok(id) = CategoryId::parse(identifier) {
            if let Some(category) = self.state.category(id) {
                return Some(category);
            }
        }
        self.state.category_by_name(identifier.trim())
    }

    /// Apply an intent.
    ///
    /// Rejected input comes back as a warning notification rather than an
    /// error; only store failures are returned as `Err`.
    pub fn dispatch(&mut self, intent: Intent) -> BudgetResult<Option<Notification>> {
        debug!(?intent, "dispatching intent");

        let result = match intent {
            Intent::SetIncome(raw) => self.set_income(&raw).map(Some),
            Intent::AddCategory(name) => self.add_category(&name).map(|(_, n)| Some(n)),
            Intent::UpdateAmount { id, raw } => self.update_category_amount(id, &raw).map(|_| None),
            Intent::DeleteCategory(id) => self.delete_category(id),
            Intent::Recompute => self.recompute().map(Some),
            Intent::Reset => self.reset().map(Some),
        };

        match result {
            Err(e) if e.is_recoverable() => {
                info!(error = ?e, "intent rejected");
                Ok(Some(Notification::warning(e.to_string())))
            }
            other => other,
        }
    }

    /// Replace the income. Rejects anything that isn't a positive number.
    pub fn set_income(&mut self, raw: &str) -> BudgetResult<Notification> {
        let income = parse_income(raw)?;

        let mut next = self.state.clone();
        next.income = income;
        self.commit(next)?;

        info!(income, "income updated");
        Ok(Notification::success("Income updated successfully!"))
    }

    /// Append a new zero-amount category
    pub fn add_category(&mut self, name: &str) -> BudgetResult<(CategoryId, Notification)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::InvalidInput("Please select a category".into()));
        }
        if self.state.has_category_named(name) {
            return Err(BudgetError::duplicate_category(name));
        }

        let id = self.ids.next_id();
        let mut next = self.state.clone();
        next.categories.push(Category::new(id, name));
        self.commit(next)?;

        info!(%id, name, "category added");
        Ok((id, Notification::success("Category added!")))
    }

    /// Set a category's amount. Unparseable input becomes 0; an unknown id is
    /// ignored. Returns whether a category was updated.
    pub fn update_category_amount(&mut self, id: CategoryId, raw: &str) -> BudgetResult<bool> {
        let amount = parse_amount(raw);

        let mut next = self.state.clone();
        let Some(category) = next.category_mut(id) else {
            debug!(%id, "amount update for unknown category ignored");
            return Ok(false);
        };
        category.amount = amount;
        self.commit(next)?;

        info!(%id, amount, "category amount updated");
        Ok(true)
    }

    /// Remove a category. An unknown id is ignored without a notification.
    pub fn delete_category(&mut self, id: CategoryId) -> BudgetResult<Option<Notification>> {
        let mut next = self.state.clone();
        let before = next.categories.len();
        next.categories.retain(|c| c.id != id);

        if next.categories.len() == before {
            debug!(%id, "delete of unknown category ignored");
            return Ok(None);
        }
        self.commit(next)?;

        info!(%id, "category deleted");
        Ok(Some(Notification::danger("Expense deleted successfully")))
    }

    /// Refresh the progress ring from the current totals
    pub fn recompute(&mut self) -> BudgetResult<Notification> {
        let percent = ring_percent(&self.state).ok_or_else(|| {
            BudgetError::InvalidInput("Please set your income first".into())
        })?;

        self.ring_percent = percent;
        info!(ring_percent = percent, "ring recomputed");
        Ok(Notification::success("Calculation complete"))
    }

    /// Drop all data, including the stored snapshot
    pub fn reset(&mut self) -> BudgetResult<Notification> {
        self.store.remove(&self.key)?;
        self.state = BudgetState::default();
        self.ring_percent = 0.0;

        info!(key = %self.key, "budget reset");
        Ok(Notification::danger("All data reset"))
    }

    fn commit(&mut self, next: BudgetState) -> BudgetResult<()> {
        codec::save(&mut self.store, &self.key, &next)?;
        self.state = next;
        Ok(())
    }
}
