//! Persistence codec for the budget state
//!
//! The state is stored as JSON: `{"income": <number>, "categories":
//! [{"id", "name", "amount"}]}`. Loading never fails on bad data; anything
//! that can't be decoded is treated as a fresh start.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Category, CategoryValidationError};

use super::store::KeyValueStore;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    income: f64,
    categories: &'a [Category],
}

/// Missing or `null` fields default individually
#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    income: Option<f64>,
    #[serde(default, alias = "expenses")]
    categories: Option<Vec<Category>>,
}

/// Serialize a state to its stored form
pub fn encode(state: &BudgetState) -> BudgetResult<String> {
    let snapshot = SnapshotRef {
        income: state.income,
        categories: &state.categories,
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Decode a stored state
///
/// Fails with [`BudgetError::CorruptState`] if the payload isn't JSON or a
/// field has the wrong type. Decoded values that break state invariants are
/// repaired rather than rejected.
pub fn decode(raw: &str) -> BudgetResult<BudgetState> {
    let snapshot: Snapshot =
        serde_json::from_str(raw).map_err(|e| BudgetError::CorruptState(e.to_string()))?;

    Ok(sanitize(
        snapshot.income.unwrap_or(0.0),
        snapshot.categories.unwrap_or_default(),
    ))
}

/// Write `state` to the store under `key`
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &BudgetState,
) -> BudgetResult<()> {
    let payload = encode(state)?;
    store.set(key, payload)?;
    debug!(
        key,
        income = state.income,
        categories = state.categories.len(),
        "saved budget state"
    );
    Ok(())
}

/// Read the state stored under `key`
///
/// An absent or corrupt entry yields the default state. Only failures of the
/// store itself are returned as errors.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> BudgetResult<BudgetState> {
    let Some(raw) = store.get(key)? else {
        debug!(key, "no saved budget state, starting fresh");
        return Ok(BudgetState::default());
    };

    match decode(&raw) {
        Ok(state) => {
            debug!(
                key,
                income = state.income,
                categories = state.categories.len(),
                "loaded budget state"
            );
            Ok(state)
        }
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable budget state");
            Ok(BudgetState::default())
        }
    }
}

fn sanitize(income: f64, categories: Vec<Category>) -> BudgetState {
    let income = if income.is_finite() && income >= 0.0 {
        income
    } else {
        warn!(income, "stored income is invalid, resetting to 0");
        0.0
    };

    let mut names = HashSet::new();
    let mut ids = HashSet::new();
    let mut kept = Vec::with_capacity(categories.len());

    for mut category in categories {
        match category.validate() {
            Ok(()) => {}
            Err(CategoryValidationError::EmptyName) => {
                warn!(id = %category.id, "dropping stored category with empty name");
                continue;
            }
            Err(e @ CategoryValidationError::InvalidAmount(_)) => {
                warn!(name = %category.name, error = %e, "stored amount is invalid, resetting to 0");
                category.amount = 0.0;
            }
        }
        if !ids.insert(category.id) {
            warn!(id = %category.id, "dropping stored category with duplicate id");
            continue;
        }
        if !names.insert(category.name.clone()) {
            warn!(name = %category.name, "dropping stored category with duplicate name");
            continue;
        }
        kept.push(category);
    }

    BudgetState {
        income,
        categories: kept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;
    use crate::storage::MemoryStore;

    const KEY: &str = "expenseData";

    fn sample() -> BudgetState {
        BudgetState {
            income: 1234.56,
            categories: vec![
                Category::with_amount(CategoryId::from_raw(30), "Rent", 600.0),
                Category::with_amount(CategoryId::from_raw(10), "Food", 0.1),
                Category::new(CategoryId::from_raw(20), "Fun"),
            ],
        }
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let mut store = MemoryStore::new();
        let state = sample();

        save(&mut store, KEY, &state).unwrap();
        assert_eq!(load(&store, KEY).unwrap(), state);
    }

    #[test]
    fn test_encoded_shape() {
        let state = BudgetState {
            income: 100.0,
            categories: vec![Category::with_amount(CategoryId::from_raw(7), "Food", 25.5)],
        };
        let value: serde_json::Value = serde_json::from_str(&encode(&state).unwrap()).unwrap();

        assert_eq!(value["income"], 100.0);
        assert_eq!(value["categories"][0]["id"], 7);
        assert_eq!(value["categories"][0]["name"], "Food");
        assert_eq!(value["categories"][0]["amount"], 25.5);
    }

    #[test]
    fn test_missing_key_loads_default() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, KEY).unwrap(), BudgetState::default());
    }

    #[test]
    fn test_corrupt_payload_loads_default() {
        let mut store = MemoryStore::new();

        for raw in ["not json", "null", "42", r#"{"income": "lots"}"#, r#"{"categories": [{"id": "x", "name": "A"}]}"#] {
            store.set(KEY, raw.to_string()).unwrap();
            assert_eq!(load(&store, KEY).unwrap(), BudgetState::default(), "payload: {}", raw);
        }
    }

    #[test]
    fn test_decode_reports_corruption() {
        assert!(matches!(
            decode("{").unwrap_err(),
            BudgetError::CorruptState(_)
        ));
    }

    #[test]
    fn test_missing_fields_default_individually() {
        let state = decode(r#"{"categories": [{"id": 1, "name": "Food", "amount": 5}]}"#).unwrap();
        assert_eq!(state.income, 0.0);
        assert_eq!(state.categories.len(), 1);

        let state = decode(r#"{"income": 800}"#).unwrap();
        assert_eq!(state.income, 800.0);
        assert!(state.categories.is_empty());

        let state = decode(r#"{"income": null, "categories": null}"#).unwrap();
        assert_eq!(state, BudgetState::default());
    }

    #[test]
    fn test_legacy_expenses_field() {
        let state =
            decode(r#"{"income": 1000, "expenses": [{"id": 1700000000000, "name": "Rent", "amount": 600}]}"#)
                .unwrap();
        assert_eq!(state.categories[0].name, "Rent");
        assert_eq!(state.categories[0].id, CategoryId::from_raw(1700000000000));
    }

    #[test]
    fn test_sanitizes_invalid_values() {
        let state = decode(
            r#"{"income": -5, "categories": [
                {"id": 1, "name": "Food", "amount": -3},
                {"id": 2, "name": "Food", "amount": 4},
                {"id": 1, "name": "Rent", "amount": 4},
                {"id": 3, "name": " ", "amount": 4},
                {"id": 4, "name": "Gym", "amount": 9}
            ]}"#,
        )
        .unwrap();

        assert_eq!(state.income, 0.0);
        let names: Vec<_> = state.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Food", "Gym"]);
        assert_eq!(state.categories[0].amount, 0.0);
    }
}
