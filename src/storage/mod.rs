//! Storage layer for the budget tracker
//!
//! A string-keyed, string-valued store abstraction with a file-backed
//! implementation (atomic writes, one file per key) and an in-memory one, plus
//! the JSON codec that snapshots [`BudgetState`](crate::models::BudgetState)
//! into the store.

pub mod codec;
pub mod file_io;
pub mod store;

pub use codec::{decode, encode, load, save};
pub use file_io::{read_text, write_text_atomic};
pub use store::{FileStore, KeyValueStore, MemoryStore};
