//! Category identifiers
//!
//! Ids are millisecond timestamps that are bumped forward whenever the clock
//! has not advanced, so two categories created in the same millisecond (or a
//! name re-added right after deletion) still get distinct ids.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::Utc;

const DISPLAY_PREFIX: &str = "cat-";

/// Identifier of a category, stable for the category's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Create an ID from a raw value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse an ID from a string, with or without the `cat-` prefix
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for CategoryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Hands out category ids that are never reused within a session
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
    /// Every id seeded or issued so far
    taken: BTreeSet<u64>,
}

impl IdGenerator {
    /// Create a generator with no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that will never issue any of `ids`
    pub fn seeded<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = CategoryId>,
    {
        let taken: BTreeSet<u64> = ids.into_iter().map(|id| id.as_u64()).collect();
        let last = taken.last().copied().unwrap_or(0);
        Self { last, taken }
    }

    /// Issue the next id.
    ///
    /// Once the counter has reached `u64::MAX` the smallest free id is used
    /// instead.
    pub fn next_id(&mut self) -> CategoryId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = match self.last.checked_add(1) {
            Some(next) => {
                let id = now.max(next);
                self.last = id;
                id
            }
            None => self.smallest_free(),
        };
        self.taken.insert(id);
        CategoryId(id)
    }

    fn smallest_free(&self) -> u64 {
        let mut candidate = 1;
        for &taken in self.taken.range(1..) {
            if taken != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_display() {
        let id = CategoryId::from_raw(1700000000123);
        assert_eq!(id.to_string(), "cat-1700000000123");
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        assert_eq!(CategoryId::parse("cat-42").unwrap(), CategoryId::from_raw(42));
        assert_eq!(CategoryId::parse("42").unwrap(), CategoryId::from_raw(42));
        assert_eq!(" 7 ".parse::<CategoryId>().unwrap(), CategoryId::from_raw(7));
        assert!(CategoryId::parse("Food").is_err());
    }

    #[test]
    fn test_id_serializes_as_number() {
        let id = CategoryId::from_raw(99);
        assert_eq!(serde_json::to_string(&id).unwrap(), "99");
        let back: CategoryId = serde_json::from_str("99").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_generator_never_repeats() {
        let mut ids = IdGenerator::new();
        let issued: HashSet<_> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 1000);
    }

    #[test]
    fn test_generator_is_monotonic() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(second > first);
    }

    #[test]
    fn test_seeded_generator_skips_existing_ids() {
        let far_future = CategoryId::from_raw(u64::MAX / 2);
        let mut ids = IdGenerator::seeded([CategoryId::from_raw(3), far_future]);
        assert!(ids.next_id() > far_future);
    }

    #[test]
    fn test_generator_at_max_id_falls_back_to_free_ids() {
        let top = CategoryId::from_raw(u64::MAX);
        let mut ids = IdGenerator::seeded([top, CategoryId::from_raw(1)]);

        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, top);
        assert_eq!(first, CategoryId::from_raw(2));
        assert_eq!(second, CategoryId::from_raw(3));
    }
}
