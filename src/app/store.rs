//! Deal store: the catalog plus session-scoped favorites and usage counters.
//!
//! The deal list itself is immutable and shared; only the favorite set and
//! the usage mapping change during a session. Both are keyed by deal id, not
//! by record, so every mutator accepts any string id without checking it
//! against the catalog. An unknown id behaves like a deal with default state.

use crate::catalog::Catalog;
use crate::domain::Deal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Session state layered over an immutable catalog.
///
/// # Example
///
/// ```rust
/// use food_deals::app::DealStore;
/// use food_deals::catalog::Catalog;
/// use std::sync::Arc;
///
/// let mut store = DealStore::new(Arc::new(Catalog::default()));
/// store.increment_usage("9");
/// store.increment_usage("9");
/// assert_eq!(store.usage_count("9"), 2);
///
/// store.toggle_favorite("9");
/// assert!(store.is_favorite("9"));
/// ```
#[derive(Debug, Clone)]
pub struct DealStore {
    catalog: Arc<Catalog>,
    favorites: HashSet<String>,
    usage: HashMap<String, u32>,
}

impl DealStore {
    /// Creates a store with empty favorites and usage.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            favorites: HashSet::new(),
            usage: HashMap::new(),
        }
    }

    /// Creates a store initialised from the catalog's session seed.
    #[must_use]
    pub fn seeded(catalog: Arc<Catalog>) -> Self {
        let mut store = Self::new(catalog);
        store.reset();
        store
    }

    /// Restores favorites and usage to the catalog's session seed.
    pub fn reset(&mut self) {
        let seed = &self.catalog.session;
        self.favorites = seed.favorites.iter().cloned().collect();
        self.usage = seed
            .usage
            .iter()
            .map(|(id, count)| (id.clone(), *count))
            .collect();

        tracing::debug!(
            favorites = self.favorites.len(),
            usage_entries = self.usage.len(),
            "store reset to session seed"
        );
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Canonical deal list in catalog order.
    #[must_use]
    pub fn deals(&self) -> &[Deal] {
        &self.catalog.deals
    }

    /// Catalog deals currently marked favorite, in catalog order.
    pub fn favorite_deals(&self) -> impl Iterator<Item = &Deal> {
        self.catalog
            .deals
            .iter()
            .filter(move |deal| self.favorites.contains(&deal.id))
    }

    /// Flips favorite membership of `id` and returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };
        tracing::debug!(deal_id = %id, favorite = now_favorite, "favorite toggled");
        now_favorite
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Adds one use of `id` and returns the new count.
    pub fn increment_usage(&mut self, id: &str) -> u32 {
        let count = self.usage.entry(id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        tracing::debug!(deal_id = %id, count = *count, "usage incremented");
        *count
    }

    /// Removes one use of `id`, flooring at zero, and returns the new count.
    ///
    /// Absent and zero entries are left as they are.
    pub fn decrement_usage(&mut self, id: &str) -> u32 {
        let Some(count) = self.usage.get_mut(id) else {
            tracing::trace!(deal_id = %id, "decrement on untracked deal ignored");
            return 0;
        };
        *count = count.saturating_sub(1);
        tracing::debug!(deal_id = %id, count = *count, "usage decremented");
        *count
    }

    /// Times `id` has been used this session, 0 if never.
    #[must_use]
    pub fn usage_count(&self, id: &str) -> u32 {
        self.usage.get(id).copied().unwrap_or(0)
    }

    /// Sum of all usage counters.
    #[must_use]
    pub fn total_usage(&self) -> u32 {
        self.usage.values().fold(0, |acc, n| acc.saturating_add(*n))
    }

    /// Money saved across all recorded uses of catalog deals.
    ///
    /// Counters for ids the catalog cannot resolve contribute nothing.
    #[must_use]
    pub fn total_saved(&self) -> f64 {
        self.usage
            .iter()
            .filter_map(|(id, count)| {
                self.catalog
                    .find_deal(id)
                    .map(|deal| deal.savings() * f64::from(*count))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinCatalog, CatalogSource, SessionSeed};
    use crate::domain::deal::tests::deal;

    fn empty_store() -> DealStore {
        DealStore::new(Arc::new(Catalog::default()))
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut store = empty_store();
        assert!(!store.is_favorite("7"));
        assert!(store.toggle_favorite("7"));
        assert!(store.is_favorite("7"));
        assert!(!store.toggle_favorite("7"));
        assert!(!store.is_favorite("7"));
        assert_eq!(store.favorite_count(), 0);
    }

    #[test]
    fn toggle_never_duplicates() {
        let mut store = empty_store();
        store.toggle_favorite("1");
        store.toggle_favorite("2");
        store.toggle_favorite("1");
        store.toggle_favorite("1");
        assert_eq!(store.favorite_count(), 2);
    }

    #[test]
    fn usage_counter_scenario() {
        let mut store = empty_store();
        store.increment_usage("9");
        store.increment_usage("9");
        assert_eq!(store.usage_count("9"), 2);
        store.decrement_usage("9");
        store.decrement_usage("9");
        assert_eq!(store.usage_count("9"), 0);
        assert_eq!(store.decrement_usage("9"), 0);
        assert_eq!(store.usage_count("9"), 0);
    }

    #[test]
    fn decrement_unknown_id_is_noop() {
        let mut store = empty_store();
        assert_eq!(store.decrement_usage("ghost"), 0);
        assert_eq!(store.usage_count("ghost"), 0);
        assert_eq!(store.total_usage(), 0);
    }

    #[test]
    fn seeded_from_builtin_catalog() {
        let catalog = Arc::new(BuiltinCatalog.load().unwrap());
        let store = DealStore::seeded(catalog);
        assert!(store.is_favorite("1"));
        assert!(store.is_favorite("2"));
        assert!(!store.is_favorite("3"));
        assert_eq!(store.usage_count("4"), 3);
        assert_eq!(store.total_usage(), 6);
        let favorite_ids: Vec<&str> = store.favorite_deals().map(|d| d.id.as_str()).collect();
        assert_eq!(favorite_ids, vec!["1", "2"]);
    }

    #[test]
    fn reset_discards_session_changes() {
        let mut catalog = Catalog::default();
        catalog.session = SessionSeed {
            favorites: vec!["a".to_string()],
            usage: [("a".to_string(), 1)].into_iter().collect(),
        };
        let mut store = DealStore::seeded(Arc::new(catalog));
        store.toggle_favorite("a");
        store.toggle_favorite("b");
        store.increment_usage("a");
        store.reset();
        assert!(store.is_favorite("a"));
        assert!(!store.is_favorite("b"));
        assert_eq!(store.usage_count("a"), 1);
    }

    #[test]
    fn total_saved_uses_catalog_prices() {
        let mut d = deal("1");
        d.original_price = 20.0;
        d.discounted_price = 15.0;
        let catalog = Catalog {
            deals: vec![d],
            ..Catalog::default()
        };
        let mut store = DealStore::new(Arc::new(catalog));
        store.increment_usage("1");
        store.increment_usage("1");
        store.increment_usage("unknown");
        assert!((store.total_saved() - 10.0).abs() < f64::EPSILON);
    }
}
