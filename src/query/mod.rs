//! Query engine: filtered, ordered projections of the deal list.
//!
//! A projection is a pure function of the deal slice, a search string and a
//! [`SortKey`]. It never mutates its input and returns borrowed deals in
//! display order.
//!
//! # Filtering
//!
//! A deal passes when the query is a case-insensitive substring of its deal
//! name, restaurant name or cuisine. The query is taken literally: no
//! trimming, tokenizing or fuzzy matching. An empty query matches everything.
//!
//! # Sorting
//!
//! `slice::sort_by` is stable, so deals that compare equal keep their input
//! order.
//!
//! # Example
//!
//! ```
//! use food_deals::catalog::{BuiltinCatalog, CatalogSource};
//! use food_deals::query::{project, SortKey};
//!
//! let catalog = BuiltinCatalog.load()?;
//! let nearest = project(&catalog.deals, "", SortKey::Nearest);
//! assert_eq!(nearest[0].restaurant_name, "Burger Palace");
//!
//! let sushi = project(&catalog.deals, "sushi", SortKey::Nearest);
//! assert_eq!(sushi.len(), 1);
//! # Ok::<(), food_deals::DealsError>(())
//! ```

pub mod highlight;
pub mod sort;

pub use highlight::match_ranges;
pub use sort::SortKey;

use crate::domain::Deal;

/// Returns `true` when `query` occurs in the deal's name, restaurant or cuisine.
#[must_use]
pub fn matches_query(deal: &Deal, query: &str) -> bool {
    matches_lowered(deal, &query.to_lowercase())
}

fn matches_lowered(deal: &Deal, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&deal.deal_name, &deal.restaurant_name, &deal.cuisine]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filters `deals` by `query` and orders the survivors by `sort_key`.
///
/// Accepts anything that yields borrowed deals, so both a catalog slice and
/// an already-narrowed list (such as the favorites) can be projected.
#[must_use]
pub fn project<'a, I>(deals: I, query: &str, sort_key: SortKey) -> Vec<&'a Deal>
where
    I: IntoIterator<Item = &'a Deal>,
{
    let _span = tracing::debug_span!("project",
        query_len = query.len(),
        sort_key = %sort_key
    ).entered();

    let needle = query.to_lowercase();
    let mut projected: Vec<&Deal> = deals
        .into_iter()
        .filter(|deal| matches_lowered(deal, &needle))
        .collect();

    projected.sort_by(|a, b| sort_key.compare(a, b));

    tracing::trace!(matched = projected.len(), "projection computed");
    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deal::tests::deal;
    use std::collections::BTreeSet;

    fn ids<'a>(deals: &[&'a Deal]) -> Vec<&'a str> {
        deals.iter().map(|d| d.id.as_str()).collect()
    }

    fn sample() -> Vec<Deal> {
        let specs = [
            ("1", "Truffle Mushroom Risotto", "Bella Italia", "Italian", 4.5, 0.5, 24.99, 17.49, 3),
            ("2", "Dragon Roll & Miso Soup Combo", "Sushi Master", "Japanese", 4.8, 0.7, 32.0, 21.33, 2),
            ("3", "Wagyu Cheese Burger Deluxe", "Burger Palace", "American", 4.3, 0.3, 18.99, 14.24, 5),
            ("4", "Butter Chicken & Naan Feast", "Spice Garden", "Indian", 4.6, 0.9, 22.5, 13.5, 1),
            ("5", "Street Tacos Trio", "Taco Fiesta", "Mexican", 4.4, 0.6, 16.99, 16.99, 7),
            ("6", "Szechuan Beef & Rice Bowl", "Dragon Wok", "Chinese", 4.2, 1.1, 28.0, 18.2, 4),
        ];
        specs
            .iter()
            .map(|&(id, name, restaurant, cuisine, rating, distance, original, discounted, days)| {
                let mut d = deal(id);
                d.deal_name = name.to_string();
                d.restaurant_name = restaurant.to_string();
                d.cuisine = cuisine.to_string();
                d.rating = rating;
                d.distance = distance;
                d.original_price = original;
                d.discounted_price = discounted;
                d.days_until_expiration = days;
                d
            })
            .collect()
    }

    #[test]
    fn nearest_scenario() {
        let mut a = deal("A");
        a.distance = 0.5;
        let mut b = deal("B");
        b.distance = 0.3;
        let deals = vec![a, b];
        assert_eq!(ids(&project(&deals, "", SortKey::Nearest)), vec!["B", "A"]);
    }

    #[test]
    fn best_deal_scenario() {
        let mut a = deal("A");
        a.original_price = 20.0;
        a.discounted_price = 10.0;
        let mut b = deal("B");
        b.original_price = 20.0;
        b.discounted_price = 18.0;
        let deals = vec![b, a];
        assert_eq!(ids(&project(&deals, "", SortKey::BestDeal)), vec!["A", "B"]);
    }

    #[test]
    fn search_matches_restaurant_not_other_names() {
        let deals = sample();
        let result = project(&deals, "sushi", SortKey::Nearest);
        assert_eq!(ids(&result), vec!["2"]);
        assert!(!result.iter().any(|d| d.restaurant_name == "Burger Palace"));
    }

    #[test]
    fn search_is_case_insensitive_over_all_three_fields() {
        let deals = sample();
        assert_eq!(ids(&project(&deals, "ITALIAN", SortKey::Nearest)), vec!["1"]);
        assert_eq!(ids(&project(&deals, "dragon", SortKey::Nearest)), vec!["2", "6"]);
        assert_eq!(ids(&project(&deals, "garden", SortKey::Nearest)), vec!["4"]);
    }

    #[test]
    fn query_is_literal() {
        let deals = sample();
        assert!(project(&deals, "  sushi", SortKey::Nearest).is_empty());
        assert!(project(&deals, "sushi master burger", SortKey::Nearest).is_empty());
    }

    #[test]
    fn filter_is_exact_partition() {
        let deals = sample();
        for query in ["", "a", "an", "ch", "zzz", "&"] {
            let result = project(&deals, query, SortKey::HighestRated);
            for d in &deals {
                let kept = result.iter().any(|r| r.id == d.id);
                assert_eq!(kept, matches_query(d, query), "query {query:?} deal {}", d.id);
            }
        }
    }

    #[test]
    fn empty_query_is_permutation_for_every_key() {
        let deals = sample();
        let all: BTreeSet<&str> = deals.iter().map(|d| d.id.as_str()).collect();
        for key in SortKey::ALL {
            let result = project(&deals, "", key);
            assert_eq!(result.len(), deals.len());
            let got: BTreeSet<&str> = result.iter().map(|d| d.id.as_str()).collect();
            assert_eq!(got, all);
            for pair in result.windows(2) {
                assert_ne!(key.compare(pair[0], pair[1]), std::cmp::Ordering::Greater);
            }
        }
    }

    #[test]
    fn catalog_orders_per_key() {
        let deals = sample();
        assert_eq!(ids(&project(&deals, "", SortKey::Nearest)), vec!["3", "1", "5", "2", "4", "6"]);
        assert_eq!(ids(&project(&deals, "", SortKey::BestDeal)), vec!["4", "6", "2", "1", "3", "5"]);
        assert_eq!(ids(&project(&deals, "", SortKey::HighestRated)), vec!["2", "4", "1", "5", "3", "6"]);
        assert_eq!(ids(&project(&deals, "", SortKey::ExpiringSoon)), vec!["4", "2", "1", "6", "3", "5"]);
    }

    #[test]
    fn best_deal_is_monotonic_and_guards_zero_price() {
        let mut deals = sample();
        deals[0].original_price = 0.0;
        deals[0].discounted_price = 0.0;
        let result = project(&deals, "", SortKey::BestDeal);
        for pair in result.windows(2) {
            assert!(pair[0].discount_percent() >= pair[1].discount_percent());
        }
        let zero_pos = result.iter().position(|d| d.id == "1").unwrap();
        let free_delivery_pos = result.iter().position(|d| d.id == "5").unwrap();
        assert!(zero_pos < free_delivery_pos, "ties keep input order");
    }

    #[test]
    fn ties_keep_input_order() {
        let deals: Vec<Deal> = ["x", "y", "z"].iter().map(|id| deal(id)).collect();
        for key in SortKey::ALL {
            assert_eq!(ids(&project(&deals, "", key)), vec!["x", "y", "z"]);
        }
    }

    #[test]
    fn projection_is_deterministic_and_leaves_input_untouched() {
        let deals = sample();
        let before = deals.clone();
        let first = ids(&project(&deals, "a", SortKey::BestDeal));
        let second = ids(&project(&deals, "a", SortKey::BestDeal));
        assert_eq!(first, second);
        assert_eq!(deals, before);
    }
}
