//! Completed-order records shown on the history screen.

use super::deal::Deal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Format of `orderedDate` in the catalog, e.g. `August 1, 2025`.
const ORDERED_DATE_FORMAT: &str = "%B %d, %Y";

/// A deal the user has already ordered.
///
/// The deal fields are flattened into the record, mirroring the catalog JSON
/// where a history entry is a deal with four extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    #[serde(flatten)]
    pub deal: Deal,
    pub ordered_date: String,
    pub order_total: f64,
    pub quantity: u32,
    /// The user's own rating for this order, 0-5.
    pub user_rating: f64,
}

impl HistoryItem {
    /// Parses `ordered_date`, returning `None` when it is not in catalog format.
    #[must_use]
    pub fn ordered_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.ordered_date.trim(), ORDERED_DATE_FORMAT).ok()
    }
}

/// Orders history items most recent first.
///
/// Items whose date cannot be parsed sort after all dated items. The sort is
/// stable, so equal dates keep catalog order.
pub fn sort_most_recent_first<T: Borrow<HistoryItem>>(items: &mut [T]) {
    items.sort_by(|a, b| {
        let (a, b): (&HistoryItem, &HistoryItem) = (a.borrow(), b.borrow());
        match (a.ordered_on(), b.ordered_on()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
