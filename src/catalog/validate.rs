//! Ingestion checks applied to every catalog before a session uses it.
//!
//! Hard failures: duplicate or empty deal ids, non-finite numbers, ratings
//! outside 0-5, negative prices or distances. Soft findings such as a
//! discounted price above the original, or a comment pointing at an unknown
//! deal, are logged and accepted.

use super::models::Catalog;
use crate::domain::deal::MAX_RATING;
use crate::domain::error::{DealsError, Result};
use crate::domain::Deal;
use std::collections::HashSet;

/// Validates a catalog snapshot.
///
/// # Errors
///
/// Returns [`DealsError::Catalog`] naming the first offending record.
pub fn validate(catalog: &Catalog) -> Result<()> {
    let mut seen = HashSet::with_capacity(catalog.deals.len());
    for deal in &catalog.deals {
        if deal.id.trim().is_empty() {
            return Err(DealsError::Catalog(format!("deal '{}' has an empty id", deal.deal_name)));
        }
        if !seen.insert(deal.id.as_str()) {
            return Err(DealsError::Catalog(format!("duplicate deal id: {}", deal.id)));
        }
        check_deal(deal)?;
    }

    for item in &catalog.history {
        check_deal(&item.deal)?;
        check_rating(&item.deal.id, "user rating", item.user_rating)?;
        check_non_negative(&item.deal.id, "order total", item.order_total)?;
    }

    for comment in &catalog.comments {
        if catalog.find_deal(&comment.deal_id).is_none() {
            tracing::warn!(comment_id = %comment.id, deal_id = %comment.deal_id, "comment references unknown deal");
        }
    }

    Ok(())
}

fn check_deal(deal: &Deal) -> Result<()> {
    check_rating(&deal.id, "rating", deal.rating)?;
    check_non_negative(&deal.id, "distance", deal.distance)?;
    check_non_negative(&deal.id, "original price", deal.original_price)?;
    check_non_negative(&deal.id, "discounted price", deal.discounted_price)?;

    if deal.discounted_price > deal.original_price {
        tracing::warn!(
            deal_id = %deal.id,
            original = deal.original_price,
            discounted = deal.discounted_price,
            "discounted price above original price"
        );
    }
    Ok(())
}

fn check_rating(id: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
        return Err(DealsError::Catalog(format!("deal {id}: {field} {value} outside 0-5")));
    }
    Ok(())
}

fn check_non_negative(id: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DealsError::Catalog(format!("deal {id}: {field} {value} must be a non-negative number")));
    }
    Ok(())
}
