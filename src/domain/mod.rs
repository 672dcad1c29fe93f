//! Domain layer for the food-deals core.
//!
//! This module contains the record types held by the catalog and the pure
//! functions that derive display values from them. Nothing here holds session
//! state or knows about navigation.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`deal`]: Deal record, price tiers and derived display fields
//! - [`history`]: Completed-order records
//! - [`comment`]: Comment thread records
//!
//! # Examples
//!
//! ```
//! use food_deals::domain::{price_tier, PriceTier};
//!
//! assert_eq!(price_tier(21.33), PriceTier::Moderate);
//! ```

pub mod comment;
pub mod deal;
pub mod error;
pub mod history;

pub use comment::Comment;
pub use deal::{format_price, price_tier, Deal, PriceTier};
pub use error::{DealsError, Result};
pub use history::HistoryItem;
