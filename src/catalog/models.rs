//! Catalog record models.
//!
//! The catalog is the immutable fixture the whole session is built on: the
//! deal feed, order history, comment threads, the account screen layout and
//! the session seed the store starts from. Types here mirror the catalog JSON.

use crate::domain::{Comment, Deal, HistoryItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The signed-in user's profile card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub points: u32,
    pub email: String,
    /// Neighbourhood shown under the deals header and used for directions.
    pub location: String,
}

/// One row of the account menu.
///
/// Rows either open a sub-screen or carry an on/off switch; the two kinds
/// never share fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuRow {
    /// Row with a disclosure chevron.
    Action { label: String },
    /// Row with a switch.
    Toggle { label: String, enabled: bool },
}

impl MenuRow {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Action { label } | Self::Toggle { label, .. } => label,
        }
    }
}

/// A titled group of account menu rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuRow>,
}

/// Favorites and usage counters a fresh session starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSeed {
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub usage: BTreeMap<String, u32>,
}

/// Complete fixture dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub history: Vec<HistoryItem>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub account_menu: Vec<MenuSection>,
    #[serde(default)]
    pub session: SessionSeed,
}

impl Catalog {
    /// Resolves a deal id for the detail view.
    ///
    /// Live deals are searched first, then the deals embedded in history
    /// records, so a past order stays viewable after it leaves the feed.
    #[must_use]
    pub fn find_deal(&self, id: &str) -> Option<&Deal> {
        self.deals
            .iter()
            .find(|d| d.id == id)
            .or_else(|| self.history.iter().map(|h| &h.deal).find(|d| d.id == id))
    }

    /// Comments attached to `deal_id`, in catalog order.
    pub fn comments_for<'a>(&'a self, deal_id: &'a str) -> impl Iterator<Item = &'a Comment> + 'a {
        self.comments.iter().filter(move |c| c.deal_id == deal_id)
    }
}
