//! View model types representing renderable screen state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and handed to whatever presentation layer
//! draws them. They carry no behaviour, only display-ready values: formatted
//! prices, badge strings, highlight ranges and empty-state copy are all
//! resolved here so a renderer never reaches back into the catalog.
//!
//! Every type serializes to camelCase JSON, which is what the session driver
//! prints after each re-render.
//!
//! # Example
//!
//! ```rust
//! use food_deals::ui::{Body, EmptyState, HeaderInfo, UIViewModel};
//! use food_deals::app::Tab;
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "Your Favorites".to_string(),
//!         subtitle: Some("Food deals you've saved".to_string()),
//!         user_badge: None,
//!     },
//!     active_tab: Tab::Favorites,
//!     show_navigation: true,
//!     body: Body::DealList {
//!         sort_chips: vec![],
//!         search_query: None,
//!         cards: vec![],
//!         empty_state: Some(EmptyState::new("No favorite deals yet", "Save food deals you love to see them here")),
//!     },
//! };
//! assert!(serde_json::to_string(&vm).is_ok());
//! ```

use crate::app::Tab;
use crate::domain::PriceTier;
use crate::query::SortKey;
use serde::Serialize;

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub active_tab: Tab,
    /// Bottom navigation is hidden while a detail overlay is open.
    pub show_navigation: bool,
    pub body: Body,
}

/// Screen header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_badge: Option<UserBadge>,
}

/// Username and points shown at the top right of the deals feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    pub username: String,
    /// Thousands-separated points, e.g. `2,450 pts`.
    pub points: String,
}

/// Main content area, one variant per screen kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Body {
    /// Deals feed and favorites list.
    #[serde(rename_all = "camelCase")]
    DealList {
        /// Sort selector, empty on the favorites tab.
        sort_chips: Vec<SortChip>,
        /// Search box contents, absent on the favorites tab.
        #[serde(skip_serializing_if = "Option::is_none")]
        search_query: Option<String>,
        cards: Vec<DealCard>,
        #[serde(skip_serializing_if = "Option::is_none")]
        empty_state: Option<EmptyState>,
    },
    #[serde(rename_all = "camelCase")]
    History {
        rows: Vec<HistoryRow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        empty_state: Option<EmptyState>,
    },
    Account(AccountView),
    Detail(Box<DealDetailView>),
}

/// One entry of the sort selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortChip {
    pub key: SortKey,
    pub label: String,
    pub active: bool,
}

/// A deal as it appears in a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealCard {
    pub id: String,
    pub deal_name: String,
    /// `Restaurant • Cuisine`.
    pub byline: String,
    pub description: String,
    pub image: String,
    pub price: String,
    pub original_price: String,
    pub price_tier: PriceTier,
    pub drumsticks: u8,
    pub offer: String,
    pub expiration: String,
    pub expires: String,
    pub location: String,
    pub is_favorite: bool,
    pub usage_count: u32,
    /// Character ranges of the search match within `deal_name`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A past order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub id: String,
    pub deal_name: String,
    pub byline: String,
    pub image: String,
    pub quantity: u32,
    pub order_total: String,
    pub ordered_date: String,
    /// Savings on this order, `$` formatted.
    pub saved: String,
    pub offer: String,
    pub user_rating: f64,
}

/// The account screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub profile: ProfileCard,
    pub stats: AccountStats,
    pub sections: Vec<MenuSectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub username: String,
    pub points: String,
    pub email: String,
    pub location: String,
}

/// Quick stats strip under the profile card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStats {
    pub deals_used: u32,
    pub total_saved: String,
    pub favorites: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSectionView {
    pub title: String,
    pub rows: Vec<MenuRowView>,
}

/// A menu row: either a chevron row or a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MenuRowView {
    Action { label: String },
    Toggle { label: String, enabled: bool },
}

/// The deal detail overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealDetailView {
    pub card: DealCard,
    /// `Cuisine cuisine` line under the restaurant name.
    pub cuisine_line: String,
    pub rating: f64,
    pub discount_percent: f64,
    pub ingredients: Vec<String>,
    pub share_text: String,
    pub directions_url: String,
    pub website_url: String,
    /// `Comments (N)`.
    pub comments_heading: String,
    pub comments: Vec<CommentView>,
    pub composer: ComposerView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub points: String,
    pub text: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether the reply box is open under this comment.
    pub replying: bool,
}

/// Drafts in the comment and reply boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerView {
    pub open: bool,
    pub comment_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_target: Option<String>,
    pub reply_text: String,
}

/// Placeholder shown when a list has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl EmptyState {
    #[must_use]
    pub fn new(message: &str, subtitle: &str) -> Self {
        Self {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Formats points with thousands separators and a `pts` suffix.
///
/// ```
/// assert_eq!(food_deals::ui::viewmodel::format_points(2450), "2,450 pts");
/// assert_eq!(food_deals::ui::viewmodel::format_points(95), "95 pts");
/// ```
#[must_use]
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped} pts")
}
