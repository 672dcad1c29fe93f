//! Application state management.
//!
//! This module defines [`AppState`], the single owner of everything that
//! changes during a session: the deal store (favorites and usage), navigation,
//! the search box, the active sort key, comment drafts, account toggles and
//! the current location. All of it is mutated through named methods, called by
//! the event handler; view models are computed on demand from a snapshot.
//!
//! # State Components
//!
//! - **Store**: immutable catalog plus favorite set and usage counters
//! - **Navigation**: active tab and optional detail overlay
//! - **Query**: search text and [`SortKey`] feeding the deals projection
//! - **Composer**: comment and reply drafts for the deal in detail
//! - **Settings**: the account menu with its current toggle values
//! - **Location**: neighbourhood shown in the header and used for directions
//!
//! # Example
//!
//! ```rust
//! use food_deals::app::{AppState, SessionDefaults};
//! use food_deals::catalog::{BuiltinCatalog, CatalogSource};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(BuiltinCatalog.load()?);
//! let mut state = AppState::new(catalog, SessionDefaults::default());
//! state.set_search_query("sushi");
//! assert_eq!(state.visible_deals().len(), 1);
//! # Ok::<(), food_deals::DealsError>(())
//! ```

use super::composer::{CommentComposer, Submission};
use super::navigation::{Navigation, Tab};
use super::store::DealStore;
use crate::app::Action;
use crate::catalog::{Catalog, MenuRow, MenuSection};
use crate::domain::history::sort_most_recent_first;
use crate::domain::{Comment, Deal, HistoryItem};
use crate::query::{project, SortKey};
use std::sync::Arc;

/// Base URL share links are built from when none is configured.
pub const DEFAULT_SHARE_ORIGIN: &str = "https://fooddeals.app";

/// Values a session starts from and returns to on reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub default_sort: SortKey,
    /// Overrides the profile location when set.
    pub location: Option<String>,
    pub share_origin: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            location: None,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    store: DealStore,
    navigation: Navigation,
    search_query: String,
    sort_key: SortKey,
    composer: CommentComposer,
    settings: Vec<MenuSection>,
    location: String,
    defaults: SessionDefaults,
}

impl AppState {
    /// Creates a session over `catalog`, seeded from its session block.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Fixture data shared for the lifetime of the session
    /// * `defaults` - Sort key, location override and share origin
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, defaults: SessionDefaults) -> Self {
        let settings = catalog.account_menu.clone();
        let location = initial_location(&catalog, &defaults);
        Self {
            store: DealStore::seeded(catalog),
            navigation: Navigation::new(),
            search_query: String::new(),
            sort_key: defaults.default_sort,
            composer: CommentComposer::default(),
            settings,
            location,
            defaults,
        }
    }

    /// Returns every piece of session state to its initial value.
    pub fn reset(&mut self) {
        tracing::debug!("resetting session state");
        self.store.reset();
        self.navigation = Navigation::new();
        self.search_query.clear();
        self.sort_key = self.defaults.default_sort;
        self.composer.clear();
        self.settings = self.store.catalog().account_menu.clone();
        self.location = initial_location(self.store.catalog(), &self.defaults);
    }

    #[must_use]
    pub const fn store(&self) -> &DealStore {
        &self.store
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    #[must_use]
    pub const fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[must_use]
    pub const fn composer(&self) -> &CommentComposer {
        &self.composer
    }

    /// Account menu with the session's current toggle values.
    #[must_use]
    pub fn settings(&self) -> &[MenuSection] {
        &self.settings
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn share_origin(&self) -> &str {
        &self.defaults.share_origin
    }

    /// Replaces the search text. Any string is accepted verbatim.
    pub fn set_search_query(&mut self, query: &str) {
        tracing::trace!(query = %query, "search query updated");
        query.clone_into(&mut self.search_query);
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        tracing::debug!(sort_key = %sort_key, "sort key changed");
        self.sort_key = sort_key;
    }

    /// Switches tab. Leaving a detail overlay discards its comment drafts.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.navigation.in_detail() {
            self.composer.clear();
        }
        self.navigation.select_tab(tab);
    }

    /// Opens the detail overlay for `id` if the catalog can resolve it.
    ///
    /// Returns `false` and leaves navigation untouched for unknown ids.
    pub fn select_deal(&mut self, id: &str) -> bool {
        if self.catalog().find_deal(id).is_none() {
            tracing::debug!(deal_id = %id, "ignoring selection of unknown deal");
            return false;
        }
        if self.navigation.detail_id() != Some(id) {
            self.composer.clear();
        }
        self.navigation.select_deal(id);
        true
    }

    /// Closes the detail overlay. Returns whether anything changed.
    pub fn go_back(&mut self) -> bool {
        let closed = self.navigation.go_back();
        if closed {
            self.composer.clear();
        }
        closed
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.store.toggle_favorite(id)
    }

    pub fn increment_usage(&mut self, id: &str) -> u32 {
        self.store.increment_usage(id)
    }

    pub fn decrement_usage(&mut self, id: &str) -> u32 {
        self.store.decrement_usage(id)
    }

    /// Resolves `id` against live deals, then history.
    #[must_use]
    pub fn find_deal(&self, id: &str) -> Option<&Deal> {
        self.catalog().find_deal(id)
    }

    /// The deal under the detail overlay, if any.
    #[must_use]
    pub fn detail_deal(&self) -> Option<&Deal> {
        self.navigation.detail_id().and_then(|id| self.find_deal(id))
    }

    /// Comments on the deal under the detail overlay.
    #[must_use]
    pub fn detail_comments(&self) -> Vec<&Comment> {
        self.navigation
            .detail_id()
            .map(|id| self.catalog().comments_for(id).collect())
            .unwrap_or_default()
    }

    /// Ordered deal list for the active tab.
    ///
    /// The deals tab projects the whole catalog with the search text; the
    /// favorites tab projects only favorited deals with an empty query. Both
    /// use the active sort key. Other tabs have no deal list.
    #[must_use]
    pub fn visible_deals(&self) -> Vec<&Deal> {
        match self.navigation.tab() {
            Tab::Deals => project(self.store.deals(), &self.search_query, self.sort_key),
            Tab::Favorites => project(self.store.favorite_deals(), "", self.sort_key),
            Tab::History | Tab::Account => Vec::new(),
        }
    }

    /// Past orders, most recent first.
    #[must_use]
    pub fn history_items(&self) -> Vec<&HistoryItem> {
        let mut items: Vec<&HistoryItem> = self.catalog().history.iter().collect();
        sort_most_recent_first(&mut items);
        items
    }

    /// Flips the toggle row labelled `label`.
    ///
    /// Returns the new value, or `None` when no toggle row has that label.
    pub fn toggle_setting(&mut self, label: &str) -> Option<bool> {
        let enabled = self
            .settings
            .iter_mut()
            .flat_map(|section| section.items.iter_mut())
            .find_map(|row| match row {
                MenuRow::Toggle { label: l, enabled } if l.as_str() == label => Some(enabled),
                _ => None,
            })?;
        *enabled = !*enabled;
        tracing::debug!(label = %label, enabled = *enabled, "setting toggled");
        Some(*enabled)
    }

    /// Replaces the current location with trimmed, non-blank `text`.
    pub fn change_location(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        tracing::debug!(location = %trimmed, "location changed");
        trimmed.clone_into(&mut self.location);
        true
    }

    /// Opens the comment box under the deal in detail.
    pub fn open_composer(&mut self) -> bool {
        if !self.navigation.in_detail() {
            return false;
        }
        self.composer.open();
        true
    }

    pub fn edit_comment(&mut self, text: &str) -> bool {
        if !self.navigation.in_detail() {
            return false;
        }
        self.composer.edit_comment(text);
        true
    }

    /// Opens the reply box under `comment_id` if it belongs to the deal in detail.
    pub fn start_reply(&mut self, comment_id: &str) -> bool {
        if self.reply_target_comment(comment_id).is_none() {
            tracing::debug!(comment_id = %comment_id, "ignoring reply to unknown comment");
            return false;
        }
        self.composer.start_reply(comment_id);
        true
    }

    pub fn edit_reply(&mut self, text: &str) -> bool {
        self.composer.edit_reply(text)
    }

    /// Sends the comment draft, returning the submission to perform.
    pub fn send_comment(&mut self) -> Option<Action> {
        let deal_id = self.navigation.detail_id()?.to_string();
        match self.composer.take_comment()? {
            Submission::Comment { text } => Some(Action::SubmitComment { deal_id, text }),
            Submission::Reply { .. } => None,
        }
    }

    /// Sends the reply draft, returning the submission to perform.
    pub fn send_reply(&mut self) -> Option<Action> {
        let deal_id = self.navigation.detail_id()?.to_string();
        let target = self.composer.reply_target()?;
        let username = self.reply_target_comment(target)?.username.clone();
        match self.composer.take_reply()? {
            Submission::Reply { comment_id, text } => Some(Action::SubmitReply {
                deal_id,
                comment_id,
                username,
                text,
            }),
            Submission::Comment { .. } => None,
        }
    }

    fn reply_target_comment(&self, comment_id: &str) -> Option<&Comment> {
        let deal_id = self.navigation.detail_id()?;
        self.catalog()
            .comments_for(deal_id)
            .find(|comment| comment.id == comment_id)
    }
}

fn initial_location(catalog: &Catalog, defaults: &SessionDefaults) -> String {
    defaults
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(catalog.profile.location.as_str())
        .to_string()
}
