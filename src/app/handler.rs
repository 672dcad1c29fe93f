//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns user intents into
//! state changes and action sequences. It is the only caller of the
//! [`AppState`] mutators.
//!
//! # Architecture
//!
//! 1. The runtime turns input into an [`Event`]
//! 2. [`handle_event`] pattern-matches the intent
//! 3. State mutations occur via `AppState` methods
//! 4. The handler reports whether the screen changed and which [`Action`]s
//!    the runtime must perform
//!
//! # Event Types
//!
//! - **Query**: `SetSearchQuery`, `SetSortKey`
//! - **Navigation**: `SelectTab`, `SelectDeal`, `GoBack`
//! - **Store**: `ToggleFavorite`, `IncrementUsage`, `DecrementUsage`
//! - **Outbound**: `ShareDeal`, `OpenDirections`, `OpenWebsite`
//! - **Comments**: `OpenComposer`, `EditComment`, `SendComment`,
//!   `StartReply`, `EditReply`, `SendReply`
//! - **Account**: `ToggleSetting`, `ChangeLocation`
//! - **Session**: `Reload`
//!
//! # Example
//!
//! ```rust
//! use food_deals::app::{handle_event, AppState, Event, SessionDefaults};
//! use food_deals::catalog::{BuiltinCatalog, CatalogSource};
//! use std::sync::Arc;
//!
//! let mut state = AppState::new(Arc::new(BuiltinCatalog.load()?), SessionDefaults::default());
//! let (rerender, actions) = handle_event(&mut state, &Event::ToggleFavorite("3".to_string()))?;
//! assert!(rerender);
//! assert!(actions.is_empty());
//! assert!(state.store().is_favorite("3"));
//! # Ok::<(), food_deals::DealsError>(())
//! ```

use super::navigation::Tab;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::query::SortKey;

/// User intents.
///
/// Ids are plain strings; the store accepts any id, while intents that need
/// a real deal (detail, share, links) are ignored for ids the catalog cannot
/// resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search text on the deals tab.
    SetSearchQuery(String),
    /// Changes the ordering of the deals and favorites lists.
    SetSortKey(SortKey),
    /// Switches tab, closing any detail overlay.
    SelectTab(Tab),
    /// Opens the detail overlay for a deal.
    SelectDeal(String),
    /// Closes the detail overlay.
    GoBack,

    ToggleFavorite(String),
    IncrementUsage(String),
    DecrementUsage(String),

    /// Copies the deal's share text to the clipboard.
    ShareDeal(String),
    /// Opens a maps search for the restaurant near the current location.
    OpenDirections(String),
    OpenWebsite(String),

    /// Opens the comment box under the deal in detail.
    OpenComposer,
    EditComment(String),
    SendComment,
    /// Opens the reply box under a comment of the deal in detail.
    StartReply(String),
    EditReply(String),
    SendReply,

    /// Flips an account menu switch by its label.
    ToggleSetting(String),
    ChangeLocation(String),

    /// Discards all session changes and returns to the initial screen.
    Reload,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A pair of whether the view model changed and must be re-rendered, and the
/// actions to execute in order. Intents that do not apply in the current
/// state (an unknown deal id, sending a blank draft) return `(false, [])`.
///
/// # Errors
///
/// None of the current intents fail; the `Result` leaves room for runtimes
/// whose actions are resolved eagerly.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetSearchQuery(query) => {
            let changed = state.search_query() != query;
            state.set_search_query(query);
            Ok((changed, vec![]))
        }
        Event::SetSortKey(sort_key) => {
            let changed = state.sort_key() != *sort_key;
            state.set_sort_key(*sort_key);
            Ok((changed, vec![]))
        }
        Event::SelectTab(tab) => {
            state.select_tab(*tab);
            Ok((true, vec![]))
        }
        Event::SelectDeal(id) => Ok((state.select_deal(id), vec![])),
        Event::GoBack => Ok((state.go_back(), vec![])),
        Event::ToggleFavorite(id) => {
            state.toggle_favorite(id);
            Ok((true, vec![]))
        }
        Event::IncrementUsage(id) => {
            state.increment_usage(id);
            Ok((true, vec![]))
        }
        Event::DecrementUsage(id) => {
            let before = state.store().usage_count(id);
            let after = state.decrement_usage(id);
            Ok((before != after, vec![]))
        }
        Event::ShareDeal(id) => {
            let Some(deal) = state.find_deal(id) else {
                tracing::debug!(deal_id = %id, "share requested for unknown deal");
                return Ok((false, vec![]));
            };
            let text = deal.share_text(state.share_origin());
            tracing::debug!(deal_id = %id, "sharing deal");
            Ok((false, vec![Action::CopyToClipboard { text }]))
        }
        Event::OpenDirections(id) => {
            let Some(deal) = state.find_deal(id) else {
                tracing::debug!(deal_id = %id, "directions requested for unknown deal");
                return Ok((false, vec![]));
            };
            let url = deal.directions_url(state.location());
            Ok((false, vec![Action::OpenUrl { url }]))
        }
        Event::OpenWebsite(id) => {
            let Some(deal) = state.find_deal(id) else {
                tracing::debug!(deal_id = %id, "website requested for unknown deal");
                return Ok((false, vec![]));
            };
            Ok((false, vec![Action::OpenUrl { url: deal.website_url() }]))
        }
        Event::OpenComposer => Ok((state.open_composer(), vec![])),
        Event::EditComment(text) => Ok((state.edit_comment(text), vec![])),
        Event::SendComment => Ok(state
            .send_comment()
            .map_or((false, vec![]), |action| (true, vec![action]))),
        Event::StartReply(comment_id) => Ok((state.start_reply(comment_id), vec![])),
        Event::EditReply(text) => Ok((state.edit_reply(text), vec![])),
        Event::SendReply => Ok(state
            .send_reply()
            .map_or((false, vec![]), |action| (true, vec![action]))),
        Event::ToggleSetting(label) => {
            let toggled = state.toggle_setting(label);
            if toggled.is_none() {
                tracing::debug!(label = %label, "no toggle row with this label");
            }
            Ok((toggled.is_some(), vec![]))
        }
        Event::ChangeLocation(text) => Ok((state.change_location(text), vec![])),
        Event::Reload => {
            state.reset();
            Ok((true, vec![]))
        }
    }
}
