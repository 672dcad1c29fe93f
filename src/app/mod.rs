//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the session runtime (`main.rs`) and the
//! catalog/query/domain layers. It owns all session state and implements the
//! event-driven flow that powers every screen.
//!
//! # Architecture
//!
//! ```text
//! Command line → Event → handle_event → AppState mutations → Actions → Side effects
//!                                             │
//!                                             └──▶ compute_viewmodel → UIViewModel
//! ```
//!
//! # Modules
//!
//! - [`store`]: Favorite set and usage counters over the catalog
//! - [`navigation`]: Tab × list/detail state machine
//! - [`composer`]: Comment and reply drafts
//! - [`state`]: Central application state container
//! - [`handler`]: Event processing and state transitions
//! - [`actions`]: Side effect commands emitted by the handler
//! - [`command`]: Text command parsing for the session driver
//!
//! # Example
//!
//! ```rust
//! use food_deals::app::{handle_event, AppState, Event, SessionDefaults, Tab};
//! use food_deals::catalog::{BuiltinCatalog, CatalogSource};
//! use std::sync::Arc;
//!
//! let mut state = AppState::new(Arc::new(BuiltinCatalog.load()?), SessionDefaults::default());
//! handle_event(&mut state, &Event::SelectTab(Tab::Favorites))?;
//! assert_eq!(state.visible_deals().len(), 2);
//! # Ok::<(), food_deals::DealsError>(())
//! ```

pub mod actions;
pub mod command;
pub mod composer;
pub mod handler;
pub mod navigation;
pub mod state;
pub mod store;
mod view;

pub use actions::Action;
pub use command::{parse_command, Command};
pub use composer::CommentComposer;
pub use handler::{handle_event, Event};
pub use navigation::{Navigation, Screen, Tab};
pub use state::{AppState, SessionDefaults, DEFAULT_SHARE_ORIGIN};
pub use store::DealStore;
