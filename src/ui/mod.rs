//! Presentation layer: immutable view models for every screen.
//!
//! The crate does not draw anything. It computes display-ready view models
//! and leaves pixels to whatever front end consumes them.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → (front end)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and display formatting helpers

pub mod viewmodel;

pub use viewmodel::{
    AccountStats, AccountView, Body, CommentView, ComposerView, DealCard, DealDetailView,
    EmptyState, HeaderInfo, HistoryRow, MenuRowView, MenuSectionView, ProfileCard, SortChip,
    UIViewModel, UserBadge,
};
