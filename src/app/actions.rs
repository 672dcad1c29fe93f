//! Actions representing side effects to be executed by the session runtime.
//!
//! The event handler never touches the outside world. When an intent needs
//! the clipboard, a browser or a comment backend, it returns an [`Action`]
//! describing the effect, and the runtime decides how to carry it out.
//!
//! # Example
//!
//! ```rust
//! use food_deals::app::Action;
//!
//! let actions = vec![Action::OpenUrl {
//!     url: "https://www.bellaitalia.com".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects requested by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes share text to the system clipboard.
    ///
    /// The runtime tries its primary clipboard, then a fallback copy path,
    /// and surfaces a failure toast only when both fail.
    CopyToClipboard {
        /// Full share message including the deal link.
        text: String,
    },

    /// Opens a URL outside the application (maps, restaurant website).
    OpenUrl {
        url: String,
    },

    /// Posts a new top-level comment on a deal.
    SubmitComment {
        deal_id: String,
        /// Trimmed, non-blank comment body.
        text: String,
    },

    /// Posts a reply to an existing comment.
    SubmitReply {
        deal_id: String,
        /// Id of the comment being replied to.
        comment_id: String,
        /// Author of the comment being replied to, for the `@mention`.
        username: String,
        /// Trimmed, non-blank reply body.
        text: String,
    },
}
