//! Comment thread records attached to deals.

use serde::{Deserialize, Serialize};

/// A user comment on a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Deal the comment belongs to.
    pub deal_id: String,
    pub username: String,
    pub points: u32,
    pub text: String,
    /// Relative display time such as `2 hours ago`.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
