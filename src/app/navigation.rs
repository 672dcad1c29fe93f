//! Tab and detail navigation state machine.
//!
//! The visible screen is the product of a [`Tab`] and an optional detail
//! overlay. The detail overlay is modal: it is dismissed by going back or by
//! switching tabs, and leaving it never changes the active tab.
//!
//! ```text
//!            select_deal(id)
//!   (tab, List) ───────────────▶ (tab, Detail(id))
//!        ▲   ▲                        │      │
//!        │   └──────── go_back ───────┘      │
//!        └────────── select_tab(t) ──────────┘  (lands on (t, List))
//! ```

use crate::domain::DealsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bottom-navigation tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Deals,
    Favorites,
    History,
    Account,
}

impl Tab {
    /// Tabs in bottom-navigation order.
    pub const ALL: [Self; 4] = [Self::Deals, Self::Favorites, Self::History, Self::Account];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deals => "deals",
            Self::Favorites => "favorites",
            Self::History => "history",
            Self::Account => "account",
        }
    }

    /// Screen title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Deals => "Food Deals",
            Self::Favorites => "Your Favorites",
            Self::History => "Deal History",
            Self::Account => "Account",
        }
    }

    /// Fixed header subtitle. The deals tab derives its own from the location.
    #[must_use]
    pub const fn subtitle(self) -> Option<&'static str> {
        match self {
            Self::Deals => None,
            Self::Favorites => Some("Food deals you've saved"),
            Self::History => Some("Food deals you've used recently"),
            Self::Account => Some("Manage your profile and deal preferences"),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = DealsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DealsError::Command(format!("unknown tab: {wanted}")))
    }
}

/// Whether the active tab shows its list or a deal detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "dealId", rename_all = "lowercase")]
pub enum Screen {
    #[default]
    List,
    Detail(String),
}

/// Navigation controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    tab: Tab,
    screen: Screen,
}

impl Navigation {
    /// Initial state: deals tab, list view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Id of the deal under the detail overlay, if one is open.
    #[must_use]
    pub fn detail_id(&self) -> Option<&str> {
        match &self.screen {
            Screen::Detail(id) => Some(id),
            Screen::List => None,
        }
    }

    #[must_use]
    pub fn in_detail(&self) -> bool {
        matches!(self.screen, Screen::Detail(_))
    }

    /// Switches tab, closing any open detail overlay.
    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(from = %self.tab, to = %tab, closed_detail = self.in_detail(), "tab selected");
        self.tab = tab;
        self.screen = Screen::List;
    }

    /// Opens the detail overlay for `id` on top of the current tab.
    pub fn select_deal(&mut self, id: &str) {
        tracing::debug!(tab = %self.tab, deal_id = %id, "detail opened");
        self.screen = Screen::Detail(id.to_string());
    }

    /// Closes the detail overlay. Returns whether anything changed.
    pub fn go_back(&mut self) -> bool {
        if self.in_detail() {
            self.screen = Screen::List;
            tracing::debug!(tab = %self.tab, "detail closed");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_deals_list() {
        let nav = Navigation::new();
        assert_eq!(nav.tab(), Tab::Deals);
        assert_eq!(nav.screen(), &Screen::List);
        assert_eq!(nav.detail_id(), None);
    }

    #[test]
    fn back_returns_to_last_tab() {
        let mut nav = Navigation::new();
        nav.select_tab(Tab::History);
        nav.select_deal("4");
        assert_eq!(nav.detail_id(), Some("4"));
        assert_eq!(nav.tab(), Tab::History);
        assert!(nav.go_back());
        assert_eq!(nav.tab(), Tab::History);
        assert_eq!(nav.screen(), &Screen::List);
    }

    #[test]
    fn tab_switch_exits_detail() {
        let mut nav = Navigation::new();
        nav.select_deal("1");
        nav.select_tab(Tab::Favorites);
        assert_eq!(nav.tab(), Tab::Favorites);
        assert!(!nav.in_detail());
    }

    #[test]
    fn back_on_list_is_noop() {
        let mut nav = Navigation::new();
        assert!(!nav.go_back());
        assert_eq!(nav, Navigation::new());
    }

    #[test]
    fn opening_another_deal_replaces_detail() {
        let mut nav = Navigation::new();
        nav.select_deal("1");
        nav.select_deal("2");
        assert_eq!(nav.detail_id(), Some("2"));
        assert!(nav.go_back());
        assert!(!nav.in_detail());
    }

    #[test]
    fn tab_parsing() {
        assert_eq!("Favorites".parse::<Tab>().unwrap(), Tab::Favorites);
        assert_eq!(" account ".parse::<Tab>().unwrap(), Tab::Account);
        assert!(matches!("settings".parse::<Tab>(), Err(DealsError::Command(_))));
    }
}
