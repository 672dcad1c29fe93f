//! Sort criteria for the deal feed.

use crate::domain::error::{DealsError, Result};
use crate::domain::Deal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to a projection.
///
/// Parsing from text fails closed: anything other than the four kebab-case
/// names is rejected rather than mapped to a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending distance.
    #[default]
    Nearest,
    /// Descending discount percentage.
    BestDeal,
    /// Descending rating.
    HighestRated,
    /// Ascending days until expiration.
    ExpiringSoon,
}

impl SortKey {
    /// All keys in filter-chip order.
    pub const ALL: [Self; 4] = [
        Self::Nearest,
        Self::BestDeal,
        Self::HighestRated,
        Self::ExpiringSoon,
    ];

    /// Wire name, e.g. `best-deal`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::BestDeal => "best-deal",
            Self::HighestRated => "highest-rated",
            Self::ExpiringSoon => "expiring-soon",
        }
    }

    /// Chip label, e.g. `Best Deal`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nearest => "Nearest",
            Self::BestDeal => "Best Deal",
            Self::HighestRated => "Highest Rated",
            Self::ExpiringSoon => "Expiring Soon",
        }
    }

    /// Compares two deals under this key.
    ///
    /// Floating-point fields use a total order so that a stray NaN cannot
    /// break the sort.
    #[must_use]
    pub fn compare(self, a: &Deal, b: &Deal) -> Ordering {
        match self {
            Self::Nearest => a.distance.total_cmp(&b.distance),
            Self::BestDeal => b.discount_percent().total_cmp(&a.discount_percent()),
            Self::HighestRated => b.rating.total_cmp(&a.rating),
            Self::ExpiringSoon => a.days_until_expiration.cmp(&b.days_until_expiration),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DealsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DealsError::Config(format!(
                    "unknown sort key '{wanted}' (expected nearest, best-deal, highest-rated or expiring-soon)"
                ))
            })
    }
}
