//! Path utilities for data files and user-supplied paths.
//!
//! The data directory follows the XDG layout: `$XDG_DATA_HOME/food-deals`,
//! else `$HOME/.local/share/food-deals`, else `./food-deals` when neither
//! variable is set.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "food-deals";

/// Returns the directory trace logs and fallback clipboard files live in.
///
/// The directory is not created here.
#[must_use]
pub fn data_dir() -> PathBuf {
    data_dir_from(
        env::var("XDG_DATA_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    )
}

fn data_dir_from(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    match (xdg_data_home.filter(|p| !p.is_empty()), home.filter(|p| !p.is_empty())) {
        (Some(xdg), _) => PathBuf::from(xdg).join(APP_DIR),
        (None, Some(home)) => PathBuf::from(home).join(".local").join("share").join(APP_DIR),
        (None, None) => PathBuf::from(APP_DIR),
    }
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use food_deals::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return path.to_string();
    };
    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
