//! Line-oriented command parsing for the session driver.
//!
//! Each input line is one command: a verb followed by an optional argument
//! that runs to the end of the line. Blank lines and `#` comments parse to
//! `None`.
//!
//! ```text
//! search sushi
//! sort best-deal
//! tab favorites
//! open 2
//! comment This looks great
//! ```

use super::handler::Event;
use super::navigation::Tab;
use crate::domain::{DealsError, Result};
use crate::query::SortKey;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed an intent through the event handler.
    Dispatch(Event),
    /// End the session.
    Quit,
}

/// Parses one input line.
///
/// # Errors
///
/// Returns [`DealsError::Command`] for unknown verbs, missing arguments and
/// unknown tabs, and [`DealsError::Config`] for unknown sort keys.
///
/// # Example
///
/// ```rust
/// use food_deals::app::{parse_command, Command, Event};
///
/// let cmd = parse_command("fav 3")?;
/// assert_eq!(cmd, Some(Command::Dispatch(Event::ToggleFavorite("3".to_string()))));
/// assert_eq!(parse_command("   ")?, None);
/// assert!(parse_command("sort cheapest").is_err());
/// # Ok::<(), food_deals::DealsError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let event = match verb.to_ascii_lowercase().as_str() {
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        "search" => Event::SetSearchQuery(rest.to_string()),
        "sort" => Event::SetSortKey(required(verb, rest)?.parse::<SortKey>()?),
        "tab" => Event::SelectTab(required(verb, rest)?.parse::<Tab>()?),
        "open" => Event::SelectDeal(required(verb, rest)?),
        "back" => Event::GoBack,
        "fav" => Event::ToggleFavorite(required(verb, rest)?),
        "use" => Event::IncrementUsage(required(verb, rest)?),
        "unuse" => Event::DecrementUsage(required(verb, rest)?),
        "share" => Event::ShareDeal(required(verb, rest)?),
        "directions" => Event::OpenDirections(required(verb, rest)?),
        "website" => Event::OpenWebsite(required(verb, rest)?),
        "compose" => Event::OpenComposer,
        "comment" => Event::EditComment(rest.to_string()),
        "send" => Event::SendComment,
        "reply" => Event::StartReply(required(verb, rest)?),
        "reply-text" => Event::EditReply(rest.to_string()),
        "send-reply" => Event::SendReply,
        "setting" => Event::ToggleSetting(required(verb, rest)?),
        "location" => Event::ChangeLocation(rest.to_string()),
        "reload" => Event::Reload,
        other => return Err(DealsError::Command(format!("unknown command: {other}"))),
    };

    tracing::trace!(verb = %verb, "command parsed");
    Ok(Some(Command::Dispatch(event)))
}

fn required(verb: &str, arg: &str) -> Result<String> {
    if arg.is_empty() {
        Err(DealsError::Command(format!("{verb} needs an argument")))
    } else {
        Ok(arg.to_string())
    }
}
