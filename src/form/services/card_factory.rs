//! Builds display cards for registered tasks.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt;
use thiserror::Error;

use crate::directory::domain::User;
use crate::form::domain::{CardModel, CardParts};
use crate::task::domain::TaskDraft;

/// Default card timestamp layout, e.g. `March 1, 2026 09:30`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%B %-d, %Y %H:%M";

/// Error returned for a timestamp layout chrono cannot format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid timestamp format '{0}'")]
pub struct CardFormatError(pub String);

/// Presentation settings for task cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFormat {
    timestamp_format: String,
}

impl Default for CardFormat {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
        }
    }
}

impl CardFormat {
    /// Creates a format with a chrono `strftime` timestamp layout.
    ///
    /// # Errors
    ///
    /// Returns [`CardFormatError`] when the layout contains an unknown
    /// specifier.
    pub fn new(timestamp_format: impl Into<String>) -> Result<Self, CardFormatError> {
        let layout = timestamp_format.into();
        if StrftimeItems::new(&layout).any(|item| matches!(item, Item::Error)) {
            return Err(CardFormatError(layout));
        }
        Ok(Self {
            timestamp_format: layout,
        })
    }

    /// Returns the timestamp layout.
    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }
}

/// Derives avatar initials from a full name.
///
/// Takes the first character of the first two whitespace-separated tokens; a
/// single token contributes its first two characters instead. The result is
/// uppercased. A blank name yields an empty string.
///
/// # Examples
///
/// ```
/// use taskdesk::form::services::initials;
///
/// assert_eq!(initials("Ana Maria Lopez"), "AM");
/// assert_eq!(initials("Carlos"), "CA");
/// assert_eq!(initials(""), "");
/// ```
#[must_use]
pub fn initials(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (None, _) => String::new(),
        (Some(only), None) => only.chars().take(2).flat_map(char::to_uppercase).collect(),
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect(),
    }
}

/// Turns a user and a validated draft into a [`CardModel`]. Pure; no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCardFactory {
    format: CardFormat,
}

impl TaskCardFactory {
    /// Creates a factory with the default card format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with a custom card format.
    #[must_use]
    pub const fn with_format(format: CardFormat) -> Self {
        Self { format }
    }

    /// Returns the card format.
    #[must_use]
    pub const fn format(&self) -> &CardFormat {
        &self.format
    }

    /// Builds the card for a task created at `timestamp`, formatted in the
    /// timestamp's own time zone.
    #[must_use]
    pub fn build<Tz>(&self, user: &User, draft: &TaskDraft, timestamp: &DateTime<Tz>) -> CardModel
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let status = draft.status();
        CardModel::new(CardParts {
            initials: initials(user.full_name()),
            display_name: user.full_name().to_owned(),
            timestamp: timestamp
                .format(self.format.timestamp_format())
                .to_string(),
            title: draft.title().as_str().to_owned(),
            description: draft.description().as_str().to_owned(),
            status_label: status.label(),
            status_class: status.as_str(),
        })
    }
}
