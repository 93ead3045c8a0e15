//! Display model of a registered task.

use serde::Serialize;

/// Everything needed to display one task card, independent of any UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardModel {
    initials: String,
    display_name: String,
    timestamp: String,
    title: String,
    description: String,
    status_label: &'static str,
    status_class: &'static str,
}

/// Parameter object for assembling a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParts {
    /// Avatar initials.
    pub initials: String,
    /// User's display name.
    pub display_name: String,
    /// Formatted creation time.
    pub timestamp: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status label shown to the user.
    pub status_label: &'static str,
    /// Style tag for the status badge.
    pub status_class: &'static str,
}

impl CardModel {
    /// Assembles a card from its parts.
    #[must_use]
    pub fn new(parts: CardParts) -> Self {
        Self {
            initials: parts.initials,
            display_name: parts.display_name,
            timestamp: parts.timestamp,
            title: parts.title,
            description: parts.description,
            status_label: parts.status_label,
            status_class: parts.status_class,
        }
    }

    /// Returns the avatar initials.
    #[must_use]
    pub fn initials(&self) -> &str {
        &self.initials
    }

    /// Returns the user's display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the formatted creation time.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status label, `Active` or `Inactive`.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        self.status_label
    }

    /// Returns the status style tag, `active` or `inactive`.
    #[must_use]
    pub const fn status_class(&self) -> &'static str {
        self.status_class
    }
}
