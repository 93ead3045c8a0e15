//! Newest-first list of task cards.

use std::collections::VecDeque;

use crate::form::domain::CardModel;

/// Ordered list of task cards with a running counter and empty-state flag.
///
/// The newest card is always at the head. The counter only grows; cards are
/// never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPresenter {
    cards: VecDeque<CardModel>,
    count: u64,
    empty_state_visible: bool,
}

impl Default for ListPresenter {
    fn default() -> Self {
        Self {
            cards: VecDeque::new(),
            count: 0,
            empty_state_visible: true,
        }
    }
}

impl ListPresenter {
    /// Creates an empty list with the empty-state indicator shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a card at the head of the list and bumps the counter.
    pub fn insert_front(&mut self, card: CardModel) {
        self.cards.push_front(card);
        self.count += 1;
        self.toggle_empty_state();
    }

    /// Returns how many cards have been inserted.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the counter label: `1 Task`, otherwise `{n} Tasks`.
    #[must_use]
    pub fn count_label(&self) -> String {
        let noun = if self.count == 1 { "Task" } else { "Tasks" };
        format!("{} {noun}", self.count)
    }

    /// Shows the empty-state indicator iff the list is empty.
    pub fn toggle_empty_state(&mut self) {
        self.empty_state_visible = self.count == 0;
    }

    /// Returns `true` while the empty-state indicator is shown.
    #[must_use]
    pub const fn is_empty_state_visible(&self) -> bool {
        self.empty_state_visible
    }

    /// Iterates over cards, newest first.
    pub fn cards(&self) -> impl Iterator<Item = &CardModel> {
        self.cards.iter()
    }

    /// Returns the newest card.
    #[must_use]
    pub fn newest(&self) -> Option<&CardModel> {
        self.cards.front()
    }
}
