//! Selection state - per-card "picked" flag for cards in visible hands.
//!
//! Entries exist only for cards currently held in a visible hand. The table
//! keeps that invariant by calling [`SelectionState::track`] /
//! [`SelectionState::forget`] whenever hands change and
//! [`SelectionState::sync`] when visibility changes.

use std::collections::HashMap;

use crate::types::Card;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    entries: HashMap<Card, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track cards as unselected, resetting any previous flag.
    pub fn track(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.entries.insert(card, false);
        }
    }

    /// Drop entries for cards that left a visible hand.
    pub fn forget(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.entries.remove(&card);
        }
    }

    /// Make the tracked set equal `visible`, keeping flags of cards already tracked.
    pub fn sync(&mut self, visible: impl IntoIterator<Item = Card>) {
        let mut next: HashMap<Card, bool> = HashMap::with_capacity(self.entries.len());
        for card in visible {
            next.insert(card, self.is_selected(card));
        }
        self.entries = next;
    }

    /// Flip a tracked card and return its new flag; untracked cards are left alone.
    pub fn toggle(&mut self, card: Card) -> Option<bool> {
        let flag = self.entries.get_mut(&card)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_selected(&self, card: Card) -> bool {
        self.entries.get(&card).copied().unwrap_or(false)
    }

    pub fn is_tracked(&self, card: Card) -> bool {
        self.entries.contains_key(&card)
    }

    /// Selected cards in hand order.
    pub fn selected(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .entries
            .iter()
            .filter_map(|(&card, &on)| on.then_some(card))
            .collect();
        cards.sort();
        cards
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut sel = SelectionState::new();
        sel.track([c("3h"), c("4h")]);
        let before = sel.clone();

        assert_eq!(sel.toggle(c("3h")), Some(true));
        assert!(sel.is_selected(c("3h")));
        assert_eq!(sel.toggle(c("3h")), Some(false));
        assert_eq!(sel, before);
    }

    #[test]
    fn untracked_cards_cannot_be_toggled() {
        let mut sel = SelectionState::new();
        assert_eq!(sel.toggle(c("as")), None);
        assert!(sel.is_empty());
    }

    #[test]
    fn sync_drops_stale_and_keeps_surviving_flags() {
        let mut sel = SelectionState::new();
        sel.track([c("3h"), c("4h"), c("5h")]);
        sel.toggle(c("3h"));
        sel.toggle(c("5h"));

        sel.sync([c("3h"), c("4h"), c("9c")]);
        assert_eq!(sel.len(), 3);
        assert!(sel.is_selected(c("3h")));
        assert!(!sel.is_tracked(c("5h")));
        assert!(!sel.is_selected(c("9c")));
    }

    #[test]
    fn selected_is_sorted_in_hand_order() {
        let mut sel = SelectionState::new();
        sel.track([Card::RED_JOKER, c("2s"), c("3c")]);
        sel.toggle(Card::RED_JOKER);
        sel.toggle(c("3c"));
        assert_eq!(sel.selected(), vec![c("3c"), Card::RED_JOKER]);
    }

    #[test]
    fn forget_removes_entries() {
        let mut sel = SelectionState::new();
        sel.track([c("3h"), c("4h")]);
        sel.toggle(c("4h"));
        sel.forget([c("4h")]);
        assert!(!sel.is_tracked(c("4h")));
        assert!(sel.selected().is_empty());
    }
}
