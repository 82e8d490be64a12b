//! The ordered card pile primitive.
//!
//! Every zone on the table - stock, waste, foundations, tableau columns -
//! is a `Pile`: an ordered sequence whose last element is the exposed top
//! card. Tableau columns additionally expose a face-up suffix that moves
//! as a unit; `take_run` detaches such a suffix in order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// A run of cards detached from a pile, in original bottom-to-top order.
///
/// A legal run never exceeds 13 cards (King down to Ace), so it stays on
/// the stack.
pub type Run = SmallVec<[Card; 13]>;

/// An ordered pile of cards; index 0 is the bottom, the last card is the
/// top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards already in bottom-to-top order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The exposed top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Mutable access to the exposed top card.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// The card at `index`, counting from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Detach the suffix starting at `start`, preserving order.
    ///
    /// Panics if `start` is out of range; callers validate first.
    pub fn take_run(&mut self, start: usize) -> Run {
        assert!(start < self.cards.len(), "run start out of range");
        self.cards.drain(start..).collect()
    }

    /// Append a run on top, preserving its order.
    pub fn push_run(&mut self, run: Run) {
        self.cards.extend(run);
    }

    /// Drain every card out of the pile, bottom first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// The cards in bottom-to-top order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate bottom-to-top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// True when the face-up cards form a contiguous suffix.
    ///
    /// This is the tableau orientation invariant: once a card is face-up,
    /// every card above it stays face-up.
    #[must_use]
    pub fn face_up_is_suffix(&self) -> bool {
        let mut seen_face_up = false;
        for card in &self.cards {
            if seen_face_up && !card.face_up {
                return false;
            }
            seen_face_up |= card.face_up;
        }
        true
    }
}
