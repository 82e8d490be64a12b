//! The authoritative pile store.
//!
//! `GameState` owns every pile on the table plus the score and the
//! applied-intent history. It is an explicitly owned aggregate rather
//! than a process-wide singleton, so multiple games can coexist and tests
//! can build layouts directly. Mutation happens only through the
//! stock/waste cycle here and the move executor in `rules`.
//!
//! ## Invariants
//!
//! For every state reachable through the engine's operations:
//! - the 52 distinct (suit, rank) cards are conserved across all piles;
//! - face-up cards form a contiguous suffix in every tableau column;
//! - each foundation reads bottom-to-top as ranks 1..k of its own suit;
//! - the score never drops below zero.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, DECK_SIZE};
use super::moves::{Intent, IntentRecord};
use crate::piles::Pile;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;
/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;
/// Score at the start of every game.
pub const STARTING_SCORE: u32 = 1000;

/// Flat penalty charged for every applied move.
const MOVE_PENALTY: u32 = 1;

/// The complete state of one game.
///
/// Fields are public for rendering and test construction; the engine's
/// operations keep the documented invariants for every reachable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down draw pile; the top card is the next draw.
    pub stock: Pile,
    /// Discard fed by the stock; only the top card is face-up and
    /// interactable.
    pub waste: Pile,
    /// Ascending same-suit piles, indexed by `Suit::foundation_index`.
    pub foundations: [Pile; FOUNDATION_PILES],
    /// Seven build columns: a face-down prefix under a face-up,
    /// descending, alternating-color run.
    pub tableau: [Pile; TABLEAU_COLUMNS],
    /// Current score; floored at zero.
    pub score: u32,
    /// Applied intents, oldest first.
    pub history: Vector<IntentRecord>,
    next_sequence: u32,
}

impl GameState {
    /// An empty table: no cards anywhere, score at the starting value.
    ///
    /// Tests build specific layouts on top of this.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            stock: Pile::new(),
            waste: Pile::new(),
            foundations: Default::default(),
            tableau: Default::default(),
            score: STARTING_SCORE,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Deal a fresh game from an already-shuffled deck.
    ///
    /// Row-wise Klondike layout: pass `i` deals one card onto each of
    /// columns `i..7`, turned face-up when the pass reaches its own
    /// column, so column `j` ends with `j + 1` cards and exactly its top
    /// card face-up. The 24 undealt cards become the stock in deck order,
    /// face-down.
    ///
    /// Panics unless `deck` holds exactly 52 cards.
    #[must_use]
    pub fn deal(mut deck: Vec<Card>) -> Self {
        assert_eq!(deck.len(), DECK_SIZE, "deal requires a full deck");

        let mut tableau: [Pile; TABLEAU_COLUMNS] = Default::default();
        for pass in 0..TABLEAU_COLUMNS {
            for column in pass..TABLEAU_COLUMNS {
                let mut card = deck.pop().expect("full deck asserted above");
                card.face_up = pass == column;
                tableau[column].push(card);
            }
        }

        for card in &mut deck {
            card.face_up = false;
        }

        Self {
            stock: Pile::from_cards(deck),
            waste: Pile::new(),
            foundations: Default::default(),
            tableau,
            score: STARTING_SCORE,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Stock / Waste ===

    /// Draw the top stock card onto the waste, face-up.
    ///
    /// Drawing from an empty stock is a no-op, not an error. Returns
    /// whether a card moved. No score change.
    pub fn draw_from_stock(&mut self) -> bool {
        if let Some(mut card) = self.stock.pop() {
            card.face_up = true;
            self.waste.push(card);
            self.record(Intent::Draw);
            true
        } else {
            false
        }
    }

    /// Turn the exhausted waste back into the stock.
    ///
    /// Reverses the waste and flips every card face-down, so drawing
    /// again reproduces the original draw order. Only legal when the
    /// stock is empty and the waste is not; otherwise a no-op. Returns
    /// whether the recycle happened. No score change.
    pub fn recycle_waste(&mut self) -> bool {
        if !self.stock.is_empty() || self.waste.is_empty() {
            return false;
        }

        let mut cards = self.waste.take_all();
        cards.reverse();
        for card in &mut cards {
            card.face_up = false;
        }
        self.stock = Pile::from_cards(cards);
        self.record(Intent::Recycle);
        true
    }

    // === Scoring ===

    /// Charge the flat per-move penalty, never dropping below zero.
    pub(crate) fn charge_move(&mut self) {
        self.score = self.score.saturating_sub(MOVE_PENALTY);
    }

    // === Win detection ===

    /// A game is won exactly when all 52 cards sit on the foundations.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().map(Pile::len).sum::<usize>() == DECK_SIZE
    }

    // === History ===

    /// Record an applied intent in the history.
    pub(crate) fn record(&mut self, intent: Intent) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history.push_back(IntentRecord { intent, sequence });
    }

    // === Integrity ===

    /// Every card on the table, pile by pile, bottom-to-top.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flat_map(Pile::iter))
            .chain(self.tableau.iter().flat_map(Pile::iter))
    }

    /// True when no (suit, rank) identity appears twice on the table.
    ///
    /// Holds for any state, including partial layouts built by hand.
    #[must_use]
    pub fn cards_are_distinct(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.cards().all(|card| seen.insert(card.identity()))
    }

    /// True when the table holds the full 52-card deck, no duplicates and
    /// no losses.
    #[must_use]
    pub fn is_full_deck(&self) -> bool {
        self.cards().count() == DECK_SIZE && self.cards_are_distinct()
    }
}
