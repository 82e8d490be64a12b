//! The move vocabulary exchanged with the presentation layer.
//!
//! A presentation layer maps pointer geometry onto `MoveSource` and
//! `MoveTarget` values; the engine never sees pixels. `MoveTarget::Foundation`
//! carries no pile index on purpose: the validator resolves the pile from
//! the moving card's suit and reports it in its ruling instead of trusting
//! (or mutating) whatever the caller aimed at.

use serde::{Deserialize, Serialize};

/// Where a move takes its cards from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// The top card of the waste pile.
    Waste,
    /// The face-up run of tableau `column`, from `start` to the column's
    /// end, moved as a unit.
    Tableau { column: usize, start: usize },
    /// The top card of foundation `index`.
    Foundation { index: usize },
}

/// Where a move puts its cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTarget {
    /// A tableau column.
    Tableau { column: usize },
    /// The foundation row; the engine picks the pile by suit.
    Foundation,
}

/// Outcome of a move request: the only two cases the engine distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// State mutated, score charged, win check run.
    Applied { won: bool },
    /// State untouched.
    Rejected,
}

impl MoveOutcome {
    /// True when the move mutated the state.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// An intent the engine accepted and applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// One card drawn from the stock to the waste.
    Draw,
    /// The exhausted waste turned back into the stock.
    Recycle,
    /// A validated relocation of cards between piles.
    Move { from: MoveSource, to: MoveTarget },
}

/// A recorded intent with its position in the game.
///
/// The history of applied intents supports replay and debugging; it is a
/// log, not an undo stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The applied intent.
    pub intent: Intent,
    /// Zero-based position in the game's sequence of applied intents.
    pub sequence: u32,
}
