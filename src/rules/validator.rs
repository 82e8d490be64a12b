//! Pure move legality judgment.
//!
//! `validate` inspects a proposed move against the current state and
//! returns a `Ruling` naming the resolved destination. It mutates nothing
//! and never fails: malformed requests - out-of-range columns, empty
//! sources, face-down run starts - are simply `Denied`, which is the
//! forgiving behavior a drag-and-drop presentation layer wants.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank};
use crate::core::moves::{MoveSource, MoveTarget};
use crate::core::state::GameState;

/// The validator's judgment on a proposed move.
///
/// Legal rulings carry the resolved destination so the executor targets
/// the right pile even where the request left it open: foundation moves
/// resolve to the moving card's own suit pile, never to a caller's guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ruling {
    /// Move the run onto this tableau column.
    ToTableau { column: usize },
    /// Move the single card onto this foundation pile.
    ToFoundation { index: usize },
    /// Leave the state untouched.
    Denied,
}

impl Ruling {
    /// True for either legal ruling.
    #[must_use]
    pub const fn is_legal(self) -> bool {
        !matches!(self, Ruling::Denied)
    }
}

/// Judge a proposed move against `state`.
#[must_use]
pub fn validate(state: &GameState, from: MoveSource, to: MoveTarget) -> Ruling {
    let (bottom, run_len) = match moving_run(state, from) {
        Some(run) => run,
        None => return Ruling::Denied,
    };

    match to {
        MoveTarget::Tableau { column } => {
            let pile = match state.tableau.get(column) {
                Some(pile) => pile,
                None => return Ruling::Denied,
            };
            let legal = match pile.top() {
                // Only a King may open an empty column.
                None => bottom.rank == Rank::KING,
                // Descending by one with alternating color, judged on the
                // bottom card of the moving run.
                Some(top) => bottom.rank.is_one_below(top.rank) && bottom.color() != top.color(),
            };
            if legal {
                Ruling::ToTableau { column }
            } else {
                Ruling::Denied
            }
        }
        MoveTarget::Foundation => {
            // Foundations take exactly one card, onto the suit's own pile.
            if run_len != 1 {
                return Ruling::Denied;
            }
            let index = bottom.suit.foundation_index();
            let legal = match state.foundations[index].top() {
                None => bottom.rank == Rank::ACE,
                Some(top) => top.rank.is_one_below(bottom.rank),
            };
            if legal {
                Ruling::ToFoundation { index }
            } else {
                Ruling::Denied
            }
        }
    }
}

/// Resolve what a source would move: the bottom card of the run and the
/// run length. `None` when the source is malformed or empty.
fn moving_run(state: &GameState, from: MoveSource) -> Option<(Card, usize)> {
    match from {
        MoveSource::Waste => state.waste.top().map(|&card| (card, 1)),
        MoveSource::Tableau { column, start } => {
            let pile = state.tableau.get(column)?;
            let card = *pile.get(start)?;
            if !card.face_up {
                // Face-down cards never move.
                return None;
            }
            Some((card, pile.len() - start))
        }
        MoveSource::Foundation { index } => state
            .foundations
            .get(index)?
            .top()
            .map(|&card| (card, 1)),
    }
}
