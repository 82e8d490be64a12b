//! Atomic application of validated moves.
//!
//! The executor trusts its `Ruling`: callers obtain one from `validate`
//! against the same state. Each transition detaches the moving run,
//! reveals a newly exposed tableau card, lands the run on the resolved
//! pile, charges the flat score penalty, and records the intent. No
//! partial application is ever observable; a debug assertion verifies no
//! card was duplicated on the way.

use smallvec::smallvec;

use crate::core::moves::{Intent, MoveSource, MoveTarget};
use crate::core::state::GameState;
use crate::piles::Run;

use super::validator::Ruling;

/// Apply a ruling to the state.
///
/// Returns whether the state changed; a `Denied` ruling leaves it
/// untouched.
pub fn execute(state: &mut GameState, from: MoveSource, ruling: Ruling) -> bool {
    match ruling {
        Ruling::Denied => false,
        Ruling::ToTableau { column } => {
            let run = detach(state, from);
            state.tableau[column].push_run(run);
            settle(state, from, MoveTarget::Tableau { column });
            true
        }
        Ruling::ToFoundation { index } => {
            let run = detach(state, from);
            state.foundations[index].push_run(run);
            settle(state, from, MoveTarget::Foundation);
            true
        }
    }
}

/// Remove the moving run from its source, in original order.
///
/// A tableau source that uncovers a face-down card flips it face-up: the
/// classic reveal, and the only implicit orientation change a move makes.
fn detach(state: &mut GameState, from: MoveSource) -> Run {
    match from {
        MoveSource::Waste => {
            smallvec![state.waste.pop().expect("validated waste source")]
        }
        MoveSource::Tableau { column, start } => {
            let run = state.tableau[column].take_run(start);
            if let Some(top) = state.tableau[column].top_mut() {
                top.face_up = true;
            }
            run
        }
        MoveSource::Foundation { index } => {
            smallvec![state.foundations[index]
                .pop()
                .expect("validated foundation source")]
        }
    }
}

/// Post-move bookkeeping shared by both destinations.
fn settle(state: &mut GameState, from: MoveSource, to: MoveTarget) {
    state.charge_move();
    state.record(Intent::Move { from, to });
    debug_assert!(state.cards_are_distinct(), "move duplicated a card");
}
