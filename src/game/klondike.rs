//! The engine boundary a presentation layer drives.
//!
//! `Klondike` owns one game: the RNG that shuffles its deals and the
//! authoritative `GameState`. The presentation layer issues intents -
//! draw, recycle, move requests built from its own hit-testing - and
//! re-renders from `state()` afterwards. Every operation is a synchronous,
//! terminating state transition; the engine holds no locks and accepts
//! the next intent only once the previous one has completed.

use crate::core::card::standard_deck;
use crate::core::moves::{MoveOutcome, MoveSource, MoveTarget};
use crate::core::rng::DeckRng;
use crate::core::state::GameState;
use crate::rules::{execute, validate};

/// One Klondike game.
#[derive(Clone, Debug)]
pub struct Klondike {
    rng: DeckRng,
    state: GameState,
}

impl Klondike {
    /// Start a game from a seed; the same seed always deals the same
    /// game.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = DeckRng::new(seed);
        let state = fresh_deal(&mut rng);
        Self { rng, state }
    }

    /// Start a game seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut rng = DeckRng::from_entropy();
        let state = fresh_deal(&mut rng);
        Self { rng, state }
    }

    /// Adopt an existing state as the current game.
    ///
    /// The pile store is an owned aggregate, so a game can be driven from
    /// any state a caller holds - tests build layouts by hand and hand
    /// them to the engine this way. The RNG is freshly entropy-seeded and
    /// only matters for `redeal`.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            rng: DeckRng::from_entropy(),
            state,
        }
    }

    /// Abandon the current game and deal the next one from this game's
    /// RNG stream.
    pub fn redeal(&mut self) {
        self.state = fresh_deal(&mut self.rng);
    }

    /// The seed this game's deals derive from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Read-only view of the authoritative state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Draw one card from the stock onto the waste.
    ///
    /// A no-op returning false when the stock is empty.
    pub fn draw(&mut self) -> bool {
        self.state.draw_from_stock()
    }

    /// Recycle the exhausted waste back into the stock.
    ///
    /// A no-op returning false unless the stock is empty and the waste is
    /// not.
    pub fn recycle_waste(&mut self) -> bool {
        self.state.recycle_waste()
    }

    /// Validate and, if legal, apply a move request.
    ///
    /// Illegal or malformed requests are reported, never raised: the
    /// state stays untouched and the UI can revert its drag.
    pub fn attempt_move(&mut self, from: MoveSource, to: MoveTarget) -> MoveOutcome {
        let ruling = validate(&self.state, from, to);
        if execute(&mut self.state, from, ruling) {
            MoveOutcome::Applied {
                won: self.state.is_won(),
            }
        } else {
            MoveOutcome::Rejected
        }
    }

    /// Whether all 52 cards have reached the foundations.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }
}

/// Shuffle a fresh deck and lay out the table.
fn fresh_deal(rng: &mut DeckRng) -> GameState {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    GameState::deal(deck)
}
