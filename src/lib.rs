//! # klondike-engine
//!
//! A Klondike solitaire game-state and move-validation engine.
//!
//! The crate owns the authoritative state of a game - stock, waste, four
//! foundations, seven tableau columns, score - and enforces the
//! legal-move rules. Rendering, drag tracking, and hit-testing live in a
//! presentation layer that issues structured move requests and re-renders
//! from the state handed back.
//!
//! ## Design Principles
//!
//! 1. **Owned aggregate, no singletons**: every game is a `Klondike`
//!    value, so games and tests coexist freely.
//!
//! 2. **No-throw, report-invalid**: illegal or malformed requests yield
//!    `MoveOutcome::Rejected` with the state untouched. Nothing in the
//!    public surface panics on bad input.
//!
//! 3. **Deterministic when seeded**: shuffles run through an injected
//!    `DeckRng`, so a seed reproduces a deal exactly.
//!
//! ## Modules
//!
//! - `core`: cards, the deck, RNG, the move vocabulary, the pile store
//! - `piles`: the ordered pile primitive
//! - `rules`: move validation and execution
//! - `game`: the `Klondike` facade a presentation layer drives

pub mod core;
pub mod game;
pub mod piles;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Card, Color, DeckRng, DeckRngState, GameState, Intent, IntentRecord,
    MoveOutcome, MoveSource, MoveTarget, Rank, Suit, DECK_SIZE, FOUNDATION_PILES, STARTING_SCORE,
    TABLEAU_COLUMNS,
};

pub use crate::piles::{Pile, Run};

pub use crate::rules::{execute, validate, Ruling};

pub use crate::game::Klondike;
