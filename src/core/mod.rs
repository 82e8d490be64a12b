//! Core engine types: cards, the deck, RNG, the move vocabulary, and the
//! pile store aggregate.

pub mod card;
pub mod moves;
pub mod rng;
pub mod state;

pub use card::{standard_deck, Card, Color, Rank, Suit, DECK_SIZE};
pub use moves::{Intent, IntentRecord, MoveOutcome, MoveSource, MoveTarget};
pub use rng::{DeckRng, DeckRngState};
pub use state::{GameState, FOUNDATION_PILES, STARTING_SCORE, TABLEAU_COLUMNS};
