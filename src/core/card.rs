//! Card value types and the standard 52-card deck.
//!
//! A card's identity is its (suit, rank) pair; `face_up` is the only
//! mutable state. Color derives from suit: hearts and diamonds are red,
//! clubs and spades are black.

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card color, derived from suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The color this suit plays as.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Fixed foundation pile index for this suit.
    ///
    /// Foundation moves always land on the suit's own pile, regardless of
    /// which pile the caller aimed at.
    #[must_use]
    pub const fn foundation_index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
            Suit::Spades => '\u{2660}',
        };
        write!(f, "{symbol}")
    }
}

/// Card rank: 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// The lowest rank; the only card that opens a foundation.
    pub const ACE: Rank = Rank(1);

    /// The highest rank; the only card that opens an empty tableau column.
    pub const KING: Rank = Rank(13);

    /// Create a rank.
    ///
    /// Panics unless `value` is in 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(1 <= value && value <= 13, "rank must be 1-13");
        Self(value)
    }

    /// The raw rank value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, ascending.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// True when this rank sits exactly one below `other`.
    ///
    /// This single comparison carries both build rules: a run card goes
    /// one below the tableau top, and a foundation top sits one below the
    /// card being banked.
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self.0 + 1 == other.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{n}"),
        }
    }
}

/// A single playing card.
///
/// (suit, rank) uniquely identifies one of the 52 cards and never changes;
/// `face_up` flips as the card is dealt, drawn, revealed, or recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// The color this card plays as.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// The (suit, rank) identity, independent of orientation.
    #[must_use]
    pub const fn identity(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Build the 52-card deck in canonical order: suit-major, rank-ascending,
/// all face-down.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn test_foundation_index_mapping() {
        assert_eq!(Suit::Hearts.foundation_index(), 0);
        assert_eq!(Suit::Diamonds.foundation_index(), 1);
        assert_eq!(Suit::Clubs.foundation_index(), 2);
        assert_eq!(Suit::Spades.foundation_index(), 3);
    }

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(1), Rank::ACE);
        assert_eq!(Rank::new(13), Rank::KING);
        assert_eq!(Rank::new(7).value(), 7);
    }

    #[test]
    #[should_panic(expected = "rank must be 1-13")]
    fn test_rank_zero_panics() {
        let _ = Rank::new(0);
    }

    #[test]
    #[should_panic(expected = "rank must be 1-13")]
    fn test_rank_fourteen_panics() {
        let _ = Rank::new(14);
    }

    #[test]
    fn test_is_one_below() {
        assert!(Rank::new(4).is_one_below(Rank::new(5)));
        assert!(!Rank::new(5).is_one_below(Rank::new(5)));
        assert!(!Rank::new(6).is_one_below(Rank::new(5)));
        assert!(Rank::new(12).is_one_below(Rank::KING));
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(Suit::Spades, Rank::ACE);
        assert!(!card.face_up);
        assert_eq!(card.color(), Color::Black);
    }

    #[test]
    fn test_standard_deck_canonical_order() {
        let deck = standard_deck();

        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::ACE));
        assert_eq!(deck[12], Card::new(Suit::Hearts, Rank::KING));
        assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::ACE));
        assert_eq!(deck[51], Card::new(Suit::Spades, Rank::KING));
        assert!(deck.iter().all(|card| !card.face_up));
    }

    #[test]
    fn test_standard_deck_all_distinct() {
        use rustc_hash::FxHashSet;

        let deck = standard_deck();
        let identities: FxHashSet<_> = deck.iter().map(|card| card.identity()).collect();
        assert_eq!(identities.len(), DECK_SIZE);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Card::new(Suit::Hearts, Rank::ACE)),
            "A\u{2665}"
        );
        assert_eq!(
            format!("{}", Card::new(Suit::Spades, Rank::new(10))),
            "10\u{2660}"
        );
        assert_eq!(
            format!("{}", Card::new(Suit::Clubs, Rank::new(12))),
            "Q\u{2663}"
        );
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Diamonds, Rank::new(9));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
