//! The deck model: a seeded, shuffleable permutation of the 52 cards.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds the canonical ordering: spades A..K, hearts A..K, clubs A..K,
/// diamonds A..K.
#[must_use]
pub fn ordered_cards() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Ace, Suit::Spades); DECK_SIZE];
    let mut slot = 0;
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards[slot] = Card::new(rank, suit);
            slot += 1;
        }
    }
    cards
}

/// An ordered sequence of exactly 52 distinct cards.
///
/// The deck is always a permutation of the canonical card set. It can only
/// be changed through [`Deck::reset`] and [`Deck::shuffle`]; readers get a
/// shared view or an owned copy.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in display order.
    cards: [Card; DECK_SIZE],
    /// Random source for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an ordered deck whose shuffles are driven by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgrid::Deck;
    ///
    /// let deck = Deck::new(7);
    /// assert!(deck.is_ordered());
    /// assert_eq!(deck.cards()[0].to_string(), "A_spades");
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: ordered_cards(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Restores the canonical order, replacing any prior order.
    pub fn reset(&mut self) {
        self.cards = ordered_cards();
    }

    /// Reorders the cards into a uniformly random permutation.
    ///
    /// Every one of the 52! orderings is equally likely given a uniform
    /// random source. No card is dropped, duplicated, or introduced.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns a read-only view of the current order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Returns an owned copy of the current order.
    #[must_use]
    pub const fn snapshot(&self) -> [Card; DECK_SIZE] {
        self.cards
    }

    /// Returns whether the deck is in canonical order.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .all(|(index, card)| card.index() == index)
    }

    /// Returns whether the deck holds each of the 52 cards exactly once.
    ///
    /// This holds for every deck built through the public API.
    #[must_use]
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; DECK_SIZE];
        for card in &self.cards {
            let slot = &mut seen[card.index()];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }
}
