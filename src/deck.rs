//! The 52 cards a Bartok table starts with.

use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

/// An ordered pack of cards; index 0 is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Suit by suit, Ace up to King within each suit.
    ///
    /// ```
    /// use bartok_rs::cards::{Card, Rank, Suit};
    /// use bartok_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.cards().len(), 52);
    /// assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Clubs));
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Deck(cards)
    }

    /// A standard deck in seed-determined order.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }
}
