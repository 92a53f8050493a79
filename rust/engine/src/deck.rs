use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DeckError;

/// Port for a card deck. The engine only ever talks to a deck through this
/// interface; `LocalDeck` draws from a local array, a remote authority
/// implementation would proxy over the network.
pub trait DeckPort {
    /// Removes and returns the top card.
    fn draw(&mut self) -> Result<Card, DeckError>;

    /// Shuffles the remaining cards with a seeded generator. The same seed on
    /// a freshly reset deck always produces the same draw order.
    fn shuffle(&mut self, seed: u64);

    /// Number of cards left.
    fn remaining(&self) -> usize;

    /// Restores the full 52-card deck in canonical order, discarding any
    /// draw and shuffle history.
    fn reset(&mut self);
}

/// Offline deck implementation backed by a local 52-card array.
#[derive(Debug, Clone)]
pub struct LocalDeck {
    cards: Vec<Card>,
}

impl LocalDeck {
    pub fn new() -> Self {
        Self { cards: full_deck() }
    }
}

impl Default for LocalDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckPort for LocalDeck {
    fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    fn shuffle(&mut self, seed: u64) {
        // Fresh generator per call keeps reset+shuffle replayable.
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }

    fn reset(&mut self) {
        self.cards = full_deck();
    }
}
