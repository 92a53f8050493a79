//! # pokerhole-engine: Heads-Up Texas Hold'em Rules Engine
//!
//! The rules core for a two-player (one human, one scripted opponent)
//! Texas Hold'em session: cards, deterministic seeded shuffling, 5-card hand
//! evaluation, the player bet/fold/all-in state machine, and the hand
//! orchestrator that sequences blinds, dealing, betting rounds, showdown,
//! and pot settlement.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card, Suit, Rank, and the Hand container
//! - [`deck`] - [`deck::DeckPort`] and the local 52-card implementation
//! - [`hand`] - 5-card hand evaluation and the hand total order
//! - [`player`] - Player aggregate and its bet/fold/all-in state machine
//! - [`winner`] - Winner resolution across non-folded players
//! - [`rules`] - Legal-action contract for action-choosing collaborators
//! - [`game`] - Orchestration: blinds, dealing, rounds, showdown
//! - [`snapshot`] - Read-only serialization contract for outer layers
//! - [`errors`] - Error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhole_engine::game::{Game, BettingRound};
//! use pokerhole_engine::player::PlayerAction;
//!
//! let mut game = Game::new("hero", Some(42));
//! game.start().unwrap();
//!
//! // Small blind 10, big blind 20 are already posted.
//! assert_eq!(game.pot(), 30);
//!
//! game.player_action(0, PlayerAction::Call, 0).unwrap();
//! game.player_action(1, PlayerAction::Check, 0).unwrap();
//! game.progress_round().unwrap();
//! assert_eq!(game.round(), BettingRound::Flop);
//! assert_eq!(game.community_cards().len(), 3);
//! ```
//!
//! ## Determinism
//!
//! All shuffles come from a seeded generator owned by the deck; the same
//! session seed replays the same cards:
//!
//! ```rust
//! use pokerhole_engine::deck::{DeckPort, LocalDeck};
//!
//! let mut a = LocalDeck::new();
//! let mut b = LocalDeck::new();
//! a.shuffle(7);
//! b.shuffle(7);
//! assert_eq!(a.draw().unwrap(), b.draw().unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
pub mod snapshot;
pub mod winner;
