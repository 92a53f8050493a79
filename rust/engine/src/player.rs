use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Hand;
use crate::errors::PlayerError;

/// Status of a player within the current hand.
///
/// Lifecycle: `Waiting` → `Active` on the first bet; `Folded` and `AllIn`
/// are terminal for the hand; everyone resets to `Waiting` when a new hand
/// starts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Waiting for the next hand to start.
    Waiting,
    /// Actively playing the current hand.
    Active,
    /// Folded; no longer contesting the pot.
    Folded,
    /// All chips committed; cannot bet further.
    AllIn,
    /// Seated but not participating.
    SitOut,
}

impl PlayerStatus {
    pub fn name(self) -> &'static str {
        match self {
            PlayerStatus::Waiting => "WAITING",
            PlayerStatus::Active => "ACTIVE",
            PlayerStatus::Folded => "FOLDED",
            PlayerStatus::AllIn => "ALL_IN",
            PlayerStatus::SitOut => "SIT_OUT",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An action a player can take during a betting round. Raise amounts travel
/// separately (see [`crate::game::Game::player_action`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Forfeit the hand.
    Fold,
    /// Pass; only legal when the bet is already matched.
    Check,
    /// Match the current bet.
    Call,
    /// Bet above the current bet.
    Raise,
    /// Commit all remaining chips.
    AllIn,
}

/// A poker player: identity, chip stack, current-round bet, hand, and
/// status. The aggregate root of all per-player state.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    nickname: String,
    chips: i64,
    bet: i64,
    status: PlayerStatus,
    hand: Hand,
    position: usize,
}

impl Player {
    pub fn new(id: usize, nickname: impl Into<String>, chips: i64) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            chips,
            bet: 0,
            status: PlayerStatus::Waiting,
            hand: Hand::default(),
            position: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn chips(&self) -> i64 {
        self.chips
    }

    /// Cumulative bet within the current betting round.
    pub fn bet(&self) -> i64 {
        self.bet
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves `amount` chips into the current-round bet.
    ///
    /// Fails without touching any state when the amount is non-positive or
    /// exceeds the stack; chip conservation holds across every success:
    /// `chips_before == chips_after + bet_delta`.
    pub fn place_bet(&mut self, amount: i64) -> Result<(), PlayerError> {
        if amount <= 0 {
            return Err(PlayerError::InvalidBetAmount { amount });
        }
        if amount > self.chips {
            return Err(PlayerError::InsufficientChips {
                required: amount,
                available: self.chips,
            });
        }
        self.chips -= amount;
        self.bet += amount;
        self.status = PlayerStatus::Active;
        Ok(())
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    /// Commits the entire remaining stack.
    pub fn all_in(&mut self) {
        self.bet += self.chips;
        self.chips = 0;
        self.status = PlayerStatus::AllIn;
    }

    /// Clears the current-round bet at a round transition. Chips and status
    /// are untouched.
    pub fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// Unconditional credit, e.g. a pot share at showdown.
    pub fn add_chips(&mut self, amount: i64) {
        self.chips += amount;
    }

    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    /// Full per-hand reset: bet cleared, hand emptied, status back to
    /// `Waiting`. Chips carry over between hands.
    pub fn reset_for_new_hand(&mut self) {
        self.bet = 0;
        self.status = PlayerStatus::Waiting;
        self.hand = Hand::default();
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nickname)
    }
}
