//! Hand orchestration: blinds, dealing, betting rounds, showdown, and pot
//! settlement for a heads-up (2-player) session.

use crate::cards::{Card, Hand};
use crate::deck::{DeckPort, LocalDeck};
use crate::errors::GameError;
use crate::player::{Player, PlayerAction, PlayerStatus};
use crate::snapshot::GameSnapshot;
use crate::winner;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Small blind posted by player 0 at the start of every hand.
pub const SMALL_BLIND: i64 = 10;
/// Big blind posted by player 1 at the start of every hand.
pub const BIG_BLIND: i64 = 20;
/// Starting stack for both players.
pub const STARTING_CHIPS: i64 = 1000;

/// Betting round of a Texas Hold'em hand. Strictly linear:
/// PreFlop → Flop → Turn → River → Showdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BettingRound {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl BettingRound {
    pub fn name(self) -> &'static str {
        match self {
            BettingRound::PreFlop => "PRE_FLOP",
            BettingRound::Flop => "FLOP",
            BettingRound::Turn => "TURN",
            BettingRound::River => "RIVER",
            BettingRound::Showdown => "SHOWDOWN",
        }
    }
}

impl fmt::Display for BettingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The game orchestrator: owns the deck, both players, the pot, and the
/// betting-round state machine. All cross-entity mutation happens here, and
/// only here.
///
/// Single-threaded by design; no operation suspends or blocks. Callers
/// needing concurrent access must serialize externally.
pub struct Game {
    deck: Box<dyn DeckPort>,
    players: Vec<Player>,
    community_cards: Vec<Card>,
    round: BettingRound,
    pot: i64,
    current_bet: i64,
    current_player: usize,
    next_seed: u64,
}

impl Game {
    /// Creates a heads-up game: the named user in seat 0 against the
    /// scripted opponent in seat 1, both at [`STARTING_CHIPS`].
    ///
    /// `seed` drives every shuffle of the session; pass `Some` for a fully
    /// reproducible session, `None` for entropy.
    pub fn new(user_nickname: &str, seed: Option<u64>) -> Self {
        Self::with_deck(Box::new(LocalDeck::new()), user_nickname, seed)
    }

    /// Like [`Game::new`] but with a caller-supplied deck implementation.
    pub fn with_deck(deck: Box<dyn DeckPort>, user_nickname: &str, seed: Option<u64>) -> Self {
        let mut user = Player::new(0, user_nickname, STARTING_CHIPS);
        user.set_position(0);
        let mut opponent = Player::new(1, "AI Player", STARTING_CHIPS);
        opponent.set_position(1);

        Self {
            deck,
            players: vec![user, opponent],
            community_cards: Vec::with_capacity(5),
            round: BettingRound::PreFlop,
            pot: 0,
            current_bet: 0,
            current_player: 0,
            next_seed: seed.unwrap_or_else(rand::random),
        }
    }

    /// Starts a hand: reshuffles with a fresh seed, deals two hole cards to
    /// each player (player by player), posts the blinds, and sets the
    /// current bet to the big blind.
    pub fn start(&mut self) -> Result<(), GameError> {
        let seed = self.advance_seed();
        self.deck.reset();
        self.deck.shuffle(seed);

        for i in 0..self.players.len() {
            let first = self.deck.draw()?;
            let second = self.deck.draw()?;
            self.players[i].set_hand(Hand::new(vec![first, second]));
        }

        self.players[0].place_bet(SMALL_BLIND)?;
        self.players[1].place_bet(BIG_BLIND)?;
        self.pot = SMALL_BLIND + BIG_BLIND;
        self.current_bet = BIG_BLIND;

        log::info!(
            "hand started: seed={seed}, pot={}, current_bet={}",
            self.pot,
            self.current_bet
        );
        Ok(())
    }

    /// Applies one player action and advances the turn.
    ///
    /// `amount` is only meaningful for `Raise`, where it is the total bet
    /// the player raises to (not the increment). A failed action leaves all
    /// state untouched and does not advance the turn.
    pub fn player_action(
        &mut self,
        index: usize,
        action: PlayerAction,
        amount: i64,
    ) -> Result<(), GameError> {
        if index >= self.players.len() {
            return Err(GameError::InvalidPlayerIndex { index });
        }

        match action {
            PlayerAction::Fold => {
                self.players[index].fold();
            }
            PlayerAction::Check => {}
            PlayerAction::Call => {
                let call_amount = self.current_bet - self.players[index].bet();
                self.players[index].place_bet(call_amount)?;
                self.pot += call_amount;
            }
            PlayerAction::Raise => {
                let raise_amount = amount - self.players[index].bet();
                self.players[index].place_bet(raise_amount)?;
                self.pot += raise_amount;
                self.current_bet = amount;
            }
            PlayerAction::AllIn => {
                let committed = self.players[index].chips();
                self.players[index].all_in();
                self.pot += committed;
                if self.players[index].bet() > self.current_bet {
                    self.current_bet = self.players[index].bet();
                }
            }
        }

        log::debug!(
            "player {index} {action:?}: pot={}, current_bet={}",
            self.pot,
            self.current_bet
        );
        self.current_player = (self.current_player + 1) % self.players.len();
        Ok(())
    }

    /// Advances to the next betting round, dealing community cards with a
    /// burn before each deal. Reaching Showdown from River settles the pot
    /// instead of dealing. Calling at Showdown is a no-op.
    pub fn progress_round(&mut self) -> Result<(), GameError> {
        match self.round {
            BettingRound::PreFlop => {
                self.deck.draw()?; // burn
                for _ in 0..3 {
                    let card = self.deck.draw()?;
                    self.community_cards.push(card);
                }
                self.round = BettingRound::Flop;
                self.begin_betting_round();
            }
            BettingRound::Flop => {
                self.deck.draw()?; // burn
                let card = self.deck.draw()?;
                self.community_cards.push(card);
                self.round = BettingRound::Turn;
                self.begin_betting_round();
            }
            BettingRound::Turn => {
                self.deck.draw()?; // burn
                let card = self.deck.draw()?;
                self.community_cards.push(card);
                self.round = BettingRound::River;
                self.begin_betting_round();
            }
            BettingRound::River => {
                self.round = BettingRound::Showdown;
                self.resolve_showdown()?;
            }
            BettingRound::Showdown => {}
        }

        log::debug!(
            "round advanced to {}: board={}",
            self.round,
            self.community_cards.len()
        );
        Ok(())
    }

    /// Opens a fresh betting round: per-round bets are cleared and the turn
    /// returns to player 0. The pot is untouched.
    fn begin_betting_round(&mut self) {
        self.current_bet = 0;
        self.current_player = 0;
        for p in &mut self.players {
            p.reset_bet();
        }
    }

    /// Splits the pot among the winner set; integer division, remainder to
    /// the first winner in player-index order.
    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        let winners = winner::determine_winners(&self.players, &self.community_cards)?;
        if winners.is_empty() {
            return Err(GameError::NoWinners);
        }

        let share = self.pot / winners.len() as i64;
        let remainder = self.pot % winners.len() as i64;
        for (i, &w) in winners.iter().enumerate() {
            let credit = if i == 0 { share + remainder } else { share };
            self.players[w].add_chips(credit);
        }

        log::info!("showdown settled: winners={winners:?}, pot={}", self.pot);
        self.pot = 0;
        Ok(())
    }

    /// Resets everything for a new hand and starts it. Fails with
    /// `PlayerEliminated` once either stack reaches zero; the session is
    /// over at that point.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if let Some(busted) = self.players.iter().find(|p| p.chips() <= 0) {
            return Err(GameError::PlayerEliminated {
                nickname: busted.nickname().to_string(),
            });
        }

        self.community_cards.clear();
        self.round = BettingRound::PreFlop;
        self.pot = 0;
        self.current_bet = 0;
        self.current_player = 0;
        for p in &mut self.players {
            p.reset_for_new_hand();
        }

        log::info!("restarting for a new hand");
        self.start()
    }

    /// The winner set, valid only once the hand has reached Showdown.
    pub fn get_winners(&self) -> Result<Vec<&Player>, GameError> {
        if self.round != BettingRound::Showdown {
            return Err(GameError::NotInShowdown);
        }
        let indices = winner::determine_winners(&self.players, &self.community_cards)?;
        Ok(indices.iter().map(|&i| &self.players[i]).collect())
    }

    /// The round-progression policy (owned by the caller, not the state
    /// machine): a betting round is complete when at most one non-folded
    /// player remains, or when every non-folded, non-all-in player has
    /// matched the current bet and the turn has cycled back to player 0.
    pub fn betting_round_complete(&self) -> bool {
        let live = self
            .players
            .iter()
            .filter(|p| p.status() != PlayerStatus::Folded)
            .count();
        if live <= 1 {
            return true;
        }

        let all_matched = self
            .players
            .iter()
            .filter(|p| !matches!(p.status(), PlayerStatus::Folded | PlayerStatus::AllIn))
            .all(|p| p.bet() == self.current_bet);
        all_matched && self.current_player == 0
    }

    /// A read-only, defensively-copied view of the whole game, safe to
    /// render or serialize.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn round(&self) -> BettingRound {
        self.round
    }

    pub fn pot(&self) -> i64 {
        self.pot
    }

    pub fn current_bet(&self) -> i64 {
        self.current_bet
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Per-hand seeds are derived deterministically from the session seed,
    /// so a seeded session replays end-to-end.
    fn advance_seed(&mut self) -> u64 {
        let seed = self.next_seed;
        self.next_seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        seed
    }
}
