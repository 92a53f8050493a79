//! Read-only snapshot of the game for rendering and serialization. This is
//! the only contract other layers (terminal UI, transports) rely on.

use serde::{Deserialize, Serialize};

use crate::game::{BettingRound, Game};
use crate::hand;
use crate::player::{Player, PlayerStatus};

/// One player's state as seen from outside. `hand_rank` and `best_cards`
/// are populated only at showdown with a full board.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub nickname: String,
    pub chips: i64,
    pub bet: i64,
    pub status: PlayerStatus,
    /// Hole cards rendered as suit+rank strings, e.g. `♠A`.
    pub hand: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_cards: Option<Vec<String>>,
}

/// Defensively-copied view of the whole game state.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round: BettingRound,
    pub pot: i64,
    pub current_bet: i64,
    pub community_cards: Vec<String>,
    pub players: Vec<PlayerSnapshot>,
    pub current_player: usize,
    /// Index of the (single best) winner once the hand reaches showdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_hand_rank: Option<String>,
}

impl GameSnapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        let mut snapshot = Self {
            round: game.round(),
            pot: game.pot(),
            current_bet: game.current_bet(),
            community_cards: game
                .community_cards()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            players: game.players().iter().map(player_snapshot).collect(),
            current_player: game.current_player(),
            winner_index: None,
            winner_hand_rank: None,
        };

        if game.round() == BettingRound::Showdown && game.community_cards().len() == 5 {
            snapshot.fill_showdown(game);
        }

        snapshot
    }

    /// Evaluates every non-folded player against the full board and records
    /// each hand's rank name and rank cards, plus the winning seat.
    fn fill_showdown(&mut self, game: &Game) {
        let mut best: Option<(usize, hand::HandResult)> = None;

        for (i, player) in game.players().iter().enumerate() {
            if player.status() == PlayerStatus::Folded {
                continue;
            }
            let result = match hand::evaluate(player.hand().cards(), game.community_cards()) {
                Ok(r) => r,
                Err(_) => continue,
            };

            self.players[i].hand_rank = Some(result.tier().name().to_string());
            self.players[i].best_cards = Some(
                result
                    .rank_cards()
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
            );

            let replaces = match &best {
                Some((_, current)) => {
                    result.compare_to(current) == std::cmp::Ordering::Greater
                }
                None => true,
            };
            if replaces {
                best = Some((i, result));
            }
        }

        if let Some((index, result)) = best {
            self.winner_index = Some(index);
            self.winner_hand_rank = Some(result.tier().name().to_string());
        }
    }
}

fn player_snapshot(player: &Player) -> PlayerSnapshot {
    PlayerSnapshot {
        nickname: player.nickname().to_string(),
        chips: player.chips(),
        bet: player.bet(),
        status: player.status(),
        hand: player
            .hand()
            .cards()
            .iter()
            .map(|c| c.to_string())
            .collect(),
        hand_rank: None,
        best_cards: None,
    }
}
