//! Rule-based opponent: hole-card strength buckets preflop, full evaluation
//! postflop, simple thresholds against the price of the call.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pokerhole_engine::cards::Card;
use pokerhole_engine::game::{Game, BIG_BLIND};
use pokerhole_engine::hand::{self, Tier};
use pokerhole_engine::player::PlayerAction;
use pokerhole_engine::rules;

use crate::Opponent;

/// Deterministic-given-a-seed scripted opponent. Plays tight: bets and
/// raises strong hands, calls reasonable prices with medium ones, folds the
/// rest, with an occasional seeded bluff.
pub struct ScriptedOpponent {
    rng: StdRng,
}

impl ScriptedOpponent {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Hole-card strength on a 0-10 scale.
    fn preflop_strength(a: Card, b: Card) -> u8 {
        let (high, low) = if a.rank >= b.rank {
            (a.rank.value(), b.rank.value())
        } else {
            (b.rank.value(), a.rank.value())
        };
        let suited = a.suit == b.suit;

        if high == low {
            return match high {
                14 | 13 => 10,
                12 | 11 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        let base = match (high, low) {
            (14, 13) => 9,
            (14, 12) => 7,
            (14, 11) => 6,
            (14, _) => 4,
            (13, 12) => 6,
            (13, 11) | (12, 11) => 5,
            _ if high >= 11 && low >= 9 => 4,
            _ if high - low <= 2 => 3,
            _ => 2,
        };
        if suited {
            base + 1
        } else {
            base
        }
    }

    /// Made-hand strength once three or more community cards are out.
    fn postflop_strength(hole: &[Card], board: &[Card]) -> u8 {
        let result = match hand::evaluate(hole, board) {
            Ok(r) => r,
            Err(_) => return 0,
        };
        let base = match result.tier() {
            Tier::HighCard => 1,
            Tier::OnePair => 3,
            Tier::TwoPair => 5,
            Tier::ThreeOfAKind => 6,
            Tier::Straight => 7,
            Tier::Flush => 8,
            Tier::FullHouse => 9,
            Tier::FourOfAKind | Tier::StraightFlush | Tier::RoyalFlush => 10,
        };
        let kicker_boost = match result.tie_breaker().first() {
            Some(&r) if r >= 12 => 1,
            _ => 0,
        };
        (base + kicker_boost).min(10)
    }

    /// A raise target: current bet plus roughly half the pot, clamped to
    /// what the stack can actually cover.
    fn raise_target(game: &Game, seat: usize) -> i64 {
        let player = &game.players()[seat];
        let step = (game.pot() / 2).max(BIG_BLIND);
        let target = game.current_bet() + step;
        target.min(player.bet() + player.chips())
    }
}

impl Default for ScriptedOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for ScriptedOpponent {
    fn decide(&mut self, game: &Game, seat: usize) -> (PlayerAction, i64) {
        let player = &game.players()[seat];
        let legal = rules::legal_actions(player, game.current_bet());
        if legal.is_empty() {
            // Folded or all-in; nothing to decide.
            return (PlayerAction::Check, 0);
        }

        let hole = player.hand().cards();
        let board = game.community_cards();
        let strength = if board.len() < 3 {
            match hole {
                [a, b] => Self::preflop_strength(*a, *b),
                _ => 0,
            }
        } else {
            Self::postflop_strength(hole, board)
        };

        let to_call = rules::to_call(game.current_bet(), player.bet());
        let can_raise = legal.contains(&PlayerAction::Raise);
        let can_call = legal.contains(&PlayerAction::Call);

        if to_call == 0 {
            if strength >= 8 && can_raise {
                let target = Self::raise_target(game, seat);
                if target > game.current_bet() {
                    return (PlayerAction::Raise, target);
                }
            }
            // Occasional bluff keeps free-card lines from being a pure tell.
            if (4..8).contains(&strength) && can_raise && self.rng.random_ratio(1, 6) {
                let target = Self::raise_target(game, seat);
                if target > game.current_bet() {
                    return (PlayerAction::Raise, target);
                }
            }
            return (PlayerAction::Check, 0);
        }

        // Facing a bet the stack cannot cover in full.
        if !can_call {
            return if strength >= 8 {
                (PlayerAction::AllIn, 0)
            } else {
                (PlayerAction::Fold, 0)
            };
        }

        match strength {
            8..=10 => {
                if can_raise {
                    let target = Self::raise_target(game, seat);
                    if target > game.current_bet() {
                        return (PlayerAction::Raise, target);
                    }
                }
                (PlayerAction::Call, 0)
            }
            5..=7 => {
                if to_call * 2 <= game.pot() || to_call <= BIG_BLIND * 2 {
                    (PlayerAction::Call, 0)
                } else {
                    (PlayerAction::Fold, 0)
                }
            }
            3..=4 => {
                if to_call <= BIG_BLIND {
                    (PlayerAction::Call, 0)
                } else {
                    (PlayerAction::Fold, 0)
                }
            }
            _ => (PlayerAction::Fold, 0),
        }
    }

    fn name(&self) -> &str {
        "ScriptedOpponent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhole_engine::cards::{Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn premium_pairs_score_top() {
        let aa = (
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::Ace),
        );
        assert_eq!(ScriptedOpponent::preflop_strength(aa.0, aa.1), 10);

        let kk = (
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::King),
        );
        assert_eq!(ScriptedOpponent::preflop_strength(kk.0, kk.1), 10);
    }

    #[test]
    fn suited_beats_offsuit() {
        let suited = ScriptedOpponent::preflop_strength(
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Hearts, Rank::King),
        );
        let offsuit = ScriptedOpponent::preflop_strength(
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::King),
        );
        assert!(suited > offsuit);
    }

    #[test]
    fn trash_scores_low() {
        let strength = ScriptedOpponent::preflop_strength(
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Spades, Rank::Two),
        );
        assert!(strength <= 3);
    }

    #[test]
    fn decisions_are_always_legal() {
        let mut opponent = ScriptedOpponent::with_seed(9);
        for seed in 0..20u64 {
            let mut game = Game::new("hero", Some(seed));
            game.start().unwrap();

            let (action, amount) = opponent.decide(&game, 1);
            let legal = rules::legal_actions(&game.players()[1], game.current_bet());
            assert!(
                legal.contains(&action) || action == PlayerAction::Check,
                "illegal action {action:?} for seed {seed}"
            );
            if action == PlayerAction::Raise {
                assert!(amount > game.current_bet());
                let delta = amount - game.players()[1].bet();
                assert!(delta <= game.players()[1].chips());
            }
        }
    }

    #[test]
    fn applying_decisions_never_errors() {
        let mut opponent = ScriptedOpponent::with_seed(3);
        let mut game = Game::new("hero", Some(11));
        game.start().unwrap();

        // Drive the opponent's seat for a full preflop cycle.
        game.player_action(0, PlayerAction::Call, 0).unwrap();
        let (action, amount) = opponent.decide(&game, 1);
        game.player_action(1, action, amount).unwrap();
    }

    #[test]
    fn factory_knows_scripted() {
        let opponent = crate::create_opponent("scripted");
        assert_eq!(opponent.unwrap().name(), "ScriptedOpponent");
        assert!(crate::create_opponent("nope").is_none());
    }
}
