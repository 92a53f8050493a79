//! Showdown winner resolution across all non-folded players.

use std::cmp::Ordering;

use crate::cards::Card;
use crate::errors::EvalError;
use crate::hand::{self, HandResult};
use crate::player::{Player, PlayerStatus};

/// Determines the winner set among `players`, returned as indices into the
/// input slice in player order. Ties are expected and legal (split pot).
///
/// Folded players never win. With exactly one contender left the hand is
/// awarded without evaluation (no-showdown fast path). With zero contenders
/// the result is empty; callers decide whether that is an error.
pub fn determine_winners(
    players: &[Player],
    community_cards: &[Card],
) -> Result<Vec<usize>, EvalError> {
    let contenders: Vec<usize> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.status() != PlayerStatus::Folded)
        .map(|(i, _)| i)
        .collect();

    if contenders.len() <= 1 {
        return Ok(contenders);
    }

    let mut best: Option<HandResult> = None;
    let mut winners: Vec<usize> = Vec::new();

    for &i in &contenders {
        let result = hand::evaluate(players[i].hand().cards(), community_cards)?;
        match &best {
            None => {
                best = Some(result);
                winners.push(i);
            }
            Some(current) => match result.compare_to(current) {
                Ordering::Greater => {
                    best = Some(result);
                    winners.clear();
                    winners.push(i);
                }
                Ordering::Equal => winners.push(i),
                Ordering::Less => {}
            },
        }
    }

    Ok(winners)
}

/// Convenience wrapper exposing the hand total order at the resolver
/// boundary: `Less` means `a` loses, `Greater` means `a` wins.
pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.compare_to(b)
}
