//! 5-card poker hand evaluation: tier classification and tie-break ordering.
//!
//! Everything here is pure and stateless; safe to call concurrently on
//! independent inputs.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EvalError;

/// Ranking tier of a poker hand, ascending by strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Tier {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Tier::HighCard => "High Card",
            Tier::OnePair => "One Pair",
            Tier::TwoPair => "Two Pair",
            Tier::ThreeOfAKind => "Three of a Kind",
            Tier::Straight => "Straight",
            Tier::Flush => "Flush",
            Tier::FullHouse => "Full House",
            Tier::FourOfAKind => "Four of a Kind",
            Tier::StraightFlush => "Straight Flush",
            Tier::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of evaluating one 5-card hand. Immutable; produced fresh per call.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    tier: Tier,
    /// The 5 cards of the best hand, sorted rank-descending.
    best_cards: Vec<Card>,
    /// Tie-break values, most significant first. Meaning depends on tier.
    tie_breaker: Vec<u8>,
}

impl HandResult {
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn best_cards(&self) -> &[Card] {
        &self.best_cards
    }

    pub fn tie_breaker(&self) -> &[u8] {
        &self.tie_breaker
    }

    /// Total order over hand results: tier first, then element-wise
    /// tie-breaker comparison. Equal tiers with equal tie-breakers compare
    /// as tied; a split pot is a legal outcome.
    pub fn compare_to(&self, other: &HandResult) -> Ordering {
        match self.tier.cmp(&other.tier) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.tie_breaker.iter().zip(other.tie_breaker.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Only the cards that constitute the named ranking: the pair for One
    /// Pair, both pairs for Two Pair, the single highest card for High Card,
    /// and so on. Display projection; never used in comparison.
    pub fn rank_cards(&self) -> Vec<Card> {
        match self.tier {
            Tier::HighCard => self.best_cards.first().copied().into_iter().collect(),
            Tier::OnePair | Tier::ThreeOfAKind | Tier::FourOfAKind => {
                match self.tie_breaker.first() {
                    Some(&rank) => self.cards_of_rank(rank),
                    None => Vec::new(),
                }
            }
            Tier::TwoPair => {
                if self.tie_breaker.len() < 2 {
                    return Vec::new();
                }
                let mut cards = self.cards_of_rank(self.tie_breaker[0]);
                cards.extend(self.cards_of_rank(self.tie_breaker[1]));
                cards
            }
            Tier::Straight
            | Tier::Flush
            | Tier::FullHouse
            | Tier::StraightFlush
            | Tier::RoyalFlush => self.best_cards.clone(),
        }
    }

    fn cards_of_rank(&self, rank_value: u8) -> Vec<Card> {
        self.best_cards
            .iter()
            .filter(|c| c.rank.value() == rank_value)
            .copied()
            .collect()
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tier.fmt(f)
    }
}

/// Evaluates the best 5-card hand from hole cards plus community cards.
///
/// With exactly 5 cards total the hand is evaluated directly; with 6 or 7
/// (2 hole + up to 5 community) every C(n,5) subset is evaluated and the
/// best kept under [`HandResult::compare_to`].
pub fn evaluate(player_cards: &[Card], community_cards: &[Card]) -> Result<HandResult, EvalError> {
    let mut all: Vec<Card> = Vec::with_capacity(player_cards.len() + community_cards.len());
    all.extend_from_slice(player_cards);
    all.extend_from_slice(community_cards);

    if all.len() < 5 {
        return Err(EvalError::InsufficientCards { got: all.len() });
    }
    if all.len() == 5 {
        return evaluate_five(&all);
    }

    let n = all.len();
    let mut best: Option<HandResult> = None;
    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [all[a], all[b], all[c], all[d], all[e]];
                        let result = evaluate_five(&five)?;
                        let better = match &best {
                            Some(current) => result.compare_to(current) == Ordering::Greater,
                            None => true,
                        };
                        if better {
                            best = Some(result);
                        }
                    }
                }
            }
        }
    }

    // n >= 6 here, so at least one combination was evaluated.
    best.ok_or(EvalError::InsufficientCards { got: n })
}

/// Evaluates exactly 5 cards. Input order is irrelevant; cards are sorted
/// internally.
pub fn evaluate_five(cards: &[Card]) -> Result<HandResult, EvalError> {
    if cards.len() != 5 {
        return Err(EvalError::WrongCardCount { got: cards.len() });
    }

    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank).then_with(|| b.suit.cmp(&a.suit)));

    let ranks: Vec<u8> = sorted.iter().map(|c| c.rank.value()).collect();
    let flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight_high = straight_high(&ranks);

    let mut counts = [0u8; 15];
    for &r in &ranks {
        counts[r as usize] += 1;
    }

    if flush {
        if ranks == [14, 13, 12, 11, 10] {
            return Ok(result(Tier::RoyalFlush, &sorted, ranks));
        }
        if let Some(high) = straight_high {
            return Ok(result(Tier::StraightFlush, &sorted, vec![high]));
        }
    }

    if let Some(quad) = rank_with_count(&counts, 4) {
        let kicker = ranks
            .iter()
            .copied()
            .find(|&r| r != quad)
            .unwrap_or_default();
        return Ok(result(Tier::FourOfAKind, &sorted, vec![quad, kicker]));
    }

    let trips = rank_with_count(&counts, 3);
    let pairs = ranks_with_count(&counts, 2);

    if let Some(trip) = trips {
        if let Some(&pair) = pairs.first() {
            return Ok(result(Tier::FullHouse, &sorted, vec![trip, pair]));
        }
    }

    if flush {
        return Ok(result(Tier::Flush, &sorted, ranks));
    }
    if let Some(high) = straight_high {
        return Ok(result(Tier::Straight, &sorted, vec![high]));
    }

    if let Some(trip) = trips {
        let mut tie = vec![trip];
        tie.extend(ranks.iter().copied().filter(|&r| r != trip));
        return Ok(result(Tier::ThreeOfAKind, &sorted, tie));
    }

    match pairs.as_slice() {
        [high_pair, low_pair] => {
            let kicker = ranks
                .iter()
                .copied()
                .find(|r| r != high_pair && r != low_pair)
                .unwrap_or_default();
            Ok(result(
                Tier::TwoPair,
                &sorted,
                vec![*high_pair, *low_pair, kicker],
            ))
        }
        [pair] => {
            let mut tie = vec![*pair];
            tie.extend(ranks.iter().copied().filter(|r| r != pair));
            Ok(result(Tier::OnePair, &sorted, tie))
        }
        _ => Ok(result(Tier::HighCard, &sorted, ranks)),
    }
}

fn result(tier: Tier, sorted_cards: &[Card], tie_breaker: Vec<u8>) -> HandResult {
    HandResult {
        tier,
        best_cards: sorted_cards.to_vec(),
        tie_breaker,
    }
}

/// Straight detection over rank values sorted descending. Returns the
/// straight's comparison value: the high card, except the wheel
/// (A-5-4-3-2), which counts as 5-high.
fn straight_high(ranks_desc: &[u8]) -> Option<u8> {
    if ranks_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    for pair in ranks_desc.windows(2) {
        if pair[0] != pair[1] + 1 {
            return None;
        }
    }
    Some(ranks_desc[0])
}

fn rank_with_count(counts: &[u8; 15], count: u8) -> Option<u8> {
    // Highest rank first.
    (2..=14u8).rev().find(|&r| counts[r as usize] == count)
}

fn ranks_with_count(counts: &[u8; 15], count: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] == count)
        .collect()
}
