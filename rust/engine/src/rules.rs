//! Legal-action contract for action-choosing collaborators (scripted
//! opponents, UIs). The orchestrator enforces its own rules; this module
//! exists so consumers can ask what is legal before acting.

use crate::player::{Player, PlayerAction, PlayerStatus};

/// Chips the player still owes to match the table's current bet.
pub fn to_call(current_bet: i64, player_bet: i64) -> i64 {
    (current_bet - player_bet).max(0)
}

/// Actions the player may legally take against `current_bet`.
///
/// Fold is always legal for a live player. Check requires a matched bet.
/// Call requires an outstanding deficit the stack can cover in full (a short
/// stack goes all-in instead). Raise requires chips beyond the calling
/// deficit. AllIn requires a non-empty stack.
pub fn legal_actions(player: &Player, current_bet: i64) -> Vec<PlayerAction> {
    if !matches!(
        player.status(),
        PlayerStatus::Waiting | PlayerStatus::Active
    ) {
        return Vec::new();
    }

    let deficit = to_call(current_bet, player.bet());
    let mut actions = vec![PlayerAction::Fold];

    if deficit == 0 {
        actions.push(PlayerAction::Check);
    } else if player.chips() >= deficit {
        actions.push(PlayerAction::Call);
    }
    if player.chips() > deficit {
        actions.push(PlayerAction::Raise);
    }
    if player.chips() > 0 {
        actions.push(PlayerAction::AllIn);
    }

    actions
}
