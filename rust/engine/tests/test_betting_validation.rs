use pokerhole_engine::player::{Player, PlayerAction, PlayerStatus};
use pokerhole_engine::rules::{legal_actions, to_call};

#[test]
fn to_call_is_the_outstanding_deficit() {
    assert_eq!(to_call(20, 0), 20);
    assert_eq!(to_call(20, 10), 10);
    assert_eq!(to_call(20, 20), 0);
    // An over-matched bet never owes negative chips.
    assert_eq!(to_call(20, 50), 0);
}

#[test]
fn matched_bet_allows_check_but_not_call() {
    let mut p = Player::new(0, "hero", 1000);
    p.place_bet(20).unwrap();

    let actions = legal_actions(&p, 20);
    assert!(actions.contains(&PlayerAction::Fold));
    assert!(actions.contains(&PlayerAction::Check));
    assert!(!actions.contains(&PlayerAction::Call));
    assert!(actions.contains(&PlayerAction::Raise));
    assert!(actions.contains(&PlayerAction::AllIn));
}

#[test]
fn outstanding_bet_allows_call_but_not_check() {
    let p = Player::new(0, "hero", 1000);
    let actions = legal_actions(&p, 20);
    assert!(actions.contains(&PlayerAction::Call));
    assert!(!actions.contains(&PlayerAction::Check));
}

#[test]
fn short_stack_cannot_call_but_can_shove() {
    let p = Player::new(0, "hero", 15);
    let actions = legal_actions(&p, 20);
    assert!(!actions.contains(&PlayerAction::Call));
    assert!(!actions.contains(&PlayerAction::Raise));
    assert!(actions.contains(&PlayerAction::AllIn));
    assert!(actions.contains(&PlayerAction::Fold));
}

#[test]
fn exact_stack_can_call_but_not_raise() {
    let p = Player::new(0, "hero", 20);
    let actions = legal_actions(&p, 20);
    assert!(actions.contains(&PlayerAction::Call));
    assert!(!actions.contains(&PlayerAction::Raise));
}

#[test]
fn folded_and_all_in_players_have_no_actions() {
    let mut folded = Player::new(0, "hero", 1000);
    folded.fold();
    assert!(legal_actions(&folded, 20).is_empty());

    let mut shoved = Player::new(1, "villain", 1000);
    shoved.all_in();
    assert_eq!(shoved.status(), PlayerStatus::AllIn);
    assert!(legal_actions(&shoved, 20).is_empty());
}

#[test]
fn empty_stack_cannot_shove() {
    let mut p = Player::new(0, "hero", 50);
    p.place_bet(50).unwrap();
    // Active with zero chips behind: nothing but fold/check remains.
    let actions = legal_actions(&p, 50);
    assert!(!actions.contains(&PlayerAction::AllIn));
    assert!(actions.contains(&PlayerAction::Check));
}
