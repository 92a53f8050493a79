use pokerhole_engine::cards::{Card, Hand, Rank, Suit};
use pokerhole_engine::errors::PlayerError;
use pokerhole_engine::player::{Player, PlayerStatus};

#[test]
fn new_player_waits_with_empty_hand() {
    let p = Player::new(0, "hero", 1000);
    assert_eq!(p.chips(), 1000);
    assert_eq!(p.bet(), 0);
    assert_eq!(p.status(), PlayerStatus::Waiting);
    assert!(p.hand().is_empty());
    assert_eq!(p.nickname(), "hero");
}

#[test]
fn place_bet_moves_chips_and_activates() {
    let mut p = Player::new(0, "hero", 1000);
    p.place_bet(100).unwrap();
    assert_eq!(p.chips(), 900);
    assert_eq!(p.bet(), 100);
    assert_eq!(p.status(), PlayerStatus::Active);

    // Bets accumulate within a round.
    p.place_bet(50).unwrap();
    assert_eq!(p.chips(), 850);
    assert_eq!(p.bet(), 150);
}

#[test]
fn zero_and_negative_bets_are_rejected_without_mutation() {
    let mut p = Player::new(0, "hero", 1000);
    assert_eq!(
        p.place_bet(0),
        Err(PlayerError::InvalidBetAmount { amount: 0 })
    );
    assert_eq!(
        p.place_bet(-5),
        Err(PlayerError::InvalidBetAmount { amount: -5 })
    );
    assert_eq!(p.chips(), 1000);
    assert_eq!(p.bet(), 0);
    assert_eq!(p.status(), PlayerStatus::Waiting);
}

#[test]
fn overbetting_the_stack_is_rejected_without_mutation() {
    let mut p = Player::new(0, "hero", 100);
    assert_eq!(
        p.place_bet(101),
        Err(PlayerError::InsufficientChips {
            required: 101,
            available: 100
        })
    );
    assert_eq!(p.chips(), 100);
    assert_eq!(p.bet(), 0);
}

#[test]
fn betting_the_exact_stack_is_allowed() {
    let mut p = Player::new(0, "hero", 100);
    p.place_bet(100).unwrap();
    assert_eq!(p.chips(), 0);
    assert_eq!(p.bet(), 100);
    assert_eq!(p.status(), PlayerStatus::Active);
}

#[test]
fn fold_leaves_chips_and_bet_untouched() {
    let mut p = Player::new(0, "hero", 1000);
    p.place_bet(40).unwrap();
    p.fold();
    assert_eq!(p.status(), PlayerStatus::Folded);
    assert_eq!(p.chips(), 960);
    assert_eq!(p.bet(), 40);
}

#[test]
fn all_in_commits_the_whole_stack() {
    let mut p = Player::new(0, "hero", 1000);
    p.place_bet(200).unwrap();
    p.all_in();
    assert_eq!(p.chips(), 0);
    assert_eq!(p.bet(), 1000);
    assert_eq!(p.status(), PlayerStatus::AllIn);
}

#[test]
fn reset_bet_only_clears_the_bet() {
    let mut p = Player::new(0, "hero", 1000);
    p.place_bet(75).unwrap();
    p.reset_bet();
    assert_eq!(p.bet(), 0);
    assert_eq!(p.chips(), 925);
    assert_eq!(p.status(), PlayerStatus::Active);
}

#[test]
fn add_chips_credits_unconditionally() {
    let mut p = Player::new(0, "hero", 0);
    p.add_chips(350);
    assert_eq!(p.chips(), 350);
}

#[test]
fn new_hand_reset_restores_waiting_state() {
    let mut p = Player::new(0, "hero", 1000);
    p.set_hand(Hand::new(vec![
        Card::new(Suit::Spades, Rank::Ace),
        Card::new(Suit::Hearts, Rank::King),
    ]));
    p.place_bet(60).unwrap();
    p.fold();

    p.reset_for_new_hand();
    assert_eq!(p.bet(), 0);
    assert_eq!(p.status(), PlayerStatus::Waiting);
    assert!(p.hand().is_empty());
    assert_eq!(p.chips(), 940, "chips carry over between hands");
}

#[test]
fn chip_conservation_across_bet_sequences() {
    let mut p = Player::new(0, "hero", 1000);
    for amount in [10, 20, 170, 300] {
        let before = p.chips() + p.bet();
        p.place_bet(amount).unwrap();
        assert_eq!(p.chips() + p.bet(), before);
    }
    assert_eq!(p.chips() + p.bet(), 1000);
}
