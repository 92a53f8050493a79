use pokerhole_engine::cards::{Card, Hand};
use pokerhole_engine::player::Player;
use pokerhole_engine::winner::determine_winners;

fn cards(spec: &[&str]) -> Vec<Card> {
    spec.iter().map(|s| s.parse().unwrap()).collect()
}

fn player_with_hand(id: usize, spec: &[&str]) -> Player {
    let mut p = Player::new(id, format!("p{id}"), 1000);
    p.set_hand(Hand::new(cards(spec)));
    p
}

#[test]
fn last_player_standing_wins_without_evaluation() {
    // Neither player has cards; the fast path must not evaluate.
    let mut folded = Player::new(0, "p0", 1000);
    folded.fold();
    let survivor = Player::new(1, "p1", 1000);

    let winners = determine_winners(&[folded, survivor], &[]).unwrap();
    assert_eq!(winners, vec![1]);
}

#[test]
fn zero_contenders_yields_empty_set() {
    let mut a = Player::new(0, "p0", 1000);
    let mut b = Player::new(1, "p1", 1000);
    a.fold();
    b.fold();
    assert!(determine_winners(&[a, b], &[]).unwrap().is_empty());
}

#[test]
fn better_hand_wins_at_showdown() {
    let board = cards(&["♦A", "♣K", "♠7", "♥4", "♦2"]);
    // Trip aces vs a pair of kings.
    let p0 = player_with_hand(0, &["♠A", "♥A"]);
    let p1 = player_with_hand(1, &["♠K", "♥Q"]);

    let winners = determine_winners(&[p0, p1], &board).unwrap();
    assert_eq!(winners, vec![0]);
}

#[test]
fn folded_hand_never_wins_even_if_best() {
    let board = cards(&["♦A", "♣K", "♠7", "♥4", "♦2"]);
    let mut p0 = player_with_hand(0, &["♠A", "♥A"]);
    p0.fold();
    let p1 = player_with_hand(1, &["♠K", "♥Q"]);

    let winners = determine_winners(&[p0, p1], &board).unwrap();
    assert_eq!(winners, vec![1]);
}

#[test]
fn identical_strength_hands_tie() {
    // The board's straight plays for both; hole cards are irrelevant.
    let board = cards(&["♠8", "♥7", "♦6", "♣5", "♠4"]);
    let p0 = player_with_hand(0, &["♠2", "♥2"]);
    let p1 = player_with_hand(1, &["♦3", "♣2"]);

    let winners = determine_winners(&[p0, p1], &board).unwrap();
    assert_eq!(winners, vec![0, 1], "split pot is a legal outcome");
}

#[test]
fn evaluation_errors_propagate() {
    // Two contenders but not enough cards to evaluate.
    let p0 = player_with_hand(0, &["♠A"]);
    let p1 = player_with_hand(1, &["♥K"]);
    assert!(determine_winners(&[p0, p1], &[]).is_err());
}
