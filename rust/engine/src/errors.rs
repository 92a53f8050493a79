use thiserror::Error;

/// Deck failures. Drawing past exhaustion is fatal to the current hand and
/// is never silently recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
}

/// Hand-evaluator precondition violations. These are caller bugs, not
/// user-facing conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("insufficient cards for evaluation: got {got}, need at least 5")]
    InsufficientCards { got: usize },
    #[error("exactly 5 cards required, got {got}")]
    WrongCardCount { got: usize },
}

/// Player-action validation failures. Recovered locally by rejecting the
/// action; the player's state is left exactly as before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("invalid bet amount: {amount}")]
    InvalidBetAmount { amount: i64 },
    #[error("insufficient chips: need {required}, have {available}")]
    InsufficientChips { required: i64, available: i64 },
}

/// Errors surfaced by the game orchestrator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid player index: {index}")]
    InvalidPlayerIndex { index: usize },

    #[error("no winners found")]
    NoWinners,

    #[error("player {nickname} has no chips left - game over")]
    PlayerEliminated { nickname: String },

    #[error("game not in showdown state")]
    NotInShowdown,

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Player(#[from] PlayerError),
}
