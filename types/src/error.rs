use thiserror::Error as ThisError;

use crate::economy::RoundId;

/// Amount grammar failures.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum AmountError {
    #[error("unrecognized amount: {0:?}")]
    Unparseable(String),
    #[error("amount out of range: {0:?}")]
    OutOfRange(String),
}

/// State-machine violations inside a round. The engine surfaces these for
/// a round's own participants and maps the rest to silence per the
/// unauthorized-interaction rule.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum GameError {
    #[error("round already complete")]
    RoundComplete,
    #[error("action not valid in this phase")]
    WrongPhase,
    #[error("cell index out of range")]
    InvalidCell,
    #[error("cell already revealed")]
    CellAlreadyRevealed,
    #[error("all safe cells already revealed; cash out")]
    SafeCellsExhausted,
    #[error("choice already recorded")]
    ChoiceAlreadyRecorded,
    #[error("not a participant in this round")]
    NotAParticipant,
}

/// Command rejection. Every variant renders as the user-visible refusal
/// message; no state changes accompany any of them.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: i64, need: i64 },
    #[error("need {required} credits, have {have}")]
    InsufficientCredits { have: i64, required: i64 },
    #[error("cooldown active: {remaining_secs}s remaining")]
    CooldownActive { remaining_secs: u64 },
    #[error("cannot target yourself")]
    SelfTarget,
    #[error("target wallet is below the {min} minimum")]
    TargetWalletBelowMinimum { min: i64 },
    #[error("target vault is below the {min} minimum")]
    TargetVaultBelowMinimum { min: i64 },
    #[error("target is too poor relative to your bank")]
    WealthRatioExceeded,
    #[error("round {0} not found")]
    RoundNotFound(RoundId),
    #[error("you are already married")]
    AlreadyMarried,
    #[error("they are already married")]
    PartnerAlreadyMarried,
    #[error("you are not married")]
    NotMarried,
    #[error(transparent)]
    Game(#[from] GameError),
}
