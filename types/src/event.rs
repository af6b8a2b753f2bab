use crate::command::CoinSide;
use crate::economy::{RoundId, UserId};

/// Duel settlement verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DuelOutcome {
    /// Equal choices; no balance change for either side.
    Draw,
    /// The bet moved loser -> winner.
    Won {
        winner: UserId,
        loser: UserId,
        amount: i64,
    },
}

/// Engine outputs. One command produces zero or more events; silently
/// ignored interactions produce none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Deposited {
        user: UserId,
        amount: i64,
        wallet: i64,
        bank: i64,
    },

    Withdrew {
        user: UserId,
        amount: i64,
        wallet: i64,
        bank: i64,
    },

    Transferred {
        from: UserId,
        to: UserId,
        amount: i64,
    },

    Worked {
        user: UserId,
        payout: i64,
        boosted: bool,
        wallet: i64,
    },

    DailyClaimed {
        user: UserId,
        reward: i64,
        boosted: bool,
        wallet: i64,
    },

    CoinflipResolved {
        user: UserId,
        side: CoinSide,
        landed: CoinSide,
        /// Wallet delta: positive on a win, negative on a loss.
        delta: i64,
        wallet: i64,
    },

    GridOpened {
        id: RoundId,
        player: UserId,
        bet: i64,
    },

    CellRevealed {
        id: RoundId,
        cell: u8,
        revealed_count: u8,
        multiplier_bps: i64,
    },

    /// Hazard hit; the bet was debited and the round destroyed.
    GridBusted {
        id: RoundId,
        player: UserId,
        bet: i64,
        wallet: i64,
    },

    GridCashedOut {
        id: RoundId,
        player: UserId,
        /// Net wallet change: `bet * multiplier * booster - bet`.
        net: i64,
        multiplier_bps: i64,
        boosted: bool,
        wallet: i64,
    },

    DuelProposed {
        id: RoundId,
        challenger: UserId,
        opponent: UserId,
        bet: i64,
    },

    DuelAccepted {
        id: RoundId,
    },

    DuelDeclined {
        id: RoundId,
    },

    DuelChoiceRecorded {
        id: RoundId,
        user: UserId,
    },

    DuelSettled {
        id: RoundId,
        outcome: DuelOutcome,
    },

    RobSucceeded {
        robber: UserId,
        target: UserId,
        stolen: i64,
    },

    RobFailed {
        robber: UserId,
        fine: i64,
    },

    HeistSucceeded {
        robber: UserId,
        target: UserId,
        stolen: i64,
    },

    HeistFailed {
        robber: UserId,
        fine: i64,
    },

    BoosterActivated {
        user: UserId,
        expires_at: u64,
    },

    Married {
        user: UserId,
        partner: UserId,
        married_at: u64,
    },

    Divorced {
        user: UserId,
        partner: UserId,
    },
}
