use std::str::FromStr;

use crate::command::UnrecognizedInput;

use super::{UserId, GRID_PAYOUT_BPS, GRID_SAFE_CELLS};

/// Engine-assigned round identifier.
pub type RoundId = u64;

/// Grid round lifecycle. Both terminal phases end the round; no further
/// transitions are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPhase {
    InProgress,
    Lost,
    CashedOut,
}

/// One in-flight grid-reveal wager. Lives only in the engine's round table;
/// funds move at settlement, never at open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRound {
    pub id: RoundId,
    pub player: UserId,
    pub bet: i64,
    /// Index of the hidden hazard cell.
    pub hazard: u8,
    /// Bitmask of revealed cells.
    pub revealed: u16,
    pub revealed_count: u8,
    pub phase: GridPhase,
    pub created_at: u64,
}

impl GridRound {
    pub fn is_revealed(&self, cell: u8) -> bool {
        self.revealed & (1u16 << cell) != 0
    }

    pub fn is_complete(&self) -> bool {
        !matches!(self.phase, GridPhase::InProgress)
    }

    /// Cash-out multiplier at the current reveal count, in basis points.
    /// Non-decreasing over any sequence of safe reveals.
    pub fn multiplier_bps(&self) -> i64 {
        GRID_PAYOUT_BPS[self.revealed_count.min(GRID_SAFE_CELLS) as usize]
    }
}

/// Duel lifecycle. `Settled` and `Declined` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelPhase {
    AwaitingAcceptance,
    AwaitingChoices,
    Settled,
    Declined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelChoice {
    Rock,
    Paper,
    Scissors,
}

impl DuelChoice {
    pub fn beats(&self, other: DuelChoice) -> bool {
        matches!(
            (self, other),
            (Self::Rock, DuelChoice::Scissors)
                | (Self::Scissors, DuelChoice::Paper)
                | (Self::Paper, DuelChoice::Rock)
        )
    }
}

impl FromStr for DuelChoice {
    type Err = UnrecognizedInput;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            _ => Err(UnrecognizedInput(input.to_string())),
        }
    }
}

/// One in-flight rock-paper-scissors duel. Choices are immutable once set;
/// the bet transfers loser to winner only at settlement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelRound {
    pub id: RoundId,
    pub challenger: UserId,
    pub opponent: UserId,
    pub bet: i64,
    pub phase: DuelPhase,
    pub challenger_choice: Option<DuelChoice>,
    pub opponent_choice: Option<DuelChoice>,
    pub created_at: u64,
}

impl DuelRound {
    pub fn is_participant(&self, user: &UserId) -> bool {
        self.challenger == *user || self.opponent == *user
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, DuelPhase::Settled | DuelPhase::Declined)
    }
}
