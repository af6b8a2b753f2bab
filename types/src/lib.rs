//! Common types for the plunder economy game.
//!
//! This crate holds the data model (accounts, rounds, leaderboards), the
//! command/event surface, and the policy constants. It performs no I/O; the
//! engine in `plunder-execution` owns all state mutation and persistence.

pub mod command;
pub mod economy;
pub mod error;
pub mod event;

pub use command::{CoinSide, Command, RoundAction, ShopItem, UnrecognizedInput};
pub use economy::{
    Account, ActivityReward, Amount, Balances, Cooldowns, CooldownKind, DuelChoice, DuelPhase,
    DuelRound, GridPhase, GridRound, Leaderboard, LeaderboardCategory, LeaderboardDetail,
    LeaderboardEntry, Partnership, Profile, Progress, RoundId, UserId, parse_amount,
};
pub use error::{AmountError, CommandError, GameError};
pub use event::{DuelOutcome, Event};
