use std::str::FromStr;

use thiserror::Error as ThisError;

use crate::economy::{Amount, DuelChoice, RoundId, UserId};

/// Error for the `FromStr` surface of command vocabulary (sides, shop
/// items, leaderboard categories, duel choices).
#[derive(Debug, ThisError, PartialEq, Eq)]
#[error("unrecognized input: {0:?}")]
pub struct UnrecognizedInput(pub String);

/// Coinflip call. Unknown side strings are rejected up front rather than
/// silently scored as losses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl FromStr for CoinSide {
    type Err = UnrecognizedInput;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "heads" | "h" => Ok(Self::Heads),
            "tails" | "t" => Ok(Self::Tails),
            _ => Err(UnrecognizedInput(input.to_string())),
        }
    }
}

/// Purchasable items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopItem {
    /// 24-hour 2x reward booster, paid in credits.
    DoubleBooster,
}

impl FromStr for ShopItem {
    type Err = UnrecognizedInput;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "x2" => Ok(Self::DoubleBooster),
            _ => Err(UnrecognizedInput(input.to_string())),
        }
    }
}

/// Interaction against an open round. Carries no actor; the engine takes
/// the actor from the command envelope and silently ignores inputs from
/// anyone but the round's participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundAction {
    /// Opponent accepts a proposed duel.
    Accept,
    /// Opponent declines a proposed duel; the round ends with no transfer.
    Decline,
    /// Record a duel choice. The first choice per participant is final.
    Choose(DuelChoice),
    /// Reveal a grid cell.
    Reveal(u8),
    /// Take the current grid multiplier.
    CashOut,
}

/// A state-mutating command from one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move funds wallet -> bank.
    Deposit { amount: Amount },

    /// Move funds bank -> wallet.
    Withdraw { amount: Amount },

    /// Wallet-to-wallet transfer to another user.
    Give { to: UserId, amount: Amount },

    /// Timed wage claim.
    Work,

    /// Timed daily claim.
    Daily,

    /// Single-shot even-money wager on a coin toss.
    Coinflip { side: CoinSide, amount: Amount },

    /// Open a grid-reveal round.
    Mines { bet: Amount },

    /// Challenge another user to a rock-paper-scissors duel.
    Duel { opponent: UserId, bet: Amount },

    /// Attempt to steal from another user's wallet.
    Rob { target: UserId },

    /// Attempt to crack another user's bank.
    Heist { target: UserId },

    /// Spend credits in the shop.
    Buy { item: ShopItem },

    /// Pair with another user.
    Marry { partner: UserId },

    /// Dissolve the current pairing.
    Divorce,

    /// Act on an open round.
    Round { id: RoundId, action: RoundAction },
}
