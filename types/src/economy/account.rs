use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::{BOOSTER_FACTOR, DAILY_COOLDOWN_SECS, HEIST_COOLDOWN_SECS, ROB_COOLDOWN_SECS, WORK_COOLDOWN_SECS, XP_PER_LEVEL_STEP};

/// Platform-assigned user identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum AccountInvariantError {
    #[error("level below minimum (got={got}, min=1)")]
    LevelBelowMinimum { got: u32 },
    #[error("partnership has no marriage timestamp")]
    PartnershipWithoutTimestamp,
}

/// Currency balances. Signed: fines and duel settlement can drive the
/// wallet below zero even though wager entry checks refuse over-funds bets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balances {
    pub wallet: i64,
    pub bank: i64,
    pub credits: i64,
}

impl Balances {
    /// Wallet plus bank; the economy leaderboard key.
    pub fn net_worth(&self) -> i64 {
        self.wallet.saturating_add(self.bank)
    }
}

/// Level progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub xp: u64,
    pub level: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self { xp: 0, level: 1 }
    }
}

impl Progress {
    /// Experience required to clear the current level.
    pub fn xp_to_next_level(&self) -> u64 {
        u64::from(self.level) * XP_PER_LEVEL_STEP
    }
}

/// Timed-action kinds gated by a per-account cooldown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CooldownKind {
    Work,
    Daily,
    Rob,
    Heist,
}

impl CooldownKind {
    /// Seconds that must elapse between uses.
    pub fn interval(&self) -> u64 {
        match self {
            Self::Work => WORK_COOLDOWN_SECS,
            Self::Daily => DAILY_COOLDOWN_SECS,
            Self::Rob => ROB_COOLDOWN_SECS,
            Self::Heist => HEIST_COOLDOWN_SECS,
        }
    }
}

/// Unix timestamps of the most recent use of each timed action (0 = never).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cooldowns {
    pub last_work: u64,
    pub last_daily: u64,
    pub last_rob: u64,
    pub last_heist: u64,
}

impl Cooldowns {
    pub fn last(&self, kind: CooldownKind) -> u64 {
        match kind {
            CooldownKind::Work => self.last_work,
            CooldownKind::Daily => self.last_daily,
            CooldownKind::Rob => self.last_rob,
            CooldownKind::Heist => self.last_heist,
        }
    }

    pub fn record(&mut self, kind: CooldownKind, now: u64) {
        match kind {
            CooldownKind::Work => self.last_work = now,
            CooldownKind::Daily => self.last_daily = now,
            CooldownKind::Rob => self.last_rob = now,
            CooldownKind::Heist => self.last_heist = now,
        }
    }

    /// Seconds until `kind` may be used again; 0 when ready. A timestamp
    /// of 0 means the action was never used and is always ready.
    pub fn remaining(&self, kind: CooldownKind, now: u64) -> u64 {
        let last = self.last(kind);
        if last == 0 {
            return 0;
        }
        let ready_at = last.saturating_add(kind.interval());
        ready_at.saturating_sub(now)
    }
}

/// Symmetric marriage link; the partner's account holds the mirror entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partnership {
    pub partner: UserId,
    pub married_at: u64,
}

/// Per-user persistent state. Created lazily with defaults on first touch
/// and never deleted. `#[serde(default)]` lets records written before a
/// field existed deserialize with that field at its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub balances: Balances,
    pub progress: Progress,
    pub cooldowns: Cooldowns,
    /// Unix timestamp the active booster lapses (0 = none).
    pub booster_expires_at: u64,
    pub partnership: Option<Partnership>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            balances: Balances::default(),
            progress: Progress::default(),
            cooldowns: Cooldowns::default(),
            booster_expires_at: 0,
            partnership: None,
        }
    }
}

impl Account {
    pub fn booster_active(&self, now: u64) -> bool {
        self.booster_expires_at > now
    }

    /// Reward multiplier at `now`: 2 with an active booster, else 1.
    pub fn booster_factor(&self, now: u64) -> i64 {
        if self.booster_active(now) {
            BOOSTER_FACTOR
        } else {
            1
        }
    }

    pub fn validate_invariants(&self) -> Result<(), AccountInvariantError> {
        if self.progress.level < 1 {
            return Err(AccountInvariantError::LevelBelowMinimum {
                got: self.progress.level,
            });
        }
        if let Some(partnership) = &self.partnership {
            if partnership.married_at == 0 {
                return Err(AccountInvariantError::PartnershipWithoutTimestamp);
            }
        }
        Ok(())
    }
}

/// Read-only profile summary served by the engine's profile query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub user: UserId,
    pub level: u32,
    pub xp: u64,
    pub xp_needed: u64,
    pub credits: i64,
    /// Seconds of booster remaining; 0 when inactive.
    pub booster_remaining_secs: u64,
    pub partner: Option<UserId>,
}

/// Outcome of a rewarded chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityReward {
    pub credits: i64,
    pub xp: u64,
    /// New level when the award crossed a threshold.
    pub leveled_to: Option<u32>,
}
