use std::str::FromStr;

use crate::command::UnrecognizedInput;

use super::{Account, UserId, LEADERBOARD_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderboardCategory {
    /// Wallet plus bank, richest first.
    Economy,
    /// Level then experience, highest first.
    Levels,
    /// Married users, longest-standing pairing first.
    Marriage,
}

impl FromStr for LeaderboardCategory {
    type Err = UnrecognizedInput;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "economy" | "eco" => Ok(Self::Economy),
            "levels" | "lvl" => Ok(Self::Levels),
            "marriage" | "marry" => Ok(Self::Marriage),
            _ => Err(UnrecognizedInput(input.to_string())),
        }
    }
}

/// Category-specific payload of a leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaderboardDetail {
    NetWorth { total: i64 },
    Level { level: u32, xp: u64 },
    Marriage { partner: UserId, married_at: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based rank.
    pub rank: u32,
    pub user: UserId,
    pub detail: LeaderboardDetail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    pub category: LeaderboardCategory,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Rank a snapshot of the account collection. Ties break on user id so
    /// equal keys order deterministically. Each married user surfaces as
    /// their own row on the marriage board.
    pub fn build(category: LeaderboardCategory, accounts: &[(UserId, Account)]) -> Self {
        let mut entries: Vec<LeaderboardEntry> = match category {
            LeaderboardCategory::Economy => {
                let mut rows: Vec<(&UserId, i64)> = accounts
                    .iter()
                    .map(|(user, account)| (user, account.balances.net_worth()))
                    .collect();
                rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
                rows.into_iter()
                    .map(|(user, total)| LeaderboardEntry {
                        rank: 0,
                        user: user.clone(),
                        detail: LeaderboardDetail::NetWorth { total },
                    })
                    .collect()
            }
            LeaderboardCategory::Levels => {
                let mut rows: Vec<(&UserId, u32, u64)> = accounts
                    .iter()
                    .map(|(user, account)| (user, account.progress.level, account.progress.xp))
                    .collect();
                rows.sort_by(|a, b| {
                    (b.1, b.2).cmp(&(a.1, a.2)).then_with(|| a.0.cmp(b.0))
                });
                rows.into_iter()
                    .map(|(user, level, xp)| LeaderboardEntry {
                        rank: 0,
                        user: user.clone(),
                        detail: LeaderboardDetail::Level { level, xp },
                    })
                    .collect()
            }
            LeaderboardCategory::Marriage => {
                let mut rows: Vec<(&UserId, &UserId, u64)> = accounts
                    .iter()
                    .filter_map(|(user, account)| {
                        account
                            .partnership
                            .as_ref()
                            .map(|p| (user, &p.partner, p.married_at))
                    })
                    .collect();
                rows.sort_by(|a, b| a.2.cmp(&b.2).then_with(|| a.0.cmp(b.0)));
                rows.into_iter()
                    .map(|(user, partner, married_at)| LeaderboardEntry {
                        rank: 0,
                        user: user.clone(),
                        detail: LeaderboardDetail::Marriage {
                            partner: partner.clone(),
                            married_at,
                        },
                    })
                    .collect()
            }
        };

        entries.truncate(LEADERBOARD_SIZE);
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = (index + 1) as u32;
        }

        Self { category, entries }
    }
}
