/// Seconds between rewarded chat messages (in-memory, per process).
pub const ACTIVITY_COOLDOWN_SECS: u64 = 30;

/// Credits granted per rewarded chat message.
pub const ACTIVITY_CREDITS: i64 = 5;

/// Experience granted per rewarded chat message.
pub const ACTIVITY_XP: u64 = 20;

/// Experience required to clear a level is `level * XP_PER_LEVEL_STEP`.
pub const XP_PER_LEVEL_STEP: u64 = 500;

/// Work cooldown in seconds.
pub const WORK_COOLDOWN_SECS: u64 = 36;

/// Work payout range (inclusive), before any booster.
pub const WORK_PAY_MIN: i64 = 500;
pub const WORK_PAY_MAX: i64 = 1_500;

/// Daily claim cooldown in seconds.
pub const DAILY_COOLDOWN_SECS: u64 = 86_400;

/// Daily claim reward, before any booster.
pub const DAILY_REWARD: i64 = 2_500;

/// Robbery cooldown in seconds.
pub const ROB_COOLDOWN_SECS: u64 = 7_200;

/// Robbery succeeds when a 1..=100 roll lands strictly below this.
pub const ROB_SUCCESS_PERCENT: i64 = 40;

/// Targets with a wallet below this cannot be robbed.
pub const ROB_MIN_TARGET_WALLET: i64 = 500;

/// Minimum loot on a successful robbery.
pub const ROB_MIN_LOOT: i64 = 100;

/// Maximum loot as a fraction of the target wallet, in basis points.
pub const ROB_LOOT_FRACTION_BPS: i64 = 3_000;

/// Flat wallet fine on a failed robbery.
pub const ROB_FINE: i64 = 1_000;

/// A robber whose bank exceeds `target bank * ROB_WEALTH_RATIO` is refused.
pub const ROB_WEALTH_RATIO: i64 = 10;

/// Heist cooldown in seconds.
pub const HEIST_COOLDOWN_SECS: u64 = 18_000;

/// Heist succeeds when a 1..=100 roll lands strictly below this.
pub const HEIST_SUCCESS_PERCENT: i64 = 30;

/// Targets with a bank below this cannot be heisted.
pub const HEIST_MIN_TARGET_BANK: i64 = 5_000;

/// Loot as a fraction of the target bank, in basis points.
pub const HEIST_LOOT_FRACTION_BPS: i64 = 5_000;

/// Fine as a fraction of the heister's own bank, in basis points.
pub const HEIST_FINE_FRACTION_BPS: i64 = 2_000;

/// Booster price in credits.
pub const BOOSTER_COST_CREDITS: i64 = 500;

/// Booster lifetime in seconds from purchase. A repurchase restarts the
/// clock rather than extending it.
pub const BOOSTER_DURATION_SECS: u64 = 86_400;

/// Reward multiplier while a booster is active.
pub const BOOSTER_FACTOR: i64 = 2;

/// Number of cells in a grid round.
pub const GRID_CELLS: u8 = 9;

/// Number of non-hazard cells in a grid round; also the reveal cap.
pub const GRID_SAFE_CELLS: u8 = GRID_CELLS - 1;

/// Cash-out multiplier per revealed-cell count, in basis points.
/// Index 0 (no reveals) is break-even.
pub const GRID_PAYOUT_BPS: [i64; 9] = [
    10_000, 12_000, 15_000, 19_000, 24_000, 31_000, 42_000, 60_000, 120_000,
];

/// Basis-point scale shared by multiplier and fraction arithmetic.
pub const BPS_SCALE: i64 = 10_000;

/// Seconds before an untouched grid round expires.
pub const GRID_ROUND_TTL_SECS: u64 = 120;

/// Seconds before an unsettled duel expires.
pub const DUEL_ROUND_TTL_SECS: u64 = 60;

/// Entries shown on a leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;
