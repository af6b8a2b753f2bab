//! Experience and level progression.

use plunder_types::Account;

/// Award experience; returns the new level when a threshold was crossed.
///
/// Crossing resets xp to zero and raises the level by exactly one, even
/// when the award overshoots several thresholds at once.
pub fn award_xp(account: &mut Account, amount: u64) -> Option<u32> {
    account.progress.xp = account.progress.xp.saturating_add(amount);
    if account.progress.xp >= account.progress.xp_to_next_level() {
        account.progress.level += 1;
        account.progress.xp = 0;
        Some(account.progress.level)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_below_threshold_accumulates() {
        let mut account = Account::default();
        assert_eq!(award_xp(&mut account, 499), None);
        assert_eq!(account.progress.xp, 499);
        assert_eq!(account.progress.level, 1);
    }

    #[test]
    fn test_award_crossing_threshold_levels_once() {
        let mut account = Account::default();
        assert_eq!(award_xp(&mut account, 500), Some(2));
        assert_eq!(account.progress.level, 2);
        assert_eq!(account.progress.xp, 0);
    }

    #[test]
    fn test_overshoot_still_levels_only_once() {
        // An award worth several levels still raises the level by one and
        // discards the excess.
        let mut account = Account::default();
        assert_eq!(award_xp(&mut account, 5_000), Some(2));
        assert_eq!(account.progress.level, 2);
        assert_eq!(account.progress.xp, 0);
    }

    #[test]
    fn test_threshold_scales_with_level() {
        let mut account = Account::default();
        account.progress.level = 3;
        assert_eq!(award_xp(&mut account, 1_499), None);
        assert_eq!(award_xp(&mut account, 1), Some(4));
    }
}
