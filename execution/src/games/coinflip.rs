//! Single-shot even-money coin toss.

use plunder_types::CoinSide;
use rand::Rng;

use super::clamp_i64;

pub fn toss(rng: &mut impl Rng) -> CoinSide {
    if rng.gen::<bool>() {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

/// Wallet delta for a resolved flip: a win pays the bet times the booster
/// factor, a loss forfeits the bet.
pub fn delta(side: CoinSide, landed: CoinSide, bet: i64, booster_factor: i64) -> i64 {
    if side == landed {
        clamp_i64(bet as i128 * booster_factor as i128)
    } else {
        -bet
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_delta_win_loss_and_booster() {
        assert_eq!(delta(CoinSide::Heads, CoinSide::Heads, 100, 1), 100);
        assert_eq!(delta(CoinSide::Heads, CoinSide::Tails, 100, 1), -100);
        assert_eq!(delta(CoinSide::Tails, CoinSide::Tails, 100, 2), 200);
        // The loss side is never boosted.
        assert_eq!(delta(CoinSide::Tails, CoinSide::Heads, 100, 2), -100);
    }

    #[test]
    fn test_toss_produces_both_sides() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen_heads = false;
        let mut seen_tails = false;
        for _ in 0..64 {
            match toss(&mut rng) {
                CoinSide::Heads => seen_heads = true,
                CoinSide::Tails => seen_tails = true,
            }
        }
        assert!(seen_heads && seen_tails);
    }
}
