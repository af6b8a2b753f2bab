//! Grid-reveal risk game.
//!
//! One hazard cell hides among nine. Each safe reveal raises the cash-out
//! multiplier along a fixed ascending table; revealing the hazard forfeits
//! the bet. Reveals stop once every safe cell is open — the table is never
//! indexed past its last entry — leaving cash-out as the only move.

use plunder_types::economy::{BPS_SCALE, GRID_CELLS, GRID_SAFE_CELLS};
use plunder_types::{GameError, GridPhase, GridRound, RoundId, UserId};
use rand::Rng;

use super::clamp_i64;

/// Outcome of a reveal that was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Safe {
        revealed_count: u8,
        multiplier_bps: i64,
    },
    /// The hazard. The round is lost and the bet forfeits.
    Hazard,
}

/// Deal a fresh round with the hazard chosen uniformly.
pub fn deal(
    id: RoundId,
    player: UserId,
    bet: i64,
    created_at: u64,
    rng: &mut impl Rng,
) -> GridRound {
    GridRound {
        id,
        player,
        bet,
        hazard: rng.gen_range(0..GRID_CELLS),
        revealed: 0,
        revealed_count: 0,
        phase: GridPhase::InProgress,
        created_at,
    }
}

pub fn reveal(round: &mut GridRound, cell: u8) -> Result<Reveal, GameError> {
    if round.is_complete() {
        return Err(GameError::RoundComplete);
    }
    if cell >= GRID_CELLS {
        return Err(GameError::InvalidCell);
    }
    if round.is_revealed(cell) {
        return Err(GameError::CellAlreadyRevealed);
    }
    if round.revealed_count >= GRID_SAFE_CELLS {
        return Err(GameError::SafeCellsExhausted);
    }

    if cell == round.hazard {
        round.phase = GridPhase::Lost;
        return Ok(Reveal::Hazard);
    }

    round.revealed |= 1u16 << cell;
    round.revealed_count += 1;
    Ok(Reveal::Safe {
        revealed_count: round.revealed_count,
        multiplier_bps: round.multiplier_bps(),
    })
}

/// Terminal cash-out; returns the net wallet change.
pub fn cash_out(round: &mut GridRound, booster_factor: i64) -> Result<i64, GameError> {
    if round.is_complete() {
        return Err(GameError::RoundComplete);
    }
    round.phase = GridPhase::CashedOut;
    Ok(net_payout(round.bet, round.multiplier_bps(), booster_factor))
}

/// `bet * multiplier * booster - bet`, in i128 with the result clamped.
pub fn net_payout(bet: i64, multiplier_bps: i64, booster_factor: i64) -> i64 {
    let gross = (bet as i128) * (multiplier_bps as i128) / (BPS_SCALE as i128)
        * (booster_factor as i128);
    clamp_i64(gross - bet as i128)
}

#[cfg(test)]
mod tests {
    use plunder_types::economy::GRID_PAYOUT_BPS;
    use proptest::prelude::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn test_round(hazard: u8) -> GridRound {
        GridRound {
            id: 1,
            player: UserId::from("alice"),
            bet: 100,
            hazard,
            revealed: 0,
            revealed_count: 0,
            phase: GridPhase::InProgress,
            created_at: 0,
        }
    }

    #[test]
    fn test_deal_places_hazard_in_range() {
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let round = deal(1, UserId::from("alice"), 100, 0, &mut rng);
            assert!(round.hazard < GRID_CELLS);
            assert_eq!(round.revealed_count, 0);
            assert_eq!(round.phase, GridPhase::InProgress);
        }
    }

    #[test]
    fn test_safe_reveals_increment_and_multiplier_climbs() {
        let mut round = test_round(0);
        let mut last_multiplier = round.multiplier_bps();
        let mut expected_count = 0;
        for cell in 1..GRID_CELLS {
            let outcome = reveal(&mut round, cell).unwrap();
            expected_count += 1;
            match outcome {
                Reveal::Safe {
                    revealed_count,
                    multiplier_bps,
                } => {
                    assert_eq!(revealed_count, expected_count);
                    assert!(multiplier_bps > last_multiplier);
                    last_multiplier = multiplier_bps;
                }
                Reveal::Hazard => panic!("unexpected hazard"),
            }
        }
        assert_eq!(round.revealed_count, GRID_SAFE_CELLS);
        assert_eq!(round.multiplier_bps(), *GRID_PAYOUT_BPS.last().unwrap());
    }

    #[test]
    fn test_hazard_reveal_loses_round() {
        let mut round = test_round(4);
        assert_eq!(reveal(&mut round, 4).unwrap(), Reveal::Hazard);
        assert_eq!(round.phase, GridPhase::Lost);
        assert!(matches!(
            reveal(&mut round, 1),
            Err(GameError::RoundComplete)
        ));
        assert!(matches!(cash_out(&mut round, 1), Err(GameError::RoundComplete)));
    }

    #[test]
    fn test_reveal_rejects_out_of_range_and_repeats() {
        let mut round = test_round(0);
        assert!(matches!(
            reveal(&mut round, GRID_CELLS),
            Err(GameError::InvalidCell)
        ));
        reveal(&mut round, 3).unwrap();
        assert!(matches!(
            reveal(&mut round, 3),
            Err(GameError::CellAlreadyRevealed)
        ));
        assert_eq!(round.revealed_count, 1);
    }

    #[test]
    fn test_reveals_capped_once_safe_cells_exhausted() {
        let mut round = test_round(8);
        for cell in 0..GRID_SAFE_CELLS {
            reveal(&mut round, cell).unwrap();
        }
        // Only the hazard remains; further reveals are refused rather than
        // walking off the payout table.
        let hazard = round.hazard;
        assert!(matches!(
            reveal(&mut round, hazard),
            Err(GameError::SafeCellsExhausted)
        ));
        assert_eq!(round.phase, GridPhase::InProgress);

        let net = cash_out(&mut round, 1).unwrap();
        assert_eq!(net, 100 * 120_000 / 10_000 - 100);
    }

    #[test]
    fn test_cash_out_is_terminal() {
        let mut round = test_round(0);
        cash_out(&mut round, 1).unwrap();
        assert_eq!(round.phase, GridPhase::CashedOut);
        assert!(matches!(cash_out(&mut round, 1), Err(GameError::RoundComplete)));
        assert!(matches!(
            reveal(&mut round, 1),
            Err(GameError::RoundComplete)
        ));
    }

    #[test]
    fn test_net_payout_breakeven_at_zero_reveals() {
        assert_eq!(net_payout(100, GRID_PAYOUT_BPS[0], 1), 0);
    }

    #[test]
    fn test_net_payout_math() {
        assert_eq!(net_payout(100, 12_000, 1), 20);
        assert_eq!(net_payout(100, 12_000, 2), 140);
        assert_eq!(net_payout(1_000, 120_000, 1), 11_000);
        assert_eq!(net_payout(333, 12_000, 1), 66); // floors the scaled product
    }

    proptest! {
        #[test]
        fn prop_safe_sequences_climb_monotonically(
            hazard in 0u8..GRID_CELLS,
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut cells: Vec<u8> = (0..GRID_CELLS).filter(|c| *c != hazard).collect();
            // Shuffle by repeated draws for a seed-dependent order.
            for i in (1..cells.len()).rev() {
                cells.swap(i, rng.gen_range(0..=i));
            }

            let mut round = test_round(hazard);
            let mut last = round.multiplier_bps();
            for (step, cell) in cells.iter().enumerate() {
                match reveal(&mut round, *cell).unwrap() {
                    Reveal::Safe { revealed_count, multiplier_bps } => {
                        prop_assert_eq!(revealed_count as usize, step + 1);
                        prop_assert!(multiplier_bps >= last);
                        last = multiplier_bps;
                    }
                    Reveal::Hazard => prop_assert!(false, "safe cell reported hazard"),
                }
            }
            // The hazard is the only cell left and the cap refuses it.
            prop_assert!(matches!(
                reveal(&mut round, hazard),
                Err(GameError::SafeCellsExhausted)
            ));
        }

        #[test]
        fn prop_hazard_always_costs_exactly_the_bet(
            hazard in 0u8..GRID_CELLS,
            safe_reveals in 0usize..8,
        ) {
            let mut round = test_round(hazard);
            let mut revealed = 0;
            for cell in (0..GRID_CELLS).filter(|c| *c != hazard) {
                if revealed == safe_reveals {
                    break;
                }
                reveal(&mut round, cell).unwrap();
                revealed += 1;
            }
            prop_assert_eq!(reveal(&mut round, hazard).unwrap(), Reveal::Hazard);
            prop_assert_eq!(round.phase, GridPhase::Lost);
            // Settlement debits the original bet regardless of progress.
            prop_assert_eq!(round.bet, 100);
        }
    }
}
