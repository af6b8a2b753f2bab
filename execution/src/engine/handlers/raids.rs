use plunder_types::economy::{
    BPS_SCALE, HEIST_FINE_FRACTION_BPS, HEIST_LOOT_FRACTION_BPS, HEIST_MIN_TARGET_BANK,
    HEIST_SUCCESS_PERCENT, ROB_FINE, ROB_LOOT_FRACTION_BPS, ROB_MIN_LOOT, ROB_MIN_TARGET_WALLET,
    ROB_SUCCESS_PERCENT, ROB_WEALTH_RATIO,
};
use plunder_types::{CommandError, CooldownKind, Event, UserId};
use rand::Rng;
use tracing::info;

use crate::engine::Engine;
use crate::state::Store;

impl<S: Store> Engine<S> {
    pub(in crate::engine) fn handle_rob(
        &mut self,
        actor: &UserId,
        now: u64,
        target: &UserId,
    ) -> Result<Vec<Event>, CommandError> {
        if target == actor {
            return Err(CommandError::SelfTarget);
        }

        let mut robber = self.account(actor);
        let mut victim = self.account(target);

        // Wealth-ratio guard: the rich cannot farm the poor.
        if robber.balances.bank as i128 > victim.balances.bank as i128 * ROB_WEALTH_RATIO as i128 {
            return Err(CommandError::WealthRatioExceeded);
        }
        Self::ensure_cooldown(&robber.cooldowns, CooldownKind::Rob, now)?;
        if victim.balances.wallet < ROB_MIN_TARGET_WALLET {
            return Err(CommandError::TargetWalletBelowMinimum {
                min: ROB_MIN_TARGET_WALLET,
            });
        }

        // The attempt consumes the cooldown whichever way the roll lands.
        robber.cooldowns.record(CooldownKind::Rob, now);

        if self.rng.gen_range(1..=100) < ROB_SUCCESS_PERCENT {
            let max_loot = (victim.balances.wallet as i128 * ROB_LOOT_FRACTION_BPS as i128
                / BPS_SCALE as i128) as i64;
            let stolen = self.rng.gen_range(ROB_MIN_LOOT..=max_loot);
            victim.balances.wallet -= stolen;
            robber.balances.wallet = robber.balances.wallet.saturating_add(stolen);
            self.store.put(actor, robber);
            self.store.put(target, victim);
            info!(robber = %actor, target = %target, stolen, "rob succeeded");

            Ok(vec![Event::RobSucceeded {
                robber: actor.clone(),
                target: target.clone(),
                stolen,
            }])
        } else {
            robber.balances.wallet -= ROB_FINE;
            self.store.put(actor, robber);
            info!(robber = %actor, target = %target, fine = ROB_FINE, "rob failed");

            Ok(vec![Event::RobFailed {
                robber: actor.clone(),
                fine: ROB_FINE,
            }])
        }
    }

    pub(in crate::engine) fn handle_heist(
        &mut self,
        actor: &UserId,
        now: u64,
        target: &UserId,
    ) -> Result<Vec<Event>, CommandError> {
        if target == actor {
            return Err(CommandError::SelfTarget);
        }

        let mut robber = self.account(actor);
        let mut victim = self.account(target);

        Self::ensure_cooldown(&robber.cooldowns, CooldownKind::Heist, now)?;
        if victim.balances.bank < HEIST_MIN_TARGET_BANK {
            return Err(CommandError::TargetVaultBelowMinimum {
                min: HEIST_MIN_TARGET_BANK,
            });
        }

        robber.cooldowns.record(CooldownKind::Heist, now);

        if self.rng.gen_range(1..=100) < HEIST_SUCCESS_PERCENT {
            let stolen = (victim.balances.bank as i128 * HEIST_LOOT_FRACTION_BPS as i128
                / BPS_SCALE as i128) as i64;
            victim.balances.bank -= stolen;
            robber.balances.wallet = robber.balances.wallet.saturating_add(stolen);
            self.store.put(actor, robber);
            self.store.put(target, victim);
            info!(robber = %actor, target = %target, stolen, "heist succeeded");

            Ok(vec![Event::HeistSucceeded {
                robber: actor.clone(),
                target: target.clone(),
                stolen,
            }])
        } else {
            let fine = ((robber.balances.bank as i128 * HEIST_FINE_FRACTION_BPS as i128
                / BPS_SCALE as i128) as i64)
                .max(0);
            robber.balances.bank -= fine;
            self.store.put(actor, robber);
            info!(robber = %actor, target = %target, fine, "heist failed");

            Ok(vec![Event::HeistFailed {
                robber: actor.clone(),
                fine,
            }])
        }
    }
}
