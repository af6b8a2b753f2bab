use plunder_types::economy::{
    BOOSTER_COST_CREDITS, BOOSTER_DURATION_SECS, DAILY_REWARD, WORK_PAY_MAX, WORK_PAY_MIN,
};
use plunder_types::{Amount, CommandError, CooldownKind, Event, ShopItem, UserId};
use rand::Rng;
use tracing::{debug, info};

use crate::engine::Engine;
use crate::state::Store;

impl<S: Store> Engine<S> {
    pub(in crate::engine) fn handle_deposit(
        &mut self,
        actor: &UserId,
        amount: Amount,
    ) -> Result<Vec<Event>, CommandError> {
        let mut account = self.account(actor);
        let value = Self::resolve_positive(amount, account.balances.wallet)?;
        Self::ensure_funds(account.balances.wallet, value)?;

        account.balances.wallet -= value;
        account.balances.bank = account.balances.bank.saturating_add(value);
        let (wallet, bank) = (account.balances.wallet, account.balances.bank);
        self.store.put(actor, account);
        debug!(user = %actor, amount = value, "deposit");

        Ok(vec![Event::Deposited {
            user: actor.clone(),
            amount: value,
            wallet,
            bank,
        }])
    }

    pub(in crate::engine) fn handle_withdraw(
        &mut self,
        actor: &UserId,
        amount: Amount,
    ) -> Result<Vec<Event>, CommandError> {
        let mut account = self.account(actor);
        let value = Self::resolve_positive(amount, account.balances.bank)?;
        Self::ensure_funds(account.balances.bank, value)?;

        account.balances.bank -= value;
        account.balances.wallet = account.balances.wallet.saturating_add(value);
        let (wallet, bank) = (account.balances.wallet, account.balances.bank);
        self.store.put(actor, account);
        debug!(user = %actor, amount = value, "withdraw");

        Ok(vec![Event::Withdrew {
            user: actor.clone(),
            amount: value,
            wallet,
            bank,
        }])
    }

    pub(in crate::engine) fn handle_give(
        &mut self,
        actor: &UserId,
        to: &UserId,
        amount: Amount,
    ) -> Result<Vec<Event>, CommandError> {
        if to == actor {
            return Err(CommandError::SelfTarget);
        }

        let mut giver = self.account(actor);
        let mut receiver = self.account(to);
        let value = Self::resolve_positive(amount, giver.balances.wallet)?;
        Self::ensure_funds(giver.balances.wallet, value)?;

        giver.balances.wallet -= value;
        receiver.balances.wallet = receiver.balances.wallet.saturating_add(value);
        self.store.put(actor, giver);
        self.store.put(to, receiver);
        info!(from = %actor, to = %to, amount = value, "transfer");

        Ok(vec![Event::Transferred {
            from: actor.clone(),
            to: to.clone(),
            amount: value,
        }])
    }

    pub(in crate::engine) fn handle_work(
        &mut self,
        actor: &UserId,
        now: u64,
    ) -> Result<Vec<Event>, CommandError> {
        let mut account = self.account(actor);
        Self::ensure_cooldown(&account.cooldowns, CooldownKind::Work, now)?;

        let boosted = account.booster_active(now);
        let payout =
            self.rng.gen_range(WORK_PAY_MIN..=WORK_PAY_MAX) * account.booster_factor(now);
        account.balances.wallet = account.balances.wallet.saturating_add(payout);
        account.cooldowns.record(CooldownKind::Work, now);
        let wallet = account.balances.wallet;
        self.store.put(actor, account);
        info!(user = %actor, payout, boosted, "work claimed");

        Ok(vec![Event::Worked {
            user: actor.clone(),
            payout,
            boosted,
            wallet,
        }])
    }

    pub(in crate::engine) fn handle_daily(
        &mut self,
        actor: &UserId,
        now: u64,
    ) -> Result<Vec<Event>, CommandError> {
        let mut account = self.account(actor);
        Self::ensure_cooldown(&account.cooldowns, CooldownKind::Daily, now)?;

        let boosted = account.booster_active(now);
        let reward = DAILY_REWARD * account.booster_factor(now);
        account.balances.wallet = account.balances.wallet.saturating_add(reward);
        account.cooldowns.record(CooldownKind::Daily, now);
        let wallet = account.balances.wallet;
        self.store.put(actor, account);
        info!(user = %actor, reward, boosted, "daily claimed");

        Ok(vec![Event::DailyClaimed {
            user: actor.clone(),
            reward,
            boosted,
            wallet,
        }])
    }

    pub(in crate::engine) fn handle_buy(
        &mut self,
        actor: &UserId,
        now: u64,
        item: ShopItem,
    ) -> Result<Vec<Event>, CommandError> {
        match item {
            ShopItem::DoubleBooster => {
                let mut account = self.account(actor);
                if account.balances.credits < BOOSTER_COST_CREDITS {
                    return Err(CommandError::InsufficientCredits {
                        have: account.balances.credits,
                        required: BOOSTER_COST_CREDITS,
                    });
                }

                account.balances.credits -= BOOSTER_COST_CREDITS;
                // A repurchase restarts the clock rather than extending it.
                account.booster_expires_at = now + BOOSTER_DURATION_SECS;
                let expires_at = account.booster_expires_at;
                self.store.put(actor, account);
                info!(user = %actor, expires_at, "booster activated");

                Ok(vec![Event::BoosterActivated {
                    user: actor.clone(),
                    expires_at,
                }])
            }
        }
    }
}
