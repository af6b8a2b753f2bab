use std::collections::{BTreeMap, HashMap};

use plunder_types::economy::{
    ACTIVITY_COOLDOWN_SECS, ACTIVITY_CREDITS, ACTIVITY_XP, DUEL_ROUND_TTL_SECS,
    GRID_ROUND_TTL_SECS,
};
use plunder_types::{
    Account, ActivityReward, Amount, Command, CommandError, CooldownKind, Cooldowns, DuelRound,
    Event, GridRound, Leaderboard, LeaderboardCategory, Profile, RoundId, UserId,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::leveling;
use crate::state::Store;

mod handlers;

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineConfig {
    /// Fixed RNG seed for reproducible runs; entropy-seeded when unset.
    pub rng_seed: Option<u64>,
}

/// An open round in the in-memory table. Rounds hold no funds; terminal
/// transitions settle against the store and drop the round.
#[derive(Clone, Debug)]
pub enum Round {
    Grid(GridRound),
    Duel(DuelRound),
}

impl Round {
    fn created_at(&self) -> u64 {
        match self {
            Self::Grid(round) => round.created_at,
            Self::Duel(round) => round.created_at,
        }
    }

    fn ttl(&self) -> u64 {
        match self {
            Self::Grid(_) => GRID_ROUND_TTL_SECS,
            Self::Duel(_) => DUEL_ROUND_TTL_SECS,
        }
    }
}

/// Single-threaded command executor over a keyed account store.
///
/// One instance owns the store, the open-round table, and the RNG. Commands
/// carry the acting user and the current unix time; the engine itself never
/// reads a clock.
pub struct Engine<S: Store> {
    store: S,
    rng: ChaCha8Rng,
    rounds: BTreeMap<RoundId, Round>,
    next_round_id: RoundId,
    /// Last rewarded chat message per user. Scoped to this process and
    /// cleared on restart.
    activity_seen: HashMap<UserId, u64>,
}

impl<S: Store> Engine<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            store,
            rng,
            rounds: BTreeMap::new(),
            next_round_id: 1,
            activity_seen: HashMap::new(),
        }
    }

    /// Execute one command to completion. A rejected command changes no
    /// state; an interaction from a non-participant on someone else's round
    /// returns `Ok` with no events.
    pub fn execute(
        &mut self,
        actor: &UserId,
        now: u64,
        command: Command,
    ) -> Result<Vec<Event>, CommandError> {
        self.expire_rounds(now);
        match command {
            Command::Deposit { amount } => self.handle_deposit(actor, amount),
            Command::Withdraw { amount } => self.handle_withdraw(actor, amount),
            Command::Give { to, amount } => self.handle_give(actor, &to, amount),
            Command::Work => self.handle_work(actor, now),
            Command::Daily => self.handle_daily(actor, now),
            Command::Buy { item } => self.handle_buy(actor, now, item),
            Command::Coinflip { side, amount } => self.handle_coinflip(actor, now, side, amount),
            Command::Mines { bet } => self.handle_mines(actor, now, bet),
            Command::Duel { opponent, bet } => self.handle_duel(actor, now, &opponent, bet),
            Command::Rob { target } => self.handle_rob(actor, now, &target),
            Command::Heist { target } => self.handle_heist(actor, now, &target),
            Command::Marry { partner } => self.handle_marry(actor, now, &partner),
            Command::Divorce => self.handle_divorce(actor),
            Command::Round { id, action } => self.handle_round_action(actor, now, id, action),
        }
    }

    /// Count a chat message toward passive rewards. Returns `None` while
    /// the per-user activity window is still open.
    pub fn record_activity(&mut self, user: &UserId, now: u64) -> Option<ActivityReward> {
        if let Some(last) = self.activity_seen.get(user) {
            if now.saturating_sub(*last) <= ACTIVITY_COOLDOWN_SECS {
                return None;
            }
        }
        self.activity_seen.insert(user.clone(), now);

        let mut account = self.account(user);
        account.balances.credits = account.balances.credits.saturating_add(ACTIVITY_CREDITS);
        let leveled_to = leveling::award_xp(&mut account, ACTIVITY_XP);
        self.store.put(user, account);
        debug!(user = %user, "chat activity rewarded");

        Some(ActivityReward {
            credits: ACTIVITY_CREDITS,
            xp: ACTIVITY_XP,
            leveled_to,
        })
    }

    /// The user's account, defaults when never touched.
    pub fn account(&self, user: &UserId) -> Account {
        self.store.get(user).unwrap_or_default()
    }

    pub fn profile(&self, user: &UserId, now: u64) -> Profile {
        let account = self.account(user);
        Profile {
            user: user.clone(),
            level: account.progress.level,
            xp: account.progress.xp,
            xp_needed: account.progress.xp_to_next_level(),
            credits: account.balances.credits,
            booster_remaining_secs: account.booster_expires_at.saturating_sub(now),
            partner: account.partnership.map(|p| p.partner),
        }
    }

    pub fn leaderboard(&self, category: LeaderboardCategory) -> Leaderboard {
        Leaderboard::build(category, &self.store.snapshot())
    }

    pub fn round(&self, id: RoundId) -> Option<&Round> {
        self.rounds.get(&id)
    }

    pub fn rounds(&self) -> impl Iterator<Item = (&RoundId, &Round)> {
        self.rounds.iter()
    }

    fn expire_rounds(&mut self, now: u64) {
        let expired: Vec<RoundId> = self
            .rounds
            .iter()
            .filter(|(_, round)| now.saturating_sub(round.created_at()) > round.ttl())
            .map(|(id, _)| *id)
            .collect();
        for id in expired {
            self.rounds.remove(&id);
            debug!(round = id, "round expired");
        }
    }

    pub(crate) fn allocate_round_id(&mut self) -> RoundId {
        let id = self.next_round_id;
        self.next_round_id += 1;
        id
    }

    pub(crate) fn ensure_cooldown(
        cooldowns: &Cooldowns,
        kind: CooldownKind,
        now: u64,
    ) -> Result<(), CommandError> {
        let remaining_secs = cooldowns.remaining(kind, now);
        if remaining_secs > 0 {
            return Err(CommandError::CooldownActive { remaining_secs });
        }
        Ok(())
    }

    /// Resolve an amount against a balance and require it positive.
    pub(crate) fn resolve_positive(amount: Amount, balance: i64) -> Result<i64, CommandError> {
        let value = amount.resolve(balance);
        if value <= 0 {
            return Err(CommandError::NonPositiveAmount);
        }
        Ok(value)
    }

    pub(crate) fn ensure_funds(have: i64, need: i64) -> Result<(), CommandError> {
        if need > have {
            return Err(CommandError::InsufficientFunds { have, need });
        }
        Ok(())
    }
}
