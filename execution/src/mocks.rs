//! Deterministic fixtures for tests and simulations.

use plunder_types::{Account, UserId};

use crate::{Engine, EngineConfig, Memory};

pub fn uid(id: &str) -> UserId {
    UserId::from(id)
}

pub fn funded_account(wallet: i64, bank: i64) -> Account {
    let mut account = Account::default();
    account.balances.wallet = wallet;
    account.balances.bank = bank;
    account
}

/// Engine over an empty in-memory store with a fixed seed.
pub fn seeded_engine() -> Engine<Memory> {
    engine_with_accounts(42, vec![])
}

pub fn engine_with_accounts(
    seed: u64,
    accounts: Vec<(UserId, Account)>,
) -> Engine<Memory> {
    Engine::new(
        Memory::with_accounts(accounts),
        EngineConfig {
            rng_seed: Some(seed),
        },
    )
}
