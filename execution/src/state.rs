use std::collections::BTreeMap;

use plunder_types::{Account, UserId};

/// Keyed account collection. Accounts are created lazily by callers
/// (`get` returning `None` means "defaults") and never deleted.
pub trait Store {
    fn get(&self, id: &UserId) -> Option<Account>;
    fn put(&mut self, id: &UserId, account: Account);
    /// Full read of the collection, ordered by user id.
    fn snapshot(&self) -> Vec<(UserId, Account)>;
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct Memory {
    accounts: BTreeMap<UserId, Account>,
}

impl Memory {
    pub fn with_accounts(accounts: impl IntoIterator<Item = (UserId, Account)>) -> Self {
        Self {
            accounts: accounts.into_iter().collect(),
        }
    }
}

impl Store for Memory {
    fn get(&self, id: &UserId) -> Option<Account> {
        self.accounts.get(id).cloned()
    }

    fn put(&mut self, id: &UserId, account: Account) {
        self.accounts.insert(id.clone(), account);
    }

    fn snapshot(&self) -> Vec<(UserId, Account)> {
        self.accounts
            .iter()
            .map(|(id, account)| (id.clone(), account.clone()))
            .collect()
    }
}
