use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use plunder_types::{Account, UserId};
use tracing::{debug, warn};

use crate::state::Store;

/// File-backed account store: one JSON document mapping user id to account,
/// read in full at open and rewritten in full on every mutation.
///
/// A missing or corrupt file is treated as an empty store, never a fatal
/// error. Writes land in a sibling temp file first and are renamed into
/// place; a failed write is logged and the in-memory copy stays
/// authoritative for the rest of the process.
pub struct JsonStore {
    path: PathBuf,
    accounts: BTreeMap<UserId, Account>,
}

impl JsonStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let accounts = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(accounts) => accounts,
                Err(err) => {
                    warn!(path = %path.display(), %err, "store file unreadable; starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) => {
                debug!(path = %path.display(), %err, "no store file; starting empty");
                BTreeMap::new()
            }
        };
        Self { path, accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn persist(&self) {
        let contents = match serde_json::to_string_pretty(&self.accounts) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(%err, "failed to serialize store");
                return;
            }
        };
        let tmp = self.path.with_extension("json.tmp");
        if let Err(err) = fs::write(&tmp, contents) {
            warn!(path = %tmp.display(), %err, "failed to write store");
            return;
        }
        if let Err(err) = fs::rename(&tmp, &self.path) {
            warn!(path = %self.path.display(), %err, "failed to replace store");
        }
    }
}

impl Store for JsonStore {
    fn get(&self, id: &UserId) -> Option<Account> {
        self.accounts.get(id).cloned()
    }

    fn put(&mut self, id: &UserId, account: Account) {
        self.accounts.insert(id.clone(), account);
        self.persist();
    }

    fn snapshot(&self) -> Vec<(UserId, Account)> {
        self.accounts
            .iter()
            .map(|(id, account)| (id.clone(), account.clone()))
            .collect()
    }
}
