//! Shared fixtures for integration tests.
//!
//! Provides the error kinds used across the suite, a small account resource
//! with an in-memory store, and a fully registered method table over it.

use jebatch::{
    BatchConfig, BuildResult, ErrorKind, HandlerError, HandlerResult, KindHierarchy, MethodTable,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

pub const RUNTIME: ErrorKind = ErrorKind::new("Runtime");
pub const NOT_FOUND: ErrorKind = ErrorKind::new("NotFound");
pub const VALIDATION: ErrorKind = ErrorKind::new("Validation");
pub const CONFLICT: ErrorKind = ErrorKind::new("Conflict");

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `NotFound`, `Validation` and `Conflict` all specialise `Runtime`.
pub fn runtime_hierarchy() -> KindHierarchy {
    KindHierarchy::new()
        .with_parent(NOT_FOUND, RUNTIME)
        .and_then(|h| h.with_parent(VALIDATION, RUNTIME))
        .and_then(|h| h.with_parent(CONFLICT, RUNTIME))
        .expect("fixture hierarchy is acyclic")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: u32,
    pub owner: String,
}

/// Thread-safe account store shared by the handlers of [`account_table`].
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Arc<Mutex<BTreeMap<u32, Account>>>,
}

impl AccountStore {
    pub fn with_accounts(owners: &[&str]) -> Self {
        let store = Self::default();
        for owner in owners {
            store
                .create(NewAccount {
                    owner: owner.to_string(),
                })
                .expect("fixture account is valid");
        }
        store
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().expect("store lock").len()
    }

    fn find(&self, id: u32) -> HandlerResult<Account> {
        self.accounts
            .lock()
            .expect("store lock")
            .get(&id)
            .cloned()
            .ok_or_else(|| HandlerError::new(NOT_FOUND, format!("account {id} not found")))
    }

    fn all(&self) -> HandlerResult<Vec<Account>> {
        Ok(self.accounts.lock().expect("store lock").values().cloned().collect())
    }

    fn create(&self, new: NewAccount) -> HandlerResult<u32> {
        validate_owner(&new.owner)?;
        let mut accounts = self.accounts.lock().expect("store lock");
        if accounts.values().any(|a| a.owner == new.owner) {
            return Err(HandlerError::new(CONFLICT, format!("{} already has an account", new.owner)));
        }
        let id = accounts.keys().next_back().map_or(1, |last| last + 1);
        accounts.insert(id, Account { id, owner: new.owner });
        Ok(id)
    }

    fn update(&self, id: u32, new: NewAccount) -> HandlerResult<()> {
        validate_owner(&new.owner)?;
        let mut accounts = self.accounts.lock().expect("store lock");
        let account = accounts
            .get_mut(&id)
            .ok_or_else(|| HandlerError::new(NOT_FOUND, format!("account {id} not found")))?;
        account.owner = new.owner;
        Ok(())
    }

    fn remove(&self, id: u32) -> HandlerResult<()> {
        self.accounts
            .lock()
            .expect("store lock")
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| HandlerError::new(NOT_FOUND, format!("account {id} not found")))
    }
}

fn validate_owner(owner: &str) -> HandlerResult<()> {
    if owner.trim().is_empty() {
        Err(HandlerError::new(VALIDATION, "owner must not be blank"))
    } else {
        Ok(())
    }
}

pub type AccountTable = MethodTable<NewAccount, Account, u32>;

/// Table with every verb registered against `store`.
pub fn account_table(store: &AccountStore) -> BuildResult<AccountTable> {
    let (get, get_all, post, put, patch, delete) = (
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    );

    Ok(AccountTable::builder()
        .with_config(BatchConfig::default().with_hierarchy(runtime_hierarchy()))?
        .for_get(move |id| get.find(id))
        .with_error(NOT_FOUND, 404)?
        .and()
        .for_get_all(move || get_all.all())
        .and()
        .for_post(move |new| post.create(new))
        .with_error(VALIDATION, 400)?
        .with_error(CONFLICT, 409)?
        .and()
        .for_put(move |id, new| put.update(id, new))
        .with_error(NOT_FOUND, 404)?
        .with_error(VALIDATION, 422)?
        .and()
        .for_patch(move |id, new| patch.update(id, new))
        .with_error(NOT_FOUND, 404)?
        .with_error(RUNTIME, 400)?
        .and()
        .for_delete(move |id| delete.remove(id))
        .with_error(NOT_FOUND, 404)?
        .build())
}
