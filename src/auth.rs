// ABOUTME: Multi-account credential store backed by accounts.json
// ABOUTME: Add, remove, switch, and resolve the active publication account

use crate::model::{Account, AccountStore};
use crate::storage::{read_json, write_json};
use crate::{Error, Result};
use std::path::Path;

/// Load the store, treating a missing file as empty.
pub fn load_from(path: &Path) -> Result<AccountStore> {
    Ok(read_json(path)?.unwrap_or_default())
}

pub fn save_to(store: &AccountStore, path: &Path) -> Result<()> {
    write_json(path, store)
}

impl AccountStore {
    /// Insert or replace by name. The first account added becomes active.
    pub fn add(&mut self, account: Account) {
        if let Some(existing) = self.accounts.iter_mut().find(|a| a.name == account.name) {
            *existing = account;
            return;
        }
        if self.active.is_empty() {
            self.active = account.name.clone();
        }
        self.accounts.push(account);
    }

    /// Remove by name; removing the active account activates the first remaining one.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| not_found(name))?;
        self.accounts.remove(index);

        if self.active == name {
            self.active = self
                .accounts
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_default();
        }
        Ok(())
    }

    pub fn active(&self) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.name == self.active)
            .ok_or_else(|| Error::Auth("no active account; run 'stackmark auth login'".into()))
    }

    pub fn switch(&mut self, name: &str) -> Result<()> {
        if !self.accounts.iter().any(|a| a.name == name) {
            return Err(not_found(name));
        }
        self.active = name.to_string();
        Ok(())
    }
}

fn not_found(name: &str) -> Error {
    Error::Auth(format!("account {:?} not found", name))
}
