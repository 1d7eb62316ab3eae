// Seed data - accounts loaded into the store at startup

use crate::config::ServerConfig;
use crate::entities::{Account, AccountType};
use crate::store::{AccountStore, InMemoryAccountStore};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Built-in seed set, one account per type
pub fn default_accounts() -> Vec<Account> {
    vec![
        Account::new("a001", "Ciclano", 10000.0, AccountType::Gold),
        Account::new("a002", "Astrodev", 500000.0, AccountType::Black),
        Account::new("a003", "Fulana", 20000000.0, AccountType::Platinum),
    ]
}

/// Read a JSON array of accounts from `path`
pub fn load_seed(path: &Path) -> Result<Vec<Account>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let accounts: Vec<Account> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;

    check_seed(&accounts)?;
    Ok(accounts)
}

/// Seeded accounts must already satisfy the record invariants
pub fn check_seed(accounts: &[Account]) -> Result<()> {
    let mut seen = HashSet::new();

    for account in accounts {
        if !account.is_well_formed() {
            bail!("seed account {:?} breaks the account field rules", account.id);
        }
        if !seen.insert(account.id.as_str()) {
            bail!("duplicate seed account id {:?}", account.id);
        }
    }

    Ok(())
}

/// Build the store from the configured seed file, or the built-in set
pub fn seeded_store(config: &ServerConfig) -> Result<InMemoryAccountStore> {
    let accounts = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => default_accounts(),
    };

    let mut store = InMemoryAccountStore::new();
    for account in accounts {
        store.insert(account);
    }

    info!(accounts = store.len(), "account store seeded");
    Ok(store)
}
