// Account Store - ordered, in-memory collection of accounts
//
// Order is insertion order. Lookups are linear scans returning the first match.

use crate::entities::Account;

// ============================================================================
// STORE CONTRACT
// ============================================================================

/// Storage seam for account records
///
/// Handlers receive a store instead of reaching for global state, so tests can
/// inject their own and other backends can slot in later.
pub trait AccountStore {
    /// First account whose id equals `id`
    fn find_by_id(&self, id: &str) -> Option<&Account>;

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Account>;

    /// Position of the first account whose id equals `id`
    fn find_index_by_id(&self, id: &str) -> Option<usize>;

    /// Remove and return the account at `index`, shifting later ones down.
    ///
    /// Panics if `index` is out of bounds; callers look the index up first.
    fn delete_at(&mut self, index: usize) -> Account;

    /// Full collection in iteration order
    fn all(&self) -> &[Account];

    /// Append an account (used for seeding)
    fn insert(&mut self, account: Account);

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Vec-backed store; lives for the process lifetime only
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: Vec<Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        InMemoryAccountStore {
            accounts: Vec::new(),
        }
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        InMemoryAccountStore { accounts }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find_by_id(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.id == id)
    }

    fn delete_at(&mut self, index: usize) -> Account {
        self.accounts.remove(index)
    }

    fn all(&self) -> &[Account] {
        &self.accounts
    }

    fn insert(&mut self, account: Account) {
        self.accounts.push(account);
    }
}

// ============================================================================
// TESTS
// ============================================================================
