// Account Entity - bank-like account record held by the store
//
// "id" is the identity the routes address; owner, balance and type are values
// that a PUT may overwrite one field at a time.

use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "Ouro")]
    Gold,

    #[serde(rename = "Black")]
    Black,

    #[serde(rename = "Platina")]
    Platinum,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [
        AccountType::Gold,
        AccountType::Black,
        AccountType::Platinum,
    ];

    /// Wire value, as it appears in JSON bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Gold => "Ouro",
            AccountType::Black => "Black",
            AccountType::Platinum => "Platina",
        }
    }

    /// Exact match against the wire values (case-sensitive)
    pub fn parse(value: &str) -> Option<AccountType> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account record
///
/// Invariants (enforced on update by `validation`, on load by `seed`):
/// - `id` starts with `'a'` and is unique within the store
/// - `owner_name` has at least 2 characters
/// - `balance` is >= 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,

    pub owner_name: String,

    pub balance: f64,

    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        owner_name: impl Into<String>,
        balance: f64,
        account_type: AccountType,
    ) -> Self {
        Account {
            id: id.into(),
            owner_name: owner_name.into(),
            balance,
            account_type,
        }
    }

    /// Whether this record satisfies the field rules a PUT would enforce
    pub fn is_well_formed(&self) -> bool {
        self.id.starts_with('a') && self.owner_name.chars().count() >= 2 && self.balance >= 0.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
