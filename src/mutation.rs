// Account Mutator - applies a validated patch in place

use crate::entities::Account;
use crate::validation::AccountPatch;

/// Overwrite the fields present in `patch`; absent fields are left untouched.
///
/// The patch must already have passed `validate_patch`.
pub fn apply_patch(account: &mut Account, patch: &AccountPatch) {
    if let Some(id) = &patch.id {
        account.id = id.clone();
    }
    if let Some(owner_name) = &patch.owner_name {
        account.owner_name = owner_name.clone();
    }
    if let Some(balance) = patch.balance {
        account.balance = balance;
    }
    if let Some(account_type) = patch.account_type {
        account.account_type = account_type;
    }
}
