// Account request flows, independent of the transport
//
// Each flow runs Received -> Validated -> Located -> Applied/Deleted and returns
// either the affected record or a classified failure. Callers that share a
// store across threads must hold exclusive access for the whole call.

use crate::entities::Account;
use crate::error::{AccountError, AccountResult};
use crate::mutation::apply_patch;
use crate::store::AccountStore;
use crate::validation::{validate_patch, validate_path_id, AccountPatchRequest};
use tracing::{debug, info};

// ============================================================================
// MESSAGES
// ============================================================================

pub const PONG: &str = "Pong!";
pub const ACCOUNT_NOT_FOUND: &str = "Conta não encontrada. Verifique a 'id'.";
pub const DELETE_NOT_FOUND: &str = "Conta não encontrada. Verifique os dados e tente novamente.";
pub const DELETE_OK: &str = "Conta excluída com sucesso";
pub const UPDATE_OK: &str = "Atualização realizada com sucesso";
pub const ID_IN_USE: &str = "'id' já está em uso por outra conta";

// ============================================================================
// FLOWS
// ============================================================================

/// Snapshot of every account, in store order
pub fn list_accounts(store: &dyn AccountStore) -> Vec<Account> {
    store.all().to_vec()
}

pub fn get_account(store: &dyn AccountStore, id: &str) -> AccountResult<Account> {
    store
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| AccountError::not_found(ACCOUNT_NOT_FOUND))
}

/// Validate `request`, then apply it to the account addressed by `id`.
///
/// Returns the account as stored after the update.
pub fn update_account(
    store: &mut dyn AccountStore,
    id: &str,
    request: &AccountPatchRequest,
) -> AccountResult<Account> {
    let patch = validate_patch(request)?;
    if patch.is_empty() {
        debug!(account_id = id, "empty patch, account left as is");
    } else {
        debug!(account_id = id, ?patch, "patch validated");
    }

    if store.find_by_id(id).is_none() {
        return Err(AccountError::not_found(ACCOUNT_NOT_FOUND));
    }

    if let Some(new_id) = patch.id.as_deref() {
        if new_id != id && store.find_by_id(new_id).is_some() {
            return Err(AccountError::bad_request(ID_IN_USE));
        }
    }

    let account = store
        .find_by_id_mut(id)
        .ok_or_else(|| AccountError::not_found(ACCOUNT_NOT_FOUND))?;
    apply_patch(account, &patch);

    info!(
        account_id = id,
        new_id = %account.id,
        account_type = %account.account_type,
        "account updated"
    );
    Ok(account.clone())
}

/// Remove the account addressed by `id` and return it
pub fn delete_account(store: &mut dyn AccountStore, id: &str) -> AccountResult<Account> {
    validate_path_id(id)?;

    let index = store
        .find_index_by_id(id)
        .ok_or_else(|| AccountError::not_found(DELETE_NOT_FOUND))?;
    let removed = store.delete_at(index);

    info!(account_id = id, remaining = store.len(), "account deleted");
    Ok(removed)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AccountType;
    use crate::error::ErrorKind;
    use crate::store::InMemoryAccountStore;
    use crate::validation::{INVALID_ID, INVALID_TYPE, OWNER_NAME_TOO_SHORT};
    use serde_json::json;

    fn seeded() -> InMemoryAccountStore {
        InMemoryAccountStore::with_accounts(vec![
            Account::new("a1", "Ana", 100.0, AccountType::Gold),
            Account::new("a2", "Bruno", 200.0, AccountType::Black),
        ])
    }

    fn patch(body: serde_json::Value) -> AccountPatchRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_list_accounts() {
        let store = seeded();
        let accounts = list_accounts(&store);

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "a1");
        assert_eq!(accounts[1].id, "a2");
    }

    #[test]
    fn test_get_account_is_repeatable() {
        let store = seeded();

        let first = get_account(&store, "a1").unwrap();
        let second = get_account(&store, "a1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_account_not_found() {
        let store = seeded();
        let err = get_account(&store, "a9").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), ACCOUNT_NOT_FOUND);
    }

    #[test]
    fn test_update_is_partial_and_targeted() {
        let mut store = seeded();

        let updated = update_account(&mut store, "a1", &patch(json!({"balance": 500}))).unwrap();
        assert_eq!(updated, Account::new("a1", "Ana", 500.0, AccountType::Gold));

        assert_eq!(get_account(&store, "a2").unwrap().balance, 200.0);
    }

    #[test]
    fn test_update_validation_failure_leaves_account_unchanged() {
        let mut store = seeded();

        let err = update_account(&mut store, "a1", &patch(json!({"type": "Invalid"}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), INVALID_TYPE);

        assert_eq!(
            get_account(&store, "a1").unwrap(),
            Account::new("a1", "Ana", 100.0, AccountType::Gold)
        );
    }

    #[test]
    fn test_update_validates_before_locating() {
        let mut store = seeded();

        let err = update_account(&mut store, "a9", &patch(json!({"ownerName": "A"}))).unwrap_err();
        assert_eq!(err.message(), OWNER_NAME_TOO_SHORT);
    }

    #[test]
    fn test_update_missing_account_is_not_found() {
        let mut store = seeded();

        let err = update_account(&mut store, "a9", &patch(json!({"balance": 1}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), ACCOUNT_NOT_FOUND);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_rename() {
        let mut store = seeded();

        update_account(&mut store, "a1", &patch(json!({"id": "a10"}))).unwrap();

        assert!(get_account(&store, "a1").is_err());
        assert_eq!(get_account(&store, "a10").unwrap().owner_name, "Ana");
    }

    #[test]
    fn test_update_rename_to_taken_id_is_rejected() {
        let mut store = seeded();

        let err = update_account(&mut store, "a1", &patch(json!({"id": "a2"}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), ID_IN_USE);
        assert_eq!(get_account(&store, "a1").unwrap().owner_name, "Ana");
    }

    #[test]
    fn test_update_rename_to_own_id_is_allowed() {
        let mut store = seeded();
        assert!(update_account(&mut store, "a1", &patch(json!({"id": "a1"}))).is_ok());
    }

    #[test]
    fn test_delete_account() {
        let mut store = seeded();

        let removed = delete_account(&mut store, "a1").unwrap();
        assert_eq!(removed.id, "a1");
        assert_eq!(get_account(&store, "a1").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_rejects_bad_id_even_if_present() {
        let mut store = seeded();
        store.insert(Account::new("b1", "Bia", 0.0, AccountType::Gold));

        let err = delete_account(&mut store, "b1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.message(), INVALID_ID);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_missing_account() {
        let mut store = seeded();

        let err = delete_account(&mut store, "a9").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), DELETE_NOT_FOUND);
    }
}
