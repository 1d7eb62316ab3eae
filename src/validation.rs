// Account Validator - field rules for partial updates
//
// A PUT body carries any subset of {id, ownerName, balance, type}. Absent fields
// mean "leave unchanged" and are never an error. Present fields are checked in
// a fixed order (id -> ownerName -> balance -> type) and the first failure wins.

use crate::entities::AccountType;
use crate::error::{AccountError, AccountResult};
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// MESSAGES
// ============================================================================

pub const INVALID_ID: &str = "'id' inválido. Deve iniciar com letra 'a'";
pub const OWNER_NAME_NOT_STRING: &str = "'ownerName' deve ser uma string";
pub const OWNER_NAME_TOO_SHORT: &str = "'ownerName' deve ser possuir no mínimo 2 caracteres";
pub const BALANCE_NOT_NUMBER: &str = "'balance' deve ser do tipo number";
pub const BALANCE_NEGATIVE: &str = "'balance' deve ser maior ou igual a zero";
pub const INVALID_TYPE: &str = "'type' deve ser um tipo válido: Ouro, Platina ou Black";

pub const MIN_OWNER_NAME_LEN: usize = 2;

// ============================================================================
// PATCH TYPES
// ============================================================================

/// Raw update body, before any type checks
///
/// Fields stay as untyped JSON so a wrong type surfaces as a field-rule failure
/// instead of a body parse error. `null` deserializes as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPatchRequest {
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub owner_name: Option<Value>,

    #[serde(default)]
    pub balance: Option<Value>,

    #[serde(default, rename = "type")]
    pub account_type: Option<Value>,
}

/// Normalized patch: only present fields, each already checked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPatch {
    pub id: Option<String>,
    pub owner_name: Option<String>,
    pub balance: Option<f64>,
    pub account_type: Option<AccountType>,
}

impl AccountPatch {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.owner_name.is_none()
            && self.balance.is_none()
            && self.account_type.is_none()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Check a raw patch and normalize it, stopping at the first failing field
pub fn validate_patch(request: &AccountPatchRequest) -> AccountResult<AccountPatch> {
    let id = request.id.as_ref().map(validate_id).transpose()?;
    let owner_name = request.owner_name.as_ref().map(validate_owner_name).transpose()?;
    let balance = match &request.balance {
        Some(value) => validate_balance(value)?,
        None => None,
    };
    let account_type = request.account_type.as_ref().map(validate_type).transpose()?;

    Ok(AccountPatch {
        id,
        owner_name,
        balance,
        account_type,
    })
}

/// Delete-path rule: the route parameter itself must start with `'a'`
pub fn validate_path_id(id: &str) -> AccountResult<()> {
    if id.starts_with('a') {
        Ok(())
    } else {
        Err(AccountError::bad_request(INVALID_ID))
    }
}

fn validate_id(value: &Value) -> AccountResult<String> {
    match value {
        Value::String(id) if id.starts_with('a') => Ok(id.clone()),
        _ => Err(AccountError::bad_request(INVALID_ID)),
    }
}

fn validate_owner_name(value: &Value) -> AccountResult<String> {
    let Value::String(name) = value else {
        return Err(AccountError::bad_request(OWNER_NAME_NOT_STRING));
    };

    if name.chars().count() < MIN_OWNER_NAME_LEN {
        return Err(AccountError::bad_request(OWNER_NAME_TOO_SHORT));
    }

    Ok(name.clone())
}

/// `Ok(None)` means the value passed the checks but is not a usable number,
/// so the current balance is kept.
fn validate_balance(value: &Value) -> AccountResult<Option<f64>> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    let Some(balance) = number else {
        return Err(AccountError::bad_request(BALANCE_NOT_NUMBER));
    };

    if balance < 0.0 {
        return Err(AccountError::bad_request(BALANCE_NEGATIVE));
    }

    if balance.is_nan() {
        return Ok(None);
    }

    Ok(Some(balance))
}

fn validate_type(value: &Value) -> AccountResult<AccountType> {
    value
        .as_str()
        .and_then(AccountType::parse)
        .ok_or_else(|| AccountError::bad_request(INVALID_TYPE))
}

// ============================================================================
// TESTS
// ============================================================================
