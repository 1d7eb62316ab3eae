// Entity Models
//
// The service manages a single entity: the account record.

pub mod account;

pub use account::{Account, AccountType};
