// Accounts API - Core Library
// Exposes the account store, validator and request flows for the server and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod mutation;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use crate::config::ServerConfig;
pub use entities::{Account, AccountType};
pub use error::{AccountError, AccountResult, ErrorKind};
pub use mutation::apply_patch;
pub use seed::{default_accounts, load_seed, seeded_store};
pub use service::{delete_account, get_account, list_accounts, update_account};
pub use store::{AccountStore, InMemoryAccountStore};
pub use validation::{validate_patch, validate_path_id, AccountPatch, AccountPatchRequest};

#[cfg(feature = "server")]
pub use server::{router, AppState, SharedStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
