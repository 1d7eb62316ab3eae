// Accounts Web Server - REST routes over the account flows
//
// Thin transport layer: parse input, run the flow under the store lock, map the
// outcome to a status code and body.

use crate::entities::Account;
use crate::error::{AccountError, AccountResult, ErrorKind};
use crate::service::{self, DELETE_OK, PONG, UPDATE_OK};
use crate::store::AccountStore;
use crate::validation::AccountPatchRequest;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

pub const INVALID_BODY: &str = "Corpo da requisição deve ser um objeto JSON";

/// Store shared by all handlers
pub type SharedStore = Arc<Mutex<dyn AccountStore + Send>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
}

impl AppState {
    pub fn new<S>(store: S) -> Self
    where
        S: AccountStore + Send + 'static,
    {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Exclusive access for one whole request flow
    fn lock(&self) -> AccountResult<MutexGuard<'_, dyn AccountStore + Send + 'static>> {
        self.store
            .lock()
            .map_err(|_| AccountError::internal("Erro interno: armazenamento indisponível"))
    }
}

// ============================================================================
// Error mapping
// ============================================================================

impl ErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.kind().status_code();

        match self.kind() {
            ErrorKind::Internal => error!(status = status.as_u16(), "{}", self),
            _ => warn!(status = status.as_u16(), "{}", self),
        }

        (status, self.message().to_string()).into_response()
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /ping - Health check
async fn ping() -> &'static str {
    PONG
}

/// GET /accounts - All accounts, in store order
async fn list_accounts(State(state): State<AppState>) -> AccountResult<Json<Vec<Account>>> {
    let store = state.lock()?;
    Ok(Json(service::list_accounts(&*store)))
}

/// GET /accounts/:id
async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AccountResult<Json<Account>> {
    let store = state.lock()?;
    service::get_account(&*store, &id).map(Json)
}

/// PUT /accounts/:id - Partial update
async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AccountResult<(StatusCode, &'static str)> {
    let request = parse_patch_body(&body)?;

    let mut store = state.lock()?;
    service::update_account(&mut *store, &id, &request)?;

    Ok((StatusCode::OK, UPDATE_OK))
}

/// DELETE /accounts/:id
async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AccountResult<(StatusCode, &'static str)> {
    let mut store = state.lock()?;
    service::delete_account(&mut *store, &id)?;

    Ok((StatusCode::OK, DELETE_OK))
}

/// Empty body is an empty patch; anything else must be a JSON object
fn parse_patch_body(body: &[u8]) -> AccountResult<AccountPatchRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AccountPatchRequest::default());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|_| AccountError::bad_request(INVALID_BODY))?;
    if !value.is_object() {
        return Err(AccountError::bad_request(INVALID_BODY));
    }

    serde_json::from_value(value).map_err(|_| AccountError::bad_request(INVALID_BODY))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/accounts", get(list_accounts))
        .route(
            "/accounts/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
