use axum::{Json, extract::State, response::IntoResponse};
use tracing::info;

use chatter_types::api::AccountRequest;

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::{AppState, blocking};
use crate::validation;

pub async fn register(
    State(state): State<AppState>,
    Payload(req): Payload<AccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Validate input
    let username = validation::username(req.username)?;
    let password = validation::password(req.password)?;

    // insert() also returns None when a concurrent registration won the name
    let accounts = state.accounts.clone();
    let name = username.clone();
    let created = blocking(move || {
        if accounts.find_by_username(&name)?.is_some() {
            return Ok(None);
        }
        accounts.insert(&name, &password)
    })
    .await?;

    let account = created
        .ok_or_else(|| ApiError::Conflict(format!("username '{}' is already taken", username)))?;

    info!("Registered account {} ({})", account.account_id, account.username);
    Ok(Json(account))
}

pub async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<AccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(ApiError::Unauthorized);
    };

    let accounts = state.accounts.clone();
    let account = blocking(move || accounts.find_by_username(&username))
        .await?
        .ok_or(ApiError::Unauthorized)?;

    // Plaintext comparison; credentials are stored verbatim
    if account.password != password {
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(account))
}
