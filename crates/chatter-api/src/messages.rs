use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use chatter_types::api::{NewMessageRequest, UpdateMessageRequest};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::{AppState, blocking};
use crate::validation;

pub async fn create_message(
    State(state): State<AppState>,
    Payload(req): Payload<NewMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let text = validation::message_text(req.message_text)?;
    let Some(posted_by) = req.posted_by else {
        return Err(ApiError::Validation("postedBy is required".into()));
    };

    let accounts = state.accounts.clone();
    let messages = state.messages.clone();
    let now = chrono::Utc::now().timestamp();
    let saved = blocking(move || {
        if !accounts.exists_by_id(posted_by)? {
            return Ok(None);
        }
        messages.insert(posted_by, &text, now).map(Some)
    })
    .await?;

    let message = saved.ok_or_else(|| {
        ApiError::Validation(format!("postedBy {} is not an existing account", posted_by))
    })?;

    debug!("Account {} posted message {}", posted_by, message.message_id);
    Ok(Json(message))
}

pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let messages = state.messages.clone();
    let all = blocking(move || messages.find_all()).await?;
    Ok(Json(all))
}

/// A missing message is an empty 200, not a 404.
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, ApiError> {
    let messages = state.messages.clone();
    let found = blocking(move || messages.find_by_id(message_id)).await?;

    Ok(match found {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// Deleting an absent message succeeds with an empty body.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, ApiError> {
    let messages = state.messages.clone();
    let deleted = blocking(move || {
        if !messages.exists_by_id(message_id)? {
            return Ok(0);
        }
        messages.delete_by_id(message_id)
    })
    .await?;

    if deleted == 0 {
        return Ok(StatusCode::OK.into_response());
    }

    debug!("Deleted message {}", message_id);
    Ok(Json(deleted).into_response())
}

/// Any caller may edit any message; authorship is not checked.
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Payload(req): Payload<UpdateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Existence is checked before the new text
    let messages = state.messages.clone();
    if !blocking(move || messages.exists_by_id(message_id)).await? {
        return Err(ApiError::Validation(format!("message {} does not exist", message_id)));
    }

    let text = validation::message_text(req.message_text)?;

    let messages = state.messages.clone();
    let updated = blocking(move || messages.update_text(message_id, &text)).await?;
    if updated == 0 {
        // Deleted between the two calls
        return Err(ApiError::Validation(format!("message {} does not exist", message_id)));
    }

    debug!("Updated text of message {}", message_id);
    Ok(Json(updated))
}

/// No check that the account exists; an unknown id yields an empty list.
pub async fn list_account_messages(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = state.messages.clone();
    let found = blocking(move || messages.find_by_posted_by(account_id)).await?;
    Ok(Json(found))
}
