//! Field checks shared by the account and message handlers.
//!
//! Each check takes the optional field as it came off the wire and hands back
//! the owned value once it passes.

use crate::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_MESSAGE_LEN: usize = 255;

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn username(value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if !is_blank(&v) => Ok(v),
        _ => Err(ApiError::Validation("username must not be blank".into())),
    }
}

pub fn password(value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(v) if v.chars().count() >= MIN_PASSWORD_LEN => Ok(v),
        _ => Err(ApiError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        ))),
    }
}

pub fn message_text(value: Option<String>) -> Result<String, ApiError> {
    let Some(text) = value else {
        return Err(ApiError::Validation("messageText is required".into()));
    };
    if is_blank(&text) {
        return Err(ApiError::Validation("messageText must not be blank".into()));
    }
    // Characters, not bytes
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(ApiError::Validation(format!(
            "messageText must be at most {} characters",
            MAX_MESSAGE_LEN
        )));
    }
    Ok(text)
}
