use axum::{
    Router,
    routing::{get, post},
};

use crate::auth;
use crate::messages;
use crate::state::AppState;

/// Every endpoint, bound to the given state. Transport layers (tracing,
/// CORS) are added by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route(
            "/messages/{message_id}",
            get(messages::get_message)
                .delete(messages::delete_message)
                .patch(messages::update_message),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(messages::list_account_messages),
        )
        .with_state(state)
}
