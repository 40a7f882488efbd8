use serde::Deserialize;

// Every field is optional so that a missing or null value reaches the
// handler and is rejected there with the same status as any other
// constraint violation.

// -- Accounts --

/// Body of both `POST /register` and `POST /login`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// -- Messages --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessageRequest {
    pub posted_by: Option<i64>,
    pub message_text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    pub message_text: Option<String>,
}
