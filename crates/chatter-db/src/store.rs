//! Storage traits held by the request handlers.
//!
//! The handlers only ever see `dyn AccountStore` / `dyn MessageStore`, so a
//! different backend can be injected without touching them. [`Database`] is
//! the SQLite implementation of both. Every method is synchronous; callers on
//! an async runtime are expected to run them on the blocking pool.

use anyhow::Result;
use chatter_types::models::{Account, Message};

use crate::Database;

pub trait AccountStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Result<Option<Account>>;

    fn exists_by_id(&self, account_id: i64) -> Result<bool>;

    /// Persists a new account and returns it with its assigned id, or `None`
    /// if the username is already in use.
    fn insert(&self, username: &str, password: &str) -> Result<Option<Account>>;
}

pub trait MessageStore: Send + Sync {
    fn insert(&self, posted_by: i64, message_text: &str, time_posted_epoch: i64) -> Result<Message>;

    fn find_all(&self) -> Result<Vec<Message>>;

    fn find_by_id(&self, message_id: i64) -> Result<Option<Message>>;

    fn find_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>>;

    fn exists_by_id(&self, message_id: i64) -> Result<bool>;

    /// Overwrites the text of an existing message. Returns rows affected.
    fn update_text(&self, message_id: i64, message_text: &str) -> Result<usize>;

    /// Returns rows affected.
    fn delete_by_id(&self, message_id: i64) -> Result<usize>;
}

impl AccountStore for Database {
    fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.get_account_by_username(username)?.map(Account::from))
    }

    fn exists_by_id(&self, account_id: i64) -> Result<bool> {
        self.account_exists(account_id)
    }

    fn insert(&self, username: &str, password: &str) -> Result<Option<Account>> {
        Ok(self.create_account(username, password)?.map(Account::from))
    }
}

impl MessageStore for Database {
    fn insert(&self, posted_by: i64, message_text: &str, time_posted_epoch: i64) -> Result<Message> {
        Ok(self.insert_message(posted_by, message_text, time_posted_epoch)?.into())
    }

    fn find_all(&self) -> Result<Vec<Message>> {
        Ok(self.get_messages()?.into_iter().map(Message::from).collect())
    }

    fn find_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        Ok(self.get_message(message_id)?.map(Message::from))
    }

    fn find_by_posted_by(&self, account_id: i64) -> Result<Vec<Message>> {
        Ok(self
            .get_messages_by_account(account_id)?
            .into_iter()
            .map(Message::from)
            .collect())
    }

    fn exists_by_id(&self, message_id: i64) -> Result<bool> {
        self.message_exists(message_id)
    }

    fn update_text(&self, message_id: i64, message_text: &str) -> Result<usize> {
        self.update_message_text(message_id, message_text)
    }

    fn delete_by_id(&self, message_id: i64) -> Result<usize> {
        self.delete_message(message_id)
    }
}
