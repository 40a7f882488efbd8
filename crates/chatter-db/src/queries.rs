use crate::models::{AccountRow, MessageRow};
use crate::Database;
use anyhow::Result;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row};

impl Database {
    // -- Accounts --

    /// Inserts a new account. Returns `None` when the username is already
    /// taken; the UNIQUE constraint is the authority, not a prior lookup.
    pub fn create_account(&self, username: &str, password: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT INTO accounts (username, password) VALUES (?1, ?2)",
                (username, password),
            );

            match inserted {
                Ok(_) => Ok(Some(AccountRow {
                    account_id: conn.last_insert_rowid(),
                    username: username.to_string(),
                    password: password.to_string(),
                })),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == ErrorCode::ConstraintViolation
                        && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT account_id, username, password FROM accounts WHERE username = ?1",
                    [username],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn account_exists(&self, account_id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let exists = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM accounts WHERE account_id = ?1)",
                [account_id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    // -- Messages --

    pub fn insert_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<MessageRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (posted_by, message_text, time_posted_epoch) VALUES (?1, ?2, ?3)",
                rusqlite::params![posted_by, message_text, time_posted_epoch],
            )?;
            Ok(MessageRow {
                message_id: conn.last_insert_rowid(),
                posted_by,
                message_text: message_text.to_string(),
                time_posted_epoch,
            })
        })
    }

    pub fn get_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| query_messages(conn, None))
    }

    pub fn get_messages_by_account(&self, posted_by: i64) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| query_messages(conn, Some(posted_by)))
    }

    pub fn get_message(&self, message_id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT message_id, posted_by, message_text, time_posted_epoch
                     FROM messages WHERE message_id = ?1",
                    [message_id],
                    message_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn message_exists(&self, message_id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let exists = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM messages WHERE message_id = ?1)",
                [message_id],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    /// Returns the number of rows updated (0 or 1).
    pub fn update_message_text(&self, message_id: i64, message_text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE messages SET message_text = ?1 WHERE message_id = ?2",
                rusqlite::params![message_text, message_id],
            )?;
            Ok(updated)
        })
    }

    /// Returns the number of rows deleted (0 or 1).
    pub fn delete_message(&self, message_id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let deleted = conn.execute("DELETE FROM messages WHERE message_id = ?1", [message_id])?;
            Ok(deleted)
        })
    }
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        account_id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        message_id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}

fn query_messages(conn: &Connection, posted_by: Option<i64>) -> Result<Vec<MessageRow>> {
    // Insertion order; ids come from AUTOINCREMENT so they never go backwards
    let rows = match posted_by {
        Some(account_id) => {
            let mut stmt = conn.prepare(
                "SELECT message_id, posted_by, message_text, time_posted_epoch
                 FROM messages
                 WHERE posted_by = ?1
                 ORDER BY message_id",
            )?;
            let rows = stmt
                .query_map([account_id], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT message_id, posted_by, message_text, time_posted_epoch
                 FROM messages
                 ORDER BY message_id",
            )?;
            let rows = stmt
                .query_map([], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows
        }
    };

    Ok(rows)
}
