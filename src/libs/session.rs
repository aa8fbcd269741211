//! The logged-in user, remembered between invocations.
//!
//! Only the user id and email are kept, in `session.json` next to the
//! configuration. Credentials are never written.

use super::data_storage::DataStorage;
use crate::db::error::StoreResult;
use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
}

impl Session {
    pub fn new(user_id: i64, email: &str) -> Self {
        Self {
            user_id,
            email: email.to_string(),
        }
    }

    pub fn read() -> Result<Option<Session>> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Option<Session>> {
        let session_file_path = storage.get_path(SESSION_FILE_NAME)?;
        if !session_file_path.exists() {
            return Ok(None);
        }
        let session_str = fs::read_to_string(session_file_path)?;
        Ok(Some(serde_json::from_str(&session_str)?))
    }

    /// The current session, or an error telling the user to log in.
    pub fn require() -> Result<Session> {
        Self::read()?.ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))
    }

    /// Email of the session's user, or `None` when the id no longer maps to
    /// the email recorded at login (the store was replaced or the id reused).
    pub fn resolve_email(&self, store: &Store) -> StoreResult<Option<String>> {
        let email = store.user_email_by_id(self.user_id)?;
        Ok(email.filter(|email| *email == self.email))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let session_file_path = storage.get_path(SESSION_FILE_NAME)?;
        let session_file = File::create(session_file_path)?;
        serde_json::to_writer_pretty(&session_file, &self)?;
        Ok(())
    }

    pub fn clear() -> Result<()> {
        Self::clear_from(&DataStorage::new())
    }

    pub fn clear_from(storage: &DataStorage) -> Result<()> {
        let session_file_path = storage.get_path(SESSION_FILE_NAME)?;
        if session_file_path.exists() {
            fs::remove_file(session_file_path)?;
        }
        Ok(())
    }
}
