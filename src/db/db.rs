use super::error::{StoreError, StoreResult};
use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DB_FILE_NAME: &str = "h2obuddy.db";

/// How long a statement waits for a lock held by another process.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at `path` and applies pending migrations.
    pub fn open(path: &Path) -> StoreResult<Db> {
        let mut conn = Self::connect(path)?;
        init_with_migrations(&mut conn).map_err(StoreError::Migration)?;

        Ok(Db { conn })
    }

    /// Opens the configured database without touching its schema.
    pub fn new_without_migrations() -> StoreResult<Connection> {
        Self::connect(&Self::default_path()?)
    }

    /// Opens a connection with foreign keys enforced. The schema is left as is.
    pub fn connect(path: &Path) -> StoreResult<Connection> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        Ok(conn)
    }

    /// Database path from the configuration, or the data directory default.
    pub fn default_path() -> StoreResult<PathBuf> {
        let storage = DataStorage::new();
        let configured = match Config::read_from(&storage) {
            Ok(config) => config.database_path(),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable configuration, using the default database path");
                None
            }
        };
        match configured {
            Some(path) => Ok(path),
            None => Ok(storage.get_path(DB_FILE_NAME)?),
        }
    }
}
