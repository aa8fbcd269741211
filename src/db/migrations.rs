//! Database schema migration management and versioning system.
//!
//! Every schema change is a numbered migration recorded in the `migrations`
//! ledger table. Pending migrations run in a single transaction on startup,
//! and the resulting version is mirrored into `PRAGMA user_version` so the
//! database header reflects the schema as well.
//!
//! Migrations only ever add: new tables, new columns with defaults, new
//! indices. Nothing drops or rebuilds a table, so upgrading never loses rows.
//!
//! ## Legacy stores
//!
//! Databases created before the ledger existed already contain `users` and
//! `water_logs`, possibly with some of the later columns. Version 1 uses
//! `CREATE TABLE IF NOT EXISTS` and version 2 skips columns that are already
//! present, so such a file is adopted in place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use h2obuddy::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("h2obuddy.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    name TEXT,
    daily_goal INTEGER DEFAULT 2000,
    reminder_interval INTEGER DEFAULT 60,
    wake_up_hour INTEGER DEFAULT 6,
    wake_up_minute INTEGER DEFAULT 0,
    bed_time_hour INTEGER DEFAULT 22,
    bed_time_minute INTEGER DEFAULT 0
)";

const SCHEMA_WATER_LOGS: &str = "CREATE TABLE IF NOT EXISTS water_logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    amount INTEGER NOT NULL CHECK (amount > 0),
    email TEXT NOT NULL,
    FOREIGN KEY (email) REFERENCES users(email)
)";

/// Columns introduced together with the reminder window, with their defaults.
const NOTIFICATION_WINDOW_COLUMNS: [(&str, u32); 4] = [
    ("notification_start_hour", 8),
    ("notification_start_minute", 0),
    ("notification_end_hour", 20),
    ("notification_end_minute", 0),
];

/// A single database migration.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: users and water logs
        self.add_migration(1, "create_users_and_water_logs", |tx| {
            tx.execute(SCHEMA_USERS, [])?;
            tx.execute(SCHEMA_WATER_LOGS, [])?;
            Ok(())
        });

        // Version 2: reminder window, separate from wake-up and bedtime
        self.add_migration(2, "add_notification_window", |tx| {
            for (column, default) in NOTIFICATION_WINDOW_COLUMNS {
                if column_exists(tx, "users", column)? {
                    msg_debug!(Message::ColumnAlreadyPresent("users".to_string(), column.to_string()));
                    continue;
                }
                tx.execute(&format!("ALTER TABLE users ADD COLUMN {} INTEGER DEFAULT {}", column, default), [])?;
            }
            Ok(())
        });

        // Version 3: daily totals and history filter on (email, date)
        self.add_migration(3, "add_water_logs_lookup_index", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_water_logs_email_date ON water_logs(email, date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Version of the newest registered migration.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applies every pending migration.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        self.run_migrations_to(conn, self.latest_version())
    }

    /// Applies pending migrations up to and including `target_version`.
    ///
    /// All of them run in one transaction; if any fails, none is kept.
    pub fn run_migrations_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self
            .migrations
            .iter()
            .filter(|m| m.version > current_version && m.version <= target_version)
            .collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        let mut applied = current_version;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    applied = migration.version;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.pragma_update(None, "user_version", applied)?;
        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 for a store without a ledger.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        if !table_exists(conn, "migrations")? {
            return Ok(0);
        }
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        if !table_exists(conn, "migrations")? {
            return Ok(false);
        }
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Applied migrations as (version, name, applied_at), ordered by version.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        if !table_exists(conn, "migrations")? {
            return Ok(Vec::new());
        }
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let found = conn
        .query_row("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1", params![table], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<Result<Vec<_>, _>>()?;
    Ok(columns.iter().any(|name| name == column))
}

/// Brings a connection up to the latest schema.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
