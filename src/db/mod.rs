//! Database layer for the h2obuddy application.
//!
//! A SQLite store with two tables, `users` and `water_logs`, linked by the
//! user's email. Consumers go through [`store::Store`]; the table modules
//! hold the SQL.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use h2obuddy::db::store::Store;
//!
//! let store = Store::open_default()?;
//! let goal = store.daily_goal("ada@example.com")?;
//! # Ok::<(), h2obuddy::db::error::StoreError>(())
//! ```

/// Connection setup and database location.
pub mod db;

/// Error type shared by all persistence operations.
pub mod error;

/// Versioned, additive schema migrations.
pub mod migrations;

/// Repository facade with one connection per operation.
pub mod store;

/// Accounts, credentials, goals and notification preferences.
pub mod users;

/// Append-only intake log and its aggregates.
pub mod water_logs;
