//! # h2obuddy - hydration tracking
//!
//! A command-line utility and library for recording water intake against a
//! daily goal.
//!
//! ## Features
//!
//! - **Accounts**: signup and login with salted Argon2id password hashes
//! - **Intake Log**: append-only log with daily totals and recent history
//! - **Preferences**: daily goal, reminder interval, wake-up/bedtime and reminder window
//! - **Schema Migrations**: additive, versioned upgrades that keep existing data
//!
//! ## Usage
//!
//! ```rust,no_run
//! use h2obuddy::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
