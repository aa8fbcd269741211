//! Core library modules for the h2obuddy application.
//!
//! Everything that is not SQL lives here: domain types, password hashing,
//! configuration and session files, messaging and terminal rendering.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use h2obuddy::libs::intake::{annotate, DailyIntake};
//!
//! let history = vec![DailyIntake { date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), total: 2100 }];
//! assert!(annotate(&history, 2000)[0].goal_achieved);
//! ```

pub mod config;
pub mod data_storage;
pub mod intake;
pub mod messages;
pub mod password;
pub mod session;
pub mod user;
pub mod view;
