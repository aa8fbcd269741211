//! User profile and reminder preferences.

use chrono::{NaiveTime, Timelike};

/// Daily intake target applied when a user never configured one (ml).
pub const DEFAULT_DAILY_GOAL: u32 = 2000;
/// Minutes between reminders when a user never configured an interval.
pub const DEFAULT_REMINDER_INTERVAL: u32 = 60;

/// Registration data. The password is plaintext here and is hashed before it
/// is written.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub daily_goal: u32,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password: &str, daily_goal: u32) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            daily_goal,
        }
    }
}

/// A stored user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub daily_goal: u32,
    pub reminder_interval: u32,
    pub notifications: NotificationWindow,
}

/// Hours during which reminders may fire, distinct from wake-up and bedtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ReminderWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

impl Default for ReminderWindow {
    fn default() -> Self {
        Self {
            start: hm(8, 0),
            end: hm(20, 0),
        }
    }
}

/// All eight notification time fields of a user, at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationWindow {
    pub wake_up: NaiveTime,
    pub bed_time: NaiveTime,
    pub reminders: ReminderWindow,
}

impl Default for NotificationWindow {
    fn default() -> Self {
        Self {
            wake_up: hm(6, 0),
            bed_time: hm(22, 0),
            reminders: ReminderWindow::default(),
        }
    }
}

/// Splits a time into the (hour, minute) pair stored in the database.
pub fn to_columns(time: NaiveTime) -> (u32, u32) {
    (time.hour(), time.minute())
}

/// Builds a time from stored columns; `None` when they are out of range.
pub fn from_columns(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parses `HH:MM` as typed on the command line.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
