//! User accounts and per-user preferences.
//!
//! Users are addressed by email, the natural unique key that water logs
//! reference. The numeric id is only handed out at signup and login and can
//! be mapped back to an email with [`Users::email_by_id`].

use super::db::Db;
use super::error::{StoreError, StoreResult};
use crate::libs::messages::Message;
use crate::libs::password::{hash_password, is_password_hash, verify_password};
use crate::libs::user::{
    from_columns, to_columns, NewUser, NotificationWindow, ReminderWindow, User, DEFAULT_DAILY_GOAL, DEFAULT_REMINDER_INTERVAL,
};
use crate::msg_debug;
use chrono::NaiveTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const INSERT_USER: &str = "INSERT INTO users (name, email, password, daily_goal) VALUES (?1, ?2, ?3, ?4)";
const SELECT_CREDENTIALS: &str = "SELECT id, password FROM users WHERE email = ?1";
const UPDATE_PASSWORD: &str = "UPDATE users SET password = ?2 WHERE id = ?1";
const SELECT_EMAIL_BY_ID: &str = "SELECT email FROM users WHERE id = ?1";
const SELECT_ID_BY_EMAIL: &str = "SELECT id FROM users WHERE email = ?1";
const SELECT_USER: &str = "SELECT id, email, name, daily_goal, reminder_interval,
    wake_up_hour, wake_up_minute, bed_time_hour, bed_time_minute,
    notification_start_hour, notification_start_minute, notification_end_hour, notification_end_minute
    FROM users WHERE email = ?1";
const SELECT_NOTIFICATION_WINDOW: &str = "SELECT
    wake_up_hour, wake_up_minute, bed_time_hour, bed_time_minute,
    notification_start_hour, notification_start_minute, notification_end_hour, notification_end_minute
    FROM users WHERE email = ?1";
const SELECT_DAILY_GOAL: &str = "SELECT daily_goal FROM users WHERE email = ?1";
const SELECT_REMINDER_INTERVAL: &str = "SELECT reminder_interval FROM users WHERE email = ?1";
const UPDATE_GOAL_AND_INTERVAL: &str = "UPDATE users SET daily_goal = ?2, reminder_interval = ?3 WHERE email = ?1";
const UPDATE_WAKE_AND_BED: &str = "UPDATE users SET
    wake_up_hour = ?2, wake_up_minute = ?3, bed_time_hour = ?4, bed_time_minute = ?5
    WHERE email = ?1";
const UPDATE_NOTIFICATION_WINDOW: &str = "UPDATE users SET
    wake_up_hour = ?2, wake_up_minute = ?3, bed_time_hour = ?4, bed_time_minute = ?5,
    notification_start_hour = ?6, notification_start_minute = ?7,
    notification_end_hour = ?8, notification_end_minute = ?9
    WHERE email = ?1";

pub struct Users {
    conn: Connection,
}

impl Users {
    /// Opens a connection to an already migrated store.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Users { conn: Db::connect(path)? })
    }

    /// Inserts a user with a freshly hashed password and returns the new id.
    pub fn insert(&mut self, user: &NewUser) -> StoreResult<i64> {
        if user.email.trim().is_empty() {
            return Err(StoreError::InvalidInput("email must not be empty".to_string()));
        }
        let password_hash = hash_password(&user.password)?;
        self.conn
            .execute(INSERT_USER, params![user.name, user.email, password_hash, user.daily_goal])?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Returns the id of the user whose email and password match exactly.
    ///
    /// A row still holding a plaintext password is compared as stored and,
    /// on success, upgraded to a salted hash.
    pub fn validate(&mut self, email: &str, password: &str) -> StoreResult<Option<i64>> {
        let credentials = self
            .conn
            .query_row(SELECT_CREDENTIALS, params![email], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?))
            })
            .optional()?;

        // A legacy row without a password never matches.
        let Some((id, Some(stored))) = credentials else {
            return Ok(None);
        };

        if is_password_hash(&stored) {
            return Ok(verify_password(password, &stored)?.then_some(id));
        }

        if stored != password {
            return Ok(None);
        }
        let password_hash = hash_password(password)?;
        self.conn.execute(UPDATE_PASSWORD, params![id, password_hash])?;
        msg_debug!(Message::PasswordRehashed(id));

        Ok(Some(id))
    }

    pub fn email_by_id(&self, id: i64) -> StoreResult<Option<String>> {
        let email = self.conn.query_row(SELECT_EMAIL_BY_ID, params![id], |row| row.get(0)).optional()?;
        Ok(email)
    }

    pub fn id_by_email(&self, email: &str) -> StoreResult<Option<i64>> {
        let id = self.conn.query_row(SELECT_ID_BY_EMAIL, params![email], |row| row.get(0)).optional()?;
        Ok(id)
    }

    pub fn fetch(&self, email: &str) -> StoreResult<Option<User>> {
        let user = self
            .conn
            .query_row(SELECT_USER, params![email], |row| {
                Ok(User {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    daily_goal: row.get::<_, Option<u32>>(3)?.unwrap_or(DEFAULT_DAILY_GOAL),
                    reminder_interval: row.get::<_, Option<u32>>(4)?.unwrap_or(DEFAULT_REMINDER_INTERVAL),
                    notifications: notification_window_from_row(row, 5)?,
                })
            })
            .optional()?;
        Ok(user)
    }

    /// Stored daily goal; `None` for an unknown email or an unset column.
    pub fn daily_goal(&self, email: &str) -> StoreResult<Option<u32>> {
        let goal: Option<Option<u32>> = self.conn.query_row(SELECT_DAILY_GOAL, params![email], |row| row.get(0)).optional()?;
        Ok(goal.flatten())
    }

    /// Stored reminder interval; `None` for an unknown email or an unset column.
    pub fn reminder_interval(&self, email: &str) -> StoreResult<Option<u32>> {
        let interval: Option<Option<u32>> = self
            .conn
            .query_row(SELECT_REMINDER_INTERVAL, params![email], |row| row.get(0))
            .optional()?;
        Ok(interval.flatten())
    }

    /// Returns `false` when no user has this email.
    pub fn update_goal_and_interval(&mut self, email: &str, daily_goal: u32, reminder_interval: u32) -> StoreResult<bool> {
        let rows = self
            .conn
            .execute(UPDATE_GOAL_AND_INTERVAL, params![email, daily_goal, reminder_interval])?;
        Ok(rows > 0)
    }

    /// Writes wake-up and bedtime, plus the reminder window when given.
    /// Returns `false` when no user has this email.
    pub fn save_notification_times(
        &mut self,
        email: &str,
        wake_up: NaiveTime,
        bed_time: NaiveTime,
        reminders: Option<ReminderWindow>,
    ) -> StoreResult<bool> {
        let (wake_hour, wake_minute) = to_columns(wake_up);
        let (bed_hour, bed_minute) = to_columns(bed_time);

        let rows = match reminders {
            Some(window) => {
                let (start_hour, start_minute) = to_columns(window.start);
                let (end_hour, end_minute) = to_columns(window.end);
                self.conn.execute(
                    UPDATE_NOTIFICATION_WINDOW,
                    params![email, wake_hour, wake_minute, bed_hour, bed_minute, start_hour, start_minute, end_hour, end_minute],
                )?
            }
            None => self
                .conn
                .execute(UPDATE_WAKE_AND_BED, params![email, wake_hour, wake_minute, bed_hour, bed_minute])?,
        };
        Ok(rows > 0)
    }

    pub fn notification_window(&self, email: &str) -> StoreResult<Option<NotificationWindow>> {
        let window = self
            .conn
            .query_row(SELECT_NOTIFICATION_WINDOW, params![email], |row| notification_window_from_row(row, 0))
            .optional()?;
        Ok(window)
    }
}

/// Reads the eight hour/minute columns starting at `first`.
fn notification_window_from_row(row: &Row, first: usize) -> rusqlite::Result<NotificationWindow> {
    let defaults = NotificationWindow::default();
    Ok(NotificationWindow {
        wake_up: time_from_row(row, first, defaults.wake_up)?,
        bed_time: time_from_row(row, first + 2, defaults.bed_time)?,
        reminders: ReminderWindow {
            start: time_from_row(row, first + 4, defaults.reminders.start)?,
            end: time_from_row(row, first + 6, defaults.reminders.end)?,
        },
    })
}

/// NULL columns, as left by stores that predate the defaults, fall back to
/// the matching part of `default`.
fn time_from_row(row: &Row, hour_index: usize, default: NaiveTime) -> rusqlite::Result<NaiveTime> {
    let (default_hour, default_minute) = to_columns(default);
    let hour = row.get::<_, Option<u32>>(hour_index)?.unwrap_or(default_hour);
    let minute = row.get::<_, Option<u32>>(hour_index + 1)?.unwrap_or(default_minute);
    from_columns(hour, minute).ok_or(rusqlite::Error::IntegralValueOutOfRange(hour_index, i64::from(hour) * 100 + i64::from(minute)))
}
