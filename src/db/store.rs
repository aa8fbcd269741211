//! The repository handed to every consumer of the persistence layer.
//!
//! `Store` owns nothing but the database path. Opening it applies pending
//! migrations once; afterwards each operation opens its own connection,
//! runs its statement and drops the connection before returning, on the
//! error path as well.
//!
//! Lookups for unknown users never fail: they yield `None`, zero, an empty
//! history or the default goal and interval.
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use h2obuddy::db::store::Store;
//! use h2obuddy::libs::user::NewUser;
//!
//! let store = Store::open("h2obuddy.db")?;
//! store.create_user(&NewUser::new("Ada", "ada@example.com", "s3cret", 1800))?;
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! store.log_intake("ada@example.com", today, 250)?;
//! assert_eq!(store.daily_total("ada@example.com", today)?, 250);
//! # Ok::<(), h2obuddy::db::error::StoreError>(())
//! ```

use super::db::Db;
use super::error::{StoreError, StoreResult};
use super::migrations::get_db_version;
use super::users::Users;
use super::water_logs::WaterLogs;
use crate::libs::intake::DailyIntake;
use crate::libs::user::{NewUser, NotificationWindow, ReminderWindow, User, DEFAULT_DAILY_GOAL, DEFAULT_REMINDER_INTERVAL};
use chrono::{NaiveDate, NaiveTime};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens (creating if needed) the store at `path` and migrates it.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        Db::open(&path)?;
        debug!(path = %path.display(), "store opened");

        Ok(Store { path })
    }

    /// Opens the store at the configured or platform default location.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(Db::default_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn users(&self) -> StoreResult<Users> {
        Users::open(&self.path)
    }

    fn water_logs(&self) -> StoreResult<WaterLogs> {
        WaterLogs::open(&self.path)
    }

    pub fn schema_version(&self) -> StoreResult<u32> {
        let conn = Db::connect(&self.path)?;
        get_db_version(&conn).map_err(StoreError::Migration)
    }

    // ====================== Users ====================== //

    /// Registers a user; a duplicate email is a constraint violation and
    /// leaves the existing user untouched.
    pub fn create_user(&self, user: &NewUser) -> StoreResult<i64> {
        let id = self.users()?.insert(user)?;
        debug!(user_id = id, "user created");
        Ok(id)
    }

    /// Id of the user with exactly this email and password, `None` otherwise.
    pub fn validate_credentials(&self, email: &str, password: &str) -> StoreResult<Option<i64>> {
        let id = self.users()?.validate(email, password)?;
        debug!(found = id.is_some(), "credentials checked");
        Ok(id)
    }

    pub fn user_email_by_id(&self, id: i64) -> StoreResult<Option<String>> {
        self.users()?.email_by_id(id)
    }

    pub fn user_id_by_email(&self, email: &str) -> StoreResult<Option<i64>> {
        self.users()?.id_by_email(email)
    }

    pub fn user(&self, email: &str) -> StoreResult<Option<User>> {
        self.users()?.fetch(email)
    }

    /// Returns `false` if the email is unknown.
    pub fn update_goal_and_interval(&self, email: &str, daily_goal: u32, reminder_interval: u32) -> StoreResult<bool> {
        let updated = self.users()?.update_goal_and_interval(email, daily_goal, reminder_interval)?;
        debug!(updated, daily_goal, reminder_interval, "goal and interval saved");
        Ok(updated)
    }

    /// Saves wake-up and bedtime and, when given, the reminder window.
    /// Returns `false` if the email is unknown.
    pub fn save_notification_window(
        &self,
        email: &str,
        wake_up: NaiveTime,
        bed_time: NaiveTime,
        reminders: Option<ReminderWindow>,
    ) -> StoreResult<bool> {
        let updated = self.users()?.save_notification_times(email, wake_up, bed_time, reminders)?;
        debug!(updated, with_window = reminders.is_some(), "notification times saved");
        Ok(updated)
    }

    pub fn notification_window(&self, email: &str) -> StoreResult<Option<NotificationWindow>> {
        self.users()?.notification_window(email)
    }

    /// The user's goal, or 2000 ml when unknown or unset.
    pub fn daily_goal(&self, email: &str) -> StoreResult<u32> {
        Ok(self.users()?.daily_goal(email)?.unwrap_or(DEFAULT_DAILY_GOAL))
    }

    /// The user's reminder interval, or 60 minutes when unknown or unset.
    pub fn reminder_interval(&self, email: &str) -> StoreResult<u32> {
        Ok(self.users()?.reminder_interval(email)?.unwrap_or(DEFAULT_REMINDER_INTERVAL))
    }

    // ====================== Water logs ====================== //

    /// Appends an intake event and returns its id.
    pub fn log_intake(&self, email: &str, date: NaiveDate, amount: u32) -> StoreResult<i64> {
        let id = self.water_logs()?.insert(email, date, amount)?;
        debug!(entry_id = id, %date, amount, "intake logged");
        Ok(id)
    }

    pub fn daily_total(&self, email: &str, date: NaiveDate) -> StoreResult<u32> {
        self.water_logs()?.daily_total(email, date)
    }

    /// Totals for the `limit` most recent days with any intake, newest first.
    pub fn recent_history(&self, email: &str, limit: usize) -> StoreResult<Vec<DailyIntake>> {
        self.water_logs()?.recent_history(email, limit)
    }
}
