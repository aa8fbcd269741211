//! Append-only intake log.
//!
//! Each row is one logging event; daily totals and history are computed by
//! aggregation. Dates are stored as ISO `YYYY-MM-DD` text, so ordering by the
//! column is chronological.

use super::db::Db;
use super::error::{StoreError, StoreResult};
use crate::libs::intake::DailyIntake;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

const INSERT_WATER_LOG: &str = "INSERT INTO water_logs (email, date, amount) VALUES (?1, ?2, ?3)";
const SELECT_DAILY_TOTAL: &str = "SELECT COALESCE(SUM(amount), 0) FROM water_logs WHERE email = ?1 AND date = ?2";
const SELECT_RECENT_HISTORY: &str = "SELECT date, SUM(amount) AS total
    FROM water_logs
    WHERE email = ?1
    GROUP BY date
    ORDER BY date DESC
    LIMIT ?2";

pub struct WaterLogs {
    conn: Connection,
}

impl WaterLogs {
    /// Opens a connection to an already migrated store.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(WaterLogs { conn: Db::connect(path)? })
    }

    /// Appends one intake event and returns its row id.
    ///
    /// The owning email must belong to an existing user; otherwise the
    /// foreign key rejects the row with a constraint violation.
    pub fn insert(&mut self, email: &str, date: NaiveDate, amount: u32) -> StoreResult<i64> {
        if amount == 0 {
            return Err(StoreError::InvalidInput("amount must be positive".to_string()));
        }
        self.conn
            .execute(INSERT_WATER_LOG, params![email, date.format(DATE_FORMAT).to_string(), amount])?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Sum of all amounts logged by `email` on `date`; 0 when nothing was logged.
    pub fn daily_total(&self, email: &str, date: NaiveDate) -> StoreResult<u32> {
        let total: i64 = self.conn.query_row(
            SELECT_DAILY_TOTAL,
            params![email, date.format(DATE_FORMAT).to_string()],
            |row| row.get(0),
        )?;
        Ok(clamp_total(total))
    }

    /// Per-day totals for the `limit` most recent distinct dates, newest first.
    pub fn recent_history(&self, email: &str, limit: usize) -> StoreResult<Vec<DailyIntake>> {
        if limit == 0 {
            return Err(StoreError::InvalidInput("history limit must be positive".to_string()));
        }
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(SELECT_RECENT_HISTORY)?;
        let rows = stmt.query_map(params![email, limit], |row| {
            let date: String = row.get(0)?;
            let total: i64 = row.get(1)?;
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))?;
            Ok(DailyIntake {
                date,
                total: clamp_total(total),
            })
        })?;

        let mut history = Vec::new();
        for day in rows {
            history.push(day?);
        }
        Ok(history)
    }
}

/// SQLite sums in 64 bits; totals beyond `u32` saturate.
fn clamp_total(total: i64) -> u32 {
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}
