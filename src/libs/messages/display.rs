//! Display implementation for h2obuddy application messages.
//!
//! All user-facing text lives here so that commands and the store refer to
//! typed `Message` variants instead of string literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === ACCOUNT MESSAGES ===
            Message::UserCreated(email) => format!("Account created for {}", email),
            Message::UserAlreadyExists(email) => format!("An account with email '{}' already exists", email),
            Message::UserNotFound => "User not found".to_string(),
            Message::UserCreateFailed(error) => format!("Failed to create account: {}", error),
            Message::LoginSuccessful(email) => format!("Login successful! Logged in as {}", email),
            Message::InvalidCredentials => "Invalid email or password".to_string(),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotLoggedIn => "You are not logged in. Run 'h2obuddy login' first".to_string(),
            Message::PasswordsDoNotMatch => "Passwords do not match".to_string(),
            Message::FieldsRequired => "Please fill out all fields".to_string(),
            Message::PasswordRehashed(id) => format!("Upgraded stored password of user {} to a salted hash", id),
            Message::ProfileHeader => "👤 Profile".to_string(),

            // === INTAKE MESSAGES ===
            Message::IntakeLogged(amount) => format!("Logged {} ml", amount),
            Message::IntakeLogFailed(error) => format!("Failed to update water intake: {}", error),
            Message::DailyProgress(total, goal) => format!("Progress: {} / {} ml", total, goal),
            Message::DailyProgressForDate(date, total, goal) => format!("Progress for {}: {} / {} ml", date, total, goal),
            Message::GoalReachedToday => "Daily goal reached, well done!".to_string(),
            Message::NoHistory => "No history available".to_string(),
            Message::HistoryHeader(days) => format!("💧 Water intake, last {} days", days),
            Message::InvalidAmount => "Amount must be a positive number of millilitres".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsSaved => "Settings saved successfully!".to_string(),
            Message::SettingsSaveFailed => "Failed to save settings".to_string(),
            Message::CurrentSettings(goal, interval) => {
                format!("Daily goal: {} ml, reminder every {} min", goal, interval)
            }
            Message::NotificationSettingsSaved => "Notification settings saved successfully".to_string(),
            Message::NotificationSettingsSaveFailed => "Failed to save notification settings".to_string(),
            Message::NotificationSettingsHeader => "⏰ Notification settings".to_string(),
            Message::InvalidTimeFormat(raw) => format!("Invalid time '{}', expected HH:MM", raw),
            Message::ReminderWindowIncomplete => "Both --start and --end are required to change the reminder window".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModuleHistory => "History settings".to_string(),

            // === PROMPTS ===
            Message::PromptName => "Name".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptPasswordConfirm => "Confirm password".to_string(),
            Message::PromptDailyGoal => "Daily goal (ml)".to_string(),
            Message::PromptDatabasePath => "Database file path".to_string(),
            Message::PromptHistoryLimit => "Days shown in history".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::InvalidInput => "Invalid input".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::ColumnAlreadyPresent(table, column) => format!("Column {}.{} already present, skipping", table, column),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", s)
    }
}
