#[derive(Debug, Clone)]
pub enum Message {
    // === ACCOUNT MESSAGES ===
    UserCreated(String),      // email
    UserAlreadyExists(String), // email
    UserNotFound,
    UserCreateFailed(String), // error
    LoginSuccessful(String),  // email
    InvalidCredentials,
    LoggedOut,
    NotLoggedIn,
    PasswordsDoNotMatch,
    FieldsRequired,
    PasswordRehashed(i64), // user id
    ProfileHeader,

    // === INTAKE MESSAGES ===
    IntakeLogged(u32),         // amount
    IntakeLogFailed(String),   // error
    DailyProgress(u32, u32),   // total, goal
    DailyProgressForDate(String, u32, u32), // date, total, goal
    GoalReachedToday,
    NoHistory,
    HistoryHeader(usize), // days
    InvalidAmount,

    // === SETTINGS MESSAGES ===
    SettingsSaved,
    SettingsSaveFailed,
    CurrentSettings(u32, u32), // goal, interval
    NotificationSettingsSaved,
    NotificationSettingsSaveFailed,
    NotificationSettingsHeader,
    InvalidTimeFormat(String), // raw input
    ReminderWindowIncomplete,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDatabase,
    ConfigModuleHistory,

    // === PROMPTS ===
    PromptName,
    PromptEmail,
    PromptPassword,
    PromptPasswordConfirm,
    PromptDailyGoal,
    PromptDatabasePath,
    PromptHistoryLimit,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    InvalidInput,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    ColumnAlreadyPresent(String, String), // table, column
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
