#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use h2obuddy::db::db::Db;
    use h2obuddy::db::error::StoreError;
    use h2obuddy::db::store::Store;
    use h2obuddy::libs::user::{NewUser, NotificationWindow, ReminderWindow, DEFAULT_DAILY_GOAL, DEFAULT_REMINDER_INTERVAL};
    use rusqlite::params;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct UsersTestContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for UsersTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::open(temp_dir.path().join("h2obuddy.db")).unwrap();
            UsersTestContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn stored_password(store: &Store, email: &str) -> String {
        let conn = Db::connect(store.path()).unwrap();
        conn.query_row("SELECT password FROM users WHERE email = ?1", params![email], |row| row.get(0))
            .unwrap()
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_create_user_and_read_back(ctx: &mut UsersTestContext) {
        let id = ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "pw1", 1800)).unwrap();

        let user = ctx.store.user("ada@example.com").unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.daily_goal, 1800);
        assert_eq!(user.reminder_interval, DEFAULT_REMINDER_INTERVAL);
        assert_eq!(user.notifications, NotificationWindow::default());
        assert_eq!(ctx.store.daily_goal("ada@example.com").unwrap(), 1800);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_unknown_email_yields_defaults(ctx: &mut UsersTestContext) {
        assert_eq!(ctx.store.daily_goal("ghost@example.com").unwrap(), DEFAULT_DAILY_GOAL);
        assert_eq!(ctx.store.reminder_interval("ghost@example.com").unwrap(), DEFAULT_REMINDER_INTERVAL);
        assert_eq!(ctx.store.user("ghost@example.com").unwrap(), None);
        assert_eq!(ctx.store.user_id_by_email("ghost@example.com").unwrap(), None);
        assert_eq!(ctx.store.notification_window("ghost@example.com").unwrap(), None);
        assert_eq!(ctx.store.user_email_by_id(42).unwrap(), None);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_duplicate_email_is_rejected(ctx: &mut UsersTestContext) {
        ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "pw1", 1800)).unwrap();

        let err = ctx
            .store
            .create_user(&NewUser::new("Impostor", "ada@example.com", "other", 3000))
            .unwrap_err();
        assert!(matches!(err, StoreError::ConstraintViolation(_)));

        let user = ctx.store.user("ada@example.com").unwrap().unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.daily_goal, 1800);
        assert_eq!(ctx.store.validate_credentials("ada@example.com", "pw1").unwrap(), Some(user.id));
        assert_eq!(ctx.store.validate_credentials("ada@example.com", "other").unwrap(), None);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_empty_email_is_invalid(ctx: &mut UsersTestContext) {
        let err = ctx.store.create_user(&NewUser::new("Nobody", "", "pw", 2000)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_credentials_match_exactly(ctx: &mut UsersTestContext) {
        let id = ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "Secret", 2000)).unwrap();

        assert_eq!(ctx.store.validate_credentials("ada@example.com", "Secret").unwrap(), Some(id));
        assert_eq!(ctx.store.validate_credentials("ada@example.com", "secret").unwrap(), None);
        assert_eq!(ctx.store.validate_credentials("ada@example.com", "Secret ").unwrap(), None);
        assert_eq!(ctx.store.validate_credentials("ADA@example.com", "Secret").unwrap(), None);
        assert_eq!(ctx.store.validate_credentials("ghost@example.com", "Secret").unwrap(), None);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_id_and_email_lookups(ctx: &mut UsersTestContext) {
        let ada = ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "pw", 2000)).unwrap();
        let bob = ctx.store.create_user(&NewUser::new("Bob", "bob@example.com", "pw", 2000)).unwrap();

        assert_ne!(ada, bob);
        assert_eq!(ctx.store.user_email_by_id(ada).unwrap().as_deref(), Some("ada@example.com"));
        assert_eq!(ctx.store.user_email_by_id(bob).unwrap().as_deref(), Some("bob@example.com"));
        assert_eq!(ctx.store.user_id_by_email("bob@example.com").unwrap(), Some(bob));
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_passwords_are_salted_hashes(ctx: &mut UsersTestContext) {
        ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "same", 2000)).unwrap();
        ctx.store.create_user(&NewUser::new("Bob", "bob@example.com", "same", 2000)).unwrap();

        let ada = stored_password(&ctx.store, "ada@example.com");
        let bob = stored_password(&ctx.store, "bob@example.com");
        assert!(ada.starts_with("$argon2"));
        assert_ne!(ada, "same");
        assert_ne!(ada, bob);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_plaintext_password_is_upgraded_on_login(ctx: &mut UsersTestContext) {
        let conn = Db::connect(ctx.store.path()).unwrap();
        conn.execute(
            "INSERT INTO users (name, email, password) VALUES ('Old', 'old@example.com', 'legacy')",
            [],
        )
        .unwrap();
        let id = conn.last_insert_rowid();
        drop(conn);

        assert_eq!(ctx.store.validate_credentials("old@example.com", "wrong").unwrap(), None);
        assert_eq!(stored_password(&ctx.store, "old@example.com"), "legacy");

        assert_eq!(ctx.store.validate_credentials("old@example.com", "legacy").unwrap(), Some(id));
        assert!(stored_password(&ctx.store, "old@example.com").starts_with("$argon2"));
        assert_eq!(ctx.store.validate_credentials("old@example.com", "legacy").unwrap(), Some(id));
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_plaintext_with_hash_prefix_still_logs_in(ctx: &mut UsersTestContext) {
        let conn = Db::connect(ctx.store.path()).unwrap();
        conn.execute(
            "INSERT INTO users (name, email, password) VALUES ('Fan', 'fan@example.com', '$argon2fan')",
            [],
        )
        .unwrap();
        let id = conn.last_insert_rowid();
        drop(conn);

        assert_eq!(ctx.store.validate_credentials("fan@example.com", "$argon2fan").unwrap(), Some(id));
        assert_ne!(stored_password(&ctx.store, "fan@example.com"), "$argon2fan");
        assert_eq!(ctx.store.validate_credentials("fan@example.com", "$argon2fan").unwrap(), Some(id));
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_update_goal_and_interval(ctx: &mut UsersTestContext) {
        ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "pw", 2000)).unwrap();

        assert!(ctx.store.update_goal_and_interval("ada@example.com", 2500, 45).unwrap());
        assert_eq!(ctx.store.daily_goal("ada@example.com").unwrap(), 2500);
        assert_eq!(ctx.store.reminder_interval("ada@example.com").unwrap(), 45);

        assert!(!ctx.store.update_goal_and_interval("ghost@example.com", 2500, 45).unwrap());
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_notification_window_with_reminders(ctx: &mut UsersTestContext) {
        ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "pw", 2000)).unwrap();
        let reminders = ReminderWindow::new(time(9, 30), time(18, 45));

        assert!(ctx
            .store
            .save_notification_window("ada@example.com", time(7, 15), time(23, 5), Some(reminders))
            .unwrap());

        let window = ctx.store.notification_window("ada@example.com").unwrap().unwrap();
        assert_eq!(
            window,
            NotificationWindow {
                wake_up: time(7, 15),
                bed_time: time(23, 5),
                reminders,
            }
        );
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_notification_window_without_reminders_keeps_them(ctx: &mut UsersTestContext) {
        ctx.store.create_user(&NewUser::new("Ada", "ada@example.com", "pw", 2000)).unwrap();
        let reminders = ReminderWindow::new(time(10, 0), time(16, 0));
        ctx.store
            .save_notification_window("ada@example.com", time(6, 0), time(22, 0), Some(reminders))
            .unwrap();

        assert!(ctx
            .store
            .save_notification_window("ada@example.com", time(5, 45), time(21, 30), None)
            .unwrap());

        let window = ctx.store.notification_window("ada@example.com").unwrap().unwrap();
        assert_eq!(window.wake_up, time(5, 45));
        assert_eq!(window.bed_time, time(21, 30));
        assert_eq!(window.reminders, reminders);
    }

    #[test_context(UsersTestContext)]
    #[test]
    fn test_notification_window_for_unknown_email(ctx: &mut UsersTestContext) {
        assert!(!ctx
            .store
            .save_notification_window("ghost@example.com", time(6, 0), time(22, 0), None)
            .unwrap());
    }
}
