#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};
    use h2obuddy::db::error::StoreError;
    use h2obuddy::db::store::Store;
    use h2obuddy::libs::intake::{annotate, DailyIntake, DEFAULT_HISTORY_LIMIT};
    use h2obuddy::libs::user::NewUser;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const EMAIL: &str = "ada@example.com";

    struct WaterLogsTestContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for WaterLogsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::open(temp_dir.path().join("h2obuddy.db")).unwrap();
            store.create_user(&NewUser::new("Ada", EMAIL, "pw", 2000)).unwrap();
            WaterLogsTestContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_daily_total_sums_events(ctx: &mut WaterLogsTestContext) {
        ctx.store.log_intake(EMAIL, day(1), 250).unwrap();
        ctx.store.log_intake(EMAIL, day(1), 500).unwrap();
        ctx.store.log_intake(EMAIL, day(2), 300).unwrap();

        assert_eq!(ctx.store.daily_total(EMAIL, day(1)).unwrap(), 750);
        assert_eq!(ctx.store.daily_total(EMAIL, day(2)).unwrap(), 300);
        assert_eq!(ctx.store.daily_total(EMAIL, day(3)).unwrap(), 0);
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_totals_are_per_user(ctx: &mut WaterLogsTestContext) {
        ctx.store.create_user(&NewUser::new("Bob", "bob@example.com", "pw", 2000)).unwrap();
        ctx.store.log_intake(EMAIL, day(1), 250).unwrap();
        ctx.store.log_intake("bob@example.com", day(1), 1000).unwrap();

        assert_eq!(ctx.store.daily_total(EMAIL, day(1)).unwrap(), 250);
        assert_eq!(ctx.store.daily_total("bob@example.com", day(1)).unwrap(), 1000);
        assert_eq!(ctx.store.daily_total("ghost@example.com", day(1)).unwrap(), 0);
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_recent_history_newest_first(ctx: &mut WaterLogsTestContext) {
        let first = day(1);
        for offset in 0..8u64 {
            let date = first.checked_add_days(Days::new(offset)).unwrap();
            ctx.store.log_intake(EMAIL, date, 100).unwrap();
            ctx.store.log_intake(EMAIL, date, 100 * (offset as u32 + 1)).unwrap();
        }

        let history = ctx.store.recent_history(EMAIL, DEFAULT_HISTORY_LIMIT).unwrap();
        assert_eq!(history.len(), 7);
        assert_eq!(history[0], DailyIntake { date: day(8), total: 900 });
        assert_eq!(history[6], DailyIntake { date: day(2), total: 300 });
        assert!(history.windows(2).all(|pair| pair[0].date > pair[1].date));
        assert!(!history.iter().any(|entry| entry.date == day(1)));
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_recent_history_respects_limit(ctx: &mut WaterLogsTestContext) {
        for d in [3, 1, 2] {
            ctx.store.log_intake(EMAIL, day(d), 500).unwrap();
        }

        let history = ctx.store.recent_history(EMAIL, 2).unwrap();
        let dates: Vec<NaiveDate> = history.iter().map(|entry| entry.date).collect();
        assert_eq!(dates, vec![day(3), day(2)]);
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_recent_history_empty(ctx: &mut WaterLogsTestContext) {
        assert!(ctx.store.recent_history(EMAIL, 7).unwrap().is_empty());
        assert!(ctx.store.recent_history("ghost@example.com", 7).unwrap().is_empty());
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_history_goal_marks(ctx: &mut WaterLogsTestContext) {
        ctx.store.log_intake(EMAIL, day(1), 2000).unwrap();
        ctx.store.log_intake(EMAIL, day(2), 1999).unwrap();

        let goal = ctx.store.daily_goal(EMAIL).unwrap();
        let entries = annotate(&ctx.store.recent_history(EMAIL, 7).unwrap(), goal);
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].goal_achieved);
        assert!(entries[1].goal_achieved);
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_zero_amount_is_rejected(ctx: &mut WaterLogsTestContext) {
        let err = ctx.store.log_intake(EMAIL, day(1), 0).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(ctx.store.daily_total(EMAIL, day(1)).unwrap(), 0);
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_unknown_email_is_rejected(ctx: &mut WaterLogsTestContext) {
        let err = ctx.store.log_intake("ghost@example.com", day(1), 250).unwrap_err();
        assert!(err.is_constraint_violation());
        assert_eq!(ctx.store.daily_total("ghost@example.com", day(1)).unwrap(), 0);
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_zero_history_limit_is_rejected(ctx: &mut WaterLogsTestContext) {
        let err = ctx.store.recent_history(EMAIL, 0).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test_context(WaterLogsTestContext)]
    #[test]
    fn test_log_ids_increase(ctx: &mut WaterLogsTestContext) {
        let first = ctx.store.log_intake(EMAIL, day(1), 100).unwrap();
        let second = ctx.store.log_intake(EMAIL, day(1), 100).unwrap();
        assert!(second > first);
    }
}
