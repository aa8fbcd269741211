#[cfg(test)]
mod tests {
    use h2obuddy::db::store::Store;
    use h2obuddy::libs::data_storage::DataStorage;
    use h2obuddy::libs::session::{Session, SESSION_FILE_NAME};
    use h2obuddy::libs::user::NewUser;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("data"));
            SessionTestContext {
                temp_dir,
                storage,
            }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_no_session_by_default(ctx: &mut SessionTestContext) {
        assert_eq!(Session::read_from(&ctx.storage).unwrap(), None);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_save_read_clear(ctx: &mut SessionTestContext) {
        let session = Session::new(7, "ada@example.com");
        session.save_to(&ctx.storage).unwrap();

        assert_eq!(Session::read_from(&ctx.storage).unwrap(), Some(session));

        Session::clear_from(&ctx.storage).unwrap();
        assert_eq!(Session::read_from(&ctx.storage).unwrap(), None);
        assert!(!ctx.storage.get_path(SESSION_FILE_NAME).unwrap().exists());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_session_holds_no_credentials(ctx: &mut SessionTestContext) {
        Session::new(1, "ada@example.com").save_to(&ctx.storage).unwrap();

        let raw = std::fs::read_to_string(ctx.storage.get_path(SESSION_FILE_NAME).unwrap()).unwrap();
        assert!(raw.contains("ada@example.com"));
        assert!(!raw.contains("password"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_resolve_email_checks_the_pair(ctx: &mut SessionTestContext) {
        let store = Store::open(ctx.temp_dir.path().join("h2obuddy.db")).unwrap();
        let ada = store.create_user(&NewUser::new("Ada", "ada@example.com", "pw", 2000)).unwrap();
        let bob = store.create_user(&NewUser::new("Bob", "bob@example.com", "pw", 2000)).unwrap();

        let session = Session::new(ada, "ada@example.com");
        assert_eq!(session.resolve_email(&store).unwrap().as_deref(), Some("ada@example.com"));

        let mismatched = Session::new(bob, "ada@example.com");
        assert_eq!(mismatched.resolve_email(&store).unwrap(), None);

        let unknown = Session::new(bob + 100, "ada@example.com");
        assert_eq!(unknown.resolve_email(&store).unwrap(), None);
    }
}
