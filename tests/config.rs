#[cfg(test)]
mod tests {
    use h2obuddy::libs::config::{Config, DatabaseConfig, HistoryConfig, CONFIG_FILE_NAME};
    use h2obuddy::libs::data_storage::DataStorage;
    use h2obuddy::libs::intake::DEFAULT_HISTORY_LIMIT;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path());
            ConfigTestContext {
                temp_dir,
                storage,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.database.is_none());
        assert!(config.history.is_none());
        assert_eq!(config.history_limit(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.database_path(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_file(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(DatabaseConfig {
                path: ctx.temp_dir.path().join("custom.db"),
            }),
            history: Some(HistoryConfig { limit: 14 }),
        };
        config.save_to(&ctx.storage).unwrap();

        let read = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(read, config);
        assert_eq!(read.history_limit(), 14);
        assert_eq!(read.database_path(), Some(ctx.temp_dir.path().join("custom.db")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config(ctx: &mut ConfigTestContext) {
        fs::write(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), r#"{ "history": { "limit": 3 } }"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        assert!(config.database.is_none());
        assert_eq!(config.history_limit(), 3);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_zero_history_limit_uses_default(ctx: &mut ConfigTestContext) {
        fs::write(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), r#"{ "history": { "limit": 0 } }"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config.history_limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();
        assert!(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap().exists());

        Config::delete_from(&ctx.storage).unwrap();
        assert!(!ctx.storage.get_path(CONFIG_FILE_NAME).unwrap().exists());
        Config::delete_from(&ctx.storage).unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_json_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), "not json").unwrap();
        assert!(Config::read_from(&ctx.storage).is_err());
    }
}
