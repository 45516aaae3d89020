#[cfg(test)]
mod tests {
    use std::fs;
    use taskmaster::api::remote::RemoteConfig;
    use taskmaster::api::suggest::{SuggestConfig, DEFAULT_MODEL};
    use taskmaster::libs::calendar::{DEFAULT_WINDOW_LENGTH, MAX_WINDOW_LENGTH};
    use taskmaster::libs::config::{CalendarConfig, Config, CONFIG_FILE_NAME};
    use taskmaster::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::with_base(self.temp_dir.path().join("taskmaster"))
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage().get_path(CONFIG_FILE_NAME).unwrap();
        let config = Config::read_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.remote.is_none());
        assert_eq!(config.window_length(), DEFAULT_WINDOW_LENGTH);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_round_trip(ctx: &mut ConfigTestContext) {
        let path = ctx.storage().get_path(CONFIG_FILE_NAME).unwrap();
        let config = Config {
            remote: Some(RemoteConfig {
                api_url: "https://tasks.example.com/.netlify/functions".to_string(),
            }),
            suggest: Some(SuggestConfig {
                api_key: "secret".to_string(),
                ..SuggestConfig::default()
            }),
            calendar: Some(CalendarConfig { window_length: 14 }),
        };

        config.save_to(&path).unwrap();
        let loaded = Config::read_from(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.window_length(), 14);
        assert_eq!(loaded.suggest.unwrap().model, DEFAULT_MODEL);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_modules_are_omitted(ctx: &mut ConfigTestContext) {
        let path = ctx.storage().get_path(CONFIG_FILE_NAME).unwrap();
        let config = Config {
            calendar: Some(CalendarConfig::default()),
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();

        assert!(written.contains("window_length"));
        assert!(!written.contains("remote"));
        assert!(!written.contains("suggest"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_window_length_is_bounded(ctx: &mut ConfigTestContext) {
        let path = ctx.storage().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, r#"{"calendar": {"window_length": 4000000000}}"#).unwrap();
        assert_eq!(Config::read_from(&path).unwrap().window_length(), MAX_WINDOW_LENGTH);

        fs::write(&path, r#"{"calendar": {"window_length": 0}}"#).unwrap();
        assert_eq!(Config::read_from(&path).unwrap().window_length(), 1);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_storage_creates_its_directory(ctx: &mut ConfigTestContext) {
        let storage = ctx.storage();
        let path = storage.get_path("taskmaster.db").unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert!(path.ends_with("taskmaster/taskmaster.db"));
    }
}
