#[cfg(test)]
mod tests {
    use textwatch::libs::config::{parse_temperature, Config, WatchConfig, WeatherConfig};
    use textwatch::libs::data_storage::DataStorage;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the home/appdata directory at a temporary directory.
    ///
    /// Holds a lock for the whole test since the environment is process-wide.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.watch.is_none());
        assert!(config.weather.is_none());

        let watch = WatchConfig::default();
        assert_eq!(watch.refresh_interval, 30);
        assert_eq!(watch.date_limit, 32);
        assert_eq!(watch.mailbox_capacity, 8);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            watch: Some(WatchConfig {
                refresh_interval: 15,
                date_limit: 20,
                mailbox_capacity: 4,
            }),
            weather: Some(WeatherConfig {
                temperature: Some(-2.5),
                city: "Helsinki".to_string(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_are_omitted(_ctx: &mut ConfigTestContext) {
        let config = Config {
            watch: Some(WatchConfig::default()),
            weather: None,
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path("config.json").unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("refresh_interval"));
        assert!(!raw.contains("weather"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path("config.json").unwrap();
        std::fs::write(path, "{ not json").unwrap();

        assert!(Config::read().is_err());
    }

    #[test]
    fn test_weather_city_defaults_when_missing() {
        let weather: WeatherConfig = serde_json::from_str(r#"{ "temperature": 12.0 }"#).unwrap();
        assert_eq!(weather.temperature, Some(12.0));
        assert_eq!(weather.city, "");
    }

    #[test]
    fn test_parse_temperature() {
        assert_eq!(parse_temperature("21").unwrap(), Some(21.0));
        assert_eq!(parse_temperature(" -3.5 ").unwrap(), Some(-3.5));
        assert_eq!(parse_temperature("").unwrap(), None);
        assert_eq!(parse_temperature("   ").unwrap(), None);
        assert!(parse_temperature("warm").is_err());
        assert!(parse_temperature("NaN").is_err());
    }
}
