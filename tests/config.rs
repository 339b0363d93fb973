#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};
    use downcount::libs::config::{Config, Target, DEFAULT_PORT};
    use test_context::{test_context, TestContext};

    #[test]
    fn test_parse_rfc3339_utc() {
        let target = Target::parse("2025-12-31T23:59:59Z");
        let instant = target.instant().expect("should parse");
        assert_eq!(
            instant.naive_utc(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap().and_hms_opt(23, 59, 59).unwrap()
        );
        assert_eq!(target.raw(), "2025-12-31T23:59:59Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let target = Target::parse("2025-06-15T12:00:00+02:00");
        let instant = target.instant().expect("should parse");
        assert_eq!(
            instant.naive_utc(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_naive_date_time() {
        let target = Target::parse("2025-06-15T09:30:15");
        let instant = target.instant().expect("should parse");
        assert_eq!(
            instant.naive_local(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(9, 30, 15).unwrap()
        );

        let target = Target::parse("2025-06-15 09:30:15");
        assert!(target.instant().is_some());
    }

    #[test]
    fn test_parse_naive_without_seconds() {
        let target = Target::parse("2025-06-15T09:30");
        let instant = target.instant().expect("should parse");
        assert_eq!(instant.naive_local().hour(), 9);
        assert_eq!(instant.naive_local().minute(), 30);
        assert_eq!(instant.naive_local().second(), 0);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let target = Target::parse("2025-06-15T09:30:15.250");
        let instant = target.instant().expect("should parse");
        assert_eq!(
            instant.naive_local(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_milli_opt(9, 30, 15, 250).unwrap()
        );
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let target = Target::parse("2025-06-15");
        let instant = target.instant().expect("should parse");
        assert_eq!(
            instant.naive_local(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_surrounding_whitespace_is_trimmed() {
        let target = Target::parse("  2025-06-15T09:30:15  ");
        assert!(target.instant().is_some());
        assert_eq!(target.raw(), "2025-06-15T09:30:15");
    }

    #[test]
    fn test_parse_invalid_keeps_raw_value() {
        let target = Target::parse("not-a-date");
        assert_eq!(target, Target::Invalid("not-a-date".to_string()));
        assert_eq!(target.raw(), "not-a-date");
        assert!(target.instant().is_none());

        assert!(matches!(Target::parse("2025-13-45T99:99:99"), Target::Invalid(_)));
        assert!(matches!(Target::parse("31/12/2025"), Target::Invalid(_)));
    }

    #[test]
    fn test_parse_empty_is_missing() {
        assert_eq!(Target::parse(""), Target::Missing);
        assert_eq!(Target::parse("   "), Target::Missing);
        assert_eq!(Target::parse("").raw(), "");
    }

    /// Test context that provides a fully configured environment.
    struct EnvTestContext;

    impl TestContext for EnvTestContext {
        fn setup() -> Self {
            std::env::set_var("DATE_TIME_COUNT", "2030-01-02T03:04:05");
            std::env::set_var("PORT", "8080");
            EnvTestContext
        }

        fn teardown(self) {
            std::env::remove_var("DATE_TIME_COUNT");
            std::env::remove_var("PORT");
        }
    }

    // The environment is process-global, so every assertion against it
    // lives in this single test.
    #[test_context(EnvTestContext)]
    #[test]
    fn test_from_env_reads_environment(_ctx: &mut EnvTestContext) {
        let config = Config::from_env();
        assert_eq!(config.port, 8080);
        let instant = config.target.instant().expect("target should be configured");
        assert_eq!(
            instant.naive_local(),
            NaiveDate::from_ymd_opt(2030, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap()
        );

        // An unparseable port falls back to the default.
        std::env::set_var("PORT", "not-a-port");
        assert_eq!(Config::from_env().port, DEFAULT_PORT);

        // Removing the variables yields the missing state and the default port.
        std::env::remove_var("DATE_TIME_COUNT");
        std::env::remove_var("PORT");
        let config = Config::from_env();
        assert_eq!(config.target, Target::Missing);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
