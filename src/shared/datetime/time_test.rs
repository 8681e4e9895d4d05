use super::time::TimeConfig;
use chrono::Utc;

#[test]
fn default_config_is_utc() {
    let config = TimeConfig::default();
    assert_eq!(config.timezone, None);
    assert!(config.parse_timezone().is_none());
}

#[test]
fn parses_valid_timezone() {
    let config = TimeConfig {
        timezone: Some("Europe/London".to_string()),
    };
    assert!(config.parse_timezone().is_some());
}

#[test]
fn invalid_timezone_falls_back_to_utc() {
    let config = TimeConfig {
        timezone: Some("Invalid/Timezone".to_string()),
    };
    assert!(config.parse_timezone().is_none());
    let today = config.today();
    let utc_today = Utc::now().date_naive();
    assert!(today == utc_today || today.succ_opt() == Some(utc_today));
}

#[test]
fn validate_rejects_unknown_timezone() {
    let bad = TimeConfig {
        timezone: Some("Mars/Olympus_Mons".to_string()),
    };
    assert_eq!(bad.validate(), Err("unknown timezone: Mars/Olympus_Mons".to_string()));
    assert_eq!(TimeConfig::default().validate(), Ok(()));
    assert_eq!(
        TimeConfig {
            timezone: Some("Asia/Tokyo".to_string())
        }
        .validate(),
        Ok(())
    );
}
