use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global time configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Timezone used to decide what "today" is (None = UTC)
    pub timezone: Option<String>,
}

impl TimeConfig {
    /// Parse timezone string to chrono_tz::Tz
    pub fn parse_timezone(&self) -> Option<Tz> {
        self.timezone
            .as_ref()
            .and_then(|tz_str| tz_str.parse().ok())
    }

    /// Fails with a message naming the timezone when it is set but unknown.
    pub fn validate(&self) -> Result<(), String> {
        match (&self.timezone, self.parse_timezone()) {
            (Some(name), None) => Err(format!("unknown timezone: {name}")),
            _ => Ok(()),
        }
    }

    /// Current calendar date in the configured timezone.
    pub fn today(&self) -> NaiveDate {
        match self.parse_timezone() {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => {
                if let Some(name) = &self.timezone {
                    warn!(
                        target: "story_dash::time",
                        timezone = %name,
                        "Unknown timezone, using UTC"
                    );
                }
                Utc::now().date_naive()
            }
        }
    }
}
