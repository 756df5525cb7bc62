use chrono::{DateTime, Utc};
use chrono_tz::America::Los_Angeles;
use chrono_tz::Tz;

/// All user-visible dates and archival timestamps use the Pacific
/// reference zone, regardless of where the service runs.
pub fn pacific_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&Los_Angeles)
}

pub fn pacific_date() -> String {
    pacific_now().format("%Y-%m-%d").to_string()
}

pub fn pacific_datetime() -> String {
    pacific_now().format("%Y-%m-%d %H:%M:%S").to_string()
}
