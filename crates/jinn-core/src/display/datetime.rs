//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp in the system timezone as `YYYY-MM-DD HH:MM TZ`.
#[derive(Debug, Clone, Copy)]
pub struct LocalDateTime(pub Timestamp);

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let stamp: Timestamp = "2025-03-01T12:30:00Z".parse().unwrap();
        let text = LocalDateTime(stamp).to_string();
        assert!(text.starts_with("2025-03-0"));
        assert_eq!(text.matches(':').count(), 1);
    }
}
