use chrono::{DateTime, Datelike, Months, Utc};
use std::time::Duration;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const MS_IN_1_MO: i64 = Self::MS_IN_D * 30; // Binance "1M" bucket, approx
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Convert interval in milliseconds to a Binance-style shorthand.
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_D => "1d",
            Self::MS_IN_W => "1w",
            Self::MS_IN_1_MO => "1M",
            _ => "unknown",
        }
    }
}

// Time Helper functions

pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    let dt = DateTime::from_timestamp_millis(epoch_ms).unwrap_or_default();
    format!("{}", dt.format(TimeUtils::STANDARD_TIME_FORMAT))
}

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Epoch timestamp of Jan 1st of the given year, in milliseconds.
pub fn year_start_ms(year: i32) -> i64 {
    DateTime::parse_from_rfc3339(&format!("{year}-01-01T00:00:00Z"))
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Calendar label for "now + month_offset", e.g. "Aug 2031".
pub fn month_label(month_offset: u32) -> String {
    let dt = Utc::now() + Months::new(month_offset);
    format!("{}", dt.format("%b %Y"))
}

/// Compact "Xy Ym" rendering of a month count.
pub fn format_month_count(months: u32) -> String {
    let years = months / 12;
    let rem = months % 12;
    match (years, rem) {
        (0, m) => format!("{}m", m),
        (y, 0) => format!("{}y", y),
        (y, m) => format!("{}y {}m", y, m),
    }
}

/// Instant that works on both native and WASM targets.
#[derive(Debug, Clone, Copy)]
pub struct AppInstant(web_time::Instant);

impl AppInstant {
    pub fn now() -> Self {
        Self(web_time::Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    pub fn duration_since(&self, earlier: AppInstant) -> Duration {
        self.0.duration_since(earlier.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_count_formatting() {
        assert_eq!(format_month_count(0), "0m");
        assert_eq!(format_month_count(7), "7m");
        assert_eq!(format_month_count(24), "2y");
        assert_eq!(format_month_count(61), "5y 1m");
    }

    #[test]
    fn year_start_is_january_first() {
        let ms = year_start_ms(2020);
        assert_eq!(epoch_ms_to_date_string(ms), "2020-01-01");
    }
}
