//! UTC date handling for content dates and the footer credits year.
//!
//! Content files carry dates as plain strings (`date: 2024-01-01` is a string
//! in YAML). Schemas narrow them into a [`DateTimeUtc`] and write them back in
//! a canonical form, so a validated document re-validates to the same result.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! assert_eq!(dt.to_iso(), "2024-06-15");
//!
//! let dt = DateTimeUtc::parse("2024-06-15 14:30:45").unwrap();
//! assert_eq!(dt.to_iso(), "2024-06-15T14:30:45Z");
//! ```

use anyhow::{Result, bail};
use std::time::{SystemTime, UNIX_EPOCH};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// `None` for date-only values.
    pub time: Option<(u8, u8, u8)>,
}

impl DateTimeUtc {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            time: None,
        }
    }

    pub const fn with_time(mut self, hour: u8, minute: u8, second: u8) -> Self {
        self.time = Some((hour, minute, second));
        self
    }

    /// Parse a content date.
    ///
    /// Accepted forms:
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM-DDTHH:MM:SSZ`
    /// - `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS` (read as UTC)
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let date = Self::from_ymd(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[5..7])?,
            parse_u8(&bytes[8..10])?,
        );

        let dt = match bytes.len() {
            10 => date,
            19 | 20 => {
                if !matches!(bytes[10], b'T' | b' ') || bytes[13] != b':' || bytes[16] != b':' {
                    return None;
                }
                if bytes.len() == 20 && bytes[19] != b'Z' {
                    return None;
                }
                date.with_time(
                    parse_u8(&bytes[11..13])?,
                    parse_u8(&bytes[14..16])?,
                    parse_u8(&bytes[17..19])?,
                )
            }
            _ => return None,
        };

        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year, month, day, ..
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        if let Some((hour, minute, second)) = self.time {
            if hour > 23 {
                bail!("hour is invalid: {hour}");
            }
            if minute > 59 {
                bail!("minute is invalid: {minute}");
            }
            if second > 59 {
                bail!("second is invalid: {second}");
            }
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Canonical string form: `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso(self) -> String {
        match self.time {
            None => format!("{:04}-{:02}-{:02}", self.year, self.month, self.day),
            Some((h, m, s)) => format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, h, m, s
            ),
        }
    }

    /// Civil date of a unix timestamp (days-from-civil inverse).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = (secs / 86_400) as i64;
        let rem = secs % 86_400;

        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = (yoe + era * 400 + i64::from(month <= 2)) as u16;

        Self::from_ymd(year, month, day).with_time(
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Current UTC time.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }
}

/// Current calendar year (UTC).
pub fn current_year() -> u16 {
    DateTimeUtc::now().year
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-01-01").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 1, 1));
        assert_eq!(dt.to_iso(), "2024-01-01");
    }

    #[test]
    fn test_parse_with_time() {
        let zulu = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        let bare = DateTimeUtc::parse("2024-06-15T14:30:45").unwrap();
        let spaced = DateTimeUtc::parse("2024-06-15 14:30:45").unwrap();
        assert_eq!(zulu, bare);
        assert_eq!(zulu, spaced);
        assert_eq!(zulu.to_iso(), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateTimeUtc::parse("").is_none());
        assert!(DateTimeUtc::parse("yesterday").is_none());
        assert!(DateTimeUtc::parse("2024/01/01").is_none());
        assert!(DateTimeUtc::parse("2024-13-01").is_none());
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T25:00:00Z").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30:45+02:00").is_none());
    }

    #[test]
    fn test_leap_day() {
        assert!(DateTimeUtc::parse("2024-02-29").is_some());
        assert!(DateTimeUtc::parse("2000-02-29").is_some());
        assert!(DateTimeUtc::parse("1900-02-29").is_none());
    }

    #[test]
    fn test_iso_reparses_to_same_value() {
        for input in ["2024-01-01", "2024-06-15 08:05:09"] {
            let dt = DateTimeUtc::parse(input).unwrap();
            assert_eq!(DateTimeUtc::parse(&dt.to_iso()), Some(dt));
        }
    }

    #[test]
    fn test_from_unix_secs() {
        assert_eq!(
            DateTimeUtc::from_unix_secs(0),
            DateTimeUtc::from_ymd(1970, 1, 1).with_time(0, 0, 0)
        );
        // 2024-02-29T12:00:00Z
        assert_eq!(
            DateTimeUtc::from_unix_secs(1_709_208_000),
            DateTimeUtc::from_ymd(2024, 2, 29).with_time(12, 0, 0)
        );
        // 2025-12-31T23:59:59Z
        assert_eq!(
            DateTimeUtc::from_unix_secs(1_767_225_599),
            DateTimeUtc::from_ymd(2025, 12, 31).with_time(23, 59, 59)
        );
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
