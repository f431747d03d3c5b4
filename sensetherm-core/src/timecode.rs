//! Data-logger Time Codes
//!
//! Acquisition systems stamp each record with a single `f64` laid out as the
//! decimal digits `DDDHHMMSSsss`:
//!
//! | digits | field |
//! |--------|-------|
//! | `DDD`  | day of year (1-366) |
//! | `HH`   | hour |
//! | `MM`   | minute |
//! | `SS`   | second |
//! | `sss`  | millisecond |
//!
//! Each field is peeled off with `floor` at the matching power of ten, so a
//! time code never goes through a string on the hot path.
//!
//! ```rust
//! use sensetherm_core::TimeCode;
//!
//! let stamp = TimeCode::new(123_045_530_250.0);
//! assert_eq!(stamp.day(), 123);
//! assert_eq!(stamp.minute(), 55);
//! assert_eq!(stamp.format_std().unwrap().as_str(), "123-04:55:30.250");
//! ```

use core::fmt::{self, Write};
use core::str::FromStr;

use libm::floor;

/// Capacity of formatted time codes.
pub const TIME_CODE_CAPACITY: usize = 24;

/// Fixed-capacity formatted time code.
pub type TimeCodeString = heapless::String<TIME_CODE_CAPACITY>;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A `DDDHHMMSSsss` time stamp.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeCode(pub f64);

impl TimeCode {
    /// Wrap a raw time code.
    pub const fn new(raw: f64) -> Self {
        Self(raw)
    }

    /// Raw `DDDHHMMSSsss` value.
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    fn digits(self, scale: f64) -> i64 {
        floor(self.0 / scale) as i64
    }

    /// Day of year.
    pub fn day(self) -> i64 {
        self.digits(1e9)
    }

    /// Hour of day.
    pub fn hour(self) -> i64 {
        self.digits(1e7) - 100 * self.digits(1e9)
    }

    /// Minute of hour.
    pub fn minute(self) -> i64 {
        self.digits(1e5) - 100 * self.digits(1e7)
    }

    /// Second of minute.
    pub fn second(self) -> i64 {
        self.digits(1e3) - 100 * self.digits(1e5)
    }

    /// Millisecond of second.
    pub fn millisecond(self) -> i64 {
        floor(self.0 - 1000.0 * floor(self.0 / 1e3)) as i64
    }

    /// `DDDHHMMSS` with the milliseconds dropped.
    pub fn ddd_hhmmss(self) -> i64 {
        self.digits(1e3)
    }

    /// `DDDHHMMSS.sss`
    pub fn ddd_hhmmss_ms(self) -> f64 {
        self.0 / 1e3
    }

    /// `HHMMSS` with day and milliseconds dropped.
    pub fn hhmmss(self) -> i64 {
        self.digits(1e3) - 1_000_000 * self.day()
    }

    /// `HHMMSS.sss` with the day dropped.
    pub fn hhmmss_ms(self) -> f64 {
        self.ddd_hhmmss_ms() - 1e6 * self.day() as f64
    }

    /// Day of year with the time of day as a fraction.
    pub fn decimal_day(self) -> f64 {
        self.day() as f64
            + self.hour() as f64 / 24.0
            + self.minute() as f64 / 1_440.0
            + self.second() as f64 / SECONDS_PER_DAY
            + self.millisecond() as f64 / (SECONDS_PER_DAY * 1000.0)
    }

    /// Seconds since the start of the year; `0.0` before day 1.
    pub fn year_second(self) -> f64 {
        let day = self.decimal_day();
        if day < 1.0 {
            0.0
        } else {
            (day - 1.0) * SECONDS_PER_DAY
        }
    }

    /// `DDD-HH:MM:SS.sss`
    ///
    /// # Errors
    ///
    /// [`fmt::Error`] when a field overflows [`TIME_CODE_CAPACITY`].
    pub fn format_std(self) -> Result<TimeCodeString, fmt::Error> {
        let mut out = TimeCodeString::new();
        write!(out, "{self}")?;
        Ok(out)
    }

    /// `DDDHHMMSSsss`, the form read back by [`str::parse`].
    ///
    /// # Errors
    ///
    /// [`fmt::Error`] when a field overflows [`TIME_CODE_CAPACITY`].
    pub fn format_compact(self) -> Result<TimeCodeString, fmt::Error> {
        let mut out = TimeCodeString::new();
        write!(
            out,
            "{:03}{:02}{:02}{:02}{:03}",
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )?;
        Ok(out)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}-{:02}:{:02}:{:02}.{:03}",
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

impl FromStr for TimeCode {
    type Err = core::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<f64> for TimeCode {
    fn from(raw: f64) -> Self {
        Self(raw)
    }
}

#[cfg(feature = "std")]
mod local {
    use chrono::{Local, TimeZone};

    /// Local `("mm/dd/yyyy", "hh:mm:ss")` for a UTC epoch second.
    ///
    /// `None` for non-positive input or a time the local zone cannot represent.
    pub fn utc_to_local(utc_seconds: i64) -> Option<(String, String)> {
        if utc_seconds <= 0 {
            return None;
        }
        let local = Local.timestamp_opt(utc_seconds, 0).single()?;
        Some((
            local.format("%m/%d/%Y").to_string(),
            local.format("%H:%M:%S").to_string(),
        ))
    }

    /// [`utc_to_local`] for fractional seconds, plus the truncated milliseconds.
    pub fn utc_to_local_fractional(utc_seconds: f64) -> Option<(String, String, u32)> {
        let whole = utc_seconds as i64;
        let (date, time) = utc_to_local(whole)?;
        let millis = ((utc_seconds - whole as f64) * 1000.0) as u32;
        Some((date, time, millis))
    }
}

#[cfg(feature = "std")]
pub use local::{utc_to_local, utc_to_local_fractional};

#[cfg(test)]
mod tests {
    use super::*;

    const STAMP: TimeCode = TimeCode::new(123_045_530_250.0);

    #[test]
    fn fields() {
        assert_eq!(STAMP.day(), 123);
        assert_eq!(STAMP.hour(), 4);
        assert_eq!(STAMP.minute(), 55);
        assert_eq!(STAMP.second(), 30);
        assert_eq!(STAMP.millisecond(), 250);
    }

    #[test]
    fn composites() {
        assert_eq!(STAMP.ddd_hhmmss(), 123_045_530);
        assert!((STAMP.ddd_hhmmss_ms() - 123_045_530.25).abs() < 1e-6);
        assert_eq!(STAMP.hhmmss(), 45_530);
        assert!((STAMP.hhmmss_ms() - 45_530.25).abs() < 1e-6);
    }

    #[test]
    fn day_fractions() {
        let expected = 123.0 + 4.0 / 24.0 + 55.0 / 1440.0 + 30.0 / 86_400.0 + 0.25 / 86_400.0;
        assert!((STAMP.decimal_day() - expected).abs() < 1e-9);
        assert!((STAMP.year_second() - 10_558_530.25).abs() < 1e-3);
        assert_eq!(TimeCode::new(12_000_000.0).year_second(), 0.0);
    }

    #[test]
    fn formatting_pads_fields() {
        let early = TimeCode::new(5_010_203_004.0);
        assert_eq!(early.format_std().unwrap().as_str(), "005-01:02:03.004");
        assert_eq!(early.format_compact().unwrap().as_str(), "005010203004");
        assert_eq!(STAMP.format_compact().unwrap().as_str(), "123045530250");
    }

    #[test]
    fn compact_form_parses_back() {
        let parsed: TimeCode = "005010203004".parse().unwrap();
        assert_eq!(parsed, TimeCode::new(5_010_203_004.0));
        let text = STAMP.format_compact().unwrap();
        assert_eq!(text.parse::<TimeCode>().unwrap(), STAMP);
        assert!("12:00".parse::<TimeCode>().is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn local_time_shapes() {
        assert_eq!(utc_to_local(0), None);
        assert_eq!(utc_to_local_fractional(-3.5), None);

        let (date, time) = utc_to_local(1_000_000_000).unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[2..3], "/");
        assert!(date.ends_with("2001"));
        assert_eq!(time.len(), 8);

        let (_, _, millis) = utc_to_local_fractional(1_000_000_000.25).unwrap();
        assert_eq!(millis, 250);
    }
}
