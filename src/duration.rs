use std::fmt;

use chrono::{DateTime, Utc};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Elapsed wall-clock time broken into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Elapsed {
    /// Negative spans (clock behind the start) count as zero.
    pub fn from_millis(ms: i64) -> Self {
        let total = ms.max(0) / 1_000;
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    pub fn since(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis((now - start).num_milliseconds())
    }
}

fn unit(count: i64, label: &str) -> String {
    if count == 1 {
        format!("{count} {label}")
    } else {
        format!("{count} {label}s")
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(4);
        if self.days != 0 {
            parts.push(unit(self.days, "day"));
        }
        if self.hours != 0 {
            parts.push(unit(self.hours, "hour"));
        }
        if self.minutes != 0 {
            parts.push(unit(self.minutes, "minute"));
        }
        parts.push(unit(self.seconds, "second"));
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn fmt_ms(ms: i64) -> String {
        Elapsed::from_millis(ms).to_string()
    }

    #[test]
    fn zero_still_shows_seconds() {
        assert_eq!(fmt_ms(0), "0 seconds");
        assert_eq!(fmt_ms(999), "0 seconds");
    }

    #[test]
    fn singular_units() {
        assert_eq!(fmt_ms(90_061_000), "1 day, 1 hour, 1 minute, 1 second");
    }

    #[test]
    fn zero_units_are_skipped_except_seconds() {
        assert_eq!(fmt_ms(3_600_000), "1 hour, 0 seconds");
        assert_eq!(fmt_ms((2 * SECS_PER_DAY + 5 * 60 + 3) * 1_000), "2 days, 5 minutes, 3 seconds");
        assert_eq!(fmt_ms(300_000), "5 minutes, 0 seconds");
    }

    #[test]
    fn clock_behind_start_reads_zero() {
        assert_eq!(Elapsed::from_millis(-5_000), Elapsed::default());
    }

    #[test]
    fn since_start() {
        let start = crate::config::start_moment().expect("valid start");
        let now = start + Duration::seconds(61);
        assert_eq!(Elapsed::since(start, now).to_string(), "1 minute, 1 second");
    }

    proptest! {
        #[test]
        fn components_stay_in_range(ms in 0i64..10_000_000_000_000) {
            let e = Elapsed::from_millis(ms);
            prop_assert!((0..60).contains(&e.seconds));
            prop_assert!((0..60).contains(&e.minutes));
            prop_assert!((0..24).contains(&e.hours));
            prop_assert_eq!(
                e.days * SECS_PER_DAY + e.hours * SECS_PER_HOUR + e.minutes * SECS_PER_MINUTE + e.seconds,
                ms / 1_000
            );

            let text = e.to_string();
            prop_assert!(text.ends_with(" second") || text.ends_with(" seconds"));
        }
    }
}
