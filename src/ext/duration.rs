use chrono::{NaiveDateTime, TimeDelta};
use std::time::Duration;

pub trait DurationExt {
    /// Compact form: `1d 2h 3m 4s`, `250ms` below one second, `0s` when empty.
    fn to_human_readable(&self) -> String;
    /// Long form: `1 day, 2 hours, 3 minutes`.
    fn to_readable_string(&self) -> String;
    /// `HH:MM:SS` with the hour field counting past 24.
    fn to_clock_string(&self) -> String;
    /// The instant this long before `now`.
    fn ago(&self, now: NaiveDateTime) -> Option<NaiveDateTime>;
    /// The instant this long after `now`.
    fn from_now(&self, now: NaiveDateTime) -> Option<NaiveDateTime>;
}

struct Parts {
    negative: bool,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    millis: u64,
}

impl Parts {
    fn of(delta: &TimeDelta) -> Self {
        let total_millis = delta.num_milliseconds();
        let millis = total_millis.unsigned_abs();
        let total_seconds = millis / 1_000;
        Parts {
            negative: total_millis < 0,
            days: total_seconds / 86_400,
            hours: total_seconds % 86_400 / 3_600,
            minutes: total_seconds % 3_600 / 60,
            seconds: total_seconds % 60,
            millis: millis % 1_000,
        }
    }

    fn sign(&self) -> &'static str {
        if self.negative {
            "-"
        } else {
            ""
        }
    }
}

impl DurationExt for TimeDelta {
    fn to_human_readable(&self) -> String {
        let parts = Parts::of(self);
        let fields = [
            (parts.days, "d"),
            (parts.hours, "h"),
            (parts.minutes, "m"),
            (parts.seconds, "s"),
        ];
        let text: Vec<String> = fields
            .iter()
            .filter(|(value, _)| *value > 0)
            .map(|(value, unit)| format!("{}{}", value, unit))
            .collect();

        if !text.is_empty() {
            format!("{}{}", parts.sign(), text.join(" "))
        } else if parts.millis > 0 {
            format!("{}{}ms", parts.sign(), parts.millis)
        } else {
            "0s".to_string()
        }
    }

    fn to_readable_string(&self) -> String {
        let parts = Parts::of(self);
        let fields = [
            (parts.days, "day"),
            (parts.hours, "hour"),
            (parts.minutes, "minute"),
            (parts.seconds, "second"),
        ];
        let text: Vec<String> = fields
            .iter()
            .filter(|(value, _)| *value > 0)
            .map(|(value, unit)| {
                let plural = if *value == 1 { "" } else { "s" };
                format!("{} {}{}", value, unit, plural)
            })
            .collect();

        if text.is_empty() {
            "0 seconds".to_string()
        } else {
            format!("{}{}", parts.sign(), text.join(", "))
        }
    }

    fn to_clock_string(&self) -> String {
        let parts = Parts::of(self);
        format!(
            "{}{:02}:{:02}:{:02}",
            parts.sign(),
            parts.days * 24 + parts.hours,
            parts.minutes,
            parts.seconds
        )
    }

    fn ago(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        now.checked_sub_signed(*self)
    }

    fn from_now(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        now.checked_add_signed(*self)
    }
}

impl DurationExt for Duration {
    fn to_human_readable(&self) -> String {
        to_delta(self).to_human_readable()
    }

    fn to_readable_string(&self) -> String {
        to_delta(self).to_readable_string()
    }

    fn to_clock_string(&self) -> String {
        to_delta(self).to_clock_string()
    }

    fn ago(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        TimeDelta::from_std(*self).ok()?.ago(now)
    }

    fn from_now(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        TimeDelta::from_std(*self).ok()?.from_now(now)
    }
}

fn to_delta(duration: &Duration) -> TimeDelta {
    TimeDelta::from_std(*duration).unwrap_or(TimeDelta::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn delta(seconds: i64) -> TimeDelta {
        TimeDelta::seconds(seconds)
    }

    #[test]
    fn test_human_readable() {
        assert_eq!(delta(93_784).to_human_readable(), "1d 2h 3m 4s");
        assert_eq!(delta(3_600).to_human_readable(), "1h");
        assert_eq!(delta(-90).to_human_readable(), "-1m 30s");
        assert_eq!(TimeDelta::milliseconds(250).to_human_readable(), "250ms");
        assert_eq!(TimeDelta::zero().to_human_readable(), "0s");
        assert_eq!(Duration::from_secs(61).to_human_readable(), "1m 1s");
    }

    #[test]
    fn test_readable_string() {
        assert_eq!(delta(93_784).to_readable_string(), "1 day, 2 hours, 3 minutes, 4 seconds");
        assert_eq!(delta(7_200).to_readable_string(), "2 hours");
        assert_eq!(delta(0).to_readable_string(), "0 seconds");
    }

    #[test]
    fn test_clock_string() {
        assert_eq!(delta(93_784).to_clock_string(), "26:03:04");
        assert_eq!(delta(59).to_clock_string(), "00:00:59");
        assert_eq!(delta(-61).to_clock_string(), "-00:01:01");
    }

    #[test]
    fn test_ago_and_from_now() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(
            delta(3_600).ago(now),
            NaiveDate::from_ymd_opt(2024, 6, 5).unwrap().and_hms_opt(11, 0, 0)
        );
        assert_eq!(
            Duration::from_secs(86_400).from_now(now),
            NaiveDate::from_ymd_opt(2024, 6, 6).unwrap().and_hms_opt(12, 0, 0)
        );
    }
}
