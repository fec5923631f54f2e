use crate::config::settings::{LocaleSettings, Settings};
use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc, Weekday,
};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn from_unix_timestamp(seconds: i64) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp(seconds, 0).map(|dt| dt.naive_utc())
}

/// Calendar predicates for anything with a date component.
pub trait DateExt {
    fn is_leap_year(&self) -> bool;
    /// February 29th.
    fn is_leap_day(&self) -> bool;
    fn is_weekend(&self) -> bool;
    fn is_weekday(&self) -> bool;
    fn days_in_month(&self) -> u32;
    fn quarter_of_year(&self) -> u32;
    /// ISO 8601 week number.
    fn week_of_year(&self) -> u32;
}

impl<T: Datelike> DateExt for T {
    fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    fn quarter_of_year(&self) -> u32 {
        (self.month() - 1) / 3 + 1
    }

    fn week_of_year(&self) -> u32 {
        self.iso_week().week()
    }
}

pub trait NaiveDateExt {
    /// Start of the week according to the process-wide locale.
    fn start_of_week(&self) -> NaiveDate;
    fn start_of_week_on(&self, first_day: Weekday) -> NaiveDate;
    fn first_day_of_month(&self) -> NaiveDate;
    fn last_day_of_month(&self) -> NaiveDate;
    /// Moves `days` business days forward (or backward when negative), skipping weekends.
    fn add_business_days(&self, days: i64) -> Option<NaiveDate>;
    /// Completed years between `self` (a birth date) and `on`.
    fn age_at(&self, on: NaiveDate) -> i32;
    /// The next date strictly after `self` that falls on `day`.
    fn next_weekday(&self, day: Weekday) -> NaiveDate;
    fn to_date_string(&self) -> String;
    fn to_date_string_with(&self, locale: &LocaleSettings) -> String;
}

impl NaiveDateExt for NaiveDate {
    fn start_of_week(&self) -> NaiveDate {
        self.start_of_week_on(Settings::current().locale.first_day_of_week())
    }

    fn start_of_week_on(&self, first_day: Weekday) -> NaiveDate {
        let offset = (7 + self.weekday().num_days_from_monday()
            - first_day.num_days_from_monday())
            % 7;
        self.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN)
    }

    fn first_day_of_month(&self) -> NaiveDate {
        self.with_day(1).unwrap_or(*self)
    }

    fn last_day_of_month(&self) -> NaiveDate {
        self.with_day(DateExt::days_in_month(self)).unwrap_or(*self)
    }

    fn add_business_days(&self, days: i64) -> Option<NaiveDate> {
        let mut current = *self;
        let mut remaining = days.unsigned_abs();
        while remaining > 0 {
            current = if days > 0 {
                current.succ_opt()?
            } else {
                current.pred_opt()?
            };
            if current.is_weekday() {
                remaining -= 1;
            }
        }
        Some(current)
    }

    fn age_at(&self, on: NaiveDate) -> i32 {
        let mut age = on.year() - self.year();
        if (on.month(), on.day()) < (self.month(), self.day()) {
            age -= 1;
        }
        age
    }

    fn next_weekday(&self, day: Weekday) -> NaiveDate {
        let ahead = (7 + day.num_days_from_monday() - self.weekday().num_days_from_monday()) % 7;
        let ahead = if ahead == 0 { 7 } else { ahead };
        self.checked_add_days(Days::new(u64::from(ahead)))
            .unwrap_or(NaiveDate::MAX)
    }

    fn to_date_string(&self) -> String {
        self.to_date_string_with(&Settings::current().locale)
    }

    fn to_date_string_with(&self, locale: &LocaleSettings) -> String {
        self.format(&locale.date_format).to_string()
    }
}

pub trait DateTimeExt {
    fn start_of_day(&self) -> NaiveDateTime;
    /// Last representable instant of the same day.
    fn end_of_day(&self) -> NaiveDateTime;
    fn to_unix_timestamp(&self) -> i64;
    /// `yyyyMMddHHmmss`.
    fn to_timestamp_string(&self) -> String;
    fn to_iso8601(&self) -> String;
    /// Describes `self` relative to `reference` ("5 minutes ago", "in 2 days").
    fn to_relative_string(&self, reference: NaiveDateTime) -> String;
    fn is_same_day(&self, other: &NaiveDateTime) -> bool;
}

impl DateTimeExt for NaiveDateTime {
    fn start_of_day(&self) -> NaiveDateTime {
        self.date().and_time(NaiveTime::MIN)
    }

    fn end_of_day(&self) -> NaiveDateTime {
        // NaiveTime 減法會繞回前一天的 23:59:59.999999999，不會超出日期範圍
        self.date()
            .and_time(NaiveTime::MIN - TimeDelta::nanoseconds(1))
    }

    fn to_unix_timestamp(&self) -> i64 {
        self.and_utc().timestamp()
    }

    fn to_timestamp_string(&self) -> String {
        self.format("%Y%m%d%H%M%S").to_string()
    }

    fn to_iso8601(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }

    fn to_relative_string(&self, reference: NaiveDateTime) -> String {
        let delta = reference.signed_duration_since(*self);
        let past = delta >= TimeDelta::zero();
        let seconds = delta.num_seconds().unsigned_abs();

        let (amount, unit) = match seconds {
            0..=59 => return "just now".to_string(),
            60..=3_599 => (seconds / 60, "minute"),
            3_600..=86_399 => (seconds / 3_600, "hour"),
            86_400..=2_591_999 => (seconds / 86_400, "day"),
            2_592_000..=31_535_999 => (seconds / 2_592_000, "month"),
            _ => (seconds / 31_536_000, "year"),
        };
        let plural = if amount == 1 { "" } else { "s" };

        if past {
            format!("{} {}{} ago", amount, unit, plural)
        } else {
            format!("in {} {}{}", amount, unit, plural)
        }
    }

    fn is_same_day(&self, other: &NaiveDateTime) -> bool {
        self.date() == other.date()
    }
}
