use crate::config::settings::{LocaleSettings, Settings};
use crate::domain::Numeric;
use crate::utils::error::{ExtError, Result};
use chrono::TimeDelta;

const FILE_SIZE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
const ROMAN_NUMERALS: [(i128, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Helpers available on every [`Numeric`] type.
pub trait NumericExt: Numeric {
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn is_positive(self) -> bool {
        self > Self::ZERO
    }

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// `-1`, `0` or `1`.
    fn sign(self) -> i32 {
        if self.is_positive() {
            1
        } else if self.is_negative() {
            -1
        } else {
            0
        }
    }

    /// Fails for `MIN` of signed integer types.
    fn abs_value(self) -> Result<Self> {
        if self.is_negative() {
            self.checked_neg()
                .ok_or_else(|| ExtError::overflow("abs_value"))
        } else {
            Ok(self)
        }
    }

    fn clamp_between(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    fn square(self) -> Result<Self> {
        self.checked_mul(self)
            .ok_or_else(|| ExtError::overflow("square"))
    }

    fn cube(self) -> Result<Self> {
        self.square()?
            .checked_mul(self)
            .ok_or_else(|| ExtError::overflow("cube"))
    }

    fn power(self, exponent: u32) -> Result<Self> {
        (0..exponent).try_fold(Self::ONE, |acc, _| {
            acc.checked_mul(self)
                .ok_or_else(|| ExtError::overflow("power"))
        })
    }

    fn is_even(self) -> bool {
        self % (Self::ONE + Self::ONE) == Self::ZERO
    }

    fn is_odd(self) -> bool {
        let rem = self % (Self::ONE + Self::ONE);
        // 餘數落在 (-2, 2)，取負不會溢位
        rem == Self::ONE || (rem.is_negative() && Self::ZERO - rem == Self::ONE)
    }

    fn is_whole_number(self) -> bool {
        self.to_f64().fract() == 0.0
    }

    /// Zero divisor is a `DivideByZeroError`; `MIN / -1` is an `OverflowError`.
    fn safe_div(self, divisor: Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(ExtError::divide_by_zero("safe_div"));
        }
        self.checked_div(divisor)
            .ok_or_else(|| ExtError::overflow("safe_div"))
    }

    fn safe_rem(self, divisor: Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(ExtError::divide_by_zero("safe_rem"));
        }
        self.checked_rem(divisor)
            .ok_or_else(|| ExtError::overflow("safe_rem"))
    }

    fn square_root(self) -> Result<f64> {
        if self.is_negative() {
            return Err(ExtError::invalid_value(
                "square_root",
                self,
                "Cannot take the square root of a negative number",
            ));
        }
        Ok(self.to_f64().sqrt())
    }

    fn factorial(self) -> Result<Self> {
        if self.is_negative() {
            return Err(ExtError::invalid_value(
                "factorial",
                self,
                "Factorial is undefined for negative numbers",
            ));
        }
        if !self.is_whole_number() {
            return Err(ExtError::invalid_value(
                "factorial",
                self,
                "Factorial is only defined for whole numbers",
            ));
        }

        let mut acc = Self::ONE;
        let mut i = Self::ONE;
        while i <= self {
            acc = acc
                .checked_mul(i)
                .ok_or_else(|| ExtError::overflow("factorial"))?;
            i = i + Self::ONE;
        }
        Ok(acc)
    }

    /// What percentage `self` is of `total`.
    fn percent_of(self, total: Self) -> Result<f64> {
        if total.is_zero() {
            return Err(ExtError::divide_by_zero("percent_of"));
        }
        Ok(self.to_f64() / total.to_f64() * 100.0)
    }

    /// `percent` percent of `self`.
    fn percentage(self, percent: f64) -> f64 {
        self.to_f64() * percent / 100.0
    }
}

impl<T: Numeric> NumericExt for T {}

pub trait IntegerExt: Sized {
    fn is_prime(self) -> bool;
    fn gcd(self, other: Self) -> Result<Self>;
    fn lcm(self, other: Self) -> Result<Self>;
    /// `123 -> 321`, `-120 -> -21`.
    fn reverse_digits(self) -> Result<Self>;
    fn digit_sum(self) -> u32;
    fn digit_count(self) -> u32;
    fn is_power_of_two(self) -> bool;
    fn to_ordinal(self) -> String;
    fn to_roman(self) -> Result<String>;
    /// Human-readable size of this many bytes.
    fn to_file_size(self) -> String;
    fn seconds(self) -> Result<TimeDelta>;
    fn minutes(self) -> Result<TimeDelta>;
    fn hours(self) -> Result<TimeDelta>;
    fn days(self) -> Result<TimeDelta>;
    fn weeks(self) -> Result<TimeDelta>;
}

macro_rules! impl_integer_ext {
    ($($t:ty),*) => {
        $(
            impl IntegerExt for $t {
                fn is_prime(self) -> bool {
                    is_prime_i128(self as i128)
                }

                fn gcd(self, other: Self) -> Result<Self> {
                    let g = gcd_i128(self as i128, other as i128);
                    <$t>::try_from(g).map_err(|_| ExtError::overflow("gcd"))
                }

                fn lcm(self, other: Self) -> Result<Self> {
                    let (a, b) = (self as i128, other as i128);
                    if a == 0 || b == 0 {
                        return Ok(0);
                    }
                    (a / gcd_i128(a, b))
                        .checked_mul(b)
                        .map(i128::unsigned_abs)
                        .and_then(|l| <$t>::try_from(l).ok())
                        .ok_or_else(|| ExtError::overflow("lcm"))
                }

                fn reverse_digits(self) -> Result<Self> {
                    let value = self as i128;
                    let reversed: i128 = value
                        .unsigned_abs()
                        .to_string()
                        .chars()
                        .rev()
                        .collect::<String>()
                        .parse()
                        .map_err(|_| ExtError::overflow("reverse_digits"))?;
                    let signed = if value < 0 { -reversed } else { reversed };
                    <$t>::try_from(signed).map_err(|_| ExtError::overflow("reverse_digits"))
                }

                fn digit_sum(self) -> u32 {
                    (self as i128)
                        .unsigned_abs()
                        .to_string()
                        .chars()
                        .filter_map(|c| c.to_digit(10))
                        .sum()
                }

                fn digit_count(self) -> u32 {
                    (self as i128).unsigned_abs().to_string().len() as u32
                }

                fn is_power_of_two(self) -> bool {
                    let value = self as i128;
                    value > 0 && value & (value - 1) == 0
                }

                fn to_ordinal(self) -> String {
                    ordinal_i128(self as i128)
                }

                fn to_roman(self) -> Result<String> {
                    roman_i128(self as i128)
                }

                fn to_file_size(self) -> String {
                    format_file_size(self as f64)
                }

                fn seconds(self) -> Result<TimeDelta> {
                    time_delta(self as i128, 1, "seconds")
                }

                fn minutes(self) -> Result<TimeDelta> {
                    time_delta(self as i128, 60, "minutes")
                }

                fn hours(self) -> Result<TimeDelta> {
                    time_delta(self as i128, 3_600, "hours")
                }

                fn days(self) -> Result<TimeDelta> {
                    time_delta(self as i128, 86_400, "days")
                }

                fn weeks(self) -> Result<TimeDelta> {
                    time_delta(self as i128, 604_800, "weeks")
                }
            }
        )*
    };
}

impl_integer_ext!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

pub trait FloatExt: Sized {
    fn round_to(self, decimals: u32) -> Self;
    fn approx_eq(self, other: Self, epsilon: Self) -> bool;
    /// Currency string using the process-wide locale settings.
    fn to_money_string(self) -> String;
    fn to_money_string_with(self, locale: &LocaleSettings) -> String;
    /// `0.256.to_percent_string(1) -> "25.6%"`.
    fn to_percent_string(self, decimals: usize) -> String;
}

macro_rules! impl_float_ext {
    ($($t:ty),*) => {
        $(
            impl FloatExt for $t {
                fn round_to(self, decimals: u32) -> Self {
                    let factor = (10 as $t).powi(decimals as i32);
                    (self * factor).round() / factor
                }

                fn approx_eq(self, other: Self, epsilon: Self) -> bool {
                    (self - other).abs() <= epsilon
                }

                fn to_money_string(self) -> String {
                    self.to_money_string_with(&Settings::current().locale)
                }

                fn to_money_string_with(self, locale: &LocaleSettings) -> String {
                    format_money(self as f64, locale)
                }

                fn to_percent_string(self, decimals: usize) -> String {
                    format!("{:.*}%", decimals, self as f64 * 100.0)
                }
            }
        )*
    };
}

impl_float_ext!(f32, f64);

/// Groups a run of ASCII `digits` with `separator` (`"1234567" -> "1,234,567"`).
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_money(value: f64, locale: &LocaleSettings) -> String {
    let fixed = format!("{:.*}", locale.currency_decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    // 四捨五入後為零時不顯示負號
    if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    out.push_str(&locale.currency_symbol);
    out.push_str(&group_thousands(integer, &locale.thousands_separator));
    if let Some(fraction) = fraction {
        out.push_str(&locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}

pub fn format_file_size(bytes: f64) -> String {
    let sign = if bytes < 0.0 { "-" } else { "" };
    let mut size = bytes.abs();
    let mut unit = 0;
    while size >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", size);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}{} {}", sign, trimmed, FILE_SIZE_UNITS[unit])
}

fn is_prime_i128(value: i128) -> bool {
    if value < 2 {
        return false;
    }
    if value < 4 {
        return true;
    }
    if value % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

fn gcd_i128(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn ordinal_i128(value: i128) -> String {
    let magnitude = value.unsigned_abs();
    let suffix = match (magnitude % 10, magnitude % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", value, suffix)
}

fn roman_i128(value: i128) -> Result<String> {
    if !(1..=3999).contains(&value) {
        return Err(ExtError::invalid_value(
            "to_roman",
            value,
            "Roman numerals are defined for 1 through 3999",
        ));
    }

    let mut remaining = value;
    let mut out = String::new();
    for (amount, numeral) in ROMAN_NUMERALS {
        while remaining >= amount {
            out.push_str(numeral);
            remaining -= amount;
        }
    }
    Ok(out)
}

fn time_delta(value: i128, unit_seconds: i128, operation: &str) -> Result<TimeDelta> {
    value
        .checked_mul(unit_seconds)
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| ExtError::overflow(operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_abs() {
        assert_eq!((-5i32).sign(), -1);
        assert_eq!(0u8.sign(), 0);
        assert_eq!(2.5f64.sign(), 1);
        assert_eq!((-7i64).abs_value().unwrap(), 7);
        assert_eq!((-1.5f32).abs_value().unwrap(), 1.5);
        assert_eq!(i32::MAX.abs_value().unwrap(), i32::MAX);
        assert!(matches!(
            i32::MIN.abs_value(),
            Err(ExtError::OverflowError { .. })
        ));
    }

    #[test]
    fn test_clamp_square_power() {
        assert_eq!(15i32.clamp_between(0, 10), 10);
        assert_eq!((-3i32).clamp_between(0, 10), 0);
        assert_eq!(4u16.square().unwrap(), 16);
        assert_eq!(3i32.cube().unwrap(), 27);
        assert_eq!(2u32.power(10).unwrap(), 1024);
        assert_eq!(5i32.power(0).unwrap(), 1);
    }

    #[test]
    fn test_square_power_overflow() {
        assert!(matches!(200u8.square(), Err(ExtError::OverflowError { .. })));
        assert!(matches!(7u8.cube(), Err(ExtError::OverflowError { .. })));
        assert!(matches!(10i32.power(10), Err(ExtError::OverflowError { .. })));
        assert!(f64::MAX.square().is_err());
        assert_eq!(10i64.power(10).unwrap(), 10_000_000_000);
    }

    #[test]
    fn test_even_odd() {
        assert!(4i32.is_even());
        assert!((-3i32).is_odd());
        assert!(!2.5f64.is_even());
        assert!(!2.5f64.is_odd());
        assert!(3.0f64.is_odd());
        assert!(i32::MIN.is_even());
        assert!(!i32::MIN.is_odd());
        assert!(i32::MAX.is_odd());
        assert!(u8::MAX.is_odd());
    }

    #[test]
    fn test_safe_division() {
        assert_eq!(10i32.safe_div(3).unwrap(), 3);
        assert_eq!(10i32.safe_rem(3).unwrap(), 1);
        assert!(matches!(
            10i32.safe_div(0),
            Err(ExtError::DivideByZeroError { .. })
        ));
        assert!(matches!(
            1.0f64.safe_rem(0.0),
            Err(ExtError::DivideByZeroError { .. })
        ));
    }

    #[test]
    fn test_safe_division_min_by_minus_one() {
        assert!(matches!(
            i32::MIN.safe_div(-1),
            Err(ExtError::OverflowError { .. })
        ));
        assert!(matches!(
            i64::MIN.safe_rem(-1),
            Err(ExtError::OverflowError { .. })
        ));
        assert_eq!(i32::MIN.safe_div(1).unwrap(), i32::MIN);
        assert_eq!((-7i32).safe_rem(2).unwrap(), -1);
    }

    #[test]
    fn test_square_root() {
        assert_eq!(16u32.square_root().unwrap(), 4.0);
        assert!(matches!(
            (-1i32).square_root(),
            Err(ExtError::InvalidValueError { .. })
        ));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(0u32.factorial().unwrap(), 1);
        assert_eq!(5i32.factorial().unwrap(), 120);
        assert_eq!(5.0f64.factorial().unwrap(), 120.0);
        assert!(matches!(
            (-1i32).factorial(),
            Err(ExtError::InvalidValueError { .. })
        ));
        assert!(matches!(
            2.5f64.factorial(),
            Err(ExtError::InvalidValueError { .. })
        ));
        assert!(matches!(
            6u8.factorial(),
            Err(ExtError::OverflowError { .. })
        ));
    }

    #[test]
    fn test_percentages() {
        assert_eq!(25u32.percent_of(200).unwrap(), 12.5);
        assert!(5i32.percent_of(0).is_err());
        assert_eq!(200i32.percentage(15.0), 30.0);
    }

    #[test]
    fn test_primes_and_divisors() {
        let primes: Vec<u32> = (0..30u32).filter(|n| n.is_prime()).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!(-7i32).is_prime());
        assert_eq!(12i32.gcd(18).unwrap(), 6);
        assert_eq!((-12i32).gcd(18).unwrap(), 6);
        assert_eq!(4u8.lcm(6).unwrap(), 12);
        assert_eq!(0i32.lcm(6).unwrap(), 0);
        assert!(200u8.lcm(3).is_err());
        assert_eq!(u64::MAX.lcm(1).unwrap(), u64::MAX);
        assert!(matches!(
            u64::MAX.lcm(u64::MAX - 1),
            Err(ExtError::OverflowError { .. })
        ));
        assert!(matches!(
            i64::MIN.lcm(i64::MIN + 1),
            Err(ExtError::OverflowError { .. })
        ));
    }

    #[test]
    fn test_digits() {
        assert_eq!(123i32.reverse_digits().unwrap(), 321);
        assert_eq!((-120i32).reverse_digits().unwrap(), -21);
        assert!(255u8.reverse_digits().is_err());
        assert_eq!(9875u32.digit_sum(), 29);
        assert_eq!((-405i64).digit_sum(), 9);
        assert_eq!(0u8.digit_count(), 1);
        assert_eq!(12345usize.digit_count(), 5);
    }

    #[test]
    fn test_power_of_two() {
        assert!(IntegerExt::is_power_of_two(64i32));
        assert!(!IntegerExt::is_power_of_two(0i32));
        assert!(!IntegerExt::is_power_of_two(-8i32));
        assert!(!IntegerExt::is_power_of_two(12u64));
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(1i32.to_ordinal(), "1st");
        assert_eq!(2i32.to_ordinal(), "2nd");
        assert_eq!(3i32.to_ordinal(), "3rd");
        assert_eq!(4i32.to_ordinal(), "4th");
        assert_eq!(11i32.to_ordinal(), "11th");
        assert_eq!(12i32.to_ordinal(), "12th");
        assert_eq!(13i32.to_ordinal(), "13th");
        assert_eq!(21i32.to_ordinal(), "21st");
        assert_eq!(112u32.to_ordinal(), "112th");
    }

    #[test]
    fn test_roman() {
        assert_eq!(1994i32.to_roman().unwrap(), "MCMXCIV");
        assert_eq!(3999u32.to_roman().unwrap(), "MMMCMXCIX");
        assert!(0i32.to_roman().is_err());
        assert!(4000i32.to_roman().is_err());
    }

    #[test]
    fn test_file_size() {
        assert_eq!(0u64.to_file_size(), "0 B");
        assert_eq!(512u64.to_file_size(), "512 B");
        assert_eq!(1024u64.to_file_size(), "1 KB");
        assert_eq!(1536u64.to_file_size(), "1.5 KB");
        assert_eq!((5 * 1024 * 1024u64).to_file_size(), "5 MB");
    }

    #[test]
    fn test_time_units() {
        assert_eq!(90i32.seconds().unwrap(), TimeDelta::seconds(90));
        assert_eq!(2i64.hours().unwrap(), TimeDelta::minutes(120));
        assert_eq!(1u8.weeks().unwrap(), TimeDelta::days(7));
        assert!(i64::MAX.days().is_err());
    }

    #[test]
    fn test_float_helpers() {
        assert_eq!(3.14159f64.round_to(2), 3.14);
        assert!(0.1f64.approx_eq(0.1000001, 1e-6));
        assert!(!0.1f64.approx_eq(0.2, 1e-6));
        assert_eq!(0.256f64.to_percent_string(1), "25.6%");
        assert_eq!(0.256f64.to_percent_string(0), "26%");
        assert_eq!(0.5f32.to_percent_string(2), "50.00%");
    }

    #[test]
    fn test_money_formatting() {
        let en_us = LocaleSettings::default();
        assert_eq!(1234567.891f64.to_money_string_with(&en_us), "$1,234,567.89");
        assert_eq!((-42.5f64).to_money_string_with(&en_us), "-$42.50");
        assert_eq!((-0.001f64).to_money_string_with(&en_us), "$0.00");

        let de = LocaleSettings {
            currency_symbol: "€".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..LocaleSettings::default()
        };
        assert_eq!(1234.5f32.to_money_string_with(&de), "€1.234,50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("1234567", " "), "1 234 567");
    }
}
