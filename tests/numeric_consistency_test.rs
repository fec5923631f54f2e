use extkit::prelude::*;
use extkit::ExtError;

/// 同一組檢查套用在所有數值型別上，確認泛型實作行為一致
fn check_numeric<T: Numeric + NumericExt>() {
    let two = T::ONE + T::ONE;
    let three = two + T::ONE;
    let six = two * three;

    assert!(T::ZERO.is_zero());
    assert!(three.is_positive());
    assert_eq!(three.sign(), 1);
    assert_eq!(T::ZERO.sign(), 0);

    assert!(six.is_even());
    assert!(three.is_odd());
    assert!(three.is_whole_number());
    assert_eq!(two.square().unwrap(), two + two);
    assert_eq!(two.cube().unwrap(), six + two);
    assert_eq!(two.power(3).unwrap(), six + two);
    assert_eq!(two.power(0).unwrap(), T::ONE);
    assert_eq!(three.abs_value().unwrap(), three);
    assert_eq!(six.clamp_between(two, three), three);
    assert_eq!(T::ONE.clamp_between(two, three), two);

    assert_eq!(six.safe_div(two).unwrap(), three);
    assert!(matches!(
        six.safe_div(T::ZERO),
        Err(ExtError::DivideByZeroError { .. })
    ));
    assert!(six.safe_rem(T::ZERO).is_err());

    assert_eq!(three.factorial().unwrap(), six);
    assert_eq!(T::ZERO.factorial().unwrap(), T::ONE);
    assert_eq!(three.percent_of(six).unwrap(), 50.0);
    assert_eq!(six.percentage(50.0), 3.0);
    assert!((two.square_root().unwrap() - std::f64::consts::SQRT_2).abs() < 1e-12);
}

fn check_signed<T: Numeric + NumericExt>() {
    let minus_three = T::ZERO - (T::ONE + T::ONE + T::ONE);
    assert!(minus_three.is_negative());
    assert_eq!(minus_three.sign(), -1);
    assert_eq!(minus_three.abs_value().unwrap(), T::ONE + T::ONE + T::ONE);
    assert_eq!(minus_three.square().unwrap(), minus_three * minus_three);
    assert_eq!(minus_three.safe_div(T::ZERO - T::ONE).unwrap(), T::ONE + T::ONE + T::ONE);
    assert!(minus_three.is_odd());
    assert!(minus_three.square_root().is_err());
    assert!(matches!(
        minus_three.factorial(),
        Err(ExtError::InvalidValueError { .. })
    ));
}

macro_rules! numeric_tests {
    ($($name:ident: $t:ty => $check:ident),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                $check::<$t>();
            }
        )*
    };
}

numeric_tests! {
    common_i8: i8 => check_numeric,
    common_i16: i16 => check_numeric,
    common_i32: i32 => check_numeric,
    common_i64: i64 => check_numeric,
    common_isize: isize => check_numeric,
    common_u8: u8 => check_numeric,
    common_u16: u16 => check_numeric,
    common_u32: u32 => check_numeric,
    common_u64: u64 => check_numeric,
    common_usize: usize => check_numeric,
    common_f32: f32 => check_numeric,
    common_f64: f64 => check_numeric,
    signed_i8: i8 => check_signed,
    signed_i16: i16 => check_signed,
    signed_i32: i32 => check_signed,
    signed_i64: i64 => check_signed,
    signed_isize: isize => check_signed,
    signed_f32: f32 => check_signed,
    signed_f64: f64 => check_signed,
}

#[test]
fn test_factorial_overflow_is_reported() {
    assert!(matches!(6u8.factorial(), Err(ExtError::OverflowError { .. })));
    assert_eq!(5u8.factorial().unwrap(), 120);
    assert!(matches!(21i64.factorial(), Err(ExtError::OverflowError { .. })));
    assert!(matches!(2.5f64.factorial(), Err(ExtError::InvalidValueError { .. })));
}

#[test]
fn test_min_values_report_overflow() {
    assert!(matches!(i8::MIN.safe_div(-1), Err(ExtError::OverflowError { .. })));
    assert!(matches!(isize::MIN.safe_rem(-1), Err(ExtError::OverflowError { .. })));
    assert!(matches!(i16::MIN.abs_value(), Err(ExtError::OverflowError { .. })));
    assert!(matches!(u16::MAX.square(), Err(ExtError::OverflowError { .. })));
}

#[test]
fn test_integer_and_float_helpers_together() {
    assert_eq!(1_536u64.to_file_size(), "1.5 KB");
    assert_eq!(2024u32.to_roman().unwrap(), "MMXXIV");
    assert_eq!(22i32.to_ordinal(), "22nd");
    assert_eq!(3.14159f64.round_to(2), 3.14);
    assert_eq!(0.256f64.to_percent_string(1), "25.6%");
}
