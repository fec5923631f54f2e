use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Rem, Sub};

/// Arithmetic surface shared by every primitive numeric type.
///
/// The generic helpers in [`crate::ext::numeric`] are written once against
/// this trait and instantiated for each integer and float type.
pub trait Numeric:
    Copy
    + PartialOrd
    + Display
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn to_f64(self) -> f64;

    /// Multiplication that reports overflow instead of wrapping or producing infinity.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `None` when the quotient is not representable (`MIN / -1`) or the divisor is zero.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    fn checked_rem(self, rhs: Self) -> Option<Self>;

    /// `None` for `MIN` of signed types and for any non-zero unsigned value.
    fn checked_neg(self) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }

                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_rem(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    let product = self * rhs;
                    if product.is_finite() {
                        Some(product)
                    } else {
                        None
                    }
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    if rhs == 0.0 {
                        None
                    } else {
                        Some(self / rhs)
                    }
                }

                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    if rhs == 0.0 {
                        None
                    } else {
                        Some(self % rhs)
                    }
                }

                fn checked_neg(self) -> Option<Self> {
                    Some(-self)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_mul_reports_overflow() {
        assert_eq!(Numeric::checked_mul(100u8, 2), Some(200));
        assert_eq!(Numeric::checked_mul(200u8, 2), None);
        assert_eq!(Numeric::checked_mul(f32::MAX, 2.0), None);
        assert_eq!(Numeric::checked_mul(1.5f64, 2.0), Some(3.0));
    }

    #[test]
    fn test_checked_div_rem_neg() {
        assert_eq!(Numeric::checked_div(i32::MIN, -1), None);
        assert_eq!(Numeric::checked_rem(i64::MIN, -1), None);
        assert_eq!(Numeric::checked_div(7i32, 2), Some(3));
        assert_eq!(Numeric::checked_div(1.0f64, 0.0), None);
        assert_eq!(Numeric::checked_neg(i8::MIN), None);
        assert_eq!(Numeric::checked_neg(0u8), Some(0));
        assert_eq!(Numeric::checked_neg(3u8), None);
        assert_eq!(Numeric::checked_neg(2.5f32), Some(-2.5));
    }
}
