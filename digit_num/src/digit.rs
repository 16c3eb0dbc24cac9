use std::fmt::{Debug, Display};

/// A primitive integer usable as one position of a [`DigitList`](crate::DigitList).
///
/// Raw values may lie anywhere in the integer's range; only the arithmetic
/// in [`arith`](crate::arith) requires them to be non-negative.
pub trait Digit: Copy + Ord + Debug + Display {
    const ZERO: Self;
    /// Smallest usable base.
    const TWO: Self;

    fn is_negative(self) -> bool;
    /// Quotient and remainder of a non-negative value by a positive base.
    fn div_rem(self, base: Self) -> (Self, Self);
    fn to_i128(self) -> i128;
    /// 负数返回 `None`，非负数可以无损扩展到 u128
    fn to_u128(self) -> Option<u128>;
    /// `None` if `val` does not fit.
    fn from_u128(val: u128) -> Option<Self>;
}

macro_rules! impl_unsigned_digit {
    ($($u: ty),*) => {
    $(
    impl Digit for $u {
        const ZERO: Self = 0;
        const TWO: Self = 2;

        #[inline(always)]
        fn is_negative(self) -> bool {
            false
        }
        #[inline(always)]
        fn div_rem(self, base: Self) -> (Self, Self) {
            (self / base, self % base)
        }
        fn to_i128(self) -> i128 {
            self as i128
        }
        fn to_u128(self) -> Option<u128> {
            Some(self as u128)
        }
        fn from_u128(val: u128) -> Option<Self> {
            <$u>::try_from(val).ok()
        }
    }
    )*
    };
}

macro_rules! impl_signed_digit {
    ($($i: ty),*) => {
    $(
    impl Digit for $i {
        const ZERO: Self = 0;
        const TWO: Self = 2;

        #[inline(always)]
        fn is_negative(self) -> bool {
            self < 0
        }
        #[inline(always)]
        fn div_rem(self, base: Self) -> (Self, Self) {
            (self / base, self % base)
        }
        fn to_i128(self) -> i128 {
            self as i128
        }
        fn to_u128(self) -> Option<u128> {
            u128::try_from(self).ok()
        }
        fn from_u128(val: u128) -> Option<Self> {
            <$i>::try_from(val).ok()
        }
    }
    )*
    };
}

impl_unsigned_digit!(u8, u16, u32, usize, u64);
impl_signed_digit!(i8, i16, i32, isize, i64);

#[test]
fn test_div_rem() {
    assert_eq!(Digit::div_rem(27_i64, 10), (2, 7));
    assert_eq!(Digit::div_rem(9_u8, 10), (0, 9));
    assert_eq!(Digit::div_rem(100_u32, 10), (10, 0));
}

#[test]
fn test_conversions() {
    assert!((-3_i32).is_negative());
    assert!(!0_i32.is_negative());
    assert_eq!((-3_i16).to_u128(), None);
    assert_eq!(300_u128, 300_u16.to_u128().unwrap());
    assert_eq!(<u8 as Digit>::from_u128(256), None);
    assert_eq!(<i8 as Digit>::from_u128(127), Some(127));
    assert_eq!(<i64 as Digit>::from_u128(u64::MAX as u128), None);
}
