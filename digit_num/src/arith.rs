//! Digit-wise arithmetic on [`DigitList`]s.
//!
//! Every function is pure: arguments are borrowed and never modified, results
//! are freshly built lists. Results are not trimmed, so zero digits that
//! alignment introduced at the most significant end stay in place
//! (see [`DigitList::trim_zeros`]).

use tracing::{debug_span, trace};

use crate::{Digit, DigitError, DigitList};

/// 检查 base 是否 >= 2
pub(crate) fn check_base<D: Digit>(base: D) -> Result<(), DigitError> {
    if base < D::TWO {
        return Err(DigitError::InvalidBase(base.to_i128()));
    }
    Ok(())
}

/// 负数位报错, 否则扩展到 u128
#[inline(always)]
fn widen<D: Digit>(value: D, position: usize) -> Result<u128, DigitError> {
    let value = check_digit(value, position)?;
    value.to_u128().ok_or(DigitError::NegativeDigit { position, value: value.to_i128() })
}

#[inline(always)]
fn check_digit<D: Digit>(value: D, position: usize) -> Result<D, DigitError> {
    if value.is_negative() {
        return Err(DigitError::NegativeDigit { position, value: value.to_i128() });
    }
    Ok(value)
}

/// Reduces every raw value into `[0, base)`, keeping the digit order.
///
/// Negative values are rejected, the reduction is only defined for `value >= 0`.
pub fn mod_n<D: Digit>(list: &DigitList<D>, base: D) -> Result<DigitList<D>, DigitError> {
    check_base(base)?;
    let _span = debug_span!("mod_n", len = list.length(), base = %base).entered();

    let mut digits = Vec::with_capacity(list.length());
    for (position, &value) in list.iter().enumerate() {
        let value = check_digit(value, position)?;
        digits.push(value.div_rem(base).1);
    }
    Ok(DigitList::from_digits(digits))
}

/// Aligns two lists position by position from the least significant digit.
/// The shorter one is padded with zeros at its most significant end, so the
/// result is `max(l1.length(), l2.length())` long.
pub fn pair<D: Digit>(l1: &DigitList<D>, l2: &DigitList<D>) -> DigitList<(D, D)> {
    let len = l1.length().max(l2.length());
    let left = l1.pad_to(len);
    let right = l2.pad_to(len);
    left.iter().copied().zip(right.iter().copied()).collect()
}

/// `a + b` in `base`.
///
/// Carries propagate from the least significant position; a carry left over
/// after the last position becomes one more digit.
pub fn plus<D: Digit>(a: &DigitList<D>, b: &DigitList<D>, base: D) -> Result<DigitList<D>, DigitError> {
    check_base(base)?;
    let _span = debug_span!("plus", a_len = a.length(), b_len = b.length(), base = %base).entered();

    let radix = base.to_u128().ok_or(DigitError::InvalidBase(base.to_i128()))?;
    let aligned = pair(a, b);
    let mut digits = Vec::with_capacity(aligned.length() + 1);
    // 在 u128 中累加, 两个 D::MAX 加上进位也不会溢出
    let mut carry: u128 = 0;
    for (position, &(v1, v2)) in aligned.iter().enumerate() {
        let v1 = widen(v1, position)?;
        let v2 = widen(v2, position)?;
        let sum = v1 + v2 + carry;
        let digit = D::from_u128(sum % radix).ok_or(DigitError::Overflow { position })?;
        digits.push(digit);
        carry = sum / radix;
    }

    if carry != 0 {
        trace!(carry = %carry, "carry out of the most significant digit");
        let position = digits.len();
        digits.push(D::from_u128(carry).ok_or(DigitError::Overflow { position })?);
    }
    Ok(DigitList::from_digits(digits))
}

/// `a * n` in `base`, computed as `n` additions onto a single zero digit.
///
/// O(n * a.length()), only meant for small multipliers.
pub fn mult<D: Digit>(a: &DigitList<D>, n: D, base: D) -> Result<DigitList<D>, DigitError> {
    check_base(base)?;
    let times = n.to_u128().ok_or(DigitError::NegativeMultiplier(n.to_i128()))?;
    let _span = debug_span!("mult", len = a.length(), n = %n, base = %base).entered();

    let mut acc = DigitList::from_digits([D::ZERO]);
    for step in 0..times {
        acc = plus(&acc, a, base)?;
        trace!(step = %step, len = acc.length(), "repeated add");
    }
    Ok(acc)
}

#[cfg(test)]
fn list_of(values: &[i64]) -> DigitList<i64> {
    DigitList::from_digits(values.iter().copied())
}

#[test]
fn test_mod_n() {
    let raw = list_of(&[5, 6, 12, 4, 88, 38, 0]);
    let reduced = mod_n(&raw, 10).unwrap();
    assert_eq!(reduced.to_vec(), vec![5, 6, 2, 4, 8, 8, 0]);
    assert_eq!(reduced.length(), raw.length());
    // idempotent
    assert_eq!(mod_n(&reduced, 10).unwrap(), reduced);

    let reduced = mod_n(&raw, 99).unwrap();
    assert_eq!(mod_n(&reduced, 99).unwrap(), reduced);
    assert!(mod_n(&DigitList::<i64>::new(), 10).unwrap().is_empty());
}

#[test]
fn test_mod_n_rejects_negative() {
    let raw = list_of(&[3, -1, 4]);
    let err = mod_n(&raw, 10).unwrap_err();
    assert_eq!(err, DigitError::NegativeDigit { position: 1, value: -1 });
    assert!(err.is_invalid_input());
}

#[test]
fn test_pair() {
    let short = list_of(&[1]);
    let long = list_of(&[4, 5, 6]);
    let paired = pair(&short, &long);
    assert_eq!(paired.to_vec(), vec![(1, 4), (0, 5), (0, 6)]);
    // arguments stay as they were
    assert_eq!(short.to_vec(), vec![1]);
    assert_eq!(long.length(), 3);

    let empty = DigitList::<i64>::new();
    for (l1, l2) in [(&short, &long), (&long, &short), (&empty, &long), (&empty, &empty)] {
        assert_eq!(pair(l1, l2).length(), l1.length().max(l2.length()));
    }
}

#[test]
fn test_plus() {
    let five = list_of(&[5]);
    let seven = list_of(&[7]);
    assert_eq!(plus(&five, &seven, 10).unwrap().to_vec(), vec![2, 1]);

    // 999 + 1
    let a = list_of(&[9, 9, 9]);
    let b = list_of(&[1]);
    let sum = plus(&a, &b, 10).unwrap();
    assert_eq!(sum.to_vec(), vec![0, 0, 0, 1]);
    assert_eq!(b.length(), 1);

    // padding zeros are kept
    let sum = plus(&list_of(&[1, 0, 0]), &list_of(&[1]), 10).unwrap();
    assert_eq!(sum.to_vec(), vec![2, 0, 0]);
    assert_eq!(sum.trim_zeros().to_vec(), vec![2]);
}

#[test]
fn test_plus_empty() {
    let empty = DigitList::<i64>::new();
    let a = list_of(&[3, 2, 1]);
    assert_eq!(plus(&empty, &a, 10).unwrap(), a);
    assert_eq!(plus(&a, &empty, 10).unwrap(), a);
    assert!(plus(&empty, &empty, 10).unwrap().is_empty());
}

#[test]
fn test_plus_decode() {
    for base in [2_i64, 3, 7, 10, 16, 99] {
        for a in (0..300_u128).step_by(7) {
            for b in (0..300_u128).step_by(11) {
                let la = DigitList::encode(a, base).unwrap();
                let lb = DigitList::encode(b, base).unwrap();
                let sum = plus(&la, &lb, base).unwrap();
                assert_eq!(sum.decode(base), Some(a + b), "base = {}, {} + {}", base, a, b);
            }
        }
    }
}

#[test]
fn test_plus_errors() {
    let a = list_of(&[1, 2]);
    assert_eq!(plus(&a, &a, 1), Err(DigitError::InvalidBase(1)));
    assert_eq!(plus(&a, &a, -10), Err(DigitError::InvalidBase(-10)));
    let negative = list_of(&[1, -2]);
    assert_eq!(
        plus(&a, &negative, 10),
        Err(DigitError::NegativeDigit { position: 1, value: -2 })
    );

    // raw values can push the final carry past the digit type
    let raw = DigitList::from_digits([255_u8, 255]);
    assert_eq!(plus(&raw, &raw, 2), Err(DigitError::Overflow { position: 2 }));
}

#[test]
fn test_plus_large_base() {
    let a = DigitList::from_digits([199_u8]);
    assert_eq!(plus(&a, &a, 200).unwrap().to_vec(), vec![198, 1]);

    let raw = DigitList::from_digits([200_u8]);
    assert_eq!(plus(&raw, &raw, 250).unwrap().to_vec(), vec![150, 1]);

    let top = DigitList::from_digits([i64::MAX - 1, i64::MAX - 1]);
    let sum = plus(&top, &top, i64::MAX).unwrap();
    assert_eq!(sum.to_vec(), vec![i64::MAX - 2, i64::MAX - 1, 1]);

    let top = DigitList::from_digits([u64::MAX - 1]);
    let product = mult(&top, 3, u64::MAX).unwrap();
    assert_eq!(product.to_vec(), vec![u64::MAX - 3, 2]);
}

#[test]
fn test_mult() {
    let ninety_nine = list_of(&[9, 9]);
    let product = mult(&ninety_nine, 3, 10).unwrap();
    assert_eq!(product.decode(10), Some(297));
    assert_eq!(product.to_vec(), vec![7, 9, 2]);
    assert_eq!(ninety_nine.to_vec(), vec![9, 9]);

    assert_eq!(mult(&ninety_nine, 0, 10).unwrap().decode(10), Some(0));
    assert_eq!(mult(&DigitList::new(), 5, 10).unwrap().to_vec(), vec![0]);
}

#[test]
fn test_mult_decode() {
    for base in [2_u32, 10, 16] {
        for a in [0_u128, 1, 9, 99, 12345] {
            let la = DigitList::encode(a, base).unwrap();
            for n in 0..=40_u32 {
                let product = mult(&la, n, base).unwrap();
                assert_eq!(product.decode(base), Some(a * n as u128), "base = {}, {} * {}", base, a, n);
            }
        }
    }
}

#[test]
fn test_mult_errors() {
    let a = list_of(&[1]);
    let err = mult(&a, -1, 10).unwrap_err();
    assert_eq!(err, DigitError::NegativeMultiplier(-1));
    assert!(err.is_invalid_input());
    assert_eq!(mult(&a, 2, 0), Err(DigitError::InvalidBase(0)));
}
