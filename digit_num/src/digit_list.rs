//! # DigitList
//! A non-negative integer in a fixed base, stored as a singly-linked chain of digits.
//! The head is the least significant digit.
//! # Example
//! ```
//! use digit_num::DigitList;
//!
//! let mut list: DigitList<i64> = DigitList::new();
//! list.add(1);
//! list.add(2);
//! assert_eq!(list.length(), 2);
//! assert_eq!(list.to_string(), "2, 1");
//! assert_eq!(list.decode(10), Some(12));
//! ```

use std::fmt::{Debug, Display};

use crate::arith::check_base;
use crate::{Digit, DigitError};

struct Node<T> {
    value: T,
    /// Number of nodes from this one to the end of the chain.
    len: usize,
    next: Option<Box<Node<T>>>,
}

pub struct DigitList<T> {
    head: Option<Box<Node<T>>>,
}

// 实现构造
impl<T> DigitList<T> {
    pub const fn new() -> Self {
        DigitList { head: None }
    }

    /// O(1), read from the head.
    pub fn length(&self) -> usize {
        self.head.as_ref().map_or(0, |node| node.len)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes a raw value in front of the head. No base is applied here.
    pub fn prepend(&mut self, value: T) {
        let len = self.length() + 1;
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, len, next }));
    }

    /// Same as [`DigitList::prepend`]: the new value becomes the least significant digit.
    pub fn add(&mut self, value: T) {
        self.prepend(value);
    }

    /// Builds a list whose head is the first value yielded.
    pub fn from_digits<I: IntoIterator<Item = T>>(digits: I) -> Self {
        let digits: Vec<T> = digits.into_iter().collect();
        let mut list = DigitList::new();
        for value in digits.into_iter().rev() {
            list.prepend(value);
        }
        list
    }

    /// Builds a list by `add`ing every value in order, so the last value ends up as the head.
    pub fn from_raw_msd_first<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = DigitList::new();
        for value in values {
            list.add(value);
        }
        list
    }
}

impl<T> Default for DigitList<T> {
    fn default() -> Self {
        DigitList::new()
    }
}

impl<T> FromIterator<T> for DigitList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DigitList::from_digits(iter)
    }
}

impl<T> Drop for DigitList<T> {
    fn drop(&mut self) {
        // unlink node by node, a recursive drop would blow the stack on long chains
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: Clone> Clone for DigitList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// 实现遍历
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a DigitList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> DigitList<T> {
    /// Least to most significant.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref(), remaining: self.length() }
    }

    /// Calls `f` on every value, head to tail. Every call starts again from the head.
    pub fn forall<F: FnMut(&T)>(&self, mut f: F) {
        for value in self.iter() {
            f(value);
        }
    }
}

impl<T: Clone> DigitList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DigitList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length() == other.length() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for DigitList<T> {}

// 实现打印
impl<T: Display> Display for DigitList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for DigitList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// 实现数值转换
impl<D: Digit> DigitList<D> {
    /// Copy of `self` with zero digits appended at the most significant end
    /// until it is `target` digits long. Longer lists come back unchanged.
    pub fn pad_to(&self, target: usize) -> DigitList<D> {
        let missing = target.saturating_sub(self.length());
        self.iter()
            .copied()
            .chain(std::iter::repeat(D::ZERO).take(missing))
            .collect()
    }

    /// Copy of `self` without redundant most significant zeros. At least one digit is kept.
    pub fn trim_zeros(&self) -> DigitList<D> {
        let mut digits = self.to_vec();
        while digits.len() > 1 && digits.last() == Some(&D::ZERO) {
            digits.pop();
        }
        DigitList::from_digits(digits)
    }

    /// Little-endian digits of `value`. Zero is the single digit `[0]`.
    pub fn encode(mut value: u128, base: D) -> Result<DigitList<D>, DigitError> {
        check_base(base)?;
        let radix = base.to_u128().ok_or(DigitError::InvalidBase(base.to_i128()))?;
        let mut digits = Vec::new();
        loop {
            let position = digits.len();
            let digit = D::from_u128(value % radix).ok_or(DigitError::Overflow { position })?;
            digits.push(digit);
            value /= radix;
            if value == 0 {
                break;
            }
        }
        Ok(DigitList::from_digits(digits))
    }

    /// Value of the list in `base`. `None` if a digit is outside `[0, base)`,
    /// the base is below 2, or the value does not fit in a `u128`.
    /// The empty list decodes to zero.
    pub fn decode(&self, base: D) -> Option<u128> {
        let radix = base.to_u128()?;
        if radix < 2 {
            return None;
        }
        let digits = self.to_vec();
        digits.iter().rev().try_fold(0_u128, |acc, digit| {
            let digit = digit.to_u128()?;
            if digit >= radix {
                return None;
            }
            acc.checked_mul(radix)?.checked_add(digit)
        })
    }
}

#[cfg(test)]
impl<T> DigitList<T> {
    /// 检查每个节点的 len 是否等于后继的 len + 1
    fn lengths_consistent(&self) -> bool {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            let expected = n.next.as_ref().map_or(1, |next| next.len + 1);
            if n.len != expected {
                return false;
            }
            node = n.next.as_deref();
        }
        true
    }
}

#[test]
fn test_add_length() {
    let mut list: DigitList<i64> = DigitList::new();
    assert_eq!(list.length(), 0);
    assert!(list.is_empty());
    list.add(3);
    list.add(-4);
    list.add(250);
    assert_eq!(list.length(), 3);
    assert_eq!(list.to_vec(), vec![250, -4, 3]);
    assert!(list.lengths_consistent());
}

#[test]
fn test_forall_order() {
    let list = DigitList::from_digits(vec![1_u8, 2, 3]);
    let mut seen = Vec::new();
    list.forall(|v| seen.push(*v));
    assert_eq!(seen, vec![1, 2, 3]);
    // a second traversal starts from the head again
    let mut sum = 0;
    list.forall(|v| sum += *v);
    assert_eq!(sum, 6);
    assert_eq!(list.iter().len(), 3);
}

#[test]
fn test_clone_independent() {
    let original = DigitList::from_digits(vec![4_i32, 5, 6]);
    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert!(copy.lengths_consistent());
    copy.add(9);
    assert_eq!(original.length(), 3);
    assert_eq!(original.to_vec(), vec![4, 5, 6]);
    assert_eq!(copy.to_vec(), vec![9, 4, 5, 6]);
}

#[test]
fn test_from_raw_msd_first() {
    let list = DigitList::from_raw_msd_first(vec![5_i64, 6, 12]);
    assert_eq!(list.to_vec(), vec![12, 6, 5]);
    assert!(list.lengths_consistent());
}

#[test]
fn test_display() {
    let list = DigitList::from_digits(vec![2_i64, 1]);
    assert_eq!(list.to_string(), "2, 1");
    assert_eq!(format!("{:?}", list), "[2, 1]");
    assert_eq!(DigitList::<i64>::new().to_string(), "");
}

#[test]
fn test_pad_to() {
    let list = DigitList::from_digits(vec![7_u32, 1]);
    let padded = list.pad_to(4);
    assert_eq!(padded.to_vec(), vec![7, 1, 0, 0]);
    assert!(padded.lengths_consistent());
    assert_eq!(list.length(), 2);
    assert_eq!(list.pad_to(1), list);
    assert_eq!(DigitList::<u32>::new().pad_to(2).to_vec(), vec![0, 0]);
}

#[test]
fn test_trim_zeros() {
    let list = DigitList::from_digits(vec![3_i64, 0, 0]);
    assert_eq!(list.trim_zeros().to_vec(), vec![3]);
    let zero = DigitList::from_digits(vec![0_i64, 0]);
    assert_eq!(zero.trim_zeros().to_vec(), vec![0]);
    assert!(DigitList::<i64>::new().trim_zeros().is_empty());
}

#[test]
fn test_encode_decode() {
    let list = DigitList::encode(297, 10_i64).unwrap();
    assert_eq!(list.to_vec(), vec![7, 9, 2]);
    assert_eq!(list.decode(10), Some(297));
    assert_eq!(DigitList::encode(0, 10_i64).unwrap().to_vec(), vec![0]);
    assert_eq!(DigitList::encode(5, 2_u8).unwrap().to_vec(), vec![1, 0, 1]);
    assert_eq!(DigitList::<i64>::new().decode(10), Some(0));
    // out of range digit
    assert_eq!(DigitList::from_digits(vec![12_i64]).decode(10), None);
    assert_eq!(DigitList::encode(5, 1_i64), Err(DigitError::InvalidBase(1)));
}

#[test]
fn test_long_chain() {
    let list: DigitList<u8> = std::iter::repeat(9).take(200_000).collect();
    let copy = list.clone();
    assert_eq!(copy.length(), 200_000);
    drop(list);
    assert_eq!(copy.iter().filter(|v| **v == 9).count(), 200_000);
}
