//! Digit Num \
//! This crate provides:
//! - [`DigitList`]: a non-negative integer in any base, stored as a singly-linked chain of digits, least significant first.
//! - [`arith`]: normalization ([`mod_n`]), alignment ([`pair`]), addition ([`plus`]) and multiplication by a small integer ([`mult`]).

pub mod arith;
mod digit;
mod digit_list;
mod digit_num_cache;
mod digit_num_constants;
mod error;

pub use arith::{mod_n, mult, pair, plus};
pub use digit::Digit;
pub use digit_list::{DigitList, Iter};
pub use digit_num_cache::DEMO_LIST;
pub use digit_num_constants::{DEMO_BASE, DEMO_MAX_MULTIPLIER, DEMO_RAW_DIGITS};
pub use error::DigitError;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn it_works() {
        let l = mod_n(&DEMO_LIST, DEMO_BASE).unwrap();
        let l2 = plus(&l, &l, DEMO_BASE).unwrap();
        let l4 = plus(&l2, &l2, DEMO_BASE).unwrap();
        println!("l  = {}", l);
        println!("l2 = {}", l2);
        println!("l4 = {}", l4);

        assert_eq!(l.length(), 99);
        assert!(l.iter().all(|d| (0..DEMO_BASE).contains(d)));
        assert_eq!(l4, mult(&l, 4, DEMO_BASE).unwrap());

        let l12 = mult(&l4, 3, DEMO_BASE).unwrap();
        let by_hand = plus(&plus(&l4, &l4, DEMO_BASE).unwrap(), &l4, DEMO_BASE).unwrap();
        assert_eq!(l12, by_hand);
        // the raw demo list is untouched
        assert_eq!(DEMO_LIST.length(), 99);
    }
}
