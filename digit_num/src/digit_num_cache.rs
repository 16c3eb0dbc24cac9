use lazy_static::*;

use crate::DigitList;
use crate::digit_num_constants::*;

lazy_static! {
    /// The raw demo number, built once. Head is the last entry of [`DEMO_RAW_DIGITS`].
    pub static ref DEMO_LIST: DigitList<i64> = DigitList::from_raw_msd_first(DEMO_RAW_DIGITS);
}

#[test]
fn test_demo_list() {
    assert_eq!(DEMO_LIST.length(), DEMO_RAW_DIGITS.len());
    assert_eq!(DEMO_LIST.iter().next(), Some(&3));
    assert_eq!(DEMO_LIST.iter().last(), Some(&5));
}
