/// Raw values of the demo number, most significant first. Some of them are
/// not valid base 10 digits until [`mod_n`](crate::mod_n) reduces them.
pub const DEMO_RAW_DIGITS: [i64; 99] = [
    5, 6, 12, 4, 2, 6, 7, 8, 9, 88, 8, 3, 4, 1, 5, 9, 0, 0, 0, 1,
    1, 3, 5, 9, 2, 2, 1, 9, 7, 9, 5, 3, 2, 1, 8, 2, 1, 3, 9, 2,
    4, 5, 38, 2, 1, 3, 9, 2, 4, 5, 38, 2, 1, 3, 9, 2, 4, 5, 38, 2,
    1, 3, 9, 2, 4, 5, 38, 2, 1, 3, 9, 2, 4, 5, 38, 2, 1, 3, 9, 2,
    4, 5, 38, 2, 1, 3, 9, 2, 4, 5, 38, 2, 1, 3, 9, 2, 4, 5, 3
];

pub const DEMO_BASE: i64 = 10;

/// The demo multiplies by every `i` in `0..DEMO_MAX_MULTIPLIER`.
pub const DEMO_MAX_MULTIPLIER: i64 = 110;
