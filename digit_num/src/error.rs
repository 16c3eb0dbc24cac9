use thiserror::Error;

/// Failures of the digit arithmetic.
///
/// Digit values are widened to `i128` so one error type serves every
/// [`Digit`](crate::Digit) width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("invalid input: digit {value} at position {position} is negative")]
    NegativeDigit { position: usize, value: i128 },
    #[error("invalid input: multiplier {0} is negative")]
    NegativeMultiplier(i128),
    #[error("invalid input: base {0} is smaller than 2")]
    InvalidBase(i128),
    #[error("digit overflow at position {position}")]
    Overflow { position: usize },
}

impl DigitError {
    /// Errors caused by arguments outside the documented domain, as opposed
    /// to a digit type too narrow for the result.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, DigitError::Overflow { .. })
    }
}

#[test]
fn test_display() {
    let err = DigitError::NegativeDigit { position: 2, value: -7 };
    assert_eq!(err.to_string(), "invalid input: digit -7 at position 2 is negative");
    assert!(err.is_invalid_input());
    assert!(!DigitError::Overflow { position: 0 }.is_invalid_input());
    assert_eq!(DigitError::InvalidBase(1).to_string(), "invalid input: base 1 is smaller than 2");
}
