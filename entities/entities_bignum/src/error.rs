//! Error Types
//!
//! Every fallible user-facing operation in this crate reports one of these
//! values instead of panicking:
//!
//! - [`ParseBigIntError`]: text could not be read as an integer
//! - [`DivisionByZero`]: a divisor's magnitude was zero
//! - [`ConversionOverflow`]: a value does not fit a native integer type

use std::fmt;

/// Reasons a textual integer was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// The input string was empty
    EmptyInput,
    /// A character is not a digit in the requested radix
    InvalidDigitForRadix {
        /// Offending character
        character: char,
        /// Byte offset of the character in the input
        index: usize,
        /// Radix the input was parsed in
        radix: u32,
    },
    /// A sign character was not followed by any digits
    MissingDigitsAfterSign,
    /// The radix is outside `2..=36`
    InvalidRadix(u32),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseBigIntError::EmptyInput => write!(f, "cannot parse integer from empty string"),
            ParseBigIntError::InvalidDigitForRadix {
                character,
                index,
                radix,
            } => write!(
                f,
                "invalid digit {:?} at byte {} for radix {}",
                character, index, radix
            ),
            ParseBigIntError::MissingDigitsAfterSign => {
                write!(f, "sign is not followed by any digits")
            }
            ParseBigIntError::InvalidRadix(radix) => {
                write!(f, "radix {} is not in the range 2..=36", radix)
            }
        }
    }
}

impl std::error::Error for ParseBigIntError {}

/// Division or remainder with a zero divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "attempt to divide by zero")
    }
}

impl std::error::Error for DivisionByZero {}

/// A big integer does not fit the requested target type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOverflow {
    target: &'static str,
}

impl ConversionOverflow {
    pub(crate) fn new(target: &'static str) -> Self {
        Self { target }
    }

    /// Name of the type the conversion targeted
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl fmt::Display for ConversionOverflow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "value out of range for {}", self.target)
    }
}

impl std::error::Error for ConversionOverflow {}
