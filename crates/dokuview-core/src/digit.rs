//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// This enum provides type-safe representation of sudoku digits, preventing
/// invalid values at compile time. Blank cells are modeled as
/// `Option<Digit>` being `None`, so a digit value is always meaningful.
///
/// # Examples
///
/// ```
/// use dokuview_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Create from a dataset character
/// assert_eq!(Digit::from_ascii('3'), Some(Digit::D3));
/// assert_eq!(Digit::from_ascii('0'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use dokuview_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[8], Digit::D9);
    /// ```
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use dokuview_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Some(digit) => digit,
            None => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from an ASCII character `'1'`-`'9'`.
    ///
    /// Returns `None` for any other character, including `'0'` — the
    /// dataset's blank marker has no digit value.
    #[must_use]
    pub const fn from_ascii(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Self::D1),
            '2' => Some(Self::D2),
            '3' => Some(Self::D3),
            '4' => Some(Self::D4),
            '5' => Some(Self::D5),
            '6' => Some(Self::D6),
            '7' => Some(Self::D7),
            '8' => Some(Self::D8),
            '9' => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the digit as a static string slice, for display widgets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trips() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::try_from_value(digit.value()), Some(digit));
        }
    }

    #[test]
    fn test_try_from_value_rejects_out_of_range() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(255), None);
    }

    #[test]
    fn test_from_ascii() {
        assert_eq!(Digit::from_ascii('1'), Some(Digit::D1));
        assert_eq!(Digit::from_ascii('9'), Some(Digit::D9));
        assert_eq!(Digit::from_ascii('0'), None);
        assert_eq!(Digit::from_ascii('x'), None);
        assert_eq!(Digit::from_ascii(' '), None);
    }

    #[test]
    fn test_display_and_as_str() {
        for digit in Digit::ALL {
            assert_eq!(digit.to_string(), digit.value().to_string());
            assert_eq!(digit.as_str(), digit.value().to_string());
        }
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Digit::from_value(10);
    }
}
