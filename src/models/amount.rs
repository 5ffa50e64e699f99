//! Amount type for representing currency values
//!
//! Internally stores amounts in milliunits (i64, 1/1000 of the currency unit),
//! the scale the YNAB API uses on the wire. No floating-point value is ever
//! stored, and formatting and parsing are done with integer arithmetic.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ReviewError;

/// Milliunits per major currency unit
pub const MILLIUNITS_PER_UNIT: i64 = 1000;

/// Characters that mark a string as carrying a currency symbol
const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Optional minus, ASCII digits, optional decimal point with one or two digits
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]{1,2})?$").expect("amount pattern compiles"));

/// Represents a monetary amount stored as milliunits
///
/// `-4500` milliunits is `-4.50` in the major unit. Equality and ordering
/// compare the integer directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an Amount from milliunits
    ///
    /// # Examples
    /// ```
    /// use uncleared::models::Amount;
    /// let amount = Amount::from_milliunits(-4500); // -4.50
    /// assert_eq!(amount.format(), "-4.50");
    /// ```
    pub const fn from_milliunits(milliunits: i64) -> Self {
        Self(milliunits)
    }

    /// Create an Amount from a possibly fractional milliunit count
    ///
    /// Rounds to the nearest milliunit with exact halves going up, so
    /// `-1234.5` becomes `-1234`. Non-finite input saturates (NaN becomes
    /// zero).
    pub fn from_raw_milliunits(milliunits: f64) -> Self {
        let floor = milliunits.floor();
        let rounded = if milliunits - floor >= 0.5 { floor + 1.0 } else { floor };
        Self(rounded as i64)
    }

    /// Create an Amount from a major-unit value, e.g. `-4.5` for `-4.50`
    pub fn from_dollars(dollars: f64) -> Self {
        Self::from_raw_milliunits(dollars * MILLIUNITS_PER_UNIT as f64)
    }

    /// Parse a canonical decimal string such as `"-4.50"` or `"12"`
    ///
    /// Fails with [`ReviewError::InvalidAmountFormat`] whenever
    /// [`Amount::is_valid`] is false.
    pub fn parse(s: &str) -> Result<Self, ReviewError> {
        let trimmed = s.trim();
        if !Self::matches_format(trimmed) {
            return Err(ReviewError::InvalidAmountFormat(s.to_string()));
        }
        exact_milliunits(trimmed)
            .map(Self)
            .ok_or_else(|| ReviewError::InvalidAmountFormat(s.to_string()))
    }

    /// Check whether a string is an acceptable amount
    ///
    /// Accepts an optional leading minus, one or more digits and an optional
    /// decimal point followed by one or two digits. Surrounding whitespace is
    /// ignored. Currency symbols and values that do not fit are rejected.
    pub fn is_valid(s: &str) -> bool {
        let trimmed = s.trim();
        Self::matches_format(trimmed) && exact_milliunits(trimmed).is_some()
    }

    fn matches_format(trimmed: &str) -> bool {
        !trimmed.contains(CURRENCY_SYMBOLS) && AMOUNT_PATTERN.is_match(trimmed)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in milliunits
    pub const fn to_milliunits(&self) -> i64 {
        self.0
    }

    /// Get the amount in major units
    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / MILLIUNITS_PER_UNIT as f64
    }

    /// Render with exactly two fractional digits
    ///
    /// The third decimal digit is rounded half away from zero, so `12345`
    /// milliunits formats as `"12.35"` and `-4500` as `"-4.50"`.
    pub fn format(&self) -> String {
        let cents = (self.0.unsigned_abs() + 5) / 10;
        let sign = if self.0 < 0 && cents != 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value, saturating at `i64::MAX` milliunits
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }
}

/// Convert a string that already matched the amount pattern into milliunits
///
/// Returns `None` when the value overflows i64 milliunits.
fn exact_milliunits(s: &str) -> Option<i64> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = format!("{:0<3}", fraction).parse().ok()?;
    let magnitude = whole.checked_mul(MILLIUNITS_PER_UNIT)?.checked_add(fraction)?;

    Some(if negative { -magnitude } else { magnitude })
}

impl FromStr for Amount {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format())
    }
}

// Arithmetic saturates at the i64 limits; server-supplied values are summed
// for totals and must not panic.
impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
