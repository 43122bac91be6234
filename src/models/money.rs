//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64) to avoid floating-point
//! drift when summing budgets. The hosted store hands out plain floating
//! point numbers; those are rounded to the nearest minor unit on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use eventto::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.major(), 10);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Convert a floating point amount as stored by the hosted database
    ///
    /// Rounds to the nearest minor unit. `None` when the amount is not finite
    /// or does not fit in minor units.
    ///
    /// # Examples
    /// ```
    /// use eventto::models::Money;
    /// assert_eq!(Money::try_from_f64(3500.5), Some(Money::from_minor(350050)));
    /// assert_eq!(Money::try_from_f64(1e17), None);
    /// assert_eq!(Money::try_from_f64(f64::NAN), None);
    /// ```
    pub fn try_from_f64(amount: f64) -> Option<Self> {
        let minor = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if minor.is_finite() && minor >= i64::MIN as f64 && minor < i64::MAX as f64 {
            Some(Self(minor as i64))
        } else {
            None
        }
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Convert back to the floating point representation used by the store
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Percentage of `whole` this amount represents, rounded half up
    ///
    /// Returns 0 when `whole` is zero instead of an undefined value. Results
    /// beyond the `i64` range saturate.
    ///
    /// # Examples
    /// ```
    /// use eventto::models::Money;
    /// let spent = Money::from_major(7300);
    /// assert_eq!(spent.percent_of(Money::from_major(8000)), 91);
    /// assert_eq!(spent.percent_of(Money::zero()), 0);
    /// ```
    pub fn percent_of(&self, whole: Money) -> i64 {
        if whole.is_zero() {
            return 0;
        }

        let mut numerator = i128::from(self.0) * 100;
        let mut denominator = i128::from(whole.0);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        // floor(n/d + 1/2), matching round-half-up for both signs
        let percent = (2 * numerator + denominator).div_euclid(2 * denominator);
        i64::try_from(percent).unwrap_or(if percent > 0 { i64::MAX } else { i64::MIN })
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let whole = group_thousands(self.major().unsigned_abs());
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, whole, self.minor_part())
        } else {
            format!("{}{}.{:02}", symbol, whole, self.minor_part())
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("₹"))
    }
}

// Arithmetic saturates at the i64 bounds instead of overflowing

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}
