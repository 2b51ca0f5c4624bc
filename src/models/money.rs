//! Money type for representing currency amounts
//!
//! Amounts are decimal values in a single implicit currency. Shares are
//! fractional (300 / 7 is a valid share), so the value is kept as `f64` and
//! every "is this zero" question goes through [`SETTLEMENT_TOLERANCE`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Tolerance band used when classifying balances (one minor currency unit)
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

/// A monetary amount in the trip currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a decimal value
    ///
    /// # Examples
    /// ```
    /// use tripsplit::models::Money;
    /// let amount = Money::new(10.5);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw decimal value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check the amount is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Within one minor unit of zero
    pub fn is_settled(&self) -> bool {
        (-SETTLEMENT_TOLERANCE..=SETTLEMENT_TOLERANCE).contains(&self.0)
    }

    /// Positive beyond tolerance (the holder is owed money)
    pub fn is_credit(&self) -> bool {
        self.0 > SETTLEMENT_TOLERANCE
    }

    /// Negative beyond tolerance (the holder owes money)
    pub fn is_debt(&self) -> bool {
        self.0 < -SETTLEMENT_TOLERANCE
    }

    /// Check whether two amounts agree within tolerance
    pub fn approx_eq(&self, other: Money) -> bool {
        (self.0 - other.0).abs() <= SETTLEMENT_TOLERANCE
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Divide the amount evenly between `count` people
    ///
    /// Returns `None` when `count` is zero.
    pub fn split(&self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self(self.0 / count as f64))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "10", "-10", "1,250.75", "$10.50",
    /// "฿300", "THB 300", "300 THB". Anything else around the number is
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        // Handle negative sign at start
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };

        let number: String = strip_currency(rest).chars().filter(|c| *c != ',').collect();

        let is_plain_number = !number.is_empty()
            && number.chars().all(|c| c.is_ascii_digit() || c == '.')
            && number.chars().any(|c| c.is_ascii_digit())
            && number.matches('.').count() <= 1;
        if !is_plain_number {
            return Err(invalid());
        }

        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite(trimmed.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a trailing currency code, e.g. "300.00 THB"
    pub fn format_with_code(&self, code: &str) -> String {
        if code.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, code)
        }
    }
}

const CURRENCY_SYMBOLS: [char; 5] = ['$', '฿', '€', '£', '¥'];

/// Remove one currency symbol or three-letter code before or after the number
fn strip_currency(s: &str) -> &str {
    if let Some(rest) = s.strip_prefix(&CURRENCY_SYMBOLS[..]) {
        return rest.trim_start();
    }

    let is_code = |code: &str| code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase());
    if let Some((code, rest)) = s.split_once(' ') {
        if is_code(code) {
            return rest.trim_start();
        }
    }
    if let Some((rest, code)) = s.rsplit_once(' ') {
        if is_code(code) {
            return rest.trim_end();
        }
    }
    s
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid rendering float noise as "-0.00"
        let value = if self.0.abs() < 0.005 { 0.0 } else { self.0 };
        write!(f, "{:.2}", value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount is not a finite number: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
