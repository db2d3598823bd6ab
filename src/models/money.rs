//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that sums over many records
//! never accumulate floating-point drift. Amounts coming from the backend are
//! decimals encoded either as JSON strings or as numbers, so deserialization
//! is lenient: anything unparseable becomes zero instead of poisoning a total.
//!
//! Arithmetic saturates at the `i64` bounds, so summing absurd amounts gives
//! a pinned total rather than an overflow panic or a wrapped sign.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// The amount as a floating-point number of units, e.g. `10.5` for $10.50
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a decimal amount from text, rounding half-up to cents.
    ///
    /// Leading whitespace, a sign, a currency symbol and thousands separators
    /// are accepted, as is an exponent ("1.5e3"). Parsing stops at the first
    /// character that cannot be part of the number ("12.50 USD" is 12.50).
    /// Returns `None` when no digit is found or the value does not fit.
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// assert_eq!(Money::parse_lenient("1,234.565").unwrap().cents(), 123457);
    /// assert_eq!(Money::parse_lenient("1e3").unwrap().cents(), 100000);
    /// assert!(Money::parse_lenient("abc").is_none());
    /// ```
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let s = s.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.trim_start_matches(|c: char| matches!(c, '$' | '€' | '£'));

        let mut digits: Vec<u8> = Vec::new();
        let mut whole_len: Option<usize> = None;
        let mut exponent: i64 = 0;

        let mut chars = rest.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '0'..='9' => digits.push(c as u8 - b'0'),
                ',' if whole_len.is_none() && !digits.is_empty() => continue,
                '.' if whole_len.is_none() => whole_len = Some(digits.len()),
                'e' | 'E' if !digits.is_empty() => {
                    exponent = parse_exponent(&mut chars);
                    break;
                }
                _ => break,
            }
        }

        if digits.is_empty() {
            return None;
        }

        // Index one past the hundredths digit, after shifting by the exponent
        let whole_len = whole_len.unwrap_or(digits.len()) as i64;
        let end = whole_len.saturating_add(exponent).saturating_add(2);
        let digit_at = |i: i64| {
            usize::try_from(i)
                .ok()
                .and_then(|i| digits.get(i))
                .map_or(0, |d| i64::from(*d))
        };

        if end > MAX_SCALED_DIGITS {
            // Only zero survives a shift this large
            return digits.iter().all(|d| *d == 0).then_some(Self::zero());
        }

        let mut cents: i64 = 0;
        for i in 0..end.max(0) {
            cents = cents.checked_mul(10)?.checked_add(digit_at(i))?;
        }
        if digit_at(end) >= 5 {
            cents = cents.checked_add(1)?;
        }

        Some(Self(if negative { -cents } else { cents }))
    }

    /// Convert a floating-point amount, rounding half-up to cents.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Shortest round-trip formatting keeps 1.005 as "1.005" rather than
        // 1.00499999..., so half-up rounding matches the decimal the user typed.
        Self::parse_lenient(&value.to_string())
    }

    /// Coerce a raw string amount, falling back to zero with a warning
    pub fn coerce(raw: &str) -> Self {
        Self::parse_lenient(raw).unwrap_or_else(|| {
            tracing::warn!(value = raw, "unparseable amount treated as zero");
            Self::zero()
        })
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format as a plain decimal without currency symbol, e.g. "-10.50"
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

/// Longest digit run that could still fit in `i64` cents
const MAX_SCALED_DIGITS: i64 = 40;

/// Exponent digits after an `e`; anything malformed counts as no exponent
fn parse_exponent(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> i64 {
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
        seen_digit = true;
    }

    match (seen_digit, negative) {
        (false, _) => 0,
        (true, true) => -value,
        (true, false) => value,
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
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
        self.0 = self.0.saturating_sub(other.0);
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientMoneyVisitor)
    }
}

/// Accepts numbers, numeric strings and null; anything else, including
/// nested lists and objects, is zero.
struct LenientMoneyVisitor;

impl<'de> Visitor<'de> for LenientMoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal amount as a number or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(v.checked_mul(100).map(Money).unwrap_or_else(|| {
            tracing::warn!(value = v, "amount out of range treated as zero");
            Money::zero()
        }))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        match i64::try_from(v) {
            Ok(v) => self.visit_i64(v),
            Err(_) => {
                tracing::warn!(value = v, "amount out of range treated as zero");
                Ok(Money::zero())
            }
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Ok(Money::from_f64(v).unwrap_or_else(|| {
            tracing::warn!(value = v, "non-finite amount treated as zero");
            Money::zero()
        }))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Ok(Money::coerce(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Money, E> {
        tracing::warn!(value = v, "boolean amount treated as zero");
        Ok(Money::zero())
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Money, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        tracing::warn!("list amount treated as zero");
        Ok(Money::zero())
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Money, A::Error> {
        while map
            .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
            .is_some()
        {}
        tracing::warn!("object amount treated as zero");
        Ok(Money::zero())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::zero())
    }

    fn visit_none<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(-3000).format_plain(), "-30.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::parse_lenient("90000000000000000").unwrap();
        assert_eq!(huge.cents(), 9_000_000_000_000_000_000);

        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((-huge - huge).cents(), i64::MIN);
        assert_eq!(vec![huge, huge, huge].into_iter().sum::<Money>().cents(), i64::MAX);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).abs().cents(), i64::MAX);

        let mut total = huge;
        total += huge;
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Money::parse_lenient("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse_lenient(" $10.5 ").unwrap().cents(), 1050);
        assert_eq!(Money::parse_lenient("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_lenient("1,250.00").unwrap().cents(), 125000);
        assert_eq!(Money::parse_lenient("12.50 USD").unwrap().cents(), 1250);
        assert_eq!(Money::parse_lenient(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse_lenient("-4.20").unwrap().cents(), -420);
        assert!(Money::parse_lenient("").is_none());
        assert!(Money::parse_lenient("abc").is_none());
        assert!(Money::parse_lenient(".").is_none());
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse_lenient("1e3").unwrap().cents(), 100000);
        assert_eq!(Money::parse_lenient("1.5E2").unwrap().cents(), 15000);
        assert_eq!(Money::parse_lenient("2.5e-1").unwrap().cents(), 25);
        assert_eq!(Money::parse_lenient("1.5e-2").unwrap().cents(), 2);
        assert_eq!(Money::parse_lenient("-4e1").unwrap().cents(), -4000);
        // A dangling or malformed exponent is ignored
        assert_eq!(Money::parse_lenient("7e").unwrap().cents(), 700);
        assert_eq!(Money::parse_lenient("10EUR").unwrap().cents(), 1000);
        assert_eq!(Money::parse_lenient("0e400").unwrap().cents(), 0);
        assert!(Money::parse_lenient("1e400").is_none());
        assert_eq!(Money::parse_lenient("5e-400").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rounds_half_up() {
        assert_eq!(Money::parse_lenient("0.005").unwrap().cents(), 1);
        assert_eq!(Money::parse_lenient("0.004").unwrap().cents(), 0);
        assert_eq!(Money::parse_lenient("2.675").unwrap().cents(), 268);
        assert_eq!(Money::from_f64(1.005).unwrap().cents(), 101);
        assert!(Money::from_f64(f64::NAN).is_none());
        assert!(Money::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_coerce_falls_back_to_zero() {
        assert_eq!(Money::coerce("not a number"), Money::zero());
        assert_eq!(Money::coerce("42"), Money::from_cents(4200));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);

        let empty: Vec<Money> = Vec::new();
        assert_eq!(empty.into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_deserialize_string_and_number() {
        let values: Vec<Money> =
            serde_json::from_str(r#"[12.5, "12.50", 7, "oops", null, "3.333"]"#).unwrap();
        let cents: Vec<i64> = values.iter().map(Money::cents).collect();
        assert_eq!(cents, vec![1250, 1250, 700, 0, 0, 333]);
    }

    #[test]
    fn test_deserialize_nested_values_as_zero() {
        let values: Vec<Money> =
            serde_json::from_str(r#"[{"v": 1}, [1, 2], true, "4.00"]"#).unwrap();
        let cents: Vec<i64> = values.iter().map(Money::cents).collect();
        assert_eq!(cents, vec![0, 0, 0, 400]);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
