// ============================================================================
// Money Text Format
// Canonical "<integer>.<digits> <CURRENCY>" formatting and parsing
// ============================================================================

use super::errors::{MoneyError, MoneyResult, ParseFailure};
use super::value::{pow10, Money, MAX_PRECISION};
use crate::numeric::{try_add, try_multiply, try_subtract};
use std::fmt;
use std::str::FromStr;

impl Money {
    /// Render the amount in major units, e.g. amount 10099 at precision 2
    /// renders as `"100.99"`.
    ///
    /// - precision 0 renders a bare integer (`"10099"`)
    /// - an uninitialized value renders as `""`
    /// - when `|amount| < 10^precision` the raw amount is taken as already in
    ///   major units: amount -5 at precision 8 renders as `"-5.00000000"`
    pub fn to_decimal_string(&self) -> String {
        let Some(parts) = &self.parts else {
            return String::new();
        };

        let width = parts.precision as usize;
        if width == 0 {
            return parts.amount.to_string();
        }

        let scale = pow10(parts.precision);
        if parts.amount.unsigned_abs() < scale as u64 {
            return format!("{}.{:0>width$}", parts.amount, 0, width = width);
        }

        let major = parts.amount / scale;
        let minor = (parts.amount % scale).unsigned_abs();
        format!("{}.{:0>width$}", major, minor, width = width)
    }

    /// `"<decimal> <currency>"`, e.g. `"100.99 USD"`. Empty when uninitialized.
    pub fn to_display_string(&self) -> String {
        if !self.is_initialized() {
            return String::new();
        }
        format!("{} {}", self.to_decimal_string(), self.currency())
    }

    /// Parse the canonical text form `"<signed-integer>.<digits> <CURRENCY>"`.
    ///
    /// The number of fractional digits sets the precision, so `"100 USD"` is
    /// rejected and `"100.5 USD"` has precision 1. The currency is
    /// upper-cased.
    ///
    /// # Examples
    /// - `"100.99 USD"` -> amount 10099, precision 2
    /// - `"-100.50 usd"` -> amount -10050, currency USD
    /// - `"1.00000000 BTC"` -> amount 100000000, precision 8
    ///
    /// # Errors
    /// `MalformedInput` on a wrong token count, anything other than exactly
    /// one `.`, more than 8 fractional digits, non-numeric parts, or an
    /// amount that does not fit in an i64.
    pub fn parse(text: &str) -> MoneyResult<Money> {
        let tokens: Vec<&str> = text.split(' ').collect();
        if tokens.len() != 2 {
            return Err(malformed(text, ParseFailure::TokenCount(tokens.len())));
        }
        let amount = tokens[0];
        let currency = tokens[1].to_uppercase();

        let (int_str, frac_str) = match amount.split_once('.') {
            Some((int_str, frac_str)) if !frac_str.contains('.') => (int_str, frac_str),
            _ => {
                let points = amount.matches('.').count();
                return Err(malformed(text, ParseFailure::DecimalPoint(points)));
            },
        };

        let precision = frac_str.len();
        if precision > MAX_PRECISION as usize {
            return Err(malformed(text, ParseFailure::PrecisionTooHigh(precision)));
        }

        let integer: i64 = int_str
            .parse()
            .map_err(|_| malformed(text, ParseFailure::InvalidInteger))?;

        if frac_str.is_empty() || !frac_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(text, ParseFailure::InvalidFraction));
        }
        let fraction: i64 = frac_str
            .parse()
            .map_err(|_| malformed(text, ParseFailure::InvalidFraction))?;

        // The integer part carries the sign: "-100.50" is -(100 + 0.50).
        let total = try_multiply(integer, pow10(precision as u8))
            .and_then(|scaled| {
                if integer < 0 {
                    try_subtract(scaled, fraction)
                } else {
                    try_add(scaled, fraction)
                }
            })
            .map_err(|err| malformed(text, ParseFailure::Overflow(err)))?;

        Money::new(total, currency, precision as i32)
    }
}

fn malformed(input: &str, reason: ParseFailure) -> MoneyError {
    tracing::debug!(input, reason = %reason, "rejected money string");
    MoneyError::MalformedInput {
        input: input.to_string(),
        reason,
    }
}

/// Parse a value. See [`Money::parse`].
pub fn parse(text: &str) -> MoneyResult<Money> {
    Money::parse(text)
}

// ============================================================================
// Display and Parsing Traits
// ============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
