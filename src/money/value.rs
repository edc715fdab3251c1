// ============================================================================
// Money Value
// Immutable scaled-integer monetary amount tagged with currency and precision
// ============================================================================

use super::config::CurrencyConfig;
use super::errors::{MoneyError, MoneyResult};
use crate::numeric::{try_add, try_divide, try_multiply, try_subtract};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest supported number of implied fractional digits.
///
/// Eight digits keeps fairly large values (about ±92 billion major units)
/// representable in an i64.
pub const MAX_PRECISION: u8 = 8;

/// Compute 10^n at compile time
pub(super) const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

#[derive(Clone)]
pub(super) struct MoneyParts {
    pub(super) amount: i64,
    pub(super) currency: String,
    pub(super) precision: u8,
}

/// An amount of a currency at a fixed decimal precision.
///
/// Internally stores the value in the currency's smallest unit, so
/// `true_value = amount / 10^precision`. A `Money` is immutable: every
/// operation returns a new value.
///
/// `Money::default()` is the *uninitialized* state. It is distinguishable
/// from a zero amount: it formats as an empty string and every arithmetic
/// operation on it fails with [`MoneyError::UninitializedValue`].
///
/// # Example
/// ```
/// use fixed_money::money::Money;
///
/// let price = Money::usd(10099);                     // 100.99 USD
/// let total = price.times(3)?;                       // 302.97 USD
/// let share = total.divided_by(2)?;                  // 151.49 USD (half-up)
/// assert_eq!(share.to_display_string(), "151.49 USD");
/// # Ok::<(), fixed_money::money::MoneyError>(())
/// ```
#[derive(Clone, Default)]
pub struct Money {
    pub(super) parts: Option<MoneyParts>,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a new value.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is outside `[0, 8]`.
    pub fn new(amount: i64, currency: impl Into<String>, precision: i32) -> MoneyResult<Self> {
        if !(0..=MAX_PRECISION as i32).contains(&precision) {
            return Err(MoneyError::InvalidPrecision(precision as i64));
        }

        Ok(Self::from_parts(amount, currency.into(), precision as u8))
    }

    /// US dollars with 2 decimal places. `amount` is in cents.
    pub fn usd(amount: i64) -> Self {
        Self::from_parts(amount, "USD".to_string(), 2)
    }

    /// Argentine pesos with 2 decimal places. `amount` is in centavos.
    pub fn ars(amount: i64) -> Self {
        Self::from_parts(amount, "ARS".to_string(), 2)
    }

    /// Create a value using a currency preset.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if the preset's precision exceeds 8.
    pub fn from_config(amount: i64, config: &CurrencyConfig) -> MoneyResult<Self> {
        Self::new(amount, config.code.as_str(), config.precision as i32)
    }

    #[inline]
    fn from_parts(amount: i64, currency: String, precision: u8) -> Self {
        Self {
            parts: Some(MoneyParts {
                amount,
                currency,
                precision,
            }),
        }
    }

    #[inline]
    fn parts(&self) -> MoneyResult<&MoneyParts> {
        self.parts.as_ref().ok_or(MoneyError::UninitializedValue)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Amount in the smallest unit of the currency (e.g. 10099 for 100.99 USD).
    ///
    /// Zero for an uninitialized value.
    #[inline]
    pub fn amount(&self) -> i64 {
        self.parts.as_ref().map_or(0, |p| p.amount)
    }

    /// Currency code. Empty for an uninitialized value.
    #[inline]
    pub fn currency(&self) -> &str {
        self.parts.as_ref().map_or("", |p| p.currency.as_str())
    }

    /// Number of implied fractional digits. Zero for an uninitialized value.
    #[inline]
    pub fn precision(&self) -> u8 {
        self.parts.as_ref().map_or(0, |p| p.precision)
    }

    /// Whether the value was built by a constructor rather than `Default`.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.parts.is_some()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.parts.as_ref().is_some_and(|p| p.amount == 0)
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.parts.as_ref().is_some_and(|p| p.amount > 0)
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.parts.as_ref().is_some_and(|p| p.amount < 0)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Sum of two values of the same currency.
    ///
    /// # Errors
    /// `UninitializedValue`, `CurrencyMismatch`, or `Arithmetic` on overflow.
    pub fn plus(&self, other: &Money) -> MoneyResult<Money> {
        let (lhs, rhs) = (self.parts()?, other.parts()?);
        ensure_same_currency(lhs, rhs)?;

        let sum = try_add(lhs.amount, rhs.amount)?;
        Self::new(sum, lhs.currency.as_str(), lhs.precision as i32)
    }

    /// Difference of two values of the same currency.
    ///
    /// # Errors
    /// `UninitializedValue`, `CurrencyMismatch`, or `Arithmetic` on underflow.
    pub fn minus(&self, other: &Money) -> MoneyResult<Money> {
        let (lhs, rhs) = (self.parts()?, other.parts()?);
        ensure_same_currency(lhs, rhs)?;

        let diff = try_subtract(lhs.amount, rhs.amount)?;
        Self::new(diff, lhs.currency.as_str(), lhs.precision as i32)
    }

    /// Add a raw scaled amount (in the smallest unit).
    pub fn increment(&self, raw: i64) -> MoneyResult<Money> {
        let parts = self.parts()?;
        let sum = try_add(parts.amount, raw)?;
        Self::new(sum, parts.currency.as_str(), parts.precision as i32)
    }

    /// Subtract a raw scaled amount (in the smallest unit).
    pub fn decrement(&self, raw: i64) -> MoneyResult<Money> {
        let parts = self.parts()?;
        let diff = try_subtract(parts.amount, raw)?;
        Self::new(diff, parts.currency.as_str(), parts.precision as i32)
    }

    /// Multiply by an integer factor.
    pub fn times(&self, factor: i64) -> MoneyResult<Money> {
        let parts = self.parts()?;
        let product = try_multiply(parts.amount, factor)?;
        Self::new(product, parts.currency.as_str(), parts.precision as i32)
    }

    /// Divide by an integer, rounding half-up (half away from zero).
    ///
    /// `20000 / 3` gives 6667, `10000 / 3` gives 3333, `-20000 / 3` gives -6667.
    ///
    /// # Errors
    /// `UninitializedValue`, `DivisionByZero`, or `Arithmetic` for
    /// `i64::MIN / -1`.
    pub fn divided_by(&self, divisor: i64) -> MoneyResult<Money> {
        let parts = self.parts()?;
        if divisor == 0 {
            return Err(MoneyError::DivisionByZero);
        }

        let mut quotient = try_divide(parts.amount, divisor)?;
        // MIN / -1 was rejected above, so `%` cannot overflow.
        let remainder = parts.amount % divisor;

        // |remainder| < |divisor| <= 2^63, so doubling fits in u64.
        if remainder.unsigned_abs() * 2 >= divisor.unsigned_abs() {
            let towards_positive = (parts.amount >= 0) == (divisor > 0);
            tracing::trace!(
                amount = parts.amount,
                divisor,
                quotient,
                remainder,
                towards_positive,
                "rounding quotient half-up"
            );
            quotient = if towards_positive {
                try_add(quotient, 1)?
            } else {
                try_subtract(quotient, 1)?
            };
        }

        Self::new(quotient, parts.currency.as_str(), parts.precision as i32)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// True iff amount, currency and precision all match.
    ///
    /// Values with the same decimal value at different precisions are not
    /// equal: 100.00 (precision 2) differs from 100.0000 (precision 4).
    #[inline]
    pub fn equals(&self, other: &Money) -> bool {
        self.amount() == other.amount()
            && self.currency() == other.currency()
            && self.precision() == other.precision()
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal` (`amount / 10^precision`).
    ///
    /// Returns `None` for an uninitialized value.
    pub fn to_decimal(&self) -> Option<Decimal> {
        self.parts
            .as_ref()
            .map(|p| Decimal::new(p.amount, p.precision as u32))
    }

    /// Convert from `rust_decimal::Decimal`, taking the precision from the
    /// decimal's scale (`Decimal::new(10099, 2)` becomes 100.99 at precision 2).
    ///
    /// # Errors
    /// - `InvalidPrecision` if the scale exceeds 8
    /// - `AmountOutOfRange` if the mantissa does not fit in an i64
    pub fn from_decimal(value: Decimal, currency: impl Into<String>) -> MoneyResult<Self> {
        let scale = value.scale();
        if scale > MAX_PRECISION as u32 {
            return Err(MoneyError::InvalidPrecision(scale as i64));
        }

        let mantissa = value.mantissa();
        let amount =
            i64::try_from(mantissa).map_err(|_| MoneyError::AmountOutOfRange(mantissa))?;

        Self::new(amount, currency, scale as i32)
    }
}

fn ensure_same_currency(lhs: &MoneyParts, rhs: &MoneyParts) -> MoneyResult<()> {
    if lhs.currency != rhs.currency {
        return Err(MoneyError::CurrencyMismatch {
            expected: lhs.currency.clone(),
            found: rhs.currency.clone(),
        });
    }
    Ok(())
}

// ============================================================================
// Free-Function Constructors
// ============================================================================

/// Create a new value. See [`Money::new`].
pub fn new_money(amount: i64, currency: impl Into<String>, precision: i32) -> MoneyResult<Money> {
    Money::new(amount, currency, precision)
}

/// US dollars with 2 decimal places. See [`Money::usd`].
pub fn new_usd(amount: i64) -> Money {
    Money::usd(amount)
}

/// Argentine pesos with 2 decimal places. See [`Money::ars`].
pub fn new_ars(amount: i64) -> Money {
    Money::ars(amount)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount().hash(state);
        self.currency().hash(state);
        self.precision().hash(state);
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parts {
            Some(p) => write!(f, "Money({}, raw={})", self, p.amount),
            None => write!(f, "Money(<uninitialized>)"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ArithmeticError;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(2), 100);
        assert_eq!(pow10(MAX_PRECISION), 100_000_000);
    }

    #[test]
    fn test_new_validation() {
        assert!(Money::new(100, "JPY", 0).is_ok());
        assert!(Money::new(10099, "USD", 2).is_ok());
        assert!(Money::new(100, "BTC", 8).is_ok());

        assert_eq!(
            Money::new(100, "USD", -1),
            Err(MoneyError::InvalidPrecision(-1))
        );
        assert_eq!(
            Money::new(100, "USD", 9),
            Err(MoneyError::InvalidPrecision(9))
        );
    }

    #[test]
    fn test_new_every_valid_precision() {
        for precision in 0..=8 {
            let m = Money::new(1, "XAU", precision).unwrap();
            assert_eq!(m.precision() as i32, precision);
        }
    }

    #[test]
    fn test_fixed_currency_constructors() {
        let usd = Money::usd(10050);
        assert_eq!(usd.amount(), 10050);
        assert_eq!(usd.currency(), "USD");
        assert_eq!(usd.precision(), 2);

        let ars = new_ars(99900);
        assert_eq!(ars.amount(), 99900);
        assert_eq!(ars.currency(), "ARS");
        assert_eq!(ars.precision(), 2);

        assert_eq!(new_usd(1), Money::usd(1));
        assert_eq!(new_money(1, "USD", 2).unwrap(), Money::usd(1));
    }

    #[test]
    fn test_from_config() {
        let btc = CurrencyConfig::new("BTC").with_precision(8);
        let m = Money::from_config(100_000_000, &btc).unwrap();
        assert_eq!(m.currency(), "BTC");
        assert_eq!(m.precision(), 8);

        let bad = CurrencyConfig::new("XXX").with_precision(12);
        assert_eq!(
            Money::from_config(1, &bad),
            Err(MoneyError::InvalidPrecision(12))
        );
    }

    #[test]
    fn test_plus() {
        let sum = Money::usd(10050).plus(&Money::usd(2525)).unwrap();
        assert_eq!(sum, Money::usd(12575));

        let sum = Money::usd(-500).plus(&Money::usd(200)).unwrap();
        assert_eq!(sum.amount(), -300);
    }

    #[test]
    fn test_plus_currency_mismatch() {
        let result = Money::usd(100).plus(&Money::ars(100));
        assert_eq!(
            result,
            Err(MoneyError::CurrencyMismatch {
                expected: "USD".to_string(),
                found: "ARS".to_string(),
            })
        );
    }

    #[test]
    fn test_currency_comparison_is_case_sensitive() {
        let lower = Money::new(100, "usd", 2).unwrap();
        assert!(matches!(
            Money::usd(100).plus(&lower),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_minus() {
        let diff = Money::usd(10050).minus(&Money::usd(50)).unwrap();
        assert_eq!(diff, Money::usd(10000));

        let diff = Money::usd(100).minus(&Money::usd(300)).unwrap();
        assert_eq!(diff.amount(), -200);

        assert!(matches!(
            Money::ars(1).minus(&Money::usd(1)),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_increment_decrement() {
        assert_eq!(Money::usd(100).increment(50).unwrap().amount(), 150);
        assert_eq!(Money::usd(100).increment(-150).unwrap().amount(), -50);
        assert_eq!(Money::usd(100).decrement(50).unwrap().amount(), 50);
        assert_eq!(Money::ars(0).decrement(1).unwrap(), Money::ars(-1));

        assert!(matches!(
            Money::usd(i64::MAX).increment(1),
            Err(MoneyError::Arithmetic(ArithmeticError::SignedOverflow { .. }))
        ));
        assert!(matches!(
            Money::usd(i64::MIN).decrement(1),
            Err(MoneyError::Arithmetic(ArithmeticError::SignedUnderflow { .. }))
        ));
    }

    #[test]
    fn test_times() {
        assert_eq!(Money::usd(1050).times(3).unwrap().amount(), 3150);
        assert_eq!(Money::usd(1050).times(-2).unwrap().amount(), -2100);
        assert_eq!(Money::usd(1050).times(0).unwrap().amount(), 0);
    }

    #[test]
    fn test_overflow() {
        let near_max = Money::new(i64::MAX - 100, "USD", 2).unwrap();
        assert!(matches!(
            near_max.plus(&Money::usd(1000)),
            Err(MoneyError::Arithmetic(ArithmeticError::SignedOverflow { .. }))
        ));

        let near_min = Money::new(i64::MIN + 100, "USD", 2).unwrap();
        assert!(matches!(
            near_min.minus(&Money::usd(1000)),
            Err(MoneyError::Arithmetic(ArithmeticError::SignedUnderflow { .. }))
        ));

        let half = Money::new(i64::MAX / 2 + 1000, "USD", 2).unwrap();
        assert!(half.times(3).is_err());
    }

    #[test]
    fn test_divided_by_half_up() {
        assert_eq!(Money::usd(10000).divided_by(3).unwrap().amount(), 3333);
        assert_eq!(Money::usd(20000).divided_by(3).unwrap().amount(), 6667);
        // Exactly one half rounds away from zero
        assert_eq!(Money::usd(5).divided_by(2).unwrap().amount(), 3);
        assert_eq!(Money::usd(-5).divided_by(2).unwrap().amount(), -3);
        assert_eq!(Money::usd(5).divided_by(-2).unwrap().amount(), -3);
        assert_eq!(Money::usd(-5).divided_by(-2).unwrap().amount(), 3);
        // Below one half truncates
        assert_eq!(Money::usd(-10000).divided_by(3).unwrap().amount(), -3333);
        assert_eq!(Money::usd(-20000).divided_by(3).unwrap().amount(), -6667);
        assert_eq!(Money::usd(7).divided_by(1).unwrap().amount(), 7);
    }

    #[test]
    fn test_divided_by_extremes() {
        // |divisor| == 2^63; remainder doubling must not overflow
        let m = Money::usd(i64::MAX);
        assert_eq!(m.divided_by(i64::MIN).unwrap().amount(), -1);
        assert_eq!(Money::usd(i64::MIN).divided_by(i64::MIN).unwrap().amount(), 1);
        assert_eq!(Money::usd(i64::MAX).divided_by(2).unwrap().amount(), i64::MAX / 2 + 1);

        assert!(matches!(
            Money::usd(i64::MIN).divided_by(-1),
            Err(MoneyError::Arithmetic(ArithmeticError::SignedOverflow { .. }))
        ));
    }

    #[test]
    fn test_divided_by_zero() {
        assert_eq!(Money::usd(100).divided_by(0), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_equals_is_precision_sensitive() {
        let two = Money::new(10000, "USD", 2).unwrap();
        let four = Money::new(1_000_000, "USD", 4).unwrap();
        assert!(!two.equals(&four));
        assert_ne!(two, four);

        assert!(two.equals(&Money::usd(10000)));
        assert!(!Money::usd(100).equals(&Money::ars(100)));
        assert!(!Money::usd(100).equals(&Money::usd(101)));
    }

    #[test]
    fn test_uninitialized() {
        let empty = Money::default();
        assert!(!empty.is_initialized());
        assert_eq!(empty.amount(), 0);
        assert_eq!(empty.currency(), "");
        assert_eq!(empty.precision(), 0);
        assert!(!empty.is_zero());

        let usd = Money::usd(100);
        assert_eq!(empty.plus(&usd), Err(MoneyError::UninitializedValue));
        assert_eq!(usd.plus(&empty), Err(MoneyError::UninitializedValue));
        assert_eq!(empty.minus(&usd), Err(MoneyError::UninitializedValue));
        assert_eq!(usd.minus(&empty), Err(MoneyError::UninitializedValue));
        assert_eq!(empty.increment(100), Err(MoneyError::UninitializedValue));
        assert_eq!(empty.decrement(100), Err(MoneyError::UninitializedValue));
        assert_eq!(empty.times(2), Err(MoneyError::UninitializedValue));
        assert_eq!(empty.divided_by(2), Err(MoneyError::UninitializedValue));
        assert_eq!(empty.divided_by(0), Err(MoneyError::UninitializedValue));
        assert_eq!(empty.to_decimal(), None);
    }

    #[test]
    fn test_uninitialized_differs_from_zero() {
        let empty = Money::default();
        assert!(empty.equals(&Money::default()));
        assert!(!empty.equals(&Money::usd(0)));
        assert!(Money::usd(0).is_zero());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::usd(1).is_positive());
        assert!(Money::usd(-1).is_negative());
        assert!(!Money::usd(0).is_positive());
        assert!(!Money::usd(0).is_negative());
    }

    #[test]
    fn test_immutability() {
        let original = Money::usd(100);
        let _ = original.plus(&Money::usd(50)).unwrap();
        let _ = original.times(10).unwrap();
        assert_eq!(original.amount(), 100);
    }

    #[test]
    fn test_to_decimal() {
        let d = Money::usd(10099).to_decimal().unwrap();
        assert_eq!(d, Decimal::new(10099, 2));
        assert_eq!(d.to_string(), "100.99");

        let neg = Money::new(-5, "BTC", 8).unwrap().to_decimal().unwrap();
        assert_eq!(neg.to_string(), "-0.00000005");
    }

    #[test]
    fn test_from_decimal() {
        let m = Money::from_decimal(Decimal::new(12345, 2), "USD").unwrap();
        assert_eq!(m, Money::usd(12345));

        let m = Money::from_decimal(Decimal::new(7, 0), "JPY").unwrap();
        assert_eq!(m.precision(), 0);
        assert_eq!(m.amount(), 7);
    }

    #[test]
    fn test_from_decimal_invalid() {
        assert_eq!(
            Money::from_decimal(Decimal::new(1, 9), "BTC"),
            Err(MoneyError::InvalidPrecision(9))
        );

        let huge = Decimal::MAX;
        assert!(matches!(
            Money::from_decimal(huge, "USD"),
            Err(MoneyError::AmountOutOfRange(_))
        ));
    }

    #[test]
    fn test_hash_follows_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Money::usd(100));
        assert!(set.contains(&Money::new(100, "USD", 2).unwrap()));
        assert!(!set.contains(&Money::new(10000, "USD", 4).unwrap()));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Money::usd(10099)), "Money(100.99 USD, raw=10099)");
        assert_eq!(format!("{:?}", Money::default()), "Money(<uninitialized>)");
    }
}
