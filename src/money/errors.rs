// ============================================================================
// Money Errors
// Error types for construction, parsing and arithmetic on Money values
// ============================================================================

use crate::numeric::ArithmeticError;
use std::fmt;

/// Why a textual money value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// Expected exactly two space-separated tokens (amount and currency)
    TokenCount(usize),
    /// Expected exactly one decimal point in the amount; holds the count found
    DecimalPoint(usize),
    /// More than 8 fractional digits
    PrecisionTooHigh(usize),
    /// Integer part is not a base-10 integer
    InvalidInteger,
    /// Fractional part is not a run of base-10 digits
    InvalidFraction,
    /// Scaling the amount did not fit in 64 bits
    Overflow(ArithmeticError),
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::TokenCount(n) => {
                write!(f, "expected \"<amount> <currency>\", found {} token(s)", n)
            },
            ParseFailure::DecimalPoint(n) => {
                write!(f, "expected exactly one '.', found {}", n)
            },
            ParseFailure::PrecisionTooHigh(n) => write!(
                f,
                "{} fractional digits, precision must be less than or equal to 8",
                n
            ),
            ParseFailure::InvalidInteger => write!(f, "integer part is not a valid number"),
            ParseFailure::InvalidFraction => write!(f, "fractional part is not a valid number"),
            ParseFailure::Overflow(err) => write!(f, "amount out of range: {}", err),
        }
    }
}

/// Errors that can occur when constructing or operating on [`Money`](super::Money).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Precision outside `[0, 8]`
    InvalidPrecision(i64),
    /// `plus`/`minus` operands carry different currencies
    CurrencyMismatch { expected: String, found: String },
    /// Checked arithmetic failed (overflow, underflow, division by zero)
    Arithmetic(ArithmeticError),
    /// `divided_by(0)`
    DivisionByZero,
    /// Operation attempted on a default (never constructed) value
    UninitializedValue,
    /// Text could not be parsed as `"<amount> <CURRENCY>"`
    MalformedInput { input: String, reason: ParseFailure },
    /// Decimal mantissa does not fit in an i64 amount
    AmountOutOfRange(i128),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidPrecision(p) => write!(
                f,
                "invalid precision {}: must be between 0 and 8 inclusive",
                p
            ),
            MoneyError::CurrencyMismatch { expected, found } => write!(
                f,
                "currency mismatch: cannot combine {} with {}",
                found, expected
            ),
            MoneyError::Arithmetic(err) => write!(f, "cannot {} amounts: {}", err.operation(), err),
            MoneyError::DivisionByZero => write!(f, "cannot divide money by zero"),
            MoneyError::UninitializedValue => {
                write!(f, "money value must be created with a constructor")
            },
            MoneyError::MalformedInput { input, reason } => {
                write!(f, "invalid money format {:?}: {}", input, reason)
            },
            MoneyError::AmountOutOfRange(raw) => {
                write!(f, "amount {} does not fit in a 64-bit integer", raw)
            },
        }
    }
}

impl std::error::Error for MoneyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoneyError::Arithmetic(err) => Some(err),
            MoneyError::MalformedInput {
                reason: ParseFailure::Overflow(err),
                ..
            } => Some(err),
            _ => None,
        }
    }
}

impl From<ArithmeticError> for MoneyError {
    fn from(err: ArithmeticError) -> Self {
        MoneyError::Arithmetic(err)
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
