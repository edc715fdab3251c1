// ============================================================================
// Checked Integer Arithmetic
// Overflow-detecting add/subtract/multiply/divide over fixed-width integers
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult, Operation};
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Integer kinds supported by checked arithmetic.
///
/// Implemented for `i8 i16 i32 i64 isize` and `u8 u16 u32 u64 usize`. The
/// trait is sealed: the detection rules below are only proven for these
/// widths, so downstream crates cannot add kinds.
///
/// Every operation either returns the exact mathematical result or an
/// [`ArithmeticError`] naming the failed condition and both operands. No
/// operation ever wraps.
pub trait CheckedInt: Copy + Ord + fmt::Debug + fmt::Display + sealed::Sealed {
    /// Smallest representable value
    const MIN: Self;
    /// Largest representable value
    const MAX: Self;
    /// Whether the kind is signed
    const SIGNED: bool;

    /// Checked addition.
    fn try_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Checked subtraction.
    fn try_subtract(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Checked multiplication.
    fn try_multiply(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Checked truncating division.
    fn try_divide(self, rhs: Self) -> ArithmeticResult<Self>;
}

// ============================================================================
// Per-Kind Implementations
// ============================================================================

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl CheckedInt for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const SIGNED: bool = true;

            #[inline]
            fn try_add(self, rhs: Self) -> ArithmeticResult<Self> {
                let result = self.wrapping_add(rhs);

                if self > 0 && rhs > 0 && result < 0 {
                    return Err(ArithmeticError::SignedOverflow {
                        op: Operation::Add,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }
                // MIN + MIN wraps to exactly zero, hence `>=`.
                if self < 0 && rhs < 0 && result >= 0 {
                    return Err(ArithmeticError::SignedUnderflow {
                        op: Operation::Add,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }

                // Mixed signs never leave the representable range.
                Ok(result)
            }

            #[inline]
            fn try_subtract(self, rhs: Self) -> ArithmeticResult<Self> {
                let result = self.wrapping_sub(rhs);

                // 0 - MIN wraps back to MIN, hence `self >= 0`.
                if self >= 0 && rhs < 0 && result < 0 {
                    return Err(ArithmeticError::SignedOverflow {
                        op: Operation::Subtract,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }
                if self < 0 && rhs > 0 && result >= 0 {
                    return Err(ArithmeticError::SignedUnderflow {
                        op: Operation::Subtract,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }

                Ok(result)
            }

            #[inline]
            fn try_multiply(self, rhs: Self) -> ArithmeticResult<Self> {
                if self == 0 || rhs == 0 {
                    return Ok(0);
                }

                let result = self.wrapping_mul(rhs);
                let wrapped = (self == -1 && rhs == <$t>::MIN)
                    || (rhs == -1 && self == <$t>::MIN)
                    || result.wrapping_div(rhs) != self;

                if wrapped {
                    // The true product is positive when the operand signs agree.
                    let err = if (self > 0) == (rhs > 0) {
                        ArithmeticError::SignedOverflow {
                            op: Operation::Multiply,
                            lhs: self as i128,
                            rhs: rhs as i128,
                        }
                    } else {
                        ArithmeticError::SignedUnderflow {
                            op: Operation::Multiply,
                            lhs: self as i128,
                            rhs: rhs as i128,
                        }
                    };
                    return Err(err);
                }

                Ok(result)
            }

            #[inline]
            fn try_divide(self, rhs: Self) -> ArithmeticResult<Self> {
                if rhs == 0 {
                    return Err(ArithmeticError::DivisionByZero { lhs: self as i128 });
                }
                // The only signed quotient that does not fit: MIN / -1 == MAX + 1.
                if self == <$t>::MIN && rhs == -1 {
                    return Err(ArithmeticError::SignedOverflow {
                        op: Operation::Divide,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }

                Ok(self / rhs)
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl CheckedInt for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const SIGNED: bool = false;

            #[inline]
            fn try_add(self, rhs: Self) -> ArithmeticResult<Self> {
                if self > <$t>::MAX - rhs {
                    return Err(ArithmeticError::UnsignedOverflow {
                        op: Operation::Add,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }

                Ok(self + rhs)
            }

            #[inline]
            fn try_subtract(self, rhs: Self) -> ArithmeticResult<Self> {
                if self < rhs {
                    return Err(ArithmeticError::UnsignedUnderflow {
                        op: Operation::Subtract,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }

                Ok(self - rhs)
            }

            #[inline]
            fn try_multiply(self, rhs: Self) -> ArithmeticResult<Self> {
                if self == 0 || rhs == 0 {
                    return Ok(0);
                }
                if self > <$t>::MAX / rhs {
                    return Err(ArithmeticError::UnsignedOverflow {
                        op: Operation::Multiply,
                        lhs: self as i128,
                        rhs: rhs as i128,
                    });
                }

                Ok(self * rhs)
            }

            #[inline]
            fn try_divide(self, rhs: Self) -> ArithmeticResult<Self> {
                if rhs == 0 {
                    return Err(ArithmeticError::DivisionByZero { lhs: self as i128 });
                }

                Ok(self / rhs)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

// ============================================================================
// Generic Entry Points
// ============================================================================

/// Unwraps an arithmetic result, panicking with the error message on failure.
///
/// Reserved for call sites that have already proven the operation cannot
/// fail, or that prefer crashing over continuing with a corrupt value.
#[inline]
#[track_caller]
pub fn must<T>(result: ArithmeticResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

/// Checked addition returning an error on overflow or underflow.
#[inline]
pub fn try_add<T: CheckedInt>(a: T, b: T) -> ArithmeticResult<T> {
    a.try_add(b)
}

/// Checked subtraction returning an error on overflow or underflow.
#[inline]
pub fn try_subtract<T: CheckedInt>(a: T, b: T) -> ArithmeticResult<T> {
    a.try_subtract(b)
}

/// Checked multiplication returning an error on overflow or underflow.
#[inline]
pub fn try_multiply<T: CheckedInt>(a: T, b: T) -> ArithmeticResult<T> {
    a.try_multiply(b)
}

/// Checked truncating division returning an error on division by zero or
/// on `MIN / -1`.
#[inline]
pub fn try_divide<T: CheckedInt>(a: T, b: T) -> ArithmeticResult<T> {
    a.try_divide(b)
}

/// Addition that panics instead of wrapping.
///
/// # Panics
/// On overflow or underflow.
#[inline]
#[track_caller]
pub fn add<T: CheckedInt>(a: T, b: T) -> T {
    must(a.try_add(b))
}

/// Subtraction that panics instead of wrapping.
///
/// # Panics
/// On overflow or underflow.
#[inline]
#[track_caller]
pub fn subtract<T: CheckedInt>(a: T, b: T) -> T {
    must(a.try_subtract(b))
}

/// Multiplication that panics instead of wrapping.
///
/// # Panics
/// On overflow or underflow.
#[inline]
#[track_caller]
pub fn multiply<T: CheckedInt>(a: T, b: T) -> T {
    must(a.try_multiply(b))
}

/// Truncating division that panics on failure.
///
/// # Panics
/// On division by zero or signed `MIN / -1`.
#[inline]
#[track_caller]
pub fn divide<T: CheckedInt>(a: T, b: T) -> T {
    must(a.try_divide(b))
}

// ============================================================================
// Tests
// ============================================================================
