// ============================================================================
// Arithmetic Errors
// Failure conditions reported by checked integer arithmetic
// ============================================================================

use std::fmt;

/// The arithmetic operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Infix symbol used in error messages.
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

/// Errors that can occur during checked integer arithmetic.
///
/// Operands are widened to `i128`, which holds every supported integer kind
/// (including `u64::MAX`) without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// Signed result exceeded the type's maximum value
    SignedOverflow { op: Operation, lhs: i128, rhs: i128 },
    /// Signed result fell below the type's minimum value
    SignedUnderflow { op: Operation, lhs: i128, rhs: i128 },
    /// Unsigned result exceeded the type's maximum value
    UnsignedOverflow { op: Operation, lhs: i128, rhs: i128 },
    /// Unsigned result would be negative
    UnsignedUnderflow { op: Operation, lhs: i128, rhs: i128 },
    /// Attempted division by zero
    DivisionByZero { lhs: i128 },
}

impl ArithmeticError {
    /// The operation that produced this error.
    pub const fn operation(&self) -> Operation {
        match self {
            ArithmeticError::SignedOverflow { op, .. }
            | ArithmeticError::SignedUnderflow { op, .. }
            | ArithmeticError::UnsignedOverflow { op, .. }
            | ArithmeticError::UnsignedUnderflow { op, .. } => *op,
            ArithmeticError::DivisionByZero { .. } => Operation::Divide,
        }
    }

    /// Returns true for the overflow variants (signed or unsigned).
    pub const fn is_overflow(&self) -> bool {
        matches!(
            self,
            ArithmeticError::SignedOverflow { .. } | ArithmeticError::UnsignedOverflow { .. }
        )
    }

    /// Returns true for the underflow variants (signed or unsigned).
    pub const fn is_underflow(&self) -> bool {
        matches!(
            self,
            ArithmeticError::SignedUnderflow { .. } | ArithmeticError::UnsignedUnderflow { .. }
        )
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::SignedOverflow { op, lhs, rhs } => write!(
                f,
                "integer overflow: {} {} {} exceeded maximum value",
                lhs,
                op.symbol(),
                rhs
            ),
            ArithmeticError::SignedUnderflow { op, lhs, rhs } => write!(
                f,
                "integer underflow: {} {} {} fell below minimum value",
                lhs,
                op.symbol(),
                rhs
            ),
            ArithmeticError::UnsignedOverflow { op, lhs, rhs } => write!(
                f,
                "unsigned integer overflow: {} {} {} exceeded maximum value",
                lhs,
                op.symbol(),
                rhs
            ),
            ArithmeticError::UnsignedUnderflow { op, lhs, rhs } => write!(
                f,
                "unsigned integer underflow: {} {} {} would be negative",
                lhs,
                op.symbol(),
                rhs
            ),
            ArithmeticError::DivisionByZero { lhs } => {
                write!(f, "division by zero: {} / 0", lhs)
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for checked arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
