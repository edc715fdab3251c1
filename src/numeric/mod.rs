// ============================================================================
// Numeric Module
// Overflow-checked integer arithmetic
// ============================================================================
//
// This module provides:
// - CheckedInt: sealed trait implemented for every fixed-width integer kind
// - try_add/try_subtract/try_multiply/try_divide: Result-returning forms
// - add/subtract/multiply/divide: panicking forms for proven-safe call sites
// - ArithmeticError: failure conditions carrying the operands
//
// Design principles:
// - Nothing wraps: every operation is exact or reports why it is not
// - One monomorphized implementation per integer kind (macro generated)
// - Distinct conditions for signed/unsigned overflow and underflow

mod checked;
mod errors;

pub use checked::{
    add, divide, multiply, must, subtract, try_add, try_divide, try_multiply, try_subtract,
    CheckedInt,
};
pub use errors::{ArithmeticError, ArithmeticResult, Operation};
